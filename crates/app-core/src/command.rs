use crate::constants::MANUAL_STEP;
use glam::Vec3;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    #[inline]
    pub fn unit(self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Y => Vec3::Y,
            Axis::Z => Vec3::Z,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Negative,
    Positive,
}

impl Direction {
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Direction::Negative => -1.0,
            Direction::Positive => 1.0,
        }
    }
}

/// One-shot input recorded by the host and applied at the start of the next tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Click,
    /// Move the selection by one `MANUAL_STEP` along `axis`.
    Nudge { axis: Axis, direction: Direction },
    Seek,
    ToggleParty,
}

impl Command {
    #[inline]
    pub fn from_key(key: &str) -> Option<Self> {
        let nudge = |axis, direction| Some(Command::Nudge { axis, direction });
        match key {
            "w" | "W" => nudge(Axis::X, Direction::Negative),
            "s" | "S" => nudge(Axis::X, Direction::Positive),
            "d" | "D" => nudge(Axis::Z, Direction::Negative),
            "a" | "A" => nudge(Axis::Z, Direction::Positive),
            "q" | "Q" => nudge(Axis::Y, Direction::Positive),
            "e" | "E" => nudge(Axis::Y, Direction::Negative),
            "r" | "R" => Some(Command::Seek),
            "1" => Some(Command::ToggleParty),
            _ => None,
        }
    }

    /// Commands that do nothing without a selection.
    pub fn requires_selection(&self) -> bool {
        matches!(self, Command::Nudge { .. } | Command::Seek)
    }

    #[inline]
    pub fn displacement(&self) -> Option<Vec3> {
        match *self {
            Command::Nudge { axis, direction } => {
                Some(axis.unit() * direction.sign() * MANUAL_STEP)
            }
            _ => None,
        }
    }
}

/// FIFO of pending commands; a handful per frame fits inline.
#[derive(Clone, Debug, Default)]
pub struct CommandQueue {
    pending: SmallVec<[Command; 8]>,
}

impl CommandQueue {
    pub fn push(&mut self, cmd: Command) {
        self.pending.push(cmd);
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Take every pending command in arrival order, leaving the queue empty.
    pub fn drain(&mut self) -> SmallVec<[Command; 8]> {
        std::mem::take(&mut self.pending)
    }
}

use crate::command::{Command, CommandQueue};
use crate::constants::*;
use crate::error::SceneError;
use crate::interaction::{hover_pass, InteractionState};
use crate::party::{idle_pass, party_pass};
use crate::pick::{PointerResolver, RayHit};
use crate::state::Camera;
use crate::walk::{WalkKind, WalkOutcome};
use crate::world::{Lifecycle, ObjectId, VisualMarker, World, WorldObject};
use glam::Vec2;
use rand::prelude::*;

#[derive(Clone, Debug)]
pub struct SessionParams {
    pub grid_half_extent: i32,
    pub grid_spacing: f32,
    pub seed: u64,
}

impl Default for SessionParams {
    fn default() -> Self {
        Self {
            grid_half_extent: GRID_HALF_EXTENT,
            grid_spacing: GRID_SPACING,
            seed: 42,
        }
    }
}

impl SessionParams {
    pub fn validate(&self) -> Result<(), SceneError> {
        if self.grid_half_extent <= 0 {
            return Err(SceneError::EmptyGrid(self.grid_half_extent));
        }
        if !(self.grid_spacing.is_finite() && self.grid_spacing > 0.0) {
            return Err(SceneError::InvalidSpacing(self.grid_spacing));
        }
        Ok(())
    }
}

/// What happened during one tick; handy for the frontend's status logging.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameReport {
    pub tick: u64,
    pub hit: Option<ObjectId>,
    pub selected: Option<ObjectId>,
    pub hovered: usize,
    pub partying: usize,
    pub party_walks_renewed: usize,
    pub seek_finished: bool,
}

/// Owns every piece of mutable interaction state. Input only records pointer
/// position or queues commands; all object writes happen inside [`Session::tick`].
pub struct Session {
    world: World,
    interaction: InteractionState,
    resolver: PointerResolver,
    marker: VisualMarker,
    queue: CommandQueue,
    pointer: Vec2,
    rng: StdRng,
    ticks: u64,
}

impl Session {
    pub fn new(params: SessionParams) -> Result<Self, SceneError> {
        params.validate()?;
        let mut rng = StdRng::seed_from_u64(params.seed);
        let world = World::grid(params.grid_half_extent, params.grid_spacing, &mut rng);
        log::info!(
            "[session] objects={} seed={}",
            world.len(),
            params.seed
        );
        Ok(Self::from_parts(world, rng))
    }

    /// Start from a prebuilt world.
    pub fn with_world(world: World, seed: u64) -> Self {
        Self::from_parts(world, StdRng::seed_from_u64(seed))
    }

    fn from_parts(world: World, rng: StdRng) -> Self {
        Self {
            world,
            interaction: InteractionState::default(),
            resolver: PointerResolver::default(),
            marker: VisualMarker::default(),
            queue: CommandQueue::default(),
            pointer: Vec2::ZERO,
            rng,
            ticks: 0,
        }
    }

    pub fn set_pointer(&mut self, ndc: Vec2) {
        self.pointer = ndc.clamp(Vec2::splat(-1.0), Vec2::splat(1.0));
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    /// Queue a command for the next tick.
    pub fn push(&mut self, cmd: Command) {
        self.queue.push(cmd);
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Apply a command now, against the most recently resolved hit.
    pub fn apply(&mut self, cmd: Command) {
        if cmd.requires_selection() && self.interaction.selected().is_none() {
            log::trace!("ignoring {:?}: nothing selected", cmd);
            return;
        }
        match cmd {
            Command::Click => self
                .interaction
                .click(&mut self.world, self.resolver.current()),
            Command::ToggleParty => {
                self.interaction.toggle_party(&mut self.world);
            }
            Command::Seek => {
                self.interaction.arm_seek(&mut self.world, &mut self.rng);
            }
            Command::Nudge { .. } => {
                if let Some(delta) = cmd.displacement() {
                    self.interaction.nudge(&mut self.world, delta);
                }
            }
        }
    }

    /// Run one frame: commands, ray, hover, party or idle, seek, spin.
    pub fn tick(&mut self, camera: &Camera) -> FrameReport {
        for cmd in self.queue.drain() {
            self.apply(cmd);
        }

        let ray = camera.ray_from_ndc(self.pointer);
        self.resolver.resolve(&self.world, &ray);
        hover_pass(
            &mut self.world,
            &self.resolver,
            &mut self.marker,
            self.interaction.party_on(),
        );

        let party_walks_renewed = if self.interaction.party_on() {
            party_pass(&mut self.world, &mut self.rng)
        } else {
            idle_pass(&mut self.world);
            0
        };

        let seek_finished = self.step_seek();
        self.spin_selected();

        self.ticks += 1;
        FrameReport {
            tick: self.ticks,
            hit: self.resolver.current().map(|h| h.id),
            selected: self.interaction.selected(),
            hovered: self.world.count(Lifecycle::Active),
            partying: self.world.count(Lifecycle::Partying),
            party_walks_renewed,
            seek_finished,
        }
    }

    fn step_seek(&mut self) -> bool {
        let Some(obj) = self.interaction.selected().and_then(|id| self.world.get_mut(id)) else {
            return false;
        };
        let Some(walk) = obj.walk.filter(|w| w.kind == WalkKind::Seek) else {
            return false;
        };
        if walk.step(&mut obj.position) == WalkOutcome::Complete {
            obj.walk = None;
            log::debug!("{:?} reached its seek target", obj.id);
            return true;
        }
        false
    }

    fn spin_selected(&mut self) {
        if let Some(obj) = self.interaction.selected().and_then(|id| self.world.get_mut(id)) {
            if obj.is(Lifecycle::Selected) {
                obj.rotation += Vec2::splat(SELECTED_SPIN_PER_TICK);
            }
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn objects(&self) -> impl Iterator<Item = &WorldObject> {
        self.world.iter()
    }

    pub fn object(&self, id: ObjectId) -> Option<&WorldObject> {
        self.world.get(id)
    }

    pub fn marker(&self) -> &VisualMarker {
        &self.marker
    }

    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    pub fn hit(&self) -> Option<RayHit> {
        self.resolver.current()
    }

    pub fn previous_hit(&self) -> Option<RayHit> {
        self.resolver.previous()
    }

    pub fn selected(&self) -> Option<ObjectId> {
        self.interaction.selected()
    }

    pub fn party_on(&self) -> bool {
        self.interaction.party_on()
    }

    pub fn seek_armed(&self) -> bool {
        self.interaction.seek_armed(&self.world)
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

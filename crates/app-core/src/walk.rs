//! Axis-independent random walk toward a target point.
//!
//! Each axis moves a fixed step per tick until it is within the tolerance band
//! of its target. The walk completes on the first tick where all three axes are
//! settled at once.

use crate::constants::*;
use glam::Vec3;
use rand::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WalkKind {
    /// Selected object heading for a random point; ends when settled.
    Seek,
    /// Party member; a fresh target is sampled on completion.
    Party,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Walk {
    pub kind: WalkKind,
    pub target: Vec3,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WalkOutcome {
    Moving,
    Complete,
}

/// Advance one axis; returns true if the axis is settled.
#[inline]
fn step_axis(current: &mut f32, target: f32, step: f32, tolerance: f32) -> bool {
    if *current > target + tolerance {
        *current -= step;
        false
    } else if *current < target - tolerance {
        *current += step;
        false
    } else {
        true
    }
}

/// Move `position` one tick toward `target`.
pub fn step_toward(position: &mut Vec3, target: Vec3, step: f32, tolerance: f32) -> WalkOutcome {
    let settled = [
        step_axis(&mut position.x, target.x, step, tolerance),
        step_axis(&mut position.y, target.y, step, tolerance),
        step_axis(&mut position.z, target.z, step, tolerance),
    ];
    if settled.iter().all(|&s| s) {
        WalkOutcome::Complete
    } else {
        WalkOutcome::Moving
    }
}

impl Walk {
    pub fn seek(rng: &mut impl Rng) -> Self {
        Self {
            kind: WalkKind::Seek,
            target: sample_target(rng, &SEEK_VOLUME),
        }
    }

    pub fn party(rng: &mut impl Rng) -> Self {
        Self {
            kind: WalkKind::Party,
            target: sample_target(rng, &PARTY_VOLUME),
        }
    }

    #[inline]
    pub fn step(&self, position: &mut Vec3) -> WalkOutcome {
        step_toward(position, self.target, WALK_STEP, WALK_TOLERANCE)
    }
}

/// Box that random targets are drawn from.
#[derive(Clone, Copy, Debug)]
pub struct TargetVolume {
    pub horizontal: f32,
    pub height_min: f32,
    pub height_max: f32,
}

pub const SEEK_VOLUME: TargetVolume = TargetVolume {
    horizontal: SEEK_HORIZONTAL_RANGE,
    height_min: SEEK_HEIGHT_MIN,
    height_max: SEEK_HEIGHT_MAX,
};

pub const PARTY_VOLUME: TargetVolume = TargetVolume {
    horizontal: PARTY_HORIZONTAL_RANGE,
    height_min: PARTY_HEIGHT_MIN,
    height_max: PARTY_HEIGHT_MAX,
};

#[inline]
fn signed_unit(rng: &mut impl Rng) -> f32 {
    let magnitude = rng.gen::<f32>();
    if rng.gen_bool(0.5) {
        magnitude
    } else {
        -magnitude
    }
}

/// Integer-valued point: X/Z in `[-h, h]`, Y in `[min, max]`.
pub fn sample_target(rng: &mut impl Rng, volume: &TargetVolume) -> Vec3 {
    let x = (signed_unit(rng) * volume.horizontal).ceil();
    let y = (volume.height_min + rng.gen::<f32>() * (volume.height_max - volume.height_min)).ceil();
    let z = (signed_unit(rng) * volume.horizontal).ceil();
    Vec3::new(x, y, z)
}

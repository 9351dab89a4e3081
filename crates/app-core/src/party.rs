//! Group-wide passes run once per tick: party motion while the mode is on,
//! otherwise the idle reset that brings objects back to rest.

use crate::constants::*;
use crate::walk::{Walk, WalkKind, WalkOutcome};
use crate::world::{Lifecycle, World};
use glam::Vec3;
use rand::prelude::*;

#[inline]
fn party_drift(rng: &mut impl Rng) -> f32 {
    if rng.gen_bool(PARTY_FLOURISH_CHANCE) {
        rng.gen::<f32>() * PARTY_DRIFT_FLOURISH_MAX
    } else {
        PARTY_DRIFT_BASE
    }
}

/// Returns how many walks completed (and were renewed) this tick.
pub fn party_pass(world: &mut World, rng: &mut impl Rng) -> usize {
    let mut renewed = 0;
    for obj in world.iter_mut() {
        if !obj.is(Lifecycle::Partying) {
            obj.lifecycle = Lifecycle::Partying;
            obj.color = obj.base_color;
            obj.walk = Some(Walk::party(rng));
        }

        let current = obj.walk;
        match current {
            Some(walk) if walk.kind == WalkKind::Party => {
                if walk.step(&mut obj.position) == WalkOutcome::Complete {
                    obj.walk = Some(Walk::party(rng));
                    renewed += 1;
                }
            }
            _ => obj.walk = Some(Walk::party(rng)),
        }

        let drift = party_drift(rng);
        obj.color = Vec3::new(rng.gen(), rng.gen(), rng.gen());
        obj.rotation.x += drift;
        obj.rotation.y += drift;
    }
    renewed
}

/// End any party, restore base colors and let rotation decay toward zero.
/// The selected object is left alone.
pub fn idle_pass(world: &mut World) {
    for obj in world.iter_mut() {
        if obj.is(Lifecycle::Partying) {
            obj.lifecycle = Lifecycle::Inactive;
            obj.walk = None;
        }
        if obj.is(Lifecycle::Selected) {
            continue;
        }
        if obj.is(Lifecycle::Inactive) {
            obj.color = obj.base_color;
        }
        if obj.rotation.x > 0.0 || obj.rotation.y > 0.0 {
            obj.rotation -= obj.rotation / ROTATION_DECAY_DIVISOR;
        }
    }
}

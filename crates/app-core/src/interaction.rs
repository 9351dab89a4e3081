//! Per-object lifecycle transitions triggered by hover, click and party toggles.

use crate::constants::*;
use crate::pick::{PointerResolver, RayHit};
use crate::walk::{Walk, WalkKind};
use crate::world::{Lifecycle, ObjectId, VisualMarker, World};
use glam::Vec3;
use rand::Rng;

/// Session-wide interaction flags. At most one object is selected, and the
/// seek walk lives on that object so clearing the selection clears it too.
#[derive(Clone, Debug, Default)]
pub struct InteractionState {
    selected: Option<ObjectId>,
    party_on: bool,
}

impl InteractionState {
    pub fn selected(&self) -> Option<ObjectId> {
        self.selected
    }

    pub fn party_on(&self) -> bool {
        self.party_on
    }

    pub fn seek_target(&self, world: &World) -> Option<Vec3> {
        let obj = world.get(self.selected?)?;
        match obj.walk {
            Some(Walk {
                kind: WalkKind::Seek,
                target,
            }) => Some(target),
            _ => None,
        }
    }

    pub fn seek_armed(&self, world: &World) -> bool {
        self.seek_target(world).is_some()
    }

    fn select(&mut self, world: &mut World, id: ObjectId) {
        if let Some(obj) = world.get_mut(id) {
            obj.lifecycle = Lifecycle::Selected;
            obj.color = rgb_hex(SELECTED_COLOR);
            self.selected = Some(id);
            log::debug!("selected {:?}", id);
        }
    }

    /// Always lands on `Inactive`; the next hover pass re-promotes if still under the ray.
    pub fn deselect(&mut self, world: &mut World) -> Option<ObjectId> {
        let id = self.selected.take()?;
        if let Some(obj) = world.get_mut(id) {
            obj.lifecycle = Lifecycle::Inactive;
            obj.color = obj.base_color;
            obj.walk = None;
        }
        log::debug!("deselected {:?}", id);
        Some(id)
    }

    pub fn click(&mut self, world: &mut World, hit: Option<RayHit>) {
        let hit_id = hit.map(|h| h.id);
        if let Some(prev) = self.deselect(world) {
            if hit_id == Some(prev) {
                return;
            }
        }
        let Some(id) = hit_id else {
            return;
        };
        let selectable = world
            .get(id)
            .is_some_and(|o| matches!(o.lifecycle, Lifecycle::Inactive | Lifecycle::Active));
        if selectable {
            self.select(world, id);
        }
    }

    /// Flip party mode. Turning it on hands the selection over to the party.
    pub fn toggle_party(&mut self, world: &mut World) -> bool {
        self.party_on = !self.party_on;
        if self.party_on {
            self.deselect(world);
        }
        log::info!("party mode {}", if self.party_on { "on" } else { "off" });
        self.party_on
    }

    pub fn nudge(&self, world: &mut World, delta: Vec3) -> bool {
        let Some(obj) = self.selected.and_then(|id| world.get_mut(id)) else {
            return false;
        };
        obj.position += delta;
        true
    }

    /// Snap the selection to integer coordinates and give it a fresh seek target.
    pub fn arm_seek(&self, world: &mut World, rng: &mut impl Rng) -> Option<Vec3> {
        let obj = self.selected.and_then(|id| world.get_mut(id))?;
        obj.position = obj.position.floor();
        let walk = Walk::seek(rng);
        obj.walk = Some(walk);
        log::debug!(
            "{:?} seeking ({:.0},{:.0},{:.0})",
            obj.id,
            walk.target.x,
            walk.target.y,
            walk.target.z
        );
        Some(walk.target)
    }
}

/// Promote the current hit to `Active`, demote the object the ray just left,
/// and place or park the marker. While partying nothing is hoverable.
pub fn hover_pass(
    world: &mut World,
    resolver: &PointerResolver,
    marker: &mut VisualMarker,
    party_on: bool,
) {
    if let Some(obj) = resolver.lost().and_then(|id| world.get_mut(id)) {
        if obj.is(Lifecycle::Active) {
            obj.lifecycle = Lifecycle::Inactive;
        }
    }

    let Some(hit) = resolver.current().filter(|_| !party_on) else {
        marker.park();
        return;
    };
    let Some(obj) = world.get_mut(hit.id) else {
        marker.park();
        return;
    };
    match obj.lifecycle {
        Lifecycle::Selected => marker.show_at(hit.point),
        Lifecycle::Inactive | Lifecycle::Active => {
            obj.lifecycle = Lifecycle::Active;
            obj.color = rgb_hex(HOVER_COLOR);
            marker.show_at(hit.point);
        }
        Lifecycle::Partying => marker.park(),
    }
}

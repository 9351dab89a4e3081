//! Interactive objects and the group that owns them.

use crate::constants::*;
use crate::walk::Walk;
use fnv::FnvHashMap;
use glam::{Vec2, Vec3};
use rand::prelude::*;

/// Stable handle for a [`WorldObject`]; never reused within a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Lifecycle {
    #[default]
    Inactive,
    /// Hovered, not selected.
    Active,
    Selected,
    Partying,
}

#[derive(Clone, Debug)]
pub struct WorldObject {
    pub id: ObjectId,
    pub position: Vec3,
    /// Only x/y are animated.
    pub rotation: Vec2,
    pub base_color: Vec3,
    pub color: Vec3,
    pub lifecycle: Lifecycle,
    /// Present only while a seek or party walk is running.
    pub walk: Option<Walk>,
}

impl WorldObject {
    pub fn new(id: ObjectId, position: Vec3, base_color: Vec3) -> Self {
        Self {
            id,
            position,
            rotation: Vec2::ZERO,
            base_color,
            color: base_color,
            lifecycle: Lifecycle::Inactive,
            walk: None,
        }
    }

    #[inline]
    pub fn is(&self, lifecycle: Lifecycle) -> bool {
        self.lifecycle == lifecycle
    }
}

/// Ordered collection of interactive objects with O(1) handle lookup.
#[derive(Clone, Debug, Default)]
pub struct World {
    objects: Vec<WorldObject>,
    index: FnvHashMap<ObjectId, usize>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scatter one object per grid cell in `[-half, half)²`, jittered inside the cell.
    pub fn grid(half_extent: i32, spacing: f32, rng: &mut impl Rng) -> Self {
        let mut world = Self::new();
        let base = rgb_hex(BASE_COLOR);
        for gx in -half_extent..half_extent {
            for gz in -half_extent..half_extent {
                let position = Vec3::new(
                    rng.gen::<f32>() + gx as f32 * spacing,
                    rng.gen::<f32>() * SPAWN_HEIGHT_SPAN + SPAWN_HEIGHT_MIN,
                    rng.gen::<f32>() + gz as f32 * spacing,
                );
                world.spawn(position, base);
            }
        }
        world
    }

    pub fn spawn(&mut self, position: Vec3, base_color: Vec3) -> ObjectId {
        let id = ObjectId(self.objects.len() as u32);
        self.index.insert(id, self.objects.len());
        self.objects.push(WorldObject::new(id, position, base_color));
        id
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn get(&self, id: ObjectId) -> Option<&WorldObject> {
        self.index.get(&id).map(|&i| &self.objects[i])
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut WorldObject> {
        match self.index.get(&id) {
            Some(&i) => self.objects.get_mut(i),
            None => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &WorldObject> {
        self.objects.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut WorldObject> {
        self.objects.iter_mut()
    }

    pub fn count(&self, lifecycle: Lifecycle) -> usize {
        self.objects.iter().filter(|o| o.is(lifecycle)).count()
    }
}

/// Small indicator parked off-scene unless the hovered/selected hit is under the pointer.
#[derive(Clone, Debug)]
pub struct VisualMarker {
    pub position: Vec3,
    pub visible: bool,
}

impl Default for VisualMarker {
    fn default() -> Self {
        Self {
            position: marker_parked_vec3(),
            visible: false,
        }
    }
}

impl VisualMarker {
    pub fn show_at(&mut self, point: Vec3) {
        self.visible = true;
        self.position = point;
    }

    pub fn park(&mut self) {
        self.visible = false;
        self.position = marker_parked_vec3();
    }
}

use crate::constants::PICK_SPHERE_RADIUS;
use crate::state::Ray;
use crate::world::{ObjectId, World};
use glam::Vec3;

#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayHit {
    pub id: ObjectId,
    pub point: Vec3,
    pub distance: f32,
}

/// Nearest object along `ray`, or `None` when nothing is intersected.
pub fn nearest_hit(world: &World, ray: &Ray) -> Option<RayHit> {
    let mut best: Option<RayHit> = None;
    for obj in world.iter() {
        let Some(t) = ray_sphere(ray.origin, ray.dir, obj.position, PICK_SPHERE_RADIUS) else {
            continue;
        };
        if best.map_or(true, |b| t < b.distance) {
            best = Some(RayHit {
                id: obj.id,
                point: ray.at(t),
                distance: t,
            });
        }
    }
    best
}

/// Keeps this tick's hit next to the previous tick's, so that the transition
/// to "no hit" or to a different object can be observed.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerResolver {
    current: Option<RayHit>,
    previous: Option<RayHit>,
}

impl PointerResolver {
    pub fn resolve(&mut self, world: &World, ray: &Ray) -> Option<RayHit> {
        self.previous = self.current;
        self.current = nearest_hit(world, ray);
        self.current
    }

    pub fn current(&self) -> Option<RayHit> {
        self.current
    }

    pub fn previous(&self) -> Option<RayHit> {
        self.previous
    }

    /// Object hit last tick that is no longer the nearest hit.
    pub fn lost(&self) -> Option<ObjectId> {
        let prev = self.previous?.id;
        match self.current {
            Some(cur) if cur.id == prev => None,
            _ => Some(prev),
        }
    }
}

#![allow(dead_code)]

use app_core::{rgb_hex, Camera, ObjectId, Session, World, BASE_COLOR};
use glam::{Vec2, Vec3};

/// Camera on +Z looking at the origin with a square viewport.
pub fn test_camera() -> Camera {
    Camera {
        eye: Vec3::new(0.0, 0.0, 20.0),
        target: Vec3::ZERO,
        up: Vec3::Y,
        aspect: 1.0,
        fovy_radians: 60f32.to_radians(),
        znear: 0.1,
        zfar: 100.0,
    }
}

pub fn ndc_of(camera: &Camera, p: Vec3) -> Vec2 {
    camera.view_proj().project_point3(p).truncate()
}

/// Pointer position with nothing under it.
pub const EMPTY_SPACE: Vec2 = Vec2::new(0.0, 0.9);

/// Three objects on the X axis: A at the origin, B at +6, C at -6.
pub fn three_in_a_row() -> (Session, [ObjectId; 3]) {
    let mut world = World::new();
    let base = rgb_hex(BASE_COLOR);
    let a = world.spawn(Vec3::ZERO, base);
    let b = world.spawn(Vec3::new(6.0, 0.0, 0.0), base);
    let c = world.spawn(Vec3::new(-6.0, 0.0, 0.0), base);
    (Session::with_world(world, 7), [a, b, c])
}

pub fn hover(session: &mut Session, camera: &Camera, p: Vec3) {
    session.set_pointer(ndc_of(camera, p));
    session.tick(camera);
}

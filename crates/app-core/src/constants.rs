use glam::Vec3;

// Shared interaction/animation tuning constants used by the core and the frontend.

// Scene layout
pub const GRID_HALF_EXTENT: i32 = 8; // grid spans [-8, 8) on X and Z
pub const GRID_SPACING: f32 = 5.0; // world units between neighbouring grid cells
pub const SPAWN_HEIGHT_MIN: f32 = 2.0;
pub const SPAWN_HEIGHT_SPAN: f32 = 4.0;

// Interaction
pub const PICK_SPHERE_RADIUS: f32 = 1.0; // circumradius of the unit dodecahedron
pub const MANUAL_STEP: f32 = 0.4; // per key press
pub const SELECTED_SPIN_PER_TICK: f32 = 0.05; // radians on x and y
pub const ROTATION_DECAY_DIVISOR: f32 = 30.0;

// Random walk
pub const WALK_STEP: f32 = 0.1;
pub const WALK_TOLERANCE: f32 = 1.0;

pub const SEEK_HORIZONTAL_RANGE: f32 = 30.0;
pub const SEEK_HEIGHT_MIN: f32 = 3.0;
pub const SEEK_HEIGHT_MAX: f32 = 6.0;

pub const PARTY_HORIZONTAL_RANGE: f32 = 50.0;
pub const PARTY_HEIGHT_MIN: f32 = 3.0;
pub const PARTY_HEIGHT_MAX: f32 = 60.0;

// Party rotation drift: usually a small constant, sometimes a flourish
pub const PARTY_DRIFT_BASE: f32 = 0.02;
pub const PARTY_DRIFT_FLOURISH_MAX: f32 = 0.1;
pub const PARTY_FLOURISH_CHANCE: f64 = 0.3;

// Palette
pub const BASE_COLOR: u32 = 0x808080;
pub const HOVER_COLOR: u32 = 0xff6600;
pub const SELECTED_COLOR: u32 = 0x00ffff;
pub const MARKER_COLOR: u32 = 0xffffff;

// Marker
pub const MARKER_RADIUS: f32 = 0.2;
pub const MARKER_PARKED: [f32; 3] = [0.0, -10.0, 0.0];

#[inline]
pub fn marker_parked_vec3() -> Vec3 {
    Vec3::from(MARKER_PARKED)
}

/// Convert a packed `0xRRGGBB` value into linear-ish RGB components in [0, 1].
#[inline]
pub fn rgb_hex(hex: u32) -> Vec3 {
    Vec3::new(
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    )
}

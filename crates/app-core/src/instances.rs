use crate::constants::*;
use crate::frame::Session;
use crate::state::Camera;

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    pub pos: [f32; 3],
    pub scale: f32,
    pub color: [f32; 4],
    pub spin: f32,
    pub _pad: [f32; 3],
}

impl InstanceData {
    fn new(pos: glam::Vec3, scale: f32, color: glam::Vec3, spin: f32) -> Self {
        Self {
            pos: pos.to_array(),
            scale,
            color: color.extend(1.0).to_array(),
            spin,
            _pad: [0.0; 3],
        }
    }
}

/// Fill `out` with one billboard per object plus the marker when visible,
/// sorted far to near so alpha blending composes without a depth buffer.
pub fn build_instances(session: &Session, camera: &Camera, out: &mut Vec<InstanceData>) {
    out.clear();
    for obj in session.objects() {
        out.push(InstanceData::new(
            obj.position,
            PICK_SPHERE_RADIUS * 2.0,
            obj.color,
            obj.rotation.y,
        ));
    }
    let marker = session.marker();
    if marker.visible {
        out.push(InstanceData::new(
            marker.position,
            MARKER_RADIUS * 2.0,
            rgb_hex(MARKER_COLOR),
            0.0,
        ));
    }
    let eye = camera.eye;
    out.sort_by(|a, b| {
        let da = eye.distance_squared(glam::Vec3::from(a.pos));
        let db = eye.distance_squared(glam::Vec3::from(b.pos));
        db.total_cmp(&da)
    });
}

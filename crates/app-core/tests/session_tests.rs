mod common;

use app_core::{
    build_instances, Camera, Command, Lifecycle, SceneError, Session, SessionParams,
    SELECTED_SPIN_PER_TICK, WALK_STEP, WALK_TOLERANCE,
};
use common::*;
use glam::Vec3;

#[test]
fn default_session_builds_the_grid() {
    let session = Session::new(SessionParams::default()).expect("session");
    assert_eq!(session.world().len(), 256);
    assert!(session.objects().all(|o| o.lifecycle == Lifecycle::Inactive));
    assert!(session
        .objects()
        .all(|o| (2.0..=6.0).contains(&o.position.y)));
    assert!(!session.marker().visible);
}

#[test]
fn same_seed_same_layout() {
    let a = Session::new(SessionParams::default()).unwrap();
    let b = Session::new(SessionParams::default()).unwrap();
    let pa: Vec<Vec3> = a.objects().map(|o| o.position).collect();
    let pb: Vec<Vec3> = b.objects().map(|o| o.position).collect();
    assert_eq!(pa, pb);
}

#[test]
fn invalid_params_are_rejected() {
    let empty = SessionParams {
        grid_half_extent: 0,
        ..SessionParams::default()
    };
    assert_eq!(Session::new(empty).err(), Some(SceneError::EmptyGrid(0)));

    let spacing = SessionParams {
        grid_spacing: -1.0,
        ..SessionParams::default()
    };
    assert_eq!(
        Session::new(spacing).err(),
        Some(SceneError::InvalidSpacing(-1.0))
    );
}

#[test]
fn default_camera_sees_part_of_the_grid() {
    let camera = Camera::default();
    let mut session = Session::new(SessionParams::default()).unwrap();
    let target = session.objects().next().unwrap().position;
    session.set_pointer(ndc_of(&camera, target));
    let report = session.tick(&camera);
    assert!(report.hit.is_some());
    assert_eq!(report.hovered, 1);
}

#[test]
fn select_seek_converge_and_keep_spinning() {
    let camera = test_camera();
    let (mut session, [a, _, _]) = three_in_a_row();
    hover(&mut session, &camera, Vec3::ZERO);
    assert_eq!(session.object(a).unwrap().lifecycle, Lifecycle::Active);

    session.push(Command::Click);
    session.tick(&camera);
    assert_eq!(session.object(a).unwrap().lifecycle, Lifecycle::Selected);

    session.push(Command::Seek);
    session.tick(&camera);
    let target = session.interaction().seek_target(session.world()).expect("armed");

    let start = session.object(a).unwrap().position;
    let bound = ((start - target).abs().max_element() / WALK_STEP).ceil() as usize + 1;
    let mut finished = false;
    for _ in 0..bound {
        if session.tick(&camera).seek_finished {
            finished = true;
            break;
        }
    }
    assert!(finished);
    assert!(!session.seek_armed());
    let end = session.object(a).unwrap().position;
    assert!((end - target).abs().max_element() <= WALK_TOLERANCE);
    assert_eq!(session.selected(), Some(a));

    let mut last = session.object(a).unwrap().rotation;
    for _ in 0..10 {
        session.tick(&camera);
        let rot = session.object(a).unwrap().rotation;
        assert!((rot.x - last.x - SELECTED_SPIN_PER_TICK).abs() < 1e-4);
        assert!((rot.y - last.y - SELECTED_SPIN_PER_TICK).abs() < 1e-4);
        assert_eq!(session.object(a).unwrap().position, end);
        last = rot;
    }
}

#[test]
fn deselect_clears_seek() {
    let camera = test_camera();
    let (mut session, _) = three_in_a_row();
    hover(&mut session, &camera, Vec3::ZERO);
    session.apply(Command::Click);
    session.apply(Command::Seek);
    assert!(session.seek_armed());

    session.set_pointer(EMPTY_SPACE);
    session.tick(&camera);
    session.apply(Command::Click);
    assert!(session.selected().is_none());
    assert!(!session.seek_armed());
}

#[test]
fn instances_cover_objects_and_visible_marker() {
    let camera = test_camera();
    let (mut session, _) = three_in_a_row();
    let mut out = Vec::new();

    session.set_pointer(EMPTY_SPACE);
    session.tick(&camera);
    build_instances(&session, &camera, &mut out);
    assert_eq!(out.len(), 3);

    hover(&mut session, &camera, Vec3::ZERO);
    build_instances(&session, &camera, &mut out);
    assert_eq!(out.len(), 4);

    let dist = |i: &app_core::InstanceData| camera.eye.distance(Vec3::from(i.pos));
    assert!(out.windows(2).all(|w| dist(&w[0]) >= dist(&w[1])));
}

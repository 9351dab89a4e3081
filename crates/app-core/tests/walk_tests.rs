use app_core::{
    sample_target, step_toward, Walk, WalkKind, WalkOutcome, PARTY_VOLUME, SEEK_VOLUME,
    WALK_STEP, WALK_TOLERANCE,
};
use glam::Vec3;
use rand::prelude::*;

fn run_to_completion(mut pos: Vec3, target: Vec3) -> (Vec3, usize) {
    let d = (pos - target).abs().max_element();
    let bound = (d / WALK_STEP).ceil() as usize + 1;
    for tick in 1..=bound {
        if step_toward(&mut pos, target, WALK_STEP, WALK_TOLERANCE) == WalkOutcome::Complete {
            return (pos, tick);
        }
    }
    panic!("walk from distance {d} did not settle within {bound} ticks");
}

#[test]
fn already_within_tolerance_completes_immediately() {
    let mut pos = Vec3::new(0.5, -0.5, 1.0);
    let out = step_toward(&mut pos, Vec3::ZERO, WALK_STEP, WALK_TOLERANCE);
    assert_eq!(out, WalkOutcome::Complete);
    assert_eq!(pos, Vec3::new(0.5, -0.5, 1.0));
}

#[test]
fn axes_move_independently_by_one_step() {
    let mut pos = Vec3::new(10.0, 0.0, -10.0);
    let out = step_toward(&mut pos, Vec3::new(0.0, 0.5, 0.0), WALK_STEP, WALK_TOLERANCE);
    assert_eq!(out, WalkOutcome::Moving);
    assert!((pos.x - 9.9).abs() < 1e-5);
    assert_eq!(pos.y, 0.0);
    assert!((pos.z + 9.9).abs() < 1e-5);
}

#[test]
fn walk_converges_within_bound_and_lands_in_band() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..200 {
        let start = Vec3::new(
            rng.gen_range(-60.0..60.0),
            rng.gen_range(-5.0..70.0),
            rng.gen_range(-60.0..60.0),
        );
        let target = sample_target(&mut rng, &PARTY_VOLUME);
        let (end, _) = run_to_completion(start, target);
        let diff = (end - target).abs();
        assert!(diff.max_element() <= WALK_TOLERANCE, "{end:?} vs {target:?}");
    }
}

#[test]
fn seek_targets_stay_inside_seek_volume() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..500 {
        let t = sample_target(&mut rng, &SEEK_VOLUME);
        assert!((-30.0..=30.0).contains(&t.x));
        assert!((-30.0..=30.0).contains(&t.z));
        assert!((3.0..=6.0).contains(&t.y));
        assert_eq!(t, t.round());
    }
}

#[test]
fn party_targets_stay_inside_party_volume() {
    let mut rng = StdRng::seed_from_u64(12);
    let mut saw_negative = false;
    let mut saw_positive = false;
    for _ in 0..500 {
        let t = sample_target(&mut rng, &PARTY_VOLUME);
        assert!((-50.0..=50.0).contains(&t.x));
        assert!((-50.0..=50.0).contains(&t.z));
        assert!((3.0..=60.0).contains(&t.y));
        saw_negative |= t.x < 0.0;
        saw_positive |= t.x > 0.0;
    }
    assert!(saw_negative && saw_positive);
}

#[test]
fn walk_constructors_tag_their_kind() {
    let mut rng = StdRng::seed_from_u64(1);
    assert_eq!(Walk::seek(&mut rng).kind, WalkKind::Seek);
    assert_eq!(Walk::party(&mut rng).kind, WalkKind::Party);
}

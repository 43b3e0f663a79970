use tabletalk_core::{RngState, WheelSelector};

fn normalized(degrees: f64) -> f64 {
    let mut angle = degrees % 360.0;
    if angle < 0.0 {
        angle += 360.0;
    }
    angle
}

#[test]
fn slice_centers_split_the_wheel_evenly() {
    assert_eq!(WheelSelector::slice_center(0, 5), -54.0);
    assert_eq!(WheelSelector::slice_center(2, 5), 90.0);
    assert_eq!(WheelSelector::slice_center(4, 5), 234.0);
}

#[test]
fn spin_index_is_always_in_bounds() {
    let mut rng = RngState::from_seed(101);
    let mut wheel = WheelSelector::default();
    for _ in 0..1_000 {
        let outcome = wheel.spin(5, 6, &mut rng).expect("spin");
        assert!(outcome.index < 5);
    }
}

#[test]
fn spin_indices_are_roughly_uniform() {
    let mut rng = RngState::from_seed(7);
    let mut wheel = WheelSelector::default();
    let mut counts = [0usize; 5];
    for _ in 0..10_000 {
        let outcome = wheel.spin(5, 6, &mut rng).expect("spin");
        counts[outcome.index] += 1;
    }
    for count in counts {
        assert!((1600..=2400).contains(&count), "skewed counts: {counts:?}");
    }
}

#[test]
fn every_spin_travels_forward_by_more_than_five_turns() {
    let mut rng = RngState::from_seed(11);
    let mut wheel = WheelSelector::default();
    let mut previous = wheel.rotation();
    for _ in 0..200 {
        let outcome = wheel.spin(5, 6, &mut rng).expect("spin");
        assert!(outcome.final_rotation - previous > 5.0 * 360.0);
        assert_eq!(outcome.final_rotation, wheel.rotation());
        previous = outcome.final_rotation;
    }
}

#[test]
fn rotation_delta_always_matches_the_chosen_slice() {
    let mut rng = RngState::from_seed(99);
    let mut wheel = WheelSelector::default();
    let mut previous = wheel.rotation();
    for _ in 0..50 {
        let outcome = wheel.spin(5, 6, &mut rng).expect("spin");
        let center = WheelSelector::slice_center(outcome.index, 5);
        let delta = outcome.final_rotation - previous;
        assert_eq!(delta, 6.0 * 360.0 - center);
        previous = outcome.final_rotation;
    }
}

#[test]
fn first_spin_lands_the_chosen_slice_under_the_pointer() {
    for seed in 0..20 {
        let mut rng = RngState::from_seed(seed);
        let mut wheel = WheelSelector::default();
        let outcome = wheel.spin(5, 6, &mut rng).expect("spin");
        let center = WheelSelector::slice_center(outcome.index, 5);
        let landing = normalized(center + outcome.final_rotation);
        assert!(landing.abs() < 1e-9 || (360.0 - landing).abs() < 1e-9);
    }
}

#[test]
fn empty_wheel_cannot_spin() {
    let mut rng = RngState::from_seed(1);
    let mut wheel = WheelSelector::default();
    assert!(wheel.spin(0, 6, &mut rng).is_none());
    assert_eq!(wheel.rotation(), 0.0);
}

#[test]
fn different_lengths_keep_the_index_in_range() {
    let mut rng = RngState::from_seed(5);
    let mut wheel = WheelSelector::default();
    for len in 1..=8 {
        for _ in 0..100 {
            let outcome = wheel.spin(len, 6, &mut rng).expect("spin");
            assert!(outcome.index < len);
        }
    }
}

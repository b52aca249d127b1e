use super::*;

fn rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

// =============================================================
// Zero ticks
// =============================================================

#[test]
fn advance_with_zero_ticks_returns_initial_value() {
    let mut r = rng(1);
    for initial in [95.0, 97.3, 99.9] {
        assert_eq!(advance(initial, AI_ACCURACY, 0, &mut r), initial);
    }
}

// =============================================================
// Clamp invariant
// =============================================================

#[test]
fn walk_never_leaves_bounds_for_any_seed() {
    for bounds in [AI_ACCURACY, ENERGY, STRESS, FOCUS, SLEEP] {
        for seed in 0..64 {
            let mut r = rng(seed);
            let mut value = (bounds.lo + bounds.hi) / 2.0;
            for _ in 0..500 {
                value = random_walk(value, bounds, &mut r);
                assert!(value >= bounds.lo && value <= bounds.hi, "{value} escaped {bounds:?}");
            }
        }
    }
}

#[test]
fn walk_pulls_out_of_range_start_back_into_bounds() {
    let mut r = rng(7);
    assert!(random_walk(150.0, ENERGY, &mut r) <= ENERGY.hi);
    assert!(random_walk(-20.0, ENERGY, &mut r) >= ENERGY.lo);
}

#[test]
fn step_moves_at_most_max_delta_inside_bounds() {
    let bounds = MetricBounds::new(0.0, 1000.0, 2.5);
    let mut r = rng(42);
    let mut value = 500.0;
    for _ in 0..1000 {
        let next = random_walk(value, bounds, &mut r);
        assert!((next - value).abs() <= 2.5 + 1e-9);
        value = next;
    }
}

#[test]
fn zero_delta_only_clamps() {
    let bounds = MetricBounds::new(10.0, 20.0, 0.0);
    let mut r = rng(3);
    assert_eq!(random_walk(15.0, bounds, &mut r), 15.0);
    assert_eq!(random_walk(25.0, bounds, &mut r), 20.0);
}

#[test]
fn nan_input_clamps_to_lower_bound() {
    let mut r = rng(9);
    assert_eq!(random_walk(f64::NAN, MetricBounds::new(1.0, 2.0, 0.0), &mut r), 1.0);
}

#[test]
fn same_seed_gives_same_walk() {
    let a = advance(97.0, AI_ACCURACY, 25, &mut rng(11));
    let b = advance(97.0, AI_ACCURACY, 25, &mut rng(11));
    assert_eq!(a, b);
}

// =============================================================
// Redraw
// =============================================================

#[test]
fn redraw_count_stays_below_upper() {
    let mut r = rng(5);
    for _ in 0..1000 {
        assert!(redraw_count(&mut r, 5) < 5);
    }
    assert_eq!(redraw_count(&mut r, 0), 0);
}

// =============================================================
// Formatting
// =============================================================

#[test]
fn format_percent_uses_one_decimal() {
    assert_eq!(format_percent(97.84), "97.8%");
    assert_eq!(format_percent(99.9), "99.9%");
}

#[test]
fn whole_percent_rounds_and_clamps() {
    assert_eq!(whole_percent(84.6), 85);
    assert_eq!(whole_percent(-3.0), 0);
    assert_eq!(whole_percent(130.0), 100);
}

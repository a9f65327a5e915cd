//! Rank filter regression test
//!
//! Tests the general rank filter built on the median machinery:
//!   (1) min <= median <= max at every pixel
//!   (2) rank 0.0 / 1.0 equal the window minimum / maximum
//!   (3) Arbitrary ranks match the reference for every method
//!   (4) Option dispatch matches the direct functions
//!   (5) Invalid ranks are rejected

use medfilt_filter::{
    FilterError, RankFilterOptions, RankMethod, max_filter, median_filter, median_filter_huang,
    median_filter_naive, median_filter_perreault, min_filter, rank_filter, rank_filter_gray,
    rank_target,
};
use medfilt_test::{RegParams, reference_rank_filter, synth};

const METHODS: [RankMethod; 3] = [
    RankMethod::Sort,
    RankMethod::RowHistogram,
    RankMethod::ColumnHistogram,
];

/// Test 1: ordering of min, median, and max outputs.
#[test]
fn rank_reg_ordering() {
    let mut rp = RegParams::new("rank_ordering");

    let pixs = synth::make_random(31, 17, 9).expect("make_random");
    for radius in [1, 3] {
        let pmin = min_filter(&pixs, radius).expect("min_filter");
        let pmed = median_filter(&pixs, radius).expect("median_filter");
        let pmax = max_filter(&pixs, radius).expect("max_filter");

        let vmin = pmin.to_gray_bytes().expect("bytes");
        let vmed = pmed.to_gray_bytes().expect("bytes");
        let vmax = pmax.to_gray_bytes().expect("bytes");
        let ordered = vmin
            .iter()
            .zip(&vmed)
            .zip(&vmax)
            .all(|((a, b), c)| a <= b && b <= c);
        rp.compare_values(1.0, if ordered { 1.0 } else { 0.0 }, 0.0);
    }

    assert!(rp.cleanup(), "rank_ordering regression test failed");
}

/// Test 2: rank extremes against the reference.
#[test]
fn rank_reg_extremes() {
    let mut rp = RegParams::new("rank_extremes");

    let pixs = synth::make_random(20, 14, 21).expect("make_random");
    for radius in [1, 2, 5] {
        let side = 2 * radius as usize + 1;
        let ref_min = reference_rank_filter(&pixs, radius, 0).expect("reference");
        let ref_max = reference_rank_filter(&pixs, radius, side * side - 1).expect("reference");
        rp.compare_pix(&ref_min, &min_filter(&pixs, radius).expect("min_filter"));
        rp.compare_pix(&ref_max, &max_filter(&pixs, radius).expect("max_filter"));
    }

    assert!(rp.cleanup(), "rank_extremes regression test failed");
}

/// Test 3: arbitrary ranks for every method.
#[test]
fn rank_reg_arbitrary_ranks() {
    let mut rp = RegParams::new("rank_arbitrary");

    let pixs = synth::make_random_levels(19, 13, 7, 33).expect("make_random_levels");
    for radius in [1, 2, 3] {
        let side = 2 * radius + 1;
        for rank in [0.0, 0.1, 0.25, 0.4, 0.75, 0.9, 1.0] {
            let target = rank_target(side * side, rank) as usize;
            let expected = reference_rank_filter(&pixs, radius, target).expect("reference");
            for method in METHODS {
                let opts = RankFilterOptions::median(radius)
                    .with_rank(rank)
                    .with_method(method);
                let pixd = rank_filter(&pixs, &opts).expect("rank_filter");
                rp.compare_pix(&expected, &pixd);
            }
        }
    }

    assert!(rp.cleanup(), "rank_arbitrary regression test failed");
}

/// Test 4: option dispatch equals the direct entry points.
#[test]
fn rank_reg_dispatch() {
    let mut rp = RegParams::new("rank_dispatch");

    let pixs = synth::make_random(15, 15, 4).expect("make_random");
    let direct = [
        median_filter_naive(&pixs, 2).expect("naive"),
        median_filter_huang(&pixs, 2).expect("huang"),
        median_filter_perreault(&pixs, 2).expect("perreault"),
    ];
    for (method, expected) in METHODS.into_iter().zip(&direct) {
        let opts = RankFilterOptions::median(2).with_method(method);
        rp.compare_pix(expected, &rank_filter(&pixs, &opts).expect("rank_filter"));
    }

    let defaults = rank_filter(&pixs, &RankFilterOptions::default()).expect("defaults");
    rp.compare_pix(&median_filter(&pixs, 1).expect("median_filter"), &defaults);
    rp.compare_pix(
        &rank_filter_gray(&pixs, 2, 0.5).expect("rank_filter_gray"),
        &direct[2],
    );

    assert!(rp.cleanup(), "rank_dispatch regression test failed");
}

/// Test 5: invalid ranks.
#[test]
fn rank_reg_invalid_rank() {
    let pixs = synth::make_uniform(4, 4, 1).expect("make_uniform");
    for rank in [-0.5, 1.01, f32::NAN] {
        assert!(matches!(
            rank_filter_gray(&pixs, 1, rank),
            Err(FilterError::InvalidParameters(_))
        ));
    }
}

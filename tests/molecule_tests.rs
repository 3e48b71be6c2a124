//! Integration tests for the magnifier molecule populations.
//!
//! Tests verify:
//! - Logarithmic count scale anchored at pure water
//! - Incremental visibility diffs
//! - Slider mapping round trip

use acid_base_solutions::config::MagnifierParameters;
use acid_base_solutions::magnifier::{
    concentration_from_slider, slider_value, MoleculeCountScaler, MoleculeLayer,
};
use acid_base_solutions::Species;

fn create_scaler() -> MoleculeCountScaler {
    MoleculeCountScaler::new(&MagnifierParameters::default())
}

#[test]
fn test_count_anchors() {
    let scaler = create_scaler();
    assert_eq!(scaler.count(1e-7), 2);
    assert_eq!(scaler.count(1.0), scaler.max_molecules());
    // One decade is a factor of 25^(1/7)
    let expected = (2.0 * 25f64.powf(1.0 / 7.0)).round() as usize;
    assert_eq!(scaler.count(1e-6), expected);
}

#[test]
fn test_count_monotonic_in_concentration() {
    let scaler = create_scaler();
    let mut last = 0;
    let mut c = 1e-14;
    while c < 1e3 {
        let count = scaler.count(c);
        assert!(count >= last, "count fell to {} at {:e}", count, c);
        assert!(count <= scaler.max_molecules());
        last = count;
        c *= 1.37;
    }
}

#[test]
fn test_diff_contract() {
    for (previous, new) in [(0, 50), (50, 0), (7, 12), (12, 7), (9, 9)] {
        let diff = MoleculeCountScaler::diff(previous, new);
        assert_eq!(diff.len(), previous.abs_diff(new));
        assert_eq!(diff.visible, new > previous);
        assert_eq!(diff.from, previous.min(new));
    }
}

#[test]
fn test_layer_tracks_visible_prefix() {
    let scaler = create_scaler();
    let mut layer = MoleculeLayer::new(Species::OH, scaler.max_molecules());

    for c in [1e-7, 1e-2, 1e-5, 1.0, 1e-12] {
        let target = scaler.count(c);
        layer.set_count(target);
        let visible = (0..layer.capacity()).filter(|&i| layer.is_visible(i)).count();
        assert_eq!(visible, target, "layer shows {} molecules, wanted {}", visible, target);
        assert!((0..target).all(|i| layer.is_visible(i)));
    }
}

#[test]
fn test_slider_round_trip() {
    for c in [1e-3, 2.5e-3, 1e-2, 0.33, 1.0] {
        let back = concentration_from_slider(slider_value(c));
        assert!((back - c).abs() < 1e-10, "{} came back as {}", c, back);
    }
}

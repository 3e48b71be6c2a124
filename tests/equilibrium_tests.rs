//! Integration tests for the closed-form equilibrium formula sets.
//!
//! Tests verify:
//! - Mass-action law for weak acids and bases
//! - Water autoionization product for every kind
//! - Full dissociation of strong solutes
//! - pH ordering and the neutral point of pure water

use acid_base_solutions::chemistry::{solutions, AqueousSolution, SolutionKind, Species};
use acid_base_solutions::config::ChemistryParameters;

const CONCENTRATIONS: [f64; 5] = [1e-3, 3e-3, 1e-2, 0.1, 1.0];

fn weak_strengths() -> Vec<f64> {
    // (1e-10, 1e2], half a decade apart
    (0..=24).map(|i| 10f64.powf(-9.99 + 0.5 * i as f64)).filter(|k| *k <= 1e2).collect()
}

fn strength_grid(kind: SolutionKind, constants: &ChemistryParameters) -> Vec<f64> {
    match kind {
        SolutionKind::Water => vec![0.0],
        SolutionKind::StrongAcid | SolutionKind::StrongBase => vec![constants.strong_strength],
        SolutionKind::WeakAcid | SolutionKind::WeakBase => weak_strengths(),
    }
}

// ============================================================================
// Mass-action law
// ============================================================================

#[test]
fn test_weak_acid_mass_action() {
    let constants = ChemistryParameters::default();
    for ka in weak_strengths() {
        for c in CONCENTRATIONS {
            let s = solutions::solve(SolutionKind::WeakAcid, ka, c, &constants);
            let h3o = s.of(Species::H3O);
            let a = s.of(Species::A);
            let ha = s.of(Species::HA);
            let lhs = h3o * a;
            let rhs = ka * ha;
            assert!(
                (lhs - rhs).abs() <= 1e-9 * lhs.max(rhs).max(1e-300),
                "Ka={:e} c={:e}: [H3O+][A-]={:e} but Ka[HA]={:e}",
                ka,
                c,
                lhs,
                rhs
            );
        }
    }
}

#[test]
fn test_weak_base_mass_action() {
    let constants = ChemistryParameters::default();
    for kb in weak_strengths() {
        for c in CONCENTRATIONS {
            let s = solutions::solve(SolutionKind::WeakBase, kb, c, &constants);
            let lhs = s.of(Species::OH) * s.of(Species::BH);
            let rhs = kb * s.of(Species::B);
            assert!(
                (lhs - rhs).abs() <= 1e-9 * lhs.max(rhs).max(1e-300),
                "Kb={:e} c={:e}: mass action off ({:e} vs {:e})",
                kb,
                c,
                lhs,
                rhs
            );
        }
    }
}

// ============================================================================
// Water autoionization
// ============================================================================

#[test]
fn test_ion_product_for_every_kind() {
    let constants = ChemistryParameters::default();
    for kind in SolutionKind::ALL {
        for strength in strength_grid(kind, &constants) {
            for c in CONCENTRATIONS {
                let s = solutions::solve(kind, strength, c, &constants);
                let kw = s.of(Species::H3O) * s.of(Species::OH);
                assert!(
                    (kw - 1e-14).abs() < 1e-14 * 1e-9,
                    "{} (K={:e}, c={:e}): [H3O+][OH-] = {:e}",
                    kind,
                    strength,
                    c,
                    kw
                );
            }
        }
    }
}

#[test]
fn test_pure_water_is_exactly_neutral() {
    let water = AqueousSolution::new(SolutionKind::Water, &ChemistryParameters::default());
    assert_eq!(water.ph(), 7.0);
    assert_eq!(water.concentration_of(Species::H2O), Some(55.6));
    assert_eq!(water.concentration_of(Species::HA), None);
}

// ============================================================================
// Strong solutes
// ============================================================================

#[test]
fn test_strong_solutes_fully_dissociate() {
    let constants = ChemistryParameters::default();
    for c in CONCENTRATIONS {
        let acid = solutions::solve(SolutionKind::StrongAcid, constants.strong_strength, c, &constants);
        assert_eq!(acid.of(Species::HA), 0.0);
        assert_eq!(acid.of(Species::A), c);
        assert!((acid.ph() + c.log10()).abs() < 1e-12);

        let base = solutions::solve(SolutionKind::StrongBase, constants.strong_strength, c, &constants);
        assert_eq!(base.of(Species::MOH), 0.0);
        assert_eq!(base.of(Species::M), c);
        assert!((base.ph() - (14.0 + c.log10())).abs() < 1e-9);
    }
}

// ============================================================================
// pH
// ============================================================================

#[test]
fn test_ph_decreases_with_hydronium() {
    let constants = ChemistryParameters::default();
    let mut samples: Vec<(f64, f64)> = Vec::new();
    for kind in SolutionKind::ALL {
        for strength in strength_grid(kind, &constants) {
            for c in CONCENTRATIONS {
                let s = solutions::solve(kind, strength, c, &constants);
                samples.push((s.of(Species::H3O), s.ph()));
            }
        }
    }
    samples.sort_by(|a, b| a.0.total_cmp(&b.0));
    for pair in samples.windows(2) {
        assert!(
            pair[1].1 <= pair[0].1,
            "pH rose from {} to {} as [H3O+] grew from {:e} to {:e}",
            pair[0].1,
            pair[1].1,
            pair[0].0,
            pair[1].0
        );
    }
}

#[test]
fn test_ph_stays_on_scale() {
    let constants = ChemistryParameters::default();
    for kind in SolutionKind::ALL {
        for strength in strength_grid(kind, &constants) {
            for c in CONCENTRATIONS {
                let ph = solutions::solve(kind, strength, c, &constants).ph();
                assert!((0.0..=14.0).contains(&ph), "{} pH {} off scale", kind, ph);
            }
        }
    }
}

#[test]
fn test_stronger_weak_acid_is_more_acidic() {
    let constants = ChemistryParameters::default();
    let mut last = f64::INFINITY;
    for ka in weak_strengths() {
        let ph = solutions::solve(SolutionKind::WeakAcid, ka, 1e-2, &constants).ph();
        assert!(ph < last, "Ka {:e} gave pH {} not below {}", ka, ph, last);
        last = ph;
    }
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_strength_domains() {
    let constants = ChemistryParameters::default();
    let acid = AqueousSolution::new(SolutionKind::WeakAcid, &constants);
    assert!(!acid.is_valid_strength(1e-10));
    assert!(acid.is_valid_strength(1e2));
    assert!(!acid.is_valid_strength(101.0));

    let strong = AqueousSolution::new(SolutionKind::StrongAcid, &constants);
    assert!(strong.is_valid_strength(101.0));
    assert!(!strong.is_valid_strength(1.0));

    let water = AqueousSolution::new(SolutionKind::Water, &constants);
    assert!(!water.is_valid_strength(0.0));
    assert!(!water.is_valid_strength(1e-7));
}

#[test]
fn test_rejected_strength_keeps_previous_value() {
    let acid = AqueousSolution::new(SolutionKind::WeakAcid, &ChemistryParameters::default());
    let ph = acid.ph();
    assert!(acid.set_strength(1e3).is_err());
    assert_eq!(acid.strength(), 1e-7);
    assert_eq!(acid.ph(), ph);
}

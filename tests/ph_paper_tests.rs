//! Integration tests for the pH paper indicator.
//!
//! Tests verify:
//! - Indicator height never decreases while immersed
//! - pH and kind changes restart the color at the current depth
//! - Float animation after release

use std::rc::Rc;

use acid_base_solutions::chemistry::{SolutionKind, SolutionRegistry};
use acid_base_solutions::config::{ChemistryParameters, PhPaperParameters};
use acid_base_solutions::geometry::Beaker;
use acid_base_solutions::model::ActiveSolutionRouter;
use acid_base_solutions::tools::PhPaper;
use glam::Vec2;

fn create_setup() -> (ActiveSolutionRouter, PhPaper, Beaker) {
    let beaker = Beaker::default();
    let registry = Rc::new(SolutionRegistry::general(&ChemistryParameters::default()));
    let router = ActiveSolutionRouter::new(registry, SolutionKind::Water).unwrap();
    let paper = PhPaper::new(
        beaker,
        &PhPaperParameters::default(),
        router.selected_kind_value(),
        router.ph_value(),
    );
    (router, paper, beaker)
}

#[test]
fn test_indicator_monotonic_over_random_walk() {
    let (_router, paper, beaker) = create_setup();
    let x = paper.position().x;
    let depths = [3.0, 17.0, 9.0, 44.0, 12.0, 60.0, 58.0, 1.0, 90.0, 30.0, 150.0, 2.0];

    let mut last = paper.indicator_height();
    for depth in depths {
        paper.update_position(Vec2::new(x, beaker.top() + depth));
        let height = paper.indicator_height();
        assert!(
            height >= last,
            "indicator fell from {} to {} at depth {}",
            last,
            height,
            depth
        );
        last = height;
    }
    assert_eq!(last, paper.size().y);
}

#[test]
fn test_strength_change_restarts_color() {
    let (mut router, paper, beaker) = create_setup();
    router.set_kind(SolutionKind::WeakAcid).unwrap();

    let x = paper.position().x;
    paper.update_position(Vec2::new(x, beaker.top() + 100.0));
    paper.update_position(Vec2::new(x, beaker.top() + 10.0));
    assert!((paper.indicator_height() - 105.0).abs() < 1e-4);

    // pH change while still dipped: color restarts at the current depth
    router.active().set_strength(1e-3).unwrap();
    assert!((paper.indicator_height() - 15.0).abs() < 1e-4);
}

#[test]
fn test_switch_to_water_clears_full_indicator() {
    let (mut router, paper, beaker) = create_setup();
    router.set_kind(SolutionKind::WeakAcid).unwrap();
    let x = paper.position().x;
    paper.update_position(Vec2::new(x, beaker.bottom()));
    assert_eq!(paper.indicator_height(), paper.size().y);

    paper.update_position(Vec2::new(x, beaker.top() - 20.0));
    router.set_kind(SolutionKind::Water).unwrap();
    assert_eq!(paper.indicator_height(), 0.0);
    assert_eq!(paper.ph(), 7.0);
}

#[test]
fn test_reentry_without_color_change_keeps_height() {
    let (_router, paper, beaker) = create_setup();
    let x = paper.position().x;
    paper.update_position(Vec2::new(x, beaker.top() + 70.0));
    paper.update_position(Vec2::new(x, beaker.top() - 20.0));
    paper.update_position(Vec2::new(x, beaker.top() + 5.0));
    assert!((paper.indicator_height() - 75.0).abs() < 1e-4);
}

#[test]
fn test_released_paper_floats_to_rest() {
    let (_router, mut paper, beaker) = create_setup();
    let x = paper.position().x;
    paper.start_drag();
    paper.drag_to(Vec2::new(x, beaker.bottom()));
    paper.advance(1.0);
    assert_eq!(paper.position().y, beaker.bottom(), "dragged paper must not float");

    paper.end_drag();
    let mut t = 0.0;
    while t < 2.0 {
        paper.advance(1.0 / 60.0);
        t += 1.0 / 60.0;
    }
    let rest = beaker.top() + 0.6 * paper.size().y;
    assert!((paper.position().y - rest).abs() < 1e-3);
    assert!(paper.top() < beaker.top(), "paper top should stick out of the liquid");
}

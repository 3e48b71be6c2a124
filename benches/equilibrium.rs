//! Equilibrium and routing benchmarks

use std::rc::Rc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use acid_base_solutions::chemistry::{solutions, SolutionKind, SolutionRegistry};
use acid_base_solutions::config::{ChemistryParameters, MagnifierParameters};
use acid_base_solutions::magnifier::MoleculeCountScaler;
use acid_base_solutions::model::ActiveSolutionRouter;

fn bench_solve_all_kinds(c: &mut Criterion) {
    let constants = ChemistryParameters::default();

    c.bench_function("solve_all_kinds", |b| {
        b.iter(|| {
            for kind in SolutionKind::ALL {
                black_box(solutions::solve(
                    black_box(kind),
                    black_box(1e-5),
                    black_box(0.1),
                    &constants,
                ));
            }
        })
    });
}

fn bench_weak_acid_sweep(c: &mut Criterion) {
    let constants = ChemistryParameters::default();
    let strengths: Vec<f64> = (0..120).map(|i| 10f64.powf(-10.0 + i as f64 / 10.0)).collect();

    c.bench_function("weak_acid_strength_sweep", |b| {
        b.iter(|| {
            strengths
                .iter()
                .map(|&ka| solutions::solve(SolutionKind::WeakAcid, ka, 1e-2, &constants).ph())
                .sum::<f64>()
        })
    });
}

fn bench_router_switch(c: &mut Criterion) {
    let registry = Rc::new(SolutionRegistry::general(&ChemistryParameters::default()));
    let mut router = match ActiveSolutionRouter::new(registry, SolutionKind::Water) {
        Ok(router) => router,
        Err(err) => panic!("router construction failed: {err}"),
    };

    c.bench_function("router_switch_cycle", |b| {
        b.iter(|| {
            for kind in SolutionKind::ALL {
                router.set_kind(black_box(kind)).ok();
            }
        })
    });
}

fn bench_molecule_count(c: &mut Criterion) {
    let scaler = MoleculeCountScaler::new(&MagnifierParameters::default());

    c.bench_function("molecule_count", |b| {
        b.iter(|| scaler.count(black_box(3.2e-4)))
    });
}

criterion_group!(
    benches,
    bench_solve_all_kinds,
    bench_weak_acid_sweep,
    bench_router_switch,
    bench_molecule_count
);
criterion_main!(benches);

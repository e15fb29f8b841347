//! Scenario tests for the spring embedder
//!
//! These tests pin the physical behavior of the Eades model under the
//! relaxation loop: where systems settle, that runs are deterministic, and
//! that the convergence bookkeeping matches hand-computed values.

use asterism::{Eades, NodeArena, NodeId, SpringLayout, Vector};
use float_cmp::assert_approx_eq;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn seeded_model() -> Eades<StdRng> {
    Eades::with_rng(StdRng::seed_from_u64(7))
}

fn distance(arena: &NodeArena<&str>, a: NodeId, b: NodeId) -> f32 {
    arena
        .node_unchecked(a)
        .distance(arena.node_unchecked(b))
        .expect("positions share dimensions")
}

#[test]
fn test_linked_pair_settles_near_ideal_length() {
    let mut arena = NodeArena::new();
    let a = arena.insert("a");
    let b = arena.insert("b");
    arena.set_position(a, Vector::from([-0.025, 0.0, 0.0])).unwrap();
    arena.set_position(b, Vector::from([0.025, 0.0, 0.0])).unwrap();
    arena.link(a, b).unwrap();

    let mut engine = SpringLayout::new();
    engine.set_error_threshold(0.01).set_max_iterations(150);
    let outcome = engine.layout(&mut arena, &mut seeded_model()).unwrap();

    assert!(outcome.converged(), "Pair should converge within the cap");
    let separation = distance(&arena, a, b);
    assert!(
        (separation - 1.0).abs() < 0.15,
        "Separation should settle near the ideal length, was {separation}"
    );
}

#[test]
fn test_coincident_pair_is_jittered_apart() {
    let mut arena = NodeArena::new();
    let a = arena.insert("a");
    let b = arena.insert("b");
    arena.link(a, b).unwrap();

    let outcome = SpringLayout::new()
        .layout(&mut arena, &mut seeded_model())
        .unwrap();

    let separation = distance(&arena, a, b);
    assert!(
        separation > 0.1,
        "Random tie-break should separate coincident nodes, distance was {separation}"
    );
    assert!(separation < 3.0, "Separation should stay bounded");
    assert!(outcome.iterations() > 0);
}

#[test]
fn test_runs_without_coincidence_are_deterministic() {
    let positions = [
        [0.1, 0.2, 0.3],
        [1.1, 0.1, -0.2],
        [-0.3, 0.4, 0.9],
    ];

    let run = |seed: u64| {
        let mut arena = NodeArena::new();
        let ids: Vec<NodeId> = (0..3)
            .map(|index| arena.insert(["a", "b", "c"][index]))
            .collect();
        for (id, components) in ids.iter().zip(positions) {
            arena.set_position(*id, Vector::from(components)).unwrap();
        }
        arena.link(ids[0], ids[1]).unwrap();
        arena.link(ids[1], ids[2]).unwrap();

        let mut model = Eades::with_rng(StdRng::seed_from_u64(seed));
        SpringLayout::new().layout(&mut arena, &mut model).unwrap();

        arena
            .nodes()
            .map(|(_, node)| node.position().components().to_vec())
            .collect::<Vec<_>>()
    };

    // Distinct starting positions never trigger the random tie-break, so
    // runs with differently seeded sources still agree bit for bit.
    assert_eq!(run(7), run(7919));
}

#[test]
fn test_iteration_cap_is_respected() {
    let mut arena = NodeArena::new();
    let a = arena.insert("a");
    let b = arena.insert("b");
    arena.set_position(b, Vector::from([2.0, 0.0, 0.0])).unwrap();
    arena.link(a, b).unwrap();

    let mut engine = SpringLayout::new();
    engine
        .set_error_threshold(f32::MIN_POSITIVE)
        .set_max_iterations(5);
    let outcome = engine.layout(&mut arena, &mut seeded_model()).unwrap();

    assert_eq!(outcome.iterations(), 5);
    assert!(!outcome.converged());
}

#[test]
fn test_convergence_metric_matches_hand_computed_value() {
    let mut arena = NodeArena::new();
    let a = arena.insert("a");
    let b = arena.insert("b");
    arena.set_position(a, Vector::from([-1.0, 0.0, 0.0])).unwrap();
    arena.set_position(b, Vector::from([1.0, 0.0, 0.0])).unwrap();
    arena.link(a, b).unwrap();

    let mut engine = SpringLayout::new();
    engine.set_error_threshold(0.01).set_max_iterations(1);
    let outcome = engine.layout(&mut arena, &mut seeded_model()).unwrap();

    // For a linked pair at distance 2 the pairwise repulsion cancels out of
    // each node's net force, leaving 0.25 * log10(2) per node. The error
    // sums both magnitudes instead of letting the opposing signs cancel.
    assert_eq!(outcome.iterations(), 1);
    assert_approx_eq!(f32, outcome.error(), 0.5 * 2.0f32.log10(), epsilon = 1e-4);

    // Both nodes moved toward each other by the full uncooled force.
    let separation = distance(&arena, a, b);
    assert_approx_eq!(f32, separation, 2.0 - 0.5 * 2.0f32.log10(), epsilon = 1e-4);
}

#[test]
fn test_path_graph_settles_symmetrically() {
    let mut arena = NodeArena::new();
    let a = arena.insert("a");
    let b = arena.insert("b");
    let c = arena.insert("c");
    arena.set_position(a, Vector::from([-0.5, 0.0, 0.0])).unwrap();
    arena.set_position(b, Vector::from([0.0, 0.0, 0.3])).unwrap();
    arena.set_position(c, Vector::from([0.5, 0.0, 0.0])).unwrap();
    arena.link(a, b).unwrap();
    arena.link(b, c).unwrap();

    let mut engine = SpringLayout::new();
    engine.set_max_iterations(150);
    let outcome = engine.layout(&mut arena, &mut seeded_model()).unwrap();
    assert!(outcome.converged(), "Path graph should converge within the cap");

    let ab = distance(&arena, a, b);
    let bc = distance(&arena, b, c);
    let ac = distance(&arena, a, c);

    // The starting positions mirror a and c across the middle node, and the
    // model preserves that symmetry.
    assert_approx_eq!(f32, ab, bc, epsilon = 1e-6);

    // Both edges settle in the neighborhood of the ideal length of 1.
    assert!(ab > 0.6 && ab < 2.0, "Edge length should be near 1, was {ab}");

    // Repulsion from both ends keeps the path from folding in half.
    assert!(ac > ab, "Endpoints should sit farther apart than linked pairs");
    assert!(ac > 1.0, "Endpoint separation should exceed the ideal length, was {ac}");
}

// File: crates/chart-core/tests/force_layout.rs
// Purpose: Relaxation, collision, and drag lifecycle checks for the force graph.

use chart_core::{ForceSimulation, GraphConfig, GraphLink, GraphNode, GraphView, Insets, Shape};

fn demo_graph() -> GraphConfig {
    let nodes = vec![
        GraphNode::new("Alice", 34.0, 1),
        GraphNode::new("Bob", 24.0, 1),
        GraphNode::new("Chen", 14.0, 1),
        GraphNode::new("Ethan", 44.0, 1),
        GraphNode::new("Loner", 30.0, 2),
    ];
    let links = vec![
        GraphLink::new("Alice", "Bob"),
        GraphLink::new("Chen", "Bob"),
        GraphLink::new("Ethan", "Bob"),
        GraphLink::new("Chen", "Ethan"),
    ];
    GraphConfig::new(1600, 800, Insets::new(10, 10, 10, 10), nodes, links)
}

fn relax(sim: &mut ForceSimulation) -> usize {
    let mut steps = 0;
    while sim.step() {
        steps += 1;
        assert!(steps < 10_000, "simulation failed to converge");
    }
    steps
}

#[test]
fn simulation_converges() {
    let view = GraphView::new(demo_graph());
    let mut sim = view.simulation().unwrap();
    let steps = relax(&mut sim);
    assert!(steps > 10, "energy should decay over many steps, not instantly");
    assert!(!sim.step(), "a converged simulation stays converged");
}

#[test]
fn unlinked_node_does_not_overlap_at_steady_state() {
    let view = GraphView::new(demo_graph());
    let mut sim = view.simulation().unwrap();
    relax(&mut sim);

    let loner = sim.node("Loner").unwrap();
    for other in sim.nodes().filter(|n| n.name != "Loner") {
        let dist = ((loner.x - other.x).powi(2) + (loner.y - other.y).powi(2)).sqrt();
        let min_sep = loner.age + other.age;
        assert!(
            dist >= min_sep * 0.75,
            "'Loner' overlaps '{}': dist {dist:.1} < {min_sep:.1}",
            other.name
        );
    }
}

#[test]
fn drag_lifecycle_pins_then_releases() {
    let view = GraphView::new(demo_graph());
    let mut sim = view.simulation().unwrap();
    relax(&mut sim);

    // pointer-down re-energizes a converged simulation
    assert!(sim.pin("Bob", 200.0, 200.0));
    assert!(sim.step(), "drag restarts the relaxation");
    let bob = sim.node("Bob").unwrap();
    assert_eq!((bob.x, bob.y), (200.0, 200.0));

    // pointer-move updates the fixed position
    sim.pin("Bob", 260.0, 180.0);
    sim.step();
    let bob = sim.node("Bob").unwrap();
    assert_eq!((bob.x, bob.y), (260.0, 180.0));

    // pointer-up clears the override; the node re-enters free relaxation
    assert!(sim.unpin("Bob"));
    sim.step();
    let bob = sim.node("Bob").unwrap();
    assert_ne!((bob.x, bob.y), (260.0, 180.0), "released node moves freely");
}

#[test]
fn pin_unknown_node_is_a_noop() {
    let view = GraphView::new(demo_graph());
    let mut sim = view.simulation().unwrap();
    assert!(!sim.pin("Nobody", 0.0, 0.0));
    assert!(!sim.unpin("Nobody"));
}

#[test]
fn click_hit_test_identifies_the_node() {
    let view = GraphView::new(demo_graph());
    let mut sim = view.simulation().unwrap();
    relax(&mut sim);
    let alice = sim.node("Alice").unwrap();
    assert_eq!(sim.node_at(alice.x, alice.y), Some("Alice"));
    assert_eq!(sim.node_at(-10_000.0, -10_000.0), None);
}

#[test]
fn scene_draws_links_under_nodes_with_margin_offset() {
    let view = GraphView::new(demo_graph());
    let sim = view.simulation().unwrap();
    let scene = view.scene(&sim);

    let first_circle = scene
        .shapes
        .iter()
        .position(|s| matches!(s, Shape::Circle { .. }))
        .unwrap();
    let last_line = scene
        .shapes
        .iter()
        .rposition(|s| matches!(s, Shape::Line { .. }))
        .unwrap();
    assert!(last_line < first_circle, "links render beneath node circles");

    let circles: Vec<_> = scene
        .shapes
        .iter()
        .filter_map(|s| match s {
            Shape::Circle { cx, cy, r, .. } => Some((*cx, *cy, *r)),
            _ => None,
        })
        .collect();
    assert_eq!(circles.len(), 5);

    // circles are node positions shifted by the 10px margin
    let alice = sim.node("Alice").unwrap();
    assert!(circles
        .iter()
        .any(|&(cx, cy, r)| (cx - (alice.x + 10.0)).abs() < 1e-9
            && (cy - (alice.y + 10.0)).abs() < 1e-9
            && r == alice.age));
}

//! Example: Laying out a small skill constellation
//!
//! This example builds a graph from skill records through the public API,
//! relaxes it, and prints where every node settles.

use asterism::{
    LayoutBuilder, SkillRecord,
    config::{AppConfig, ForceConfig, LayoutConfig},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Building skill graph...\n");

    // A handful of records; shared labels collapse into shared nodes
    let records = vec![
        SkillRecord::new("Rust", ["Systems", "CLI", "Graphics"]),
        SkillRecord::new("C++", ["Systems", "Graphics", "CUDA"]),
        SkillRecord::new("Python", ["Data", "CLI"]),
        SkillRecord::new("CUDA", ["Graphics"]),
    ];

    // Seed starting positions on a ring so repeated runs agree exactly
    let config = AppConfig::new(
        LayoutConfig::new(0.99, 0.1, 150, Some(0.5)),
        ForceConfig::default(),
    );

    let builder = LayoutBuilder::new(config);
    let mut arena = builder.build_graph(&records)?;

    println!("Created graph:");
    println!("  Nodes: {}", arena.len());
    println!("  Edges: {}", arena.edges().count());
    println!();

    // Relax the graph in place
    println!("Relaxing layout...");
    let outcome = builder.layout(&mut arena)?;
    println!(
        "Finished after {} iterations (converged: {}, residual error: {:.4})",
        outcome.iterations(),
        outcome.converged(),
        outcome.error()
    );
    println!();

    // The lowest node sits at height 0 and the layout is centered, so the
    // coordinates can feed straight into a renderer.
    println!("Final positions:");
    for (_, node) in arena.nodes() {
        let position = node.position();
        println!(
            "  {:<8} ({:>7.3}, {:>7.3}, {:>7.3})",
            node.payload(),
            position.component(0),
            position.component(1),
            position.component(2)
        );
    }

    println!();
    println!("Edges:");
    for (a, b) in arena.edges() {
        println!(
            "  {} - {}",
            arena.node_unchecked(a).payload(),
            arena.node_unchecked(b).payload()
        );
    }

    Ok(())
}

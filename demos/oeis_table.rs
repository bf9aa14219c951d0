//! Prints the level table and the cluster breakdown for small levels

use treeflip::levels::MAX_LEVEL;
use treeflip::oeis::{A000055, A000081};
use treeflip::prelude::*;
use treeflip::utils::timing::Timer;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== Rooted trees and the flip transform ===\n");
    println!("A000081: {:?}", A000081);
    println!("A000055: {:?}", A000055);

    let levels = LevelMapping::new();

    println!("\n--- Verification ---");
    {
        let _timer = Timer::new("verify");
        treeflip::oeis::verify(9)?;
        println!("generated counts match A000081 and A000055 up to 9 nodes");
    }

    println!("\n--- Levels ---");
    println!("{:>6} {:>8} {:>9} {:>6}", "level", "terms", "clusters", "nodes");
    for level in 0..=MAX_LEVEL {
        println!(
            "{:>6} {:>8} {:>9} {:>6}",
            level,
            levels.term_count(level),
            levels.cluster_count(level),
            levels.node_count(level)
        );
    }

    for level in 0..=4 {
        let summary = levels.summary(level)?;
        println!(
            "\n--- Level {} ({} terms, {} clusters) ---",
            level, summary.term_count, summary.cluster_count
        );
        for (i, cluster) in levels.clusters(level)?.iter().enumerate() {
            println!("  cluster {} ({} trees): {}", i + 1, cluster.len(), cluster.signature());
            for form in cluster.canonical_forms() {
                println!("    {}", form);
            }
        }
    }

    println!("\n--- Level 3 summary as JSON ---");
    println!("{}", levels.summary(3)?.to_json()?);

    Ok(())
}

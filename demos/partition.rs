//! # Fuzzy partition walkthrough
//!
//! Builds a small temperature vocabulary the way a form-driven front end would
//! (names and bounds as text), shows which entries the registry refuses and
//! why, queries a sweep of points, then deletes and clears.
//!
//! Run with `RUST_LOG=debug cargo run --example partition` to see the
//! registry's own trace events.

use fuzzset_core::{MembershipRegistry, ShapeKind};
use tracing_subscriber::EnvFilter;

// ── Form input ───────────────────────────────────────────────────────────────

const FORM_ENTRIES: &[(&str, &str, &str, &str, &str)] = &[
    ("Freezing", "-10", "-10", "-5", "0"), // a == b
    ("Cold", "-10", "-5", "0", "5"),
    ("Mild", "0", "5", "5", "12"),
    ("Stray", "3", "4", "4", "20"),        // starts inside Mild's rise
    ("Warm", "6", "12", "18", "22"),       // Mild is only 6/7 at x = 6
    ("Warm", "5", "12", "18", "twenty"),   // not a number
    ("Warm", "5", "12", "18", "22"),
    ("Hot", "18", "22", "40", "45"),
];

fn kind_marker(kind: ShapeKind) -> &'static str {
    match kind {
        ShapeKind::Triangular => "▲",
        ShapeKind::Trapezoidal => "▬",
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut registry = MembershipRegistry::new();

    println!("── Adding sets ─────────────────────────────────────────────");
    for &(name, a, b, c, d) in FORM_ENTRIES {
        match registry.add(name, a, b, c, d) {
            Ok(set) => println!(
                "  + {:<9} {} [{:>6}, {:>6}, {:>6}, {:>6}]",
                set.name(),
                kind_marker(set.shape_kind()),
                set.a(),
                set.b(),
                set.c(),
                set.d()
            ),
            Err(e) => println!("  ✗ {:<9} refused: {}", name, e),
        }
    }

    if let Some(bounds) = registry.domain_bounds() {
        println!("\n  plot x-range: [{}, {}]", bounds.left, bounds.right);
    }

    println!("\n── Query sweep ─────────────────────────────────────────────");
    for x in [-7.5, 0.0, 2.5, 5.0, 8.5, 15.0, 20.0, 30.0, 50.0] {
        let q = registry.query_point(x);
        if q.is_empty() {
            println!("  x = {:>5}: no set covers this point", x);
            continue;
        }
        let mut degrees: Vec<_> = q.degrees.iter().collect();
        degrees.sort_by(|l, r| l.0.cmp(r.0));
        let listing: Vec<String> = degrees
            .iter()
            .map(|(name, d)| format!("{} {:.0}%", name, *d * 100.0))
            .collect();
        println!("  x = {:>5}: {}  (sum {:.3})", x, listing.join(", "), q.sum);
    }

    println!("\n── Delete and clear ────────────────────────────────────────");
    if let Ok(removed) = registry.delete_at(1) {
        println!("  removed {:?}; gap left at x = 8.5:", removed.name());
        println!("    sum there is now {:.3}", registry.query_point(8.5).sum);
    }
    if let Err(e) = registry.delete_at(10) {
        println!("  delete_at(10): {}", e);
    }
    registry.clear();
    println!("  cleared: {} sets, bounds {:?}", registry.len(), registry.domain_bounds());
}

//! Habitat Shift
//!
//! This example walks one habitat through a work shift.
//!
//! Key concepts:
//! - A session owns the single authoritative snapshot
//! - Typed actions and JSON envelopes feed the same pure engine
//! - Guards bound a repeated auto-consumption loop
//! - Reset returns every resource to full
//!
//! Run with: cargo run --example habitat_shift

use habitat::core::{Guard, Resource, ResourceAction, ResourceSnapshot};
use habitat::session::ResourceSession;

fn bar(level: i64) -> String {
    let filled = (level.clamp(0, 100) / 5) as usize;
    format!("[{}{}] {:>3}", "#".repeat(filled), ".".repeat(20 - filled), level)
}

fn print_snapshot(label: &str, snapshot: &ResourceSnapshot) {
    println!("{label}");
    for (resource, level) in snapshot.levels() {
        println!("  {:<7}{}", resource.name(), bar(level));
    }
}

fn main() {
    println!("=== Habitat Shift Example ===\n");

    let mut session = ResourceSession::new();
    print_snapshot("Shift start:", session.current());

    println!("\n1. Crew breakfast (water and oxygen)");
    session.dispatch(&ResourceAction::consume_water_and_oxygen_by(20, 15));
    print_snapshot("After breakfast:", session.current());

    println!("\n2. Rover recharge, driven from a JSON envelope");
    match session.dispatch_json(r#"{"type": "CONSUME_ENERGY", "payload": {"amount": 40}}"#) {
        Ok(snapshot) => print_snapshot("After recharge:", &snapshot),
        Err(err) => println!("  rejected: {err}"),
    }

    println!("\n3. Run the electrolyser while energy stays above 20");
    let keep_reserve = Guard::above(Resource::Energy, 20);
    let cycles = session.run_while(&keep_reserve, &ResourceAction::generate_oxygen(), 10);
    println!("  electrolyser ran {cycles} cycle(s)");
    print_snapshot("After electrolysis:", session.current());

    println!("\n4. Unknown command from the console");
    session.dispatch(&ResourceAction::unrecognized("VENT_AIRLOCK"));
    print_snapshot("Unchanged:", session.current());

    println!("\n5. Resupply drop");
    session.reset();
    print_snapshot("After resupply:", session.current());

    println!("\nHistory:");
    for record in session.history().transitions() {
        println!(
            "  #{:<2} {:<36} {} -> {}",
            record.sequence, record.action, record.from, record.to
        );
    }

    println!("\n=== Example Complete ===");
}

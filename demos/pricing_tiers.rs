//! Pricing Tiers
//!
//! This example gates ticket prices by calendar windows.
//!
//! Key concepts:
//! - Consecutive windows with open ends on both sides
//! - Resolving the current tier for a given instant
//! - Relational queries against named windows
//!
//! Run with: cargo run --example pricing_tiers

use chrono::{TimeZone, Utc};
use time_machine::{TimeMachineBuilder, TimeMachineError};

fn price_cents(tier: Option<&str>) -> u32 {
    match tier {
        Some("early-bird") => 9_900,
        Some("regular") => 14_900,
        Some("door") => 19_900,
        _ => 0,
    }
}

fn main() -> Result<(), TimeMachineError> {
    println!("=== Pricing Tiers Example ===\n");

    let regular_opens = Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap();
    let door_opens = Utc.with_ymd_and_hms(2026, 6, 1, 9, 0, 0).unwrap();
    let event_ends = Utc.with_ymd_and_hms(2026, 6, 1, 18, 0, 0).unwrap();

    let mut machine = TimeMachineBuilder::new()
        .state("early-bird", None, Some(regular_opens))?
        .state("regular", Some(regular_opens), Some(door_opens))?
        .state("door", Some(door_opens), Some(event_ends))?
        .build()?;

    let checkpoints = [
        Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap(),
        regular_opens,
        Utc.with_ymd_and_hms(2026, 6, 1, 10, 30, 0).unwrap(),
        event_ends,
    ];

    for instant in checkpoints {
        machine.set_instant(Some(instant));
        let tier = machine.current_state().map(|s| s.name());

        println!("At {}:", instant.to_rfc3339());
        println!("  tier: {}", tier.unwrap_or("closed"));
        println!("  price: {} cents", price_cents(tier));
        println!("  early bird over: {}", machine.is_after("early-bird")?);
        println!("  sales open: {}", machine.is_in_interval("early-bird", "door")?);
    }

    println!("\n=== Example Complete ===");
    Ok(())
}

//! Basic usage example for boundary-map
//!
//! Builds a headless map, loads a few boundaries and prints what ended up
//! on the map.

use boundary_core::prelude::*;
use boundary_core::recording::RecordingEngine;

fn main() -> Result<()> {
    println!("=== boundary-map Basic Usage Example ===\n");

    let config = MapConfig::default().with_boundary(
        "610604;610607",
        BoundaryOptions::new().with_fill_color("#00ff00"),
    );
    let mut manager = BoundaryManager::new(RecordingEngine::new(), config);

    // Example 1: before the surface exists, loads are ignored
    println!("--- Example 1: Loading before the map exists ---");
    manager.load_boundary("10__", &BoundaryOptions::new())?;
    println!("  Boundaries registered: {}", manager.registry().len());
    println!();

    // Example 2: surface ready builds the map and loads the startup set
    println!("--- Example 2: Surface ready ---");
    manager.surface_ready("map-container".into(), Platform::Browser)?;
    for geocode in manager.registry().geocodes() {
        println!("  ✓ {geocode}");
    }
    println!();

    // Example 3: all Bangkok districts, outline only
    println!("--- Example 3: Wildcard geocode without fill ---");
    manager.load_boundary(
        "10__",
        &BoundaryOptions::new()
            .with_combine(false)
            .with_line_color("#0000ff")
            .without_fill(),
    )?;
    if let Some(map) = manager.map_handle() {
        println!("  Map calls so far:");
        for call in map.calls() {
            println!("    {call}");
        }
    }
    println!();

    println!("Total boundaries on the map: {}", manager.registry().len());
    Ok(())
}

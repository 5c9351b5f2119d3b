//! Error handling example for boundary-map
//!
//! Demonstrates how engine failures surface and how the manager keeps its
//! registry in step with the map when they do.

use boundary_core::prelude::*;
use boundary_core::recording::RecordingEngine;

fn main() -> Result<()> {
    println!("=== boundary-map Error Handling Example ===\n");

    // Example 1: the map engine cannot build a map
    println!("--- Example 1: Construction failure ---");
    let engine = RecordingEngine::new();
    engine.fail_construction("placeholder element has no size");
    let mut broken = BoundaryManager::new(engine, MapConfig::default());
    match broken.surface_ready("map-container".into(), Platform::Browser) {
        Ok(()) => println!("  ✓ Map constructed"),
        Err(e) => println!("  ✗ {e}"),
    }
    println!();

    // Example 2: the engine rejects a geocode while replacing
    println!("--- Example 2: Rejected replacement keeps the old boundary ---");
    let mut manager = BoundaryManager::new(
        RecordingEngine::new(),
        MapConfig::default().with_districts(Vec::new()),
    );
    manager.surface_ready("map-container".into(), Platform::Browser)?;
    manager.load_boundary("610604", &BoundaryOptions::new().with_fill_color("#ff0000"))?;

    manager.engine().reject_geocode("610604");
    if let Err(e) = manager.load_boundary("610604", &BoundaryOptions::new().with_fill_color("#00ff00")) {
        println!("  ✗ {e}");
    }
    if let Some(overlay) = manager.registry().get("610604") {
        println!("  Still shown with fill {:?}", overlay.options.fill_color);
    }
    println!();

    // Example 3: server rendering never builds a map
    println!("--- Example 3: Non-interactive host ---");
    let mut server = BoundaryManager::new(RecordingEngine::new(), MapConfig::default());
    server.surface_ready("map-container".into(), Platform::Server)?;
    println!("  Map constructed: {}", server.is_ready());

    Ok(())
}

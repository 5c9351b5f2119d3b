//! Replacement and clearing example for boundary-map
//!
//! Shows that reloading a geocode swaps its overlay instead of stacking a
//! second one, and that clearing keeps the map alive.

use boundary_core::prelude::*;
use boundary_core::recording::RecordingEngine;

fn main() -> Result<()> {
    println!("=== boundary-map Replace & Clear Example ===\n");

    let config = MapConfig::default().with_districts(Vec::new());
    let mut manager = BoundaryManager::new(RecordingEngine::new(), config);
    manager.surface_ready("map-container".into(), Platform::Browser)?;

    println!("--- Reloading one geocode in three colors ---");
    for color in ["#ff0000", "#00ff00", "#0000ff"] {
        manager.load_boundary("610604", &BoundaryOptions::new().with_fill_color(color))?;
        let shown = manager
            .map_handle()
            .map(|m| m.loaded_for("610604").len())
            .unwrap_or_default();
        println!("  {color}: {shown} overlay(s) on the map for 610604");
    }
    println!();

    println!("--- Clearing ---");
    manager.clear_overlays()?;
    println!("  Registry empty: {}", manager.registry().is_empty());
    println!("  Map still alive: {}", manager.is_ready());
    println!();

    println!("--- Teardown ---");
    manager.dispose();
    println!("  Map alive after dispose: {}", manager.is_ready());

    Ok(())
}

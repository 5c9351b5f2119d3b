// crates/boundary-core/tests/manager_scenarios.rs
use boundary_core::prelude::*;
use boundary_core::recording::{MapCall, RecordingEngine, RecordingMap};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("boundary_core=debug")
        .with_test_writer()
        .try_init();
}

/// Manager with a live map and no startup districts.
fn ready() -> BoundaryManager<RecordingEngine> {
    init_tracing();
    let config = MapConfig::default().with_districts(Vec::new());
    let mut manager = BoundaryManager::new(RecordingEngine::new(), config);
    manager
        .surface_ready("map-container".into(), Platform::Browser)
        .unwrap();
    manager
}

fn map(manager: &BoundaryManager<RecordingEngine>) -> &RecordingMap {
    manager.map_handle().expect("map should be constructed")
}

#[test]
fn repeated_loads_of_one_geocode_never_accumulate() {
    let mut manager = ready();
    for fill in ["#ff0000", "#00ff00", "#0000ff", "#ffffff"] {
        manager
            .load_boundary("610604", &BoundaryOptions::new().with_fill_color(fill))
            .unwrap();
    }

    assert_eq!(manager.registry().len(), 1);
    let on_map = map(&manager).loaded_for("610604");
    assert_eq!(on_map.len(), 1);
    assert_eq!(on_map[0].id, manager.registry().get("610604").unwrap().id);
    assert_eq!(on_map[0].options.fill_color.as_color(), Some("#ffffff"));
}

#[test]
fn first_load_of_a_geocode_only_materializes() {
    let mut manager = ready();
    manager.load_boundary("610604", &BoundaryOptions::new()).unwrap();
    manager.load_boundary("610607", &BoundaryOptions::new()).unwrap();

    let map = map(&manager);
    assert_eq!(map.unload_calls(), 0);
    assert_eq!(map.load_calls(), 2);
}

#[test]
fn clearing_keeps_the_same_map() {
    let mut manager = ready();
    manager.load_boundary("610604", &BoundaryOptions::new()).unwrap();
    let surface_before = map(&manager).surface().to_string();

    manager.clear_overlays().unwrap();

    assert!(manager.is_ready());
    assert_eq!(map(&manager).surface(), surface_before);
    assert_eq!(manager.engine().maps_created(), 1);
    assert!(manager.registry().is_empty());
    assert!(map(&manager).loaded().is_empty());
}

#[test]
fn loads_before_the_surface_is_ready_are_ignored() {
    init_tracing();
    let mut manager = BoundaryManager::new(RecordingEngine::new(), MapConfig::default());

    manager
        .load_boundary("610604", &BoundaryOptions::new().with_fill_color("#ff0000"))
        .unwrap();
    manager.clear_overlays().unwrap();

    assert!(manager.registry().is_empty());
    assert!(manager.map_handle().is_none());
    assert_eq!(manager.engine().objects_built(), 0);
    assert_eq!(manager.engine().maps_created(), 0);
}

#[test]
fn loading_twice_looks_like_loading_once() {
    let mut once = ready();
    let mut twice = ready();
    let options = BoundaryOptions::new().with_fill_color("#ff0000");

    once.load_boundary("610604", &options).unwrap();
    twice.load_boundary("610604", &options).unwrap();
    twice.load_boundary("610604", &options).unwrap();

    assert_eq!(twice.registry().len(), 1);
    let shown_once = &map(&once).loaded()[0];
    let shown_twice = map(&twice).loaded();
    assert_eq!(shown_twice.len(), 1);
    assert_eq!(shown_twice[0].geocode, shown_once.geocode);
    assert_eq!(shown_twice[0].options, shown_once.options);
}

#[test]
fn default_district_set_is_loaded_at_startup() {
    init_tracing();
    let mut manager = BoundaryManager::new(RecordingEngine::new(), MapConfig::default());
    manager
        .surface_ready("map-container".into(), Platform::Browser)
        .unwrap();

    assert_eq!(manager.registry().len(), 1);
    let overlay = manager.registry().get("94__").unwrap();
    assert_eq!(overlay.kind, OverlayKind::Geocode);
    assert_eq!(overlay.options.fill_color, FillColor::from("#ff0000"));
    assert_eq!(overlay.options.combine, Some(true));
    assert_eq!(overlay.options.simplify, Some(0.0005));
    assert_eq!(overlay.options.line_color.as_deref(), Some("#ff0000"));

    let map = map(&manager);
    assert_eq!(map.load_calls(), 1);
    assert_eq!(map.unload_calls(), 0);
}

#[test]
fn replacing_a_compound_geocode() {
    let mut manager = ready();
    manager
        .load_boundary("610604;610607", &BoundaryOptions::new())
        .unwrap();
    manager
        .load_boundary(
            "610604;610607",
            &BoundaryOptions::new().with_fill_color("#00ff00"),
        )
        .unwrap();

    let map = map(&manager);
    assert_eq!(map.unload_calls(), 1);
    assert_eq!(map.load_calls(), 2);
    assert_eq!(manager.registry().len(), 1);
    let current = manager.registry().get("610604;610607").unwrap();
    assert_eq!(current.options.fill_color.as_color(), Some("#00ff00"));

    // The unload targets the first overlay and happens before the new load.
    assert_eq!(
        map.calls(),
        &[
            MapCall::Load { id: 1, geocode: "610604;610607".into() },
            MapCall::Unload { id: 1, geocode: "610604;610607".into() },
            MapCall::Load { id: 2, geocode: "610604;610607".into() },
        ]
    );
}

#[test]
fn clearing_an_empty_registry_is_harmless() {
    let mut manager = ready();
    manager.clear_overlays().unwrap();
    manager.clear_overlays().unwrap();
    assert!(manager.registry().is_empty());
}

#[test]
fn clearing_also_removes_markers() {
    use boundary_core::recording::RecordedMarker;

    let mut manager = ready();
    manager.load_boundary("610604", &BoundaryOptions::new()).unwrap();
    let marker = RecordedMarker {
        id: 7,
        location: LatLon { lon: 100.5, lat: 13.7 },
        title: Some("Depot".into()),
    };
    manager
        .map_handle_mut()
        .unwrap()
        .add_overlay(&marker)
        .unwrap();

    manager.clear_overlays().unwrap();
    assert!(map(&manager).markers().is_empty());
    assert!(map(&manager).loaded().is_empty());
}

#[test]
fn clearing_then_loading_starts_fresh() {
    let mut manager = ready();
    manager.load_boundary("610604", &BoundaryOptions::new()).unwrap();
    manager.clear_overlays().unwrap();
    manager.load_boundary("610604", &BoundaryOptions::new()).unwrap();

    // The cleared overlay must not be unloaded a second time.
    assert_eq!(map(&manager).unload_calls(), 0);
    assert_eq!(manager.registry().len(), 1);
}

#[test]
fn configured_geocodes_load_after_the_district_set() {
    init_tracing();
    let config = MapConfig::default().with_boundary(
        "610604;610607",
        BoundaryOptions::new().with_fill_color("#00ff00"),
    );
    let mut manager = BoundaryManager::new(RecordingEngine::new(), config);
    manager
        .surface_ready("map-container".into(), Platform::Browser)
        .unwrap();

    let order: Vec<_> = manager
        .registry()
        .geocodes()
        .map(Geocode::as_str)
        .collect();
    assert_eq!(order, ["94__", "610604;610607"]);
    assert_eq!(map(&manager).load_calls(), 2);
}

#[test]
fn blank_configured_geocodes_load_nothing() {
    init_tracing();
    for blank in ["", "   "] {
        let config = MapConfig::default()
            .with_districts(Vec::new())
            .with_boundary(blank, BoundaryOptions::new());
        let mut manager = BoundaryManager::new(RecordingEngine::new(), config);
        manager
            .surface_ready("map-container".into(), Platform::Browser)
            .unwrap();

        assert!(manager.is_ready());
        assert!(manager.registry().is_empty());
        assert_eq!(map(&manager).load_calls(), 0);
        assert_eq!(manager.engine().objects_built(), 0);
    }
}

#[test]
fn loads_recover_once_the_engine_accepts_again() {
    let mut manager = ready();
    manager.engine().reject_load("610604");

    assert!(manager
        .load_boundary("610604", &BoundaryOptions::new())
        .is_err());
    assert!(manager.registry().is_empty());
    assert!(map(&manager).loaded().is_empty());

    manager.engine().heal();
    manager.load_boundary("610604", &BoundaryOptions::new()).unwrap();

    assert_eq!(manager.registry().len(), 1);
    let on_map = map(&manager).loaded_for("610604");
    assert_eq!(on_map.len(), 1);
    assert_eq!(on_map[0].id, manager.registry().get("610604").unwrap().id);
}

#[test]
fn server_platform_never_builds_a_map() {
    init_tracing();
    let mut manager = BoundaryManager::new(RecordingEngine::new(), MapConfig::default());
    manager
        .surface_ready("map-container".into(), Platform::Server)
        .unwrap();

    assert!(!manager.is_ready());
    assert_eq!(manager.engine().maps_created(), 0);
    assert!(manager.registry().is_empty());
}

#[test]
fn second_surface_signal_does_not_rebuild() {
    let mut manager = ready();
    manager.load_boundary("610604", &BoundaryOptions::new()).unwrap();
    manager
        .surface_ready("another-container".into(), Platform::Browser)
        .unwrap();

    assert_eq!(manager.engine().maps_created(), 1);
    assert_eq!(map(&manager).surface(), "map-container");
    assert_eq!(manager.registry().len(), 1);
}

#[test]
fn construction_failure_reaches_the_caller() {
    init_tracing();
    let engine = RecordingEngine::new();
    engine.fail_construction("placeholder has no size");
    let mut manager = BoundaryManager::new(engine, MapConfig::default());

    let err = manager
        .surface_ready("map-container".into(), Platform::Browser)
        .unwrap_err();
    match err {
        MapError::Construction(reason) => assert_eq!(reason, "placeholder has no size"),
        other => panic!("unexpected error: {other}"),
    }
    assert!(!manager.is_ready());
    assert!(manager.registry().is_empty());
}

#[test]
fn map_is_created_with_the_configured_view() {
    init_tracing();
    let mut config = MapConfig::default();
    config.view.zoom = 10.5;
    config.view.location = LatLon { lon: 100.5, lat: 13.75 };
    let mut manager = BoundaryManager::new(RecordingEngine::new(), config);
    manager
        .surface_ready("map-container".into(), Platform::Browser)
        .unwrap();

    let map = manager.map_handle().unwrap();
    assert_eq!(map.initial_view().zoom, 10.5);
    assert_eq!(map.location(), LatLon { lon: 100.5, lat: 13.75 });
    assert_eq!(map.initial_view().zoom_range, ZoomRange { min: 9.9, max: 10.9 });
}

#[test]
fn view_controls_pass_through_the_handle() {
    let mut manager = ready();
    let handle = manager.map_handle_mut().unwrap();
    handle.set_zoom(20.0).unwrap();
    handle
        .set_location(LatLon { lon: 101.0, lat: 6.5 }, true)
        .unwrap();
    handle.resize().unwrap();

    let map = map(&manager);
    // Clamped to the default zoom range.
    assert_eq!(map.zoom(), 10.9);
    assert_eq!(map.location(), LatLon { lon: 101.0, lat: 6.5 });
    assert_eq!(map.calls().last(), Some(&MapCall::Resize));
    // View changes never touch the boundary registry.
    assert!(manager.registry().is_empty());
}

//! Replay scripts and the headless session they run in.
//!
//! A script is a JSON array of steps:
//!
//! ```json
//! [
//!   { "op": "ready" },
//!   { "op": "load", "geocode": "610604;610607" },
//!   { "op": "load", "geocode": "610604;610607", "options": { "fillColor": "#00ff00" } },
//!   { "op": "clear" }
//! ]
//! ```

use boundary_core::prelude::*;
use boundary_core::recording::{MapCall, RecordingEngine};
use serde::Deserialize;
use std::fmt;

pub const DEFAULT_SURFACE: &str = "headless";

fn default_surface() -> String {
    DEFAULT_SURFACE.to_string()
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum Step {
    /// The display surface became available.
    Ready {
        #[serde(default = "default_surface")]
        surface: String,
    },
    Load {
        geocode: Geocode,
        #[serde(default)]
        options: BoundaryOptions,
    },
    Clear,
    /// Load a district set on top of whatever is shown.
    Districts { districts: Vec<DistrictColor> },
    Dispose,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Ready { surface } => write!(f, "ready ({surface})"),
            Step::Load { geocode, options } => {
                let options = serde_json::to_string(options).map_err(|_| fmt::Error)?;
                write!(f, "load {geocode} {options}")
            }
            Step::Clear => f.write_str("clear"),
            Step::Districts { districts } => write!(f, "districts ({} entries)", districts.len()),
            Step::Dispose => f.write_str("dispose"),
        }
    }
}

pub fn parse_script(text: &str) -> serde_json::Result<Vec<Step>> {
    serde_json::from_str(text)
}

/// What a single step did to the map.
#[derive(Debug)]
pub struct StepOutcome {
    pub calls: Vec<MapCall>,
    pub error: Option<MapError>,
}

/// A manager on the headless engine, plus a cursor into the recorded calls
/// so each step reports only what it caused.
pub struct Session {
    manager: BoundaryManager<RecordingEngine>,
    seen: usize,
}

impl Session {
    pub fn new(config: MapConfig) -> Self {
        Self {
            manager: BoundaryManager::new(RecordingEngine::new(), config),
            seen: 0,
        }
    }

    pub fn manager(&self) -> &BoundaryManager<RecordingEngine> {
        &self.manager
    }

    pub fn apply(&mut self, step: &Step) -> StepOutcome {
        let result = match step {
            Step::Ready { surface } => self
                .manager
                .surface_ready(surface.clone(), Platform::Browser),
            Step::Load { geocode, options } => {
                self.manager.load_boundary(geocode.clone(), options)
            }
            Step::Clear => self.manager.clear_overlays(),
            Step::Districts { districts } => self.manager.load_initial_boundaries(districts),
            Step::Dispose => {
                self.manager.dispose();
                self.seen = 0;
                Ok(())
            }
        };
        StepOutcome {
            calls: self.drain(),
            error: result.err(),
        }
    }

    fn drain(&mut self) -> Vec<MapCall> {
        let Some(map) = self.manager.map_handle() else {
            return Vec::new();
        };
        let calls = map.calls();
        let fresh = calls.get(self.seen..).unwrap_or_default().to_vec();
        self.seen = calls.len();
        fresh
    }

    /// One line per registered boundary, in load order.
    pub fn summary(&self) -> Vec<String> {
        self.manager
            .registry()
            .iter()
            .map(|(geocode, overlay)| {
                let options = serde_json::to_string(&overlay.options)
                    .unwrap_or_else(|_| "<unprintable>".to_string());
                let shape = match (geocode.is_compound(), geocode.is_wildcard()) {
                    (_, true) => "children",
                    (true, false) => "list",
                    (false, false) => "area",
                };
                format!("{geocode:<20} #{:<4} {shape:<8} {options}", overlay.id)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCRIPT: &str = r##"[
        { "op": "load", "geocode": "610604" },
        { "op": "ready" },
        { "op": "load", "geocode": "610604;610607" },
        { "op": "load", "geocode": "610604;610607", "options": { "fillColor": "#00ff00" } },
        { "op": "clear" }
    ]"##;

    fn run(script: &str, config: MapConfig) -> (Session, Vec<StepOutcome>) {
        let steps = parse_script(script).unwrap();
        let mut session = Session::new(config);
        let outcomes = steps.iter().map(|s| session.apply(s)).collect();
        (session, outcomes)
    }

    #[test]
    fn parses_every_step_kind() {
        let steps = parse_script(
            r##"[
                { "op": "ready", "surface": "left-pane" },
                { "op": "load", "geocode": "10__", "options": { "fillColor": null } },
                { "op": "districts", "districts": [{ "geocode": "9403", "fillColor": "#00aa00" }] },
                { "op": "clear" },
                { "op": "dispose" }
            ]"##,
        )
        .unwrap();
        assert_eq!(steps.len(), 5);
        assert!(matches!(&steps[0], Step::Ready { surface } if surface == "left-pane"));
        match &steps[1] {
            Step::Load { geocode, options } => {
                assert_eq!(geocode.as_str(), "10__");
                assert_eq!(options.fill_color, FillColor::None);
            }
            other => panic!("unexpected step {other}"),
        }
    }

    #[test]
    fn unknown_op_is_rejected() {
        assert!(parse_script(r#"[{ "op": "explode" }]"#).is_err());
    }

    #[test]
    fn each_step_reports_only_its_own_calls() {
        let (session, outcomes) = run(SCRIPT, MapConfig::default().with_districts(Vec::new()));

        // Load before ready does nothing.
        assert!(outcomes[0].calls.is_empty());
        assert!(outcomes[1].calls.is_empty());
        assert_eq!(outcomes[2].calls.len(), 1);
        assert_eq!(
            outcomes[3].calls.iter().map(|c| c.is_unload()).collect::<Vec<_>>(),
            [true, false]
        );
        assert_eq!(outcomes[4].calls, [MapCall::ClearAll]);
        assert!(outcomes.iter().all(|o| o.error.is_none()));
        assert!(session.summary().is_empty());
    }

    #[test]
    fn ready_reports_the_startup_district_set() {
        let (session, outcomes) = run(r#"[{ "op": "ready" }]"#, MapConfig::default());
        assert_eq!(outcomes[0].calls.len(), 1);
        let summary = session.summary();
        assert_eq!(summary.len(), 1);
        assert!(summary[0].starts_with("94__"));
        assert!(summary[0].contains("children"));
    }

    #[test]
    fn dispose_resets_the_call_cursor() {
        let (_, outcomes) = run(
            r#"[
                { "op": "ready" },
                { "op": "load", "geocode": "610604" },
                { "op": "dispose" },
                { "op": "ready" },
                { "op": "load", "geocode": "610604" }
            ]"#,
            MapConfig::default().with_districts(Vec::new()),
        );
        assert!(outcomes[2].calls.is_empty());
        // Fresh map: a plain load, no unload of the disposed overlay.
        assert_eq!(outcomes[4].calls.len(), 1);
        assert!(outcomes[4].calls[0].is_load());
    }
}

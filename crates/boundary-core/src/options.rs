// crates/boundary-core/src/options.rs
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Fill style of a boundary object.
///
/// The engine distinguishes "not specified" (use the engine default) from an
/// explicit `null` (draw outline only), so this is a tri-state rather than an
/// `Option<String>`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FillColor {
    /// Field omitted, engine default applies.
    #[default]
    Unset,
    /// Explicitly no fill. Serialized as `null`.
    None,
    /// CSS color string such as `"#ff0000"` or `"rgba(255,0,0,0.4)"`.
    Color(String),
}

impl FillColor {
    pub fn is_unset(&self) -> bool {
        matches!(self, FillColor::Unset)
    }

    pub fn as_color(&self) -> Option<&str> {
        match self {
            FillColor::Color(c) => Some(c),
            _ => None,
        }
    }
}

impl From<&str> for FillColor {
    fn from(c: &str) -> Self {
        FillColor::Color(c.to_string())
    }
}

impl Serialize for FillColor {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        match self {
            FillColor::Color(c) => s.serialize_str(c),
            FillColor::Unset | FillColor::None => s.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for FillColor {
    // Only reached when the key is present; a missing key falls back to
    // `Default` (Unset) through `#[serde(default)]` on the field.
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        Ok(match Option::<String>::deserialize(d)? {
            Some(c) => FillColor::Color(c),
            None => FillColor::None,
        })
    }
}

/// Display options for a boundary object, mirroring the engine's
/// `BoundaryObjectOptions`. Every field is optional; the engine fills in
/// its own defaults for anything left out.
///
/// No range checking happens here. `simplify` is documented by the engine as
/// `0.00005` (high detail) to `0.001` (low detail), but validation belongs to
/// the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundaryOptions {
    /// Merge multiple sub-areas into a single object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub combine: Option<bool>,
    /// Geometry detail level, lower is more detailed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub simplify: Option<f64>,
    /// Skip small disconnected fragments.
    #[serde(
        default,
        rename = "ignorefragment",
        skip_serializing_if = "Option::is_none"
    )]
    pub ignore_fragment: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Text rendered on the object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_color: Option<String>,
    #[serde(default, skip_serializing_if = "FillColor::is_unset")]
    pub fill_color: FillColor,
}

/// Detail level used for the startup district set.
pub const DISTRICT_SIMPLIFY: f64 = 0.0005;
/// Outline color used for the startup district set.
pub const DISTRICT_LINE_COLOR: &str = "#ff0000";

impl BoundaryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Style applied to every entry of the startup district set before the
    /// per-entry fill color is merged in.
    pub fn district_template() -> Self {
        Self {
            combine: Some(true),
            simplify: Some(DISTRICT_SIMPLIFY),
            line_color: Some(DISTRICT_LINE_COLOR.to_string()),
            ..Self::default()
        }
    }

    pub fn with_combine(mut self, combine: bool) -> Self {
        self.combine = Some(combine);
        self
    }

    pub fn with_simplify(mut self, simplify: f64) -> Self {
        self.simplify = Some(simplify);
        self
    }

    pub fn with_ignore_fragment(mut self, ignore: bool) -> Self {
        self.ignore_fragment = Some(ignore);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_line_color(mut self, color: impl Into<String>) -> Self {
        self.line_color = Some(color.into());
        self
    }

    pub fn with_fill_color(mut self, color: impl Into<String>) -> Self {
        self.fill_color = FillColor::Color(color.into());
        self
    }

    pub fn without_fill(mut self) -> Self {
        self.fill_color = FillColor::None;
        self
    }

    /// Returns `self` overlaid with every field that is set in `overrides`.
    pub fn merge(&self, overrides: &BoundaryOptions) -> BoundaryOptions {
        BoundaryOptions {
            combine: overrides.combine.or(self.combine),
            simplify: overrides.simplify.or(self.simplify),
            ignore_fragment: overrides.ignore_fragment.or(self.ignore_fragment),
            title: overrides.title.clone().or_else(|| self.title.clone()),
            label: overrides.label.clone().or_else(|| self.label.clone()),
            line_color: overrides
                .line_color
                .clone()
                .or_else(|| self.line_color.clone()),
            fill_color: if overrides.fill_color.is_unset() {
                self.fill_color.clone()
            } else {
                overrides.fill_color.clone()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_options_serialize_to_empty_object() {
        let v = serde_json::to_value(BoundaryOptions::default()).unwrap();
        assert_eq!(v, json!({}));
    }

    #[test]
    fn explicit_no_fill_serializes_as_null() {
        let v = serde_json::to_value(BoundaryOptions::new().without_fill()).unwrap();
        assert_eq!(v, json!({ "fillColor": null }));
    }

    #[test]
    fn wire_names_match_engine_keys() {
        let opts = BoundaryOptions::new()
            .with_ignore_fragment(true)
            .with_line_color("#000000")
            .with_fill_color("#00ff00");
        let v = serde_json::to_value(opts).unwrap();
        assert_eq!(
            v,
            json!({ "ignorefragment": true, "lineColor": "#000000", "fillColor": "#00ff00" })
        );
    }

    #[test]
    fn deserialize_distinguishes_missing_from_null() {
        let missing: BoundaryOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(missing.fill_color, FillColor::Unset);

        let null: BoundaryOptions = serde_json::from_str(r#"{"fillColor":null}"#).unwrap();
        assert_eq!(null.fill_color, FillColor::None);

        let set: BoundaryOptions = serde_json::from_str(r##"{"fillColor":"#123456"}"##).unwrap();
        assert_eq!(set.fill_color.as_color(), Some("#123456"));
    }

    #[test]
    fn merge_prefers_overrides_and_keeps_template_rest() {
        let merged = BoundaryOptions::district_template()
            .merge(&BoundaryOptions::new().with_fill_color("#ff0000"));
        assert_eq!(merged.combine, Some(true));
        assert_eq!(merged.simplify, Some(DISTRICT_SIMPLIFY));
        assert_eq!(merged.line_color.as_deref(), Some(DISTRICT_LINE_COLOR));
        assert_eq!(merged.fill_color.as_color(), Some("#ff0000"));
    }

    #[test]
    fn merge_keeps_explicit_no_fill_override() {
        let base = BoundaryOptions::new().with_fill_color("#ff0000");
        let merged = base.merge(&BoundaryOptions::new().without_fill());
        assert_eq!(merged.fill_color, FillColor::None);
    }
}

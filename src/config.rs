//! Configuration for the lasso selection life cycle.
//!
//! [`LassoConfig`] is the resolved, immutable configuration the
//! controller reads. Callers hand in a [`LassoOverrides`] overlay;
//! scalar overrides replace the default value, style dictionaries are
//! merged key by key onto the default dictionary (overlay keys win).
//! The merge happens exactly once, at construction — there is no
//! per-use fallback and no shared mutable default state.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::style::StyleMap;

// ─────────────────────────────────────────────────────────────────────────────
// Line style
// ─────────────────────────────────────────────────────────────────────────────

/// Shape of stroke endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineCap {
    Butt,
    Round,
    Square,
}

/// Visual style of the lasso stroke and the result rectangle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    /// Stroke width in surface pixels.
    pub width: f32,
    pub cap: LineCap,
    /// Stroke color as a CSS-style color string. Travels unvalidated to
    /// the surface; an empty or unparsable value leaves the surface on
    /// its own fallback color.
    pub color: String,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            width: 10.0,
            cap: LineCap::Round,
            color: String::new(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// LassoConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Resolved configuration; immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LassoConfig {
    /// Class applied to word-units matched by a stroke.
    pub highlight_class: String,
    /// Inline style applied alongside `highlight_class`.
    pub highlight_style: StyleMap,
    /// Stroke appearance.
    pub line: LineStyle,
    /// Identifier given to the mounted drawing surface.
    pub surface_id: String,
    /// Inline style for the mounted drawing surface.
    pub surface_style: StyleMap,
    /// Class applied to every word-unit.
    pub unit_class: String,
    /// Inline style applied to every word-unit.
    pub unit_style: StyleMap,
    /// Class applied to the wrapper element around each unitized run.
    pub wrapper_class: String,
    /// Inline style applied to the wrapper element.
    pub wrapper_style: StyleMap,
}

/// The canonical defaults, as one explicit immutable value.
pub static DEFAULTS: Lazy<LassoConfig> = Lazy::new(|| LassoConfig {
    highlight_class: "highlight".into(),
    highlight_style: [("background-color", "yellow")].into_iter().collect(),
    line: LineStyle::default(),
    surface_id: "lasso-surface".into(),
    surface_style: [
        ("position", "fixed"),
        ("top", "0"),
        ("left", "0"),
        ("z-index", "0"),
    ]
    .into_iter()
    .collect(),
    unit_class: "lasso-word".into(),
    unit_style: StyleMap::new(),
    wrapper_class: "lasso-word-wrap".into(),
    wrapper_style: [("display", "inline")].into_iter().collect(),
});

impl Default for LassoConfig {
    fn default() -> Self {
        DEFAULTS.clone()
    }
}

impl LassoConfig {
    /// Resolve a configuration from user overrides.
    ///
    /// Scalar fields take the override when present; style dictionaries
    /// are merged onto the default dictionary with override keys winning.
    pub fn with_overrides(overrides: LassoOverrides) -> Self {
        let d = &*DEFAULTS;
        let style = |base: &StyleMap, over: Option<StyleMap>| match over {
            Some(over) => StyleMap::merged(base, &over),
            None => base.clone(),
        };
        Self {
            highlight_class: overrides
                .highlight_class
                .unwrap_or_else(|| d.highlight_class.clone()),
            highlight_style: style(&d.highlight_style, overrides.highlight_style),
            line: LineStyle {
                width: overrides.line_width.unwrap_or(d.line.width),
                cap: overrides.line_cap.unwrap_or(d.line.cap),
                color: overrides.line_color.unwrap_or_else(|| d.line.color.clone()),
            },
            surface_id: overrides
                .surface_id
                .unwrap_or_else(|| d.surface_id.clone()),
            surface_style: style(&d.surface_style, overrides.surface_style),
            unit_class: overrides.unit_class.unwrap_or_else(|| d.unit_class.clone()),
            unit_style: style(&d.unit_style, overrides.unit_style),
            wrapper_class: overrides
                .wrapper_class
                .unwrap_or_else(|| d.wrapper_class.clone()),
            wrapper_style: style(&d.wrapper_style, overrides.wrapper_style),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// LassoOverrides
// ─────────────────────────────────────────────────────────────────────────────

/// Partial user overlay over [`DEFAULTS`]; every field optional.
///
/// Deserializable, so hosts can load overrides from JSON config files.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LassoOverrides {
    pub highlight_class: Option<String>,
    pub highlight_style: Option<StyleMap>,
    pub line_width: Option<f32>,
    pub line_cap: Option<LineCap>,
    pub line_color: Option<String>,
    pub surface_id: Option<String>,
    pub surface_style: Option<StyleMap>,
    pub unit_class: Option<String>,
    pub unit_style: Option<StyleMap>,
    pub wrapper_class: Option<String>,
    pub wrapper_style: Option<StyleMap>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_overrides_yields_defaults() {
        let cfg = LassoConfig::with_overrides(LassoOverrides::default());
        assert_eq!(cfg, *DEFAULTS);
    }

    #[test]
    fn scalar_override_replaces_default() {
        let cfg = LassoConfig::with_overrides(LassoOverrides {
            highlight_class: Some("picked".into()),
            line_width: Some(3.0),
            ..Default::default()
        });
        assert_eq!(cfg.highlight_class, "picked");
        assert_eq!(cfg.line.width, 3.0);
        assert_eq!(cfg.line.cap, LineCap::Round);
    }

    #[test]
    fn style_override_merges_key_by_key() {
        let cfg = LassoConfig::with_overrides(LassoOverrides {
            surface_style: Some([("z-index", "40")].into_iter().collect()),
            ..Default::default()
        });
        // Overridden key wins, untouched default keys survive.
        assert_eq!(cfg.surface_style.get("z-index"), Some("40"));
        assert_eq!(cfg.surface_style.get("position"), Some("fixed"));
    }
}

//! Border specification and TOML loading
//!
//! A `BorderSpec` carries everything that shapes one render: the measured
//! rectangle, grid metrics, colors, the fill pattern, the corner style and an
//! optional emblem. Every field has a default, so a TOML file only needs to
//! name what it changes.

use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::SpecError;

/// Fill rule for interior band cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(from = "String")]
pub enum Pattern {
    #[default]
    Braid,
    TwistX,
    TwistY,
    Box,
}

impl Pattern {
    /// Parse a pattern name, falling back to braid for anything unknown
    pub fn parse_lenient(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "braid" => Pattern::Braid,
            "twist-x" => Pattern::TwistX,
            "twist-y" => Pattern::TwistY,
            "box" => Pattern::Box,
            other => {
                tracing::warn!(pattern = other, "unknown pattern, using braid");
                Pattern::Braid
            }
        }
    }

    /// Whether the grid must have odd extents on both axes.
    ///
    /// All fills select by parity, box included, so every pattern needs the
    /// sequence to read the same from either end.
    pub fn requires_odd_grid(self) -> bool {
        match self {
            Pattern::Braid | Pattern::TwistX | Pattern::TwistY | Pattern::Box => true,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Pattern::Braid => "braid",
            Pattern::TwistX => "twist-x",
            Pattern::TwistY => "twist-y",
            Pattern::Box => "box",
        }
    }
}

impl From<String> for Pattern {
    fn from(name: String) -> Self {
        Self::parse_lenient(&name)
    }
}

/// Visual style of corner and edge curves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Deserialize)]
#[serde(from = "String")]
pub enum CornerStyle {
    #[default]
    Round,
    Sharp,
    Box,
}

impl CornerStyle {
    /// Parse a corner style name, falling back to round for anything unknown
    pub fn parse_lenient(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "round" => CornerStyle::Round,
            "sharp" => CornerStyle::Sharp,
            "box" => CornerStyle::Box,
            other => {
                tracing::warn!(corner_style = other, "unknown corner style, using round");
                CornerStyle::Round
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CornerStyle::Round => "round",
            CornerStyle::Sharp => "sharp",
            CornerStyle::Box => "box",
        }
    }
}

impl From<String> for CornerStyle {
    fn from(name: String) -> Self {
        Self::parse_lenient(&name)
    }
}

/// Where the host draws the emblem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmblemPlacement {
    TopLeft,
    TopRight,
    BottomCenter,
    Watermark,
    SignatureLeft,
    SignatureRight,
}

impl FromStr for EmblemPlacement {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top-left" => Ok(Self::TopLeft),
            "top-right" => Ok(Self::TopRight),
            "bottom-center" => Ok(Self::BottomCenter),
            "watermark" => Ok(Self::Watermark),
            "signature-left" => Ok(Self::SignatureLeft),
            "signature-right" => Ok(Self::SignatureRight),
            _ => Err(format!("unknown emblem placement '{}'", s)),
        }
    }
}

/// An emblem declared by the host
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Emblem {
    pub placement: EmblemPlacement,
    /// Display scale of the emblem; widens the clearance gap
    #[serde(default = "default_emblem_scale")]
    pub scale: f64,
}

fn default_emblem_scale() -> f64 {
    1.0
}

impl Emblem {
    pub fn new(placement: EmblemPlacement) -> Self {
        Self {
            placement,
            scale: default_emblem_scale(),
        }
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }
}

/// Complete description of one border render
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct BorderSpec {
    /// When false the border renders as an empty document
    pub enabled: bool,
    /// Measured rectangle width in pixels
    pub outer_width: f64,
    /// Measured rectangle height in pixels
    pub outer_height: f64,
    /// Edge length of one grid cell in pixels
    pub cell_size: f64,
    /// Band thickness in cells (1 to 3)
    pub thickness: u32,
    /// Padding between the rectangle edge and the usable area
    pub inset: f64,
    pub stroke_color: String,
    /// Visual strand width in pixels
    pub stroke_width: f64,
    /// Second color drawn inside each strand for a ribbon effect
    pub ribbon_color: Option<String>,
    pub pattern: Pattern,
    pub corner_style: CornerStyle,
    pub emblem: Option<Emblem>,
}

impl Default for BorderSpec {
    fn default() -> Self {
        Self {
            enabled: true,
            outer_width: 0.0,
            outer_height: 0.0,
            cell_size: 20.0,
            thickness: 2,
            inset: 0.0,
            stroke_color: "currentColor".to_string(),
            stroke_width: 3.0,
            ribbon_color: None,
            pattern: Pattern::Braid,
            corner_style: CornerStyle::Round,
            emblem: None,
        }
    }
}

impl BorderSpec {
    /// Create a spec for a rectangle of the given size with default styling
    pub fn new(outer_width: f64, outer_height: f64) -> Self {
        Self {
            outer_width,
            outer_height,
            ..Self::default()
        }
    }

    /// Load a spec from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, SpecError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a spec from a TOML string
    pub fn from_str(content: &str) -> Result<Self, SpecError> {
        Ok(toml::from_str(content)?)
    }

    /// Band thickness clamped into the supported 1..=3 range
    pub fn thickness_rows(&self) -> u32 {
        self.thickness.clamp(1, 3)
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.outer_width = width;
        self.outer_height = height;
        self
    }

    pub fn with_cell_size(mut self, cell_size: f64) -> Self {
        self.cell_size = cell_size;
        self
    }

    pub fn with_thickness(mut self, thickness: u32) -> Self {
        self.thickness = thickness;
        self
    }

    pub fn with_inset(mut self, inset: f64) -> Self {
        self.inset = inset;
        self
    }

    pub fn with_stroke(mut self, color: impl Into<String>, width: f64) -> Self {
        self.stroke_color = color.into();
        self.stroke_width = width;
        self
    }

    pub fn with_ribbon(mut self, color: impl Into<String>) -> Self {
        self.ribbon_color = Some(color.into());
        self
    }

    pub fn with_pattern(mut self, pattern: Pattern) -> Self {
        self.pattern = pattern;
        self
    }

    pub fn with_corner_style(mut self, style: CornerStyle) -> Self {
        self.corner_style = style;
        self
    }

    pub fn with_emblem(mut self, emblem: Emblem) -> Self {
        self.emblem = Some(emblem);
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

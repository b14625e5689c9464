//! Knotwork - procedural Celtic-knot borders as SVG
//!
//! This library fits a cell grid onto an arbitrary rectangle, classifies the
//! band cells into tile archetypes, weaves over/under crossings with
//! occlusion masks and emits one self-contained SVG document.
//!
//! # Example
//!
//! ```rust
//! use knotwork::{render, BorderSpec};
//!
//! let svg = render(&BorderSpec::new(600.0, 800.0));
//! assert!(svg.contains("<svg"));
//! ```

pub mod error;
pub mod layout;
pub mod renderer;
pub mod spec;

pub use error::SpecError;
pub use layout::{compute, Archetype, BorderLayout, Grid, Tile};
pub use renderer::{render_svg, SvgConfig};
pub use spec::{BorderSpec, CornerStyle, Emblem, EmblemPlacement, Pattern};

/// Configuration for the complete render pipeline
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// SVG output configuration
    pub svg: SvgConfig,
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }

    /// Set the definition id prefix
    pub fn with_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.svg = self.svg.with_id_prefix(prefix);
        self
    }
}

/// Render a border to SVG with default configuration
///
/// This is the main entry point for the library. It solves the grid,
/// classifies the band and assembles the SVG document. Degenerate input
/// (a non-positive rectangle, a disabled border) yields an empty document
/// sized to the rectangle rather than an error.
///
/// # Example
///
/// ```rust
/// use knotwork::{render, BorderSpec, Pattern};
///
/// let spec = BorderSpec::new(400.0, 300.0)
///     .with_thickness(3)
///     .with_pattern(Pattern::Braid);
/// let svg = render(&spec);
///
/// assert!(svg.contains("<mask"));
/// ```
pub fn render(spec: &BorderSpec) -> String {
    render_with_config(spec, &RenderConfig::default())
}

/// Render a border to SVG with custom configuration
///
/// # Example
///
/// ```rust
/// use knotwork::{render_with_config, BorderSpec, RenderConfig, SvgConfig};
///
/// let config = RenderConfig::new()
///     .with_svg(SvgConfig::default().with_pretty_print(false))
///     .with_id_prefix("left-page");
///
/// let svg = render_with_config(&BorderSpec::new(300.0, 300.0), &config);
/// assert!(svg.contains("left-page-path-"));
/// ```
pub fn render_with_config(spec: &BorderSpec, config: &RenderConfig) -> String {
    let layout = layout::compute(spec);
    render_svg(&layout, spec, &config.svg)
}

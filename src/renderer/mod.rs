//! SVG renderer for border layouts
//!
//! This module takes a `BorderLayout`, resolves each tile into strands and
//! assembles one SVG document with shared geometry and positioned instances.

pub mod config;
pub mod geometry;
pub mod svg;
pub mod weave;

pub use config::SvgConfig;
pub use svg::{render_svg, GeometryCatalogue};
pub use weave::{GeometryKey, MaskKey, WeaveMetrics};

//! Weave compositor: turns classified tiles into strands
//!
//! Each tile renders as one or two strands. Crossing tiles draw the "under"
//! diagonal first through an occlusion mask that cuts a gap along the "over"
//! diagonal, then draw the "over" diagonal unmasked on top.

use crate::layout::{Archetype, Side, Tile};
use crate::spec::{BorderSpec, CornerStyle};

use super::geometry::{Diagonal, Glyph, UNIT};

/// Gap between crossing strands in screen pixels, on top of the stroke width
pub const VISUAL_GAP_PX: f64 = 2.5;

/// Ribbon stroke width relative to the main stroke
pub const RIBBON_RATIO: f64 = 0.4;

/// Stroke metrics in normalized cell units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeaveMetrics {
    /// Main strand width
    pub stroke: f64,
    /// Width of the gap cut into the under strand
    pub gap: f64,
    /// Width of the optional ribbon stroke
    pub ribbon: f64,
}

impl WeaveMetrics {
    pub fn new(stroke_width_px: f64, cell_size: f64) -> Self {
        let scale = UNIT / cell_size;
        let stroke = stroke_width_px * scale;
        Self {
            stroke,
            gap: stroke + VISUAL_GAP_PX * scale,
            ribbon: (stroke * RIBBON_RATIO).max(1.0),
        }
    }

    /// Integer identity of the gap size, `round(gap * 100)`
    pub fn gap_id(&self) -> u64 {
        let id = (self.gap * 100.0).round();
        if id.is_finite() && id > 0.0 {
            id as u64
        } else {
            0
        }
    }
}

/// Identity of every shared definition one render needs.
///
/// A pure function of the `BorderSpec` fields that change geometry: the corner style
/// picks the paths, the gap id sizes the masks. Two specs with the same key
/// share identical definitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GeometryKey {
    pub style: CornerStyle,
    pub gap_id: u64,
}

impl GeometryKey {
    pub fn for_spec(spec: &BorderSpec) -> Self {
        Self {
            style: spec.corner_style,
            gap_id: WeaveMetrics::new(spec.stroke_width, spec.cell_size).gap_id(),
        }
    }
}

/// Identity of one occlusion mask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MaskKey {
    /// The diagonal that passes over; the mask cuts along it
    pub over: Diagonal,
    pub gap_id: u64,
}

impl MaskKey {
    pub fn name(&self) -> String {
        format!("mask-{}-{}-over", self.gap_id, self.over.as_str())
    }
}

/// One stroked path, optionally masked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strand {
    pub glyph: Glyph,
    pub mask: Option<MaskKey>,
}

impl Strand {
    fn plain(glyph: Glyph) -> Self {
        Self { glyph, mask: None }
    }

    fn under(under: Diagonal, gap_id: u64) -> Self {
        Self {
            glyph: Glyph::Diagonal(under),
            mask: Some(MaskKey {
                over: under.other(),
                gap_id,
            }),
        }
    }
}

/// Strands for one archetype, in draw order
pub fn strands(archetype: Archetype, gap_id: u64) -> Vec<Strand> {
    match archetype {
        Archetype::Corner(c) => vec![Strand::plain(Glyph::Corner(c))],
        Archetype::InnerCorner(c) => vec![Strand::plain(Glyph::InnerCorner(c))],
        Archetype::Edge(s) => vec![Strand::plain(Glyph::Edge(s))],
        Archetype::InnerEdge(s) => vec![Strand::plain(Glyph::Edge(s.opposite()))],
        Archetype::CrossA => crossing(Diagonal::Rising, gap_id),
        Archetype::CrossB => crossing(Diagonal::Falling, gap_id),
        Archetype::BoxV => vec![
            Strand::plain(Glyph::Edge(Side::Right)),
            Strand::plain(Glyph::Edge(Side::Left)),
        ],
        Archetype::BoxH => vec![
            Strand::plain(Glyph::Edge(Side::Bottom)),
            Strand::plain(Glyph::Edge(Side::Top)),
        ],
    }
}

fn crossing(under: Diagonal, gap_id: u64) -> Vec<Strand> {
    vec![
        Strand::under(under, gap_id),
        Strand::plain(Glyph::Diagonal(under.other())),
    ]
}

/// A tile with its strands resolved
#[derive(Debug, Clone, PartialEq)]
pub struct WovenTile {
    pub tile: Tile,
    pub strands: Vec<Strand>,
}

/// Resolve strands for every tile, preserving tile order
pub fn weave(tiles: &[Tile], gap_id: u64) -> Vec<WovenTile> {
    tiles
        .iter()
        .map(|tile| WovenTile {
            tile: *tile,
            strands: strands(tile.archetype, gap_id),
        })
        .collect()
}

/// Paint attributes shared by every strand of one render
#[derive(Debug, Clone, PartialEq)]
pub struct StrandPaint {
    pub color: String,
    pub width: f64,
    /// Second color and width drawn over each strand
    pub ribbon: Option<(String, f64)>,
    pub line_join: &'static str,
}

impl StrandPaint {
    pub fn for_spec(spec: &BorderSpec, metrics: &WeaveMetrics) -> Self {
        Self {
            color: spec.stroke_color.clone(),
            width: metrics.stroke,
            ribbon: spec
                .ribbon_color
                .as_ref()
                .map(|color| (color.clone(), metrics.ribbon)),
            line_join: match spec.corner_style {
                CornerStyle::Round => "round",
                CornerStyle::Sharp | CornerStyle::Box => "miter",
            },
        }
    }
}

//! Geometry library: normalized strand paths
//!
//! Every path lives in a 100x100 unit cell and is scaled to the real cell
//! size by the tile transform. Corner, inner-corner and edge paths depend on
//! the corner style; the two crossing diagonals do not. Which diagonal passes
//! over is decided by draw order and masking, not by a different path.

use crate::layout::{Corner, Side};
use crate::spec::CornerStyle;

/// Edge length of the normalized cell
pub const UNIT: f64 = 100.0;

/// The two diagonals of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Diagonal {
    /// Bottom-left to top-right
    Rising,
    /// Top-left to bottom-right
    Falling,
}

impl Diagonal {
    pub fn path_data(self) -> &'static str {
        match self {
            Diagonal::Rising => "M0,100 L100,0",
            Diagonal::Falling => "M0,0 L100,100",
        }
    }

    pub fn other(self) -> Diagonal {
        match self {
            Diagonal::Rising => Diagonal::Falling,
            Diagonal::Falling => Diagonal::Rising,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Diagonal::Rising => "rising",
            Diagonal::Falling => "falling",
        }
    }
}

/// One entry of the path catalogue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Glyph {
    Corner(Corner),
    InnerCorner(Corner),
    Edge(Side),
    Diagonal(Diagonal),
}

impl Glyph {
    /// Whether the path differs between corner styles
    pub fn is_styled(self) -> bool {
        !matches!(self, Glyph::Diagonal(_))
    }

    /// Path data for this glyph in a given corner style
    pub fn path_data(self, style: CornerStyle) -> &'static str {
        match self {
            Glyph::Corner(c) | Glyph::InnerCorner(c) => corner_path(c, style),
            Glyph::Edge(s) => edge_path(s, style),
            Glyph::Diagonal(d) => d.path_data(),
        }
    }

    /// Stable name used in element ids, e.g. `corner-tl` or `edge-top`
    pub fn name(self) -> String {
        match self {
            Glyph::Corner(c) => format!("corner-{}", c.as_str()),
            Glyph::InnerCorner(c) => format!("inner-corner-{}", c.as_str()),
            Glyph::Edge(s) => format!("edge-{}", s.as_str()),
            Glyph::Diagonal(d) => format!("diagonal-{}", d.as_str()),
        }
    }
}

// Inner corners use the outer corner curve in every style.
fn corner_path(corner: Corner, style: CornerStyle) -> &'static str {
    match (style, corner) {
        (CornerStyle::Round, Corner::TopLeft) => "M100,0 Q0,0 0,100",
        (CornerStyle::Round, Corner::TopRight) => "M0,0 Q100,0 100,100",
        (CornerStyle::Round, Corner::BottomLeft) => "M0,0 Q0,100 100,100",
        (CornerStyle::Round, Corner::BottomRight) => "M0,100 Q100,100 100,0",
        (CornerStyle::Sharp | CornerStyle::Box, Corner::TopLeft) => "M100,0 L0,0 L0,100",
        (CornerStyle::Sharp | CornerStyle::Box, Corner::TopRight) => "M0,0 L100,0 L100,100",
        (CornerStyle::Sharp | CornerStyle::Box, Corner::BottomLeft) => "M100,100 L0,100 L0,0",
        (CornerStyle::Sharp | CornerStyle::Box, Corner::BottomRight) => "M0,100 L100,100 L100,0",
    }
}

fn edge_path(side: Side, style: CornerStyle) -> &'static str {
    match (style, side) {
        (CornerStyle::Round, Side::Top) => "M0,100 C20,20 80,20 100,100",
        (CornerStyle::Round, Side::Bottom) => "M0,0 C20,80 80,80 100,0",
        (CornerStyle::Round, Side::Left) => "M100,0 C20,20 20,80 100,100",
        (CornerStyle::Round, Side::Right) => "M0,0 C80,20 80,80 0,100",
        (CornerStyle::Sharp, Side::Top) => "M0,100 L50,0 L100,100",
        (CornerStyle::Sharp, Side::Bottom) => "M0,0 L50,100 L100,0",
        (CornerStyle::Sharp, Side::Left) => "M100,0 L0,50 L100,100",
        (CornerStyle::Sharp, Side::Right) => "M0,0 L100,50 L0,100",
        (CornerStyle::Box, Side::Top) => "M0,100 L0,20 L100,20 L100,100",
        (CornerStyle::Box, Side::Bottom) => "M0,0 L0,80 L100,80 L100,0",
        (CornerStyle::Box, Side::Left) => "M100,0 L20,0 L20,100 L100,100",
        (CornerStyle::Box, Side::Right) => "M0,0 L80,0 L80,100 L0,100",
    }
}

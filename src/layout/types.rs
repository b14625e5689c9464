//! Core types for the border layout

use std::fmt;

/// An integer grid coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub x: u32,
    pub y: u32,
}

impl Cell {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// One side of the rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Top, Side::Bottom, Side::Left, Side::Right];

    /// The side facing this one across the rectangle
    pub fn opposite(self) -> Side {
        match self {
            Side::Top => Side::Bottom,
            Side::Bottom => Side::Top,
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Bottom => "bottom",
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// One corner of the rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    /// The diagonally opposite corner (a half turn of the grid)
    pub fn opposite(self) -> Corner {
        match self {
            Corner::TopLeft => Corner::BottomRight,
            Corner::TopRight => Corner::BottomLeft,
            Corner::BottomLeft => Corner::TopRight,
            Corner::BottomRight => Corner::TopLeft,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Corner::TopLeft => "tl",
            Corner::TopRight => "tr",
            Corner::BottomLeft => "bl",
            Corner::BottomRight => "br",
        }
    }
}

/// The classification of an occupied band cell.
///
/// Every occupied cell maps to exactly one variant. The compositor matches
/// over this enum exhaustively, so adding an archetype forces every renderer
/// to decide how to draw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Archetype {
    /// Outer corner of the band
    Corner(Corner),
    /// Corner of the inner ring (thickness > 1 only)
    InnerCorner(Corner),
    /// Outermost row or column on one side
    Edge(Side),
    /// Innermost row or column on one side (thickness > 1 only).
    ///
    /// Drawn with the opposite side's edge curve, which mirrors the outer
    /// ring on the inside of the band.
    InnerEdge(Side),
    /// Crossing with the rising diagonal underneath
    CrossA,
    /// Crossing with the falling diagonal underneath
    CrossB,
    /// Two vertical, non-crossing strands
    BoxV,
    /// Two horizontal, non-crossing strands
    BoxH,
}

impl Archetype {
    /// The archetype this cell takes after rotating the grid by 180 degrees
    pub fn rotated_half_turn(self) -> Archetype {
        match self {
            Archetype::Corner(c) => Archetype::Corner(c.opposite()),
            Archetype::InnerCorner(c) => Archetype::InnerCorner(c.opposite()),
            Archetype::Edge(s) => Archetype::Edge(s.opposite()),
            Archetype::InnerEdge(s) => Archetype::InnerEdge(s.opposite()),
            other => other,
        }
    }

    pub fn is_inner(self) -> bool {
        matches!(self, Archetype::InnerCorner(_) | Archetype::InnerEdge(_))
    }

    /// Two-letter code used in debug maps
    pub fn code(self) -> &'static str {
        match self {
            Archetype::Corner(Corner::TopLeft) => "TL",
            Archetype::Corner(Corner::TopRight) => "TR",
            Archetype::Corner(Corner::BottomLeft) => "BL",
            Archetype::Corner(Corner::BottomRight) => "BR",
            Archetype::InnerCorner(Corner::TopLeft) => "tl",
            Archetype::InnerCorner(Corner::TopRight) => "tr",
            Archetype::InnerCorner(Corner::BottomLeft) => "bl",
            Archetype::InnerCorner(Corner::BottomRight) => "br",
            Archetype::Edge(Side::Top) => "ET",
            Archetype::Edge(Side::Bottom) => "EB",
            Archetype::Edge(Side::Left) => "EL",
            Archetype::Edge(Side::Right) => "ER",
            Archetype::InnerEdge(Side::Top) => "IT",
            Archetype::InnerEdge(Side::Bottom) => "IB",
            Archetype::InnerEdge(Side::Left) => "IL",
            Archetype::InnerEdge(Side::Right) => "IR",
            Archetype::CrossA => "XA",
            Archetype::CrossB => "XB",
            Archetype::BoxV => "BV",
            Archetype::BoxH => "BH",
        }
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Archetype::Corner(c) => write!(f, "corner-{}", c.as_str()),
            Archetype::InnerCorner(c) => write!(f, "inner-corner-{}", c.as_str()),
            Archetype::Edge(s) => write!(f, "edge-{}", s.as_str()),
            Archetype::InnerEdge(s) => write!(f, "inner-edge-{}", s.as_str()),
            Archetype::CrossA => f.write_str("cross-a"),
            Archetype::CrossB => f.write_str("cross-b"),
            Archetype::BoxV => f.write_str("box-v"),
            Archetype::BoxH => f.write_str("box-h"),
        }
    }
}

/// A classified cell positioned in pixel space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tile {
    pub cell: Cell,
    /// Pixel x of the cell's top-left corner
    pub x: f64,
    /// Pixel y of the cell's top-left corner
    pub y: f64,
    pub archetype: Archetype,
}

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

pub type RegionId = u32;

/// Region connected to the padding ring. Never colored.
pub const BACKGROUND: RegionId = 0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Point { x, y }
    }
}

/// Unit square of the segmenter grid, in grid-local coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Cell { x, y }
    }
}

/// Impassable unit segment between two grid corners. Endpoints are kept in
/// ascending order so `{p, q}` and `{q, p}` hash the same.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WallSegment {
    a: Point,
    b: Point,
}

impl WallSegment {
    /// Returns `None` unless the points are exactly one unit apart.
    pub fn new(p: Point, q: Point) -> Option<Self> {
        if (p.x - q.x).abs() + (p.y - q.y).abs() != 1 {
            return None;
        }
        let (a, b) = if p <= q { (p, q) } else { (q, p) };
        Some(WallSegment { a, b })
    }

    pub fn endpoints(&self) -> (Point, Point) {
        (self.a, self.b)
    }
}

/// Inclusive integer bounding box of the input polylines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BBox {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl BBox {
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }
}

/// One of the four fill colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Color(u8);

impl Color {
    pub const COUNT: usize = 4;
    pub const ALL: [Color; Color::COUNT] = [Color(0), Color(1), Color(2), Color(3)];

    pub fn new(ix: u8) -> Option<Self> {
        ((ix as usize) < Color::COUNT).then_some(Color(ix))
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl TryFrom<u8> for Color {
    type Error = String;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        Color::new(v).ok_or_else(|| format!("color index {} out of range", v))
    }
}

impl From<Color> for u8 {
    fn from(c: Color) -> u8 {
        c.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub type AdjacencyGraph = BTreeMap<RegionId, BTreeSet<RegionId>>;
pub type ColorAssignment = BTreeMap<RegionId, Color>;

pub mod error;
pub mod model;
pub mod geometry {
    pub mod bbox;
    pub mod limits;
}
pub mod algorithms {
    pub mod adjacency;
    pub mod boundary;
    pub mod coloring;
    pub mod segment;
    pub mod walls;
}
mod json;

use std::collections::BTreeMap;

use algorithms::{
    adjacency, boundary::trace_boundary, coloring, segment::segment, segment::Segmentation,
    walls::build_walls, walls::Walls,
};
use geometry::limits::PAD;

pub use error::{Result, SubdivError};
pub use model::{
    AdjacencyGraph, BBox, Cell, Color, ColorAssignment, Point, RegionId, WallSegment, BACKGROUND,
};

/// Silhouette polylines partitioned into wall-bounded regions.
///
/// Walls and the region partition are computed once in [`Subdivision::build`];
/// boundaries, adjacency and coloring are derived on demand and never
/// mutate the partition.
#[derive(Clone, Debug)]
pub struct Subdivision {
    walls: Walls,
    seg: Segmentation,
}

impl Subdivision {
    pub fn build<L: AsRef<[Point]>>(polylines: &[L]) -> Result<Self> {
        let walls = build_walls(polylines)?;
        let seg = segment(&walls);
        Ok(Subdivision { walls, seg })
    }

    pub fn bbox(&self) -> BBox {
        self.walls.bbox()
    }

    pub fn walls(&self) -> &Walls {
        &self.walls
    }

    pub fn segmentation(&self) -> &Segmentation {
        &self.seg
    }

    /// Grid width in cells, padding included.
    pub fn width(&self) -> i32 {
        self.seg.width()
    }

    pub fn height(&self) -> i32 {
        self.seg.height()
    }

    pub fn region_count(&self) -> usize {
        self.seg.region_count()
    }

    pub fn region_at(&self, c: Cell) -> Option<RegionId> {
        self.seg.region_at(c)
    }

    pub fn cells(&self, id: RegionId) -> Option<&[Cell]> {
        self.seg.cells(id)
    }

    /// Input-frame position of grid corner (0, 0).
    pub fn origin(&self) -> Point {
        let b = self.bbox();
        Point::new(b.left - PAD, b.top - PAD)
    }

    /// Closed boundary of one region, in input coordinates.
    pub fn boundary(&self, id: RegionId) -> Result<Vec<Point>> {
        let o = self.origin();
        let shift = |p: Point| Point::new(p.x + o.x, p.y + o.y);
        let cells = self.seg.cells(id).unwrap_or_default();
        match trace_boundary(cells) {
            Ok(pts) => Ok(pts.into_iter().map(shift).collect()),
            Err(SubdivError::MalformedBoundary { at, .. }) => Err(SubdivError::MalformedBoundary {
                region: Some(id),
                at: shift(at),
            }),
            Err(e) => Err(e),
        }
    }

    /// Boundaries of every non-background region.
    pub fn boundaries(&self) -> Result<BTreeMap<RegionId, Vec<Point>>> {
        self.seg
            .region_ids()
            .filter(|&id| id != BACKGROUND)
            .map(|id| self.boundary(id).map(|b| (id, b)))
            .collect()
    }

    pub fn neighbors(&self, exclude_background: bool) -> AdjacencyGraph {
        adjacency::neighbors(&self.seg, exclude_background)
    }

    /// Four-coloring of the non-background regions.
    pub fn colorize(&self) -> Result<ColorAssignment> {
        coloring::colorize(&self.neighbors(true))
    }

    /// One character per cell: background as a space, region `n` as the
    /// `n`-th letter after `a` (wrapping).
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity(((self.width() + 1) * self.height()) as usize);
        for y in 0..self.height() {
            for x in 0..self.width() {
                match self.region_at(Cell::new(x, y)) {
                    Some(BACKGROUND) | None => out.push(' '),
                    Some(id) => out.push((b'a' + (id % 26) as u8) as char),
                }
            }
            out.push('\n');
        }
        out
    }

    pub fn to_json_value(&self) -> serde_json::Value {
        json::to_json_impl(self)
    }
}

/// Parses `{"version": 1, "lines": [[[x, y], ...], ...]}` into polylines.
pub fn polylines_from_json(v: serde_json::Value) -> Result<Vec<Vec<Point>>> {
    json::polylines_from_json_impl(v)
}

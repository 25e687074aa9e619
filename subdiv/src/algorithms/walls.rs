use std::collections::HashSet;

use crate::{
    error::{not_axis_aligned, too_short, zero_length, Result, SubdivError},
    geometry::{
        bbox::{bbox_of, padded_dims},
        limits,
    },
    model::{BBox, Cell, Point, WallSegment},
};

/// Unit wall segments of the input silhouettes plus the synthetic border.
#[derive(Clone, Debug)]
pub struct Walls {
    pub(crate) bbox: BBox,
    pub(crate) set: HashSet<WallSegment>,
}

impl Walls {
    pub fn bbox(&self) -> BBox {
        self.bbox
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    pub fn contains(&self, p: Point, q: Point) -> bool {
        WallSegment::new(p, q).map_or(false, |w| self.set.contains(&w))
    }

    pub fn iter(&self) -> impl Iterator<Item = &WallSegment> {
        self.set.iter()
    }

    /// Grid cell to the input-frame corner at its top-left.
    pub(crate) fn to_input(&self, c: Cell) -> Point {
        Point::new(
            c.x + self.bbox.left - limits::PAD,
            c.y + self.bbox.top - limits::PAD,
        )
    }

    /// Whether a wall separates two orthogonally adjacent grid cells. The
    /// crossed edge is looked up in the input frame; a diagonal pair is never
    /// separated by a single wall and yields `false`.
    pub fn between(&self, c1: Cell, c2: Cell) -> bool {
        let p1 = self.to_input(c1);
        let p2 = self.to_input(c2);
        if p1.x == p2.x && (p1.y - p2.y).abs() == 1 {
            let y = p1.y.max(p2.y);
            self.contains(Point::new(p1.x, y), Point::new(p1.x + 1, y))
        } else if p1.y == p2.y && (p1.x - p2.x).abs() == 1 {
            let x = p1.x.max(p2.x);
            self.contains(Point::new(x, p1.y), Point::new(x, p1.y + 1))
        } else {
            false
        }
    }
}

fn check_limits<L: AsRef<[Point]>>(polylines: &[L]) -> Result<()> {
    if polylines.len() > limits::MAX_POLYLINES {
        return Err(SubdivError::LimitExceeded {
            what: "polylines",
            max: limits::MAX_POLYLINES as i64,
        });
    }
    let total: usize = polylines.iter().map(|l| l.as_ref().len()).sum();
    if total > limits::MAX_POLYLINE_POINTS_TOTAL {
        return Err(SubdivError::LimitExceeded {
            what: "polyline points",
            max: limits::MAX_POLYLINE_POINTS_TOTAL as i64,
        });
    }
    for p in polylines.iter().flat_map(|l| l.as_ref().iter()) {
        if !limits::in_coord_bounds(p.x) || !limits::in_coord_bounds(p.y) {
            return Err(SubdivError::LimitExceeded {
                what: "coordinate magnitude",
                max: limits::COORD_MAX as i64,
            });
        }
    }
    Ok(())
}

fn validate<L: AsRef<[Point]>>(polylines: &[L]) -> Result<BBox> {
    check_limits(polylines)?;
    for (i, line) in polylines.iter().enumerate() {
        let line = line.as_ref();
        if line.len() < 2 {
            return Err(too_short(i, line.len()));
        }
        for w in line.windows(2) {
            let (p, q) = (w[0], w[1]);
            if p == q {
                return Err(zero_length(i, p));
            }
            if p.x != q.x && p.y != q.y {
                return Err(not_axis_aligned(i, p, q));
            }
        }
    }
    let bbox = bbox_of(polylines)
        .ok_or_else(|| SubdivError::InvalidGeometry("no polylines".into()))?;
    let (w, h) = padded_dims(&bbox, limits::PAD);
    if w * h > limits::MAX_GRID_CELLS {
        return Err(SubdivError::LimitExceeded {
            what: "grid cells",
            max: limits::MAX_GRID_CELLS,
        });
    }
    Ok(bbox)
}

fn unit_wall(p: Point, q: Point) -> WallSegment {
    // callers only step by one unit
    match WallSegment::new(p, q) {
        Some(w) => w,
        None => unreachable!("({}, {}) -> ({}, {}) is not a unit step", p.x, p.y, q.x, q.y),
    }
}

/// Decomposes every polyline into unit wall segments and encloses the
/// result with border walls on the padding ring. Validation runs before
/// anything is allocated.
pub fn build_walls<L: AsRef<[Point]>>(polylines: &[L]) -> Result<Walls> {
    let bbox = validate(polylines)?;
    let mut set = HashSet::new();

    for line in polylines {
        let line = line.as_ref();
        for w in line.windows(2) {
            let (p, q) = (w[0], w[1]);
            if p.x == q.x {
                let d = if q.y >= p.y { 1 } else { -1 };
                let mut y = p.y;
                while y != q.y {
                    y += d;
                    set.insert(unit_wall(Point::new(p.x, y - d), Point::new(p.x, y)));
                }
            } else {
                let d = if q.x >= p.x { 1 } else { -1 };
                let mut x = p.x;
                while x != q.x {
                    x += d;
                    set.insert(unit_wall(Point::new(x - d, p.y), Point::new(x, p.y)));
                }
            }
        }
    }
    let inner = set.len();

    let BBox { left: l, top: t, right: r, bottom: b } = bbox;
    for y in (t - 1)..(b + 3) {
        set.insert(unit_wall(Point::new(l - 2, y - 1), Point::new(l - 2, y)));
        set.insert(unit_wall(Point::new(r + 2, y - 1), Point::new(r + 2, y)));
    }
    for x in (l - 1)..(r + 3) {
        set.insert(unit_wall(Point::new(x - 1, t - 2), Point::new(x, t - 2)));
        set.insert(unit_wall(Point::new(x - 1, b + 2), Point::new(x, b + 2)));
    }

    log::trace!(
        "walls: {} polylines -> {} unit walls ({} border)",
        polylines.len(),
        set.len(),
        set.len() - inner
    );
    Ok(Walls { bbox, set })
}

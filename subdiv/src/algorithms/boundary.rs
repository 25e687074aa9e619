use std::collections::HashMap;

use crate::{
    error::{Result, SubdivError},
    model::{Cell, Point},
};

type Edge = (Point, Point);

// Same rotational order for every cell, so an edge shared by two cells of
// the region shows up once in each direction.
fn cell_edges(c: Cell) -> [Edge; 4] {
    let (x, y) = (c.x, c.y);
    [
        (Point::new(x, y), Point::new(x + 1, y)),
        (Point::new(x + 1, y), Point::new(x + 1, y + 1)),
        (Point::new(x + 1, y + 1), Point::new(x, y + 1)),
        (Point::new(x, y + 1), Point::new(x, y)),
    ]
}

fn collinear(a: Point, b: Point, p: Point) -> bool {
    (a.x == p.x && b.x == p.x) || (a.y == p.y && b.y == p.y)
}

// Appends `p`, first dropping the previous point when it sits in the middle
// of an axis-aligned run.
fn push_elided(pts: &mut Vec<Point>, p: Point) {
    let n = pts.len();
    if n >= 2 && collinear(pts[n - 2], pts[n - 1], p) {
        pts.pop();
    }
    pts.push(p);
}

fn malformed(at: Point) -> SubdivError {
    SubdivError::MalformedBoundary { region: None, at }
}

// The single unvisited boundary edge leaving `from`. Zero means the loop is
// broken; more than one means the region pinches at `from`.
fn take_next(outgoing: &mut HashMap<Point, Vec<Point>>, from: Point) -> Result<Point> {
    match outgoing.get_mut(&from) {
        Some(list) if list.len() == 1 => Ok(list.remove(0)),
        _ => Err(malformed(from)),
    }
}

/// Traces the outer boundary of a simply connected set of cells as a closed
/// polygon of cell corners (first point repeated at the end). Collinear
/// vertices along straight runs are dropped.
///
/// Regions with holes or diagonal self-contact do not have a single simple
/// boundary loop and are reported as [`SubdivError::MalformedBoundary`].
pub fn trace_boundary(cells: &[Cell]) -> Result<Vec<Point>> {
    let mut edges: HashMap<Edge, bool> = HashMap::with_capacity(cells.len() * 4);
    for &c in cells {
        for e in cell_edges(c) {
            if let Some(is_boundary) = edges.get_mut(&e) {
                *is_boundary = false;
            } else if let Some(is_boundary) = edges.get_mut(&(e.1, e.0)) {
                *is_boundary = false;
            } else {
                edges.insert(e, true);
            }
        }
    }

    let mut outgoing: HashMap<Point, Vec<Point>> = HashMap::new();
    let mut total = 0usize;
    let mut start: Option<Edge> = None;
    for (&(a, b), &is_boundary) in &edges {
        if !is_boundary {
            continue;
        }
        outgoing.entry(a).or_default().push(b);
        total += 1;
        if start.map_or(true, |s| (a, b) < s) {
            start = Some((a, b));
        }
    }
    let Some(start) = start else {
        return Err(malformed(cells.first().map_or(Point::new(0, 0), |c| Point::new(c.x, c.y))));
    };
    if take_next(&mut outgoing, start.0)? != start.1 {
        return Err(malformed(start.0));
    }

    let mut pts = vec![start.0];
    let mut visited = 1usize;
    let mut from = start.1;
    loop {
        let to = take_next(&mut outgoing, from)?;
        visited += 1;
        push_elided(&mut pts, from);
        if to == start.0 {
            break;
        }
        from = to;
    }
    push_elided(&mut pts, start.0);

    if visited != total {
        let stray = outgoing
            .iter()
            .filter(|(_, ends)| !ends.is_empty())
            .map(|(p, _)| *p)
            .min()
            .unwrap_or(start.0);
        return Err(malformed(stray));
    }
    Ok(pts)
}

use std::collections::{BTreeSet, HashSet};

use subdiv::algorithms::adjacency::find_asymmetry;
use subdiv::algorithms::coloring::{colorize, find_conflict};
use subdiv::{Cell, Color, Point, Subdivision, SubdivError, BACKGROUND};

fn p(x: i32, y: i32) -> Point {
    Point::new(x, y)
}

fn rect(x0: i32, y0: i32, x1: i32, y1: i32) -> Vec<Point> {
    vec![p(x0, y0), p(x1, y0), p(x1, y1), p(x0, y1), p(x0, y0)]
}

fn assert_partition(s: &Subdivision) {
    let mut seen: HashSet<Cell> = HashSet::new();
    for id in 0..s.region_count() as u32 {
        for &c in s.cells(id).unwrap() {
            assert!(seen.insert(c), "cell {:?} in two regions", c);
            assert_eq!(s.region_at(c), Some(id));
        }
    }
    assert_eq!(seen.len(), (s.width() * s.height()) as usize);
}

#[test]
fn single_square_has_two_regions() {
    let s = Subdivision::build(&[rect(0, 0, 4, 4)]).unwrap();
    assert_eq!(s.region_count(), 2);
    assert_partition(&s);

    let b = s.boundary(1).unwrap();
    assert_eq!(b, vec![p(0, 0), p(4, 0), p(4, 4), p(0, 4), p(0, 0)]);

    let g = s.neighbors(true);
    assert_eq!(g.len(), 1);
    assert!(g[&1].is_empty());
    let colors = s.colorize().unwrap();
    assert_eq!(colors.len(), 1);
    assert!(Color::ALL.contains(&colors[&1]));
}

#[test]
fn corner_touching_squares() {
    let s = Subdivision::build(&[rect(0, 0, 2, 2), rect(2, 2, 4, 4)]).unwrap();
    assert_eq!(s.region_count(), 3);
    assert_partition(&s);

    let boundaries = s.boundaries().unwrap();
    assert_eq!(boundaries[&1], vec![p(0, 0), p(2, 0), p(2, 2), p(0, 2), p(0, 0)]);
    assert_eq!(boundaries[&2], vec![p(2, 2), p(4, 2), p(4, 4), p(2, 4), p(2, 2)]);

    let g = s.neighbors(true);
    assert_eq!(find_asymmetry(&g), None);
    // diagonal contact through the shared corner
    assert_eq!(g[&1], BTreeSet::from([2]));
    let colors = s.colorize().unwrap();
    assert_eq!(find_conflict(&g, &colors), None);
}

#[test]
fn background_owns_the_corners() {
    let s = Subdivision::build(&[rect(-3, 5, 2, 9), vec![p(0, 5), p(0, 9)]]).unwrap();
    let (w, h) = (s.width() - 1, s.height() - 1);
    for c in [Cell::new(0, 0), Cell::new(w, 0), Cell::new(0, h), Cell::new(w, h)] {
        assert_eq!(s.region_at(c), Some(BACKGROUND));
    }
    assert_eq!(s.origin(), p(-5, 3));
}

#[test]
fn boundaries_are_in_input_frame() {
    let s = Subdivision::build(&[rect(10, 20, 13, 22)]).unwrap();
    let b = s.boundary(1).unwrap();
    assert_eq!(b.first(), b.last());
    assert_eq!(b, vec![p(10, 20), p(13, 20), p(13, 22), p(10, 22), p(10, 20)]);
}

#[test]
fn nested_rectangle_leaves_outer_ring_malformed() {
    let s = Subdivision::build(&[rect(0, 0, 6, 6), rect(2, 2, 4, 4)]).unwrap();
    assert_eq!(s.region_count(), 3);
    assert!(s.boundary(2).is_ok());
    match s.boundary(1) {
        Err(SubdivError::MalformedBoundary { region, .. }) => assert_eq!(region, Some(1)),
        other => panic!("expected malformed boundary, got {:?}", other),
    }
}

#[test]
fn snapshot_records_malformed_boundary() {
    let s = Subdivision::build(&[rect(0, 0, 6, 6), rect(2, 2, 4, 4)]).unwrap();
    let v = s.to_json_value();
    let regions = v["regions"].as_array().unwrap();
    assert!(regions[1]["boundary"].is_null());
    assert_eq!(regions[1]["boundary_error"], "malformed_boundary");
    assert!(regions[2]["boundary"].is_array());
    assert!(regions[2].get("boundary_error").is_none());
    assert!(regions[0].get("boundary_error").is_none());
    // the ring and the inner square still color apart
    assert!(v.get("color_error").is_none());
    assert_ne!(regions[1]["color"], regions[2]["color"]);
}

#[test]
fn segmentation_is_idempotent() {
    let lines = vec![
        rect(0, 0, 8, 6),
        vec![p(3, 0), p(3, 4), p(8, 4)],
        vec![p(0, 2), p(3, 2)],
    ];
    let a = Subdivision::build(&lines).unwrap();
    let b = Subdivision::build(&lines).unwrap();
    assert_eq!(a.segmentation(), b.segmentation());
    assert_eq!(a.boundaries().unwrap(), b.boundaries().unwrap());
    assert_eq!(a.colorize().unwrap(), b.colorize().unwrap());
}

#[test]
fn grid_of_rooms_is_four_colored() {
    let mut lines = vec![rect(0, 0, 12, 12)];
    for k in 1..4 {
        lines.push(vec![p(3 * k, 0), p(3 * k, 12)]);
        lines.push(vec![p(0, 3 * k), p(12, 3 * k)]);
    }
    let s = Subdivision::build(&lines).unwrap();
    assert_eq!(s.region_count(), 17);
    let g = s.neighbors(true);
    assert_eq!(find_asymmetry(&g), None);
    // interior room touches all 8 around it
    let center = s.region_at(Cell::new(2 + 4, 2 + 4)).unwrap();
    assert_eq!(g[&center].len(), 8);
    let colors = colorize(&g).unwrap();
    assert_eq!(colors.len(), 16);
    assert_eq!(find_conflict(&g, &colors), None);
}

#[test]
fn ascii_dump_marks_regions() {
    let s = Subdivision::build(&[rect(0, 0, 2, 1)]).unwrap();
    let dump = s.to_ascii();
    let rows: Vec<&str> = dump.lines().collect();
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[2], "  bb  ");
    assert_eq!(rows[0], "      ");
}

#[test]
fn json_snapshot_lists_regions() {
    let s = Subdivision::build(&[rect(0, 0, 4, 4), vec![p(2, 0), p(2, 4)]]).unwrap();
    let v = s.to_json_value();
    assert_eq!(v["version"], 1);
    let regions = v["regions"].as_array().unwrap();
    assert_eq!(regions.len(), 3);
    assert_eq!(regions[0]["background"], true);
    assert!(regions[0]["boundary"].is_null());
    assert_eq!(regions[1]["cells"], 8);
    assert_ne!(regions[1]["color"], regions[2]["color"]);
    assert_eq!(v["neighbors"]["1"], serde_json::json!([2]));
}

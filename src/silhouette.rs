use rand::Rng;
use serde::{Deserialize, Serialize};
use subdiv::Point;

/// Random-walk silhouette parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildingParams {
    pub width: i32,
    pub height: i32,
    pub nlines: usize,
}

impl Default for BuildingParams {
    fn default() -> Self {
        BuildingParams { width: 21, height: 25, nlines: 5 }
    }
}

/// `nlines` walks from the top-center: each drops by 1..=8 (clamped to the
/// last row) and then sidesteps one unit left or right while staying inside
/// `[0, width)`. A walk ends once a drop reaches the last row.
pub fn random_building<R: Rng + ?Sized>(rng: &mut R, params: &BuildingParams) -> Vec<Vec<Point>> {
    let BuildingParams { width, height, nlines } = *params;
    let mut lines = Vec::with_capacity(nlines);
    for _ in 0..nlines {
        let mut line = vec![Point::new(width / 2, 0)];
        loop {
            let last = line[line.len() - 1];
            let h = rng.random_range(1..9);
            let y = (last.y + h).min(height - 1);
            if y != last.y {
                line.push(Point::new(last.x, y));
            }
            if last.y + h >= height {
                break;
            }
            let x = if rng.random_bool(0.5) { last.x + 1 } else { last.x - 1 };
            if (0..width).contains(&x) {
                line.push(Point::new(x, y));
            }
        }
        lines.push(line);
    }
    lines
}

/// Closes the silhouettes from below with a unit-step line across the full
/// width of their bounding box. No-op when the box has no width.
pub fn add_bottom_line(lines: &mut Vec<Vec<Point>>) {
    let Some(b) = subdiv::geometry::bbox::bbox_of(lines.as_slice()) else {
        return;
    };
    if b.right > b.left {
        lines.push((b.left..=b.right).map(|x| Point::new(x, b.bottom)).collect());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn walks_stay_in_bounds_and_axis_aligned() {
        let params = BuildingParams::default();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let lines = random_building(&mut rng, &params);
            assert_eq!(lines.len(), params.nlines);
            for line in &lines {
                assert_eq!(line[0], Point::new(10, 0));
                assert_eq!(line[line.len() - 1].y, params.height - 1);
                for w in line.windows(2) {
                    assert_ne!(w[0], w[1]);
                    assert!(w[0].x == w[1].x || w[0].y == w[1].y);
                    assert!(w[1].y >= w[0].y);
                }
                assert!(line.iter().all(|p| (0..params.width).contains(&p.x)));
            }
        }
    }

    #[test]
    fn same_seed_same_building() {
        let params = BuildingParams::default();
        let a = random_building(&mut StdRng::seed_from_u64(99), &params);
        let b = random_building(&mut StdRng::seed_from_u64(99), &params);
        assert_eq!(a, b);
    }

    #[test]
    fn bottom_line_spans_bbox() {
        let mut lines = vec![
            vec![Point::new(2, 0), Point::new(2, 3)],
            vec![Point::new(2, 0), Point::new(2, 1), Point::new(4, 1), Point::new(4, 3)],
        ];
        add_bottom_line(&mut lines);
        assert_eq!(lines[2], vec![Point::new(2, 3), Point::new(3, 3), Point::new(4, 3)]);

        let mut flat = vec![vec![Point::new(0, 0), Point::new(0, 3)]];
        add_bottom_line(&mut flat);
        assert_eq!(flat.len(), 1);
    }
}

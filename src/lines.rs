use serde::{Deserialize, Serialize};
use subdiv::Point;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

/// (left, top, right, bottom)
pub type Bounds = (f64, f64, f64, f64);

/// Polylines in drawing coordinates.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Lines {
    lines: Vec<Vec<Vec2>>,
}

impl Lines {
    pub fn new() -> Self {
        Lines::default()
    }

    pub fn from_points<L: AsRef<[Point]>>(polylines: &[L]) -> Self {
        let lines = polylines
            .iter()
            .map(|l| {
                l.as_ref()
                    .iter()
                    .map(|p| Vec2 { x: p.x as f64, y: p.y as f64 })
                    .collect()
            })
            .collect();
        Lines { lines }
    }

    pub fn add(&mut self, line: Vec<Vec2>) {
        self.lines.push(line);
    }

    pub fn extend(&mut self, other: Lines) {
        self.lines.extend(other.lines);
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vec<Vec2>> {
        self.lines.iter()
    }

    pub fn bbox(&self) -> Option<Bounds> {
        let mut out: Option<Bounds> = None;
        for p in self.lines.iter().flatten() {
            out = Some(match out {
                None => (p.x, p.y, p.x, p.y),
                Some((l, t, r, b)) => (l.min(p.x), t.min(p.y), r.max(p.x), b.max(p.y)),
            });
        }
        out
    }

    /// Centers the lines on `(cx, cy)` and scales them uniformly to fit a
    /// `w` x `h` box.
    pub fn xform(&mut self, cx: f64, cy: f64, w: f64, h: f64) {
        if let Some(b) = self.bbox() {
            self.xform_from(b, cx, cy, w, h);
        }
    }

    /// Same as [`Lines::xform`], measuring against `from` instead of the
    /// lines' own bounds, so related line sets stay aligned.
    pub fn xform_from(&mut self, from: Bounds, cx: f64, cy: f64, w: f64, h: f64) {
        let (l, t, r, b) = from;
        let ox = (l + r) / 2.0;
        let oy = (t + b) / 2.0;
        let f = match (r - l > 0.0, b - t > 0.0) {
            (true, true) => (w / (r - l)).min(h / (b - t)),
            (true, false) => w / (r - l),
            (false, true) => h / (b - t),
            (false, false) => 1.0,
        };
        for p in self.lines.iter_mut().flatten() {
            p.x = (p.x - ox) * f + cx;
            p.y = (p.y - oy) * f + cy;
        }
    }
}

impl IntoIterator for Lines {
    type Item = Vec<Vec2>;
    type IntoIter = std::vec::IntoIter<Vec<Vec2>>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.into_iter()
    }
}

impl<'a> IntoIterator for &'a Lines {
    type Item = &'a Vec<Vec2>;
    type IntoIter = std::slice::Iter<'a, Vec<Vec2>>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

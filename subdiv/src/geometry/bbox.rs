use crate::model::{BBox, Point};

/// Bounding box of every point in `lines`, or `None` when there are no points.
pub fn bbox_of<L: AsRef<[Point]>>(lines: &[L]) -> Option<BBox> {
    let mut out: Option<BBox> = None;
    for p in lines.iter().flat_map(|l| l.as_ref().iter()) {
        out = Some(match out {
            None => BBox { left: p.x, top: p.y, right: p.x, bottom: p.y },
            Some(b) => BBox {
                left: b.left.min(p.x),
                top: b.top.min(p.y),
                right: b.right.max(p.x),
                bottom: b.bottom.max(p.y),
            },
        });
    }
    out
}

/// Number of cells in the grid padded by `pad` on every side.
pub fn padded_dims(b: &BBox, pad: i32) -> (i64, i64) {
    let w = b.width() as i64 + 2 * pad as i64;
    let h = b.height() as i64 + 2 * pad as i64;
    (w, h)
}

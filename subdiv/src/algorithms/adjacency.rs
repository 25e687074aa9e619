use std::collections::BTreeSet;

use crate::{
    algorithms::segment::Segmentation,
    model::{AdjacencyGraph, Cell, RegionId, BACKGROUND},
};

/// Regions touching each region through any of the 8 cells around its
/// cells. Self is never listed; with `exclude_background` region 0 is
/// neither a key nor a neighbor. Cells outside the grid are skipped.
pub fn neighbors(seg: &Segmentation, exclude_background: bool) -> AdjacencyGraph {
    let mut out = AdjacencyGraph::new();
    for id in seg.region_ids() {
        if exclude_background && id == BACKGROUND {
            continue;
        }
        let mut found: BTreeSet<RegionId> = BTreeSet::new();
        for c in seg.cells(id).unwrap_or_default() {
            for dy in -1..=1 {
                for dx in -1..=1 {
                    if let Some(n) = seg.region_at(Cell::new(c.x + dx, c.y + dy)) {
                        found.insert(n);
                    }
                }
            }
        }
        found.remove(&id);
        if exclude_background {
            found.remove(&BACKGROUND);
        }
        out.insert(id, found);
    }
    out
}

/// First `(a, b)` where `b` lists `a`'s neighbor but `a` is missing from `b`'s set.
pub fn find_asymmetry(graph: &AdjacencyGraph) -> Option<(RegionId, RegionId)> {
    graph.iter().find_map(|(&a, ns)| {
        ns.iter()
            .copied()
            .find(|b| graph.get(b).map_or(true, |back| !back.contains(&a)))
            .map(|b| (a, b))
    })
}

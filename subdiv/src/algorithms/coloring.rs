use std::collections::BTreeSet;

use crate::{
    error::{Result, SubdivError},
    model::{AdjacencyGraph, Color, ColorAssignment, RegionId},
};

const FULL_DOMAIN: u8 = (1 << Color::COUNT) - 1;

struct Frame {
    node: usize,
    // candidate colors not tried yet
    remaining: u8,
    // trail length when the frame was opened
    mark: usize,
}

struct Search {
    adj: Vec<Vec<usize>>,
    domains: Vec<u8>,
    // (node, domain before the change)
    trail: Vec<(usize, u8)>,
}

impl Search {
    fn set(&mut self, node: usize, domain: u8) {
        self.trail.push((node, self.domains[node]));
        self.domains[node] = domain;
    }

    fn undo(&mut self, mark: usize) {
        while self.trail.len() > mark {
            if let Some((node, domain)) = self.trail.pop() {
                self.domains[node] = domain;
            }
        }
    }

    /// Fixes `node` to `bit` and removes it from the neighbors. A neighbor
    /// reduced to one color forces that color out of its own neighbors.
    /// Returns false when some domain empties.
    fn assign(&mut self, node: usize, bit: u8) -> bool {
        self.set(node, bit);
        let mut forced = vec![(node, bit)];
        while let Some((n, bit)) = forced.pop() {
            for i in 0..self.adj[n].len() {
                let m = self.adj[n][i];
                let d = self.domains[m];
                if d & bit == 0 {
                    continue;
                }
                let nd = d & !bit;
                self.set(m, nd);
                if nd == 0 {
                    return false;
                }
                if nd.count_ones() == 1 {
                    forced.push((m, nd));
                }
            }
        }
        true
    }

    fn undecided(&self) -> Option<usize> {
        self.domains.iter().position(|d| d.count_ones() > 1)
    }
}

/// Assigns one of four colors to every region named in `graph` (keys and
/// neighbors alike) so that no two adjacent regions share a color.
///
/// Depth-first search in ascending region order, colors tried in ascending
/// order. Choices are applied in place and unwound through an undo trail.
/// Edges are treated as undirected and self-edges are ignored.
pub fn colorize(graph: &AdjacencyGraph) -> Result<ColorAssignment> {
    let ids: Vec<RegionId> = graph
        .iter()
        .flat_map(|(&a, ns)| std::iter::once(a).chain(ns.iter().copied()))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    let ix = |id: RegionId| ids.binary_search(&id).ok();

    let mut adj: Vec<BTreeSet<usize>> = vec![BTreeSet::new(); ids.len()];
    for (&a, ns) in graph {
        let Some(ia) = ix(a) else { continue };
        for &b in ns {
            match ix(b) {
                Some(ib) if ib != ia => {
                    adj[ia].insert(ib);
                    adj[ib].insert(ia);
                }
                _ => {}
            }
        }
    }

    let mut search = Search {
        adj: adj.into_iter().map(|s| s.into_iter().collect()).collect(),
        domains: vec![FULL_DOMAIN; ids.len()],
        trail: Vec::new(),
    };
    let mut stack: Vec<Frame> = Vec::new();
    let mut steps = 0u64;

    while let Some(node) = search.undecided() {
        stack.push(Frame {
            node,
            remaining: search.domains[node],
            mark: search.trail.len(),
        });
        loop {
            let Some(top) = stack.last_mut() else {
                log::debug!("colorize: exhausted after {} steps", steps);
                return Err(SubdivError::UncolorableGraph { regions: ids.len() });
            };
            let (node, mark) = (top.node, top.mark);
            if top.remaining == 0 {
                stack.pop();
                continue;
            }
            let bit = top.remaining & top.remaining.wrapping_neg();
            top.remaining &= !bit;

            search.undo(mark);
            steps += 1;
            if search.assign(node, bit) {
                break;
            }
        }
    }

    log::debug!("colorize: {} regions colored in {} steps", ids.len(), steps);
    let mut out = ColorAssignment::new();
    for (i, &id) in ids.iter().enumerate() {
        let d = search.domains[i];
        let color = Color::new(d.trailing_zeros() as u8)
            .ok_or(SubdivError::UncolorableGraph { regions: ids.len() })?;
        out.insert(id, color);
    }
    Ok(out)
}

/// First adjacent pair sharing a color. A region missing from `colors`
/// counts as a conflict with itself.
pub fn find_conflict(
    graph: &AdjacencyGraph,
    colors: &ColorAssignment,
) -> Option<(RegionId, RegionId)> {
    for (&a, ns) in graph {
        let Some(ca) = colors.get(&a) else {
            return Some((a, a));
        };
        for &b in ns {
            if b == a {
                continue;
            }
            match colors.get(&b) {
                None => return Some((b, b)),
                Some(cb) if cb == ca => return Some((a, b)),
                _ => {}
            }
        }
    }
    None
}

use crate::{
    algorithms::walls::Walls,
    geometry::{bbox::padded_dims, limits},
    model::{Cell, RegionId, BACKGROUND},
};

const UNASSIGNED: RegionId = RegionId::MAX;

/// Partition of the padded grid into wall-bounded regions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segmentation {
    pub(crate) width: i32,
    pub(crate) height: i32,
    /// Row-major region id per cell.
    pub(crate) grid: Vec<RegionId>,
    /// Cells per region, indexed by id, in flood-fill discovery order.
    pub(crate) regions: Vec<Vec<Cell>>,
}

impl Segmentation {
    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    pub fn region_at(&self, c: Cell) -> Option<RegionId> {
        self.index(c).map(|i| self.grid[i])
    }

    pub fn cells(&self, id: RegionId) -> Option<&[Cell]> {
        self.regions.get(id as usize).map(Vec::as_slice)
    }

    pub fn region_ids(&self) -> impl Iterator<Item = RegionId> + '_ {
        (0..self.regions.len()).map(|i| i as RegionId)
    }

    pub fn corners(&self) -> [Cell; 4] {
        let (w, h) = (self.width - 1, self.height - 1);
        [Cell::new(0, 0), Cell::new(w, 0), Cell::new(0, h), Cell::new(w, h)]
    }

    fn index(&self, c: Cell) -> Option<usize> {
        if c.x < 0 || c.y < 0 || c.x >= self.width || c.y >= self.height {
            return None;
        }
        Some((c.y * self.width + c.x) as usize)
    }
}

fn flood_fill(seg: &mut Segmentation, walls: &Walls, start: Cell, id: RegionId) -> Vec<Cell> {
    let mut cells = Vec::new();
    let mut stack = vec![start];
    while let Some(c) = stack.pop() {
        let Some(ix) = seg.index(c) else { continue };
        if seg.grid[ix] != UNASSIGNED {
            continue;
        }
        seg.grid[ix] = id;
        cells.push(c);

        for n in [
            Cell::new(c.x - 1, c.y),
            Cell::new(c.x + 1, c.y),
            Cell::new(c.x, c.y - 1),
            Cell::new(c.x, c.y + 1),
        ] {
            let free = seg.index(n).map_or(false, |i| seg.grid[i] == UNASSIGNED);
            if free && !walls.between(c, n) {
                stack.push(n);
            }
        }
    }
    cells
}

/// Row-major scan; each unassigned cell seeds a new region. The first seed
/// is the top-left padding cell, so region 0 is the background ring.
pub fn segment(walls: &Walls) -> Segmentation {
    let (w, h) = padded_dims(&walls.bbox, limits::PAD);
    let (width, height) = (w as i32, h as i32);
    let mut seg = Segmentation {
        width,
        height,
        grid: vec![UNASSIGNED; (w * h) as usize],
        regions: Vec::new(),
    };

    for y in 0..height {
        for x in 0..width {
            let c = Cell::new(x, y);
            if seg.grid[(y * width + x) as usize] != UNASSIGNED {
                continue;
            }
            let id = seg.regions.len() as RegionId;
            let cells = flood_fill(&mut seg, walls, c, id);
            seg.regions.push(cells);
        }
    }

    let corners = seg.corners();
    assert!(
        corners.iter().all(|&c| seg.region_at(c) == Some(BACKGROUND)),
        "background region must own every padding corner"
    );
    log::debug!(
        "segment: {}x{} grid, {} regions ({} background cells)",
        width,
        height,
        seg.regions.len(),
        seg.regions[BACKGROUND as usize].len()
    );
    seg
}

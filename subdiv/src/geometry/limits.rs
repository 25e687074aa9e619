// Centralized ingestion limits to harden against oversized input geometry

// Grid size caps (cells of the padded raster)
pub const MAX_GRID_CELLS: i64 = 16_000_000;

// Polylines
pub const MAX_POLYLINES: usize = 100_000;
pub const MAX_POLYLINE_POINTS_TOTAL: usize = 2_000_000;

// Numeric bounds; keeps padded grid arithmetic well inside i32
pub const COORD_MIN: i32 = -1_000_000;
pub const COORD_MAX: i32 = 1_000_000;

// Grid padding around the input bounding box
pub const PAD: i32 = 2;

#[inline]
pub fn in_coord_bounds(v: i32) -> bool { (COORD_MIN..=COORD_MAX).contains(&v) }

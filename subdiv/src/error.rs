use crate::model::{Point, RegionId};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubdivError {
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),
    #[error("malformed boundary (region {region:?}) at ({}, {})", .at.x, .at.y)]
    MalformedBoundary { region: Option<RegionId>, at: Point },
    #[error("no four-coloring exists for {regions} regions")]
    UncolorableGraph { regions: usize },
    #[error("limit exceeded: {what} > {max}")]
    LimitExceeded { what: &'static str, max: i64 },
}

impl SubdivError {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            SubdivError::InvalidGeometry(_) => "invalid_geometry",
            SubdivError::MalformedBoundary { .. } => "malformed_boundary",
            SubdivError::UncolorableGraph { .. } => "uncolorable_graph",
            SubdivError::LimitExceeded { .. } => "limit_exceeded",
        }
    }
}

pub type Result<T> = std::result::Result<T, SubdivError>;

#[inline]
pub(crate) fn not_axis_aligned(line: usize, p: Point, q: Point) -> SubdivError {
    SubdivError::InvalidGeometry(format!(
        "polyline {} segment ({}, {}) -> ({}, {}) is not axis-aligned",
        line, p.x, p.y, q.x, q.y
    ))
}

#[inline]
pub(crate) fn zero_length(line: usize, p: Point) -> SubdivError {
    SubdivError::InvalidGeometry(format!(
        "polyline {} has a zero-length segment at ({}, {})",
        line, p.x, p.y
    ))
}

#[inline]
pub(crate) fn too_short(line: usize, len: usize) -> SubdivError {
    SubdivError::InvalidGeometry(format!(
        "polyline {} has {} point(s), need at least 2",
        line, len
    ))
}

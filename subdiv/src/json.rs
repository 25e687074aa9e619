use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::{
    error::{Result, SubdivError},
    geometry::limits,
    model::{BBox, Color, ColorAssignment, Point, RegionId, BACKGROUND},
    Subdivision,
};

const LINES_VERSION: u32 = 1;
const SNAPSHOT_VERSION: u32 = 1;

pub fn to_json_impl(s: &Subdivision) -> Value {
    snapshot(s, s.colorize())
}

// Failed derived views are recorded by error code next to the null they
// leave behind.
fn snapshot(s: &Subdivision, colors: Result<ColorAssignment>) -> Value {
    #[derive(Serialize)]
    struct RegionSer {
        id: RegionId,
        cells: usize,
        background: bool,
        boundary: Option<Vec<(i32, i32)>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        boundary_error: Option<&'static str>,
        color: Option<Color>,
    }
    #[derive(Serialize)]
    struct Doc {
        version: u32,
        bbox: BBox,
        width: i32,
        height: i32,
        regions: Vec<RegionSer>,
        neighbors: BTreeMap<String, Vec<RegionId>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        color_error: Option<&'static str>,
    }

    let (colors, color_error) = match colors {
        Ok(c) => (Some(c), None),
        Err(e) => {
            log::debug!("snapshot: coloring failed: {}", e);
            (None, Some(e.code()))
        }
    };
    let regions = s
        .segmentation()
        .region_ids()
        .map(|id| {
            // background surrounds the silhouettes, so it has no single loop
            let (boundary, boundary_error) = if id == BACKGROUND {
                (None, None)
            } else {
                match s.boundary(id) {
                    Ok(b) => (Some(b.into_iter().map(|p| (p.x, p.y)).collect()), None),
                    Err(e) => (None, Some(e.code())),
                }
            };
            RegionSer {
                id,
                cells: s.cells(id).map_or(0, |c| c.len()),
                background: id == BACKGROUND,
                boundary,
                boundary_error,
                color: colors.as_ref().and_then(|c| c.get(&id).copied()),
            }
        })
        .collect();
    let neighbors = s
        .neighbors(true)
        .into_iter()
        .map(|(id, ns)| (id.to_string(), ns.into_iter().collect()))
        .collect();

    serde_json::to_value(Doc {
        version: SNAPSHOT_VERSION,
        bbox: s.bbox(),
        width: s.width(),
        height: s.height(),
        regions,
        neighbors,
        color_error,
    })
    .unwrap_or(Value::Null)
}

pub fn polylines_from_json_impl(v: Value) -> Result<Vec<Vec<Point>>> {
    #[derive(Deserialize)]
    struct LinesDe {
        version: u32,
        lines: Vec<Vec<(i32, i32)>>,
    }

    let doc: LinesDe = serde_json::from_value(v)
        .map_err(|e| SubdivError::InvalidGeometry(format!("lines document: {}", e)))?;
    if doc.version != LINES_VERSION {
        return Err(SubdivError::InvalidGeometry(format!(
            "unsupported lines version {}",
            doc.version
        )));
    }
    if doc.lines.len() > limits::MAX_POLYLINES {
        return Err(SubdivError::LimitExceeded {
            what: "polylines",
            max: limits::MAX_POLYLINES as i64,
        });
    }
    let total: usize = doc.lines.iter().map(Vec::len).sum();
    if total > limits::MAX_POLYLINE_POINTS_TOTAL {
        return Err(SubdivError::LimitExceeded {
            what: "polyline points",
            max: limits::MAX_POLYLINE_POINTS_TOTAL as i64,
        });
    }
    Ok(doc
        .lines
        .into_iter()
        .map(|l| l.into_iter().map(Point::from).collect())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn lines_document_parses() {
        let v = json!({"version": 1, "lines": [[[0, 0], [0, 3], [2, 3]]]});
        let lines = polylines_from_json_impl(v).unwrap();
        assert_eq!(lines, vec![vec![Point::new(0, 0), Point::new(0, 3), Point::new(2, 3)]]);
    }

    #[test]
    fn lines_document_rejects_bad_version() {
        let v = json!({"version": 7, "lines": []});
        assert_eq!(polylines_from_json_impl(v).unwrap_err().code(), "invalid_geometry");
    }

    #[test]
    fn failed_coloring_is_recorded() {
        let square = vec![
            Point::new(0, 0),
            Point::new(2, 0),
            Point::new(2, 2),
            Point::new(0, 2),
            Point::new(0, 0),
        ];
        let s = Subdivision::build(&[square]).unwrap();
        let v = snapshot(&s, Err(SubdivError::UncolorableGraph { regions: 1 }));
        assert_eq!(v["color_error"], "uncolorable_graph");
        assert!(v["regions"][1]["color"].is_null());
        assert!(v["regions"][1]["boundary"].is_array());
        assert!(v["regions"][1].get("boundary_error").is_none());

        let v = to_json_impl(&s);
        assert!(v.get("color_error").is_none());
        assert_eq!(v["regions"][1]["color"], 0);
    }

    #[test]
    fn lines_document_rejects_floats() {
        let v = json!({"version": 1, "lines": [[[0.5, 0], [0, 3]]]});
        assert!(polylines_from_json_impl(v).is_err());
    }
}

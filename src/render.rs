use rand::Rng;
use subdiv::{Point, Subdivision, SubdivError};

use crate::config::Config;
use crate::error::Result;
use crate::lines::{Lines, Vec2};
use crate::silhouette::{add_bottom_line, random_building};
use crate::svg::Shape;
use crate::theme::Theme;

/// A single silhouette turned into colored region outlines.
#[derive(Clone, Debug)]
pub struct Building {
    /// Silhouette lines, bottom line included.
    pub lines: Lines,
    /// One filled outline per non-background region.
    pub shapes: Vec<Shape>,
    /// Grid dump, when requested.
    pub ascii: Option<String>,
}

/// Everything placed on the canvas.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub lines: Lines,
    pub shapes: Vec<Shape>,
    /// Grid dumps in placement order, when requested.
    pub ascii: Vec<String>,
}

pub fn render_building(
    mut silhouette: Vec<Vec<Point>>,
    theme: &Theme,
    with_ascii: bool,
) -> std::result::Result<Building, SubdivError> {
    add_bottom_line(&mut silhouette);
    let sub = Subdivision::build(&silhouette)?;
    let colors = sub.colorize()?;
    let boundaries = sub.boundaries()?;

    let mut shapes = Vec::with_capacity(boundaries.len());
    for (id, path) in boundaries {
        // every non-background region is colored
        let Some(&color) = colors.get(&id) else {
            return Err(SubdivError::UncolorableGraph { regions: colors.len() });
        };
        shapes.push(Shape {
            points: path.iter().map(|p| Vec2 { x: p.x as f64, y: p.y as f64 }).collect(),
            stroke: theme.stroke().to_string(),
            fill: theme.fill(color).to_string(),
        });
    }
    log::debug!(
        "building: {} lines, {} regions, {} shapes",
        silhouette.len(),
        sub.region_count(),
        shapes.len()
    );

    Ok(Building {
        lines: Lines::from_points(&silhouette),
        shapes,
        ascii: with_ascii.then(|| sub.to_ascii()),
    })
}

/// Centers `b` on `(cx, cy)` scaled into `w` x `h`. Silhouette and region
/// outlines share the transform of the silhouette bounds.
pub fn fit_building(b: &mut Building, cx: f64, cy: f64, w: f64, h: f64) {
    let Some(bounds) = b.lines.bbox() else { return };
    b.lines.xform_from(bounds, cx, cy, w, h);
    let mut outlines = Lines::new();
    for s in &mut b.shapes {
        outlines.add(std::mem::take(&mut s.points));
    }
    outlines.xform_from(bounds, cx, cy, w, h);
    for (shape, points) in b.shapes.iter_mut().zip(outlines) {
        shape.points = points;
    }
}

/// Renders silhouettes from `draw` until one subdivides cleanly. Gives up
/// after `max_attempts` tries and returns the last failure.
pub fn render_with_retries<F>(
    mut draw: F,
    theme: &Theme,
    max_attempts: usize,
    with_ascii: bool,
) -> Result<Building>
where
    F: FnMut() -> Vec<Vec<Point>>,
{
    let mut attempt = 1;
    loop {
        match render_building(draw(), theme, with_ascii) {
            Ok(b) => return Ok(b),
            Err(e) if attempt < max_attempts => {
                log::warn!("discarding silhouette (attempt {}): {}", attempt, e);
                attempt += 1;
            }
            Err(e) => return Err(e.into()),
        }
    }
}

/// Draws fresh silhouettes until one subdivides cleanly, up to
/// `config.max_attempts` tries.
pub fn render_random_building<R: Rng + ?Sized>(
    rng: &mut R,
    config: &Config,
    theme: &Theme,
    with_ascii: bool,
) -> Result<Building> {
    render_with_retries(
        || random_building(&mut *rng, &config.building),
        theme,
        config.max_attempts,
        with_ascii,
    )
}

/// Places `rows * columns` buildings, each centered in its cell and scaled to
/// `config.fit` of it.
pub fn render_scene<R: Rng + ?Sized>(
    rng: &mut R,
    config: &Config,
    theme: &Theme,
    with_ascii: bool,
) -> Result<Scene> {
    let (cw, ch) = config.cell_size();
    let mut scene = Scene::default();
    for r in 0..config.rows {
        for c in 0..config.columns {
            let mut b = render_random_building(rng, config, theme, with_ascii)?;
            let x = (c as f64 + 0.5) * cw;
            let y = (r as f64 + 0.5) * ch;
            fit_building(&mut b, x, y, cw * config.fit, ch * config.fit);
            scene.lines.extend(b.lines);
            scene.shapes.extend(b.shapes);
            scene.ascii.extend(b.ascii);
        }
    }
    log::info!(
        "scene: {}x{} buildings, {} shapes",
        config.rows,
        config.columns,
        scene.shapes.len()
    );
    Ok(scene)
}

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::lines::{Lines, Vec2};

/// One stroked, filled polyline.
#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
    pub points: Vec<Vec2>,
    pub stroke: String,
    pub fill: String,
}

/// Wraps every line of `lines` in the same style.
pub fn shapes_from_lines(lines: &Lines, stroke: &str, fill: &str) -> Vec<Shape> {
    lines
        .iter()
        .map(|l| Shape { points: l.clone(), stroke: stroke.to_string(), fill: fill.to_string() })
        .collect()
}

fn points_attr(points: &[Vec2]) -> String {
    let mut s = String::with_capacity(points.len() * 12);
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            s.push(' ');
        }
        s.push_str(&format!("{},{}", p.x, p.y));
    }
    s
}

pub fn dump_svg<W: Write>(
    out: &mut W,
    shapes: &[Shape],
    dimensions: (u32, u32),
    background: &str,
    stroke_width: f64,
) -> std::io::Result<()> {
    let (width, height) = dimensions;
    writeln!(out, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
    writeln!(
        out,
        r#"<!DOCTYPE svg PUBLIC "-//W3C//DTD SVG 1.1//EN" "http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd">"#
    )?;
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1" viewBox="0 0 {} {}">"#,
        width, height
    )?;
    writeln!(
        out,
        r#"<rect width="{}" height="{}" stroke="none" fill="{}" />"#,
        width, height, background
    )?;
    for shape in shapes {
        writeln!(
            out,
            r#"<polyline points="{}" stroke-width="{}" stroke="{}" fill="{}" />"#,
            points_attr(&shape.points),
            stroke_width,
            shape.stroke,
            shape.fill
        )?;
    }
    writeln!(out, "</svg>")?;
    Ok(())
}

pub fn write_svg_file(
    path: &Path,
    shapes: &[Shape],
    dimensions: (u32, u32),
    background: &str,
) -> std::io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    dump_svg(&mut out, shapes, dimensions, background, 1.0)?;
    out.flush()?;
    log::info!("wrote {} shapes to {}", shapes.len(), path.display());
    Ok(())
}

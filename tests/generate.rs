use buildings::render::{fit_building, render_random_building};
use buildings::svg::{dump_svg, shapes_from_lines};
use buildings::{render_building, render_scene, theme_by_name, Config, Error};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;
use subdiv::{polylines_from_json, Point, Subdivision};

fn svg_text(config: &Config, seed: u64) -> String {
    let theme = theme_by_name("cc245").unwrap();
    let mut rng = StdRng::seed_from_u64(seed);
    let scene = render_scene(&mut rng, config, theme, false).unwrap();
    let mut buf = Vec::new();
    dump_svg(
        &mut buf,
        &scene.shapes,
        (config.canvas_width, config.canvas_height),
        theme.background,
        1.0,
    )
    .unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn same_seed_same_document() {
    let config = Config { rows: 1, columns: 3, ..Config::default() };
    let a = svg_text(&config, 2024);
    let b = svg_text(&config, 2024);
    assert_eq!(a, b);
    assert!(a.starts_with("<?xml"));
    assert!(a.trim_end().ends_with("</svg>"));
    assert!(a.contains(r##"fill="#f6f4ed""##));
}

#[test]
fn every_polyline_uses_the_palette() {
    let config = Config { rows: 2, columns: 2, ..Config::default() };
    let text = svg_text(&config, 5);
    let theme = theme_by_name("cc245").unwrap();
    let polylines: Vec<&str> = text.lines().filter(|l| l.starts_with("<polyline")).collect();
    assert!(!polylines.is_empty());
    for l in polylines {
        assert!(
            theme.palette.iter().any(|c| l.contains(&format!(r#"fill="{}""#, c))),
            "unexpected fill in {}",
            l
        );
    }
}

#[test]
fn json_lines_render_one_shape_per_region() {
    // a tower split by a floor
    let doc = json!({
        "version": 1,
        "lines": [
            [[0, 0], [4, 0], [4, 6]],
            [[0, 0], [0, 6]],
            [[0, 3], [4, 3]]
        ]
    });
    let silhouette = polylines_from_json(doc).unwrap();
    let theme = theme_by_name("cc273").unwrap();
    let mut b = render_building(silhouette.clone(), theme, false).unwrap();

    let mut closed = silhouette;
    closed.push((0..=4).map(|x| Point::new(x, 6)).collect());
    let sub = Subdivision::build(&closed).unwrap();
    assert_eq!(b.shapes.len(), sub.region_count() - 1);
    assert_eq!(b.shapes.len(), 2);
    assert_ne!(b.shapes[0].fill, b.shapes[1].fill);

    fit_building(&mut b, 100.0, 100.0, 50.0, 50.0);
    let (l, t, r, bottom) = b.lines.bbox().unwrap();
    assert!(l > 74.9 && r < 125.1);
    assert!(t > 74.9 && bottom < 125.1);
}

#[test]
fn bare_lines_document() {
    let config = Config { rows: 1, columns: 1, ..Config::default() };
    let theme = theme_by_name("acid").unwrap();
    let mut rng = StdRng::seed_from_u64(17);
    let b = render_random_building(&mut rng, &config, theme, false).unwrap();
    let shapes = shapes_from_lines(&b.lines, "black", "none");
    assert_eq!(shapes.len(), config.building.nlines + 1);

    let mut buf = Vec::new();
    dump_svg(&mut buf, &shapes, (200, 200), "white", 1.0).unwrap();
    let text = String::from_utf8(buf).unwrap();
    assert_eq!(text.matches(r#"fill="none""#).count(), shapes.len());
}

#[test]
fn config_errors_carry_codes() {
    let err = Config::from_json_value(json!({"columns": 0})).unwrap_err();
    assert!(matches!(err, Error::InvalidConfig(_)));
    let err = theme_by_name("sepia").unwrap_err();
    assert_eq!(err.code(), "unknown_theme");
    assert_eq!(err.to_string(), "unknown theme 'sepia'");
}

#[test]
fn diagonal_lines_surface_as_subdiv_errors() {
    let theme = theme_by_name("cc242").unwrap();
    let err = render_building(vec![vec![Point::new(0, 0), Point::new(3, 3)]], theme, false)
        .unwrap_err();
    assert_eq!(Error::from(err).code(), "invalid_geometry");
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 24, .. ProptestConfig::default() })]

    #[test]
    fn random_buildings_render_closed_outlines(seed in any::<u64>()) {
        let config = Config::default();
        let theme = theme_by_name("cc234").unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        // a rare uncolorable draw is replaced within the retry budget
        let b = render_random_building(&mut rng, &config, theme, true)
            .map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(b.lines.len(), config.building.nlines + 1);
        prop_assert!(b.ascii.is_some());
        for s in &b.shapes {
            prop_assert!(s.points.len() >= 5);
            prop_assert_eq!(s.points.first(), s.points.last());
            prop_assert!(theme.palette.contains(&s.fill.as_str()));
        }
    }
}

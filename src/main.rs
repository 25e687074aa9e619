use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use buildings::svg::{shapes_from_lines, write_svg_file};
use buildings::theme::{random_theme, theme_names};
use buildings::render::fit_building;
use buildings::{render_building, render_scene, theme_by_name, Config, Scene};
use clap::Parser;
use log::{LevelFilter, Log, Metadata, Record};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use subdiv::{polylines_from_json, Subdivision};

#[derive(Parser, Debug)]
#[command(name = "buildings", version, about = "Four-colored building silhouettes as SVG")]
struct Cli {
    #[arg(long)]
    rows: Option<usize>,
    #[arg(long)]
    columns: Option<usize>,
    #[arg(long)]
    width: Option<u32>,
    #[arg(long)]
    height: Option<u32>,
    /// Palette name; random when omitted.
    #[arg(short, long)]
    theme: Option<String>,
    #[arg(short, long, default_value = "buildings.svg")]
    output: PathBuf,
    /// Also write the bare silhouettes to `<output>-lines.svg`.
    #[arg(long)]
    with_lines_only: bool,
    /// Print each building's region grid.
    #[arg(long)]
    print_in_terminal: bool,
    #[arg(long)]
    seed: Option<u64>,
    /// JSON file with any subset of the scene settings.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Render one silhouette from a `{"version": 1, "lines": [...]}` file
    /// instead of random ones.
    #[arg(long)]
    lines: Option<PathBuf>,
    /// With --lines, write the subdivision snapshot as JSON.
    #[arg(long, requires = "lines")]
    snapshot: Option<PathBuf>,
    /// -v info, -vv debug, -vvv trace.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}: {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

fn lines_path(output: &Path) -> PathBuf {
    let stem = output.file_stem().map_or_else(|| "buildings".into(), |s| s.to_string_lossy());
    output.with_file_name(format!("{}-lines.svg", stem))
}

fn single_scene(
    path: &Path,
    snapshot: Option<&Path>,
    config: &Config,
    theme: &buildings::Theme,
    print_in_terminal: bool,
) -> Result<Scene, Box<dyn std::error::Error>> {
    let v: serde_json::Value = serde_json::from_reader(BufReader::new(File::open(path)?))?;
    let silhouette = polylines_from_json(v)?;
    if let Some(out) = snapshot {
        let sub = Subdivision::build(&silhouette)?;
        serde_json::to_writer_pretty(File::create(out)?, &sub.to_json_value())?;
        log::info!("wrote snapshot to {}", out.display());
    }

    let mut b = render_building(silhouette, theme, print_in_terminal)?;
    let (w, h) = (config.canvas_width as f64, config.canvas_height as f64);
    fit_building(&mut b, w / 2.0, h / 2.0, w * config.fit, h * config.fit);
    Ok(Scene { lines: b.lines, shapes: b.shapes, ascii: b.ascii.into_iter().collect() })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(v) = cli.rows {
        config.rows = v;
    }
    if let Some(v) = cli.columns {
        config.columns = v;
    }
    if let Some(v) = cli.width {
        config.canvas_width = v;
    }
    if let Some(v) = cli.height {
        config.canvas_height = v;
    }
    if cli.theme.is_some() {
        config.theme = cli.theme.clone();
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    config.validate()?;

    let seed = config.seed.unwrap_or_else(|| rand::rng().random());
    log::info!("seed {}", seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let theme = match config.theme.as_deref() {
        Some(name) => theme_by_name(name).inspect_err(|_| {
            eprintln!("available themes: {}", theme_names().collect::<Vec<_>>().join(", "));
        })?,
        None => random_theme(&mut rng),
    };
    log::info!("theme {}", theme.name);

    let scene = match &cli.lines {
        Some(path) => single_scene(
            path,
            cli.snapshot.as_deref(),
            &config,
            theme,
            cli.print_in_terminal,
        )?,
        None => render_scene(&mut rng, &config, theme, cli.print_in_terminal)?,
    };
    for ascii in &scene.ascii {
        println!("{}", ascii);
    }

    let dims = (config.canvas_width, config.canvas_height);
    if cli.with_lines_only {
        let shapes = shapes_from_lines(&scene.lines, "black", "none");
        write_svg_file(&lines_path(&cli.output), &shapes, dims, "white")?;
    }
    write_svg_file(&cli.output, &scene.shapes, dims, theme.background)?;
    log::debug!("done: {}", cli.output.display());
    Ok(())
}

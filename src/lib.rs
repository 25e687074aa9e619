pub mod config;
pub mod error;
pub mod lines;
pub mod render;
pub mod silhouette;
pub mod svg;
pub mod theme;

pub use config::Config;
pub use error::{Error, Result};
pub use render::{render_building, render_random_building, render_scene, Building, Scene};
pub use theme::{theme_by_name, Theme, THEMES};

use rand::Rng;
use serde::Serialize;

use crate::error::{Error, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub name: &'static str,
    /// Fill per color index.
    pub palette: [&'static str; 4],
    pub background: &'static str,
    pub stroke: Option<&'static str>,
}

impl Theme {
    pub fn stroke(&self) -> &'static str {
        self.stroke.unwrap_or("black")
    }

    pub fn fill(&self, color: subdiv::Color) -> &'static str {
        self.palette[color.index()]
    }
}

pub const THEMES: &[Theme] = &[
    Theme {
        name: "cc242",
        palette: ["#bbd444", "#fcd744", "#fa7b53", "#423c6f"],
        background: "#faf4e4",
        stroke: Some("black"),
    },
    Theme {
        name: "cc239",
        palette: ["#e3dd34", "#78496b", "#f0527f", "#a7e0e2"],
        background: "#e0eff0",
        stroke: None,
    },
    Theme {
        name: "cc234",
        palette: ["#ffce49", "#ede8dc", "#ff5736", "#ff99b4"],
        background: "#f7f4ed",
        stroke: None,
    },
    Theme {
        name: "cc232",
        palette: ["#5c5f46", "#ff7044", "#ffce39", "#66aeaa"],
        background: "#e9ecde",
        stroke: None,
    },
    Theme {
        name: "cc238",
        palette: ["#553c60", "#ffb0a0", "#ff6749", "#fbe090"],
        background: "#f5e9de",
        stroke: None,
    },
    Theme {
        name: "cc245",
        palette: ["#0d4a4e", "#ff947b", "#ead3a2", "#5284ab"],
        background: "#f6f4ed",
        stroke: None,
    },
    Theme {
        name: "cc273",
        palette: ["#363d4a", "#7b8a56", "#ff9369", "#f4c172"],
        background: "#f0efe2",
        stroke: None,
    },
    Theme {
        name: "acid",
        palette: [
            "rgb(60, 158, 11)",
            "rgb(98, 190, 23)",
            "rgb(135, 222, 35)",
            "rgb(172, 255, 47)",
        ],
        background: "rgb(0, 128, 0)",
        stroke: Some("black"),
    },
];

pub fn theme_names() -> impl Iterator<Item = &'static str> {
    THEMES.iter().map(|t| t.name)
}

pub fn theme_by_name(name: &str) -> Result<&'static Theme> {
    THEMES
        .iter()
        .find(|t| t.name == name)
        .ok_or_else(|| Error::UnknownTheme(name.to_string()))
}

pub fn random_theme<R: Rng + ?Sized>(rng: &mut R) -> &'static Theme {
    &THEMES[rng.random_range(0..THEMES.len())]
}

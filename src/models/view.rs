use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How the deck is laid out on screen.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Every section stacked in one scrollable page.
    #[default]
    Scroll,
    /// One section at a time with prev/next navigation.
    Slides,
}

impl ViewMode {
    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Scroll => "Scroll",
            ViewMode::Slides => "Slides",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ViewMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "scroll" => Ok(ViewMode::Scroll),
            "slides" => Ok(ViewMode::Slides),
            other => Err(anyhow::anyhow!(
                "unknown view mode {:?} (expected \"scroll\" or \"slides\")",
                other
            )),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SlideId {
    Hero,
    Problem,
    Approach,
    Wireflow,
    Difference,
}

/// Slide order in deck mode. Scroll mode renders the same order top to bottom.
pub static SLIDE_CATALOG: [SlideId; SLIDE_COUNT] = [
    SlideId::Hero,
    SlideId::Problem,
    SlideId::Approach,
    SlideId::Wireflow,
    SlideId::Difference,
];

pub const SLIDE_COUNT: usize = 5;
pub const LAST_SLIDE: usize = SLIDE_COUNT - 1;

impl SlideId {
    pub fn title(self) -> &'static str {
        match self {
            SlideId::Hero => "RSYS",
            SlideId::Problem => "The Real Problem",
            SlideId::Approach => "The RSYS Approach",
            SlideId::Wireflow => "End-to-End Enforcement Wireflow",
            SlideId::Difference => "Why This Is Different",
        }
    }

    pub fn position(self) -> usize {
        match self {
            SlideId::Hero => 0,
            SlideId::Problem => 1,
            SlideId::Approach => 2,
            SlideId::Wireflow => 3,
            SlideId::Difference => 4,
        }
    }

    /// Catalog lookup, clamped to the last slide.
    pub fn at(index: usize) -> SlideId {
        SLIDE_CATALOG[index.min(LAST_SLIDE)]
    }
}

impl fmt::Display for SlideId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SlideId::Hero => "hero",
            SlideId::Problem => "problem",
            SlideId::Approach => "approach",
            SlideId::Wireflow => "wireflow",
            SlideId::Difference => "difference",
        };
        f.write_str(name)
    }
}

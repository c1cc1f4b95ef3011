//! Shape categories shown on the dashboard.
//!
//! Witnesses describe shapes with an open vocabulary ("disk", "cigar",
//! "changing", ...). The dashboard only distinguishes the four most frequent
//! primary shapes and folds everything else into [`ShapeCategory::Other`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Five-way shape enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeCategory {
    Light,
    Circle,
    Triangle,
    Fireball,
    Other,
}

impl ShapeCategory {
    /// Every category, in display order.
    pub const ALL: [ShapeCategory; 5] = [
        ShapeCategory::Light,
        ShapeCategory::Circle,
        ShapeCategory::Triangle,
        ShapeCategory::Fireball,
        ShapeCategory::Other,
    ];

    /// The named categories a raw shape can match exactly.
    pub const PRIMARY: [ShapeCategory; 4] = [
        ShapeCategory::Light,
        ShapeCategory::Circle,
        ShapeCategory::Triangle,
        ShapeCategory::Fireball,
    ];

    /// Returns the lowercase label used in data files and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeCategory::Light => "light",
            ShapeCategory::Circle => "circle",
            ShapeCategory::Triangle => "triangle",
            ShapeCategory::Fireball => "fireball",
            ShapeCategory::Other => "other",
        }
    }

    /// Returns true for the four named categories.
    pub fn is_primary(&self) -> bool {
        !matches!(self, ShapeCategory::Other)
    }
}

impl fmt::Display for ShapeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ShapeCategory {
    type Err = ModelError;

    /// Parse a category label (case-insensitive). Unlike the categorizer this
    /// is strict: labels outside the enumeration are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        ShapeCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == normalized)
            .ok_or_else(|| ModelError::UnknownShape(s.to_string()))
    }
}

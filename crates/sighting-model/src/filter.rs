//! The per-interaction filter selection.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::decade::{DecadeConfig, DecadeSelector};
use crate::duration::DurationBucket;
use crate::shape::ShapeCategory;

/// Filter values selected in the dashboard for one interaction.
///
/// An empty shape set means "no shape filter", not "no shapes".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    pub shapes: BTreeSet<ShapeCategory>,
    pub duration: DurationBucket,
    pub decade: DecadeSelector,
}

impl FilterSpec {
    pub fn new(
        shapes: impl IntoIterator<Item = ShapeCategory>,
        duration: DurationBucket,
        decade: DecadeSelector,
    ) -> Self {
        Self {
            shapes: shapes.into_iter().collect(),
            duration,
            decade,
        }
    }

    /// Build a spec from raw widget values.
    ///
    /// Unknown shape labels are skipped and unknown duration or decade labels
    /// select everything, so a stale or mistyped value never empties the view.
    pub fn from_labels<S: AsRef<str>>(
        shapes: &[S],
        duration: &str,
        decade: &str,
        decades: &DecadeConfig,
    ) -> Self {
        Self {
            shapes: shapes
                .iter()
                .filter_map(|label| label.as_ref().parse().ok())
                .collect(),
            duration: DurationBucket::from_label_lenient(duration),
            decade: DecadeSelector::parse_lenient(decade, decades),
        }
    }

    /// Returns true if no filter restricts the table.
    pub fn is_unrestricted(&self) -> bool {
        self.shapes.is_empty()
            && self.duration == DurationBucket::All
            && self.decade == DecadeSelector::All
    }
}

impl fmt::Display for FilterSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shapes = if self.shapes.is_empty() {
            "any".to_string()
        } else {
            self.shapes
                .iter()
                .map(ShapeCategory::as_str)
                .collect::<Vec<_>>()
                .join("+")
        };
        write!(
            f,
            "shape={shapes} duration={} decade={}",
            self.duration, self.decade
        )
    }
}

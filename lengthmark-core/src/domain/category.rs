//! Sentence length categories and threshold classification

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::api::Thresholds;

/// Length category of a sentence, ordered from shortest to longest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Extra small
    Xs,
    /// Small
    Sm,
    /// Medium
    Md,
    /// Large
    Lg,
    /// Extra large
    Xl,
}

impl Category {
    /// All categories in ascending order
    pub const ALL: [Category; 5] = [
        Category::Xs,
        Category::Sm,
        Category::Md,
        Category::Lg,
        Category::Xl,
    ];

    /// Short label used in output and style names
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Xs => "xs",
            Category::Sm => "sm",
            Category::Md => "md",
            Category::Lg => "lg",
            Category::Xl => "xl",
        }
    }

    /// CSS class a presentation layer attaches to sentences of this category
    pub fn css_class(&self) -> String {
        format!("sentence-length-{}", self.as_str())
    }

    /// Position of the category in [`Category::ALL`]
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown category label
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sentence length category: {0}")]
pub struct ParseCategoryError(pub String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "xs" => Ok(Category::Xs),
            "sm" => Ok(Category::Sm),
            "md" => Ok(Category::Md),
            "lg" => Ok(Category::Lg),
            "xl" => Ok(Category::Xl),
            _ => Err(ParseCategoryError(s.to_string())),
        }
    }
}

/// Map a word count to its category
///
/// The thresholds are checked in written order (`xs`, `sm`, `md`, `lg`), so
/// non-ascending or negative values never panic; they only produce skewed
/// buckets.
pub fn classify(word_count: usize, thresholds: &Thresholds) -> Category {
    let count = i64::try_from(word_count).unwrap_or(i64::MAX);

    if count <= thresholds.xs {
        Category::Xs
    } else if count <= thresholds.sm {
        Category::Sm
    } else if count <= thresholds.md {
        Category::Md
    } else if count <= thresholds.lg {
        Category::Lg
    } else {
        Category::Xl
    }
}

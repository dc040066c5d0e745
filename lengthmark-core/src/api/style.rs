//! Category colors and style publishing
//!
//! The engine never reads colors. A host publishes [`Palette::style_variables`]
//! once per configuration change and keys its decorations on
//! [`Category::css_class`].

use serde::{Deserialize, Serialize};

use crate::domain::category::Category;

/// Prefix of the CSS custom properties holding category colors
pub const STYLE_VARIABLE_PREFIX: &str = "--sentence-length-";

/// One color per category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Palette {
    pub xs: String,
    pub sm: String,
    pub md: String,
    pub lg: String,
    pub xl: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            xs: "#9ccfd8".to_string(),
            sm: "#a3be8c".to_string(),
            md: "#ebcb8b".to_string(),
            lg: "#d08770".to_string(),
            xl: "#bf616a".to_string(),
        }
    }
}

impl Palette {
    /// Color assigned to `category`
    pub fn color(&self, category: Category) -> &str {
        match category {
            Category::Xs => &self.xs,
            Category::Sm => &self.sm,
            Category::Md => &self.md,
            Category::Lg => &self.lg,
            Category::Xl => &self.xl,
        }
    }

    /// CSS custom property name and value for every category, in order
    pub fn style_variables(&self) -> Vec<(String, String)> {
        Category::ALL
            .iter()
            .map(|&category| {
                (
                    format!("{STYLE_VARIABLE_PREFIX}{}", category.as_str()),
                    self.color(category).to_string(),
                )
            })
            .collect()
    }

    /// Render the style variables as a `:root` CSS block
    pub fn to_css(&self) -> String {
        let mut css = String::from(":root {\n");
        for (name, value) in self.style_variables() {
            css.push_str(&format!("  {name}: {value};\n"));
        }
        css.push_str("}\n");
        css
    }
}

//! Layout colour palette and per-user layout preferences.
//!
//! The palette is fixed for the lifetime of the process (it comes from the
//! installed theme). A [`LayoutColor`] only says a name is well formed;
//! membership is decided by [`Palette::resolve`], and only resolved colours are
//! ever persisted.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Colour used when nothing else is configured.
pub const DEFAULT_LAYOUT_COLOR: &str = "black";

/// Colour names shipped with the default theme.
pub const DEFAULT_PALETTE: [&str; 5] = ["black", "blue", "green", "red", "yellow"];

/// Validation errors for layout colours and palettes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutValidationError {
    /// Colour names cannot be blank.
    #[error("layout color must not be empty")]
    EmptyColor,
    /// Colour names are limited to ASCII letters, digits, `-` and `_`.
    #[error("layout color '{value}' contains invalid characters")]
    InvalidColor {
        /// Rejected input.
        value: String,
    },
    /// The default colour must belong to a non-empty palette.
    #[error("default layout color '{color}' is not part of the palette")]
    DefaultNotInPalette {
        /// Configured default.
        color: String,
    },
}

/// Well-formed layout colour name.
///
/// # Examples
/// ```
/// use panel::domain::LayoutColor;
///
/// let blue = LayoutColor::new("blue").expect("valid name");
/// assert_eq!(blue.as_str(), "blue");
/// assert!(LayoutColor::new("<b>").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LayoutColor(String);

impl LayoutColor {
    /// Validate a colour name.
    pub fn new(raw: impl Into<String>) -> Result<Self, LayoutValidationError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(LayoutValidationError::EmptyColor);
        }
        let valid = raw
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(LayoutValidationError::InvalidColor { value: raw });
        }
        Ok(Self(raw))
    }

    /// Colour name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LayoutColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for LayoutColor {
    type Error = LayoutValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LayoutColor> for String {
    fn from(value: LayoutColor) -> Self {
        value.0
    }
}

/// Ordered set of selectable layout colours plus the fallback colour.
///
/// ## Invariants
/// - Colours are unique; order follows the theme definition.
/// - When the palette is non-empty the default is one of its members.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<LayoutColor>,
    default: LayoutColor,
}

impl Palette {
    /// Build a palette, dropping duplicate names.
    ///
    /// # Examples
    /// ```
    /// use panel::domain::{LayoutColor, Palette};
    ///
    /// let colors = ["red", "blue", "green", "blue"]
    ///     .into_iter()
    ///     .map(|c| LayoutColor::new(c).expect("valid"))
    ///     .collect();
    /// let default = LayoutColor::new("red").expect("valid");
    /// let palette = Palette::new(colors, default).expect("default is a member");
    ///
    /// assert_eq!(palette.len(), 3);
    /// assert!(palette.resolve("green").is_some());
    /// assert!(palette.resolve("purple").is_none());
    /// ```
    pub fn new(
        colors: Vec<LayoutColor>,
        default: LayoutColor,
    ) -> Result<Self, LayoutValidationError> {
        let mut unique: Vec<LayoutColor> = Vec::with_capacity(colors.len());
        for color in colors {
            if !unique.contains(&color) {
                unique.push(color);
            }
        }
        if !unique.is_empty() && !unique.contains(&default) {
            return Err(LayoutValidationError::DefaultNotInPalette {
                color: default.0,
            });
        }
        Ok(Self {
            colors: unique,
            default,
        })
    }

    /// Palette of the default theme.
    pub fn theme_default() -> Self {
        let colors = DEFAULT_PALETTE
            .iter()
            .map(|name| LayoutColor((*name).to_owned()))
            .collect();
        Self {
            colors,
            default: LayoutColor(DEFAULT_LAYOUT_COLOR.to_owned()),
        }
    }

    /// Return the palette member named `raw`, if any.
    pub fn resolve(&self, raw: &str) -> Option<LayoutColor> {
        self.colors.iter().find(|color| color.as_str() == raw).cloned()
    }

    /// True when `color` belongs to the palette.
    pub fn contains(&self, color: &LayoutColor) -> bool {
        self.colors.contains(color)
    }

    /// Fallback colour for users who never picked one.
    pub fn default_color(&self) -> &LayoutColor {
        &self.default
    }

    /// Iterate over the colours in theme order.
    pub fn iter(&self) -> impl Iterator<Item = &LayoutColor> {
        self.colors.iter()
    }

    /// Number of selectable colours.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// True when the theme defines no colours.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::theme_default()
    }
}

/// Layout settings of one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutPreference {
    /// Owner of the settings.
    pub user_id: super::UserId,
    /// Selected colour; always a palette member.
    pub color: LayoutColor,
    /// Whether the main menu shows text labels next to icons.
    pub main_menu_labels_visible: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn color(name: &str) -> LayoutColor {
        LayoutColor::new(name).expect("valid colour fixture")
    }

    #[rstest]
    #[case::empty("")]
    #[case::spaces("  ")]
    fn blank_colours_are_rejected(#[case] raw: &str) {
        assert_eq!(LayoutColor::new(raw), Err(LayoutValidationError::EmptyColor));
    }

    #[rstest]
    #[case::markup("<script>")]
    #[case::quote("blue\"")]
    #[case::space("dark blue")]
    fn colours_with_unsafe_characters_are_rejected(#[case] raw: &str) {
        assert!(matches!(
            LayoutColor::new(raw),
            Err(LayoutValidationError::InvalidColor { .. })
        ));
    }

    #[rstest]
    fn palette_rejects_foreign_default() {
        let result = Palette::new(vec![color("red"), color("blue")], color("green"));
        assert!(matches!(
            result,
            Err(LayoutValidationError::DefaultNotInPalette { .. })
        ));
    }

    #[rstest]
    fn empty_palette_accepts_any_default() {
        let palette = Palette::new(Vec::new(), color("black")).expect("empty palette");
        assert!(palette.is_empty());
        assert_eq!(palette.default_color().as_str(), "black");
        assert!(palette.resolve("black").is_none());
    }

    #[rstest]
    fn theme_default_palette_contains_default_colour() {
        let palette = Palette::theme_default();
        assert_eq!(palette.len(), DEFAULT_PALETTE.len());
        assert!(palette.contains(palette.default_color()));
    }

    #[rstest]
    fn resolve_is_case_sensitive() {
        let palette = Palette::theme_default();
        assert!(palette.resolve("Blue").is_none());
        assert_eq!(palette.resolve("blue"), Some(color("blue")));
    }
}

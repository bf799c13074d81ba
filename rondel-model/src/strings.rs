/// Translatable strings used by the page indicator and navigation buttons.
/// English defaults; hosts override per locale with [`CarouselStringsOverride`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselStrings {
    /// Connective in "3 of 7".
    pub of_label: String,
    /// Prefix for the assistive-tech label, "Displaying item 3 of 7".
    pub reader_label: String,
    pub left_navigation: String,
    pub right_navigation: String,
}

impl Default for CarouselStrings {
    fn default() -> Self {
        Self {
            of_label: "of".to_string(),
            reader_label: "Displaying item".to_string(),
            left_navigation: "Go to previous item".to_string(),
            right_navigation: "Go to next item".to_string(),
        }
    }
}

impl CarouselStrings {
    /// Apply a partial override, keeping current values where the override
    /// leaves a field unset.
    pub fn merged(mut self, overrides: CarouselStringsOverride) -> Self {
        if let Some(of_label) = overrides.of_label {
            self.of_label = of_label;
        }
        if let Some(reader_label) = overrides.reader_label {
            self.reader_label = reader_label;
        }
        if let Some(left_navigation) = overrides.left_navigation {
            self.left_navigation = left_navigation;
        }
        if let Some(right_navigation) = overrides.right_navigation {
            self.right_navigation = right_navigation;
        }
        self
    }
}

/// Per-field override for [`CarouselStrings`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselStringsOverride {
    pub of_label: Option<String>,
    pub reader_label: Option<String>,
    pub left_navigation: Option<String>,
    pub right_navigation: Option<String>,
}

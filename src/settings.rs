use crate::color::Color;
use crate::comparison::CURRENT_COMPARISON;
use crate::formatter::Accuracy;
use serde::{Deserialize, Serialize};

/// User facing options of the previous segment component. Missing fields
/// take their defaults so older documents keep loading.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PreviousSegmentSettings {
    pub comparison: String,
    pub display_two_rows: bool,
    pub show_possible_time_save: bool,
    pub delta_accuracy: Accuracy,
    pub drop_decimals: bool,
    pub time_save_accuracy: Accuracy,
    pub override_text_color: bool,
    pub text_color: Color,
}

impl Default for PreviousSegmentSettings {
    fn default() -> Self {
        Self {
            comparison: CURRENT_COMPARISON.to_string(),
            display_two_rows: false,
            show_possible_time_save: false,
            delta_accuracy: Accuracy::Tenths,
            drop_decimals: true,
            time_save_accuracy: Accuracy::Tenths,
            override_text_color: false,
            text_color: Color::WHITE,
        }
    }
}

impl PreviousSegmentSettings {
    pub fn uses_current_comparison(&self) -> bool {
        self.comparison == CURRENT_COMPARISON
    }

    /// The override color when enabled, otherwise the layout's text color
    pub fn text_color_or(&self, layout_text_color: Color) -> Color {
        if self.override_text_color {
            self.text_color
        } else {
            layout_text_color
        }
    }
}

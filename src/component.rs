use crate::color::Color;
use crate::comparison;
use crate::delta::{self, DeltaSelection};
use crate::formatter::{DeltaTimeFormatter, PossibleTimeSaveFormatter};
use crate::services::{ColorQuery, Services, TimeFormatter};
use crate::settings::PreviousSegmentSettings;
use crate::time_save::possible_time_save;
use crate::time_span::TimeSpan;
use crate::timer::{Snapshot, TimerPhase};

pub const PREVIOUS_SEGMENT: &str = "Previous Segment";
pub const LIVE_SEGMENT: &str = "Live Segment";

const PREVIOUS_SEGMENT_ALTERNATES: [&str; 3] = ["Previous Segment", "Prev. Segment", "Prev. Seg."];
const LIVE_SEGMENT_ALTERNATES: [&str; 2] = ["Live Segment", "Live Seg."];

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayState {
    pub label: String,
    /// Shorter labels the layout may use when space runs out
    pub alternate_labels: Vec<String>,
    pub value_text: String,
    pub color: Color,
    pub label_color: Color,
    pub display_two_rows: bool,
}

/// Shows how much time the last (or running) segment gained or lost against
/// a comparison, optionally followed by how much could still be saved on it.
#[derive(Debug, Clone)]
pub struct PreviousSegment {
    pub settings: PreviousSegmentSettings,
    delta_formatter: DeltaTimeFormatter,
    time_save_formatter: PossibleTimeSaveFormatter,
}

impl PreviousSegment {
    pub fn new() -> Self {
        Self::with_settings(PreviousSegmentSettings::default())
    }

    pub fn with_settings(settings: PreviousSegmentSettings) -> Self {
        let mut component = Self {
            settings,
            delta_formatter: DeltaTimeFormatter::default(),
            time_save_formatter: PossibleTimeSaveFormatter::default(),
        };
        component.sync_formatters();
        component
    }

    /// Name of the component as configured, independent of the timer state
    pub fn component_name(&self) -> String {
        self.label(PREVIOUS_SEGMENT, comparison::short_name(&self.settings.comparison))
    }

    /// A comparison was renamed. Returns whether the stored preference
    /// changed, in which case the host should redraw its layout.
    pub fn comparison_renamed(&mut self, old_name: &str, new_name: &str) -> bool {
        if self.settings.comparison != old_name {
            return false;
        }
        log::info!("comparison renamed from {:?} to {:?}", old_name, new_name);
        self.settings.comparison = new_name.to_string();
        true
    }

    pub fn update(&mut self, timer: &Snapshot<'_>, services: &Services<'_>) -> DisplayState {
        self.sync_formatters();

        let comparison = comparison::resolve(&self.settings.comparison, timer);
        let text_color = self.settings.text_color_or(timer.layout_text_color);

        let (selection, time_save, color) = if timer.phase == TimerPhase::NotStarted {
            (None, None, text_color)
        } else {
            let selection = delta::select(timer, comparison, services.deltas);
            let time_save = selection.and_then(|s| {
                possible_time_save(timer.run, s.split_index, comparison, timer.timing_method)
            });
            let color = self.value_color(timer, services, comparison, selection, text_color);
            (selection, time_save, color)
        };

        let is_live = selection.is_some_and(|s| s.is_live);
        let delta = selection.and_then(|s| s.delta);
        log::trace!(
            "{} against {:?}: selection {:?}, time save {:?}",
            timer.phase,
            comparison,
            selection,
            time_save
        );

        let (base, alternates): (&str, &[&str]) = if is_live {
            (LIVE_SEGMENT, &LIVE_SEGMENT_ALTERNATES[..])
        } else {
            (PREVIOUS_SEGMENT, &PREVIOUS_SEGMENT_ALTERNATES[..])
        };

        DisplayState {
            label: self.label(base, comparison::short_name(comparison)),
            alternate_labels: alternates.iter().map(|s| s.to_string()).collect(),
            value_text: self.value_text(delta, time_save),
            color,
            label_color: text_color,
            display_two_rows: self.settings.display_two_rows,
        }
    }

    fn sync_formatters(&mut self) {
        self.delta_formatter =
            DeltaTimeFormatter::new(self.settings.delta_accuracy, self.settings.drop_decimals);
        self.time_save_formatter = PossibleTimeSaveFormatter::new(self.settings.time_save_accuracy);
    }

    fn label(&self, base: &str, short_comparison: &str) -> String {
        if self.settings.uses_current_comparison() {
            base.to_string()
        } else {
            format!("{} ({})", base, short_comparison)
        }
    }

    fn value_text(&self, delta: Option<TimeSpan>, time_save: Option<TimeSpan>) -> String {
        let mut text = self.delta_formatter.format(delta);
        if self.settings.show_possible_time_save {
            text.push_str(" / ");
            text.push_str(&self.time_save_formatter.format(time_save));
        }
        text
    }

    fn value_color(
        &self,
        timer: &Snapshot<'_>,
        services: &Services<'_>,
        comparison: &str,
        selection: Option<DeltaSelection>,
        text_color: Color,
    ) -> Color {
        let query = match selection {
            Some(DeltaSelection {
                delta: Some(delta),
                split_index,
                is_live,
            }) => ColorQuery {
                delta: Some(delta),
                split_index: Some(split_index),
                personal_best_comparison: false,
                segment_evaluation: !is_live,
                comparison,
                timing_method: timer.timing_method,
            },
            _ => ColorQuery {
                delta: None,
                split_index: timer.current_split_index.checked_sub(1),
                personal_best_comparison: true,
                segment_evaluation: true,
                comparison,
                timing_method: timer.timing_method,
            },
        };
        services
            .colors
            .split_color(timer, &query)
            .unwrap_or(text_color)
    }
}

impl Default for PreviousSegment {
    fn default() -> Self {
        Self::new()
    }
}

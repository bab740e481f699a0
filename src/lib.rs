// Library surface for hosts embedding the previous segment component.
// Rendering, persistence and raw delta extraction stay on the host side.
pub mod color;
pub mod comparison;
pub mod component;
pub mod delta;
pub mod formatter;
pub mod run;
pub mod services;
pub mod settings;
pub mod time_save;
pub mod time_span;
pub mod timer;

pub use color::Color;
pub use component::{DisplayState, PreviousSegment};
pub use run::{Run, RunError, Segment, Time, TimingMethod};
pub use services::{ColorQuery, SegmentDeltas, Services, SplitColors, TimeFormatter};
pub use settings::PreviousSegmentSettings;
pub use time_span::TimeSpan;
pub use timer::{Snapshot, TimerPhase};

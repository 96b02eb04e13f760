// Export modules for library usage
pub mod cli;
pub mod config;
pub mod document;
pub mod errors;
pub mod io;
pub mod level;
pub mod render;
pub mod scan;
pub mod schedule;
pub mod textstats;
pub mod widget;

// Re-export commonly used types
pub use crate::config::{Labels, ReadableConfig, WidgetOptions};
pub use crate::document::{
    shared, Document, DocumentHandle, DocumentProvider, NodeId, NodeSpec,
};
pub use crate::errors::ReadableError;
pub use crate::level::{reading_level_from_score, ReadingBand, ReadingLevel};
pub use crate::render::{format_score, Renderer, MARKER_CLASS, TOOLTIP_ID};
pub use crate::scan::{aggregate, scan_document, AggregateResult, ChartData, ScoredElement};
pub use crate::schedule::{Clock, FakeClock, Scheduler, SystemClock, TimerSlot};
pub use crate::textstats::TextSample;
pub use crate::widget::{Readable, WidgetState};

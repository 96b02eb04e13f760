use im::Vector;
use serde::Serialize;

use crate::document::NodeId;
use crate::scan::ChartData;

/// Doughnut dataset derived from one pass's bucket counts.
///
/// Built fresh for every pass and dropped with it; a spec is never mutated
/// in place, so no stale dataset can outlive its scan.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartSpec {
    pub kind: &'static str,
    pub labels: Vector<String>,
    pub data: Vector<usize>,
    pub background_colors: Vector<&'static str>,
    pub border_color: &'static str,
    pub border_width: u32,
    pub show_legend: bool,
}

impl ChartSpec {
    pub fn from_chart_data(chart_data: &ChartData) -> Self {
        Self {
            kind: "doughnut",
            labels: chart_data.labels.clone(),
            data: chart_data.counts.clone(),
            background_colors: chart_data.colors.clone(),
            border_color: "rgb(255,255,255)",
            border_width: 1,
            show_legend: false,
        }
    }

    pub fn segment_count(&self) -> usize {
        self.data.len()
    }
}

/// A chart bound to its mount point for the duration of one pass.
#[derive(Clone, Debug)]
pub struct ChartHandle {
    pub mount: NodeId,
    pub spec: ChartSpec,
}

//! Annotation rendering: per-element markers, hover tooltip, chart and
//! summary mounts.
//!
//! The renderer is the only component that mutates the preview document.
//! Everything it attaches during a pass is recorded in owned registries
//! (marker list, hover bindings), so teardown is a deterministic iteration
//! and never depends on re-querying the host page.

pub mod chart;

use std::collections::BTreeMap;

use im::Vector;

use crate::config::ReadableConfig;
use crate::document::{Document, NodeId};
use crate::errors::ReadableError;
use crate::render::chart::{ChartHandle, ChartSpec};
use crate::scan::{AggregateResult, ScoredElement};

pub const MARKER_CLASS: &str = "readable-marker";
pub const TOOLTIP_ID: &str = "readable-tooltip";

const HIGHLIGHT_BACKGROUND: &str = "#f1f1f1";
const TOOLTIP_RAISE_PX: i64 = 50;

/// Hover wiring for one scored element: the element the enter/leave
/// handlers are bound to, and the marker injected into it.
#[derive(Clone, Copy, Debug)]
pub struct HoverBinding {
    pub element: NodeId,
    pub marker: NodeId,
}

#[derive(Default)]
pub struct Renderer {
    bindings: Vec<HoverBinding>,
    tooltip: Option<NodeId>,
    hovered: Option<(NodeId, BTreeMap<String, String>)>,
    chart: Option<ChartHandle>,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bindings(&self) -> &[HoverBinding] {
        &self.bindings
    }

    pub fn chart(&self) -> Option<&ChartHandle> {
        self.chart.as_ref()
    }

    /// Inject one marker per scored element and record its hover binding.
    /// Elements that disappeared since the scan are skipped.
    pub fn paint_markers(&mut self, doc: &mut Document, elements: &Vector<ScoredElement>) {
        for element in elements.iter() {
            if !doc.contains(element.node) {
                continue;
            }
            let marker = doc.create_element("span");
            doc.add_class(marker, MARKER_CLASS);
            doc.set_attr(marker, "data-score", &format_score(element.score));
            doc.set_attr(marker, "data-readinglevel", &element.reading_level.label);
            doc.set_style(marker, "background-color", element.reading_level.color);
            doc.set_style(marker, "border-radius", "100%");
            doc.set_style(marker, "cursor", "pointer");
            doc.append_child(element.node, marker);
            self.bindings.push(HoverBinding {
                element: element.node,
                marker,
            });
        }
    }

    /// Append the (hidden) pointer-following tooltip to the preview root.
    pub fn paint_tooltip(&mut self, doc: &mut Document) {
        let tooltip = doc.create_element("div");
        doc.set_dom_id(tooltip, TOOLTIP_ID);
        for (property, value) in [
            ("position", "absolute"),
            ("display", "none"),
            ("background-color", "#333333"),
            ("color", "#ffffff"),
            ("border", "1px solid #f1f1f1"),
            ("border-radius", "10px"),
            ("padding", "5px 10px"),
            ("font-size", "14px"),
            ("font-style", "italic"),
            ("top", "0px"),
            ("left", "0px"),
        ] {
            doc.set_style(tooltip, property, value);
        }
        let root = doc.root();
        doc.append_child(root, tooltip);
        self.tooltip = Some(tooltip);
    }

    /// Enter handler: show the tooltip and highlight the element with its
    /// level color. The element's prior inline styles are snapshotted for
    /// restore on leave.
    pub fn pointer_entered(&mut self, doc: &mut Document, element: NodeId) {
        let Some(binding) = self
            .bindings
            .iter()
            .find(|b| b.element == element)
            .copied()
        else {
            return;
        };

        let score = doc.attr(binding.marker, "data-score").unwrap_or("0");
        let label = doc.attr(binding.marker, "data-readinglevel").unwrap_or("");
        let text = format!("{}% - {}", score, label);
        let color = doc
            .style(binding.marker, "background-color")
            .unwrap_or("rgb(0,0,0)")
            .to_string();

        if let Some(tooltip) = self.tooltip.filter(|t| doc.contains(*t)) {
            doc.set_text(tooltip, &text);
            doc.set_style(tooltip, "display", "inline-block");
        }

        self.hovered = Some((element, doc.styles(element)));
        doc.set_style(element, "border-left", &format!("3px solid {}", color));
        doc.set_style(element, "background-color", HIGHLIGHT_BACKGROUND);
    }

    /// Move handler: the tooltip trails the pointer, raised above it.
    pub fn pointer_moved(&mut self, doc: &mut Document, x: i64, y: i64) {
        if let Some(tooltip) = self.tooltip.filter(|t| doc.contains(*t)) {
            doc.set_style(tooltip, "top", &format!("{}px", y - TOOLTIP_RAISE_PX));
            doc.set_style(tooltip, "left", &format!("{}px", x));
        }
    }

    /// Leave handler: hide the tooltip and restore the element's styles.
    pub fn pointer_left(&mut self, doc: &mut Document, element: NodeId) {
        if let Some(tooltip) = self.tooltip.filter(|t| doc.contains(*t)) {
            doc.set_style(tooltip, "display", "none");
            doc.set_text(tooltip, "");
        }
        if let Some((hovered, styles)) = self.hovered.take() {
            if hovered == element {
                doc.restore_styles(element, styles);
            } else {
                // stale highlight from a different element; restore it too
                doc.restore_styles(hovered, styles);
            }
        }
    }

    /// Bind the chart and write the summary texts to their mount points.
    /// Mount ids carry the widget instance suffix when one is configured,
    /// so several instances can share a host page. A missing mount is fatal
    /// for the pass and reported to the caller.
    pub fn mount_summary(
        &mut self,
        surface: &mut Document,
        result: &AggregateResult,
        config: &ReadableConfig,
    ) -> Result<(), ReadableError> {
        let options = &config.options;
        let labels = &config.labels;
        let chart_mount = find_mount(surface, &mount_id(&options.chart_mount, config))?;
        let score_mount = find_mount(surface, &mount_id(&options.score_mount, config))?;
        let grade_mount = find_mount(surface, &mount_id(&options.grade_mount, config))?;
        let level_mount = find_mount(surface, &mount_id(&options.level_mount, config))?;

        self.chart = Some(ChartHandle {
            mount: chart_mount,
            spec: ChartSpec::from_chart_data(&result.chart_data),
        });
        surface.add_class(chart_mount, "readable-chart--mounted");
        surface.set_text(
            score_mount,
            &format!("{}%", format_score(result.reading_ease_score)),
        );
        surface.set_text(
            grade_mount,
            &format!("{}: {}", labels.grade_level, result.grade_level),
        );
        surface.set_text(
            level_mount,
            &format!("{}: {}", labels.reading_level, result.reading_level.label),
        );
        Ok(())
    }

    /// Detach everything this renderer attached to the preview. Safe to
    /// call repeatedly; nodes already gone are skipped.
    pub fn teardown(&mut self, doc: &mut Document) {
        for binding in self.bindings.drain(..) {
            doc.remove_node(binding.marker);
        }
        if let Some(tooltip) = self.tooltip.take() {
            doc.remove_node(tooltip);
        }
        if let Some((element, styles)) = self.hovered.take() {
            doc.restore_styles(element, styles);
        }
        // the chart dies with the pass; the next one builds a fresh spec
        self.chart = None;
    }

    /// Forget internal state without touching any document. Used when the
    /// preview handle itself is gone.
    pub fn reset(&mut self) {
        self.bindings.clear();
        self.tooltip = None;
        self.hovered = None;
        self.chart = None;
    }
}

/// Display form of a score: one decimal, whole numbers without the `.0`.
pub fn format_score(score: f64) -> String {
    let formatted = format!("{:.1}", score);
    formatted
        .strip_suffix(".0")
        .map(str::to_string)
        .unwrap_or(formatted)
}

/// Mount id for this widget instance: the base id, suffixed with the
/// instance id when the host configured one.
pub fn mount_id(base: &str, config: &ReadableConfig) -> String {
    if config.instance_id.is_empty() {
        base.to_string()
    } else {
        format!("{}_{}", base, config.instance_id)
    }
}

fn find_mount(surface: &Document, mount: &str) -> Result<NodeId, ReadableError> {
    surface
        .element_by_id(mount)
        .ok_or_else(|| ReadableError::missing_target(mount))
}

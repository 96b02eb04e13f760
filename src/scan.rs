//! Element scanning and document-level aggregation.
//!
//! A scan pass reads the whole preview before anything mutates it: collect
//! the scorable block elements in document order, score each one, then fold
//! the same text into one combined sample for the document-level result.

use im::Vector;
use serde::Serialize;

use crate::config::Labels;
use crate::document::{Document, NodeId};
use crate::level::{reading_level_from_score, ReadingBand, ReadingLevel};
use crate::textstats::TextSample;

/// One scored block element. Recreated on every pass.
#[derive(Clone, Debug, Serialize)]
pub struct ScoredElement {
    pub node: NodeId,
    /// Reading ease, floored at 0. May exceed 100 for trivially easy text.
    pub score: f64,
    pub reading_level: ReadingLevel,
    pub raw_text: String,
}

/// Parallel label/count/color arrays for chart consumption, non-empty
/// buckets only, ascending bucket id.
#[derive(Clone, Debug, Serialize)]
pub struct ChartData {
    pub total: usize,
    pub labels: Vector<String>,
    pub counts: Vector<usize>,
    pub colors: Vector<&'static str>,
}

/// Document-level result of a completed scan pass.
#[derive(Clone, Debug, Serialize)]
pub struct AggregateResult {
    pub chart_data: ChartData,
    pub grade_level: u32,
    pub reading_ease_score: f64,
    pub reading_level: ReadingLevel,
}

/// Collect and score every non-empty block element, in document order.
/// Elements with no countable words are skipped, never scored.
pub fn scan_document(doc: &Document, tags: &[String], labels: &Labels) -> Vector<ScoredElement> {
    let mut elements = Vector::new();
    for node in doc.block_elements(tags) {
        let raw_text = doc.text_content(node);
        let sample = TextSample::new(&raw_text);
        if sample.is_empty() {
            continue;
        }
        let score = sample.flesch_kincaid_reading_ease().max(0.0);
        elements.push_back(ScoredElement {
            node,
            score,
            reading_level: reading_level_from_score(score, labels),
            raw_text,
        });
    }
    elements
}

/// Fold a pass's elements into the document-level result.
pub fn aggregate(elements: &Vector<ScoredElement>, labels: &Labels) -> AggregateResult {
    let joined = elements
        .iter()
        .map(|e| e.raw_text.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    let sample = TextSample::new(&joined);
    let reading_ease_score = sample.flesch_kincaid_reading_ease().clamp(0.0, 100.0);
    AggregateResult {
        chart_data: chart_data(elements),
        grade_level: grade_level(&sample),
        reading_ease_score,
        reading_level: reading_level_from_score(reading_ease_score, labels),
    }
}

/// Combined grade estimate: mean of the five formulas, each floored at 1
/// before averaging, rounded up to a whole grade.
pub fn grade_level(sample: &TextSample) -> u32 {
    let metrics = [
        sample.gunning_fog_score(),
        sample.flesch_kincaid_grade_level(),
        sample.coleman_liau_index(),
        sample.smog_index(),
        sample.automated_readability_index(),
    ];
    let mean = metrics.iter().map(|m| m.max(1.0)).sum::<f64>() / metrics.len() as f64;
    mean.ceil() as u32
}

/// Partition elements by bucket id. Sum of counts always equals the number
/// of scored elements.
fn chart_data(elements: &Vector<ScoredElement>) -> ChartData {
    let mut buckets = [0usize; ReadingBand::COUNT];
    let mut bucket_labels: [Option<&str>; ReadingBand::COUNT] = [None; ReadingBand::COUNT];
    for element in elements.iter() {
        let id = element.reading_level.id as usize;
        buckets[id] += 1;
        bucket_labels[id].get_or_insert(element.reading_level.label.as_str());
    }

    let mut labels = Vector::new();
    let mut counts = Vector::new();
    let mut colors = Vector::new();
    for id in 0..ReadingBand::COUNT {
        if buckets[id] == 0 {
            continue;
        }
        if let (Some(label), Some(band)) = (bucket_labels[id], ReadingBand::from_id(id as u8)) {
            labels.push_back(label.to_string());
            counts.push_back(buckets[id]);
            colors.push_back(band.color());
        }
    }

    ChartData {
        total: elements.len(),
        labels,
        counts,
        colors,
    }
}

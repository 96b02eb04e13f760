use colored::*;
use serde::Serialize;
use std::io::Write;

use crate::render::format_score;
use crate::scan::AggregateResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Terminal,
}

/// One scored block, flattened for reporting.
#[derive(Debug, Clone, Serialize)]
pub struct ElementRow {
    pub tag: String,
    pub score: f64,
    pub level_id: u8,
    pub level_label: String,
    pub excerpt: String,
}

/// Everything one analyze run produces, ready to print.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub result: AggregateResult,
    pub elements: Vec<ElementRow>,
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }
}

pub struct TerminalWriter;

impl Default for TerminalWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalWriter {
    pub fn new() -> Self {
        Self
    }
}

impl OutputWriter for TerminalWriter {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        print_header();
        print_summary(&report.result);
        print_distribution(&report.result);
        print_elements(&report.elements);
        Ok(())
    }
}

fn print_header() {
    println!("{}", "Readability Report".bold().blue());
    println!("{}", "==================".blue());
    println!();
}

fn print_summary(result: &AggregateResult) {
    println!("Summary:");
    println!(
        "  Reading ease: {}%",
        format_score(result.reading_ease_score).color(band_color(result.reading_level.id))
    );
    println!("  Grade level: {}", result.grade_level);
    println!(
        "  Reading level: {}",
        result
            .reading_level
            .label
            .color(band_color(result.reading_level.id))
    );
    println!();
}

fn print_distribution(result: &AggregateResult) {
    println!("Distribution ({} blocks):", result.chart_data.total);
    for ((label, count), color) in result
        .chart_data
        .labels
        .iter()
        .zip(result.chart_data.counts.iter())
        .zip(result.chart_data.colors.iter())
    {
        let swatch = "●".color(rgb_color(color));
        println!("  {} {}: {}", swatch, label, count);
    }
    println!();
}

fn print_elements(elements: &[ElementRow]) {
    if elements.is_empty() {
        return;
    }
    println!("Blocks:");
    elements.iter().enumerate().for_each(|(i, row)| {
        println!(
            "  {}. <{}> {}% {} - {}",
            i + 1,
            row.tag,
            format_score(row.score).color(band_color(row.level_id)),
            row.level_label,
            row.excerpt
        );
    });
    println!();
}

/// Terminal color for a bucket id, matching the marker palette.
fn band_color(id: u8) -> Color {
    match id {
        0 => Color::TrueColor { r: 0, g: 128, b: 0 },
        1 | 2 => Color::TrueColor { r: 0, g: 100, b: 0 },
        3 => Color::TrueColor {
            r: 173,
            g: 255,
            b: 47,
        },
        4 => Color::TrueColor {
            r: 255,
            g: 215,
            b: 0,
        },
        5 => Color::TrueColor {
            r: 255,
            g: 69,
            b: 0,
        },
        _ => Color::TrueColor { r: 255, g: 0, b: 0 },
    }
}

/// Parse an `rgb(r,g,b)` palette entry into a terminal color.
fn rgb_color(color: &str) -> Color {
    let components: Vec<u8> = color
        .trim_start_matches("rgb(")
        .trim_end_matches(')')
        .split(',')
        .filter_map(|c| c.trim().parse().ok())
        .collect();
    match components.as_slice() {
        [r, g, b] => Color::TrueColor {
            r: *r,
            g: *g,
            b: *b,
        },
        _ => Color::White,
    }
}

pub fn create_writer(format: OutputFormat) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(std::io::stdout())),
        OutputFormat::Terminal => Box::new(TerminalWriter::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Labels;
    use crate::level::COLOR_GREEN;
    use crate::scan::{aggregate, scan_document};
    use crate::document::{Document, NodeSpec};

    fn sample_report() -> AnalysisReport {
        let spec: NodeSpec = serde_json::from_str(
            r#"{"tag": "body", "children": [{"tag": "p", "text": "The cat sat on the mat."}]}"#,
        )
        .unwrap();
        let doc = Document::from_spec(&spec);
        let labels = Labels::default();
        let tags = crate::config::WidgetOptions::default().tags;
        let elements = scan_document(&doc, &tags, &labels);
        let result = aggregate(&elements, &labels);
        let rows = elements
            .iter()
            .map(|e| ElementRow {
                tag: "p".to_string(),
                score: e.score,
                level_id: e.reading_level.id,
                level_label: e.reading_level.label.clone(),
                excerpt: e.raw_text.clone(),
            })
            .collect();
        AnalysisReport {
            result,
            elements: rows,
        }
    }

    #[test]
    fn test_json_writer_emits_valid_json() {
        let report = sample_report();
        let mut buffer = Vec::new();
        JsonWriter::new(&mut buffer).write_report(&report).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert!(value["result"]["reading_ease_score"].is_number());
        assert!(value["result"]["chart_data"]["total"].is_number());
        assert_eq!(value["elements"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_rgb_color_parses_palette_entries() {
        assert_eq!(
            rgb_color(COLOR_GREEN),
            Color::TrueColor { r: 0, g: 128, b: 0 }
        );
        assert_eq!(rgb_color("not-a-color"), Color::White);
    }
}

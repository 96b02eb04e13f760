use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};

use readable::cli::{Cli, Commands, OutputFormat};
use readable::config::{Labels, WidgetOptions};
use readable::document::{Document, NodeSpec};
use readable::io::output::{self, AnalysisReport, ElementRow};
use readable::scan::{aggregate, scan_document};
use readable::textstats::TextSample;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            path,
            format,
            labels,
            top,
        } => run_analyze(&path, format, labels, top),
        Commands::Stats { path, format } => run_stats(&path, format),
    }
}

fn run_analyze(
    path: &Path,
    format: OutputFormat,
    labels_path: Option<PathBuf>,
    top: Option<usize>,
) -> Result<()> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read document {}", path.display()))?;
    let spec: NodeSpec = serde_json::from_str(&raw)
        .with_context(|| format!("invalid document JSON in {}", path.display()))?;
    let labels = load_labels(labels_path)?;

    let doc = Document::from_spec(&spec);
    let options = WidgetOptions::default();
    let elements = scan_document(&doc, &options.tags, &labels);
    if elements.is_empty() {
        anyhow::bail!("no scorable content in {}", path.display());
    }
    let result = aggregate(&elements, &labels);

    let mut rows: Vec<ElementRow> = elements
        .iter()
        .map(|element| ElementRow {
            tag: doc
                .node(element.node)
                .map(|n| n.tag.clone())
                .unwrap_or_default(),
            score: element.score,
            level_id: element.reading_level.id,
            level_label: element.reading_level.label.clone(),
            excerpt: excerpt(&element.raw_text),
        })
        .collect();

    if let Some(top) = top {
        rows.sort_by(|a, b| a.score.total_cmp(&b.score));
        rows.truncate(top);
    }

    let report = AnalysisReport {
        result,
        elements: rows,
    };
    output::create_writer(output_format(format)).write_report(&report)
}

fn run_stats(path: &Path, format: OutputFormat) -> Result<()> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read text {}", path.display()))?;
    let sample = TextSample::new(&raw);
    if sample.is_empty() {
        anyhow::bail!("no countable words in {}", path.display());
    }

    match format {
        OutputFormat::Json => {
            let stats = serde_json::json!({
                "sentences": sample.sentence_count(),
                "words": sample.word_count(),
                "syllables": sample.syllable_count(),
                "letters": sample.letter_count(),
                "flesch_kincaid_reading_ease": sample.flesch_kincaid_reading_ease(),
                "flesch_kincaid_grade_level": sample.flesch_kincaid_grade_level(),
                "gunning_fog_score": sample.gunning_fog_score(),
                "coleman_liau_index": sample.coleman_liau_index(),
                "smog_index": sample.smog_index(),
                "automated_readability_index": sample.automated_readability_index(),
            });
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        OutputFormat::Terminal => {
            println!("Sentences: {}", sample.sentence_count());
            println!("Words: {}", sample.word_count());
            println!("Syllables: {}", sample.syllable_count());
            println!("Letters: {}", sample.letter_count());
            println!();
            println!(
                "Flesch-Kincaid reading ease: {:.1}",
                sample.flesch_kincaid_reading_ease()
            );
            println!(
                "Flesch-Kincaid grade level: {:.1}",
                sample.flesch_kincaid_grade_level()
            );
            println!("Gunning Fog: {:.1}", sample.gunning_fog_score());
            println!("Coleman-Liau: {:.1}", sample.coleman_liau_index());
            println!("SMOG: {:.1}", sample.smog_index());
            println!(
                "Automated readability: {:.1}",
                sample.automated_readability_index()
            );
        }
    }
    Ok(())
}

fn load_labels(path: Option<PathBuf>) -> Result<Labels> {
    match path {
        Some(path) => {
            let raw = fs::read_to_string(&path)
                .with_context(|| format!("failed to read labels {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("invalid labels JSON in {}", path.display()))
        }
        None => Ok(Labels::default()),
    }
}

fn output_format(format: OutputFormat) -> output::OutputFormat {
    match format {
        OutputFormat::Json => output::OutputFormat::Json,
        OutputFormat::Terminal => output::OutputFormat::Terminal,
    }
}

fn excerpt(text: &str) -> String {
    const MAX: usize = 60;
    if text.chars().count() <= MAX {
        return text.to_string();
    }
    let cut: String = text.chars().take(MAX).collect();
    format!("{}…", cut.trim_end())
}

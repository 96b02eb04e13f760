use serde::{Deserialize, Serialize};

use crate::errors::ReadableError;

/// Localized labels supplied by the hosting surface.
///
/// Defaults are English; a host passes its own translations as JSON.
/// The wire form uses the host's camelCase key names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Labels {
    #[serde(default = "default_grade_level")]
    pub grade_level: String,
    #[serde(default = "default_reading_level")]
    pub reading_level: String,
    #[serde(default = "default_very_easy")]
    pub very_easy: String,
    #[serde(default = "default_easy")]
    pub easy: String,
    #[serde(default = "default_fairly_easy")]
    pub fairly_easy: String,
    #[serde(default = "default_standard")]
    pub standard: String,
    #[serde(default = "default_fairly_difficult")]
    pub fairly_difficult: String,
    #[serde(default = "default_difficult")]
    pub difficult: String,
    #[serde(default = "default_very_confusing")]
    pub very_confusing: String,
}

fn default_grade_level() -> String {
    "Grade level".to_string()
}

fn default_reading_level() -> String {
    "Reading level".to_string()
}

fn default_very_easy() -> String {
    "very easy".to_string()
}

fn default_easy() -> String {
    "easy".to_string()
}

fn default_fairly_easy() -> String {
    "fairly easy".to_string()
}

fn default_standard() -> String {
    "standard".to_string()
}

fn default_fairly_difficult() -> String {
    "fairly difficult".to_string()
}

fn default_difficult() -> String {
    "difficult".to_string()
}

fn default_very_confusing() -> String {
    "very confusing".to_string()
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            grade_level: default_grade_level(),
            reading_level: default_reading_level(),
            very_easy: default_very_easy(),
            easy: default_easy(),
            fairly_easy: default_fairly_easy(),
            standard: default_standard(),
            fairly_difficult: default_fairly_difficult(),
            difficult: default_difficult(),
            very_confusing: default_very_confusing(),
        }
    }
}

/// Scan, retry and render tunables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetOptions {
    /// Block tags considered scorable, in probe order.
    #[serde(default = "default_tags")]
    pub tags: Vec<String>,

    /// Bounded retries against a preview that has not populated yet.
    #[serde(default = "default_max_scan_attempts")]
    pub max_scan_attempts: u32,

    /// Delay between scan retries, in milliseconds.
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,

    /// Debounce window for annotation rebuilds, in milliseconds.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Deferral before the chart and summary mount, in milliseconds.
    #[serde(default = "default_chart_delay_ms")]
    pub chart_delay_ms: u64,

    /// Element id the chart binds to on the widget surface.
    #[serde(default = "default_chart_mount")]
    pub chart_mount: String,

    /// Element id receiving the overall score text.
    #[serde(default = "default_score_mount")]
    pub score_mount: String,

    /// Element id receiving the grade-level text.
    #[serde(default = "default_grade_mount")]
    pub grade_mount: String,

    /// Element id receiving the reading-level text.
    #[serde(default = "default_level_mount")]
    pub level_mount: String,
}

fn default_tags() -> Vec<String> {
    ["h1", "h2", "h3", "h4", "h5", "h6", "p", "li", "dd"]
        .iter()
        .map(|t| t.to_string())
        .collect()
}

fn default_max_scan_attempts() -> u32 {
    5
}

fn default_retry_delay_ms() -> u64 {
    500
}

fn default_debounce_ms() -> u64 {
    500
}

fn default_chart_delay_ms() -> u64 {
    200
}

fn default_chart_mount() -> String {
    "readable-chart".to_string()
}

fn default_score_mount() -> String {
    "readable-score".to_string()
}

fn default_grade_mount() -> String {
    "readable-grade-level".to_string()
}

fn default_level_mount() -> String {
    "readable-reading-level".to_string()
}

impl Default for WidgetOptions {
    fn default() -> Self {
        Self {
            tags: default_tags(),
            max_scan_attempts: default_max_scan_attempts(),
            retry_delay_ms: default_retry_delay_ms(),
            debounce_ms: default_debounce_ms(),
            chart_delay_ms: default_chart_delay_ms(),
            chart_mount: default_chart_mount(),
            score_mount: default_score_mount(),
            grade_mount: default_grade_mount(),
            level_mount: default_level_mount(),
        }
    }
}

impl WidgetOptions {
    /// Collect every validation problem instead of stopping at the first.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut issues = Vec::new();

        if self.tags.is_empty() {
            issues.push("tags must name at least one block element".to_string());
        }
        if self.max_scan_attempts == 0 {
            issues.push("max_scan_attempts must be at least 1".to_string());
        }
        if self.retry_delay_ms == 0 {
            issues.push("retry_delay_ms must be positive".to_string());
        }
        if self.debounce_ms == 0 {
            issues.push("debounce_ms must be positive".to_string());
        }
        for (name, mount) in [
            ("chart_mount", &self.chart_mount),
            ("score_mount", &self.score_mount),
            ("grade_mount", &self.grade_mount),
            ("level_mount", &self.level_mount),
        ] {
            if mount.is_empty() {
                issues.push(format!("{} must not be empty", name));
            }
        }

        if issues.is_empty() {
            Ok(())
        } else {
            Err(issues)
        }
    }
}

/// Full widget configuration: instance identity, labels, tunables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadableConfig {
    /// Unique widget instance id, supplied by the host.
    #[serde(default)]
    pub instance_id: String,

    #[serde(default)]
    pub labels: Labels,

    #[serde(default)]
    pub options: WidgetOptions,
}

impl ReadableConfig {
    pub fn from_json(payload: &str) -> Result<Self, ReadableError> {
        let config: Self = serde_json::from_str(payload)
            .map_err(|e| ReadableError::config(format!("invalid config payload: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ReadableError> {
        self.options
            .validate()
            .map_err(|issues| ReadableError::config(issues.join("; ")))
    }
}

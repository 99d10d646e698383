//! Configuration for the extraction pipeline
//!
//! All tunable constants of the pipeline live here as plain data: keyword
//! weights, confidence weights, caps and thresholds. The config is built
//! once and passed into [`crate::TaskExtractor::new`]; nothing in
//! the pipeline reads ambient global state.

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::ExtractionError;

/// Vocabulary selector for the date resolver
///
/// Affects weekday names and relative-phrase vocabulary only; action markers
/// are locale-independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English vocabulary (default)
    #[default]
    English,
    /// German vocabulary
    German,
}

/// Configuration for the extraction pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Maximum length of derived task titles, in characters
    #[serde(default = "default_max_title_length")]
    pub max_title_length: usize,

    /// Maximum number of tags kept per task
    #[serde(default = "default_max_tags")]
    pub max_tags: usize,

    /// Confidence floor below which a call reports `success = false`
    #[serde(default = "default_confidence_floor")]
    pub confidence_floor: f32,

    /// Urgency assigned when no keyword or deadline signal is present
    #[serde(default = "default_baseline_urgency")]
    pub baseline_urgency: f32,

    /// Urgency keyword weight table (keyword, weight in [0, 1])
    #[serde(default = "default_urgency_keywords")]
    pub urgency_keywords: Vec<(String, f32)>,

    /// Weight of the marker-match strength in clause confidence
    #[serde(default = "default_marker_weight")]
    pub marker_weight: f32,

    /// Weight of date-resolution success in clause confidence
    #[serde(default = "default_date_weight")]
    pub date_weight: f32,

    /// Weight of urgency/importance agreement in clause confidence
    #[serde(default = "default_agreement_weight")]
    pub agreement_weight: f32,

    /// Timezone in which end-of-day instants are computed
    #[serde(default = "default_timezone")]
    pub timezone: Tz,

    /// Vocabulary for temporal expressions
    #[serde(default)]
    pub locale: Locale,
}

const fn default_max_title_length() -> usize {
    80
}

const fn default_max_tags() -> usize {
    8
}

const fn default_confidence_floor() -> f32 {
    0.2
}

const fn default_baseline_urgency() -> f32 {
    0.3
}

fn default_urgency_keywords() -> Vec<(String, f32)> {
    vec![
        ("urgent".to_string(), 1.0),
        ("asap".to_string(), 0.9),
        ("critical".to_string(), 0.9),
        ("immediately".to_string(), 0.9),
        ("emergency".to_string(), 0.9),
        ("important".to_string(), 0.6),
    ]
}

const fn default_marker_weight() -> f32 {
    0.5
}

const fn default_date_weight() -> f32 {
    0.3
}

const fn default_agreement_weight() -> f32 {
    0.2
}

const fn default_timezone() -> Tz {
    Tz::UTC
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            max_title_length: default_max_title_length(),
            max_tags: default_max_tags(),
            confidence_floor: default_confidence_floor(),
            baseline_urgency: default_baseline_urgency(),
            urgency_keywords: default_urgency_keywords(),
            marker_weight: default_marker_weight(),
            date_weight: default_date_weight(),
            agreement_weight: default_agreement_weight(),
            timezone: default_timezone(),
            locale: Locale::default(),
        }
    }
}

impl ExtractorConfig {
    /// Set the timezone from an IANA name
    ///
    /// # Errors
    ///
    /// Returns [`ExtractionError::InvalidTimezone`] for unknown names.
    pub fn with_timezone(mut self, name: &str) -> Result<Self, ExtractionError> {
        self.timezone = name
            .parse::<Tz>()
            .map_err(|_| ExtractionError::InvalidTimezone(name.to_string()))?;
        Ok(self)
    }

    /// Set the date-resolver locale
    #[must_use]
    pub const fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Validate ranges and weights
    ///
    /// # Errors
    ///
    /// Returns [`ExtractionError::Configuration`] when a threshold is out of
    /// [0, 1] or the confidence weights sum to zero.
    pub fn validate(&self) -> Result<(), ExtractionError> {
        for (name, value) in [
            ("confidence_floor", self.confidence_floor),
            ("baseline_urgency", self.baseline_urgency),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ExtractionError::Configuration(format!(
                    "{name} must be in [0, 1], got {value}"
                )));
            }
        }
        let weight_sum = self.marker_weight + self.date_weight + self.agreement_weight;
        if weight_sum <= 0.0 {
            return Err(ExtractionError::Configuration(
                "confidence weights must sum to a positive value".to_string(),
            ));
        }
        if self.max_title_length == 0 {
            return Err(ExtractionError::Configuration(
                "max_title_length must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

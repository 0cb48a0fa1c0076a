//! Render context: exam level and the caller-declared subject.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// Subject used when neither the caller nor the analysis names one.
pub const DEFAULT_SUBJECT: &str = "General Studies";

/// MANEB examination level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ExamLevel {
    /// Junior Certificate of Education
    Jce,
    /// Malawi School Certificate of Education
    #[default]
    Msce,
}

impl ExamLevel {
    pub fn label(&self) -> &'static str {
        match self {
            ExamLevel::Jce => "JCE",
            ExamLevel::Msce => "MSCE",
        }
    }

    pub fn full_name(&self) -> &'static str {
        match self {
            ExamLevel::Jce => "Junior Certificate of Education",
            ExamLevel::Msce => "Malawi School Certificate of Education",
        }
    }
}

impl fmt::Display for ExamLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for ExamLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "JCE" => Ok(ExamLevel::Jce),
            "MSCE" => Ok(ExamLevel::Msce),
            other => Err(AppError::Validation(format!(
                "Unknown exam level '{}', expected JCE or MSCE",
                other
            ))),
        }
    }
}

/// Caller-side overrides for rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuideContext {
    /// Subject declared by the caller; wins over the detected one
    pub subject: Option<String>,
    /// Exam level; MSCE when absent
    pub level: Option<ExamLevel>,
}

impl GuideContext {
    pub fn new(subject: Option<String>, level: Option<ExamLevel>) -> Self {
        Self { subject, level }
    }

    /// Declared subject, else detected subject, else [`DEFAULT_SUBJECT`].
    pub fn effective_subject<'a>(&'a self, detected: Option<&'a str>) -> &'a str {
        self.subject
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .or(detected)
            .unwrap_or(DEFAULT_SUBJECT)
    }

    pub fn effective_level(&self) -> ExamLevel {
        self.level.unwrap_or_default()
    }
}

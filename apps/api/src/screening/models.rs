//! Data models for one screening run.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::screening::classifier::HiringProbability;

/// Fixed feedback attached to placeholder results for failed items.
pub const PLACEHOLDER_FEEDBACK: &str =
    "Could not analyze this resume. Please check the file format or content and try again.";

/// An uploaded file: its original name, declared media type, and raw bytes.
#[derive(Debug, Clone)]
pub struct FilePayload {
    pub name: String,
    pub media_type: String,
    pub bytes: Bytes,
}

/// The job description for a run: inline text or an uploaded file.
/// Exactly one variant is active per run.
#[derive(Debug, Clone)]
pub enum JobDescriptionInput {
    Text(String),
    File(FilePayload),
}

impl JobDescriptionInput {
    /// Builds the input from optional form fields. A file wins over text when
    /// both are present; blank text counts as absent. `None` means the
    /// precondition for starting a run is not met.
    pub fn from_parts(text: Option<String>, file: Option<FilePayload>) -> Option<Self> {
        if let Some(file) = file {
            return Some(JobDescriptionInput::File(file));
        }
        match text {
            Some(text) if !text.trim().is_empty() => Some(JobDescriptionInput::Text(text)),
            _ => None,
        }
    }
}

/// The content of one queued resume.
#[derive(Debug, Clone)]
pub enum ResumeSource {
    /// Pasted text block.
    Text(String),
    /// Uploaded file content.
    File { media_type: String, bytes: Bytes },
}

/// One unit of work: a single resume awaiting analysis.
/// Built once when a run starts; immutable; consumed exactly once.
#[derive(Debug, Clone)]
pub struct ResumeItem {
    pub display_name: String,
    pub source: ResumeSource,
}

/// The analyzer's raw structured output for one resume.
/// Field names mirror the declared response schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeAnalysis {
    pub score: i64,
    pub summary: String,
    pub missing_skills: Vec<String>,
    pub missing_certifications: Vec<String>,
    pub feedback: String,
}

/// The record for one processed item: the analyzer's fields plus the item's
/// display name and the derived hiring-probability tier. Never mutated after
/// construction; the result list lives only for the duration of one run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub file_name: String,
    pub score: i64,
    pub summary: String,
    pub missing_skills: Vec<String>,
    pub missing_certifications: Vec<String>,
    pub feedback: String,
    pub hiring_probability: HiringProbability,
}

impl AnalysisResult {
    /// Builds a result from a successful analysis, deriving the tier from the score.
    pub fn from_analysis(display_name: String, analysis: ResumeAnalysis) -> Self {
        AnalysisResult {
            file_name: display_name,
            hiring_probability: HiringProbability::from_score(analysis.score),
            score: analysis.score,
            summary: analysis.summary,
            missing_skills: analysis.missing_skills,
            missing_certifications: analysis.missing_certifications,
            feedback: analysis.feedback,
        }
    }

    /// Builds a placeholder result standing in for a failed item.
    /// Score 0 and the Low tier rank these naturally to the bottom when a
    /// presenter sorts by descending score.
    pub fn placeholder(display_name: String, error_message: &str) -> Self {
        AnalysisResult {
            file_name: display_name,
            score: 0,
            summary: format!("Error: {error_message}"),
            missing_skills: Vec::new(),
            missing_certifications: Vec::new(),
            feedback: PLACEHOLDER_FEEDBACK.to_string(),
            hiring_probability: HiringProbability::Low,
        }
    }
}

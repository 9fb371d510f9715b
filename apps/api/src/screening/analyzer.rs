//! Remote analyzer boundary — the only place screening talks to the LLM.
//!
//! The orchestrator depends on the `ResumeAnalyzer` trait, not on Gemini
//! directly, so tests can script successes and failures without a network.

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde_json::{json, Value};
use thiserror::Error;

use crate::llm_client::prompts::{
    job_description_block, resume_block, ANALYSIS_PROMPT, JOB_DESCRIPTION_FILE_LABEL,
    RESUME_FILE_LABEL,
};
use crate::llm_client::{GeminiClient, LlmError, Part};
use crate::screening::models::{JobDescriptionInput, ResumeAnalysis, ResumeSource};

/// Failure of one item's analysis. The display text of each variant is what
/// ends up in the placeholder result's summary, so the messages are written
/// for the end user, not for operators (those details go to the logs).
#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("Pasted resume content is empty.")]
    EmptyPastedContent,

    #[error(
        "One of the file formats may be unsupported or corrupted. \
         Please try with standard PDF or TXT files."
    )]
    UnsupportedFile,

    #[error("Failed to parse the AI model's response. The format was invalid.")]
    InvalidResponseFormat,

    #[error(
        "The AI model returned an empty response. This may be due to content \
         safety filters or an issue with the input files."
    )]
    EmptyResponse,

    /// Any other upstream failure; the message passes through as-is.
    #[error("{0}")]
    Upstream(String),
}

impl From<LlmError> for AnalyzeError {
    fn from(error: LlmError) -> Self {
        match &error {
            LlmError::EmptyResponse => AnalyzeError::EmptyResponse,
            LlmError::Parse(_) => AnalyzeError::InvalidResponseFormat,
            _ if error.is_client_rejection() => AnalyzeError::UnsupportedFile,
            _ => AnalyzeError::Upstream(error.to_string()),
        }
    }
}

/// Scores one resume against one job description.
#[async_trait]
pub trait ResumeAnalyzer: Send + Sync {
    async fn analyze(
        &self,
        job_description: &JobDescriptionInput,
        resume: &ResumeSource,
    ) -> Result<ResumeAnalysis, AnalyzeError>;
}

/// Production analyzer backed by the Gemini structured-output endpoint.
pub struct GeminiAnalyzer {
    llm: GeminiClient,
}

impl GeminiAnalyzer {
    pub fn new(llm: GeminiClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl ResumeAnalyzer for GeminiAnalyzer {
    async fn analyze(
        &self,
        job_description: &JobDescriptionInput,
        resume: &ResumeSource,
    ) -> Result<ResumeAnalysis, AnalyzeError> {
        let parts = build_request_parts(job_description, resume);
        let analysis = self
            .llm
            .generate_json::<ResumeAnalysis>(parts, response_schema())
            .await?;
        Ok(analysis)
    }
}

/// Assembles the multipart request: the analysis instruction, then the job
/// description, then the resume. File inputs become base64 inline payloads
/// tagged with their media type; text inputs become delimited text blocks.
fn build_request_parts(job_description: &JobDescriptionInput, resume: &ResumeSource) -> Vec<Part> {
    let mut parts = vec![Part::text(ANALYSIS_PROMPT)];

    match job_description {
        JobDescriptionInput::Text(text) => parts.push(Part::text(job_description_block(text))),
        JobDescriptionInput::File(file) => {
            parts.push(Part::text(JOB_DESCRIPTION_FILE_LABEL));
            parts.push(Part::inline_data(
                file.media_type.clone(),
                BASE64.encode(&file.bytes),
            ));
        }
    }

    match resume {
        ResumeSource::Text(text) => parts.push(Part::text(resume_block(text))),
        ResumeSource::File { media_type, bytes } => {
            parts.push(Part::text(RESUME_FILE_LABEL));
            parts.push(Part::inline_data(media_type.clone(), BASE64.encode(bytes)));
        }
    }

    parts
}

/// The declared output schema for the analysis call. All five fields are
/// required; `ResumeAnalysis` deserializes exactly this shape.
fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "score": {
                "type": "INTEGER",
                "description": "A relevance score from 0 to 100, where 100 is a perfect match."
            },
            "summary": {
                "type": "STRING",
                "description": "A concise summary of the candidate's strengths and weaknesses \
                                in relation to the job description."
            },
            "missingSkills": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "Key skills mentioned in the job description that are missing \
                                from the resume."
            },
            "missingCertifications": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "Key certifications mentioned in the job description that are \
                                missing from the resume."
            },
            "feedback": {
                "type": "STRING",
                "description": "Constructive, actionable feedback on how the candidate could \
                                improve their resume for this specific job description."
            }
        },
        "required": ["score", "summary", "missingSkills", "missingCertifications", "feedback"]
    })
}

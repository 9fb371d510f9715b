//! Resume Screening — batch analysis of candidate resumes against one job description.
//!
//! Flow: multipart input → `ResumeBatch` → ordered queue → sequential
//! orchestrator → per-item analyzer call → classified result or placeholder →
//! incremental event publication over SSE.

pub mod analyzer;
pub mod batch;
pub mod classifier;
pub mod events;
pub mod handlers;
pub mod models;
pub mod orchestrator;

//! Batch orchestrator — runs one screening over one queue, strictly one item
//! at a time, isolating per-item failures into placeholder results.

use tracing::{error, info};

use crate::screening::analyzer::{AnalyzeError, ResumeAnalyzer};
use crate::screening::events::{EventSink, ScreeningEvent};
use crate::screening::models::{
    AnalysisResult, JobDescriptionInput, ResumeAnalysis, ResumeItem, ResumeSource,
};

/// Processes the queue in order against one job description.
///
/// Per item: publish progress, analyze, convert the outcome to an
/// `AnalysisResult` (placeholder on failure), append, and publish the full
/// accumulated list. A failure on item i never prevents items i+1..N; the
/// returned list always has exactly one entry per queue item, in queue order.
///
/// The precondition "a job description must be present" is carried by the
/// `JobDescriptionInput` type: callers that cannot produce one never reach
/// this function.
pub async fn run_screening(
    analyzer: &dyn ResumeAnalyzer,
    job_description: &JobDescriptionInput,
    queue: Vec<ResumeItem>,
    sink: &dyn EventSink,
) -> Vec<AnalysisResult> {
    let total = queue.len();
    info!("Screening run started: {total} resumes queued");
    sink.publish(ScreeningEvent::RunStarted { total });

    let mut results: Vec<AnalysisResult> = Vec::with_capacity(total);

    for (i, item) in queue.into_iter().enumerate() {
        sink.publish(ScreeningEvent::Progress {
            index: i + 1,
            total,
            display_name: item.display_name.clone(),
        });

        let result = match analyze_item(analyzer, job_description, &item).await {
            Ok(analysis) => AnalysisResult::from_analysis(item.display_name, analysis),
            Err(e) => {
                error!("Failed to process {}: {e}", item.display_name);
                AnalysisResult::placeholder(item.display_name, &e.to_string())
            }
        };

        results.push(result);
        sink.publish(ScreeningEvent::ResultsUpdated {
            results: results.clone(),
        });
    }

    info!("Screening run completed: {total} resumes processed");
    sink.publish(ScreeningEvent::Completed { total });
    results
}

/// Analyzes one item. A pasted item with blank trimmed content fails locally
/// without an analyzer call.
async fn analyze_item(
    analyzer: &dyn ResumeAnalyzer,
    job_description: &JobDescriptionInput,
    item: &ResumeItem,
) -> Result<ResumeAnalysis, AnalyzeError> {
    if let ResumeSource::Text(text) = &item.source {
        if text.trim().is_empty() {
            return Err(AnalyzeError::EmptyPastedContent);
        }
    }

    analyzer.analyze(job_description, &item.source).await
}

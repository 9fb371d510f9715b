//! Screening run events, published incrementally so a presenter can render
//! partial progress while the batch is still running.

use serde::Serialize;
use tokio::sync::mpsc;

use crate::screening::models::AnalysisResult;

/// Events emitted over the lifetime of one screening run.
///
/// `ResultsUpdated` carries the full accumulated list after every item, not a
/// delta, so a late-attaching or re-rendering presenter never needs to stitch
/// state together.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScreeningEvent {
    RunStarted {
        total: usize,
    },
    /// Published before each item's analyzer call. `index` is 1-based.
    Progress {
        index: usize,
        total: usize,
        display_name: String,
    },
    ResultsUpdated {
        results: Vec<AnalysisResult>,
    },
    Completed {
        total: usize,
    },
}

impl ScreeningEvent {
    /// Event name used for the SSE `event:` field.
    pub fn event_type(&self) -> &'static str {
        match self {
            ScreeningEvent::RunStarted { .. } => "run_started",
            ScreeningEvent::Progress { .. } => "progress",
            ScreeningEvent::ResultsUpdated { .. } => "results_updated",
            ScreeningEvent::Completed { .. } => "completed",
        }
    }
}

/// Where the orchestrator publishes its events.
///
/// Publishing must never fail the run: a presenter that disconnects mid-run
/// stops observing, but the batch proceeds to completion (no cancellation).
pub trait EventSink: Send + Sync {
    fn publish(&self, event: ScreeningEvent);
}

impl EventSink for mpsc::UnboundedSender<ScreeningEvent> {
    fn publish(&self, event: ScreeningEvent) {
        // A closed receiver means the consumer went away; the run continues.
        let _ = self.send(event);
    }
}

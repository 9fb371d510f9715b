//! Axum route handlers for the Screening API.
//!
//! POST /api/v1/screenings accepts the multipart form, validates the run
//! preconditions, then streams screening events back over SSE while the
//! orchestrator works through the queue in the background.

use std::convert::Infallible;
use std::time::Duration;

use axum::{
    extract::{multipart::Field, Multipart, State},
    response::sse::{Event, KeepAlive, Sse},
};
use futures::stream::Stream;
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::screening::batch::ResumeBatch;
use crate::screening::models::{FilePayload, JobDescriptionInput};
use crate::screening::orchestrator::run_screening;
use crate::state::AppState;

/// POST /api/v1/screenings
///
/// Multipart fields: `job_description_text`, `job_description_file`,
/// repeated `resume_file`, repeated `pasted_resume`. Unknown fields are
/// ignored. Responds with an SSE stream of run events; precondition failures
/// return a 400 JSON error before any event is sent.
pub async fn handle_create_screening(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Sse<impl Stream<Item = Result<Event, Infallible>>>, AppError> {
    let mut jd_text: Option<String> = None;
    let mut jd_file: Option<FilePayload> = None;
    let mut batch = ResumeBatch::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::UnprocessableEntity(format!("Invalid multipart payload: {e}")))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        match name.as_str() {
            "job_description_text" => jd_text = Some(read_text_field(field).await?),
            "job_description_file" => jd_file = Some(read_file_field(field).await?),
            "resume_file" => batch.add_file(read_file_field(field).await?),
            "pasted_resume" => batch.add_pasted(read_text_field(field).await?),
            _ => {}
        }
    }

    let job_description = JobDescriptionInput::from_parts(jd_text, jd_file).ok_or_else(|| {
        AppError::Validation(
            "Job description is missing. Please provide one to begin analysis.".to_string(),
        )
    })?;

    if batch.is_empty() {
        return Err(AppError::Validation(
            "At least one resume is required to begin analysis.".to_string(),
        ));
    }

    let queue = batch.build();
    info!("Screening accepted: {} resumes", queue.len());

    // The orchestrator runs to completion regardless of whether the SSE
    // consumer stays connected; there is no cancellation for a started run.
    let (tx, mut rx) = mpsc::unbounded_channel();
    let analyzer = state.analyzer.clone();
    tokio::spawn(async move {
        run_screening(analyzer.as_ref(), &job_description, queue, &tx).await;
    });

    let stream = async_stream::stream! {
        while let Some(event) = rx.recv().await {
            let event_type = event.event_type();
            match serde_json::to_string(&event) {
                Ok(json) => yield Ok(Event::default().event(event_type).data(json)),
                Err(e) => warn!("Failed to serialize screening event {event_type}: {e}"),
            }
        }
        // Channel closes once the orchestrator has published `completed`.
    };

    Ok(Sse::new(stream).keep_alive(
        KeepAlive::new()
            .interval(Duration::from_secs(15))
            .text("heartbeat"),
    ))
}

async fn read_text_field(field: Field<'_>) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| AppError::UnprocessableEntity(format!("Unreadable text field: {e}")))
}

/// Reads an uploaded file field. Falls back to guessing the media type from
/// the file name when the client did not declare a content type.
async fn read_file_field(field: Field<'_>) -> Result<FilePayload, AppError> {
    let name = field
        .file_name()
        .map(str::to_string)
        .unwrap_or_else(|| "upload".to_string());
    let declared_type = field.content_type().map(str::to_string);

    let bytes = field
        .bytes()
        .await
        .map_err(|e| AppError::UnprocessableEntity(format!("Unreadable file field: {e}")))?;

    let media_type = declared_type.unwrap_or_else(|| {
        mime_guess::from_path(&name)
            .first_or_octet_stream()
            .to_string()
    });

    Ok(FilePayload {
        name,
        media_type,
        bytes,
    })
}

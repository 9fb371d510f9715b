//! Work-queue builder — accumulates resume inputs and snapshots them into an
//! ordered queue when a run starts.

use tracing::debug;

use crate::screening::models::{FilePayload, ResumeItem, ResumeSource};

/// Accumulator for the resumes of one run.
///
/// Ordering contract: the built queue holds all file-based items first (in
/// insertion order), then all pasted items (in insertion order). Pasted items
/// are labeled with their 1-based position among pasted items only.
#[derive(Debug, Default)]
pub struct ResumeBatch {
    files: Vec<FilePayload>,
    pasted: Vec<String>,
}

impl ResumeBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an uploaded resume file. Files are de-duplicated by name: adding
    /// a file whose name is already present is a silent no-op, not an error.
    pub fn add_file(&mut self, file: FilePayload) {
        if self.files.iter().any(|f| f.name == file.name) {
            debug!("Skipping duplicate resume file: {}", file.name);
            return;
        }
        self.files.push(file);
    }

    /// Adds a pasted resume text block. Whitespace-only blocks are silently
    /// rejected before they enter the set.
    pub fn add_pasted(&mut self, text: String) {
        if text.trim().is_empty() {
            debug!("Skipping blank pasted resume");
            return;
        }
        self.pasted.push(text);
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.pasted.is_empty()
    }

    pub fn len(&self) -> usize {
        self.files.len() + self.pasted.len()
    }

    /// Snapshots the accumulated inputs into the run's ordered work queue.
    pub fn build(self) -> Vec<ResumeItem> {
        let mut queue = Vec::with_capacity(self.len());

        for file in self.files {
            queue.push(ResumeItem {
                display_name: file.name,
                source: ResumeSource::File {
                    media_type: file.media_type,
                    bytes: file.bytes,
                },
            });
        }

        for (index, text) in self.pasted.into_iter().enumerate() {
            queue.push(ResumeItem {
                display_name: format!("Pasted Resume #{}", index + 1),
                source: ResumeSource::Text(text),
            });
        }

        queue
    }
}

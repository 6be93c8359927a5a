//! Pipeline error types.

/// Errors that can occur while assembling a pipeline.
///
/// Running a pipeline never fails; only building one can.
#[derive(thiserror::Error, Debug)]
pub enum PipelineError {
    #[error("stage '{0}' not found in pipeline")]
    UnknownStage(String),
}

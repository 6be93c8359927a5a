//! Rewrite pipeline for wiki markup.
//!
//! The pipeline transforms markup text through a fixed series of stages:
//! 1. Heading (`= Title =` lines)
//! 2. Bold (`'''text'''`)
//! 3. Italic (`''text''`)
//! 4. Internal links (`[[PageName]]`)
//! 5. External links (`[https://example.com]`)
//!
//! Each stage sees only the output of the previous one. Bold must run before
//! italic: a `'''` delimiter contains `''`, so italic scanning first would
//! break every bold span apart.
//!
//! Custom stages can be inserted before or after any named stage.

mod error;
mod stages;

use std::borrow::Cow;

use tracing::trace;

pub use error::PipelineError;
pub use stages::{
    BoldStage, EscapeStage, ExternalLinkStage, HeadingStage, InternalLinkStage, ItalicStage,
};

use crate::config::MarkupConfig;

/// A stage in the rewrite pipeline.
///
/// Stages are pure text-to-text transforms. They never fail: markup that a
/// stage doesn't recognize is passed through as literal text.
pub trait Stage: Send + Sync {
    /// Unique name for this stage (used for insertion points).
    fn name(&self) -> &'static str;

    /// Rewrite the whole text.
    ///
    /// Returns `Cow::Borrowed` when nothing matched, so untouched text is
    /// never copied.
    fn apply<'t>(&self, text: &'t str) -> Cow<'t, str>;
}

/// The markup rewrite pipeline.
///
/// Orchestrates text transformation through an ordered list of stages.
/// The default pipeline is: heading → bold → italic → internal-link →
/// external-link.
///
/// # Extension Points
///
/// Insert custom stages using `insert_before` or `insert_after`:
///
/// ```ignore
/// pipeline.insert_before("bold", StrikeStage)?;
/// ```
pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl Pipeline {
    /// Create an empty pipeline with no stages.
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Create the standard rewrite pipeline for the given markup settings.
    ///
    /// Stages: heading → bold → italic → internal-link → external-link,
    /// preceded by escape when `escape_html` is set.
    pub fn rewrite(config: &MarkupConfig) -> Self {
        let mut pipeline = Self::new();
        if config.escape_html {
            pipeline.add_stage(EscapeStage);
        }
        pipeline.add_stage(HeadingStage);
        pipeline.add_stage(BoldStage);
        pipeline.add_stage(ItalicStage);
        pipeline.add_stage(InternalLinkStage::new(&config.route_prefix));
        pipeline.add_stage(ExternalLinkStage);
        pipeline
    }

    /// Add a stage to the end of the pipeline.
    pub fn add_stage<S: Stage + 'static>(&mut self, stage: S) -> &mut Self {
        self.stages.push(Box::new(stage));
        self
    }

    /// Insert a stage before the named stage.
    #[allow(dead_code)]
    pub fn insert_before<S: Stage + 'static>(
        &mut self,
        name: &str,
        stage: S,
    ) -> Result<&mut Self, PipelineError> {
        let pos = self.position(name)?;
        self.stages.insert(pos, Box::new(stage));
        Ok(self)
    }

    /// Insert a stage after the named stage.
    #[allow(dead_code)]
    pub fn insert_after<S: Stage + 'static>(
        &mut self,
        name: &str,
        stage: S,
    ) -> Result<&mut Self, PipelineError> {
        let pos = self.position(name)?;
        self.stages.insert(pos + 1, Box::new(stage));
        Ok(self)
    }

    #[allow(dead_code)]
    fn position(&self, name: &str) -> Result<usize, PipelineError> {
        self.stages
            .iter()
            .position(|s| s.name() == name)
            .ok_or_else(|| PipelineError::UnknownStage(name.to_string()))
    }

    /// Run every stage in order and return the final HTML fragment.
    pub fn run(&self, input: &str) -> String {
        let mut text = input.to_string();

        for stage in &self.stages {
            let rewritten = match stage.apply(&text) {
                Cow::Borrowed(_) => None,
                Cow::Owned(output) => Some(output),
            };
            if let Some(output) = rewritten {
                trace!(stage = stage.name(), "stage rewrote text");
                text = output;
            }
        }

        text
    }

    /// Get the names of all stages in order.
    #[allow(dead_code)]
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::rewrite(&MarkupConfig::default())
    }
}

//! Application state container shared across Axum route handlers.
//!
//! Holds the process-wide, read-only grading collaborators: the ignore-word set and the two
//! external model boundaries. Everything is behind an `Arc`, so cloning the state per request is cheap.

use marker::DEFAULT_SCORE_SCALE;
use marker::comparators::embedding_comparator::EmbeddingComparator;
use marker::error::MarkerError;
use marker::reference::gemini_reference::GeminiReference;
use marker::traits::reference_provider::ReferenceProvider;
use marker::traits::similarity_scorer::SimilarityScorer;
use marker::utilities::ignore_words::IgnoreSet;
use std::sync::Arc;
use util::config;

/// Central application state shared across the server.
#[derive(Clone)]
pub struct AppState {
    ignore: Arc<IgnoreSet>,
    generator: Arc<dyn ReferenceProvider>,
    scorer: Arc<dyn SimilarityScorer>,
    score_scale: f64,
}

impl AppState {
    /// Creates a new `AppState` from explicit collaborators.
    ///
    /// Tests use this to inject deterministic stand-ins for the model boundaries.
    pub fn new(
        ignore: IgnoreSet,
        generator: Arc<dyn ReferenceProvider>,
        scorer: Arc<dyn SimilarityScorer>,
    ) -> Self {
        Self {
            ignore: Arc::new(ignore),
            generator,
            scorer,
            score_scale: DEFAULT_SCORE_SCALE,
        }
    }

    /// Overrides the factor applied to similarity for the displayed score.
    pub fn with_score_scale(mut self, scale: f64) -> Self {
        self.score_scale = scale;
        self
    }

    /// Builds the production state from the global configuration.
    ///
    /// Loads the ignore-word file once and wires up the Gemini-backed generator and comparator.
    pub fn from_config() -> Result<Self, MarkerError> {
        let ignore = IgnoreSet::load(config::ignore_words_path())?;
        let generator = GeminiReference::from_config()?;
        let scorer = EmbeddingComparator::from_config()?;

        Ok(Self::new(ignore, Arc::new(generator), Arc::new(scorer))
            .with_score_scale(config::score_scale()))
    }

    pub fn ignore(&self) -> &IgnoreSet {
        &self.ignore
    }

    pub fn generator(&self) -> &dyn ReferenceProvider {
        self.generator.as_ref()
    }

    pub fn scorer(&self) -> &dyn SimilarityScorer {
        self.scorer.as_ref()
    }

    pub fn score_scale(&self) -> f64 {
        self.score_scale
    }
}

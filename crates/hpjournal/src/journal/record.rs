use std::sync::Arc;

/// One scored artwork entry from the tracker export.
///
/// Records are immutable once built and shared by reference: the same record
/// can appear in several collections when one submission features several
/// creatures, so owners hold `Arc<ArtworkRecord>` rather than copies.
#[derive(Debug, Clone, PartialEq)]
pub struct ArtworkRecord {
    locator: String,
    rationale: String,
    score: f64,
    subcategory: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RecordError {
    #[error("artwork score must be a finite, non-negative number (got {value})")]
    InvalidScore { value: f64 },
}

impl ArtworkRecord {
    pub fn new(
        locator: impl Into<String>,
        rationale: impl Into<String>,
        score: f64,
        subcategory: impl Into<String>,
    ) -> Result<Self, RecordError> {
        if !score.is_finite() || score < 0.0 {
            return Err(RecordError::InvalidScore { value: score });
        }

        Ok(Self {
            locator: locator.into(),
            rationale: rationale.into(),
            score,
            subcategory: subcategory.into(),
        })
    }

    /// Convenience used by ingestion: build and wrap for sharing in one step.
    pub fn shared(
        locator: impl Into<String>,
        rationale: impl Into<String>,
        score: f64,
        subcategory: impl Into<String>,
    ) -> Result<Arc<Self>, RecordError> {
        Self::new(locator, rationale, score, subcategory).map(Arc::new)
    }

    pub fn locator(&self) -> &str {
        &self.locator
    }

    pub fn rationale(&self) -> &str {
        &self.rationale
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn subcategory(&self) -> &str {
        &self.subcategory
    }

    /// Key used wherever subcategories are ordered or compared for grouping.
    pub(crate) fn subcategory_sort_key(&self) -> String {
        self.subcategory.to_lowercase()
    }
}

//! Generated listing and its quality report

/// A listing parsed from model output
///
/// Fields are empty strings when the model did not produce them; absence is
/// not an error at this layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedListing {
    /// Listing title
    pub title: String,
    /// Listing body, may span multiple lines
    pub description: String,
    /// Suggested price range, e.g. "$10-$20"
    pub price_range: String,
}

impl GeneratedListing {
    /// Create a listing from its three fields
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        price_range: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            price_range: price_range.into(),
        }
    }

    /// True when title or description is missing
    pub fn is_incomplete(&self) -> bool {
        self.title.is_empty() || self.description.is_empty()
    }
}

/// Quality score for a generated listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualityReport {
    /// Score in [0, 100]
    pub score: u8,
    /// Human-readable suggestions, ordered title, description, price range
    pub suggestions: Vec<String>,
}

impl QualityReport {
    /// Whether the score meets the given minimum
    pub fn passes(&self, min_score: u8) -> bool {
        self.score >= min_score
    }
}

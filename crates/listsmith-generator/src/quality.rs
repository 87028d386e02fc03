//! Heuristic quality scoring for generated listings

use listsmith_domain::{GeneratedListing, QualityReport};
use std::fmt;

/// Starting score before deductions
pub const MAX_SCORE: u8 = 100;

/// Titles shorter than this (in characters) are penalized
pub const TITLE_MIN_CHARS: usize = 20;

/// Titles longer than this (in characters) are penalized
pub const TITLE_MAX_CHARS: usize = 80;

/// Descriptions shorter than this (in characters) are penalized
pub const DESCRIPTION_MIN_CHARS: usize = 100;

/// Symbol a price range is expected to contain
pub const CURRENCY_SYMBOL: char = '$';

/// A single problem found in a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QualityIssue {
    /// Title is empty
    MissingTitle,
    /// Title is under [`TITLE_MIN_CHARS`]
    TitleTooShort,
    /// Title is over [`TITLE_MAX_CHARS`]
    TitleTooLong,
    /// Description is empty
    MissingDescription,
    /// Description is under [`DESCRIPTION_MIN_CHARS`]
    DescriptionTooBrief,
    /// Price range is empty
    MissingPriceRange,
    /// Price range has no [`CURRENCY_SYMBOL`]
    MissingCurrencySymbol,
}

impl QualityIssue {
    /// Points deducted for this issue
    pub fn deduction(&self) -> u8 {
        match self {
            QualityIssue::MissingTitle => 30,
            QualityIssue::TitleTooShort => 15,
            QualityIssue::TitleTooLong => 10,
            QualityIssue::MissingDescription => 40,
            QualityIssue::DescriptionTooBrief => 20,
            QualityIssue::MissingPriceRange => 30,
            QualityIssue::MissingCurrencySymbol => 10,
        }
    }

    /// Suggestion shown to the user
    pub fn suggestion(&self) -> &'static str {
        match self {
            QualityIssue::MissingTitle => "Missing title",
            QualityIssue::TitleTooShort => "Title is too short",
            QualityIssue::TitleTooLong => "Title exceeds 80 character limit",
            QualityIssue::MissingDescription => "Missing description",
            QualityIssue::DescriptionTooBrief => "Description is too brief",
            QualityIssue::MissingPriceRange => "Missing price range",
            QualityIssue::MissingCurrencySymbol => "Price range should include currency symbol",
        }
    }
}

impl fmt::Display for QualityIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suggestion())
    }
}

/// Find the issues in a listing, at most one per field
///
/// Checks run in a fixed order (title, description, price range) so the
/// result is reproducible.
pub fn find_issues(listing: &GeneratedListing) -> Vec<QualityIssue> {
    let mut issues = Vec::new();

    // 1. Title
    let title_len = listing.title.chars().count();
    if title_len == 0 {
        issues.push(QualityIssue::MissingTitle);
    } else if title_len < TITLE_MIN_CHARS {
        issues.push(QualityIssue::TitleTooShort);
    } else if title_len > TITLE_MAX_CHARS {
        issues.push(QualityIssue::TitleTooLong);
    }

    // 2. Description
    let description_len = listing.description.chars().count();
    if description_len == 0 {
        issues.push(QualityIssue::MissingDescription);
    } else if description_len < DESCRIPTION_MIN_CHARS {
        issues.push(QualityIssue::DescriptionTooBrief);
    }

    // 3. Price range
    if listing.price_range.is_empty() {
        issues.push(QualityIssue::MissingPriceRange);
    } else if !listing.price_range.contains(CURRENCY_SYMBOL) {
        issues.push(QualityIssue::MissingCurrencySymbol);
    }

    issues
}

/// Score a listing from 0 to 100 and collect improvement suggestions
///
/// # Examples
///
/// ```
/// use listsmith_domain::GeneratedListing;
/// use listsmith_generator::evaluate_listing;
///
/// let listing = GeneratedListing::new("Example Title", "Example Description", "$10-$20");
/// let report = evaluate_listing(&listing);
/// assert_eq!(report.score, 65);
/// assert_eq!(report.suggestions, vec!["Title is too short", "Description is too brief"]);
/// ```
pub fn evaluate_listing(listing: &GeneratedListing) -> QualityReport {
    let issues = find_issues(listing);

    let deducted: u32 = issues.iter().map(|i| u32::from(i.deduction())).sum();
    let score = u32::from(MAX_SCORE).saturating_sub(deducted) as u8;

    QualityReport {
        score,
        suggestions: issues.iter().map(|i| i.suggestion().to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn good_title() -> String {
        "Acme Rocket Skates Size 10 Red".to_string()
    }

    fn good_description() -> String {
        "x".repeat(DESCRIPTION_MIN_CHARS)
    }

    #[test]
    fn test_short_title_and_brief_description() {
        let listing = GeneratedListing::new("Example Title", "Example Description", "$10-$20");
        let report = evaluate_listing(&listing);
        assert_eq!(report.score, 65);
        assert_eq!(
            report.suggestions,
            vec!["Title is too short", "Description is too brief"]
        );
    }

    #[test]
    fn test_all_empty_scores_zero() {
        let report = evaluate_listing(&GeneratedListing::default());
        assert_eq!(report.score, 0);
        assert_eq!(
            report.suggestions,
            vec!["Missing title", "Missing description", "Missing price range"]
        );
    }

    #[test]
    fn test_perfect_listing() {
        let listing = GeneratedListing::new(good_title(), good_description(), "$10-$20");
        let report = evaluate_listing(&listing);
        assert_eq!(report.score, 100);
        assert!(report.suggestions.is_empty());
    }

    #[test]
    fn test_title_too_long() {
        let listing = GeneratedListing::new("t".repeat(81), good_description(), "$1");
        let report = evaluate_listing(&listing);
        assert_eq!(report.score, 90);
        assert_eq!(report.suggestions, vec!["Title exceeds 80 character limit"]);
    }

    #[test]
    fn test_title_length_boundaries() {
        let at_min = GeneratedListing::new("t".repeat(20), good_description(), "$1");
        assert_eq!(evaluate_listing(&at_min).score, 100);

        let below_min = GeneratedListing::new("t".repeat(19), good_description(), "$1");
        assert_eq!(evaluate_listing(&below_min).score, 85);

        let at_max = GeneratedListing::new("t".repeat(80), good_description(), "$1");
        assert_eq!(evaluate_listing(&at_max).score, 100);
    }

    #[test]
    fn test_description_boundary() {
        let listing = GeneratedListing::new(good_title(), "d".repeat(99), "$1");
        assert_eq!(evaluate_listing(&listing).score, 80);
    }

    #[test]
    fn test_price_without_currency_symbol() {
        let listing = GeneratedListing::new(good_title(), good_description(), "10-20 USD");
        let report = evaluate_listing(&listing);
        assert_eq!(report.score, 90);
        assert_eq!(
            report.suggestions,
            vec!["Price range should include currency symbol"]
        );
    }

    #[test]
    fn test_lengths_count_characters_not_bytes() {
        // 20 characters, 40 bytes
        let title = "é".repeat(20);
        let listing = GeneratedListing::new(title, good_description(), "$1");
        assert_eq!(evaluate_listing(&listing).score, 100);
    }

    #[test]
    fn test_floor_at_zero() {
        let listing = GeneratedListing::new("", "", "");
        let deducted: u32 = find_issues(&listing)
            .iter()
            .map(|i| u32::from(i.deduction()))
            .sum();
        assert_eq!(deducted, 100);
        assert_eq!(evaluate_listing(&listing).score, 0);
    }

    #[test]
    fn test_issue_order_is_fixed() {
        let listing = GeneratedListing::new("short", "", "no symbol");
        assert_eq!(
            find_issues(&listing),
            vec![
                QualityIssue::TitleTooShort,
                QualityIssue::MissingDescription,
                QualityIssue::MissingCurrencySymbol,
            ]
        );
        assert_eq!(evaluate_listing(&listing).score, 35);
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let listing = GeneratedListing::new("Example Title", "", "20");
        assert_eq!(evaluate_listing(&listing), evaluate_listing(&listing));
    }

    #[test]
    fn test_issue_display_matches_suggestion() {
        assert_eq!(QualityIssue::MissingTitle.to_string(), "Missing title");
    }
}

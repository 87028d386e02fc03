//! Item details and their validated form

use std::fmt;

/// Raw item details as supplied by the caller
///
/// Every field is optional here; [`ListingRequest::from_details`] decides
/// what is acceptable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemDetails {
    /// Manufacturer or brand name
    pub brand: Option<String>,
    /// Model name or number
    pub model: Option<String>,
    /// Variant, edition or colorway
    pub variant: Option<String>,
    /// Item condition (e.g. "New", "Used")
    pub condition: Option<String>,
    /// Free-form seller notes
    pub notes: Option<String>,
}

impl ItemDetails {
    /// Short human label for logs and failure reports
    pub fn label(&self) -> String {
        match self.model.as_deref().filter(|m| !m.is_empty()) {
            Some(model) => model.to_string(),
            None => "item".to_string(),
        }
    }
}

/// Error returned when required item fields are missing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    missing: Vec<&'static str>,
}

impl ValidationError {
    /// Names of every missing required field, in declaration order
    pub fn missing_fields(&self) -> &[&'static str] {
        &self.missing
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Missing required fields: {}", self.missing.join(", "))
    }
}

impl std::error::Error for ValidationError {}

/// A validated, normalized listing request
///
/// Only constructible through [`ListingRequest::from_details`] (or
/// [`ListingRequest::new`], which runs the same checks), so brand, model and
/// condition are always non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingRequest {
    brand: String,
    model: String,
    variant: String,
    condition: String,
    notes: String,
}

/// Required fields, checked in this order
pub const REQUIRED_FIELDS: [&str; 3] = ["brand", "model", "condition"];

impl ListingRequest {
    /// Validate raw details and normalize optional fields to empty strings
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming all missing or empty required
    /// fields, not just the first.
    ///
    /// # Examples
    ///
    /// ```
    /// use listsmith_domain::{ItemDetails, ListingRequest};
    ///
    /// let details = ItemDetails {
    ///     brand: Some("X".to_string()),
    ///     condition: Some("New".to_string()),
    ///     ..Default::default()
    /// };
    /// let err = ListingRequest::from_details(details).unwrap_err();
    /// assert_eq!(err.missing_fields(), &["model"]);
    /// ```
    pub fn from_details(details: ItemDetails) -> Result<Self, ValidationError> {
        let present = |value: &Option<String>| value.as_deref().is_some_and(|v| !v.is_empty());

        let checks = [
            present(&details.brand),
            present(&details.model),
            present(&details.condition),
        ];
        let missing: Vec<&'static str> = REQUIRED_FIELDS
            .iter()
            .zip(checks)
            .filter(|(_, ok)| !ok)
            .map(|(name, _)| *name)
            .collect();

        if !missing.is_empty() {
            return Err(ValidationError { missing });
        }

        Ok(Self {
            brand: details.brand.unwrap_or_default(),
            model: details.model.unwrap_or_default(),
            variant: details.variant.unwrap_or_default(),
            condition: details.condition.unwrap_or_default(),
            notes: details.notes.unwrap_or_default(),
        })
    }

    /// Build a request from plain strings, applying the same validation
    pub fn new(
        brand: impl Into<String>,
        model: impl Into<String>,
        condition: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::from_details(ItemDetails {
            brand: Some(brand.into()),
            model: Some(model.into()),
            condition: Some(condition.into()),
            ..Default::default()
        })
    }

    /// Set the variant
    pub fn with_variant(mut self, variant: impl Into<String>) -> Self {
        self.variant = variant.into();
        self
    }

    /// Set the seller notes
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Brand name
    pub fn brand(&self) -> &str {
        &self.brand
    }

    /// Model name
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Variant (may be empty)
    pub fn variant(&self) -> &str {
        &self.variant
    }

    /// Condition
    pub fn condition(&self) -> &str {
        &self.condition
    }

    /// Seller notes (may be empty)
    pub fn notes(&self) -> &str {
        &self.notes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details(brand: &str, model: &str, condition: &str) -> ItemDetails {
        let opt = |s: &str| if s.is_empty() { None } else { Some(s.to_string()) };
        ItemDetails {
            brand: opt(brand),
            model: opt(model),
            condition: opt(condition),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_details_normalize_optionals() {
        let request = ListingRequest::from_details(details("Acme", "Rocket", "New")).unwrap();
        assert_eq!(request.brand(), "Acme");
        assert_eq!(request.model(), "Rocket");
        assert_eq!(request.condition(), "New");
        assert_eq!(request.variant(), "");
        assert_eq!(request.notes(), "");
    }

    #[test]
    fn test_optionals_are_kept() {
        let mut raw = details("Acme", "Rocket", "Used");
        raw.variant = Some("Limited Edition".to_string());
        raw.notes = Some("Light wear".to_string());

        let request = ListingRequest::from_details(raw).unwrap();
        assert_eq!(request.variant(), "Limited Edition");
        assert_eq!(request.notes(), "Light wear");
    }

    #[test]
    fn test_missing_model_is_named() {
        let err = ListingRequest::from_details(details("X", "", "New")).unwrap_err();
        assert_eq!(err.missing_fields(), &["model"]);
        assert_eq!(err.to_string(), "Missing required fields: model");
    }

    #[test]
    fn test_all_missing_fields_are_reported() {
        let err = ListingRequest::from_details(ItemDetails::default()).unwrap_err();
        assert_eq!(err.missing_fields(), &["brand", "model", "condition"]);
        assert_eq!(
            err.to_string(),
            "Missing required fields: brand, model, condition"
        );
    }

    #[test]
    fn test_empty_string_counts_as_missing() {
        let raw = ItemDetails {
            brand: Some(String::new()),
            model: Some("M".to_string()),
            condition: Some(String::new()),
            ..Default::default()
        };
        let err = ListingRequest::from_details(raw).unwrap_err();
        assert_eq!(err.missing_fields(), &["brand", "condition"]);
    }

    #[test]
    fn test_builder_setters() {
        let request = ListingRequest::new("Acme", "Rocket", "New")
            .unwrap()
            .with_variant("Blue")
            .with_notes("Boxed");
        assert_eq!(request.variant(), "Blue");
        assert_eq!(request.notes(), "Boxed");
    }

    #[test]
    fn test_label_falls_back_to_item() {
        assert_eq!(details("A", "Model A", "New").label(), "Model A");
        assert_eq!(ItemDetails::default().label(), "item");
    }
}

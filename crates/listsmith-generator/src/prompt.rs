//! LLM prompt engineering for listing generation

use crate::error::GeneratorError;
use listsmith_domain::ListingRequest;

/// System instruction sent with every generation request
pub const SYSTEM_PROMPT: &str =
    "You are an expert eBay listing agent. Format your response exactly with <START> and <END> tags.";

/// Placeholders a template may use
pub const PLACEHOLDERS: [&str; 6] = [
    "brand",
    "model",
    "variant",
    "condition",
    "notes",
    "sold_listings",
];

/// Builds the user prompt for one item
///
/// Templates use `{placeholder}` substitution; `{{` and `}}` produce literal
/// braces. Any placeholder outside [`PLACEHOLDERS`] is an error.
pub struct PromptBuilder<'a> {
    request: &'a ListingRequest,
    comparables: &'a [String],
    template: &'a str,
}

impl<'a> PromptBuilder<'a> {
    /// Create a prompt builder using the default template
    pub fn new(request: &'a ListingRequest) -> Self {
        Self {
            request,
            comparables: &[],
            template: DEFAULT_TEMPLATE,
        }
    }

    /// Add comparable sold-listing snippets for pricing context
    pub fn with_comparables(mut self, comparables: &'a [String]) -> Self {
        self.comparables = comparables;
        self
    }

    /// Use a custom template instead of the default
    pub fn with_template(mut self, template: &'a str) -> Self {
        self.template = template;
        self
    }

    /// Build the complete prompt
    pub fn build(&self) -> Result<String, GeneratorError> {
        let sold_listings = self.sold_listings_text();
        let values = [
            ("brand", self.request.brand()),
            ("model", self.request.model()),
            ("variant", self.request.variant()),
            ("condition", self.request.condition()),
            ("notes", self.request.notes()),
            ("sold_listings", sold_listings.as_str()),
        ];
        render(self.template, &values)
    }

    /// Comparable sales, one `- ` bullet per line
    fn sold_listings_text(&self) -> String {
        if self.comparables.is_empty() {
            return "- No comparable sales available".to_string();
        }
        self.comparables
            .iter()
            .map(|listing| format!("- {}", listing))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Check that a template only uses known placeholders and balanced braces
pub fn validate_template(template: &str) -> Result<(), GeneratorError> {
    let values: Vec<(&str, &str)> = PLACEHOLDERS.iter().map(|name| (*name, "")).collect();
    render(template, &values).map(|_| ())
}

fn render(template: &str, values: &[(&str, &str)]) -> Result<String, GeneratorError> {
    let mut out = String::with_capacity(template.len() + 256);
    let mut rest = template;

    while let Some(pos) = rest.find(['{', '}']) {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if let Some(after) = tail.strip_prefix("{{") {
            out.push('{');
            rest = after;
            continue;
        }
        if let Some(after) = tail.strip_prefix("}}") {
            out.push('}');
            rest = after;
            continue;
        }
        if tail.starts_with('}') {
            return Err(GeneratorError::Template(format!(
                "unmatched '}}' at byte {}",
                template.len() - tail.len()
            )));
        }

        let close = tail.find('}').ok_or_else(|| {
            GeneratorError::Template(format!(
                "unclosed '{{' at byte {}",
                template.len() - tail.len()
            ))
        })?;
        let name = &tail[1..close];
        let value = values
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| *value)
            .ok_or_else(|| GeneratorError::Template(format!("unknown placeholder '{{{}}}'", name)))?;

        out.push_str(value);
        rest = &tail[close + 1..];
    }

    out.push_str(rest);
    Ok(out)
}

/// Default listing prompt
pub const DEFAULT_TEMPLATE: &str = r#"Write an eBay listing for the following item.

Brand: {brand}
Model: {model}
Variant: {variant}
Condition: {condition}
Seller notes: {notes}

Recently sold comparable items:
{sold_listings}

Rules:
- Title: at most 80 characters; lead with brand and model, then the key features buyers search for
- Description: at least 100 characters; cover condition, features and what is included, without inventing details
- Price Range: a realistic range based on the comparable sales, in dollars (e.g. $10-$20)

Respond with exactly this structure and nothing else:
<START>
Title: <listing title>
Description: <listing description>
Price Range: <price range>
<END>"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> ListingRequest {
        ListingRequest::new("Example Brand", "Model A", "New")
            .unwrap()
            .with_notes("Sample notes")
    }

    #[test]
    fn test_prompt_includes_item_details() {
        let request = request();
        let prompt = PromptBuilder::new(&request).build().unwrap();
        assert!(prompt.contains("Brand: Example Brand"));
        assert!(prompt.contains("Model: Model A"));
        assert!(prompt.contains("Condition: New"));
        assert!(prompt.contains("Seller notes: Sample notes"));
        assert!(prompt.contains("Variant: \n"));
    }

    #[test]
    fn test_prompt_includes_comparables() {
        let request = request();
        let comparables = vec![
            "Similar item sold for $15 (New)".to_string(),
            "Used version sold for $8-10".to_string(),
        ];
        let prompt = PromptBuilder::new(&request)
            .with_comparables(&comparables)
            .build()
            .unwrap();
        assert!(prompt.contains("- Similar item sold for $15 (New)\n- Used version sold for $8-10"));
    }

    #[test]
    fn test_prompt_without_comparables() {
        let request = request();
        let prompt = PromptBuilder::new(&request).build().unwrap();
        assert!(prompt.contains("- No comparable sales available"));
    }

    #[test]
    fn test_default_template_asks_for_markers() {
        let request = request();
        let prompt = PromptBuilder::new(&request).build().unwrap();
        assert!(prompt.contains("<START>"));
        assert!(prompt.contains("<END>"));
        assert!(prompt.contains("Price Range:"));
    }

    #[test]
    fn test_custom_template() {
        let request = request().with_variant("Blue");
        let prompt = PromptBuilder::new(&request)
            .with_template("{brand}/{model}/{variant} {{literal}}")
            .build()
            .unwrap();
        assert_eq!(prompt, "Example Brand/Model A/Blue {literal}");
    }

    #[test]
    fn test_unknown_placeholder_is_error() {
        let request = request();
        let result = PromptBuilder::new(&request)
            .with_template("Price: {price}")
            .build();
        assert!(matches!(result, Err(GeneratorError::Template(_))));
    }

    #[test]
    fn test_unbalanced_braces_are_errors() {
        assert!(validate_template("open {brand").is_err());
        assert!(validate_template("close } here").is_err());
        assert!(validate_template("fine {brand} }}").is_ok());
    }

    #[test]
    fn test_default_template_is_valid() {
        assert!(validate_template(DEFAULT_TEMPLATE).is_ok());
    }
}

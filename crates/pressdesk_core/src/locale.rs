//! Localizable message catalog for footer output.
//!
//! # Responsibility
//! - Map fixed message identifiers to their built-in default templates.
//! - Apply host-supplied translation overrides at resolve time.
//!
//! # Invariants
//! - Resolution is total: an unknown or missing override falls back to the
//!   built-in default template.
//! - Numeric placeholders are substituted as plain decimal integers.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Message id for the author footer banner.
pub const MSG_FOOTER_DEADLINE: &str = "footer.deadline_banner";
/// Message id for the hours-remaining version-slot text.
pub const MSG_HOURS_REMAINING: &str = "footer.hours_remaining";

/// Default template for [`MSG_FOOTER_DEADLINE`]. HTML is permitted here.
pub const FOOTER_DEADLINE_DEFAULT: &str =
    r#"<span id="footer-thankyou">Deadline is Friday at 3pm!</span>"#;
/// Default template for [`MSG_HOURS_REMAINING`].
pub const HOURS_REMAINING_DEFAULT: &str = "You have {hours} hour(s) until deadline.";

/// Placeholder token substituted with the hour count.
pub const PLACEHOLDER_HOURS: &str = "{hours}";

/// Translation overrides keyed by fixed message identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageCatalog {
    #[serde(default)]
    overrides: BTreeMap<String, String>,
}

impl MessageCatalog {
    /// Creates a catalog with no overrides; every id resolves to its
    /// built-in default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces one translation override.
    pub fn insert_override(
        &mut self,
        id: impl Into<String>,
        template: impl Into<String>,
    ) -> Result<(), CatalogError> {
        let id = id.into();
        if !is_valid_message_id(id.trim()) {
            return Err(CatalogError::InvalidMessageId(id));
        }
        self.overrides.insert(id.trim().to_string(), template.into());
        Ok(())
    }

    /// Returns the number of overrides.
    pub fn len(&self) -> usize {
        self.overrides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }

    /// Resolves one message id to its override or the given default.
    pub fn resolve<'a>(&'a self, id: &str, default_template: &'a str) -> &'a str {
        match self.overrides.get(id) {
            Some(template) => template.as_str(),
            None => default_template,
        }
    }
}

/// Substitutes every occurrence of `placeholder` with the decimal value.
pub fn substitute_count(template: &str, placeholder: &str, value: u64) -> String {
    template.replace(placeholder, &value.to_string())
}

fn is_valid_message_id(value: &str) -> bool {
    let mut chars = value.chars();
    let first = match chars.next() {
        Some(c) => c,
        None => return false,
    };
    if !first.is_ascii_lowercase() && !first.is_ascii_digit() {
        return false;
    }

    let mut prev_separator = false;
    for c in chars {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            prev_separator = false;
            continue;
        }
        if c == '.' || c == '_' {
            if prev_separator {
                return false;
            }
            prev_separator = true;
            continue;
        }
        return false;
    }
    !prev_separator
}

/// Catalog mutation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    InvalidMessageId(String),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMessageId(value) => write!(f, "message id is invalid: {value}"),
        }
    }
}

impl Error for CatalogError {}

#[cfg(test)]
mod tests {
    use super::{
        substitute_count, CatalogError, MessageCatalog, FOOTER_DEADLINE_DEFAULT,
        HOURS_REMAINING_DEFAULT, MSG_FOOTER_DEADLINE, MSG_HOURS_REMAINING, PLACEHOLDER_HOURS,
    };

    #[test]
    fn resolves_defaults_without_overrides() {
        let catalog = MessageCatalog::new();
        assert!(catalog.is_empty());
        assert_eq!(
            catalog.resolve(MSG_FOOTER_DEADLINE, FOOTER_DEADLINE_DEFAULT),
            FOOTER_DEADLINE_DEFAULT
        );
        assert_eq!(
            catalog.resolve(MSG_HOURS_REMAINING, HOURS_REMAINING_DEFAULT),
            HOURS_REMAINING_DEFAULT
        );
    }

    #[test]
    fn override_wins_over_default() {
        let mut catalog = MessageCatalog::new();
        catalog
            .insert_override(MSG_HOURS_REMAINING, "Noch {hours} Stunde(n) bis Redaktionsschluss.")
            .expect("override should insert");
        assert_eq!(catalog.len(), 1);
        assert_eq!(
            catalog.resolve(MSG_HOURS_REMAINING, HOURS_REMAINING_DEFAULT),
            "Noch {hours} Stunde(n) bis Redaktionsschluss."
        );
        // Other ids are untouched.
        assert_eq!(
            catalog.resolve(MSG_FOOTER_DEADLINE, FOOTER_DEADLINE_DEFAULT),
            FOOTER_DEADLINE_DEFAULT
        );
    }

    #[test]
    fn rejects_invalid_message_ids() {
        let mut catalog = MessageCatalog::new();
        for id in ["", "   ", "Footer.Banner", "footer..banner", "footer.banner."] {
            let err = catalog
                .insert_override(id, "text")
                .expect_err("invalid id must be rejected");
            assert!(matches!(err, CatalogError::InvalidMessageId(_)));
        }
    }

    #[test]
    fn substitutes_plain_integer_placeholder() {
        assert_eq!(
            substitute_count(HOURS_REMAINING_DEFAULT, PLACEHOLDER_HOURS, 5),
            "You have 5 hour(s) until deadline."
        );
        assert_eq!(
            substitute_count(HOURS_REMAINING_DEFAULT, PLACEHOLDER_HOURS, 0),
            "You have 0 hour(s) until deadline."
        );
        assert_eq!(
            substitute_count("{hours}+{hours}", PLACEHOLDER_HOURS, 12),
            "12+12"
        );
    }

    #[test]
    fn catalog_round_trips_through_serde() {
        let mut catalog = MessageCatalog::new();
        catalog
            .insert_override(MSG_FOOTER_DEADLINE, "<span>Vendredi 15h!</span>")
            .expect("override should insert");
        let json = serde_json::to_string(&catalog).expect("catalog should serialize");
        let restored: MessageCatalog =
            serde_json::from_str(&json).expect("catalog should deserialize");
        assert_eq!(restored, catalog);
    }

    #[test]
    fn empty_payload_deserializes_to_empty_catalog() {
        let restored: MessageCatalog =
            serde_json::from_str("{}").expect("empty payload should deserialize");
        assert!(restored.is_empty());
    }
}

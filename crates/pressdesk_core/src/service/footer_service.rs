//! Footer text use-case service.
//!
//! # Responsibility
//! - Produce the author-facing footer message and version-slot text.
//! - Wire both entry points into the filter registry at startup.
//!
//! # Invariants
//! - Non-author calls return the default text unchanged, byte-for-byte.
//! - Entry points are pure over `(context, default_text)`: no I/O, no
//!   logging, no mutation on the render path.

use crate::deadline::{DeadlineCalculator, Rounding};
use crate::filter::registry::{
    FilterRegistry, FilterRegistryError, RenderContext, DEFAULT_FILTER_PRIORITY,
    POINT_FOOTER_MESSAGE, POINT_FOOTER_VERSION,
};
use crate::locale::{
    substitute_count, MessageCatalog, FOOTER_DEADLINE_DEFAULT, HOURS_REMAINING_DEFAULT,
    MSG_FOOTER_DEADLINE, MSG_HOURS_REMAINING, PLACEHOLDER_HOURS,
};
use log::info;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Filter id for the footer message entry point.
pub const FILTER_ID_FOOTER_MESSAGE: &str = "pressdesk.footer.message";
/// Filter id for the version-slot entry point.
pub const FILTER_ID_FOOTER_VERSION: &str = "pressdesk.footer.version";

/// Host-facing configuration for the footer service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterConfig {
    /// Rounding strategy for the hour countdown.
    #[serde(default)]
    pub rounding: Rounding,
    /// Translation overrides keyed by message id.
    #[serde(default)]
    pub catalog: MessageCatalog,
}

/// Produces replacement footer strings for author-role principals.
#[derive(Debug, Clone, Default)]
pub struct FooterService {
    calculator: DeadlineCalculator,
    catalog: MessageCatalog,
}

impl FooterService {
    /// Creates a service with default rounding and no translation overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a service from host configuration.
    pub fn from_config(config: FooterConfig) -> Self {
        Self {
            calculator: DeadlineCalculator::with_rounding(config.rounding),
            catalog: config.catalog,
        }
    }

    /// Replaces the dashboard footer message for authors.
    ///
    /// # Contract
    /// - Non-author context returns `default_text` unchanged.
    /// - Author context returns the resolved deadline banner.
    pub fn footer_message(&self, context: &RenderContext, default_text: &str) -> String {
        if !context.is_author() {
            return default_text.to_string();
        }

        self.catalog
            .resolve(MSG_FOOTER_DEADLINE, FOOTER_DEADLINE_DEFAULT)
            .to_string()
    }

    /// Replaces the footer version slot with the hour countdown for authors.
    ///
    /// # Contract
    /// - Non-author context returns `default_content` unchanged.
    /// - Author context returns the resolved countdown template with
    ///   `{hours}` substituted as a plain integer.
    pub fn footer_version_slot(&self, context: &RenderContext, default_content: &str) -> String {
        if !context.is_author() {
            return default_content.to_string();
        }

        let hours = self.calculator.hours_until_deadline(context.now());
        let template = self
            .catalog
            .resolve(MSG_HOURS_REMAINING, HOURS_REMAINING_DEFAULT);
        substitute_count(template, PLACEHOLDER_HOURS, hours)
    }

    /// Registers both entry points on the render-pipeline registry.
    ///
    /// The version-slot filter runs one priority slot after the default so
    /// it observes other default-priority modifications first.
    pub fn register_filters(
        self: &Arc<Self>,
        registry: &mut FilterRegistry,
    ) -> Result<(), FilterRegistryError> {
        let service = Arc::clone(self);
        registry.register(
            POINT_FOOTER_MESSAGE,
            FILTER_ID_FOOTER_MESSAGE,
            DEFAULT_FILTER_PRIORITY,
            Arc::new(move |context, text| service.footer_message(context, text)),
        )?;

        let service = Arc::clone(self);
        registry.register(
            POINT_FOOTER_VERSION,
            FILTER_ID_FOOTER_VERSION,
            DEFAULT_FILTER_PRIORITY + 1,
            Arc::new(move |context, text| service.footer_version_slot(context, text)),
        )?;

        info!(
            "event=footer_filters_registered module=service status=ok rounding={}",
            self.calculator.rounding().as_str()
        );
        Ok(())
    }
}

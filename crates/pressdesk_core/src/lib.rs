//! Core logic for the pressdesk dashboard footer countdown.
//! This crate is the single source of truth for footer gating and deadline
//! math; hosts wire it into their render pipeline via the filter registry.

pub mod deadline;
pub mod filter;
pub mod locale;
pub mod logging;
pub mod model;
pub mod service;

pub use deadline::{
    upcoming_deadline, Clock, DeadlineCalculator, Rounding, SystemClock, DEADLINE_HOUR,
    DEADLINE_WEEKDAY,
};
pub use filter::registry::{
    FilterHandler, FilterRegistry, FilterRegistryError, RenderContext, DEFAULT_FILTER_PRIORITY,
    POINT_FOOTER_MESSAGE, POINT_FOOTER_VERSION,
};
pub use locale::{
    substitute_count, CatalogError, MessageCatalog, FOOTER_DEADLINE_DEFAULT,
    HOURS_REMAINING_DEFAULT, MSG_FOOTER_DEADLINE, MSG_HOURS_REMAINING, PLACEHOLDER_HOURS,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::principal::{Principal, ROLE_AUTHOR};
pub use service::footer_service::{
    FooterConfig, FooterService, FILTER_ID_FOOTER_MESSAGE, FILTER_ID_FOOTER_VERSION,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

//! In-process filter registry and render context.
//!
//! # Responsibility
//! - Hold priority-ordered text callbacks per named extension point.
//! - Fold registered callbacks over a default text during render calls.
//!
//! # Invariants
//! - Filters run in ascending priority order; ties run in registration
//!   order.
//! - Applying an extension point with no registered filters returns the
//!   default text unchanged.
//! - `apply` performs no I/O and no mutation; registration is the only
//!   write path.

use crate::deadline::Clock;
use crate::model::principal::{Principal, ROLE_AUTHOR};
use chrono::NaiveDateTime;
use log::debug;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Extension point for the dashboard footer message.
pub const POINT_FOOTER_MESSAGE: &str = "dashboard.footer.message";
/// Extension point for the footer version slot.
pub const POINT_FOOTER_VERSION: &str = "dashboard.footer.version";

/// Priority assigned to filters that do not ask for a specific slot.
pub const DEFAULT_FILTER_PRIORITY: i32 = 10;

/// Explicit per-call inputs for filter evaluation.
///
/// Carries the authenticated principal (if any) and the wall-clock instant
/// of the render call, so filters stay deterministic and testable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    principal: Option<Principal>,
    now: NaiveDateTime,
}

impl RenderContext {
    /// Creates a context from an explicit principal and instant.
    pub fn new(principal: Option<Principal>, now: NaiveDateTime) -> Self {
        Self { principal, now }
    }

    /// Creates a context by sampling the given clock.
    pub fn capture(principal: Option<Principal>, clock: &impl Clock) -> Self {
        Self::new(principal, clock.now_local())
    }

    /// Returns the principal supplied by the host, if any.
    pub fn principal(&self) -> Option<&Principal> {
        self.principal.as_ref()
    }

    /// Returns the wall-clock instant of this render call.
    pub fn now(&self) -> NaiveDateTime {
        self.now
    }

    /// Returns whether the current principal holds the `author` role.
    ///
    /// Missing principal reports `false`; never panics.
    pub fn is_author(&self) -> bool {
        self.principal
            .as_ref()
            .is_some_and(|principal| principal.has_role(ROLE_AUTHOR))
    }
}

/// Text-transforming callback registered on one extension point.
pub type FilterHandler = Arc<dyn Fn(&RenderContext, &str) -> String + Send + Sync>;

struct RegisteredFilter {
    id: String,
    priority: i32,
    seq: u64,
    handler: FilterHandler,
}

/// Registration table mapping extension points to ordered filters.
#[derive(Default)]
pub struct FilterRegistry {
    points: BTreeMap<String, Vec<RegisteredFilter>>,
    next_seq: u64,
}

impl FilterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one filter on a named extension point.
    ///
    /// # Errors
    /// - Point and filter ids must match the lowercase dotted id grammar.
    /// - A filter id may be registered at most once per point.
    pub fn register(
        &mut self,
        point: &str,
        filter_id: &str,
        priority: i32,
        handler: FilterHandler,
    ) -> Result<(), FilterRegistryError> {
        let point = point.trim();
        if !is_valid_id(point) {
            return Err(FilterRegistryError::InvalidPointName(point.to_string()));
        }
        let filter_id = filter_id.trim();
        if !is_valid_id(filter_id) {
            return Err(FilterRegistryError::InvalidFilterId(filter_id.to_string()));
        }

        let filters = self.points.entry(point.to_string()).or_default();
        if filters.iter().any(|filter| filter.id == filter_id) {
            return Err(FilterRegistryError::DuplicateFilterId {
                point: point.to_string(),
                filter_id: filter_id.to_string(),
            });
        }

        let seq = self.next_seq;
        self.next_seq += 1;
        filters.push(RegisteredFilter {
            id: filter_id.to_string(),
            priority,
            seq,
            handler,
        });
        filters.sort_by_key(|filter| (filter.priority, filter.seq));

        debug!(
            "event=filter_registered module=filter status=ok point={point} id={filter_id} priority={priority}"
        );
        Ok(())
    }

    /// Applies every filter on one point to the default text, in order.
    ///
    /// Unknown points return the default text unchanged.
    pub fn apply(&self, point: &str, context: &RenderContext, default_text: &str) -> String {
        let Some(filters) = self.points.get(point.trim()) else {
            return default_text.to_string();
        };

        let mut text = default_text.to_string();
        for filter in filters {
            text = (filter.handler)(context, &text);
        }
        text
    }

    /// Returns the number of registered extension points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns filter ids for one point in execution order.
    pub fn filter_ids(&self, point: &str) -> Vec<String> {
        match self.points.get(point.trim()) {
            Some(filters) => filters.iter().map(|filter| filter.id.clone()).collect(),
            None => vec![],
        }
    }
}

fn is_valid_id(value: &str) -> bool {
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
        if c == '.' || c == '_' || c == '-' {
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

/// Filter registration errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterRegistryError {
    InvalidPointName(String),
    InvalidFilterId(String),
    DuplicateFilterId { point: String, filter_id: String },
}

impl Display for FilterRegistryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPointName(value) => write!(f, "extension point name is invalid: {value}"),
            Self::InvalidFilterId(value) => write!(f, "filter id is invalid: {value}"),
            Self::DuplicateFilterId { point, filter_id } => {
                write!(f, "filter id already registered on {point}: {filter_id}")
            }
        }
    }
}

impl Error for FilterRegistryError {}

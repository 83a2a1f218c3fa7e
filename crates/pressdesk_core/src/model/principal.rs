//! Principal domain model.
//!
//! # Responsibility
//! - Carry the acting user's role labels and authentication state.
//! - Answer role checks with fail-closed semantics.
//!
//! # Invariants
//! - `anonymous()` principals have an empty role set.
//! - Role matching is exact and case-sensitive; no prefix or substring
//!   matching.
//! - An unauthenticated principal reports `false` for every role, even if
//!   a deserialized payload smuggled labels in.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Role label that unlocks the deadline footer.
pub const ROLE_AUTHOR: &str = "author";

/// The user on whose behalf the current render call executes.
///
/// Supplied by the host per request; this crate never creates, mutates, or
/// stores principals beyond the single call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// Whether the host authenticated this user.
    authenticated: bool,
    /// Coarse-grained role labels, e.g. `author` or `editor`.
    roles: BTreeSet<String>,
}

impl Principal {
    /// Creates an authenticated principal with the given role labels.
    pub fn member<I, S>(roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            authenticated: true,
            roles: roles.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates an unauthenticated principal with no roles.
    pub fn anonymous() -> Self {
        Self {
            authenticated: false,
            roles: BTreeSet::new(),
        }
    }

    /// Returns whether the host authenticated this user.
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Returns the role labels carried by this principal.
    pub fn roles(&self) -> &BTreeSet<String> {
        &self.roles
    }

    /// Returns whether this principal holds the exact role label.
    ///
    /// Unauthenticated principals never hold a role. The guard runs even
    /// for principals built from external payloads, so a deserialized
    /// anonymous principal with stray labels still fails closed.
    pub fn has_role(&self, label: &str) -> bool {
        self.authenticated && self.roles.contains(label)
    }

    /// Returns whether this principal holds the `author` role.
    pub fn is_author(&self) -> bool {
        self.has_role(ROLE_AUTHOR)
    }
}

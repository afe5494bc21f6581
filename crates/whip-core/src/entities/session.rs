use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::Legislator;

/// A (session, chamber) pair naming one bill directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct SessionKey {
    pub session: String,
    pub chamber: String,
}

impl SessionKey {
    #[must_use]
    pub fn new(session: impl Into<String>, chamber: impl Into<String>) -> Self {
        Self {
            session: session.into(),
            chamber: chamber.into(),
        }
    }

    /// Sessions served by `legislator`, in first-seen role order.
    ///
    /// The chamber is the legislator's own; a role's chamber is used only when
    /// the legislator record has none. Roles without a term, or without any
    /// resolvable chamber, are skipped.
    #[must_use]
    pub fn served_by(legislator: &Legislator) -> Vec<Self> {
        let mut keys: Vec<Self> = Vec::new();
        for role in &legislator.roles {
            let Some(term) = role.term.as_deref() else {
                continue;
            };
            let Some(chamber) = legislator.chamber.as_deref().or(role.chamber.as_deref()) else {
                continue;
            };
            let key = Self::new(term, chamber);
            if !keys.contains(&key) {
                keys.push(key);
            }
        }
        keys
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.session, self.chamber)
    }
}

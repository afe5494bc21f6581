use serde::{Deserialize, Serialize};

use crate::enums::Party;

/// A legislator record from `<root>/legislators/<leg_id>`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Legislator {
    /// Some corpus exports omit this; the loader fills it from the file name.
    #[serde(default)]
    pub leg_id: String,
    /// `Unknown` when the document has no party (inactive members).
    #[serde(default)]
    pub party: Party,
    #[serde(default)]
    pub chamber: Option<String>,
    #[serde(default)]
    pub roles: Vec<Role>,
}

/// One entry of a legislator's role history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Role {
    #[serde(default)]
    pub term: Option<String>,
    #[serde(default)]
    pub chamber: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

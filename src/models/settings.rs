use serde::{Deserialize, Serialize};

/// User settings document: `{ rounding5 }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Round stopped sessions to the nearest 5 minutes.
    pub rounding5: bool,
}

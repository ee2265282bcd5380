use serde::{Deserialize, Serialize};
use std::fmt;

/// A directed dependency edge: `dependant` cannot start until `provider`
/// has completed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// The node that must complete first
    pub provider: String,
    /// The node waiting on the provider
    pub dependant: String,
}

impl Edge {
    /// Create a new edge from provider to dependant
    #[must_use]
    pub fn new(provider: impl Into<String>, dependant: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            dependant: dependant.into(),
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.provider, self.dependant)
    }
}

impl<P, D> From<(P, D)> for Edge
where
    P: Into<String>,
    D: Into<String>,
{
    fn from((provider, dependant): (P, D)) -> Self {
        Self::new(provider, dependant)
    }
}

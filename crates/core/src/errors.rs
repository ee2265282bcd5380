/// Result type alias for opsgraph operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for opsgraph operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid caller-supplied input
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// An edge references a node that was never declared
    #[error("edge '{provider} -> {dependant}' references undeclared node '{node}'")]
    UndeclaredNode {
        node: String,
        provider: String,
        dependant: String,
    },

    /// The dependency graph is not a DAG
    #[error("{}", format_cycle_error(.remaining))]
    CycleDetected { remaining: Vec<String> },
}

fn format_cycle_error(remaining: &[String]) -> String {
    format!(
        "dependency cycle detected; unresolved nodes: {}",
        remaining.join(", ")
    )
}

impl From<anyhow::Error> for Error {
    fn from(error: anyhow::Error) -> Self {
        Error::Configuration {
            message: format!("An internal error occurred: {error}"),
        }
    }
}

// Helper methods for creating errors with context
impl Error {
    /// Create a configuration error
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }

    /// Create an undeclared node error for the offending edge
    #[must_use]
    pub fn undeclared_node(
        node: impl Into<String>,
        provider: impl Into<String>,
        dependant: impl Into<String>,
    ) -> Self {
        Error::UndeclaredNode {
            node: node.into(),
            provider: provider.into(),
            dependant: dependant.into(),
        }
    }

    /// Create a cycle detection error from the unresolved node set
    #[must_use]
    pub fn cycle_detected(remaining: Vec<String>) -> Self {
        Error::CycleDetected { remaining }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undeclared_node_names_the_offending_edge() {
        let err = Error::undeclared_node("db", "db", "api");
        assert_eq!(
            err.to_string(),
            "edge 'db -> api' references undeclared node 'db'"
        );
    }

    #[test]
    fn cycle_error_lists_unresolved_nodes() {
        let err = Error::cycle_detected(vec!["x".into(), "y".into(), "z".into()]);
        assert_eq!(
            err.to_string(),
            "dependency cycle detected; unresolved nodes: x, y, z"
        );
    }

    #[test]
    fn anyhow_errors_convert_to_configuration() {
        let err: Error = anyhow::anyhow!("boom").into();
        assert!(matches!(err, Error::Configuration { .. }));
    }
}

//! Configuration drift detection.
//!
//! Recursively compares an expected configuration document against the
//! observed state (desired manifest vs. live cluster dump, rendered
//! template vs. deployed file) and reports every divergence with a dotted
//! key path.

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeSet;
use std::fmt;

/// How a key diverged between expected and actual
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DriftKind {
    /// Present in expected, absent from actual
    MissingKey,
    /// Absent from expected, present in actual
    UnexpectedKey,
    /// Present in both with different values
    ValueMismatch,
}

/// One detected divergence
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Drift {
    /// Dotted key path from the document root
    pub path: String,
    pub kind: DriftKind,
    /// Expected value, absent for [`DriftKind::UnexpectedKey`]
    pub expected: Option<Value>,
    /// Observed value, absent for [`DriftKind::MissingKey`]
    pub actual: Option<Value>,
}

impl fmt::Display for Drift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            DriftKind::MissingKey => write!(f, "missing key: '{}'", self.path),
            DriftKind::UnexpectedKey => write!(f, "unexpected key: '{}'", self.path),
            DriftKind::ValueMismatch => write!(
                f,
                "value mismatch at '{}': expected {}, found {}",
                self.path,
                render(self.expected.as_ref()),
                render(self.actual.as_ref()),
            ),
        }
    }
}

fn render(value: Option<&Value>) -> String {
    value.map_or_else(|| "null".to_string(), Value::to_string)
}

/// Diff `expected` against `actual`, returning every divergence.
///
/// Objects are compared key by key and recursed into; any other pairing is
/// compared as a whole value. Keys are visited in sorted order at each
/// level, so the report order is deterministic. Equal documents produce an
/// empty report.
#[must_use]
pub fn find_drift(expected: &Value, actual: &Value) -> Vec<Drift> {
    let mut drifts = Vec::new();
    collect(expected, actual, "", &mut drifts);
    tracing::debug!(count = drifts.len(), "configuration drift scan complete");
    drifts
}

fn collect(expected: &Value, actual: &Value, path: &str, out: &mut Vec<Drift>) {
    match (expected, actual) {
        (Value::Object(exp), Value::Object(act)) => {
            let keys: BTreeSet<&String> = exp.keys().chain(act.keys()).collect();
            for key in keys {
                let child = if path.is_empty() {
                    key.clone()
                } else {
                    format!("{path}.{key}")
                };
                match (exp.get(key.as_str()), act.get(key.as_str())) {
                    (Some(e), Some(a)) => collect(e, a, &child, out),
                    (Some(e), None) => out.push(Drift {
                        path: child,
                        kind: DriftKind::MissingKey,
                        expected: Some(e.clone()),
                        actual: None,
                    }),
                    (None, Some(a)) => out.push(Drift {
                        path: child,
                        kind: DriftKind::UnexpectedKey,
                        expected: None,
                        actual: Some(a.clone()),
                    }),
                    (None, None) => {}
                }
            }
        }
        _ => {
            if expected != actual {
                out.push(Drift {
                    path: if path.is_empty() {
                        "(root)".to_string()
                    } else {
                        path.to_string()
                    },
                    kind: DriftKind::ValueMismatch,
                    expected: Some(expected.clone()),
                    actual: Some(actual.clone()),
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn equal_documents_produce_no_drift() {
        let doc = json!({"replicas": 3, "env": {"DEBUG": "false"}});
        assert!(find_drift(&doc, &doc).is_empty());
    }

    #[test]
    fn detects_nested_mismatch_and_extra_key() {
        let expected = json!({
            "replicas": 3,
            "image": "nginx:latest",
            "env": {"DB_HOST": "localhost", "DEBUG": "false"}
        });
        let actual = json!({
            "replicas": 2,
            "image": "nginx:latest",
            "env": {"DB_HOST": "10.0.0.1", "DEBUG": "false"},
            "extra_field": "manual_change"
        });

        let drifts = find_drift(&expected, &actual);
        assert_eq!(drifts.len(), 3);

        // keys visit in sorted order: env.DB_HOST, extra_field, replicas
        assert_eq!(drifts[0].path, "env.DB_HOST");
        assert_eq!(drifts[0].kind, DriftKind::ValueMismatch);
        assert_eq!(drifts[1].path, "extra_field");
        assert_eq!(drifts[1].kind, DriftKind::UnexpectedKey);
        assert_eq!(drifts[2].path, "replicas");
        assert_eq!(drifts[2].kind, DriftKind::ValueMismatch);
    }

    #[test]
    fn detects_missing_key() {
        let drifts = find_drift(&json!({"a": 1, "b": 2}), &json!({"a": 1}));
        assert_eq!(drifts.len(), 1);
        assert_eq!(drifts[0].kind, DriftKind::MissingKey);
        assert_eq!(drifts[0].path, "b");
        assert_eq!(drifts[0].expected, Some(json!(2)));
        assert_eq!(drifts[0].actual, None);
    }

    #[test]
    fn object_vs_scalar_is_a_value_mismatch() {
        let drifts = find_drift(&json!({"env": {"a": 1}}), &json!({"env": "prod"}));
        assert_eq!(drifts.len(), 1);
        assert_eq!(drifts[0].path, "env");
        assert_eq!(drifts[0].kind, DriftKind::ValueMismatch);
    }

    #[test]
    fn scalar_roots_compare_as_one_value() {
        let drifts = find_drift(&json!(3), &json!(4));
        assert_eq!(drifts.len(), 1);
        assert_eq!(drifts[0].path, "(root)");
    }

    #[test]
    fn renders_report_lines() {
        let drifts = find_drift(
            &json!({"replicas": 3}),
            &json!({"replicas": 2, "extra": true}),
        );
        let lines: Vec<String> = drifts.iter().map(ToString::to_string).collect();
        assert_eq!(
            lines,
            [
                "unexpected key: 'extra'",
                "value mismatch at 'replicas': expected 3, found 2",
            ]
        );
    }
}

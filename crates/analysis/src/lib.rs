//! Operational analysis utilities for the `opsgraph` workspace.
//!
//! Small, self-contained primitives that travel with dependency-ordering
//! work in operations tooling:
//!
//! - **`rate_limit`**: per-client sliding-window admission over explicit
//!   timestamps, for replaying access logs against a policy.
//! - **`windows`**: maintenance window consolidation.
//! - **`drift`**: recursive expected-vs-actual configuration diffing.
//! - **`frequency`**: top-K frequency analysis for log aggregation.
//!
//! Everything here is synchronous, in-memory computation with typed
//! results; callers own all I/O.

pub mod drift;
pub mod frequency;
pub mod rate_limit;
pub mod windows;

pub use drift::{find_drift, Drift, DriftKind};
pub use frequency::top_k;
pub use rate_limit::{RateLimitConfig, SlidingWindowLimiter};
pub use windows::{merge_windows, MaintenanceWindow};

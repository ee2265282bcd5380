//! Maintenance window consolidation.

use opsgraph_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An inclusive maintenance interval on a caller-defined time axis
/// (epoch seconds, minutes since midnight — any monotone unit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenanceWindow {
    start: u64,
    end: u64,
}

impl MaintenanceWindow {
    /// Create a window, rejecting inverted bounds
    pub fn new(start: u64, end: u64) -> Result<Self> {
        if end < start {
            return Err(Error::configuration(format!(
                "maintenance window ends before it starts: [{start}, {end}]"
            )));
        }
        Ok(Self { start, end })
    }

    /// Window start bound
    #[must_use]
    pub fn start(&self) -> u64 {
        self.start
    }

    /// Window end bound
    #[must_use]
    pub fn end(&self) -> u64 {
        self.end
    }
}

impl fmt::Display for MaintenanceWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

/// Consolidate overlapping windows into the minimal covering set.
///
/// Windows are sorted by start bound; a window whose start falls at or
/// inside the running window's end is folded into it. The result is
/// sorted and pairwise disjoint.
#[must_use]
pub fn merge_windows(mut windows: Vec<MaintenanceWindow>) -> Vec<MaintenanceWindow> {
    windows.sort_by_key(MaintenanceWindow::start);

    let mut merged: Vec<MaintenanceWindow> = Vec::with_capacity(windows.len());
    for current in windows {
        match merged.last_mut() {
            Some(last) if current.start <= last.end => {
                last.end = last.end.max(current.end);
            }
            _ => merged.push(current),
        }
    }
    merged
}

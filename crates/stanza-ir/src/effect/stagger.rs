//! Stagger sequencing: spreading effect start delays across siblings.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Where the stagger sequence starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaggerOrigin {
    /// Delay grows with the child's index.
    #[default]
    First,
    /// Delay grows with the reverse index.
    Last,
    /// Delay grows with distance from the middle child.
    Center,
    /// Delay grows with distance from the nearer end.
    Edges,
}

/// Stagger configuration for an effect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StaggerConfig {
    pub enabled: bool,
    /// Step between consecutive delays, in milliseconds.
    pub amount_ms: f32,
    pub from: StaggerOrigin,
}

impl Default for StaggerConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            amount_ms: 100.0,
            from: StaggerOrigin::First,
        }
    }
}

/// Compute per-child delay offsets for an ordered sibling list.
///
/// Disabled or absent config yields all-zero offsets. The result depends
/// only on the input ordering and the config (no clock, no randomness), so
/// recomputing with the same inputs gives identical delays.
pub fn compute_delays(
    child_ids: &[String],
    config: Option<&StaggerConfig>,
) -> HashMap<String, f32> {
    let steps = |index: usize| -> f32 {
        let n = child_ids.len();
        let config = match config {
            Some(config) if config.enabled => config,
            _ => return 0.0,
        };
        let step = match config.from {
            StaggerOrigin::First => index,
            StaggerOrigin::Last => n - 1 - index,
            // The middle index is the earlier of the two central candidates
            // for even counts.
            StaggerOrigin::Center => index.abs_diff((n - 1) / 2),
            StaggerOrigin::Edges => index.min(n - 1 - index),
        };
        step as f32 * config.amount_ms
    };

    child_ids
        .iter()
        .enumerate()
        .map(|(index, id)| (id.clone(), steps(index)))
        .collect()
}

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::habitat::ResourceVector;

/// When the low-resource warning fires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningPolicy {
    /// Every recomputation while a resource is low
    #[default]
    LevelTriggered,
    /// Only when the habitat goes from healthy to low
    EdgeTriggered,
}

/// Decides whether a recomputation should raise the low-resource warning
#[derive(Resource, Debug, Default)]
pub struct LowResourceMonitor {
    pub policy: WarningPolicy,
    was_low: bool,
}

impl LowResourceMonitor {
    pub fn new(policy: WarningPolicy) -> Self {
        Self {
            policy,
            was_low: false,
        }
    }

    /// An empty habitat never warns, whatever the resource values.
    pub fn evaluate(
        &mut self,
        resources: &ResourceVector,
        item_count: usize,
        threshold: i32,
    ) -> bool {
        let low = item_count > 0 && resources.any_below(threshold);
        let fire = match self.policy {
            WarningPolicy::LevelTriggered => low,
            WarningPolicy::EdgeTriggered => low && !self.was_low,
        };
        self.was_low = low;
        fire
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn low() -> ResourceVector {
        ResourceVector {
            oxygen: 50,
            power: 5,
            water: 50,
            food: 50,
        }
    }

    #[test]
    fn test_level_triggered_repeats() {
        let mut monitor = LowResourceMonitor::new(WarningPolicy::LevelTriggered);
        assert!(monitor.evaluate(&low(), 3, 20));
        assert!(monitor.evaluate(&low(), 3, 20));
        assert!(monitor.evaluate(&low(), 4, 20));
    }

    #[test]
    fn test_edge_triggered_fires_once_per_dip() {
        let mut monitor = LowResourceMonitor::new(WarningPolicy::EdgeTriggered);
        assert!(monitor.evaluate(&low(), 3, 20));
        assert!(!monitor.evaluate(&low(), 3, 20));

        // Recover, then dip again
        assert!(!monitor.evaluate(&ResourceVector::baseline(50), 3, 20));
        assert!(monitor.evaluate(&low(), 3, 20));
    }

    #[test]
    fn test_empty_habitat_never_warns() {
        let mut monitor = LowResourceMonitor::default();
        assert!(!monitor.evaluate(&ResourceVector::baseline(0), 0, 20));
    }

    #[test]
    fn test_threshold_is_strict() {
        let mut monitor = LowResourceMonitor::default();
        assert!(!monitor.evaluate(&ResourceVector::baseline(20), 1, 20));
        assert!(monitor.evaluate(&ResourceVector::baseline(19), 1, 20));
    }

    #[test]
    fn test_policy_serialization() {
        assert_eq!(
            serde_json::to_string(&WarningPolicy::EdgeTriggered).unwrap(),
            "\"edge_triggered\""
        );
    }
}

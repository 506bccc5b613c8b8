//! Network configuration
//!
//! ```json
//! { "topology": "feedback", "scheduler": "threaded", "step_budget": 1000000 }
//! ```

use serde::{Deserialize, Serialize};

/// How amplifier outputs are routed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topology {
    /// Signal passes through each amplifier once, in order
    #[default]
    Linear,
    /// Last amplifier feeds the first until every amplifier halts
    Feedback,
}

/// How amplifier instances are driven
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scheduler {
    /// One thread, interleaving resumable steps
    #[default]
    RoundRobin,
    /// One thread per amplifier connected by channels
    Threaded,
}

/// Amplifier network configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    pub topology: Topology,
    pub scheduler: Scheduler,
    /// Per-amplifier instruction limit (None = unlimited)
    pub step_budget: Option<u64>,
}

impl NetworkConfig {
    pub fn linear() -> Self {
        Self::default()
    }

    pub fn feedback() -> Self {
        Self {
            topology: Topology::Feedback,
            ..Self::default()
        }
    }

    pub fn with_scheduler(mut self, scheduler: Scheduler) -> Self {
        self.scheduler = scheduler;
        self
    }

    pub fn with_step_budget(mut self, budget: u64) -> Self {
        self.step_budget = Some(budget);
        self
    }

    pub fn is_feedback(&self) -> bool {
        self.topology == Topology::Feedback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = NetworkConfig::default();
        assert_eq!(config.topology, Topology::Linear);
        assert_eq!(config.scheduler, Scheduler::RoundRobin);
        assert_eq!(config.step_budget, None);
        assert!(NetworkConfig::feedback().is_feedback());
    }

    #[test]
    fn test_json_roundtrip() {
        let config = NetworkConfig::feedback()
            .with_scheduler(Scheduler::Threaded)
            .with_step_budget(5000);
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"feedback\""));
        assert!(json.contains("\"threaded\""));
        let restored: NetworkConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, config);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: NetworkConfig = serde_json::from_str(r#"{"topology":"feedback"}"#).unwrap();
        assert_eq!(config, NetworkConfig::feedback());
    }
}

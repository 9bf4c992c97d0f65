use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub stations_file: Option<PathBuf>,
    pub track_file: Option<PathBuf>,
    pub poll_interval_ms: u64,
    pub default_radius_m: f64,
    /// Fixes reporting a worse accuracy than this are ignored.
    pub max_fix_accuracy_m: f64,
    pub stop_when_all_alarmed: bool,
    pub confirm_before_delete: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            stations_file: None,
            track_file: None,
            poll_interval_ms: 5_000,
            default_radius_m: 1_000.0,
            max_fix_accuracy_m: 250.0,
            stop_when_all_alarmed: true,
            confirm_before_delete: true,
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.poll_interval_ms > 0,
            "poll_interval_ms must be > 0, got {}",
            self.poll_interval_ms
        );
        anyhow::ensure!(
            self.default_radius_m.is_finite() && self.default_radius_m > 0.0,
            "default_radius_m must be a positive number, got {}",
            self.default_radius_m
        );
        anyhow::ensure!(
            self.max_fix_accuracy_m.is_finite() && self.max_fix_accuracy_m > 0.0,
            "max_fix_accuracy_m must be a positive number, got {}",
            self.max_fix_accuracy_m
        );
        Ok(())
    }
}

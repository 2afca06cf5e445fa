//! Runtime configuration assembled from every source the client accepts.
//!
//! Precedence, lowest first: built-in defaults, `ROVER_*` environment
//! variables, the settings file, command-line flags.
use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use rover_content::{ConfigLoader, RoverSettings};
use rover_runtime::RuntimeConfig;

pub fn resolve(settings_path: Option<&Path>, delay_ms: Option<u64>) -> Result<RuntimeConfig> {
    let settings = match settings_path {
        Some(path) => ConfigLoader::load(path)?,
        None => RoverSettings::default(),
    };

    Ok(apply(RuntimeConfig::from_env(), &settings, delay_ms))
}

fn apply(base: RuntimeConfig, settings: &RoverSettings, delay_ms: Option<u64>) -> RuntimeConfig {
    let simulation = settings.simulation(base.simulation);
    let step_delay = delay_ms
        .or(settings.step_delay_ms)
        .map_or(base.step_delay, Duration::from_millis);

    base.with_simulation(simulation).with_step_delay(step_delay)
}

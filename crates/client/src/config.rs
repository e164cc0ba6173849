//! Simulator configuration from the process environment.
use std::env;

/// Pacing of the simulated host loop.
#[derive(Clone, Debug)]
pub struct SimConfig {
    /// Host time reported to the driver for each tick.
    pub tick_ms: u64,
    /// Ticks after which a battle that has not ended is abandoned.
    pub max_ticks: u32,
    /// Sleep between ticks instead of running as fast as possible.
    pub realtime: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tick_ms: 16,
            max_ticks: 10_000,
            realtime: false,
        }
    }
}

impl SimConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SIM_TICK_MS` - Milliseconds per tick (default: 16)
    /// - `SIM_MAX_TICKS` - Tick limit per battle (default: 10000)
    /// - `SIM_REALTIME` - Sleep between ticks (default: false)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(tick_ms) = read_env::<u64>("SIM_TICK_MS") {
            config.tick_ms = tick_ms;
        }
        if let Some(max_ticks) = read_env::<u32>("SIM_MAX_TICKS") {
            config.max_ticks = max_ticks.max(1);
        }
        if let Some(realtime) = read_env::<bool>("SIM_REALTIME") {
            config.realtime = realtime;
        } else if env::var("SIM_REALTIME").is_ok() {
            config.realtime = true;
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

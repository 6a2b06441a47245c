//! Widget configuration.
//!
//! Every field has a default, so a page can override only what it needs by embedding
//! `<script id="miner-config" type="application/json">{ ... }</script>`.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::ConfigError;

/// Id of the optional element carrying JSON overrides.
pub const CONFIG_ELEMENT_ID: &str = "miner-config";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TickerConfig {
    /// Amount added to the balance on every tick.
    pub rate: f64,
    pub tick_interval_ms: u32,
    /// Decimal places shown in the balance display.
    pub decimals: usize,
    pub suffix: String,
}

impl Default for TickerConfig {
    fn default() -> Self {
        Self {
            rate: 0.000001,
            tick_interval_ms: 1000,
            decimals: 8,
            suffix: "SIM".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MiningConfig {
    pub step_interval_ms: u32,
    /// Percentage points added per tick.
    pub progress_step: u8,
    /// Inclusive lower bound of a session reward.
    pub reward_min: f64,
    /// Exclusive upper bound of a session reward.
    pub reward_max: f64,
}

impl Default for MiningConfig {
    fn default() -> Self {
        Self {
            step_interval_ms: 150,
            progress_step: 2,
            reward_min: 0.01,
            reward_max: 0.06,
        }
    }
}

impl MiningConfig {
    /// Maps a roll in `[0, 1)` onto `[reward_min, reward_max)`.
    pub fn reward_for(&self, roll: f64) -> f64 {
        let roll = roll.clamp(0.0, 1.0);
        let amount = self.reward_min + roll * (self.reward_max - self.reward_min);
        // roll == 1.0 (or fp rounding near it) must not reach the exclusive bound;
        // reward_max > 0 after validation, so stepping its bits down is the next smaller f64
        if amount >= self.reward_max {
            f64::from_bits(self.reward_max.to_bits() - 1)
        } else {
            amount
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    pub ticker: TickerConfig,
    pub mining: MiningConfig,
}

impl WidgetConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let cfg: WidgetConfig = serde_json::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = &self.ticker;
        if !t.rate.is_finite() || t.rate < 0.0 {
            return Err(ConfigError::Invalid(format!("ticker.rate must be finite and >= 0, got {}", t.rate)));
        }
        if t.tick_interval_ms == 0 {
            return Err(ConfigError::Invalid("ticker.tick_interval_ms must be > 0".into()));
        }
        if t.decimals > 12 {
            return Err(ConfigError::Invalid(format!("ticker.decimals must be <= 12, got {}", t.decimals)));
        }
        let m = &self.mining;
        if m.step_interval_ms == 0 {
            return Err(ConfigError::Invalid("mining.step_interval_ms must be > 0".into()));
        }
        if m.progress_step == 0 || m.progress_step > 100 {
            return Err(ConfigError::Invalid(format!("mining.progress_step must be in 1..=100, got {}", m.progress_step)));
        }
        if !m.reward_min.is_finite() || !m.reward_max.is_finite() {
            return Err(ConfigError::Invalid("mining reward bounds must be finite".into()));
        }
        if m.reward_min < 0.0 || m.reward_min >= m.reward_max {
            return Err(ConfigError::Invalid(format!(
                "mining reward range [{}, {}) is empty or negative",
                m.reward_min, m.reward_max
            )));
        }
        Ok(())
    }

    /// Reads overrides from the page, falling back to defaults on any problem.
    pub fn load_from_document() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        let Some(raw) = raw else {
            debug!("no #{} element, using default config", CONFIG_ELEMENT_ID);
            return Self::default();
        };
        match Self::from_json(&raw) {
            Ok(cfg) => {
                info!(?cfg, "loaded widget config");
                cfg
            }
            Err(e) => {
                warn!("{e}; using default config");
                Self::default()
            }
        }
    }
}

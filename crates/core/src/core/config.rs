//! Storefront configuration. Every field has a default so a partial JSON file
//! (or none at all) is valid.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::StoreError;
use crate::listing::Listing;
use crate::order::{MAX_QUANTITY, MIN_QUANTITY};
use crate::pricing::PricingConfig;
use crate::ticker::TickerConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Timings {
    pub wallet_connect_ms: u64,
    pub purchase_ms: u64,
    pub notification_ms: u64,
    pub collection_notice_ms: u64,
    pub price_tick_ms: u64,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            wallet_connect_ms: 1000,
            purchase_ms: 3000,
            notification_ms: 5000,
            collection_notice_ms: 1000,
            price_tick_ms: 10_000,
        }
    }
}

impl Timings {
    pub fn wallet_connect(&self) -> Duration {
        Duration::from_millis(self.wallet_connect_ms)
    }

    pub fn purchase(&self) -> Duration {
        Duration::from_millis(self.purchase_ms)
    }

    pub fn notification(&self) -> Duration {
        Duration::from_millis(self.notification_ms)
    }

    pub fn collection_notice(&self) -> Duration {
        Duration::from_millis(self.collection_notice_ms)
    }

    pub fn price_tick(&self) -> Duration {
        Duration::from_millis(self.price_tick_ms)
    }
}

fn default_presets() -> Vec<u32> {
    vec![1, 5, 10, 25, 100]
}

fn default_wallets() -> Vec<String> {
    ["MetaMask", "WalletConnect", "Coinbase Wallet"]
        .into_iter()
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StoreConfig {
    pub pricing: PricingConfig,
    pub quantity_presets: Vec<u32>,
    pub timings: Timings,
    pub wallets: Vec<String>,
    pub ticker: TickerConfig,
    pub listing: Listing,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            pricing: PricingConfig::default(),
            quantity_presets: default_presets(),
            timings: Timings::default(),
            wallets: default_wallets(),
            ticker: TickerConfig::default(),
            listing: Listing::default(),
        }
    }
}

impl StoreConfig {
    pub fn validate(&self) -> Result<(), StoreError> {
        let p = &self.pricing;
        if !p.unit_price.is_finite() || p.unit_price < 0.0 {
            return Err(StoreError::InvalidConfig(format!(
                "pricing.unit_price must be a non-negative number, got {}",
                p.unit_price
            )));
        }
        if !p.gas_fee.is_finite() || p.gas_fee < 0.0 {
            return Err(StoreError::InvalidConfig(format!(
                "pricing.gas_fee must be a non-negative number, got {}",
                p.gas_fee
            )));
        }
        if !p.fee_rate.is_finite() || !(0.0..=1.0).contains(&p.fee_rate) {
            return Err(StoreError::InvalidConfig(format!(
                "pricing.fee_rate must be within [0, 1], got {}",
                p.fee_rate
            )));
        }
        if self.quantity_presets.is_empty() {
            return Err(StoreError::InvalidConfig(
                "quantity_presets must not be empty".to_string(),
            ));
        }
        if let Some(q) = self
            .quantity_presets
            .iter()
            .find(|q| !(MIN_QUANTITY..=MAX_QUANTITY).contains(*q))
        {
            return Err(StoreError::InvalidConfig(format!(
                "quantity preset {q} outside [{MIN_QUANTITY}, {MAX_QUANTITY}]"
            )));
        }
        if self.wallets.iter().all(|w| w.trim().is_empty()) {
            return Err(StoreError::InvalidConfig(
                "at least one wallet must be offered".to_string(),
            ));
        }
        let t = &self.timings;
        if [
            t.wallet_connect_ms,
            t.purchase_ms,
            t.notification_ms,
            t.collection_notice_ms,
            t.price_tick_ms,
        ]
        .contains(&0)
        {
            return Err(StoreError::InvalidConfig(
                "timings must all be greater than zero".to_string(),
            ));
        }
        if !self.ticker.usd_per_eth.is_finite() || self.ticker.usd_per_eth <= 0.0 {
            return Err(StoreError::InvalidConfig(
                "ticker.usd_per_eth must be positive".to_string(),
            ));
        }
        if !self.ticker.initial_eth.is_finite() || self.ticker.initial_eth < 0.0 {
            return Err(StoreError::InvalidConfig(format!(
                "ticker.initial_eth must be a non-negative number, got {}",
                self.ticker.initial_eth
            )));
        }
        if !self.ticker.max_move.is_finite() || !(0.0..1.0).contains(&self.ticker.max_move) {
            return Err(StoreError::InvalidConfig(format!(
                "ticker.max_move must be within [0, 1), got {}",
                self.ticker.max_move
            )));
        }
        Ok(())
    }

    #[cfg(feature = "serde")]
    pub fn from_json_str(raw: &str) -> Result<Self, StoreError> {
        let cfg: StoreConfig = serde_json::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    #[cfg(all(feature = "std", feature = "serde"))]
    pub fn load(path: &std::path::Path) -> Result<Self, StoreError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Like [`StoreConfig::load`], but a missing file yields the defaults.
    #[cfg(all(feature = "std", feature = "serde"))]
    pub fn load_or_default(path: &std::path::Path) -> Result<Self, StoreError> {
        match std::fs::read_to_string(path) {
            Ok(raw) => Self::from_json_str(&raw),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }
}

//! Simulated ETH/USD listing price.
//!
//! Every tick moves the ETH price by a random fraction within
//! `±max_move`, rounds it to 3 places, and derives the USD price from a fixed
//! conversion rate.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::format::{fmt_fixed, fmt_signed_fixed, round_to};
use crate::prng::Prng;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TickerConfig {
    pub initial_eth: f64,
    pub usd_per_eth: f64,
    /// Largest relative move per tick (0.005 = ±0.5%).
    pub max_move: f64,
    pub seed: u64,
}

impl Default for TickerConfig {
    fn default() -> Self {
        Self {
            initial_eth: 2.45,
            usd_per_eth: 1650.0,
            max_move: 0.005,
            seed: 2024,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceQuote {
    pub eth: f64,
    pub usd: f64,
    /// Relative change applied by the last tick.
    pub change: f64,
}

impl PriceQuote {
    pub fn is_positive(&self) -> bool {
        self.change > 0.0
    }

    pub fn eth_label(&self) -> String {
        format!("{} ETH", fmt_fixed(self.eth, 3))
    }

    pub fn usd_label(&self) -> String {
        format!("${}", fmt_fixed(self.usd, 2))
    }

    pub fn change_label(&self) -> String {
        format!("{}%", fmt_signed_fixed(self.change * 100.0, 2))
    }

    pub fn direction(&self) -> &'static str {
        if self.is_positive() {
            "up"
        } else {
            "down"
        }
    }
}

#[derive(Debug, Clone)]
pub struct PriceTicker {
    quote: PriceQuote,
    usd_per_eth: f64,
    max_move: f64,
    rng: Prng,
}

impl PriceTicker {
    pub fn new(cfg: &TickerConfig) -> Self {
        let eth = round_to(cfg.initial_eth, 3);
        Self {
            quote: PriceQuote {
                eth,
                usd: round_to(eth * cfg.usd_per_eth, 2),
                change: 0.0,
            },
            usd_per_eth: cfg.usd_per_eth,
            max_move: cfg.max_move.abs(),
            rng: Prng::new(cfg.seed),
        }
    }

    pub fn quote(&self) -> PriceQuote {
        self.quote
    }

    pub fn tick(&mut self) -> PriceQuote {
        let change = self.rng.gen_range_f64(-self.max_move, self.max_move);
        let eth = round_to((self.quote.eth * (1.0 + change)).max(0.0), 3);
        self.quote = PriceQuote {
            eth,
            usd: round_to(eth * self.usd_per_eth, 2),
            change,
        };
        self.quote
    }
}

//! Order summary calculator.
//!
//! `compute_summary` is a pure function of the quantity and the pricing
//! constants. All arithmetic stays in full `f64` precision; rounding to
//! [`DISPLAY_DECIMALS`] places happens only when an amount is formatted.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::format::fmt_fixed;

/// Decimal places used for every currency amount shown in the order summary.
pub const DISPLAY_DECIMALS: usize = 2;

/// Denomination of the listing. Both storefront variants share one calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Currency {
    #[default]
    Usd,
    Eth,
}

impl Currency {
    pub fn code(self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eth => "ETH",
        }
    }

    /// Format an amount for display, rounded to [`DISPLAY_DECIMALS`].
    pub fn format_amount(self, amount: f64) -> String {
        let digits = fmt_fixed(amount, DISPLAY_DECIMALS);
        match self {
            Currency::Usd => format!("${digits}"),
            Currency::Eth => format!("{digits} ETH"),
        }
    }
}

/// Immutable pricing constants, fixed when the storefront starts.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PricingConfig {
    pub currency: Currency,
    /// Price of a single token.
    pub unit_price: f64,
    /// Platform fee as a fraction of the subtotal (0.05 = 5%).
    pub fee_rate: f64,
    /// Flat simulated gas fee added once per order.
    pub gas_fee: f64,
}

impl PricingConfig {
    pub fn usd(unit_price: f64, fee_rate: f64, gas_fee: f64) -> Self {
        Self {
            currency: Currency::Usd,
            unit_price,
            fee_rate,
            gas_fee,
        }
    }

    pub fn eth(unit_price: f64, fee_rate: f64, gas_fee: f64) -> Self {
        Self {
            currency: Currency::Eth,
            unit_price,
            fee_rate,
            gas_fee,
        }
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self::usd(10.0, 0.05, 0.10)
    }
}

/// Derived totals for one quantity. Never stored; recomputed on every change.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OrderSummary {
    pub subtotal: f64,
    pub platform_fee: f64,
    pub total: f64,
}

/// Display strings for an [`OrderSummary`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedSummary {
    pub subtotal: String,
    pub platform_fee: String,
    pub total: String,
}

impl OrderSummary {
    pub fn formatted(&self, currency: Currency) -> FormattedSummary {
        FormattedSummary {
            subtotal: currency.format_amount(self.subtotal),
            platform_fee: currency.format_amount(self.platform_fee),
            total: currency.format_amount(self.total),
        }
    }
}

/// Compute subtotal, platform fee and grand total for `quantity` tokens.
///
/// The quantity is expected to be clamped already (see
/// [`crate::order::clamp_quantity`]); there are no error conditions.
pub fn compute_summary(quantity: u32, config: &PricingConfig) -> OrderSummary {
    let subtotal = quantity as f64 * config.unit_price;
    let platform_fee = subtotal * config.fee_rate;
    let total = subtotal + platform_fee + config.gas_fee;
    OrderSummary {
        subtotal,
        platform_fee,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::{OrderState, QuantityInput, MAX_QUANTITY, MIN_QUANTITY};

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9 * b.abs().max(1.0)
    }

    #[test]
    fn five_tokens_at_ten_dollars() {
        let cfg = PricingConfig::usd(10.0, 0.05, 0.10);
        let s = compute_summary(5, &cfg);
        assert!(close(s.subtotal, 50.0));
        assert!(close(s.platform_fee, 2.5));
        assert!(close(s.total, 52.6));

        let f = s.formatted(cfg.currency);
        assert_eq!(f.subtotal, "$50.00");
        assert_eq!(f.platform_fee, "$2.50");
        assert_eq!(f.total, "$52.60");
    }

    #[test]
    fn clamped_request_prices_the_maximum() {
        let cfg = PricingConfig::usd(10.0, 0.05, 0.10);
        let order = OrderState::default().set_quantity(QuantityInput::Number(2000.0));
        assert_eq!(order.quantity(), 1000);

        let f = compute_summary(order.quantity(), &cfg).formatted(cfg.currency);
        assert_eq!(f.subtotal, "$10000.00");
        assert_eq!(f.platform_fee, "$500.00");
        assert_eq!(f.total, "$10500.10");
    }

    #[test]
    fn subtotal_is_quantity_times_unit_price_over_full_range() {
        let cfg = PricingConfig::usd(12.34, 0.025, 0.5);
        for q in MIN_QUANTITY..=MAX_QUANTITY {
            let s = compute_summary(q, &cfg);
            assert_eq!(s.subtotal, q as f64 * cfg.unit_price);
            assert!(close(
                s.total,
                s.subtotal + s.subtotal * cfg.fee_rate + cfg.gas_fee
            ));
        }
    }

    #[test]
    fn eth_amounts_carry_the_ticker_suffix() {
        let cfg = PricingConfig::eth(0.25, 0.02, 0.003);
        let f = compute_summary(4, &cfg).formatted(cfg.currency);
        assert_eq!(f.subtotal, "1.00 ETH");
        assert_eq!(f.platform_fee, "0.02 ETH");
        // 1.0 + 0.02 + 0.003 = 1.023, display rounding only.
        assert_eq!(f.total, "1.02 ETH");
    }

    #[test]
    fn zero_fee_config_totals_subtotal_plus_gas() {
        let cfg = PricingConfig::usd(3.0, 0.0, 0.0);
        let s = compute_summary(7, &cfg);
        assert_eq!(s.platform_fee, 0.0);
        assert_eq!(s.total, 21.0);
    }
}

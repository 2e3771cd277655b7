//! Quantity selection.
//!
//! `OrderState` is a plain value: every mutation returns a new state whose
//! quantity is guaranteed to lie in `[MIN_QUANTITY, MAX_QUANTITY]`.

pub const MIN_QUANTITY: u32 = 1;
pub const MAX_QUANTITY: u32 = 1000;

/// Raw quantity as it arrives from the UI.
#[derive(Debug, Clone, PartialEq)]
pub enum QuantityInput {
    /// A number from a stepper or preset. May be fractional or out of range.
    Number(f64),
    /// Free text typed into the quantity field.
    Text(String),
}

impl From<u32> for QuantityInput {
    fn from(v: u32) -> Self {
        QuantityInput::Number(v as f64)
    }
}

impl From<i64> for QuantityInput {
    fn from(v: i64) -> Self {
        QuantityInput::Number(v as f64)
    }
}

impl From<&str> for QuantityInput {
    fn from(v: &str) -> Self {
        QuantityInput::Text(v.to_string())
    }
}

impl From<String> for QuantityInput {
    fn from(v: String) -> Self {
        QuantityInput::Text(v)
    }
}

/// Normalize any requested quantity into the allowed range.
///
/// Non-numeric input (unparseable text, NaN) becomes `MIN_QUANTITY`. Numbers
/// too large to represent, including `+∞`, land on `MAX_QUANTITY` like any
/// other value above the range. Fractions are truncated toward zero before
/// clamping.
pub fn clamp_quantity(requested: &QuantityInput) -> u32 {
    let value = match requested {
        QuantityInput::Number(v) => *v,
        QuantityInput::Text(s) => match s.trim().parse::<f64>() {
            Ok(v) => v,
            Err(_) => return MIN_QUANTITY,
        },
    };

    if value.is_nan() {
        return MIN_QUANTITY;
    }

    let whole = value.trunc();
    if whole <= MIN_QUANTITY as f64 {
        MIN_QUANTITY
    } else if whole >= MAX_QUANTITY as f64 {
        MAX_QUANTITY
    } else {
        whole as u32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderState {
    quantity: u32,
}

impl OrderState {
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Replace the quantity with the clamped `requested` value.
    pub fn set_quantity(self, requested: impl Into<QuantityInput>) -> Self {
        let requested = requested.into();
        Self {
            quantity: clamp_quantity(&requested),
        }
    }

    pub fn increment(self) -> Self {
        Self {
            quantity: self.quantity.saturating_add(1).min(MAX_QUANTITY),
        }
    }

    pub fn decrement(self) -> Self {
        Self {
            quantity: self.quantity.saturating_sub(1).max(MIN_QUANTITY),
        }
    }

    pub fn at_min(&self) -> bool {
        self.quantity <= MIN_QUANTITY
    }

    pub fn at_max(&self) -> bool {
        self.quantity >= MAX_QUANTITY
    }
}

impl Default for OrderState {
    fn default() -> Self {
        Self {
            quantity: MIN_QUANTITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::{compute_summary, PricingConfig};

    #[test]
    fn out_of_range_and_garbage_are_clamped() {
        let s = OrderState::default();
        assert_eq!(s.set_quantity(0u32).quantity(), 1);
        assert_eq!(s.set_quantity(1001u32).quantity(), 1000);
        assert_eq!(s.set_quantity("abc").quantity(), 1);
        assert_eq!(s.set_quantity(-40i64).quantity(), 1);
        assert_eq!(s.set_quantity("").quantity(), 1);
    }

    #[test]
    fn text_is_trimmed_and_fractions_truncate() {
        let s = OrderState::default();
        assert_eq!(s.set_quantity(" 42 ").quantity(), 42);
        assert_eq!(s.set_quantity("2.9").quantity(), 2);
        assert_eq!(s.set_quantity(QuantityInput::Number(0.4)).quantity(), 1);
        assert_eq!(s.set_quantity(QuantityInput::Number(999.99)).quantity(), 999);
        assert_eq!(s.set_quantity("1e3").quantity(), 1000);
    }

    #[test]
    fn overflowing_numbers_clamp_to_max() {
        let s = OrderState::default();
        assert_eq!(s.set_quantity("1e308").quantity(), 1000);
        assert_eq!(s.set_quantity("1e309").quantity(), 1000);
        assert_eq!(s.set_quantity(QuantityInput::Number(f64::INFINITY)).quantity(), 1000);
        assert_eq!(s.set_quantity("-1e309").quantity(), 1);
        assert_eq!(s.set_quantity(QuantityInput::Number(f64::NAN)).quantity(), 1);
        assert_eq!(s.set_quantity("NaN").quantity(), 1);
    }

    #[test]
    fn stepping_saturates_at_bounds() {
        let s = OrderState::default();
        assert_eq!(s.decrement().quantity(), 1);
        assert!(s.at_min());

        let top = s.set_quantity(1000u32);
        assert!(top.at_max());
        assert_eq!(top.increment().quantity(), 1000);
        assert_eq!(top.decrement().quantity(), 999);
        assert_eq!(s.increment().increment().quantity(), 3);
    }

    #[test]
    fn setting_twice_is_idempotent() {
        let cfg = PricingConfig::default();
        for raw in ["7", "0", "5000", "x", "12.5"] {
            let once = OrderState::default().set_quantity(raw);
            let twice = once.set_quantity(raw);
            assert_eq!(once, twice);
            assert_eq!(
                compute_summary(once.quantity(), &cfg),
                compute_summary(twice.quantity(), &cfg)
            );
        }
    }
}

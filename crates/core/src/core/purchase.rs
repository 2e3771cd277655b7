//! Simulated purchase flow: `Idle → Processing → Confirmed → Idle`.
//!
//! The flow itself never waits. `request` moves to `Processing` and the caller
//! schedules [`crate::scheduler::ScheduledTask::CompletePurchase`]; when the
//! scheduler fires, `complete` moves to `Confirmed`. A started purchase cannot
//! be cancelled.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::pricing::OrderSummary;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PurchasePhase {
    #[default]
    Idle,
    Processing,
    Confirmed,
}

impl PurchasePhase {
    /// Label for the purchase button in this phase.
    pub fn button_label(self) -> &'static str {
        match self {
            PurchasePhase::Idle | PurchasePhase::Confirmed => "Purchase Now",
            PurchasePhase::Processing => "Processing...",
        }
    }

    pub fn button_enabled(self) -> bool {
        !matches!(self, PurchasePhase::Processing)
    }
}

/// What was bought, captured when the purchase was requested.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PurchaseReceipt {
    pub quantity: u32,
    pub summary: OrderSummary,
}

#[derive(Debug, Clone, Default)]
pub struct PurchaseFlow {
    phase: PurchasePhase,
    receipt: Option<PurchaseReceipt>,
    completed: u32,
}

impl PurchaseFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> PurchasePhase {
        self.phase
    }

    /// Receipt of the in-flight or last confirmed purchase.
    pub fn receipt(&self) -> Option<&PurchaseReceipt> {
        self.receipt.as_ref()
    }

    /// Number of purchases confirmed in this session.
    pub fn completed(&self) -> u32 {
        self.completed
    }

    /// Start a purchase. Returns `false` (and changes nothing) unless idle.
    pub fn request(&mut self, receipt: PurchaseReceipt) -> bool {
        if self.phase != PurchasePhase::Idle {
            return false;
        }
        self.phase = PurchasePhase::Processing;
        self.receipt = Some(receipt);
        true
    }

    /// Finish the simulated processing delay. Returns `false` unless processing.
    pub fn complete(&mut self) -> bool {
        if self.phase != PurchasePhase::Processing {
            return false;
        }
        self.phase = PurchasePhase::Confirmed;
        self.completed += 1;
        true
    }

    /// Acknowledge the confirmation; the storefront is ready for another order.
    pub fn acknowledge(&mut self) -> bool {
        if self.phase != PurchasePhase::Confirmed {
            return false;
        }
        self.phase = PurchasePhase::Idle;
        true
    }
}

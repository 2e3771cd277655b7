//! # estate
//!
//! Client-side logic for a tokenized real-estate storefront: order pricing,
//! quantity selection and a simulated wallet/purchase flow.
//!
//! Nothing here talks to a chain. Every "transaction" is a timed simulation;
//! the host (terminal, browser) supplies a [`scheduler::Scheduler`] that delivers
//! timer tasks back to the [`storefront::Storefront`], and a
//! [`storefront::StorefrontView`] that renders state changes.
//!
//! ## Quick Start
//!
//! ```
//! use estate::prelude::*;
//!
//! let pricing = PricingConfig::usd(10.0, 0.05, 0.10);
//! let order = OrderState::default().set_quantity(QuantityInput::Text("5".into()));
//! let summary = compute_summary(order.quantity(), &pricing);
//!
//! assert_eq!(pricing.currency.format_amount(summary.total), "$52.60");
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Config file loading
//! - `serde` (default): Serialization/deserialization of config and listing data
//!
//! ## Modules
//!
//! - [`pricing`]: Order summary calculator
//! - [`order`]: Quantity state and input clamping
//! - [`purchase`]: Idle → Processing → Confirmed purchase flow
//! - [`storefront`]: Event dispatch tying everything to a view

#[path = "core/error.rs"]
pub mod error;

#[path = "core/format.rs"]
pub mod format;

#[path = "core/pricing.rs"]
pub mod pricing;

#[path = "core/order.rs"]
pub mod order;

#[path = "core/purchase.rs"]
pub mod purchase;

#[path = "core/wallet.rs"]
pub mod wallet;

#[path = "core/notify.rs"]
pub mod notify;

#[path = "core/prng.rs"]
pub mod prng;

#[path = "core/ticker.rs"]
pub mod ticker;

#[path = "core/listing.rs"]
pub mod listing;

#[path = "core/scheduler.rs"]
pub mod scheduler;

#[path = "core/config.rs"]
pub mod config;

#[path = "core/storefront.rs"]
pub mod storefront;

/// Prelude module for convenient imports.
///
/// ```
/// use estate::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::{StoreConfig, Timings};
    pub use crate::error::StoreError;
    pub use crate::notify::{Notification, NotificationKind};
    pub use crate::order::{clamp_quantity, OrderState, QuantityInput, MAX_QUANTITY, MIN_QUANTITY};
    pub use crate::pricing::{compute_summary, Currency, OrderSummary, PricingConfig};
    pub use crate::purchase::{PurchaseFlow, PurchasePhase, PurchaseReceipt};
    pub use crate::scheduler::{ManualScheduler, ScheduledTask, Scheduler};
    pub use crate::storefront::{Modal, StoreEvent, Storefront, StorefrontView};
    pub use crate::ticker::{PriceQuote, PriceTicker};
    pub use crate::wallet::{WalletSession, WalletStatus};
}

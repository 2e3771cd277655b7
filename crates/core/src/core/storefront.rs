//! Storefront controller.
//!
//! Owns the order, wallet, purchase and notification state, turns UI events
//! into state transitions, and pushes every visible change to a
//! [`StorefrontView`]. Delays go through the [`Scheduler`]; the host feeds due
//! tasks back through [`Storefront::fire`].

use tracing::{debug, error, info, warn};

use crate::config::StoreConfig;
use crate::notify::{Notification, NotificationCenter, NotificationKind};
use crate::order::{OrderState, QuantityInput};
use crate::pricing::{compute_summary, FormattedSummary, OrderSummary};
use crate::purchase::{PurchaseFlow, PurchasePhase, PurchaseReceipt};
use crate::scheduler::{ManualScheduler, ScheduledTask, Scheduler};
use crate::ticker::{PriceQuote, PriceTicker};
use crate::wallet::WalletSession;

pub const FAULT_MESSAGE: &str = "Something went wrong. Please try again.";
pub const CONNECT_FIRST_MESSAGE: &str = "Please connect your wallet first";
pub const PREVIEW_MESSAGE: &str = "NFT preview feature coming soon!";
pub const OPENING_COLLECTION_MESSAGE: &str = "Opening your NFT collection...";
pub const COLLECTION_MESSAGE: &str = "NFT collection feature coming soon!";

const INTERACTION_TARGET: &str = "estate::interaction";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    Wallet,
    Success,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    ConnectWalletClicked,
    WalletChosen(String),
    CloseWalletModal,
    PreviewClicked,
    PurchaseClicked,
    CloseSuccessModal,
    ViewCollectionClicked,
    EscapePressed,
    Increment,
    Decrement,
    QuantityEntered(QuantityInput),
    QuickSelect(u32),
    DismissNotification,
}

/// Presentation side of the storefront.
///
/// Only the order and purchase callbacks are required; the rest default to
/// no-ops so a view can render just the parts it cares about.
pub trait StorefrontView {
    /// Quantity changed (or was re-submitted); `display` is ready to render.
    fn on_quantity_changed(
        &mut self,
        order: &OrderState,
        summary: &OrderSummary,
        display: &FormattedSummary,
    );

    /// A purchase was accepted and is now processing.
    fn on_purchase_requested(&mut self, receipt: &PurchaseReceipt);

    fn on_purchase_phase_changed(&mut self, _phase: PurchasePhase) {}

    fn on_wallet_changed(&mut self, _wallet: &WalletSession) {}

    fn on_modal_changed(&mut self, _modal: Modal, _open: bool) {}

    /// `None` when the visible notification went away.
    fn on_notification(&mut self, _notification: Option<&Notification>) {}

    fn on_price_changed(&mut self, _quote: &PriceQuote) {}
}

pub struct Storefront<V, S> {
    config: StoreConfig,
    order: OrderState,
    wallet: WalletSession,
    purchase: PurchaseFlow,
    notices: NotificationCenter,
    ticker: PriceTicker,
    wallet_modal: bool,
    success_modal: bool,
    view: V,
    scheduler: S,
}

impl<V: StorefrontView, S: Scheduler> Storefront<V, S> {
    pub fn new(config: StoreConfig, view: V, scheduler: S) -> Self {
        let ticker = PriceTicker::new(&config.ticker);
        Self {
            config,
            order: OrderState::default(),
            wallet: WalletSession::new(),
            purchase: PurchaseFlow::new(),
            notices: NotificationCenter::new(),
            ticker,
            wallet_modal: false,
            success_modal: false,
            view,
            scheduler,
        }
    }

    /// Push the initial state to the view and start the price feed.
    pub fn start(&mut self) {
        self.view.on_wallet_changed(&self.wallet);
        self.publish_quantity();
        self.view.on_purchase_phase_changed(self.purchase.phase());
        self.view.on_price_changed(&self.ticker.quote());
        self.scheduler
            .schedule(self.config.timings.price_tick(), ScheduledTask::PriceTick);
        info!(
            currency = self.config.pricing.currency.code(),
            unit_price = self.config.pricing.unit_price,
            "storefront started"
        );
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn order(&self) -> OrderState {
        self.order
    }

    pub fn summary(&self) -> OrderSummary {
        compute_summary(self.order.quantity(), &self.config.pricing)
    }

    pub fn wallet(&self) -> &WalletSession {
        &self.wallet
    }

    pub fn purchase(&self) -> &PurchaseFlow {
        &self.purchase
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notices.current()
    }

    pub fn quote(&self) -> PriceQuote {
        self.ticker.quote()
    }

    pub fn is_open(&self, modal: Modal) -> bool {
        match modal {
            Modal::Wallet => self.wallet_modal,
            Modal::Success => self.success_modal,
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn dispatch(&mut self, event: StoreEvent) {
        debug!(?event, "dispatch");
        match event {
            StoreEvent::ConnectWalletClicked => {
                info!(target: INTERACTION_TARGET, event = "wallet_connect_attempt");
                if self.wallet.is_connected() {
                    debug!("wallet already connected; connect click ignored");
                } else {
                    self.set_modal(Modal::Wallet, true);
                }
            }
            StoreEvent::WalletChosen(name) => self.choose_wallet(&name),
            StoreEvent::CloseWalletModal => self.set_modal(Modal::Wallet, false),
            StoreEvent::PreviewClicked => {
                info!(target: INTERACTION_TARGET, event = "nft_preview");
                if self.require_wallet() {
                    self.preview();
                }
            }
            StoreEvent::PurchaseClicked => {
                info!(target: INTERACTION_TARGET, event = "purchase_attempt");
                if self.require_wallet() {
                    self.request_purchase();
                }
            }
            StoreEvent::CloseSuccessModal => self.close_success(),
            StoreEvent::ViewCollectionClicked => {
                self.close_success();
                self.notify(NotificationKind::Info, OPENING_COLLECTION_MESSAGE);
                self.scheduler.schedule(
                    self.config.timings.collection_notice(),
                    ScheduledTask::CollectionNotice,
                );
            }
            StoreEvent::EscapePressed => {
                self.set_modal(Modal::Wallet, false);
                self.close_success();
            }
            StoreEvent::Increment => self.update_order(self.order.increment()),
            StoreEvent::Decrement => self.update_order(self.order.decrement()),
            StoreEvent::QuantityEntered(raw) => self.update_order(self.order.set_quantity(raw)),
            StoreEvent::QuickSelect(q) => self.update_order(self.order.set_quantity(q)),
            StoreEvent::DismissNotification => {
                if self.notices.clear() {
                    self.view.on_notification(None);
                }
            }
        }
    }

    /// Deliver a task whose delay has elapsed.
    pub fn fire(&mut self, task: ScheduledTask) {
        debug!(?task, "timer fired");
        match task {
            ScheduledTask::CompleteWalletConnect => {
                if let Some(name) = self.wallet.finish_connect() {
                    info!(wallet = %name, "wallet connected");
                    self.view.on_wallet_changed(&self.wallet);
                    self.set_modal(Modal::Wallet, false);
                    self.notify(
                        NotificationKind::Success,
                        format!("{name} connected successfully!"),
                    );
                }
            }
            ScheduledTask::CompletePurchase => {
                if self.purchase.complete() {
                    if let Some(r) = self.purchase.receipt() {
                        info!(
                            quantity = r.quantity,
                            total = %self.config.pricing.currency.format_amount(r.summary.total),
                            "purchase confirmed"
                        );
                    }
                    self.view.on_purchase_phase_changed(self.purchase.phase());
                    self.set_modal(Modal::Success, true);
                }
            }
            ScheduledTask::ExpireNotification(id) => {
                if self.notices.dismiss(id) {
                    self.view.on_notification(None);
                }
            }
            ScheduledTask::CollectionNotice => {
                self.notify(NotificationKind::Info, COLLECTION_MESSAGE);
            }
            ScheduledTask::PriceTick => {
                let quote = self.ticker.tick();
                self.view.on_price_changed(&quote);
                self.scheduler
                    .schedule(self.config.timings.price_tick(), ScheduledTask::PriceTick);
            }
        }
    }

    /// Catch-all for unexpected faults: log it and show the generic message.
    pub fn report_fault(&mut self, fault: &dyn std::error::Error) {
        error!(%fault, "unexpected fault");
        self.notify(NotificationKind::Error, FAULT_MESSAGE);
    }

    fn update_order(&mut self, next: OrderState) {
        self.order = next;
        self.publish_quantity();
    }

    fn publish_quantity(&mut self) {
        let summary = self.summary();
        let formatted = summary.formatted(self.config.pricing.currency);
        debug!(
            quantity = self.order.quantity(),
            total = %formatted.total,
            "order summary recomputed"
        );
        self.view
            .on_quantity_changed(&self.order, &summary, &formatted);
    }

    fn choose_wallet(&mut self, name: &str) {
        let name = name.trim();
        if !self.wallet_modal {
            debug!(wallet = %name, "wallet choice ignored; picker closed");
            return;
        }
        if name.is_empty() || !self.config.wallets.iter().any(|w| w.trim() == name) {
            warn!(wallet = %name, "wallet choice ignored; not offered");
            return;
        }
        if self.wallet.begin_connect(name) {
            info!(wallet = %name, "connecting wallet");
            self.view.on_wallet_changed(&self.wallet);
            self.scheduler.schedule(
                self.config.timings.wallet_connect(),
                ScheduledTask::CompleteWalletConnect,
            );
        } else {
            debug!(wallet = %name, "wallet choice ignored; session busy or connected");
        }
    }

    fn require_wallet(&mut self) -> bool {
        if self.wallet.is_connected() {
            return true;
        }
        warn!("action requires a connected wallet");
        self.notify(NotificationKind::Warning, CONNECT_FIRST_MESSAGE);
        self.set_modal(Modal::Wallet, true);
        false
    }

    fn preview(&mut self) {
        self.notify(NotificationKind::Info, PREVIEW_MESSAGE);
        self.log_preview();
    }

    #[cfg(feature = "serde")]
    fn log_preview(&mut self) {
        match self.config.listing.preview_json() {
            Ok(json) => debug!(preview = %json, "nft preview data"),
            Err(e) => self.report_fault(&e),
        }
    }

    #[cfg(not(feature = "serde"))]
    fn log_preview(&mut self) {
        debug!(token_id = %self.config.listing.token_id, "nft preview data");
    }

    fn request_purchase(&mut self) {
        let receipt = PurchaseReceipt {
            quantity: self.order.quantity(),
            summary: self.summary(),
        };
        if !self.purchase.request(receipt) {
            debug!(phase = ?self.purchase.phase(), "purchase click ignored");
            return;
        }
        info!(quantity = receipt.quantity, "purchase processing");
        self.view.on_purchase_requested(&receipt);
        self.view.on_purchase_phase_changed(self.purchase.phase());
        self.scheduler
            .schedule(self.config.timings.purchase(), ScheduledTask::CompletePurchase);
    }

    fn close_success(&mut self) {
        self.set_modal(Modal::Success, false);
        if self.purchase.acknowledge() {
            self.view.on_purchase_phase_changed(self.purchase.phase());
        }
    }

    fn set_modal(&mut self, modal: Modal, open: bool) {
        let slot = match modal {
            Modal::Wallet => &mut self.wallet_modal,
            Modal::Success => &mut self.success_modal,
        };
        if *slot != open {
            *slot = open;
            self.view.on_modal_changed(modal, open);
        }
    }

    fn notify(&mut self, kind: NotificationKind, message: impl Into<String>) {
        let shown = self.notices.show(kind, message);
        let id = shown.id;
        self.view.on_notification(Some(shown));
        self.scheduler.schedule(
            self.config.timings.notification(),
            ScheduledTask::ExpireNotification(id),
        );
    }
}

impl<V: StorefrontView> Storefront<V, ManualScheduler> {
    /// Run virtual time forward by `by`, firing each task at its due time.
    pub fn advance(&mut self, by: std::time::Duration) {
        let until = self.scheduler.now() + by;
        while let Some(task) = self.scheduler.next_due(until) {
            self.fire(task);
        }
        self.scheduler.settle(until);
    }
}

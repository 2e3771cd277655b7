use estate::notify::Notification;
use estate::order::OrderState;
use estate::pricing::{FormattedSummary, OrderSummary};
use estate::purchase::{PurchasePhase, PurchaseReceipt};
use estate::storefront::{Modal, StorefrontView};
use estate::ticker::PriceQuote;
use estate::wallet::WalletSession;
use leptos::prelude::*;

use crate::ui_model::PageModel;

/// Forwards every storefront change into the page model signal.
pub(super) struct SignalView {
    pub(super) model: RwSignal<PageModel>,
}

impl StorefrontView for SignalView {
    fn on_quantity_changed(
        &mut self,
        order: &OrderState,
        summary: &OrderSummary,
        display: &FormattedSummary,
    ) {
        self.model
            .update(|m| m.on_quantity_changed(order, summary, display));
    }

    fn on_purchase_requested(&mut self, receipt: &PurchaseReceipt) {
        self.model.update(|m| m.on_purchase_requested(receipt));
    }

    fn on_purchase_phase_changed(&mut self, phase: PurchasePhase) {
        self.model.update(|m| m.on_purchase_phase_changed(phase));
    }

    fn on_wallet_changed(&mut self, wallet: &WalletSession) {
        self.model.update(|m| m.on_wallet_changed(wallet));
    }

    fn on_modal_changed(&mut self, modal: Modal, open: bool) {
        self.model.update(|m| m.on_modal_changed(modal, open));
    }

    fn on_notification(&mut self, notification: Option<&Notification>) {
        self.model.update(|m| m.on_notification(notification));
    }

    fn on_price_changed(&mut self, quote: &PriceQuote) {
        self.model.update(|m| m.on_price_changed(quote));
    }
}

//! Page model shared by the wasm page and host-side tests.
//!
//! `PageModel` is a plain-data [`StorefrontView`]: the web layer wraps it in a
//! signal and renders from its fields, so everything the page shows can be
//! unit-tested on the host without a browser.

use estate::config::StoreConfig;
use estate::notify::{Notification, NotificationKind};
use estate::order::OrderState;
use estate::pricing::{FormattedSummary, OrderSummary};
use estate::purchase::{PurchasePhase, PurchaseReceipt};
use estate::storefront::{Modal, StorefrontView};
use estate::ticker::PriceQuote;
use estate::wallet::WalletSession;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastModel {
    pub id: u64,
    pub kind: NotificationKind,
    pub message: String,
}

impl ToastModel {
    pub fn class(&self) -> String {
        format!("notification {}", self.kind.label())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageModel {
    pub quantity: u32,
    pub quantity_text: String,
    pub at_min: bool,
    pub at_max: bool,
    pub subtotal: String,
    pub platform_fee: String,
    pub total: String,

    pub purchase_phase: PurchasePhase,
    pub last_receipt: Option<PurchaseReceipt>,

    pub wallet_label: String,
    pub wallet_connected: bool,
    /// Wallet option currently showing the loading state.
    pub pending_wallet: Option<String>,

    pub wallet_modal_open: bool,
    pub success_modal_open: bool,

    pub toast: Option<ToastModel>,

    pub eth_price: String,
    pub usd_price: String,
    pub price_change: String,
    pub price_up: bool,
}

impl PageModel {
    pub fn new(config: &StoreConfig) -> Self {
        let empty = OrderSummary::default().formatted(config.pricing.currency);
        Self {
            quantity: 1,
            quantity_text: "1".to_string(),
            at_min: true,
            at_max: false,
            subtotal: empty.subtotal,
            platform_fee: empty.platform_fee,
            total: empty.total,
            purchase_phase: PurchasePhase::Idle,
            last_receipt: None,
            wallet_label: WalletSession::new().button_label(),
            wallet_connected: false,
            pending_wallet: None,
            wallet_modal_open: false,
            success_modal_open: false,
            toast: None,
            eth_price: String::new(),
            usd_price: String::new(),
            price_change: String::new(),
            price_up: false,
        }
    }

    pub fn purchase_label(&self) -> &'static str {
        self.purchase_phase.button_label()
    }

    pub fn purchase_disabled(&self) -> bool {
        !self.purchase_phase.button_enabled()
    }

    pub fn price_change_class(&self) -> &'static str {
        if self.price_up {
            "price-change positive"
        } else {
            "price-change negative"
        }
    }

    pub fn modal_class(open: bool) -> &'static str {
        if open {
            "modal active"
        } else {
            "modal"
        }
    }
}

impl StorefrontView for PageModel {
    fn on_quantity_changed(
        &mut self,
        order: &OrderState,
        _summary: &OrderSummary,
        display: &FormattedSummary,
    ) {
        self.quantity = order.quantity();
        self.quantity_text = order.quantity().to_string();
        self.at_min = order.at_min();
        self.at_max = order.at_max();
        self.subtotal = display.subtotal.clone();
        self.platform_fee = display.platform_fee.clone();
        self.total = display.total.clone();
    }

    fn on_purchase_requested(&mut self, receipt: &PurchaseReceipt) {
        self.last_receipt = Some(*receipt);
    }

    fn on_purchase_phase_changed(&mut self, phase: PurchasePhase) {
        self.purchase_phase = phase;
    }

    fn on_wallet_changed(&mut self, wallet: &WalletSession) {
        self.wallet_label = wallet.button_label();
        self.wallet_connected = wallet.is_connected();
        self.pending_wallet = if wallet.is_connecting() {
            wallet.wallet_name().map(str::to_string)
        } else {
            None
        };
    }

    fn on_modal_changed(&mut self, modal: Modal, open: bool) {
        match modal {
            Modal::Wallet => self.wallet_modal_open = open,
            Modal::Success => self.success_modal_open = open,
        }
    }

    fn on_notification(&mut self, notification: Option<&Notification>) {
        self.toast = notification.map(|n| ToastModel {
            id: n.id,
            kind: n.kind,
            message: n.message.clone(),
        });
    }

    fn on_price_changed(&mut self, quote: &PriceQuote) {
        self.eth_price = quote.eth_label();
        self.usd_price = quote.usd_label();
        self.price_change = quote.change_label();
        self.price_up = quote.is_positive();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use estate::scheduler::ManualScheduler;
    use estate::storefront::{StoreEvent, Storefront};
    use std::time::Duration;

    fn page() -> Storefront<PageModel, ManualScheduler> {
        let cfg = StoreConfig::default();
        let model = PageModel::new(&cfg);
        let mut s = Storefront::new(cfg, model, ManualScheduler::new());
        s.start();
        s
    }

    fn run_for(s: &mut Storefront<PageModel, ManualScheduler>, ms: u64) {
        s.advance(Duration::from_millis(ms));
    }

    #[test]
    fn initial_render() {
        let s = page();
        let m = s.view();
        assert_eq!(m.quantity_text, "1");
        assert!(m.at_min);
        assert_eq!(m.total, "$10.60");
        assert_eq!(m.wallet_label, "Connect Wallet");
        assert_eq!(m.purchase_label(), "Purchase Now");
        assert_eq!(m.eth_price, "2.450 ETH");
        assert_eq!(m.usd_price, "$4042.50");
        assert_eq!(PageModel::modal_class(m.wallet_modal_open), "modal");
    }

    #[test]
    fn typed_quantity_is_normalized_in_the_field() {
        let mut s = page();
        s.dispatch(StoreEvent::QuantityEntered("2000".into()));
        assert_eq!(s.view().quantity_text, "1000");
        assert!(s.view().at_max);
        assert_eq!(s.view().total, "$10500.10");
    }

    #[test]
    fn wallet_option_shows_loading_until_connected() {
        let mut s = page();
        s.dispatch(StoreEvent::ConnectWalletClicked);
        assert_eq!(PageModel::modal_class(s.view().wallet_modal_open), "modal active");

        s.dispatch(StoreEvent::WalletChosen("WalletConnect".to_string()));
        assert_eq!(s.view().pending_wallet.as_deref(), Some("WalletConnect"));

        run_for(&mut s, 1000);
        assert_eq!(s.view().pending_wallet, None);
        assert!(s.view().wallet_connected);
        assert_eq!(s.view().wallet_label, "WalletConnect");
        assert!(!s.view().wallet_modal_open);
        assert_eq!(
            s.view().toast.as_ref().map(ToastModel::class).as_deref(),
            Some("notification success")
        );
    }

    #[test]
    fn purchase_button_disables_while_processing() {
        let mut s = page();
        s.dispatch(StoreEvent::ConnectWalletClicked);
        s.dispatch(StoreEvent::WalletChosen("MetaMask".to_string()));
        run_for(&mut s, 1000);

        s.dispatch(StoreEvent::PurchaseClicked);
        assert!(s.view().purchase_disabled());
        assert_eq!(s.view().purchase_label(), "Processing...");

        run_for(&mut s, 3000);
        assert!(!s.view().purchase_disabled());
        assert!(s.view().success_modal_open);
        assert_eq!(s.view().last_receipt.map(|r| r.quantity), Some(1));
    }

    #[test]
    fn toast_disappears_after_lifetime() {
        let mut s = page();
        s.dispatch(StoreEvent::PreviewClicked);
        assert_eq!(
            s.view().toast.as_ref().map(|t| t.kind),
            Some(NotificationKind::Warning)
        );
        run_for(&mut s, 5000);
        assert!(s.view().toast.is_none());
    }
}

use std::io::Write;

use estate::notify::Notification;
use estate::order::OrderState;
use estate::pricing::{Currency, FormattedSummary, OrderSummary};
use estate::purchase::{PurchasePhase, PurchaseReceipt};
use estate::storefront::{Modal, StorefrontView};
use estate::ticker::PriceQuote;
use estate::wallet::{WalletSession, WalletStatus};
use tracing::debug;

/// Renders storefront changes as plain text lines.
pub struct ConsoleView<W> {
    out: W,
    currency: Currency,
    wallets: Vec<String>,
}

impl<W: Write> ConsoleView<W> {
    pub fn new(out: W, currency: Currency, wallets: Vec<String>) -> Self {
        Self {
            out,
            currency,
            wallets,
        }
    }

    pub fn line(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{text}").and_then(|()| self.out.flush()) {
            debug!(error = %e, "console write failed");
        }
    }
}

impl<W: Write> StorefrontView for ConsoleView<W> {
    fn on_quantity_changed(
        &mut self,
        order: &OrderState,
        _summary: &OrderSummary,
        display: &FormattedSummary,
    ) {
        self.line(&format!(
            "qty {} | subtotal {} | platform fee {} | total {}",
            order.quantity(),
            display.subtotal,
            display.platform_fee,
            display.total
        ));
    }

    fn on_purchase_requested(&mut self, receipt: &PurchaseReceipt) {
        let total = self.currency.format_amount(receipt.summary.total);
        self.line(&format!(
            "processing purchase of {} token(s) for {total}...",
            receipt.quantity
        ));
    }

    fn on_purchase_phase_changed(&mut self, phase: PurchasePhase) {
        if phase == PurchasePhase::Confirmed {
            self.line("purchase confirmed");
        }
    }

    fn on_wallet_changed(&mut self, wallet: &WalletSession) {
        let text = match wallet.status() {
            WalletStatus::Disconnected => "[wallet] not connected".to_string(),
            WalletStatus::Connecting(name) => format!("[wallet] connecting {name}..."),
            WalletStatus::Connected(name) => format!("[wallet] {name}"),
        };
        self.line(&text);
    }

    fn on_modal_changed(&mut self, modal: Modal, open: bool) {
        if !open {
            return;
        }
        match modal {
            Modal::Wallet => {
                self.line("choose a wallet:");
                let entries: Vec<String> = self
                    .wallets
                    .iter()
                    .enumerate()
                    .map(|(i, w)| format!("  {}. {w}", i + 1))
                    .collect();
                for e in entries {
                    self.line(&e);
                }
            }
            Modal::Success => {
                self.line("Purchase successful! `collection` to view your NFTs, `done` to close.");
            }
        }
    }

    fn on_notification(&mut self, notification: Option<&Notification>) {
        if let Some(n) = notification {
            self.line(&format!("[{}] {}", n.kind.label(), n.message));
        }
    }

    fn on_price_changed(&mut self, quote: &PriceQuote) {
        let arrow = if quote.is_positive() { "▲" } else { "▼" };
        self.line(&format!(
            "price {} ({}) {arrow} {}",
            quote.eth_label(),
            quote.usd_label(),
            quote.change_label()
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use estate::config::StoreConfig;
    use estate::scheduler::ManualScheduler;
    use estate::storefront::{StoreEvent, Storefront};
    use std::time::Duration;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn write_errors_do_not_stop_the_session() {
        let cfg = StoreConfig::default();
        let view = ConsoleView::new(BrokenPipe, cfg.pricing.currency, cfg.wallets.clone());
        let mut store = Storefront::new(cfg, view, ManualScheduler::new());
        store.start();
        store.dispatch(StoreEvent::QuickSelect(5));
        assert_eq!(store.order().quantity(), 5);
    }

    #[test]
    fn renders_a_purchase_session() {
        let cfg = StoreConfig::default();
        let mut buf: Vec<u8> = Vec::new();
        {
            let view = ConsoleView::new(&mut buf, cfg.pricing.currency, cfg.wallets.clone());
            let mut store = Storefront::new(cfg, view, ManualScheduler::new());
            store.start();

            store.dispatch(StoreEvent::ConnectWalletClicked);
            store.dispatch(StoreEvent::WalletChosen("MetaMask".to_string()));
            store.advance(Duration::from_millis(1000));
            store.dispatch(StoreEvent::QuickSelect(5));
            store.dispatch(StoreEvent::PurchaseClicked);
            store.advance(Duration::from_millis(3000));
        }

        let out = String::from_utf8(buf).expect("utf-8 output");
        assert!(out.contains("qty 1 | subtotal $10.00 | platform fee $0.50 | total $10.60"));
        assert!(out.contains("  1. MetaMask"));
        assert!(out.contains("[wallet] connecting MetaMask..."));
        assert!(out.contains("[success] MetaMask connected successfully!"));
        assert!(out.contains("qty 5 | subtotal $50.00 | platform fee $2.50 | total $52.60"));
        assert!(out.contains("processing purchase of 5 token(s) for $52.60..."));
        assert!(out.contains("purchase confirmed"));
    }
}

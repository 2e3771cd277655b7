//! Simulated wallet session. No keys, no provider: choosing a wallet just
//! starts a fixed delay after which the session reports it as connected.

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WalletStatus {
    #[default]
    Disconnected,
    Connecting(String),
    Connected(String),
}

#[derive(Debug, Clone, Default)]
pub struct WalletSession {
    status: WalletStatus,
}

impl WalletSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> &WalletStatus {
        &self.status
    }

    pub fn is_connected(&self) -> bool {
        matches!(self.status, WalletStatus::Connected(_))
    }

    pub fn is_connecting(&self) -> bool {
        matches!(self.status, WalletStatus::Connecting(_))
    }

    /// Name of the wallet being connected or already connected.
    pub fn wallet_name(&self) -> Option<&str> {
        match &self.status {
            WalletStatus::Disconnected => None,
            WalletStatus::Connecting(name) | WalletStatus::Connected(name) => Some(name),
        }
    }

    /// Begin connecting to `wallet`. Ignored while a connection is pending or
    /// already established.
    pub fn begin_connect(&mut self, wallet: &str) -> bool {
        if self.status != WalletStatus::Disconnected {
            return false;
        }
        self.status = WalletStatus::Connecting(wallet.to_string());
        true
    }

    /// Complete a pending connection, returning the wallet name.
    pub fn finish_connect(&mut self) -> Option<String> {
        match std::mem::take(&mut self.status) {
            WalletStatus::Connecting(name) => {
                self.status = WalletStatus::Connected(name.clone());
                Some(name)
            }
            other => {
                self.status = other;
                None
            }
        }
    }

    /// Label for the header connect button.
    pub fn button_label(&self) -> String {
        match &self.status {
            WalletStatus::Connected(name) => name.clone(),
            _ => "Connect Wallet".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connect_cycle() {
        let mut w = WalletSession::new();
        assert_eq!(w.button_label(), "Connect Wallet");
        assert!(w.begin_connect("MetaMask"));
        assert!(w.is_connecting());
        assert_eq!(w.wallet_name(), Some("MetaMask"));
        assert_eq!(w.button_label(), "Connect Wallet");

        assert_eq!(w.finish_connect().as_deref(), Some("MetaMask"));
        assert!(w.is_connected());
        assert_eq!(w.button_label(), "MetaMask");
    }

    #[test]
    fn second_choice_while_pending_is_ignored() {
        let mut w = WalletSession::new();
        assert!(w.begin_connect("MetaMask"));
        assert!(!w.begin_connect("WalletConnect"));
        assert_eq!(w.finish_connect().as_deref(), Some("MetaMask"));
        assert!(!w.begin_connect("WalletConnect"));
    }

    #[test]
    fn finishing_without_pending_connection_is_a_no_op() {
        let mut w = WalletSession::new();
        assert_eq!(w.finish_connect(), None);
        assert_eq!(w.status(), &WalletStatus::Disconnected);
    }
}

//! Line commands for the terminal storefront.

use estate::error::StoreError;
use estate::order::QuantityInput;
use estate::storefront::StoreEvent;

pub const HELP: &str = "\
commands:
  connect              open the wallet picker
  wallet <n|name>      choose a wallet from the picker
  close                close the wallet picker
  + | -                step quantity up / down
  qty <value>          type a quantity (clamped to 1..=1000)
  pick <n>             quick-select a preset quantity
  preview              preview the listing
  buy                  purchase the current order
  done                 close the purchase confirmation
  collection           open your NFT collection
  esc                  close any open dialog
  dismiss              hide the current notification
  status               show the order and wallet state
  config               print the effective config as JSON
  help                 this text
  quit                 exit";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Event(StoreEvent),
    Status,
    Config,
    Help,
    Quit,
}

/// Parse one input line. `wallets` and `presets` come from the active config.
pub fn parse_command(
    line: &str,
    wallets: &[String],
    presets: &[u32],
) -> Result<Option<Command>, StoreError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((h, r)) => (h, r.trim()),
        None => (line, ""),
    };

    let cmd = match head.to_ascii_lowercase().as_str() {
        "connect" => Command::Event(StoreEvent::ConnectWalletClicked),
        "wallet" => Command::Event(StoreEvent::WalletChosen(resolve_wallet(rest, wallets)?)),
        "close" => Command::Event(StoreEvent::CloseWalletModal),
        "+" | "inc" => Command::Event(StoreEvent::Increment),
        "-" | "dec" => Command::Event(StoreEvent::Decrement),
        "qty" => Command::Event(StoreEvent::QuantityEntered(QuantityInput::Text(
            rest.to_string(),
        ))),
        "pick" => Command::Event(StoreEvent::QuickSelect(resolve_preset(rest, presets)?)),
        "preview" => Command::Event(StoreEvent::PreviewClicked),
        "buy" | "purchase" => Command::Event(StoreEvent::PurchaseClicked),
        "done" => Command::Event(StoreEvent::CloseSuccessModal),
        "collection" => Command::Event(StoreEvent::ViewCollectionClicked),
        "esc" => Command::Event(StoreEvent::EscapePressed),
        "dismiss" => Command::Event(StoreEvent::DismissNotification),
        "status" => Command::Status,
        "config" => Command::Config,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => return Err(StoreError::UnknownCommand(line.to_string())),
    };
    Ok(Some(cmd))
}

fn resolve_wallet(arg: &str, wallets: &[String]) -> Result<String, StoreError> {
    if let Ok(n) = arg.parse::<usize>() {
        return n
            .checked_sub(1)
            .and_then(|i| wallets.get(i))
            .cloned()
            .ok_or_else(|| StoreError::UnknownCommand(format!("wallet {arg}")));
    }
    wallets
        .iter()
        .find(|w| w.eq_ignore_ascii_case(arg))
        .cloned()
        .ok_or_else(|| StoreError::UnknownCommand(format!("wallet {arg}")))
}

fn resolve_preset(arg: &str, presets: &[u32]) -> Result<u32, StoreError> {
    arg.parse::<u32>()
        .ok()
        .filter(|q| presets.contains(q))
        .ok_or_else(|| StoreError::UnknownCommand(format!("pick {arg}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wallets() -> Vec<String> {
        vec!["MetaMask".to_string(), "WalletConnect".to_string()]
    }

    fn parse(line: &str) -> Result<Option<Command>, StoreError> {
        parse_command(line, &wallets(), &[1, 5, 10])
    }

    #[test]
    fn blank_lines_are_skipped() {
        assert!(matches!(parse("   "), Ok(None)));
    }

    #[test]
    fn wallet_by_index_or_name() {
        assert!(matches!(
            parse("wallet 2"),
            Ok(Some(Command::Event(StoreEvent::WalletChosen(ref w)))) if w == "WalletConnect"
        ));
        assert!(matches!(
            parse("wallet metamask"),
            Ok(Some(Command::Event(StoreEvent::WalletChosen(ref w)))) if w == "MetaMask"
        ));
        assert!(parse("wallet 0").is_err());
        assert!(parse("wallet Phantom").is_err());
    }

    #[test]
    fn qty_passes_raw_text_through() {
        assert!(matches!(
            parse("qty abc"),
            Ok(Some(Command::Event(StoreEvent::QuantityEntered(QuantityInput::Text(ref t))))) if t == "abc"
        ));
    }

    #[test]
    fn pick_requires_a_configured_preset() {
        assert!(matches!(
            parse("pick 5"),
            Ok(Some(Command::Event(StoreEvent::QuickSelect(5))))
        ));
        assert!(matches!(parse("pick 7"), Err(StoreError::UnknownCommand(_))));
    }

    #[test]
    fn unknown_commands_error() {
        assert!(matches!(parse("dance"), Err(StoreError::UnknownCommand(_))));
        assert!(matches!(parse("QUIT"), Ok(Some(Command::Quit))));
    }
}

//! Single-slot notification center. At most one notification is visible; a new
//! one replaces the old one. Each notification carries an id so a stale expiry
//! timer cannot remove its replacement.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl NotificationKind {
    pub fn label(self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Warning => "warning",
            NotificationKind::Info => "info",
        }
    }

    pub fn all() -> &'static [NotificationKind] {
        &[
            NotificationKind::Success,
            NotificationKind::Error,
            NotificationKind::Warning,
            NotificationKind::Info,
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub message: String,
}

#[derive(Debug, Clone, Default)]
pub struct NotificationCenter {
    current: Option<Notification>,
    next_id: u64,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// Show `message`, replacing whatever is visible. Returns the new notification.
    pub fn show(&mut self, kind: NotificationKind, message: impl Into<String>) -> &Notification {
        self.next_id += 1;
        self.current.insert(Notification {
            id: self.next_id,
            kind,
            message: message.into(),
        })
    }

    /// Remove notification `id` if it is still the visible one.
    pub fn dismiss(&mut self, id: u64) -> bool {
        if self.current.as_ref().is_some_and(|n| n.id == id) {
            self.current = None;
            true
        } else {
            false
        }
    }

    pub fn clear(&mut self) -> bool {
        self.current.take().is_some()
    }
}

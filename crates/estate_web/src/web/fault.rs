use thiserror::Error;

/// An uncaught script error reported by the window `error` event.
#[derive(Debug, Error)]
#[error("uncaught page error: {0}")]
pub(super) struct PageFault(pub(super) String);

impl From<&web_sys::ErrorEvent> for PageFault {
    fn from(ev: &web_sys::ErrorEvent) -> Self {
        let msg = ev.message();
        if msg.is_empty() {
            PageFault("(no message)".to_string())
        } else {
            PageFault(msg)
        }
    }
}

use std::time::Duration;

use estate::scheduler::{ScheduledTask, Scheduler};
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use super::Store;

/// `setTimeout`-backed scheduler. The callback fires the task on the shared
/// store once the page's event loop gets to it.
pub(super) struct WebScheduler {
    pub(super) store: StoredValue<Option<Store>, LocalStorage>,
}

impl Scheduler for WebScheduler {
    fn schedule(&mut self, delay: Duration, task: ScheduledTask) {
        let store = self.store;
        let cb = Closure::once_into_js(move || {
            store.update_value(|s| {
                if let Some(s) = s.as_mut() {
                    s.fire(task);
                }
            });
        });

        let Some(window) = web_sys::window() else {
            web_sys::console::error_1(&"no window; timer dropped".into());
            return;
        };
        let ms = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
        if window
            .set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), ms)
            .is_err()
        {
            web_sys::console::error_1(&"setTimeout failed; timer dropped".into());
        }
    }
}

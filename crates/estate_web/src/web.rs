use estate::config::StoreConfig;
use estate::order::QuantityInput;
use estate::storefront::{StoreEvent, Storefront};
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::ui_model::PageModel;

mod fault;
mod scheduler;
mod view;

use fault::PageFault;
use scheduler::WebScheduler;
use view::SignalView;

type Store = Storefront<SignalView, WebScheduler>;

pub fn start() {
    mount_to_body(|| view! { <App /> });
}

#[component]
fn App() -> impl IntoView {
    let config = StoreConfig::default();
    let model = RwSignal::new(PageModel::new(&config));
    let store: StoredValue<Option<Store>, LocalStorage> = StoredValue::new_local(None);

    let listing = config.listing.clone();
    let wallets = config.wallets.clone();
    let presets = config.quantity_presets.clone();

    let mut storefront = Storefront::new(config, SignalView { model }, WebScheduler { store });
    storefront.start();
    store.set_value(Some(storefront));

    let dispatch = move |event: StoreEvent| {
        store.update_value(|s| {
            if let Some(s) = s.as_mut() {
                s.dispatch(event);
            }
        });
    };

    let _ = window_event_listener(ev::keydown, move |e| {
        if e.key() == "Escape" {
            dispatch(StoreEvent::EscapePressed);
        }
    });
    let _ = window_event_listener(ev::error, move |e| {
        let fault = match e.dyn_ref::<web_sys::ErrorEvent>() {
            Some(err) => PageFault::from(err),
            None => PageFault("(unknown)".to_string()),
        };
        web_sys::console::error_1(&fault.to_string().into());
        store.update_value(|s| {
            if let Some(s) = s.as_mut() {
                s.report_fault(&fault);
            }
        });
    });

    let wallet_options = wallets
        .into_iter()
        .map(|name| {
            let label = name.clone();
            let loading = name.clone();
            view! {
                <button
                    class=move || {
                        if model.with(|m| m.pending_wallet.as_deref() == Some(loading.as_str())) {
                            "wallet-option loading"
                        } else {
                            "wallet-option"
                        }
                    }
                    on:click=move |_| dispatch(StoreEvent::WalletChosen(name.clone()))
                >
                    {label}
                </button>
            }
        })
        .collect_view();

    let preset_buttons = presets
        .into_iter()
        .map(|q| {
            view! {
                <button
                    class=move || {
                        if model.with(|m| m.quantity == q) { "qty-preset active" } else { "qty-preset" }
                    }
                    on:click=move |_| dispatch(StoreEvent::QuickSelect(q))
                >
                    {q.to_string()}
                </button>
            }
        })
        .collect_view();

    let details = listing.properties.clone();

    view! {
        <header class="topbar">
            <div class="brand">"Estate"</div>
            <button
                class=move || if model.with(|m| m.wallet_connected) { "connect-wallet connected" } else { "connect-wallet" }
                on:click=move |_| dispatch(StoreEvent::ConnectWalletClicked)
            >
                {move || model.with(|m| m.wallet_label.clone())}
            </button>
        </header>

        <main class="listing">
            <img class="listing-image" src=listing.image.clone() alt=details.kind.clone() />
            <section class="listing-info">
                <div class="token-id">{listing.token_id.clone()}</div>
                <div class="contract" title=listing.contract.clone()>{listing.short_contract()}</div>
                <ul class="property-details">
                    <li>{details.location}</li>
                    <li>{details.size}</li>
                    <li>{format!("{} bd / {} ba", details.bedrooms, details.bathrooms)}</li>
                    <li>{details.kind}</li>
                </ul>

                <div class="price-block">
                    <span class="eth-price">{move || model.with(|m| m.eth_price.clone())}</span>
                    <span class="usd-price">{move || model.with(|m| m.usd_price.clone())}</span>
                    <span class=move || model.with(|m| m.price_change_class())>
                        {move || model.with(|m| m.price_change.clone())}
                    </span>
                </div>

                <div class="quantity">
                    <button
                        prop:disabled=move || model.with(|m| m.at_min)
                        on:click=move |_| dispatch(StoreEvent::Decrement)
                    >
                        "−"
                    </button>
                    <input
                        type="number"
                        min="1"
                        max="1000"
                        prop:value=move || model.with(|m| m.quantity_text.clone())
                        on:change=move |e| {
                            let raw = event_target_value(&e);
                            dispatch(StoreEvent::QuantityEntered(QuantityInput::Text(raw)));
                        }
                    />
                    <button
                        prop:disabled=move || model.with(|m| m.at_max)
                        on:click=move |_| dispatch(StoreEvent::Increment)
                    >
                        "+"
                    </button>
                </div>
                <div class="qty-presets">{preset_buttons}</div>

                <dl class="summary">
                    <dt>"Subtotal"</dt>
                    <dd>{move || model.with(|m| m.subtotal.clone())}</dd>
                    <dt>"Platform fee"</dt>
                    <dd>{move || model.with(|m| m.platform_fee.clone())}</dd>
                    <dt>"Total"</dt>
                    <dd class="total">{move || model.with(|m| m.total.clone())}</dd>
                </dl>

                <div class="actions">
                    <button class="preview-btn" on:click=move |_| dispatch(StoreEvent::PreviewClicked)>
                        "Preview"
                    </button>
                    <button
                        class="purchase-btn"
                        prop:disabled=move || model.with(|m| m.purchase_disabled())
                        on:click=move |_| dispatch(StoreEvent::PurchaseClicked)
                    >
                        {move || model.with(|m| m.purchase_label())}
                    </button>
                </div>
            </section>
        </main>

        <div class=move || PageModel::modal_class(model.with(|m| m.wallet_modal_open))>
            <div class="modal-backdrop" on:click=move |_| dispatch(StoreEvent::CloseWalletModal)></div>
            <div class="modal-content">
                <button class="modal-close" on:click=move |_| dispatch(StoreEvent::CloseWalletModal)>
                    "×"
                </button>
                <h2>"Connect Wallet"</h2>
                <div class="wallet-options">{wallet_options}</div>
            </div>
        </div>

        <div class=move || PageModel::modal_class(model.with(|m| m.success_modal_open))>
            <div class="modal-backdrop" on:click=move |_| dispatch(StoreEvent::CloseSuccessModal)></div>
            <div class="modal-content">
                <h2>"Purchase Successful!"</h2>
                <p>
                    {move || {
                        model.with(|m| match m.last_receipt {
                            Some(r) => format!("You now own {} token(s) of this property.", r.quantity),
                            None => String::new(),
                        })
                    }}
                </p>
                <button class="view-collection" on:click=move |_| dispatch(StoreEvent::ViewCollectionClicked)>
                    "View Collection"
                </button>
                <button class="modal-close" on:click=move |_| dispatch(StoreEvent::CloseSuccessModal)>
                    "Close"
                </button>
            </div>
        </div>

        <Show when=move || model.with(|m| m.toast.is_some())>
            <div class=move || model.with(|m| m.toast.as_ref().map(|t| t.class()).unwrap_or_default())>
                <span>{move || model.with(|m| m.toast.as_ref().map(|t| t.message.clone()).unwrap_or_default())}</span>
                <button
                    class="notification-close"
                    title="Dismiss"
                    on:click=move |_| dispatch(StoreEvent::DismissNotification)
                >
                    "×"
                </button>
            </div>
        </Show>
    }
}

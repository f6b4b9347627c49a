//! Product catalog page.

use leptos::{logging, prelude::*, task};

use storefront::{
    api::{ApiConfig, HttpStorefrontApi},
    catalog::{
        CatalogRow, DEFAULT_CUSTOMER_NAME, QuantityInput, Submission, confirmation, load_catalog,
        submit_order,
    },
    load::LoadState,
    products::Product,
};

fn alert(message: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };

    if window.alert_with_message(message).is_err() {
        logging::warn!("failed to show confirmation: {message}");
    }
}

fn submit_disabled(submission: &Submission, input: &QuantityInput) -> bool {
    !submission.can_submit(input)
}

fn submit_label(submission: &Submission) -> &'static str {
    if submission.is_in_flight() {
        "Ordering…"
    } else {
        "Order"
    }
}

#[component]
fn ProductRow(product: Product, config: ApiConfig) -> impl IntoView {
    let quantity = RwSignal::new(QuantityInput::default());
    let submission = RwSignal::new(Submission::Idle);

    let product_id = product.id;
    let row = CatalogRow::from(&product);
    let input_id = format!("qty-{product_id}");
    let input_label = format!("Quantity of {}", row.name);

    let on_submit = move |_| {
        let Ok(requested) = quantity.with(QuantityInput::quantity) else {
            return;
        };

        if submission.with(Submission::is_in_flight) {
            return;
        }

        submission.set(Submission::InFlight);

        let api = HttpStorefrontApi::new(config.clone());

        task::spawn_local(async move {
            let result = submit_order(&api, DEFAULT_CUSTOMER_NAME, product_id, requested).await;

            if let Ok(created) = &result {
                alert(&confirmation(created));
            }

            submission.set(Submission::from_result(result));
        });
    };

    view! {
        <li class="product-row">
            <span class="product-summary">{row.to_string()}</span>
            <br />
            <label class="sr-only" for=input_id.clone()>
                {input_label}
            </label>
            <input
                id=input_id
                type="number"
                min="1"
                class="quantity-input"
                prop:value=move || quantity.with(|input| input.raw().to_string())
                on:input=move |event| {
                    let raw = event_target_value(&event);
                    quantity.update(|input| input.set(raw));
                }
            />
            <button
                type="button"
                disabled=move || submission.with(|state| quantity.with(|input| submit_disabled(state, input)))
                on:click=on_submit
            >
                {move || submission.with(submit_label)}
            </button>
            {move || {
                quantity
                    .with(QuantityInput::quantity)
                    .err()
                    .map(|error| view! { <p class="error">{error.to_string()}</p> })
            }}
            {move || {
                submission
                    .with(Submission::message)
                    .map(|message| view! { <p class="submission-message" role="status">{message}</p> })
            }}
        </li>
    }
}

/// Lists products and lets the user order any of them.
#[component]
pub fn CatalogPage(config: ApiConfig) -> impl IntoView {
    let products = RwSignal::new(LoadState::<Vec<Product>>::Awaiting);

    let fetch_config = config.clone();

    task::spawn_local(async move {
        let api = HttpStorefrontApi::new(fetch_config);

        products.set(load_catalog(&api).await);
    });

    view! {
        <section>
            <h1>"Product Catalog"</h1>
            {move || match products.get() {
                LoadState::Awaiting => view! { <p role="status">"Loading products…"</p> }.into_any(),
                LoadState::Failed(error) => {
                    view! { <p class="error" role="alert">{format!("Could not load products: {error}")}</p> }
                        .into_any()
                }
                LoadState::Ready(items) => {
                    let row_config = config.clone();

                    view! {
                        <ul>
                            {items
                                .into_iter()
                                .map(|product| {
                                    view! { <ProductRow product=product config=row_config.clone() /> }
                                })
                                .collect_view()}
                        </ul>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}

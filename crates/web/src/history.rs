//! Order history page.

use leptos::{logging, prelude::*, task};

use storefront::{
    api::{ApiConfig, HttpStorefrontApi, StorefrontApi},
    history::{OrderHistory, OrderSummary},
    load::LoadState,
};

fn log_failure<T>(what: &str, state: &LoadState<T>) {
    if let Some(error) = state.error() {
        logging::warn!("failed to load {what}: {error}");
    }
}

fn orders_notice(history: &OrderHistory) -> Option<String> {
    history
        .orders
        .error()
        .map(|error| format!("Could not load orders: {error}"))
}

fn products_notice(history: &OrderHistory) -> Option<String> {
    history
        .products
        .error()
        .map(|error| format!("Product names unavailable: {error}"))
}

#[component]
fn OrderCard(summary: OrderSummary) -> impl IntoView {
    let title = summary.title();
    let status = format!("Status: {}", summary.status);
    let total = format!("Total: {}", summary.total_price);

    view! {
        <div class="order-card">
            <strong>{title}</strong>
            <br />
            {summary.date.map(|date| view! { <div>{format!("Date: {date}")}</div> })}
            {status}
            <br />
            {total}
            <br />
            <ul>
                {summary
                    .lines
                    .into_iter()
                    .map(|line| view! { <li>{line.to_string()}</li> })
                    .collect_view()}
            </ul>
        </div>
    }
}

/// Lists past orders with each line resolved to its product name.
#[component]
pub fn OrderHistoryPage(config: ApiConfig) -> impl IntoView {
    let history = RwSignal::new(OrderHistory::default());

    // Orders and products resolve independently; names fill in once both have.
    let orders_api = HttpStorefrontApi::new(config.clone());
    task::spawn_local(async move {
        let orders = LoadState::from_result(orders_api.list_orders().await);
        log_failure("orders", &orders);

        history.update(|state| state.orders = orders);
    });

    let products_api = HttpStorefrontApi::new(config);
    task::spawn_local(async move {
        let products = LoadState::from_result(products_api.list_products().await);
        log_failure("products", &products);

        history.update(|state| state.products = products);
    });

    let summaries = Memo::new(move |_| history.with(OrderHistory::summaries));

    view! {
        <section>
            <h1>"Order History"</h1>
            {move || {
                history
                    .with(|state| state.orders.is_awaiting())
                    .then(|| view! { <p role="status">"Loading orders…"</p> })
            }}
            {move || {
                history
                    .with(orders_notice)
                    .map(|notice| view! { <p class="error" role="alert">{notice}</p> })
            }}
            {move || {
                history
                    .with(products_notice)
                    .map(|notice| view! { <p class="error" role="alert">{notice}</p> })
            }}
            {move || {
                summaries
                    .get()
                    .into_iter()
                    .map(|summary| view! { <OrderCard summary=summary /> })
                    .collect_view()
            }}
        </section>
    }
}

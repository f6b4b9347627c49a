//! Storefront browser application

use leptos::prelude::*;
use leptos_router::{
    components::{A, Route, Router, Routes},
    path,
};

use storefront::api::ApiConfig;

mod catalog;
mod history;

/// API base URL baked in at build time, e.g. `STOREFRONT_API_URL=https://shop.example.com trunk build`.
const API_URL: Option<&str> = option_env!("STOREFRONT_API_URL");

const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Main storefront shell.
#[component]
fn App() -> impl IntoView {
    match ApiConfig::new(API_URL.unwrap_or(DEFAULT_API_URL)) {
        Ok(config) => {
            let catalog_config = config.clone();
            let history_config = config;

            view! {
                <Router>
                    <main>
                        <nav>
                            <A href="/">"Products"</A>
                            " | "
                            <A href="/orders">"Orders"</A>
                        </nav>
                        <Routes fallback=|| view! { <p>"Page not found."</p> }>
                            <Route
                                path=path!("/")
                                view=move || {
                                    view! { <catalog::CatalogPage config=catalog_config.clone() /> }
                                }
                            />
                            <Route
                                path=path!("/orders")
                                view=move || {
                                    view! {
                                        <history::OrderHistoryPage config=history_config.clone() />
                                    }
                                }
                            />
                        </Routes>
                    </main>
                </Router>
            }
            .into_any()
        }
        Err(error) => view! {
            <main>
                <h1>"Storefront"</h1>
                <p class="error" role="alert">{error.to_string()}</p>
            </main>
        }
        .into_any(),
    }
}

fn main() {
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(App);
}

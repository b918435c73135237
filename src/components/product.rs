// components/product.rs - Product listing components
//
// One GET at mount, then a static list. A failed load renders the same
// empty list as a zero-product catalog; the detail only reaches the
// console.

use leptos::prelude::*;

use crate::api::{abort, ApiClient};
use crate::components::common::Loading;
use crate::model::{ListState, Product};

/// List of products fetched from the read endpoint at mount.
#[component]
pub fn ProductsList() -> impl IntoView {
    let state = RwSignal::new(ListState::Loading);

    let (handle, token) = abort::pair();
    let in_flight = StoredValue::new(Some(handle));

    on_cleanup(move || {
        in_flight.update_value(|handle| {
            if let Some(handle) = handle.take() {
                handle.abort();
            }
        });
    });

    let client = ApiClient::new();
    leptos::task::spawn_local(async move {
        let outcome = client.fetch_products(token).await;
        if let Err(err) = &outcome {
            log::error!("Error al cargar products: {err}");
        }
        if let Some(next) = ListState::after_load(outcome) {
            state.try_set(next);
        }
    });

    view! {
        {move || {
            let current = state.get();
            if current.is_loading() {
                view! { <Loading message="Cargando products..." /> }.into_any()
            } else {
                let products = current.products().to_vec();
                view! {
                    <ul class="divide-y divide-gray-100">
                        <For
                            each=move || products.clone()
                            key=|product| product.id
                            children=move |product: Product| {
                                view! { <ProductRow product /> }
                            }
                        />
                    </ul>
                }
                .into_any()
            }
        }}
    }
}

/// Single listing entry showing name, price and stock.
#[component]
fn ProductRow(product: Product) -> impl IntoView {
    view! {
        <li class="flex items-center gap-2 py-2 text-gray-800">
            <strong>{product.name}</strong>
            " - "
            <strong>{format!("{:.2}", product.price)}</strong>
            " - "
            <span>{product.stock}</span>
        </li>
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_price_column_formatting() {
        let prices = [(9.99, "9.99"), (10.0, "10.00"), (0.5, "0.50")];
        for (price, expected) in prices {
            assert_eq!(format!("{:.2}", price), expected);
        }
    }
}

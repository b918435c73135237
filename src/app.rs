// app.rs - Root application component

use leptos::prelude::*;
use leptos_meta::*;

use crate::pages::HomePage;

/// Root application component.
///
/// Sets up the meta context and renders the single page. There is no
/// router: both views live on the same page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Catálogo de productos" />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />

        <HomePage />
    }
}

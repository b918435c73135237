// pages/home.rs - Home page component
//
// Lays out the two independent product components. They share nothing:
// each owns its state and talks to its own endpoint.

use leptos::prelude::*;

use crate::components::{AddProductForm, ProductsList};

/// Main page: submission form above the product listing.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-50 font-sans text-gray-900">
            <header class="bg-white shadow-sm border-b border-gray-200">
                <div class="max-w-3xl mx-auto px-4 h-16 flex items-center">
                    <h1 class="text-xl font-bold text-gray-900">
                        "Catálogo de productos"
                    </h1>
                </div>
            </header>

            <main class="max-w-3xl mx-auto px-4 py-8 space-y-8">
                <section class="bg-white rounded-2xl shadow-sm p-6 border border-gray-100">
                    <AddProductForm />
                </section>

                <section class="bg-white rounded-2xl shadow-sm p-6 border border-gray-100">
                    <h2 class="text-xl font-bold text-gray-900 mb-4">"Productos"</h2>
                    <ProductsList />
                </section>
            </main>
        </div>
    }
}

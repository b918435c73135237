// components/form.rs - Product submission form
//
// Controlled inputs over two text signals plus a SubmitPhase machine.
// One POST per submission; the in-flight request is aborted if the
// component unmounts before the response lands.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::api::{abort, ApiClient};
use crate::components::common::TextInput;
use crate::model::{FailureKind, NewProduct, SubmitPhase};

/// Form that submits a new product to the write endpoint.
///
/// The status message below the button reports the outcome of the last
/// attempt; on success both fields reset, on failure they stay put.
#[component]
pub fn AddProductForm() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());
    let phase = RwSignal::new(SubmitPhase::Idle);

    let in_flight = StoredValue::new(None::<abort::AbortHandle>);

    on_cleanup(move || {
        in_flight.update_value(|handle| {
            if let Some(handle) = handle.take() {
                handle.abort();
            }
        });
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        if phase.get_untracked().is_submitting() {
            return;
        }

        let product =
            match NewProduct::from_fields(&name.get_untracked(), &price.get_untracked()) {
                Ok(product) => product,
                Err(err) => {
                    log::error!("Error al enviar: {err}");
                    phase.set(SubmitPhase::Failed(FailureKind::Rejected));
                    return;
                }
            };

        phase.set(SubmitPhase::Submitting);
        let (handle, token) = abort::pair();
        in_flight.set_value(Some(handle));

        let client = ApiClient::new();
        leptos::task::spawn_local(async move {
            let outcome = client.create_product(&product, token).await;
            if let Err(err) = &outcome {
                log::error!("Error al enviar: {err}");
            }
            let Some(next) = SubmitPhase::after_submit(&outcome) else {
                return;
            };
            if next.clears_fields() {
                name.try_set(String::new());
                price.try_set(String::new());
            }
            phase.try_set(next);
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-4">
            <h2 class="text-xl font-bold text-gray-900">"Agregar producto"</h2>

            <TextInput value=name placeholder="Nombre" required=true />
            <TextInput value=price placeholder="Precio" input_type="number" required=true />

            <button
                type="submit"
                class="px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 \
                       transition-colors disabled:bg-gray-400 disabled:cursor-not-allowed \
                       font-medium shadow-sm"
                disabled=move || phase.get().is_submitting()
            >
                "Agregar"
            </button>

            {move || {
                phase.get().status_message().map(|message| view! {
                    <p class="text-sm text-gray-700">{message}</p>
                })
            }}
        </form>
    }
}

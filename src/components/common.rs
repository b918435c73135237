// components/common.rs - Reusable UI components
//
// Small, stateless components that receive all data via props.

use leptos::prelude::*;

/// Loading placeholder.
#[component]
pub fn Loading(
    /// Placeholder text shown while waiting
    #[prop(default = "Cargando...")]
    message: &'static str,
) -> impl IntoView {
    view! {
        <p class="text-gray-500 font-medium animate-pulse">{message}</p>
    }
}

/// Text input bound to a signal.
///
/// Numeric inputs get `step="any"` so decimal prices pass the browser's
/// own constraint check.
#[component]
pub fn TextInput(
    /// The current value
    value: RwSignal<String>,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Input type (text, number, ...)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Whether the field is required
    #[prop(default = false)]
    required: bool,
) -> impl IntoView {
    let step = (input_type == "number").then_some("any");
    let class = "w-full px-4 py-2 border border-gray-300 rounded-lg \
                 focus:ring-2 focus:ring-blue-500 focus:border-transparent \
                 outline-none transition-shadow shadow-sm";

    view! {
        <input
            type=input_type
            placeholder=placeholder
            required=required
            step=step
            class=class
            prop:value=move || value.get()
            on:input=move |ev| {
                value.set(event_target_value(&ev));
            }
        />
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_step_attribute_only_on_numeric_inputs() {
        for (input_type, expected) in [("number", Some("any")), ("text", None), ("search", None)] {
            let step = (input_type == "number").then_some("any");
            assert_eq!(step, expected, "input type {input_type}");
        }
    }
}

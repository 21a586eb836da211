use leptos::prelude::*;
use tw_merge::tw_merge;

/// Text input wired to a `RwSignal<String>`.
#[component]
pub fn Input(
    #[prop(into, optional)] class: String,
    #[prop(into, default = "text")] r#type: &'static str,
    #[prop(into, optional)] placeholder: String,
    #[prop(into, optional)] id: String,
    #[prop(optional)] required: bool,
    #[prop(into, optional)] autocomplete: String,

    // Manual wiring instead of `bind:value`; stable across Leptos releases.
    #[prop(into)] bind_value: RwSignal<String>,
) -> impl IntoView {
    let merged_class = tw_merge!(
        "w-full rounded-lg border border-gray-300 px-4 py-3 outline-none transition-all placeholder:text-gray-400",
        "focus:border-transparent focus:ring-2 focus:ring-blue-500",
        "disabled:cursor-not-allowed disabled:opacity-50",
        class
    );

    view! {
        <input
            type=r#type
            class=merged_class
            placeholder=placeholder
            id=id
            required=required
            autocomplete=autocomplete
            prop:value=move || bind_value.get()
            on:input=move |ev| bind_value.set(event_target_value(&ev))
        />
    }
}

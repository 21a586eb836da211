use icons::X;
use leptos::prelude::*;
use leptos_ui::clx;

mod components {
    use super::*;
    clx! {Alert, div, "relative w-full rounded-xl border px-4 py-3 text-sm"}
    clx! {AlertDescription, p, "text-sm font-medium leading-relaxed"}
}

pub use components::*;

/// Dismissible, non-blocking error banner.
///
/// Renders nothing while `message` is `None`.
#[component]
pub fn ErrorBanner(
    #[prop(into)] message: Signal<Option<String>>,
    #[prop(into)] on_dismiss: Callback<()>,
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    let class = StoredValue::new(class);

    move || {
        message.get().map(|text| {
            view! {
                <Alert class=format!(
                    "flex items-start justify-between gap-3 border-red-200 bg-red-50 {}",
                    class.get_value(),
                )>
                    <AlertDescription class="text-red-700">{text}</AlertDescription>
                    <button
                        type="button"
                        class="text-red-400 hover:text-red-600"
                        aria-label="Dismiss"
                        on:click=move |_| on_dismiss.run(())
                    >
                        <X class="size-4" />
                    </button>
                </Alert>
            }
        })
    }
}

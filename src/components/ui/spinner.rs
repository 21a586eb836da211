use icons::{Loader, RefreshCw};
use leptos::prelude::*;
use tw_merge::tw_merge;

#[component]
pub fn Spinner(#[prop(into, optional)] class: String) -> impl IntoView {
    let merged_class = tw_merge!("size-4 animate-spin", class);

    view! { <Loader class=merged_class attr:role="status" attr:aria-label="Loading" /> }
}

/// Refresh glyph that spins while `spinning` is true.
#[component]
pub fn RefreshIcon(
    #[prop(into)] spinning: Signal<bool>,
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    let icon_class = tw_merge!("size-4", class);

    view! {
        <span class="inline-flex" class:animate-spin=move || spinning.get()>
            <RefreshCw class=icon_class />
        </span>
    }
}

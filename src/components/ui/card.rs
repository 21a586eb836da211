use leptos::prelude::*;
use leptos_ui::clx;

mod components {
    use super::*;
    clx! {Card, div, "rounded-xl border border-gray-100 bg-white shadow-lg"}
    clx! {CardHeader, div, "flex flex-col gap-1.5 px-6 pt-6"}
    clx! {CardTitle, h2, "text-xl font-semibold text-gray-900"}
    clx! {CardDescription, p, "text-sm text-gray-600"}
    clx! {CardContent, div, "p-6"}
}

pub use components::*;

/// One of the dashboard's summary tiles.
#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    /// Background/foreground classes for the icon bubble.
    #[prop(into)] accent: String,
    children: Children,
) -> impl IntoView {
    view! {
        <Card class="p-6">
            <div class="flex items-center justify-between">
                <div>
                    <p class="text-sm font-medium text-gray-600">{label}</p>
                    <p class="text-3xl font-bold text-gray-900">{move || value.get()}</p>
                </div>
                <div class=format!("flex h-12 w-12 items-center justify-center rounded-full {accent}")>
                    {children()}
                </div>
            </div>
        </Card>
    }
}

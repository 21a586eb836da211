use crate::api::EnvConfig;
use crate::pages::{AdminRoute, HomePage, LoginRoute, SiteHeader};
use crate::state::session::{AnonymousReason, Session};
use crate::state::{AppContext, AppState};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

#[component]
pub(crate) fn App(config: EnvConfig) -> impl IntoView {
    let state = AppState::new(&config);
    let session = state.session;
    let api_client = state.api_client;
    provide_context(AppContext(state));

    // One status check per page load; no polling, no retry.
    Effect::new(move |_| {
        let api_client = api_client.get_value();
        spawn_local(async move {
            let next = Session::from_status_check(api_client.auth_status().await);
            match &next {
                Session::Authenticated(user) => {
                    log::info!("session active for {}", user.display_name())
                }
                Session::Anonymous(AnonymousReason::CheckFailed(cause)) => {
                    log::warn!("could not verify login status: {cause}")
                }
                Session::Anonymous(reason) => log::info!("not signed in ({reason:?})"),
                Session::Loading => {}
            }
            session.set(next);
        });
    });

    // IMPORTANT:
    // - Leptos CSR requires the `csr` feature on `leptos`.
    // - router hooks require a <Router> context.
    view! {
        <Show
            when=move || !session.get().is_loading()
            fallback=move || view! {
                <div class="flex min-h-screen items-center justify-center">
                    {move || session.with(|s| s.notice()).unwrap_or_default()}
                </div>
            }
        >
            <Router>
                <div class="min-h-screen bg-gray-50">
                    <SiteHeader />
                    <Routes fallback=|| view! { <Redirect path="/" /> }>
                        <Route path=path!("") view=HomePage />
                        <Route path=path!("login") view=LoginRoute />
                        <Route path=path!("admin") view=AdminRoute />
                    </Routes>
                </div>
            </Router>
        </Show>
    }
}

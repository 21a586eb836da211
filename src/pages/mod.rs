use crate::components::hooks::use_copy_echo;
use crate::components::ui::{
    Button, ButtonSize, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle,
    ErrorBanner, Input, Label, RefreshIcon, Spinner, StatCard,
};
use crate::models::ShortUrlRecord;
use crate::state::dashboard::Dashboard;
use crate::state::session::Session;
use crate::state::shorten::ShortenForm;
use crate::state::AppContext;
use icons::{
    Activity, Check, Copy as CopyIcon, ExternalLink, Eye, Link as LinkIcon, LogOut, Search, User,
    Zap,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::{Redirect, A};
use leptos_router::hooks::{use_location, use_navigate};

#[component]
pub fn SiteHeader() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let session = app_state.0.session;
    let shell_error = app_state.0.shell_error;
    let api_client = app_state.0.api_client;
    let location = use_location();
    let navigate = StoredValue::new(use_navigate());
    let logging_out: RwSignal<bool> = RwSignal::new(false);

    let on_logout = move |_| {
        if logging_out.get_untracked() {
            return;
        }
        logging_out.set(true);
        shell_error.set(None);

        let api_client = api_client.get_value();
        spawn_local(async move {
            let result = api_client.logout().await;
            if let Err(e) = &result {
                log::error!("logout failed: {e} ({:?})", e.detail);
            }
            let (next, banner) = session.get_untracked().after_logout(result);
            let signed_out = !next.is_authenticated();
            session.set(next);
            shell_error.set(banner);
            if signed_out {
                log::info!("signed out");
                navigate.with_value(|nav| nav("/", Default::default()));
            }
            logging_out.set(false);
        });
    };

    let on_dashboard = move || location.pathname.get() == "/admin";

    view! {
        <header class="border-b border-gray-200 bg-white px-6 py-4 shadow-sm">
            <div class="mx-auto flex max-w-6xl items-center justify-between">
                <A href="/" attr:class="flex items-center gap-2 transition-opacity hover:opacity-80">
                    <LinkIcon class="size-6 text-blue-600" />
                    <span class="text-xl font-bold text-gray-800">"ShortURL"</span>
                </A>

                <nav class="flex items-center gap-4">
                    <Show
                        when=move || session.get().is_authenticated()
                        fallback=|| view! {
                            <A
                                href="/login"
                                attr:class="flex items-center gap-1 rounded-lg bg-blue-600 px-4 py-2 font-medium text-white transition-colors hover:bg-blue-700"
                            >
                                <User class="size-4" />
                                <span>"Admin Login"</span>
                            </A>
                        }
                    >
                        <A
                            href="/admin"
                            attr:class=move || {
                                if on_dashboard() {
                                    "flex items-center gap-1 rounded-lg bg-blue-50 px-3 py-2 font-medium text-blue-600"
                                } else {
                                    "flex items-center gap-1 rounded-lg px-3 py-2 text-gray-600 transition-colors hover:bg-gray-50 hover:text-blue-600"
                                }
                            }
                        >
                            <Activity class="size-4" />
                            <span>"Dashboard"</span>
                        </A>

                        <Button
                            variant=ButtonVariant::Danger
                            size=ButtonSize::Sm
                            attr:r#type="button"
                            attr:disabled=move || logging_out.get()
                            on:click=on_logout
                        >
                            <LogOut class="size-4" />
                            <span>"Logout"</span>
                        </Button>
                    </Show>
                </nav>
            </div>

            <div class="mx-auto max-w-6xl">
                <ErrorBanner
                    class="mt-4"
                    message=shell_error
                    on_dismiss=move |_: ()| shell_error.set(None)
                />
            </div>
        </header>
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let api_client = expect_context::<AppContext>().0.api_client;
    let form: RwSignal<ShortenForm> = RwSignal::new(ShortenForm::default());
    let (copy, echo) = use_copy_echo();

    // `Input` binds to a plain string signal; mirror it into the form state.
    let url_input: RwSignal<String> = RwSignal::new(String::new());
    Effect::new(move |_| {
        let value = url_input.get();
        form.update(|f| f.input = value);
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let current = url_input.get_untracked();
        let Some(pending) = form
            .try_update(|f| {
                f.input = current;
                f.begin_submit()
            })
            .flatten()
        else {
            return;
        };

        let api_client = api_client.get_value();
        spawn_local(async move {
            let result = api_client.shorten(&pending.url).await;
            match &result {
                Ok(short) => log::info!("shortened {} -> {short}", pending.url),
                Err(e) => log::warn!("shorten failed: {e} ({:?})", e.detail),
            }
            let applied = form
                .try_update(|f| f.finish_submit(pending.id, result))
                .unwrap_or(false);
            if !applied {
                log::debug!("dropped stale shorten response #{}", pending.id);
            }
        });
    };

    let on_reset = move |_| {
        form.update(|f| f.reset());
        url_input.set(String::new());
        echo.update(|e| e.clear());
    };

    let busy = move || form.with(|f| f.busy);
    let short_url = move || form.with(|f| f.short_url.clone());

    view! {
        <main class="mx-auto max-w-4xl px-6 py-16">
            <div class="mb-12 text-center">
                <h1 class="mb-6 text-5xl font-bold leading-tight text-gray-900">
                    "Shorten Your URLs"
                    <span class="block text-blue-600">"In Seconds"</span>
                </h1>
                <p class="mx-auto max-w-2xl text-xl text-gray-600">
                    "Transform your long, complicated URLs into short, shareable links that are easy to remember and share"
                </p>
            </div>

            <Card class="rounded-2xl p-8 shadow-xl">
                <form class="space-y-6" on:submit=on_submit>
                    <div>
                        <Label html_for="original-url">"Enter your long URL"</Label>
                        <Input
                            id="original-url"
                            r#type="url"
                            placeholder="https://example.com/your-very-long-url-that-needs-shortening"
                            bind_value=url_input
                            required=true
                            class="rounded-xl py-4 text-lg"
                        />
                    </div>

                    <div class="flex gap-4">
                        <Button
                            size=ButtonSize::Lg
                            class="flex-1 font-semibold"
                            attr:r#type="submit"
                            attr:disabled=move || !form.with(|f| f.can_submit())
                        >
                            <Show when=busy fallback=|| ().into_view()>
                                <Spinner />
                            </Show>
                            {move || if busy() { "Shortening..." } else { "Shorten URL" }}
                        </Button>

                        <Show when=move || form.with(|f| f.has_outcome()) fallback=|| ().into_view()>
                            <Button
                                variant=ButtonVariant::Outline
                                size=ButtonSize::Lg
                                attr:r#type="button"
                                on:click=on_reset
                            >
                                "Reset"
                            </Button>
                        </Show>
                    </div>
                </form>

                <ErrorBanner
                    class="mt-6"
                    message=Signal::derive(move || form.with(|f| f.error.clone()))
                    on_dismiss=move |_: ()| form.update(|f| f.dismiss_error())
                />

                {move || short_url().map(|short| {
                    let copied = {
                        let short = short.clone();
                        move || echo.with(|e| e.is_copied(&short))
                    };
                    let to_copy = short.clone();
                    view! {
                        <div class="mt-6 rounded-xl border border-green-200 bg-green-50 p-6">
                            <div class="mb-4 flex items-center justify-between">
                                <h3 class="text-lg font-semibold text-green-800">
                                    "Your shortened URL is ready!"
                                </h3>
                                <div class="flex items-center text-green-600">
                                    <Check class="mr-1 size-5" />
                                    <span class="text-sm">"Success"</span>
                                </div>
                            </div>

                            <div class="flex items-center justify-between rounded-lg border border-green-200 bg-white p-4">
                                <div class="mr-4 flex-1">
                                    <p class="mb-1 text-sm text-gray-600">"Shortened URL:"</p>
                                    <p class="break-all font-mono text-lg text-gray-900">{short}</p>
                                </div>
                                <Button
                                    attr:r#type="button"
                                    on:click=move |_| copy.run(to_copy.clone())
                                >
                                    <Show
                                        when=copied
                                        fallback=|| view! { <CopyIcon class="size-4" /><span>"Copy"</span> }
                                    >
                                        <Check class="size-4" />
                                        <span>"Copied!"</span>
                                    </Show>
                                </Button>
                            </div>
                        </div>
                    }
                })}
            </Card>

            <div class="mt-12 grid grid-cols-1 gap-8 md:grid-cols-3">
                <FeatureBlurb
                    title="Lightning Fast"
                    text="Generate short URLs instantly with just one click"
                    accent="bg-blue-100 text-blue-600"
                >
                    <Zap class="size-6" />
                </FeatureBlurb>
                <FeatureBlurb
                    title="Easy to Share"
                    text="Copy and share your shortened URLs anywhere"
                    accent="bg-green-100 text-green-600"
                >
                    <CopyIcon class="size-6" />
                </FeatureBlurb>
                <FeatureBlurb
                    title="Always Working"
                    text="Reliable links that work 24/7 without issues"
                    accent="bg-purple-100 text-purple-600"
                >
                    <ExternalLink class="size-6" />
                </FeatureBlurb>
            </div>
        </main>
    }
}

#[component]
fn FeatureBlurb(
    title: &'static str,
    text: &'static str,
    accent: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="p-6 text-center">
            <div class=format!("mx-auto mb-4 flex h-12 w-12 items-center justify-center rounded-full {accent}")>
                {children()}
            </div>
            <h3 class="mb-2 font-semibold text-gray-900">{title}</h3>
            <p class="text-gray-600">{text}</p>
        </div>
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let username: RwSignal<String> = RwSignal::new(String::new());
    let password: RwSignal<String> = RwSignal::new(String::new());
    let error: RwSignal<Option<String>> = RwSignal::new(None);
    let loading: RwSignal<bool> = RwSignal::new(false);

    let app_state = expect_context::<AppContext>();
    let api_client = app_state.0.api_client;
    let session = app_state.0.session;
    let navigate = StoredValue::new(use_navigate());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }

        let username_val = username.get_untracked().trim().to_string();
        let password_val = password.get_untracked();
        if username_val.is_empty() || password_val.is_empty() {
            error.set(Some("Username and password are required".to_string()));
            return;
        }

        loading.set(true);
        error.set(None);

        let api_client = api_client.get_value();
        spawn_local(async move {
            match api_client.login(&username_val, &password_val).await {
                Ok(user) => {
                    log::info!("signed in as {}", user.display_name());
                    session.set(Session::login(user));
                    navigate.with_value(|nav| nav("/admin", Default::default()));
                }
                Err(e) => {
                    log::warn!("login failed: {e} ({:?})", e.detail);
                    error.set(Some(e.message));
                }
            }
            loading.set(false);
        });
    };

    view! {
        <main class="mx-auto flex w-full max-w-md flex-col justify-center px-6 py-16">
            <Card>
                <CardHeader>
                    <CardTitle>"Admin Login"</CardTitle>
                    <CardDescription>"Sign in to view your shortened URLs and their clicks."</CardDescription>
                </CardHeader>

                <CardContent>
                    <form class="flex flex-col gap-4" on:submit=on_submit>
                        <div>
                            <Label html_for="username">"Username"</Label>
                            <Input
                                id="username"
                                placeholder="admin"
                                autocomplete="username"
                                bind_value=username
                                required=true
                            />
                        </div>

                        <div>
                            <Label html_for="password">"Password"</Label>
                            <Input
                                id="password"
                                r#type="password"
                                placeholder="••••••••"
                                autocomplete="current-password"
                                bind_value=password
                                required=true
                            />
                        </div>

                        <ErrorBanner message=error on_dismiss=move |_: ()| error.set(None) />

                        <Button
                            class="w-full"
                            attr:r#type="submit"
                            attr:disabled=move || loading.get()
                        >
                            <Show when=move || loading.get() fallback=|| ().into_view()>
                                <Spinner />
                            </Show>
                            {move || if loading.get() { "Signing in..." } else { "Sign in" }}
                        </Button>
                    </form>
                </CardContent>
            </Card>
        </main>
    }
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let api_client = app_state.0.api_client;
    let session = app_state.0.session;
    let base_url = api_client.with_value(|c| c.base_url.clone());
    let board: RwSignal<Dashboard> = RwSignal::new(Dashboard::default());
    let (copy, echo) = use_copy_echo();

    let search: RwSignal<String> = RwSignal::new(String::new());
    Effect::new(move |_| {
        let term = search.get();
        board.update(|b| b.set_search_term(term));
    });

    let refresh = move || {
        let Some(id) = board.try_update(|b| b.begin_refresh()) else {
            return;
        };

        let api_client = api_client.get_value();
        spawn_local(async move {
            let result = api_client.list_urls().await;
            match &result {
                Ok(list) => log::info!("loaded {} shortened URLs", list.len()),
                Err(e) if e.is_unauthorized() => {
                    log::warn!("URL list rejected, session likely expired: {e}")
                }
                Err(e) => log::warn!("URL list failed: {e} ({:?})", e.detail),
            }
            let applied = board
                .try_update(|b| b.finish_refresh(id, result))
                .unwrap_or(false);
            if !applied {
                log::debug!("dropped stale URL list response #{id}");
            }
        });
    };

    Effect::new(move |_| {
        refresh();
    });

    let greeting = move || {
        let name = session
            .with(|s| s.user().map(|u| u.display_name().to_string()))
            .unwrap_or_else(|| "Admin".to_string());
        format!("Welcome, {name}! Monitor and manage your shortened URLs.")
    };

    let loading = move || board.with(|b| b.loading);
    let stats = Memo::new(move |_| board.with(|b| b.stats()));
    let base_url = StoredValue::new(base_url);

    view! {
        <main class="mx-auto max-w-7xl px-6 py-8">
            <div class="mb-8 flex items-center justify-between">
                <div>
                    <h1 class="mb-2 text-3xl font-bold text-gray-900">"Admin Dashboard"</h1>
                    <p class="text-gray-600">{greeting}</p>
                </div>
                <Button attr:disabled=loading on:click=move |_| refresh()>
                    <RefreshIcon spinning=Signal::derive(loading) />
                    <span>"Refresh"</span>
                </Button>
            </div>

            <div class="mb-8 grid grid-cols-1 gap-6 md:grid-cols-3">
                <StatCard
                    label="Total URLs"
                    value=Signal::derive(move || stats.get().count.to_string())
                    accent="bg-blue-100 text-blue-600"
                >
                    <ExternalLink class="size-6" />
                </StatCard>
                <StatCard
                    label="Total Clicks"
                    value=Signal::derive(move || stats.get().total_clicks.to_string())
                    accent="bg-green-100 text-green-600"
                >
                    <Eye class="size-6" />
                </StatCard>
                <StatCard
                    label="Avg. Clicks"
                    value=Signal::derive(move || stats.get().average_label())
                    accent="bg-purple-100 text-purple-600"
                >
                    <Activity class="size-6" />
                </StatCard>
            </div>

            <Card class="mb-6 p-6">
                <div class="relative">
                    <Search class="absolute left-3 top-1/2 size-5 -translate-y-1/2 text-gray-400" />
                    <Input
                        placeholder="Search by original or short URL..."
                        bind_value=search
                        class="pl-10 pr-4"
                    />
                </div>
            </Card>

            <ErrorBanner
                class="mb-6"
                message=Signal::derive(move || board.with(|b| b.error.clone()))
                on_dismiss=move |_: ()| board.update(|b| b.dismiss_error())
            />

            <Card class="overflow-hidden">
                {move || {
                    if loading() {
                        return view! {
                            <div class="p-12 text-center">
                                <RefreshIcon spinning=true class="mx-auto mb-4 size-8 text-blue-600" />
                                <p class="text-gray-600">"Loading URL Analytics..."</p>
                            </div>
                        }
                        .into_any();
                    }

                    let rows: Vec<ShortUrlRecord> =
                        board.with(|b| b.filtered().into_iter().cloned().collect());
                    if rows.is_empty() {
                        let message = board.with(|b| b.empty_message());
                        return view! {
                            <div class="p-12 text-center">
                                <ExternalLink class="mx-auto mb-4 size-12 text-gray-400" />
                                <p class="text-lg text-gray-600">{message}</p>
                            </div>
                        }
                        .into_any();
                    }

                    let base = base_url.get_value();
                    view! {
                        <div class="overflow-x-auto">
                            <table class="w-full">
                                <thead class="bg-gray-50">
                                    <tr>
                                        <th class="px-6 py-4 text-left text-xs font-medium uppercase tracking-wider text-gray-500">"Original URL"</th>
                                        <th class="px-6 py-4 text-left text-xs font-medium uppercase tracking-wider text-gray-500">"Short URL"</th>
                                        <th class="px-6 py-4 text-left text-xs font-medium uppercase tracking-wider text-gray-500">"Clicks"</th>
                                        <th class="px-6 py-4 text-left text-xs font-medium uppercase tracking-wider text-gray-500">"Actions"</th>
                                    </tr>
                                </thead>
                                <tbody class="divide-y divide-gray-200 bg-white">
                                    {rows
                                        .into_iter()
                                        .map(|record| view! { <UrlRow record=record base_url=base.clone() copy=copy echo=echo /> })
                                        .collect_view()}
                                </tbody>
                            </table>
                        </div>
                    }
                    .into_any()
                }}
            </Card>
        </main>
    }
}

#[component]
fn UrlRow(
    record: ShortUrlRecord,
    base_url: String,
    copy: Callback<String>,
    echo: RwSignal<crate::state::clipboard::CopyEcho>,
) -> impl IntoView {
    let link = record.short_link(&base_url);
    let original = record.original_url;
    let copied = {
        let link = link.clone();
        move || echo.with(|e| e.is_copied(&link))
    };
    let to_copy = link.clone();

    view! {
        <tr class="transition-colors hover:bg-gray-50">
            <td class="px-6 py-4">
                <p class="max-w-xs truncate text-sm font-medium text-gray-900" title=original.clone()>
                    {original.clone()}
                </p>
            </td>
            <td class="px-6 py-4">
                <div class="flex items-center gap-2">
                    <p class="font-mono text-sm text-blue-600">{link}</p>
                    <Button
                        variant=ButtonVariant::Icon
                        size=ButtonSize::Bare
                        attr:r#type="button"
                        attr:title="Copy to clipboard"
                        on:click=move |_| copy.run(to_copy.clone())
                    >
                        <Show when=copied fallback=|| view! { <CopyIcon class="size-4" /> }>
                            <Check class="size-4 text-green-600" />
                        </Show>
                    </Button>
                </div>
            </td>
            <td class="px-6 py-4 text-sm font-semibold text-gray-900">{record.visits}</td>
            <td class="px-6 py-4">
                <a
                    href=original
                    target="_blank"
                    rel="noopener noreferrer"
                    class="text-blue-600 transition-colors hover:text-blue-800"
                    title="Visit original URL"
                >
                    <ExternalLink class="size-5" />
                </a>
            </td>
        </tr>
    }
}

/// `/admin`: dashboard for signed-in admins, login otherwise.
#[component]
pub fn AdminRoute() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let session = app_state.0.session;

    view! {
        <Show
            when=move || session.get().is_authenticated()
            fallback=|| view! { <Redirect path="/login" /> }
        >
            <AdminPage />
        </Show>
    }
}

/// `/login`: signed-in admins go straight to the dashboard.
#[component]
pub fn LoginRoute() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let session = app_state.0.session;

    view! {
        <Show
            when=move || !session.get().is_authenticated()
            fallback=|| view! { <Redirect path="/admin" /> }
        >
            <LoginPage />
        </Show>
    }
}

//! App shell: owns the API client and turns view intents into store updates.
//!
//! # Design
//! - Views emit typed intents; every network call is started here and its
//!   result is applied through the feature reducers.
//! - Failures the user never sees (downloads, queue commands, badge) are
//!   logged to the browser console.

use crate::app::api::ApiCtx;
use crate::components::theme_menu::ThemeMenu;
use crate::components::toast::ToastHost;
use crate::core::store::AppStore;
use crate::core::theme::{ThemeMode, ThemePreference};
use crate::features::details::actions::{
    DownloadOutcome, download_then_refresh, load_details, queued_message,
};
use crate::features::details::state::{
    apply_detail_result, close_details, finish_download, open_details,
};
use crate::features::details::view::DetailsModal;
use crate::features::queue::actions::{QueueAction, dispatch as run_queue_action, refresh};
use crate::features::queue::state::{StatusRefresh, apply_refresh, begin_refresh};
use crate::features::queue::view::{ActiveBadge, ActiveDownloadsPanel, StatusPanel};
use crate::features::search::actions::{SearchOutcome, run_search};
use crate::features::search::logic::{SearchForm, build_query};
use crate::features::search::state::{begin_search, finish_search};
use crate::features::search::view::SearchPanel;
use crate::models::{ToastAction, ToastKind, ToastList};
use crate::services::api::ApiClient;
use bookrequest_api_models::BookSummary;
use gloo::console;
use gloo::events::EventListener;
use gloo::utils::{document, window};
use gloo_timers::callback::Interval;
use preferences::{BrowserPreferences, DARK_SCHEME_QUERY, load_config, prefers_dark};
use std::rc::Rc;
use yew::platform::spawn_local;
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

mod api;
mod preferences;

#[function_component(BookRequestApp)]
pub(crate) fn book_request_app() -> Html {
    let dispatch = Dispatch::<AppStore>::new();
    let config = use_memo(|_| load_config(), ());
    let api_ctx = {
        let base = config.api_base.clone();
        use_memo(move |_| ApiCtx::new(base), ())
    };
    let toasts = use_reducer(ToastList::default);
    let theme = use_selector(|store: &AppStore| store.theme.clone());

    {
        let dispatch = dispatch.clone();
        use_effect_with_deps(
            move |_| {
                let listener = window()
                    .match_media(DARK_SCHEME_QUERY)
                    .ok()
                    .flatten()
                    .map(|media| {
                        let target = media.clone();
                        EventListener::new(&target, "change", move |_event| {
                            let dark = media.matches();
                            dispatch.reduce_mut(|store| store.theme.os_changed(dark));
                        })
                    });
                move || drop(listener)
            },
            (),
        );
    }
    use_effect_with_deps(
        |mode: &ThemeMode| {
            apply_theme(*mode);
            || ()
        },
        theme.effective(),
    );
    {
        let client = api_ctx.client.clone();
        let dispatch = dispatch.clone();
        let poll_ms = config.status_poll_ms;
        use_effect_with_deps(
            move |_| {
                refresh_status(client.clone(), dispatch.clone());
                let interval = poll_ms.map(|ms| {
                    Interval::new(ms, move || refresh_status(client.clone(), dispatch.clone()))
                });
                move || drop(interval)
            },
            (),
        );
    }

    let on_search = {
        let client = api_ctx.client.clone();
        let dispatch = dispatch.clone();
        Callback::from(move |form: SearchForm| {
            let query = build_query(&form);
            let client = client.clone();
            let dispatch = dispatch.clone();
            dispatch.reduce_mut(|store| begin_search(&mut store.search));
            spawn_local(async move {
                let outcome = run_search(&*client, &query).await;
                if let SearchOutcome::Failed(err) = &outcome {
                    console::warn!("search failed", err.to_string());
                }
                dispatch.reduce_mut(|store| finish_search(&mut store.search, outcome));
            });
        })
    };
    let on_details = {
        let client = api_ctx.client.clone();
        let dispatch = dispatch.clone();
        Callback::from(move |id: String| {
            let client = client.clone();
            let dispatch = dispatch.clone();
            dispatch.reduce_mut(|store| open_details(&mut store.details, &id));
            spawn_local(async move {
                let result = load_details(&*client, &id).await;
                if let Err(err) = &result {
                    console::warn!("detail fetch failed", id.clone(), err.to_string());
                }
                dispatch.reduce_mut(|store| apply_detail_result(&mut store.details, &id, result));
            });
        })
    };
    let on_close_details = {
        let dispatch = dispatch.clone();
        Callback::from(move |()| {
            dispatch.reduce_mut(|store| close_details(&mut store.details));
        })
    };
    let on_download = {
        let client = api_ctx.client.clone();
        let dispatch = dispatch.clone();
        let toasts = toasts.dispatcher();
        Callback::from(move |book: BookSummary| {
            let client = client.clone();
            let dispatch = dispatch.clone();
            let toasts = toasts.clone();
            spawn_local(async move {
                let follow_up = download_then_refresh(&*client, &book).await;
                match &follow_up.outcome {
                    DownloadOutcome::Queued { title } => toasts.dispatch(ToastAction::Push {
                        kind: ToastKind::Success,
                        message: queued_message(title),
                    }),
                    DownloadOutcome::Failed(err) => {
                        console::warn!("download request failed", book.id.clone(), err.to_string());
                    }
                }
                dispatch.reduce_mut(|store| {
                    finish_download(&mut store.details, &follow_up.outcome);
                    if let Some(refreshed) = follow_up.refresh {
                        log_refresh(&refreshed);
                        apply_refresh(&mut store.queue, refreshed);
                    }
                });
            });
        })
    };
    let on_queue_action = {
        let client = api_ctx.client.clone();
        let dispatch = dispatch.clone();
        Callback::from(move |action: QueueAction| {
            let client = client.clone();
            let dispatch = dispatch.clone();
            dispatch.reduce_mut(|store| begin_refresh(&mut store.queue));
            spawn_local(async move {
                let outcome = run_queue_action(&*client, action).await;
                if let Some(err) = &outcome.command_error {
                    console::warn!("queue command failed", err.to_string());
                }
                log_refresh(&outcome.refresh);
                dispatch.reduce_mut(|store| apply_refresh(&mut store.queue, outcome.refresh));
            });
        })
    };
    let on_theme_toggle = {
        let dispatch = dispatch.clone();
        Callback::from(move |()| {
            dispatch.reduce_mut(|store| store.theme.toggle_menu());
        })
    };
    let on_theme_select = {
        let dispatch = dispatch.clone();
        Callback::from(move |preference: ThemePreference| {
            dispatch.reduce_mut(|store| store.theme.select(&BrowserPreferences, preference));
        })
    };
    let on_theme_close = {
        let dispatch = dispatch.clone();
        Callback::from(move |()| {
            dispatch.reduce_mut(|store| store.theme.close_menu());
        })
    };
    let on_dismiss = {
        let toasts = toasts.dispatcher();
        Callback::from(move |id: u64| toasts.dispatch(ToastAction::Dismiss(id)))
    };

    html! {
        <div class="app">
            <header class="app-header">
                <h1>{"Book requests"}</h1>
                <div class="header-actions">
                    <ActiveBadge />
                    <ThemeMenu
                        theme={(*theme).clone()}
                        on_toggle={on_theme_toggle}
                        on_select={on_theme_select}
                        on_close={on_theme_close} />
                </div>
            </header>
            <main>
                <SearchPanel
                    on_search={on_search}
                    on_details={on_details}
                    on_download={on_download.clone()} />
                <ActiveDownloadsPanel on_action={on_queue_action.clone()} />
                <StatusPanel on_action={on_queue_action} />
            </main>
            <DetailsModal on_close={on_close_details} on_download={on_download} />
            <ToastHost toasts={toasts.toasts.clone()} on_dismiss={on_dismiss} />
        </div>
    }
}

fn refresh_status(client: Rc<ApiClient>, dispatch: Dispatch<AppStore>) {
    dispatch.reduce_mut(|store| begin_refresh(&mut store.queue));
    spawn_local(async move {
        let result = refresh(&*client).await;
        log_refresh(&result);
        dispatch.reduce_mut(|store| apply_refresh(&mut store.queue, result));
    });
}

fn log_refresh(refresh: &StatusRefresh) {
    if let Err(err) = &refresh.status {
        console::warn!("status refresh failed", err.to_string());
    }
    if let Some(Err(err)) = &refresh.active {
        console::warn!("active downloads fetch failed", err.to_string());
    }
}

fn apply_theme(mode: ThemeMode) {
    if let Some(root) = document().document_element() {
        let _ = root.set_attribute("data-theme", mode.as_str());
    }
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    // Seeded before the first render so `data-theme` never starts from the default.
    Dispatch::<AppStore>::new().set(AppStore::seeded(&BrowserPreferences, prefers_dark()));
    if let Some(root) = document().get_element_by_id("root") {
        yew::Renderer::<BookRequestApp>::with_root(root).render();
    } else {
        yew::Renderer::<BookRequestApp>::new().render();
    }
}

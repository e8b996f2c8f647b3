//! Full status panel, compact downloading panel and active-count badge.

use crate::components::atoms::{EmptyState, ProgressBar};
use crate::core::store::AppStore;
use crate::features::queue::actions::QueueAction;
use crate::features::queue::state::{FullPanel, StatusRow};
use yew::prelude::*;
use yewdux::prelude::use_selector;

#[derive(Properties, PartialEq)]
pub(crate) struct QueuePanelProps {
    pub(crate) on_action: Callback<QueueAction>,
}

#[function_component(StatusPanel)]
pub(crate) fn status_panel(props: &QueuePanelProps) -> Html {
    let full = use_selector(|store: &AppStore| store.queue.full.clone());
    let loading = use_selector(|store: &AppStore| store.queue.loading);
    let on_refresh = props.on_action.reform(|_: MouseEvent| QueueAction::Refresh);
    let on_clear = props.on_action.reform(|_: MouseEvent| QueueAction::ClearCompleted);

    let body = match &*full {
        FullPanel::Pending => html! { <p class="muted">{"Loading status..."}</p> },
        FullPanel::NoItems => html! { <EmptyState title="No items in queue" /> },
        FullPanel::Failed => html! { <p class="error">{"Error loading status"}</p> },
        FullPanel::Sections(sections) => html! {
            <>
                {for sections.iter().map(|section| html! {
                    <section class="status-section">
                        <h3>{section.title.clone()}</h3>
                        <ul>
                            {for section.rows.iter().map(|row| render_row(row, &props.on_action, true))}
                        </ul>
                    </section>
                })}
            </>
        },
    };

    html! {
        <section class="panel status-panel">
            <div class="panel-head">
                <h2>{"Download queue"}</h2>
                <div class="panel-actions">
                    <button type="button" class="ghost" disabled={*loading} onclick={on_refresh}>
                        {if *loading { "Refreshing..." } else { "Refresh" }}
                    </button>
                    <button type="button" class="ghost" onclick={on_clear}>{"Clear completed"}</button>
                </div>
            </div>
            {body}
        </section>
    }
}

#[function_component(ActiveDownloadsPanel)]
pub(crate) fn active_downloads_panel(props: &QueuePanelProps) -> Html {
    let compact = use_selector(|store: &AppStore| store.queue.compact.clone());
    let Some(rows) = &*compact else {
        return html! {};
    };
    html! {
        <section class="panel compact-downloads">
            <ul>
                {for rows.iter().map(|row| render_row(row, &props.on_action, false))}
            </ul>
        </section>
    }
}

#[function_component(ActiveBadge)]
pub(crate) fn active_badge() -> Html {
    let count = use_selector(|store: &AppStore| store.queue.active_count);
    html! {
        <span class="badge active-badge" title="Active downloads">{count.to_string()}</span>
    }
}

/// Full-panel rows carry their bucket name; compact rows do not.
fn render_row(row: &StatusRow, on_action: &Callback<QueueAction>, show_bucket: bool) -> Html {
    let cancel = row.cancellable.then(|| {
        let id = row.id.clone();
        let on_cancel = on_action.reform(move |_: MouseEvent| QueueAction::Cancel(id.clone()));
        html! { <button type="button" class="ghost danger" onclick={on_cancel}>{"Cancel"}</button> }
    });
    html! {
        <li class={classes!("status-row", row.bucket.clone())}>
            {if show_bucket {
                html! { <span class="bucket">{row.bucket_label()}</span> }
            } else {
                html! {}
            }}
            <span class="title">{row.title.clone()}</span>
            {row.progress_width().map(|width| html! { <ProgressBar width={width} /> }).unwrap_or_default()}
            {cancel.unwrap_or_default()}
        </li>
    }
}

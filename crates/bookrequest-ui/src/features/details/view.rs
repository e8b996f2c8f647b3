//! Book detail modal.

use crate::core::store::AppStore;
use crate::features::details::state::{DetailView, DetailsState};
use bookrequest_api_models::BookSummary;
use yew::prelude::*;
use yewdux::prelude::use_selector;

#[derive(Properties, PartialEq)]
pub(crate) struct DetailsModalProps {
    pub(crate) on_close: Callback<()>,
    pub(crate) on_download: Callback<BookSummary>,
}

#[function_component(DetailsModal)]
pub(crate) fn details_modal(props: &DetailsModalProps) -> Html {
    let state = use_selector(|store: &AppStore| store.details.clone());
    if !state.is_open() {
        return html! {};
    }

    let on_overlay = props.on_close.reform(|_: MouseEvent| ());
    let on_close = props.on_close.reform(|_: MouseEvent| ());
    // Clicks inside the content must not reach the overlay.
    let on_content = Callback::from(|event: MouseEvent| event.stop_propagation());

    let body = match &*state {
        DetailsState::Closed => html! {},
        DetailsState::Loading { .. } => html! { <p class="muted">{"Loading..."}</p> },
        DetailsState::Failed { .. } => {
            html! { <p class="error">{"Failed to load details"}</p> }
        }
        DetailsState::Loaded(view) => render_detail(view, &props.on_download),
    };

    html! {
        <div class="modal-overlay" onclick={on_overlay}>
            <div class="modal" role="dialog" aria-modal="true" onclick={on_content}>
                <button type="button" class="modal-close ghost" aria-label="Close" onclick={on_close}>
                    {"\u{2715}"}
                </button>
                {body}
            </div>
        </div>
    }
}

fn render_detail(view: &DetailView, on_download: &Callback<BookSummary>) -> Html {
    let book = view.book.clone();
    let download = on_download.reform(move |_: MouseEvent| book.clone());
    let rows = [
        ("Author", &view.author),
        ("Publisher", &view.publisher),
        ("Year", &view.year),
        ("Language", &view.language),
        ("Format", &view.format),
        ("Size", &view.size),
    ];
    html! {
        <div class="detail">
            {view.cover.clone().map(|src| html! {
                <img class="cover" src={src} alt={view.title.clone()} />
            }).unwrap_or_default()}
            <h2>{view.title.clone()}</h2>
            <dl class="meta">
                {for rows.into_iter().map(|(label, value)| html! {
                    <>
                        <dt>{label}</dt>
                        <dd>{value.clone()}</dd>
                    </>
                })}
            </dl>
            {if view.further_info.is_empty() {
                html! {}
            } else {
                html! {
                    <section class="further-info">
                        <h3>{"Further information"}</h3>
                        <ul>
                            {for view.further_info.iter().map(|line| html! {
                                <li>{line.to_string()}</li>
                            })}
                        </ul>
                    </section>
                }
            }}
            <button type="button" onclick={download}>{"Download"}</button>
        </div>
    }
}

//! Search form and result card grid.

use crate::components::atoms::EmptyState;
use crate::core::store::AppStore;
use crate::features::search::logic::{
    AdvancedFilters, CONTENT_OPTIONS, CardGrid, CardView, FORMAT_OPTIONS, SORT_OPTIONS,
    SearchForm, card_grid,
};
use bookrequest_api_models::BookSummary;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yewdux::prelude::use_selector;

#[derive(Properties, PartialEq)]
pub(crate) struct SearchPanelProps {
    pub(crate) on_search: Callback<SearchForm>,
    pub(crate) on_details: Callback<String>,
    pub(crate) on_download: Callback<BookSummary>,
}

#[function_component(SearchPanel)]
pub(crate) fn search_panel(props: &SearchPanelProps) -> Html {
    let form = use_state(SearchForm::default);
    let loading = use_selector(|store: &AppStore| store.search.loading);
    let grid = use_selector(|store: &AppStore| card_grid(store.search.results.as_deref()));

    let submit = {
        let form = form.clone();
        let on_search = props.on_search.clone();
        Callback::from(move |()| on_search.emit((*form).clone()))
    };
    let on_basic = {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            let mut next = (*form).clone();
            next.basic = input.value();
            form.set(next);
        })
    };
    let on_keydown = {
        let submit = submit.clone();
        Callback::from(move |event: KeyboardEvent| {
            if event.key() == "Enter" {
                event.prevent_default();
                submit.emit(());
            }
        })
    };
    let on_toggle_advanced = {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*form).clone();
            next.advanced_open = !next.advanced_open;
            form.set(next);
        })
    };
    let on_filters = {
        let form = form.clone();
        Callback::from(move |filters: AdvancedFilters| {
            let mut next = (*form).clone();
            next.filters = filters;
            form.set(next);
        })
    };

    html! {
        <section class="search-panel">
            <div class="search-bar">
                <input
                    type="search"
                    placeholder="Search by title, author or ISBN"
                    value={form.basic.clone()}
                    oninput={on_basic}
                    onkeydown={on_keydown} />
                <button type="button" onclick={submit.reform(|_: MouseEvent| ())}>{"Search"}</button>
                <button type="button" class="ghost" onclick={on_toggle_advanced}>
                    {if form.advanced_open { "Hide advanced" } else { "Advanced" }}
                </button>
            </div>
            {if form.advanced_open {
                html! {
                    <AdvancedPanel
                        filters={form.filters.clone()}
                        on_change={on_filters}
                        on_search={submit.clone()} />
                }
            } else {
                html! {}
            }}
            {if *loading {
                html! { <p class="muted search-loading">{"Searching..."}</p> }
            } else {
                html! {}
            }}
            {render_grid(&grid, &props.on_details, &props.on_download)}
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct AdvancedPanelProps {
    filters: AdvancedFilters,
    on_change: Callback<AdvancedFilters>,
    on_search: Callback<()>,
}

#[function_component(AdvancedPanel)]
fn advanced_panel(props: &AdvancedPanelProps) -> Html {
    let text_field = |label: &'static str, value: &str, apply: fn(&mut AdvancedFilters, String)| {
        let filters = props.filters.clone();
        let on_change = props.on_change.clone();
        let oninput = Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            let mut next = filters.clone();
            apply(&mut next, input.value());
            on_change.emit(next);
        });
        html! {
            <label class="field">
                <span>{label}</span>
                <input type="text" value={value.to_string()} oninput={oninput} />
            </label>
        }
    };
    let select_field = |label: &'static str,
                        value: &str,
                        options: &[(&'static str, &'static str)],
                        apply: fn(&mut AdvancedFilters, String)| {
        let filters = props.filters.clone();
        let on_change = props.on_change.clone();
        let onchange = Callback::from(move |event: Event| {
            let select: HtmlSelectElement = event.target_unchecked_into();
            let mut next = filters.clone();
            apply(&mut next, select.value());
            on_change.emit(next);
        });
        html! {
            <label class="field">
                <span>{label}</span>
                <select onchange={onchange}>
                    {for options.iter().map(|(option, text)| html! {
                        <option value={*option} selected={*option == value}>{*text}</option>
                    })}
                </select>
            </label>
        }
    };
    let filters = &props.filters;

    html! {
        <div class="advanced-panel">
            {text_field("ISBN", &filters.isbn, |f, v| f.isbn = v)}
            {text_field("Author", &filters.author, |f, v| f.author = v)}
            {text_field("Title", &filters.title, |f, v| f.title = v)}
            {text_field("Language", &filters.lang, |f, v| f.lang = v)}
            {select_field("Sort", &filters.sort, &SORT_OPTIONS, |f, v| f.sort = v)}
            {select_field("Content", &filters.content, &CONTENT_OPTIONS, |f, v| f.content = v)}
            <fieldset class="formats">
                <legend>{"Formats"}</legend>
                {for FORMAT_OPTIONS.iter().copied().map(|format| {
                    let filters = filters.clone();
                    let on_change = props.on_change.clone();
                    let onchange = Callback::from(move |event: Event| {
                        let input: HtmlInputElement = event.target_unchecked_into();
                        let mut next = filters.clone();
                        next.set_format(format, input.checked());
                        on_change.emit(next);
                    });
                    html! {
                        <label class="format-option">
                            <input type="checkbox" checked={props.filters.has_format(format)} onchange={onchange} />
                            {format}
                        </label>
                    }
                })}
            </fieldset>
            <button type="button" onclick={props.on_search.reform(|_: MouseEvent| ())}>
                {"Advanced search"}
            </button>
        </div>
    }
}

fn render_grid(
    grid: &CardGrid,
    on_details: &Callback<String>,
    on_download: &Callback<BookSummary>,
) -> Html {
    match grid {
        CardGrid::Pristine => html! {},
        CardGrid::NoResults => html! { <EmptyState title="No results found" /> },
        CardGrid::Cards(cards) => html! {
            <div class="card-grid">
                {for cards.iter().map(|card| render_card(card, on_details, on_download))}
            </div>
        },
    }
}

fn render_card(
    card: &CardView,
    on_details: &Callback<String>,
    on_download: &Callback<BookSummary>,
) -> Html {
    let id = card.book.id.clone();
    let book = card.book.clone();
    let show_details = on_details.reform(move |_: MouseEvent| id.clone());
    let download = on_download.reform(move |_: MouseEvent| book.clone());
    html! {
        <article class="book-card">
            {card.preview.clone().map(|src| html! {
                <img class="cover" src={src} alt={card.title.clone()} loading="lazy" />
            }).unwrap_or_default()}
            <h3>{card.title.clone()}</h3>
            <p class="author">{card.author.clone()}</p>
            <dl class="meta">
                <dt>{"Year"}</dt><dd>{card.year.clone()}</dd>
                <dt>{"Language"}</dt><dd>{card.language.clone()}</dd>
                <dt>{"Format"}</dt><dd>{card.format.clone()}</dd>
                <dt>{"Size"}</dt><dd>{card.size.clone()}</dd>
            </dl>
            <div class="card-actions">
                <button type="button" class="ghost" onclick={show_details}>{"Details"}</button>
                <button type="button" onclick={download}>{"Download"}</button>
            </div>
        </article>
    }
}

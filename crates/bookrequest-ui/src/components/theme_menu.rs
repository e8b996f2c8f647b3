//! Theme preference dropdown.
//!
//! # Design
//! - Menu state lives in the store; this component only emits intents.
//! - A document-level click outside the menu closes it.

use crate::core::theme::{ThemePreference, ThemeState};
use gloo::events::EventListener;
use gloo::utils::document;
use wasm_bindgen::JsCast;
use web_sys::Node;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ThemeMenuProps {
    pub(crate) theme: ThemeState,
    pub(crate) on_toggle: Callback<()>,
    pub(crate) on_select: Callback<ThemePreference>,
    pub(crate) on_close: Callback<()>,
}

#[function_component(ThemeMenu)]
pub(crate) fn theme_menu(props: &ThemeMenuProps) -> Html {
    let root = use_node_ref();
    {
        let root = root.clone();
        let on_close = props.on_close.clone();
        use_effect_with_deps(
            move |open: &bool| {
                let listener = open.then(|| {
                    EventListener::new(&document(), "click", move |event| {
                        let target = event
                            .target()
                            .and_then(|target| target.dyn_into::<Node>().ok());
                        let inside = root
                            .cast::<Node>()
                            .is_some_and(|menu| menu.contains(target.as_ref()));
                        if !inside {
                            on_close.emit(());
                        }
                    })
                });
                move || drop(listener)
            },
            props.theme.menu_open,
        );
    }

    let on_toggle = props.on_toggle.reform(|_: MouseEvent| ());
    let current = props.theme.preference;
    html! {
        <div class="theme-menu" ref={root}>
            <button
                type="button"
                class="theme-trigger"
                aria-haspopup="menu"
                aria-expanded={props.theme.menu_open.to_string()}
                onclick={on_toggle}>
                {props.theme.label()}
            </button>
            {if props.theme.menu_open {
                html! {
                    <ul class="theme-options" role="menu">
                        {for ThemePreference::all().into_iter().map(|preference| {
                            let on_select = props.on_select.reform(move |_: MouseEvent| preference);
                            html! {
                                <li>
                                    <button
                                        type="button"
                                        role="menuitemradio"
                                        aria-checked={(preference == current).to_string()}
                                        class={classes!((preference == current).then_some("active"))}
                                        onclick={on_select}>
                                        {preference.label()}
                                    </button>
                                </li>
                            }
                        })}
                    </ul>
                }
            } else {
                html! {}
            }}
        </div>
    }
}

//! Download progress bar.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ProgressBarProps {
    /// CSS width of the fill, e.g. `"42%"`.
    pub(crate) width: AttrValue,
}

#[function_component(ProgressBar)]
pub(crate) fn progress_bar(props: &ProgressBarProps) -> Html {
    html! {
        <div class="progress" role="progressbar" aria-valuetext={props.width.clone()}>
            <div class="progress-fill" style={format!("width: {}", props.width)}></div>
            <span class="progress-label">{props.width.clone()}</span>
        </div>
    }
}

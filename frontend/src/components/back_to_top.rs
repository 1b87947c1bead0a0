use gloo::events::EventListener;
use shared::effects;
use yew::prelude::*;

use crate::services::dom;

#[derive(Properties, PartialEq)]
pub struct BackToTopProps {
    /// Scroll offset in px past which the button shows.
    pub threshold: f64,
}

#[function_component(BackToTop)]
pub fn back_to_top(props: &BackToTopProps) -> Html {
    let visible = use_state(|| effects::back_to_top_visible(dom::scroll_y(), props.threshold));

    {
        let visible = visible.clone();
        use_effect_with(props.threshold, move |threshold| {
            let threshold = *threshold;
            let listener = dom::window().map(|window| {
                EventListener::new(&window, "scroll", move |_| {
                    visible.set(effects::back_to_top_visible(dom::scroll_y(), threshold));
                })
            });
            move || drop(listener)
        });
    }

    let onclick = Callback::from(|_: MouseEvent| dom::smooth_scroll_to(0.0));

    html! {
        <button
            class={classes!("back-to-top", visible.then_some("visible"))}
            aria-label="Back to top"
            {onclick}
        >
            { "↑" }
        </button>
    }
}

/// Append a host to `<body>` and mount the button into it.
pub fn setup_back_to_top(threshold: f64) {
    let Some(document) = dom::document() else {
        return;
    };
    let (Some(body), Ok(host)) = (document.body(), document.create_element("div")) else {
        return;
    };
    if body.append_child(&host).is_err() {
        return;
    }

    yew::Renderer::<BackToTop>::with_root_and_props(host, BackToTopProps { threshold }).render();
}

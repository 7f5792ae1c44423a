//! Collapsible info groups on the About tab.
//!
//! The expanded height is measured from the rendered content so the CSS
//! `max-height` transition runs to the real size.

use leptos::prelude::*;

use crate::controller::PageController;
use crate::state::Portfolio;
use crate::util::dom::max_height_style;

#[component]
pub fn InfoPanels() -> impl IntoView {
    let page = expect_context::<RwSignal<Portfolio>>();
    let count = page.with_untracked(|p| p.panels.panels.len());

    view! {
        <div class="info">
            {(0..count).map(|index| view! { <InfoGroup index=index/> }).collect_view()}
        </div>
    }
}

#[component]
fn InfoGroup(index: usize) -> impl IntoView {
    let page = expect_context::<RwSignal<Portfolio>>();
    let controller = expect_context::<PageController>();
    let content_ref = NodeRef::<leptos::html::Div>::new();

    let panel = move || page.with(|p| p.panels.panels.get(index).cloned());
    let heading = move || panel().map(|p| p.heading).unwrap_or_default();
    let body = move || panel().map(|p| p.body).unwrap_or_default();
    let header_class = move || {
        if panel().is_some_and(|p| p.active) { "groupHeader active" } else { "groupHeader" }
    };
    let expanded = move || panel().is_some_and(|p| p.is_expanded()).to_string();
    let max_height = move || max_height_style(panel().and_then(|p| p.max_height)).unwrap_or_default();

    let on_click = move |_| {
        #[cfg(feature = "hydrate")]
        let natural_height = content_ref.get().map_or(0, |el| crate::util::dom::scroll_height(&el));
        #[cfg(not(feature = "hydrate"))]
        let natural_height = 0;
        if let Err(e) = controller.toggle_panel(index, natural_height) {
            leptos::logging::warn!("panel {index}: {e}");
        }
    };

    view! {
        <div class="group">
            <button class=header_class aria-expanded=expanded on:click=on_click>{heading}</button>
            <div class="groupContent" node_ref=content_ref style:max-height=max_height>
                <p>{body}</p>
            </div>
        </div>
    }
}

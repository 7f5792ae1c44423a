//! Navigation tabs across the top of the page.

use leptos::prelude::*;

use crate::controller::PageController;
use crate::state::Portfolio;

#[component]
pub fn TabBar() -> impl IntoView {
    let page = expect_context::<RwSignal<Portfolio>>();
    let controller = expect_context::<PageController>();

    let tabs = page.with_untracked(|p| p.tabs.tabs().to_vec());

    view! {
        <nav class="tabs">
            {tabs
                .into_iter()
                .map(|tab| {
                    let title = tab.title;
                    let class = move || tab_class(page.with(|p| p.tabs.is_selected(title)), tab.special);
                    let on_click = move |_| {
                        if let Err(e) = controller.activate_tab(title) {
                            leptos::logging::warn!("tab {title}: {e}");
                        }
                    };
                    view! {
                        <button class=class title=title on:click=on_click>
                            {tab.label}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}

fn tab_class(selected: bool, special: bool) -> String {
    let mut class = String::from("tab");
    if special {
        class.push_str(" special");
    }
    if selected {
        class.push_str(" tabSelected");
    }
    class
}

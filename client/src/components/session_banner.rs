//! Greeting and login/logout link for the comment board.

use leptos::prelude::*;

use crate::state::Portfolio;

#[component]
pub fn SessionBanner() -> impl IntoView {
    let page = expect_context::<RwSignal<Portfolio>>();

    let greeting = move || page.with(|p| p.session.greeting());
    let link_label = move || page.with(|p| p.session.toggle_link_label());
    let link_url = move || page.with(|p| p.session.toggle_link_url().to_owned());
    let loading = move || page.with(|p| p.session.loading);

    view! {
        <div class="session">
            <Show when=move || !loading() fallback=|| view! { <p class="session__status">"Checking login..."</p> }>
                <p class="session__greeting">{greeting}</p>
                <a class="session__link" href=link_url>{link_label}</a>
            </Show>
        </div>
    }
}

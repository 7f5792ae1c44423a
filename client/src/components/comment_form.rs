//! Comment entry form with author, location sharing and list size controls.
//!
//! SYSTEM CONTEXT
//! ==============
//! The form is disabled until the session says the viewer is logged in.
//! While a comment is under edit the same form posts an edit instead of a new
//! comment and offers a cancel button.

use leptos::prelude::*;

use crate::controller::PageController;
#[cfg(feature = "hydrate")]
use crate::controller::PortfolioError;
use crate::state::Portfolio;
use crate::state::comments::VISIBLE_COMMENT_CHOICES;

#[component]
pub fn CommentForm() -> impl IntoView {
    let page = expect_context::<RwSignal<Portfolio>>();
    let controller = expect_context::<PageController>();
    let busy = RwSignal::new(false);

    let disabled = move || busy.get() || page.with(|p| !p.session.logged_in());
    let editing = move || page.with(|p| p.comments.editing.is_some());
    let placeholder = move || page.with(|p| p.session.comment_placeholder());
    let submit_label = move || if editing() { "Save edit" } else { "Post comment" };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match controller.submit_comment().await {
                Ok(()) => {}
                Err(PortfolioError::Validation(e)) => crate::util::dom::alert(&e.to_string()),
                Err(e) => leptos::logging::warn!("comment submit failed: {e}"),
            }
            busy.set(false);
        });
    };

    let on_cancel = move |_| {
        if let Err(e) = controller.cancel_edit() {
            leptos::logging::warn!("cancel edit: {e}");
        }
    };

    let on_visible_change = move |value: String| {
        let Ok(visible) = value.parse::<usize>() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Err(e) = controller.list_comments(visible).await {
                leptos::logging::warn!("comment refresh failed: {e}");
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = visible;
    };

    let on_text = move |value: String| {
        if let Err(e) = controller.update_form(|form| form.text = value) {
            leptos::logging::warn!("comment form: {e}");
        }
    };
    let on_author = move |value: String| {
        if let Err(e) = controller.update_form(|form| form.author = value) {
            leptos::logging::warn!("comment form: {e}");
        }
    };
    let on_share = move |checked: bool| {
        if let Err(e) = controller.update_form(|form| form.share_location = checked) {
            leptos::logging::warn!("comment form: {e}");
        }
    };

    view! {
        <form class="comment-form" on:submit=on_submit>
            <textarea
                class="comment-form__text"
                name="comment-text"
                placeholder=placeholder
                disabled=disabled
                prop:value=move || page.with(|p| p.form.text.clone())
                on:input=move |ev| on_text(event_target_value(&ev))
            ></textarea>
            <div class="comment-form__row">
                <input
                    class="comment-form__author"
                    type="text"
                    name="comment-author"
                    placeholder="Your name"
                    disabled=disabled
                    prop:value=move || page.with(|p| p.form.author.clone())
                    on:input=move |ev| on_author(event_target_value(&ev))
                />
                <label class="comment-form__share">
                    <input
                        type="checkbox"
                        disabled=disabled
                        prop:checked=move || page.with(|p| p.form.share_location)
                        on:change=move |ev| on_share(event_target_checked(&ev))
                    />
                    "Show my location to everyone"
                </label>
            </div>
            <div class="comment-form__actions">
                <button class="comment-form__submit" type="submit" disabled=disabled>
                    {submit_label}
                </button>
                <Show when=editing>
                    <button class="comment-form__cancel" type="button" on:click=on_cancel>
                        "Cancel"
                    </button>
                </Show>
                <label class="comment-form__visible">
                    "Show "
                    <select on:change=move |ev| on_visible_change(event_target_value(&ev))>
                        {VISIBLE_COMMENT_CHOICES
                            .into_iter()
                            .map(|choice| {
                                let selected = move || page.with(|p| p.comments.visible == choice);
                                view! { <option value=choice.to_string() selected=selected>{choice}</option> }
                            })
                            .collect_view()}
                    </select>
                    " comments"
                </label>
            </div>
        </form>
    }
}

//! Rendered comment list with owner-only edit and delete controls.

use leptos::prelude::*;

use crate::controller::PageController;
use crate::net::types::CommentId;
use crate::state::Portfolio;
use crate::state::comments::CommentView;

#[component]
pub fn CommentList() -> impl IntoView {
    let page = expect_context::<RwSignal<Portfolio>>();
    let items = move || page.with(|p| p.comments.items.clone());

    view! {
        <div id="commentsSection" class="comments">
            <Show
                when=move || page.with(|p| !p.comments.items.is_empty())
                fallback=|| view! { <p class="comments__empty">"No comments yet."</p> }
            >
                <For each=items key=comment_key let:comment>
                    <CommentItem comment=comment/>
                </For>
            </Show>
        </div>
    }
}

#[component]
fn CommentItem(comment: CommentView) -> impl IntoView {
    let page = expect_context::<RwSignal<Portfolio>>();
    let controller = expect_context::<PageController>();
    let id = comment.id();
    let owned = comment.owned;

    let class = move || {
        page.with(|p| comment_class(p.comments.is_editing(id), p.comments.is_selected(id)))
    };

    let on_edit = move |_| {
        if let Err(e) = controller.begin_edit(id) {
            leptos::logging::warn!("edit comment {id}: {e}");
        }
    };

    let on_delete = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Err(e) = controller.delete_comment(id).await {
                leptos::logging::warn!("delete comment {id} failed: {e}");
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    };

    view! {
        <div class=class>
            <p class="commentAuthor">{comment.author_name}</p>
            <p class="commentText">
                <q>{comment.comment.text}</q>
            </p>
            <Show when=move || owned>
                <div class="comment__actions">
                    <button class="comment__edit" type="button" on:click=on_edit>"Edit"</button>
                    <button class="comment__delete" type="button" on:click=on_delete>"Delete"</button>
                </div>
            </Show>
        </div>
    }
}

fn comment_key(comment: &CommentView) -> (CommentId, String, String, bool) {
    (comment.id(), comment.comment.text.clone(), comment.author_name.clone(), comment.owned)
}

fn comment_class(editing: bool, selected: bool) -> String {
    let mut class = String::from("comment");
    if editing {
        class.push_str(" editing");
    }
    if selected {
        class.push_str(" selected");
    }
    class
}

//! Single-page portfolio: about, projects, gallery and comments tabs.
//!
//! SYSTEM CONTEXT
//! ==============
//! Content regions are tied to tabs by their `title` attribute and shown
//! with the `tabSelected` class. The text and picture wrappers are shared by
//! the regular tabs and hidden while the gallery tab is selected.
//!
//! On mount the page creates the map and runs the startup sequence (session,
//! then comments and their markers).

use leptos::prelude::*;

use crate::components::comment_form::CommentForm;
use crate::components::comment_list::CommentList;
use crate::components::info_panels::InfoPanels;
use crate::components::location_map::LocationMap;
use crate::components::session_banner::SessionBanner;
use crate::components::tab_bar::TabBar;
use crate::controller::PageController;
use crate::state::Portfolio;
use crate::state::ui::{ABOUT_TAB, COMMENTS_TAB, GALLERY_TAB, PROJECTS_TAB};
use crate::util::dom::wrapper_display;

const GALLERY_IMAGES: [(&str, &str); 6] = [
    ("/images/gallery-1.svg", "Sunrise over the bay"),
    ("/images/gallery-2.svg", "Trail in the redwoods"),
    ("/images/gallery-3.svg", "City lights"),
    ("/images/gallery-4.svg", "Desert road"),
    ("/images/gallery-5.svg", "Snowy ridge"),
    ("/images/gallery-6.svg", "Harbor at dusk"),
];

const PROJECTS: [(&str, &str); 3] = [
    ("Comment map", "This page: comments pinned to a map, backed by a small CRUD service."),
    ("Meeting planner", "Finds open meeting slots that fit every required attendee."),
    ("Photo wall", "A responsive gallery generated from a folder of images."),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let page = expect_context::<RwSignal<Portfolio>>();
    let controller = expect_context::<PageController>();

    // Runs once after mount; nothing in it is tracked.
    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        if let Err(e) = controller.create_map() {
            leptos::logging::warn!("map setup: {e}");
        }
        leptos::task::spawn_local(async move {
            if let Err(e) = controller.start().await {
                leptos::logging::warn!("page startup failed: {e}");
            }
        });
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = controller;

    let wrappers = move || wrapper_display(page.with(|p| p.tabs.layout_wrappers_visible));
    let content_class = move |title: &'static str| {
        move || {
            if page.with(|p| p.tabs.is_selected(title)) { "tabContent tabSelected" } else { "tabContent" }
        }
    };

    view! {
        <header class="site-header">
            <h1>"Portfolio"</h1>
            <TabBar/>
        </header>
        <main class="site-main">
            <div id="textWrapper" class="wrapper" style:display=wrappers>
                <section class=content_class(ABOUT_TAB) title=ABOUT_TAB>
                    <h2>"About Me"</h2>
                    <p>"Software engineer who likes building small, dependable tools."</p>
                    <InfoPanels/>
                </section>
                <section class=content_class(PROJECTS_TAB) title=PROJECTS_TAB>
                    <h2>"Projects"</h2>
                    {PROJECTS
                        .into_iter()
                        .map(|(name, summary)| {
                            view! {
                                <article class="project">
                                    <h3>{name}</h3>
                                    <p>{summary}</p>
                                </article>
                            }
                        })
                        .collect_view()}
                </section>
                <section class=content_class(COMMENTS_TAB) title=COMMENTS_TAB>
                    <h2>"Comments"</h2>
                    <SessionBanner/>
                    <CommentForm/>
                    <CommentList/>
                </section>
            </div>
            <div id="pictureWrapper" class="wrapper" style:display=wrappers>
                <img class="portrait" src="/images/portrait.svg" alt="Portrait"/>
                <div class=content_class(COMMENTS_TAB) title=COMMENTS_TAB>
                    <LocationMap/>
                </div>
            </div>
            <section class=content_class(GALLERY_TAB) title=GALLERY_TAB>
                <div class="gallery">
                    {GALLERY_IMAGES
                        .into_iter()
                        .map(|(src, alt)| view! { <img class="gallery__image" src=src alt=alt/> })
                        .collect_view()}
                </div>
            </section>
        </main>
    }
}

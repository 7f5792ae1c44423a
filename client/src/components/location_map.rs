//! Map of comment locations.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders the container element on the server; after hydration a Leaflet
//! map is mounted into it once `MapState::created` is set and kept in sync
//! with the map state through effects. Map clicks, temporary marker drags and
//! marker clicks are routed to the page controller. The widget is dropped,
//! and the Leaflet map removed, when the last effect holding it is disposed.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use crate::controller::PageController;
#[cfg(feature = "hydrate")]
use crate::state::Portfolio;
#[cfg(feature = "hydrate")]
use crate::state::ui::COMMENTS_TAB;
#[cfg(feature = "hydrate")]
use crate::util::leaflet::{MapCallbacks, MapWidget};

#[cfg(feature = "hydrate")]
fn callbacks(controller: PageController) -> MapCallbacks {
    MapCallbacks {
        on_map_click: Rc::new(move |position| {
            if let Err(e) = controller.place_temporary_marker(position) {
                leptos::logging::warn!("place marker: {e}");
            }
        }),
        on_temporary_click: Rc::new(move || {
            if let Err(e) = controller.remove_temporary_marker() {
                leptos::logging::warn!("remove marker: {e}");
            }
        }),
        on_temporary_drag: Rc::new(move |position| {
            if let Err(e) = controller.move_temporary_marker(position) {
                leptos::logging::warn!("move marker: {e}");
            }
        }),
        on_marker_click: Rc::new(move |id| {
            if let Err(e) = controller.select_marker(id) {
                leptos::logging::warn!("select marker {id}: {e}");
            }
        }),
    }
}

#[cfg(feature = "hydrate")]
fn sync_widget(widget: &mut MapWidget, page: &Portfolio) {
    widget.sync_temporary(page.map.temporary);
    widget.sync_markers(&page.map.markers);
}

#[component]
pub fn LocationMap() -> impl IntoView {
    let map_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    {
        let page = expect_context::<RwSignal<Portfolio>>();
        let controller = expect_context::<PageController>();
        let widget = Rc::new(RefCell::new(None::<MapWidget>));

        {
            let widget = Rc::clone(&widget);
            Effect::new(move || {
                let Some(element) = map_ref.get() else {
                    return;
                };
                if !page.with(|p| p.map.created) || widget.borrow().is_some() {
                    return;
                }
                let (center, zoom) = page.with_untracked(|p| (p.map.center, p.map.zoom));
                match MapWidget::mount(&element, center, zoom, callbacks(controller)) {
                    Ok(mut mounted) => {
                        page.with_untracked(|p| sync_widget(&mut mounted, p));
                        *widget.borrow_mut() = Some(mounted);
                    }
                    Err(e) => leptos::logging::warn!("map failed to load: {e:?}"),
                }
            });
        }

        // Memos keep unrelated page updates (typing in the form) from
        // re-applying the view and snapping back a user-panned map.
        let view = Memo::new(move |_| page.with(|p| (p.map.center, p.map.zoom, p.map.view_seq)));
        let layers = Memo::new(move |_| page.with(|p| (p.map.temporary, p.map.markers.clone())));

        {
            let widget = Rc::clone(&widget);
            Effect::new(move || {
                let (center, zoom, _seq) = view.get();
                if let Some(widget) = widget.borrow().as_ref() {
                    widget.set_view(center, zoom);
                }
            });
        }

        {
            let widget = Rc::clone(&widget);
            Effect::new(move || {
                layers.with(|(temporary, markers)| {
                    if let Some(widget) = widget.borrow_mut().as_mut() {
                        widget.sync_temporary(*temporary);
                        widget.sync_markers(markers);
                    }
                });
            });
        }

        {
            // Leaflet measures a hidden container as zero-sized.
            Effect::new(move || {
                if !page.with(|p| p.tabs.is_selected(COMMENTS_TAB)) {
                    return;
                }
                if let Some(widget) = widget.borrow().as_ref() {
                    widget.refresh_size();
                }
            });
        }
    }

    view! { <div id="map" class="location-map" node_ref=map_ref></div> }
}

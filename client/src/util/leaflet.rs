//! Bindings to the Leaflet map library and the map widget built on them.
//!
//! ARCHITECTURE
//! ============
//! Leaflet owns the map DOM. `MapWidget` mirrors `MapState` into it: the
//! component calls `sync_*` whenever state changes and the widget adds,
//! moves or removes Leaflet layers until the two agree. User input on the map
//! flows back out through `MapCallbacks`, never by mutating the widget
//! directly.
//!
//! Event closures are owned by the widget next to the layer they are bound
//! to, so removing a layer also frees its handlers.

use std::collections::HashMap;
use std::rc::Rc;

use js_sys::{Array, Object, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

use crate::net::types::{LatLng, MarkerId};
use crate::state::map::PlacedMarker;

const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
const TILE_ATTRIBUTION: &str = "&copy; OpenStreetMap contributors";
const MAX_ZOOM: f64 = 19.0;
const HIDDEN_MARKER_OPACITY: f64 = 0.5;

#[wasm_bindgen]
extern "C" {
    #[derive(Clone, Debug)]
    type Map;

    #[wasm_bindgen(catch, js_namespace = L, js_name = map)]
    fn create_map(element: &web_sys::HtmlElement) -> Result<Map, JsValue>;

    #[wasm_bindgen(method, js_name = setView)]
    fn set_view(this: &Map, center: &Array, zoom: f64) -> Map;

    #[wasm_bindgen(method, js_name = invalidateSize)]
    fn invalidate_size(this: &Map) -> Map;

    #[wasm_bindgen(method)]
    fn on(this: &Map, event: &str, handler: &Closure<dyn FnMut(JsValue)>) -> Map;

    #[wasm_bindgen(method)]
    fn remove(this: &Map) -> Map;

    #[derive(Clone, Debug)]
    type Layer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    fn tile_layer(url: &str, options: &Object) -> Layer;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    fn marker(position: &Array, options: &Object) -> Layer;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &Layer, map: &Map) -> Layer;

    #[wasm_bindgen(method, js_name = remove)]
    fn detach(this: &Layer) -> Layer;

    #[wasm_bindgen(method, js_name = on)]
    fn listen(this: &Layer, event: &str, handler: &Closure<dyn FnMut(JsValue)>) -> Layer;

    #[wasm_bindgen(method, js_name = getLatLng)]
    fn get_lat_lng(this: &Layer) -> JsValue;

    #[wasm_bindgen(method, js_name = setLatLng)]
    fn set_lat_lng(this: &Layer, position: &Array) -> Layer;
}

type Handler = Closure<dyn FnMut(JsValue)>;

/// Where map input goes.
#[derive(Clone)]
pub struct MapCallbacks {
    /// Click on empty map.
    pub on_map_click: Rc<dyn Fn(LatLng)>,
    /// Click on the temporary marker.
    pub on_temporary_click: Rc<dyn Fn()>,
    /// Drag end of the temporary marker, with its new position.
    pub on_temporary_drag: Rc<dyn Fn(LatLng)>,
    /// Click on an interactive permanent marker.
    pub on_marker_click: Rc<dyn Fn(MarkerId)>,
}

struct TemporaryLayer {
    position: LatLng,
    layer: Layer,
    _handlers: [Handler; 2],
}

struct MarkerLayer {
    placed: PlacedMarker,
    layer: Layer,
    _handler: Option<Handler>,
}

pub struct MapWidget {
    map: Map,
    callbacks: MapCallbacks,
    temporary: Option<TemporaryLayer>,
    markers: HashMap<MarkerId, MarkerLayer>,
    _on_click: Handler,
}

impl MapWidget {
    /// Create a Leaflet map inside `element`.
    ///
    /// # Errors
    ///
    /// Returns the JS exception if Leaflet is not loaded or rejects the
    /// container.
    pub fn mount(
        element: &web_sys::HtmlElement,
        center: LatLng,
        zoom: f64,
        callbacks: MapCallbacks,
    ) -> Result<Self, JsValue> {
        let map = create_map(element)?;
        map.set_view(&point(center), zoom);

        let tile_options = options(&[
            ("maxZoom", JsValue::from_f64(MAX_ZOOM)),
            ("attribution", JsValue::from_str(TILE_ATTRIBUTION)),
        ]);
        tile_layer(TILE_URL, &tile_options).add_to(&map);

        let on_map_click = Rc::clone(&callbacks.on_map_click);
        let on_click = Closure::<dyn FnMut(JsValue)>::new(move |event: JsValue| {
            if let Some(position) = event_position(&event) {
                on_map_click(position);
            }
        });
        map.on("click", &on_click);

        Ok(Self { map, callbacks, temporary: None, markers: HashMap::new(), _on_click: on_click })
    }

    pub fn set_view(&self, center: LatLng, zoom: f64) {
        self.map.set_view(&point(center), zoom);
    }

    /// Re-measure the container after it was shown.
    pub fn refresh_size(&self) {
        self.map.invalidate_size();
    }

    /// Show a draggable temporary marker at `position`, or none.
    pub fn sync_temporary(&mut self, position: Option<LatLng>) {
        if self.temporary.as_ref().map(|t| t.position) == position {
            return;
        }
        if let (Some(shown), Some(position)) = (self.temporary.as_mut(), position) {
            shown.layer.set_lat_lng(&point(position));
            shown.position = position;
            return;
        }
        if let Some(old) = self.temporary.take() {
            old.layer.detach();
        }
        let Some(position) = position else {
            return;
        };

        let layer = marker(&point(position), &options(&[("draggable", JsValue::TRUE)]));

        let on_click = Rc::clone(&self.callbacks.on_temporary_click);
        let click = Closure::<dyn FnMut(JsValue)>::new(move |_event: JsValue| on_click());

        let on_drag = Rc::clone(&self.callbacks.on_temporary_drag);
        let dragged = layer.clone();
        let drag_end = Closure::<dyn FnMut(JsValue)>::new(move |_event: JsValue| {
            if let Some(position) = lat_lng(&dragged.get_lat_lng()) {
                on_drag(position);
            }
        });

        layer.listen("click", &click);
        layer.listen("dragend", &drag_end);
        layer.add_to(&self.map);
        self.temporary = Some(TemporaryLayer { position, layer, _handlers: [click, drag_end] });
    }

    /// Make the permanent markers on the map match `markers`.
    pub fn sync_markers(&mut self, markers: &HashMap<MarkerId, PlacedMarker>) {
        self.markers.retain(|id, shown| {
            let keep = markers.get(id) == Some(&shown.placed);
            if !keep {
                shown.layer.detach();
            }
            keep
        });

        for (id, placed) in markers {
            if self.markers.contains_key(id) {
                continue;
            }
            let layer = self.marker_layer(placed);
            self.markers.insert(*id, layer);
        }
    }

    fn marker_layer(&self, placed: &PlacedMarker) -> MarkerLayer {
        let opacity = if placed.marker.visible { 1.0 } else { HIDDEN_MARKER_OPACITY };
        let layer = marker(
            &point(placed.marker.position()),
            &options(&[
                ("interactive", JsValue::from_bool(placed.interactive)),
                ("keyboard", JsValue::from_bool(placed.interactive)),
                ("opacity", JsValue::from_f64(opacity)),
            ]),
        );

        let handler = placed.interactive.then(|| {
            let id = placed.marker.id;
            let on_select = Rc::clone(&self.callbacks.on_marker_click);
            let handler = Closure::<dyn FnMut(JsValue)>::new(move |_event: JsValue| on_select(id));
            layer.listen("click", &handler);
            handler
        });

        layer.add_to(&self.map);
        MarkerLayer { placed: placed.clone(), layer, _handler: handler }
    }
}

impl Drop for MapWidget {
    fn drop(&mut self) {
        self.map.remove();
    }
}

fn point(position: LatLng) -> Array {
    Array::of2(&JsValue::from_f64(position.lat), &JsValue::from_f64(position.lng))
}

fn options(entries: &[(&str, JsValue)]) -> Object {
    let object = Object::new();
    for (key, value) in entries {
        if let Err(e) = Reflect::set(&object, &JsValue::from_str(key), value) {
            log::warn!("leaflet option {key} rejected: {e:?}");
        }
    }
    object
}

fn lat_lng(value: &JsValue) -> Option<LatLng> {
    let lat = Reflect::get(value, &JsValue::from_str("lat")).ok()?.as_f64()?;
    let lng = Reflect::get(value, &JsValue::from_str("lng")).ok()?.as_f64()?;
    Some(LatLng::new(lat, lng))
}

fn event_position(event: &JsValue) -> Option<LatLng> {
    let value = Reflect::get(event, &JsValue::from_str("latlng")).ok()?;
    lat_lng(&value)
}

//! Map view and marker table.
//!
//! ARCHITECTURE
//! ============
//! `LocationMap` owns the widget handles and mirrors this struct onto the
//! map: one permanent marker per `markers` entry, plus the draggable
//! temporary marker when one is placed. Bumping `view_seq` asks the widget
//! to pan to `center` even when the center did not change.

#[cfg(test)]
#[path = "map_test.rs"]
mod map_test;

use std::collections::HashMap;

use crate::net::types::{CommentId, LatLng, Marker, MarkerId};

/// Where the map opens and where comments without a chosen location land.
pub const DEFAULT_LOCATION: LatLng = LatLng::new(37.422, -122.084);
pub const DEFAULT_ZOOM: f64 = 3.0;
/// Zoom used when panning to a clicked marker.
pub const FOCUS_ZOOM: f64 = 8.0;

/// A saved marker rendered on the map.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedMarker {
    pub marker: Marker,
    /// Comment this marker tags.
    pub comment: Option<CommentId>,
    /// Non-interactive markers ignore clicks.
    pub interactive: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MapState {
    /// Set once the widget has been created.
    pub created: bool,
    pub center: LatLng,
    pub zoom: f64,
    pub view_seq: u64,
    /// Unsaved, user-placed location for the next submission.
    pub temporary: Option<LatLng>,
    /// Saved markers keyed by id.
    pub markers: HashMap<MarkerId, PlacedMarker>,
    /// Marker of the comment under edit, taken off the map while its
    /// temporary replacement is shown.
    pub hidden: Option<PlacedMarker>,
}

impl Default for MapState {
    fn default() -> Self {
        Self {
            created: false,
            center: DEFAULT_LOCATION,
            zoom: DEFAULT_ZOOM,
            view_seq: 0,
            temporary: None,
            markers: HashMap::new(),
            hidden: None,
        }
    }
}

impl MapState {
    /// Reset the view to the default location.
    pub fn create(&mut self) {
        self.created = true;
        self.zoom = DEFAULT_ZOOM;
        self.recenter(DEFAULT_LOCATION);
    }

    pub fn recenter(&mut self, center: LatLng) {
        self.center = center;
        self.view_seq = self.view_seq.wrapping_add(1);
    }

    /// Replace any temporary marker with one at `position` and pan to it.
    /// Returns the discarded position.
    pub fn place_temporary(&mut self, position: LatLng) -> Option<LatLng> {
        let previous = self.temporary.replace(position);
        self.recenter(position);
        previous
    }

    /// Drag end: the temporary marker now sits at `position`.
    pub fn move_temporary(&mut self, position: LatLng) -> bool {
        match self.temporary.as_mut() {
            Some(current) => {
                *current = position;
                self.recenter(position);
                true
            }
            None => false,
        }
    }

    pub fn clear_temporary(&mut self) -> Option<LatLng> {
        self.temporary.take()
    }

    pub fn insert(&mut self, placed: PlacedMarker) {
        self.markers.insert(placed.marker.id, placed);
    }

    pub fn remove(&mut self, id: MarkerId) -> Option<PlacedMarker> {
        self.markers.remove(&id)
    }

    /// Drop every saved marker ahead of a full refresh.
    pub fn clear_markers(&mut self) {
        self.markers.clear();
        self.hidden = None;
    }

    /// Take `id` off the map until `restore_hidden`. A previously hidden
    /// marker is put back first.
    pub fn hide(&mut self, id: MarkerId) -> Option<LatLng> {
        self.restore_hidden();
        let placed = self.markers.remove(&id)?;
        let position = placed.marker.position();
        self.hidden = Some(placed);
        Some(position)
    }

    pub fn restore_hidden(&mut self) {
        if let Some(placed) = self.hidden.take() {
            self.insert(placed);
        }
    }
}

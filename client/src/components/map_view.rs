//! Map presentation of the filtered listings.
//!
//! DESIGN
//! ======
//! A fixed-size OpenStreetMap tile mosaic fitted to the bounding box of every
//! listing that has coordinates, with one absolutely positioned marker per
//! plotted item.

#[cfg(test)]
#[path = "map_view_test.rs"]
mod map_view_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::net::types::Item;
use crate::util::geo::{DEFAULT_ZOOM, TILE_SIZE, Viewport};

const MAP_WIDTH: f64 = 768.0;
const MAP_HEIGHT: f64 = 400.0;
/// Margin kept between the outermost markers and the map edge.
const MAP_PADDING: f64 = 32.0;

/// One marker positioned inside the map viewport.
#[derive(Clone, Debug, PartialEq)]
pub struct MapMarker {
    pub item_id: i64,
    pub title: String,
    pub price: String,
    pub left: f64,
    pub top: f64,
}

/// Viewport that shows every item with usable coordinates.
pub fn map_viewport(items: &[Item]) -> Option<Viewport> {
    let points: Vec<(f64, f64)> = items.iter().filter_map(Item::coordinates).collect();
    Viewport::fit(&points, DEFAULT_ZOOM, MAP_WIDTH, MAP_HEIGHT, MAP_PADDING)
}

/// Markers for every plotted item, positioned relative to `viewport`.
pub fn map_markers(items: &[Item], viewport: &Viewport) -> Vec<MapMarker> {
    items
        .iter()
        .filter_map(|item| {
            let (lat, lng) = item.coordinates()?;
            let (left, top) = viewport.to_screen(lat, lng);
            Some(MapMarker {
                item_id: item.id,
                title: item.title.clone(),
                price: item.price.clone(),
                left,
                top,
            })
        })
        .collect()
}

/// Tile map with clickable listing markers.
#[component]
pub fn MapView(#[prop(into)] items: Signal<Vec<Item>>) -> impl IntoView {
    move || {
        let items = items.get();
        let Some(viewport) = map_viewport(&items) else {
            return view! { <p class="map-view__empty">"No items with location data."</p> }.into_any();
        };

        let tiles = viewport
            .tiles()
            .into_iter()
            .map(|tile| {
                view! {
                    <img
                        class="map-view__tile"
                        src=tile.url
                        alt=""
                        style:left=format!("{}px", tile.left)
                        style:top=format!("{}px", tile.top)
                        style:width=format!("{TILE_SIZE}px")
                        style:height=format!("{TILE_SIZE}px")
                    />
                }
            })
            .collect_view();

        let markers = map_markers(&items, &viewport)
            .into_iter()
            .map(|marker| {
                view! {
                    <a
                        class="map-view__marker"
                        href=format!("/book-item/{}", marker.item_id)
                        style:left=format!("{}px", marker.left)
                        style:top=format!("{}px", marker.top)
                        title=marker.title.clone()
                    >
                        <span class="map-view__pin"></span>
                        <span class="map-view__popup">
                            <strong>{marker.title.clone()}</strong>
                            <span>{format!("Price: ${} / day", marker.price)}</span>
                        </span>
                    </a>
                }
            })
            .collect_view();

        view! {
            <div
                class="map-view"
                style:width=format!("{MAP_WIDTH}px")
                style:height=format!("{MAP_HEIGHT}px")
            >
                {tiles}
                {markers}
                <span class="map-view__attribution">"© OpenStreetMap contributors"</span>
            </div>
        }
        .into_any()
    }
}

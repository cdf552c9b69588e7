//! Web-Mercator math for the listings map.
//!
//! DESIGN
//! ======
//! The map is a fixed-size mosaic of OpenStreetMap raster tiles with
//! absolutely positioned markers. All projection work happens here as pure
//! functions so the component only lays out rectangles.

#[cfg(test)]
#[path = "geo_test.rs"]
mod geo_test;

/// Edge length of one raster tile in CSS pixels.
pub const TILE_SIZE: f64 = 256.0;
/// Zoom level used when centering on a listing.
pub const DEFAULT_ZOOM: u8 = 13;
/// Latitude limit of the Web-Mercator projection.
const MAX_LATITUDE: f64 = 85.051_128_78;

/// Project a latitude/longitude pair to world pixel coordinates at `zoom`.
pub fn project(lat: f64, lng: f64, zoom: u8) -> (f64, f64) {
    let scale = TILE_SIZE * f64::from(1_u32 << zoom);
    let lat = lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
    let x = (lng + 180.0) / 360.0 * scale;
    let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / std::f64::consts::PI) / 2.0 * scale;
    (x, y)
}

/// One tile image placed inside the viewport.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedTile {
    pub url: String,
    pub left: f64,
    pub top: f64,
}

/// A fixed-size window onto the projected world.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub zoom: u8,
    /// World-pixel coordinate of the viewport's top-left corner.
    pub origin: (f64, f64),
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// Viewport of `width` x `height` centered on `(lat, lng)`.
    pub fn centered(lat: f64, lng: f64, zoom: u8, width: f64, height: f64) -> Self {
        Self::around(project(lat, lng, zoom), zoom, width, height)
    }

    fn around((cx, cy): (f64, f64), zoom: u8, width: f64, height: f64) -> Self {
        Self {
            zoom,
            origin: (cx - width / 2.0, cy - height / 2.0),
            width,
            height,
        }
    }

    /// Viewport that shows every point in `points`, at the deepest zoom up to
    /// `max_zoom` where their bounding box fits inside `padding` pixels of
    /// margin. `None` when `points` is empty.
    pub fn fit(
        points: &[(f64, f64)],
        max_zoom: u8,
        width: f64,
        height: f64,
        padding: f64,
    ) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        let inner_w = (width - 2.0 * padding).max(0.0);
        let inner_h = (height - 2.0 * padding).max(0.0);
        let mut zoom = max_zoom;
        loop {
            let (min_x, min_y, max_x, max_y) = points.iter().fold(
                (f64::INFINITY, f64::INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
                |(min_x, min_y, max_x, max_y), &(lat, lng)| {
                    let (x, y) = project(lat, lng, zoom);
                    (min_x.min(x), min_y.min(y), max_x.max(x), max_y.max(y))
                },
            );
            if zoom == 0 || (max_x - min_x <= inner_w && max_y - min_y <= inner_h) {
                let center = ((min_x + max_x) / 2.0, (min_y + max_y) / 2.0);
                return Some(Self::around(center, zoom, width, height));
            }
            zoom -= 1;
        }
    }

    /// Position of `(lat, lng)` relative to the viewport's top-left corner.
    pub fn to_screen(&self, lat: f64, lng: f64) -> (f64, f64) {
        let (x, y) = project(lat, lng, self.zoom);
        (x - self.origin.0, y - self.origin.1)
    }

    /// Tiles needed to cover the viewport, wrapped horizontally.
    #[allow(clippy::cast_possible_truncation)]
    pub fn tiles(&self) -> Vec<PlacedTile> {
        let tiles_per_axis = i64::from(1_u32 << self.zoom);
        let first_x = (self.origin.0 / TILE_SIZE).floor() as i64;
        let first_y = (self.origin.1 / TILE_SIZE).floor() as i64;
        let last_x = ((self.origin.0 + self.width) / TILE_SIZE).floor() as i64;
        let last_y = ((self.origin.1 + self.height) / TILE_SIZE).floor() as i64;

        let mut placed = Vec::new();
        for ty in first_y..=last_y {
            if ty < 0 || ty >= tiles_per_axis {
                continue;
            }
            for tx in first_x..=last_x {
                let wrapped_x = tx.rem_euclid(tiles_per_axis);
                #[allow(clippy::cast_precision_loss)]
                placed.push(PlacedTile {
                    url: tile_url(self.zoom, wrapped_x, ty),
                    left: tx as f64 * TILE_SIZE - self.origin.0,
                    top: ty as f64 * TILE_SIZE - self.origin.1,
                });
            }
        }
        placed
    }
}

/// OpenStreetMap raster tile URL.
pub fn tile_url(zoom: u8, x: i64, y: i64) -> String {
    format!("https://tile.openstreetmap.org/{zoom}/{x}/{y}.png")
}

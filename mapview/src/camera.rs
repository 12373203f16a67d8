#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use crate::consts::{MAX_LATITUDE, MAX_ZOOM, MIN_ZOOM, TILE_SIZE};
use crate::geo::{LatLng, LatLngBounds};

/// A point in screen space (CSS pixels) or projected world pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn add(self, other: Point) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }

    #[must_use]
    pub fn sub(self, other: Point) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }

    #[must_use]
    pub fn distance_to(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// World size in pixels at `zoom`.
#[must_use]
pub fn world_scale(zoom: f64) -> f64 {
    TILE_SIZE * zoom.exp2()
}

/// Spherical Mercator projection of `lat_lng` into world pixels at `zoom`.
#[must_use]
pub fn project(lat_lng: LatLng, zoom: f64) -> Point {
    let scale = world_scale(zoom);
    let lat = lat_lng.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE);
    let sin = lat.to_radians().sin();
    let x = (lat_lng.lng + 180.0) / 360.0 * scale;
    let y = (0.5 - ((1.0 + sin) / (1.0 - sin)).ln() / (4.0 * std::f64::consts::PI)) * scale;
    Point::new(x, y)
}

/// Inverse of [`project`].
#[must_use]
pub fn unproject(point: Point, zoom: f64) -> LatLng {
    let scale = world_scale(zoom);
    let lng = point.x / scale * 360.0 - 180.0;
    let n = std::f64::consts::PI - 2.0 * std::f64::consts::PI * point.y / scale;
    let lat = n.sinh().atan().to_degrees();
    LatLng::new(lat, lng)
}

/// Camera state for the map viewport.
///
/// `center` is the geographic point under the middle of the viewport.
/// `zoom` is a Web Mercator zoom level. `width` / `height` are the viewport
/// size in CSS pixels.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub center: LatLng,
    pub zoom: f64,
    pub width: f64,
    pub height: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { center: LatLng::new(39.8, -98.6), zoom: 4.0, width: 0.0, height: 0.0 }
    }
}

impl Camera {
    #[must_use]
    pub fn with_size(width: f64, height: f64) -> Self {
        Self { width, height, ..Self::default() }
    }

    /// Viewport size as a point.
    #[must_use]
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    /// World pixel at the top-left corner of the viewport.
    #[must_use]
    pub fn pixel_origin(&self) -> Point {
        project(self.center, self.zoom).sub(Point::new(self.width / 2.0, self.height / 2.0))
    }

    /// Convert a geographic coordinate to viewport pixels.
    #[must_use]
    pub fn lat_lng_to_container_point(&self, lat_lng: LatLng) -> Point {
        project(lat_lng, self.zoom).sub(self.pixel_origin())
    }

    /// Convert viewport pixels to a geographic coordinate.
    #[must_use]
    pub fn container_point_to_lat_lng(&self, point: Point) -> LatLng {
        unproject(point.add(self.pixel_origin()), self.zoom)
    }

    /// Geographic rectangle currently visible.
    #[must_use]
    pub fn bounds(&self) -> LatLngBounds {
        let south_west = self.container_point_to_lat_lng(Point::new(0.0, self.height));
        let north_east = self.container_point_to_lat_lng(Point::new(self.width, 0.0));
        LatLngBounds::new(south_west, north_east)
    }

    /// Largest whole zoom level at which `bounds` fits in the viewport.
    #[must_use]
    pub fn bounds_zoom(&self, bounds: &LatLngBounds) -> f64 {
        let north_west = project(LatLng::new(bounds.north_east.lat, bounds.south_west.lng), 0.0);
        let south_east = project(LatLng::new(bounds.south_west.lat, bounds.north_east.lng), 0.0);
        let dx = (south_east.x - north_west.x).abs();
        let dy = (south_east.y - north_west.y).abs();
        let scale = (self.width / dx).min(self.height / dy);
        if scale.is_nan() {
            return MAX_ZOOM;
        }
        scale.log2().floor().clamp(MIN_ZOOM, MAX_ZOOM)
    }

    /// Center and zoom the camera so `bounds` fills the viewport.
    pub fn fit_bounds(&mut self, bounds: &LatLngBounds) {
        let zoom = self.bounds_zoom(bounds);
        let south_west = project(bounds.south_west, zoom);
        let north_east = project(bounds.north_east, zoom);
        let mid = Point::new((south_west.x + north_east.x) / 2.0, (south_west.y + north_east.y) / 2.0);
        self.center = unproject(mid, zoom);
        self.zoom = zoom;
    }

    /// Move to `center` at `zoom` (clamped to the allowed range).
    pub fn set_view(&mut self, center: LatLng, zoom: f64) {
        self.center = center;
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Shift the map content by `delta` screen pixels (as a drag does).
    pub fn pan_by(&mut self, delta: Point) {
        let mid = Point::new(self.width / 2.0, self.height / 2.0);
        self.center = self.container_point_to_lat_lng(mid.sub(delta));
    }

    /// Change zoom while keeping the coordinate under `anchor` fixed on screen.
    pub fn zoom_around(&mut self, anchor: Point, zoom: f64) {
        let anchored = self.container_point_to_lat_lng(anchor);
        let zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        let origin = project(anchored, zoom).sub(anchor);
        self.center = unproject(origin.add(Point::new(self.width / 2.0, self.height / 2.0)), zoom);
        self.zoom = zoom;
    }

    /// Resize the viewport, keeping the center fixed.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }
}

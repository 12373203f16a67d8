//! Shared numeric constants for the mapview crate.

// ── Projection ──────────────────────────────────────────────────

/// Edge length of one Web Mercator tile in CSS pixels.
pub const TILE_SIZE: f64 = 256.0;

/// Latitude limit of the Web Mercator projection.
pub const MAX_LATITUDE: f64 = 85.051_128_779_806_6;

/// Mean Earth radius in meters, used for great-circle distances.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

// ── Zoom ────────────────────────────────────────────────────────

/// Lowest zoom level the camera allows.
pub const MIN_ZOOM: f64 = 0.0;

/// Highest zoom level the camera allows (matches the tile providers).
pub const MAX_ZOOM: f64 = 18.0;

/// Zoom change applied per 100 px of wheel delta.
pub const WHEEL_ZOOM_PER_100PX: f64 = 0.5;

// ── Input ───────────────────────────────────────────────────────

/// Pointer travel in pixels below which a press/release counts as a click.
pub const CLICK_SLOP_PX: f64 = 4.0;

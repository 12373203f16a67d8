#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-6;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn point_approx_eq(a: Point, b: Point) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

fn lat_lng_approx_eq(a: LatLng, b: LatLng) -> bool {
    approx_eq(a.lat, b.lat) && approx_eq(a.lng, b.lng)
}

fn columbus_camera() -> Camera {
    Camera { center: LatLng::new(39.96, -83.0), zoom: 11.0, width: 800.0, height: 600.0 }
}

// --- Point ---

#[test]
fn point_add_and_sub() {
    let a = Point::new(3.0, 4.0);
    let b = Point::new(1.0, -2.0);
    assert_eq!(a.add(b), Point::new(4.0, 2.0));
    assert_eq!(a.sub(b), Point::new(2.0, 6.0));
}

#[test]
fn point_distance() {
    assert!(approx_eq(Point::new(0.0, 0.0).distance_to(Point::new(3.0, 4.0)), 5.0));
}

// --- Projection ---

#[test]
fn world_scale_doubles_per_zoom() {
    assert_eq!(world_scale(0.0), 256.0);
    assert_eq!(world_scale(1.0), 512.0);
    assert_eq!(world_scale(3.0), 2048.0);
}

#[test]
fn project_origin_is_world_center() {
    let p = project(LatLng::new(0.0, 0.0), 0.0);
    assert!(point_approx_eq(p, Point::new(128.0, 128.0)));
}

#[test]
fn project_west_edge_is_zero_x() {
    let p = project(LatLng::new(0.0, -180.0), 2.0);
    assert!(approx_eq(p.x, 0.0));
}

#[test]
fn project_north_is_smaller_y() {
    let north = project(LatLng::new(45.0, 0.0), 3.0);
    let south = project(LatLng::new(-45.0, 0.0), 3.0);
    assert!(north.y < south.y);
}

#[test]
fn project_round_trip() {
    let ll = LatLng::new(33.749, -84.388);
    let back = unproject(project(ll, 12.0), 12.0);
    assert!(lat_lng_approx_eq(ll, back));
}

// --- Container conversions ---

#[test]
fn center_maps_to_viewport_middle() {
    let cam = columbus_camera();
    let p = cam.lat_lng_to_container_point(cam.center);
    assert!(point_approx_eq(p, Point::new(400.0, 300.0)));
}

#[test]
fn container_round_trip() {
    let cam = columbus_camera();
    let screen = Point::new(123.0, 456.0);
    let back = cam.lat_lng_to_container_point(cam.container_point_to_lat_lng(screen));
    assert!(point_approx_eq(screen, back));
}

#[test]
fn bounds_contains_center() {
    let cam = columbus_camera();
    let bounds = cam.bounds();
    assert!(bounds.contains(cam.center));
    assert!(bounds.south_west.lat < bounds.north_east.lat);
    assert!(bounds.south_west.lng < bounds.north_east.lng);
}

// --- fit_bounds ---

#[test]
fn bounds_zoom_of_point_is_max_zoom() {
    let cam = columbus_camera();
    let ll = LatLng::new(40.0, -83.0);
    assert_eq!(cam.bounds_zoom(&LatLngBounds::new(ll, ll)), MAX_ZOOM);
}

#[test]
fn bounds_zoom_of_empty_viewport_is_min_zoom() {
    let cam = Camera::default();
    let bounds = LatLngBounds::new(LatLng::new(39.0, -84.0), LatLng::new(41.0, -82.0));
    assert_eq!(cam.bounds_zoom(&bounds), MIN_ZOOM);
}

#[test]
fn fit_bounds_snaps_to_whole_zoom() {
    let mut cam = columbus_camera();
    let bounds = LatLngBounds::new(LatLng::new(39.8, -83.2), LatLng::new(40.1, -82.8));
    cam.fit_bounds(&bounds);
    assert_eq!(cam.zoom.fract(), 0.0);
}

#[test]
fn fit_bounds_shows_whole_target() {
    let mut cam = columbus_camera();
    cam.zoom = 3.0;
    let bounds = LatLngBounds::new(LatLng::new(39.8, -83.2), LatLng::new(40.1, -82.8));
    cam.fit_bounds(&bounds);
    let view = cam.bounds();
    assert!(view.contains(bounds.south_west));
    assert!(view.contains(bounds.north_east));
}

#[test]
fn fit_bounds_is_as_tight_as_possible() {
    let mut cam = columbus_camera();
    let bounds = LatLngBounds::new(LatLng::new(39.8, -83.2), LatLng::new(40.1, -82.8));
    cam.fit_bounds(&bounds);
    let mut closer = cam;
    closer.zoom += 1.0;
    let view = closer.bounds();
    assert!(!(view.contains(bounds.south_west) && view.contains(bounds.north_east)));
}

#[test]
fn fit_bounds_centers_on_target() {
    let mut cam = columbus_camera();
    let bounds = LatLngBounds::new(LatLng::new(39.8, -83.2), LatLng::new(40.1, -82.8));
    cam.fit_bounds(&bounds);
    let sw = cam.lat_lng_to_container_point(bounds.south_west);
    let ne = cam.lat_lng_to_container_point(bounds.north_east);
    assert!(approx_eq((sw.x + ne.x) / 2.0, 400.0));
    assert!(approx_eq((sw.y + ne.y) / 2.0, 300.0));
}

// --- set_view / pan / zoom ---

#[test]
fn set_view_clamps_zoom() {
    let mut cam = columbus_camera();
    cam.set_view(LatLng::new(10.0, 10.0), 40.0);
    assert_eq!(cam.zoom, MAX_ZOOM);
    cam.set_view(LatLng::new(10.0, 10.0), -3.0);
    assert_eq!(cam.zoom, MIN_ZOOM);
}

#[test]
fn pan_by_moves_content_with_pointer() {
    let mut cam = columbus_camera();
    let before = cam.center;
    cam.pan_by(Point::new(10.0, -20.0));
    let p = cam.lat_lng_to_container_point(before);
    assert!(point_approx_eq(p, Point::new(410.0, 280.0)));
}

#[test]
fn zoom_around_keeps_anchor_fixed() {
    let mut cam = columbus_camera();
    let anchor = Point::new(100.0, 500.0);
    let under = cam.container_point_to_lat_lng(anchor);
    cam.zoom_around(anchor, 13.5);
    assert_eq!(cam.zoom, 13.5);
    assert!(point_approx_eq(cam.lat_lng_to_container_point(under), anchor));
}

#[test]
fn resize_keeps_center() {
    let mut cam = columbus_camera();
    let center = cam.center;
    cam.resize(1024.0, 768.0);
    assert!(lat_lng_approx_eq(cam.center, center));
    assert!(point_approx_eq(cam.lat_lng_to_container_point(center), Point::new(512.0, 384.0)));
}

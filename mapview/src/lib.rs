//! Map viewport, layer and input engine for the parking lot map.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! map's camera (Web Mercator pan/zoom), the stack of vector layers drawn on
//! top of it, hit-testing of city boundaries, and the gesture state machine
//! that turns raw pointer input into camera moves. The host UI crate is
//! responsible only for wiring DOM events to the engine and reacting to the
//! [`engine::MapEvent`]s it queues.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level [`engine::MapCore`] and its event queue |
//! | [`geo`] | Lat/lng math, bounds, and the GeoJSON subset we read |
//! | [`camera`] | Web Mercator camera and coordinate conversions |
//! | [`layers`] | Ordered stack of boundary and detail layers |
//! | [`input`] | Input event types and the gesture state machine |
//! | [`hit`] | Point-in-polygon hit-testing against boundary layers |
//! | [`render`] | Canvas2D scene rendering |
//! | [`consts`] | Shared numeric constants (zoom limits, tile size, etc.) |

pub mod camera;
pub mod consts;
pub mod engine;
pub mod geo;
pub mod hit;
pub mod input;
pub mod layers;
pub mod render;

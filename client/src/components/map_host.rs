//! Canvas that shows the map and forwards pointer input to it.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page owns the [`MapHandle`] (it is created by `bootstrap`, after the
//! canvas exists so the viewport can be measured). This component only sees
//! it through a [`MapSlot`], which is empty until startup finishes; input
//! that arrives earlier is dropped.
//!
//! Rendering is pull-based: the map's render hook asks for an animation
//! frame, and at most one frame is pending at a time.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;

use crate::state::map::MapHandle;

#[cfg(feature = "csr")]
use std::cell::Cell;

#[cfg(feature = "csr")]
use mapview::camera::Point;
#[cfg(feature = "csr")]
use mapview::input::{Button, WheelDelta};
#[cfg(feature = "csr")]
use mapview::render::Renderer;
#[cfg(feature = "csr")]
use wasm_bindgen::{JsCast, closure::Closure};

/// Map handle shared between the page and its canvas, filled in at startup.
pub type MapSlot = Rc<RefCell<Option<MapHandle>>>;

#[cfg(feature = "csr")]
fn current_map(slot: &MapSlot) -> Option<MapHandle> {
    slot.borrow().clone()
}

#[cfg(feature = "csr")]
fn map_button(button: i16) -> Button {
    match button {
        1 => Button::Middle,
        2 => Button::Secondary,
        _ => Button::Primary,
    }
}

#[cfg(feature = "csr")]
fn pointer_point(ev: &leptos::ev::PointerEvent) -> Point {
    Point::new(f64::from(ev.offset_x()), f64::from(ev.offset_y()))
}

#[cfg(feature = "csr")]
fn device_pixel_ratio() -> f64 {
    web_sys::window().map_or(1.0, |window| window.device_pixel_ratio().max(1.0))
}

/// CSS size of the canvas, or `(1, 1)` before it is laid out.
#[cfg(feature = "csr")]
pub fn measure(canvas_ref: &NodeRef<leptos::html::Canvas>) -> (f64, f64) {
    let Some(canvas) = canvas_ref.get_untracked() else {
        return (1.0, 1.0);
    };
    (f64::from(canvas.client_width()).max(1.0), f64::from(canvas.client_height()).max(1.0))
}

#[cfg(feature = "csr")]
fn draw(map: &MapHandle, renderer: &Renderer) {
    let dpr = device_pixel_ratio();
    let (width, height) = map.with_core(|core| (core.camera.width, core.camera.height));
    let started_ms = js_sys::Date::now();
    renderer.resize(width, height, dpr);
    if let Err(err) = map.with_core(|core| renderer.draw(core, dpr)) {
        log::warn!("map: frame failed: {err:?}");
        return;
    }
    log::trace!("map: frame drawn in {:.1}ms", (js_sys::Date::now() - started_ms).max(0.0));
}

#[cfg(feature = "csr")]
fn request_render(map: &MapHandle, renderer: &Rc<Renderer>, pending: &Rc<Cell<bool>>) {
    if pending.replace(true) {
        return;
    }
    let Some(window) = web_sys::window() else {
        pending.set(false);
        draw(map, renderer);
        return;
    };

    let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let map_for_cb = map.clone();
    let renderer_for_cb = Rc::clone(renderer);
    let pending_for_cb = Rc::clone(pending);
    let cb = Closure::wrap(Box::new(move |_ts: f64| {
        pending_for_cb.set(false);
        draw(&map_for_cb, &renderer_for_cb);
        holder_for_cb.borrow_mut().take();
    }) as Box<dyn FnMut(f64)>);

    if window.request_animation_frame(cb.as_ref().unchecked_ref()).is_ok() {
        *holder.borrow_mut() = Some(cb);
    } else {
        pending.set(false);
        draw(map, renderer);
    }
}

/// Bind the canvas to `map` and draw the first frame.
#[cfg(feature = "csr")]
pub fn attach_renderer(map: &MapHandle, canvas: web_sys::HtmlCanvasElement) {
    let renderer = match Renderer::new(canvas) {
        Ok(renderer) => Rc::new(renderer),
        Err(err) => {
            log::error!("map: canvas has no 2d context: {err:?}");
            return;
        }
    };
    let pending = Rc::new(Cell::new(false));
    let hook_map = map.clone();
    let hook_renderer = Rc::clone(&renderer);
    let hook_pending = Rc::clone(&pending);
    map.set_render_hook(move || request_render(&hook_map, &hook_renderer, &hook_pending));
    request_render(map, &renderer, &pending);
}

/// Re-measure the canvas on every window resize.
#[cfg(feature = "csr")]
pub fn watch_resize(map: &MapHandle, canvas_ref: NodeRef<leptos::html::Canvas>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let map = map.clone();
    let on_resize = Closure::wrap(Box::new(move || {
        let (width, height) = measure(&canvas_ref);
        map.invalidate_size(width, height);
    }) as Box<dyn FnMut()>);
    match window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref()) {
        Ok(()) => on_resize.forget(),
        Err(err) => log::warn!("map: cannot watch window size: {err:?}"),
    }
}

/// The map canvas.
#[component]
pub fn MapHost(canvas_ref: NodeRef<leptos::html::Canvas>, map: MapSlot) -> impl IntoView {
    let on_pointer_down = {
        #[cfg(feature = "csr")]
        {
            let slot = Rc::clone(&map);
            move |ev: leptos::ev::PointerEvent| {
                let Some(map) = current_map(&slot) else {
                    return;
                };
                ev.prevent_default();
                if let Some(canvas) = canvas_ref.get_untracked() {
                    if let Err(err) = canvas.set_pointer_capture(ev.pointer_id()) {
                        log::debug!("map: pointer capture refused: {err:?}");
                    }
                }
                let point = pointer_point(&ev);
                let button = map_button(ev.button());
                map.update(|core| core.on_pointer_down(point, button));
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            drop(map);
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_move = {
        #[cfg(feature = "csr")]
        {
            let slot = Rc::clone(&map);
            move |ev: leptos::ev::PointerEvent| {
                if let Some(map) = current_map(&slot) {
                    let point = pointer_point(&ev);
                    map.update(|core| core.on_pointer_move(point));
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_up = {
        #[cfg(feature = "csr")]
        {
            let slot = Rc::clone(&map);
            move |ev: leptos::ev::PointerEvent| {
                let Some(map) = current_map(&slot) else {
                    return;
                };
                if let Some(canvas) = canvas_ref.get_untracked() {
                    if let Err(err) = canvas.release_pointer_capture(ev.pointer_id()) {
                        log::debug!("map: pointer release refused: {err:?}");
                    }
                }
                let point = pointer_point(&ev);
                let button = map_button(ev.button());
                map.update(|core| core.on_pointer_up(point, button));
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    // Fires after a normal release too; the core is idle by then.
    let on_pointer_cancel = {
        #[cfg(feature = "csr")]
        {
            let slot = Rc::clone(&map);
            move |_ev: leptos::ev::PointerEvent| {
                if let Some(map) = current_map(&slot) {
                    map.update(mapview::engine::MapCore::on_pointer_cancel);
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_wheel = {
        #[cfg(feature = "csr")]
        {
            let slot = Rc::clone(&map);
            move |ev: leptos::ev::WheelEvent| {
                let Some(map) = current_map(&slot) else {
                    return;
                };
                ev.prevent_default();
                let point = Point::new(f64::from(ev.offset_x()), f64::from(ev.offset_y()));
                let delta = WheelDelta { dx: ev.delta_x(), dy: ev.delta_y() };
                map.update(|core| core.on_wheel(point, delta));
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::WheelEvent| {}
        }
    };

    view! {
        <canvas
            class="map"
            node_ref=canvas_ref
            on:pointerdown=on_pointer_down
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_up
            on:pointercancel=on_pointer_cancel.clone()
            on:lostpointercapture=on_pointer_cancel
            on:wheel=on_wheel
        >
            "Your browser does not support canvas."
        </canvas>
    }
}

use crate::dom;
use crate::frame::FrameDriver;
use crate::input;
use field_core::PointerState;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type Handler = Closure<dyn FnMut(web::Event)>;

/// A registered DOM listener. Dropping the guard unregisters it.
pub struct ListenerGuard {
    target: web::EventTarget,
    kind: &'static str,
    closure: Handler,
}

impl ListenerGuard {
    fn attach(target: &web::EventTarget, kind: &'static str, closure: Handler) -> Option<Self> {
        match target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref()) {
            Ok(()) => Some(Self {
                target: target.clone(),
                kind,
                closure,
            }),
            Err(e) => {
                log::warn!("[events] failed to add {} listener: {:?}", kind, e);
                None
            }
        }
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

/// Wire resize, visibility, mouse and touch input into the driver's engine.
pub fn wire_listeners(driver: &FrameDriver, canvas: &web::HtmlCanvasElement) -> Vec<ListenerGuard> {
    let Some(window) = web::window() else {
        return Vec::new();
    };
    let win: &web::EventTarget = window.as_ref();
    let mut guards = Vec::new();

    guards.extend(wire_resize(win, driver, canvas));
    if let Some(document) = dom::window_document() {
        guards.extend(wire_visibility(document.as_ref(), driver));
    }
    guards.extend(wire_mousemove(win, driver, canvas));
    guards.extend(wire_mouseout(win, driver));
    for kind in ["touchstart", "touchmove", "touchend", "touchcancel"] {
        guards.extend(wire_touch(win, kind, driver, canvas));
    }
    log::debug!("[events] {} listeners attached", guards.len());
    guards
}

fn wire_resize(
    target: &web::EventTarget,
    driver: &FrameDriver,
    canvas: &web::HtmlCanvasElement,
) -> Option<ListenerGuard> {
    let driver = driver.clone();
    let canvas = canvas.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::Event| {
        if let Some(fit) = dom::fit_canvas_to_window(&canvas) {
            let mut ctx = driver.context().borrow_mut();
            ctx.engine.surface_mut().set_pixel_ratio(fit.pixel_ratio);
            ctx.engine.resize(fit.viewport);
        }
    }) as Box<dyn FnMut(web::Event)>);
    ListenerGuard::attach(target, "resize", closure)
}

fn wire_visibility(target: &web::EventTarget, driver: &FrameDriver) -> Option<ListenerGuard> {
    let driver = driver.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::Event| {
        if dom::document_hidden() {
            driver.pause();
        } else {
            driver.resume();
        }
    }) as Box<dyn FnMut(web::Event)>);
    ListenerGuard::attach(target, "visibilitychange", closure)
}

fn wire_mousemove(
    target: &web::EventTarget,
    driver: &FrameDriver,
    canvas: &web::HtmlCanvasElement,
) -> Option<ListenerGuard> {
    let driver = driver.clone();
    let canvas = canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        let Some(mouse) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let pointer = input::pointer_from_mouse(mouse, &canvas);
        driver.context().borrow_mut().engine.set_pointer(pointer);
    }) as Box<dyn FnMut(web::Event)>);
    ListenerGuard::attach(target, "mousemove", closure)
}

// Leaving the window fires `mouseout` with no related target.
fn wire_mouseout(target: &web::EventTarget, driver: &FrameDriver) -> Option<ListenerGuard> {
    let driver = driver.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        let left_window = ev
            .dyn_ref::<web::MouseEvent>()
            .map(|m| m.related_target().is_none())
            .unwrap_or(false);
        if left_window {
            driver
                .context()
                .borrow_mut()
                .engine
                .set_pointer(PointerState::Absent);
        }
    }) as Box<dyn FnMut(web::Event)>);
    ListenerGuard::attach(target, "mouseout", closure)
}

fn wire_touch(
    target: &web::EventTarget,
    kind: &'static str,
    driver: &FrameDriver,
    canvas: &web::HtmlCanvasElement,
) -> Option<ListenerGuard> {
    let driver = driver.clone();
    let canvas = canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        let Some(touch) = ev.dyn_ref::<web::TouchEvent>() else {
            return;
        };
        let pointer = input::pointer_from_touch(touch, &canvas);
        driver.context().borrow_mut().engine.set_pointer(pointer);
    }) as Box<dyn FnMut(web::Event)>);
    ListenerGuard::attach(target, kind, closure)
}

#![cfg(target_arch = "wasm32")]
use crate::constants::{ATTACHED_ATTR, DEFAULT_CANVAS_ID, MESH_ATTR, SEED_ATTR};
use crate::events::ListenerGuard;
use crate::frame::{FrameContext, FrameDriver};
use crate::options::FieldOptions;
use crate::surface::CanvasSurface;
use field_core::{Engine, FieldError, LoopPhase};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod options;
mod scale;
mod surface;

/// A running background. Dropping (or `free()` from JS) tears it down.
#[wasm_bindgen]
pub struct FieldHandle {
    driver: FrameDriver,
    canvas: web::HtmlCanvasElement,
    listeners: Vec<ListenerGuard>,
}

#[wasm_bindgen]
impl FieldHandle {
    pub fn pause(&self) {
        self.driver.pause();
    }

    pub fn resume(&self) {
        self.driver.resume();
    }

    pub fn is_running(&self) -> bool {
        self.driver.context().borrow().engine.phase() == LoopPhase::Running
    }

    /// Stop the loop, remove every listener and release the canvas.
    pub fn destroy(&mut self) {
        if self.driver.context().borrow().engine.phase() == LoopPhase::Destroyed {
            return;
        }
        self.driver.destroy();
        self.listeners.clear();
        _ = self.canvas.remove_attribute(ATTACHED_ATTR);
        log::info!("[field] background destroyed");
    }
}

impl Drop for FieldHandle {
    fn drop(&mut self) {
        self.destroy();
    }
}

fn random_seed() -> u64 {
    (js_sys::Math::random() * 2f64.powi(53)) as u64
}

fn init(options: FieldOptions) -> anyhow::Result<Option<FieldHandle>> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = match dom::find_canvas(&document, &options.canvas_id) {
        Ok(c) => c,
        Err(e @ FieldError::MissingSurface(_)) => {
            log::warn!("[field] {}; background disabled", e);
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };
    if canvas.has_attribute(ATTACHED_ATTR) {
        log::warn!("[field] #{} already has a background", options.canvas_id);
        return Ok(None);
    }
    let options = options.with_attributes(
        canvas.get_attribute(MESH_ATTR).as_deref(),
        canvas.get_attribute(SEED_ATTR).as_deref(),
    );

    let ctx = dom::context_2d(&canvas, &options.canvas_id)?;
    let fit = dom::fit_canvas_to_window(&canvas)
        .ok_or_else(|| anyhow::anyhow!("could not size #{}", options.canvas_id))?;
    let viewport = fit.viewport;
    let seed = options.seed.unwrap_or_else(random_seed);
    let surface = CanvasSurface::new(ctx, fit.pixel_ratio);
    let engine = Engine::new(surface, viewport, options.mesh, seed);
    log::info!(
        "[field] #{} {}x{} @{}x {:?} tier, {} entities, mesh={:?}, seed={}",
        options.canvas_id,
        viewport.width,
        viewport.height,
        fit.pixel_ratio,
        engine.field().config().tier,
        engine.field().entity_count(),
        options.mesh,
        seed
    );

    let driver = FrameDriver::new(Rc::new(RefCell::new(FrameContext::new(engine))));
    let listeners = events::wire_listeners(&driver, &canvas);
    _ = canvas.set_attribute(ATTACHED_ATTR, "");

    driver.start();
    if dom::document_hidden() {
        driver.pause();
    }
    Ok(Some(FieldHandle {
        driver,
        canvas,
        listeners,
    }))
}

/// Attach a background to the canvas with the given id (default `bg-canvas`).
/// Returns `undefined` when the canvas is missing or already attached.
#[wasm_bindgen]
pub fn attach_background(canvas_id: Option<String>) -> Option<FieldHandle> {
    let id = canvas_id.as_deref().unwrap_or(DEFAULT_CANVAS_ID);
    match init(FieldOptions::for_canvas(id)) {
        Ok(handle) => handle,
        Err(e) => {
            log::error!("[field] init failed: {:?}", e);
            None
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();

    // The default canvas lives for the whole page.
    if let Some(handle) = attach_background(None) {
        std::mem::forget(handle);
    }
    Ok(())
}

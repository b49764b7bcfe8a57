use crate::constants::{MAX_FRAME_DT_SEC, RESUME_DT_SEC};
use crate::surface::CanvasSurface;
use field_core::{Engine, FrameHandle, LoopCommand};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub engine: Engine<CanvasSurface>,
    pub last_instant: Instant,
    pub resumed: bool,
}

impl FrameContext {
    pub fn new(engine: Engine<CanvasSurface>) -> Self {
        Self {
            engine,
            last_instant: Instant::now(),
            resumed: true,
        }
    }

    /// One host frame: measure dt and hand it to the engine.
    pub fn frame(&mut self) -> LoopCommand {
        let now = Instant::now();
        let dt = if self.resumed {
            self.resumed = false;
            RESUME_DT_SEC
        } else {
            (now - self.last_instant).as_secs_f32().min(MAX_FRAME_DT_SEC)
        };
        self.last_instant = now;
        self.engine.on_frame(dt)
    }
}

type TickClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Owns the requestAnimationFrame callback and carries out the engine's
/// [`LoopCommand`]s against the window.
#[derive(Clone)]
pub struct FrameDriver {
    ctx: Rc<RefCell<FrameContext>>,
    tick: TickClosure,
}

impl FrameDriver {
    pub fn new(ctx: Rc<RefCell<FrameContext>>) -> Self {
        let tick: TickClosure = Rc::new(RefCell::new(None));
        let driver = Self {
            ctx: ctx.clone(),
            tick: tick.clone(),
        };
        let driver_tick = driver.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let cmd = driver_tick.ctx.borrow_mut().frame();
            driver_tick.apply(cmd);
        }) as Box<dyn FnMut()>));
        driver
    }

    pub fn context(&self) -> &Rc<RefCell<FrameContext>> {
        &self.ctx
    }

    pub fn start(&self) {
        let cmd = self.ctx.borrow_mut().engine.start();
        self.apply(cmd);
    }

    pub fn pause(&self) {
        let cmd = self.ctx.borrow_mut().engine.pause();
        self.apply(cmd);
    }

    pub fn resume(&self) {
        let cmd = {
            let mut ctx = self.ctx.borrow_mut();
            ctx.resumed = true;
            ctx.engine.resume()
        };
        self.apply(cmd);
    }

    /// Stop the loop and release the frame callback (breaking the
    /// driver/closure reference cycle).
    pub fn destroy(&self) {
        let cmd = self.ctx.borrow_mut().engine.destroy();
        self.apply(cmd);
        self.tick.borrow_mut().take();
    }

    fn apply(&self, cmd: LoopCommand) {
        let Some(window) = web::window() else {
            return;
        };
        match cmd {
            LoopCommand::Nothing => {}
            LoopCommand::RequestFrame => {
                let requested = self
                    .tick
                    .borrow()
                    .as_ref()
                    .map(|cb| window.request_animation_frame(cb.as_ref().unchecked_ref()));
                let mut ctx = self.ctx.borrow_mut();
                match requested {
                    Some(Ok(id)) => ctx.engine.frame_requested(FrameHandle(id)),
                    Some(Err(e)) => {
                        log::error!("requestAnimationFrame failed: {:?}", e);
                        ctx.engine.request_failed();
                    }
                    None => ctx.engine.request_failed(),
                }
            }
            LoopCommand::CancelFrame(FrameHandle(id)) => {
                _ = window.cancel_animation_frame(id);
            }
        }
    }
}

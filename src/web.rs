// Browser host for the particle field: a Surface over a 2d canvas context,
// a requestAnimationFrame loop and the window resize listener.

use crate::color::Color;
use crate::config::FieldConfig;
use crate::error::{FieldError, FieldResult};
use crate::field::ParticleField;
use crate::frame_loop::FrameLoop;
use crate::surface::Surface;
use crate::Timer;
use std::cell::{Cell, RefCell};
use std::f64::consts::PI;
use std::rc::Rc;
use vecmath::Vector2;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

pub struct Canvas2d {
    context: CanvasRenderingContext2d,
}

impl Canvas2d {
    pub fn new(context: CanvasRenderingContext2d) -> Self {
        Canvas2d { context }
    }

    // None when the canvas can't hand out a 2d context
    pub fn from_canvas(canvas: &HtmlCanvasElement) -> Option<Self> {
        let context = canvas.get_context("2d").ok()??;
        let context = context.dyn_into::<CanvasRenderingContext2d>().ok()?;
        Some(Canvas2d::new(context))
    }
}

impl Surface for Canvas2d {
    fn clear(&mut self, width: f64, height: f64) {
        self.context.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_circle(&mut self, center: Vector2<f64>, radius: f64, color: Color, alpha: f64) {
        self.context.begin_path();
        if self
            .context
            .arc(center[0], center[1], radius, 0.0, PI * 2.0)
            .is_err()
        {
            return;
        }
        #[allow(deprecated)]
        self.context
            .set_fill_style(&JsValue::from_str(&color.css_rgba(alpha)));
        self.context.fill();
    }

    fn stroke_line(
        &mut self,
        from: Vector2<f64>,
        to: Vector2<f64>,
        width: f64,
        color: Color,
        alpha: f64,
    ) {
        self.context.begin_path();
        self.context.move_to(from[0], from[1]);
        self.context.line_to(to[0], to[1]);
        #[allow(deprecated)]
        self.context
            .set_stroke_style(&JsValue::from_str(&color.css_rgba(alpha)));
        self.context.set_line_width(width);
        self.context.stroke();
    }
}

type FrameCallback = Closure<dyn FnMut(f64)>;

// Everything the running animation holds on to.
struct Attached {
    window: Window,
    frame_loop: Rc<RefCell<FrameLoop<Canvas2d>>>,
    // The frame callback lives here and captures a clone of this slot so it
    // can re-arm itself; dropping Attached empties the slot to break that cycle.
    animate: Rc<RefCell<Option<FrameCallback>>>,
    pending_frame: Rc<Cell<Option<i32>>>,
    on_resize: Closure<dyn FnMut()>,
}

impl Attached {
    fn start(
        window: Window,
        canvas: HtmlCanvasElement,
        surface: Canvas2d,
        config: FieldConfig,
    ) -> FieldResult<Attached> {
        let (width, height) = fit_to_window(&window, &canvas)?;
        let profile = config.profile_frames;
        let field = ParticleField::new(width, height, config);
        log::info!(
            "particle field attached: {} particles on {}x{}",
            field.particles().len(),
            width,
            height
        );
        let frame_loop = Rc::new(RefCell::new(FrameLoop::new(field, surface)));

        let on_resize = {
            let frame_loop = frame_loop.clone();
            let window = window.clone();
            Closure::wrap(Box::new(move || match fit_to_window(&window, &canvas) {
                Ok((width, height)) => {
                    log::debug!("particle field resized to {}x{}", width, height);
                    frame_loop.borrow_mut().resize(width, height);
                }
                Err(err) => log::warn!("particle field resize skipped: {}", err),
            }) as Box<dyn FnMut()>)
        };
        window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;

        let animate: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
        let pending_frame = Rc::new(Cell::new(None));
        {
            let frame_loop = frame_loop.clone();
            let slot = animate.clone();
            let pending_frame = pending_frame.clone();
            let window = window.clone();
            *animate.borrow_mut() = Some(Closure::wrap(Box::new(move |_timestamp: f64| {
                pending_frame.set(None);
                let attached = {
                    let _timer = if profile {
                        Some(Timer::new("ParticleField::frame"))
                    } else {
                        None
                    };
                    frame_loop.borrow_mut().tick()
                };
                if attached {
                    if let Some(callback) = slot.borrow().as_ref() {
                        match request_frame(&window, callback) {
                            Ok(id) => pending_frame.set(Some(id)),
                            Err(err) => log::warn!("particle field stopped: {}", err),
                        }
                    }
                }
            }) as Box<dyn FnMut(f64)>));
        }

        let attached = Attached {
            window,
            frame_loop,
            animate,
            pending_frame,
            on_resize,
        };

        // First frame is drawn right away, later ones on the display refresh
        if attached.frame_loop.borrow_mut().tick() {
            if let Some(callback) = attached.animate.borrow().as_ref() {
                let id = request_frame(&attached.window, callback)?;
                attached.pending_frame.set(Some(id));
            }
        }
        Ok(attached)
    }
}

// Also runs when start() fails after the resize listener is registered
impl Drop for Attached {
    fn drop(&mut self) {
        if let Err(err) = self
            .window
            .remove_event_listener_with_callback("resize", self.on_resize.as_ref().unchecked_ref())
        {
            log::warn!("failed to remove resize listener: {:?}", err);
        }
        if let Some(id) = self.pending_frame.take() {
            if let Err(err) = self.window.cancel_animation_frame(id) {
                log::warn!("failed to cancel animation frame: {:?}", err);
            }
        }
        self.frame_loop.borrow_mut().detach();
        self.animate.borrow_mut().take();
    }
}

fn request_frame(window: &Window, callback: &FrameCallback) -> FieldResult<i32> {
    Ok(window.request_animation_frame(callback.as_ref().unchecked_ref())?)
}

// Sizes the canvas to the window's inner size and returns the canvas size
fn fit_to_window(window: &Window, canvas: &HtmlCanvasElement) -> FieldResult<(f64, f64)> {
    let width = window
        .inner_width()?
        .as_f64()
        .ok_or_else(|| FieldError::Dom("window.innerWidth is not a number".to_owned()))?;
    let height = window
        .inner_height()?
        .as_f64()
        .ok_or_else(|| FieldError::Dom("window.innerHeight is not a number".to_owned()))?;
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
    Ok((canvas.width() as f64, canvas.height() as f64))
}

fn parse_config(config_json: Option<String>) -> FieldResult<FieldConfig> {
    match config_json {
        Some(json) => FieldConfig::from_json(&json),
        None => Ok(FieldConfig::default()),
    }
}

// Handle to the animated background on one canvas. Inert without a usable
// 2d context. Dropping it (or free() from JS) detaches.
#[wasm_bindgen]
pub struct ParticleBackground {
    attached: Option<Attached>,
}

#[wasm_bindgen]
impl ParticleBackground {
    pub fn attach(
        canvas: HtmlCanvasElement,
        config_json: Option<String>,
    ) -> Result<ParticleBackground, JsValue> {
        let config = parse_config(config_json)?;
        Ok(ParticleBackground::attach_with_config(canvas, config)?)
    }

    pub fn attach_by_id(
        canvas_id: &str,
        config_json: Option<String>,
    ) -> Result<ParticleBackground, JsValue> {
        let config = parse_config(config_json)?;
        let canvas = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(canvas_id))
            .and_then(|element| element.dyn_into::<HtmlCanvasElement>().ok());
        match canvas {
            Some(canvas) => Ok(ParticleBackground::attach_with_config(canvas, config)?),
            None => {
                log::warn!("no canvas #{}, particle field disabled", canvas_id);
                Ok(ParticleBackground::inert())
            }
        }
    }

    pub fn detach(&mut self) {
        self.attached.take();
    }

    pub fn is_attached(&self) -> bool {
        self.attached
            .as_ref()
            .map_or(false, |attached| attached.frame_loop.borrow().is_attached())
    }

    pub fn frame_count(&self) -> f64 {
        self.attached
            .as_ref()
            .map_or(0.0, |attached| attached.frame_loop.borrow().frame_count() as f64)
    }

    pub fn particle_count(&self) -> usize {
        self.attached.as_ref().map_or(0, |attached| {
            attached
                .frame_loop
                .borrow()
                .field()
                .map_or(0, |field| field.particles().len())
        })
    }
}

impl ParticleBackground {
    pub fn attach_with_config(
        canvas: HtmlCanvasElement,
        config: FieldConfig,
    ) -> FieldResult<ParticleBackground> {
        config.validate()?;
        let window = match web_sys::window() {
            Some(window) => window,
            None => {
                log::debug!("no window, particle field disabled");
                return Ok(ParticleBackground::inert());
            }
        };
        let surface = match Canvas2d::from_canvas(&canvas) {
            Some(surface) => surface,
            None => {
                log::debug!("no 2d context, particle field disabled");
                return Ok(ParticleBackground::inert());
            }
        };
        let attached = Attached::start(window, canvas, surface, config)?;
        Ok(ParticleBackground {
            attached: Some(attached),
        })
    }

    fn inert() -> ParticleBackground {
        ParticleBackground { attached: None }
    }
}

impl Drop for ParticleBackground {
    fn drop(&mut self) {
        self.detach();
    }
}

mod utils;
pub mod color;
pub mod config;
pub mod error;
pub mod field;
pub mod frame_loop;
pub mod particle;
pub mod surface;
pub mod web;

use wasm_bindgen::prelude::*;
use web_sys::console;

pub use color::Color;
pub use config::FieldConfig;
pub use error::{FieldError, FieldResult};
pub use field::{link_opacity, ParticleField};
pub use frame_loop::FrameLoop;
pub use particle::Particle;
pub use surface::Surface;
pub use web::{Canvas2d, ParticleBackground};

// Installs the panic hook and routes `log` output to the browser console.
// Safe to call more than once.
#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
    if console_log::init_with_level(log::Level::Info).is_ok() {
        log::info!("particle-field initialized");
    }
}

pub struct Timer<'a> {
    name: &'a str,
}

impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Timer<'a> {
        console::time_with_label(name);
        Timer { name }
    }
}

impl<'a> Drop for Timer<'a> {
    fn drop(&mut self) {
        console::time_end_with_label(self.name);
    }
}

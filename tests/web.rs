// Browser tests, run with `wasm-pack test --headless --firefox`

#![cfg(target_arch = "wasm32")]

extern crate wasm_bindgen_test;
use particle_field::{FieldConfig, ParticleBackground};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Event, HtmlCanvasElement};

wasm_bindgen_test_configure!(run_in_browser);

fn canvas(id: &str) -> HtmlCanvasElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<HtmlCanvasElement>()
        .unwrap();
    canvas.set_id(id);
    document.body().unwrap().append_child(&canvas).unwrap();
    canvas
}

#[wasm_bindgen_test]
fn attach_draws_first_frame_and_sizes_canvas() {
    let canvas = canvas("attach-test");
    let background = ParticleBackground::attach(canvas.clone(), None).unwrap();
    let window = web_sys::window().unwrap();
    let inner_width = window.inner_width().unwrap().as_f64().unwrap();

    assert!(background.is_attached());
    assert_eq!(background.frame_count(), 1.0);
    assert_eq!(background.particle_count(), 50);
    assert_eq!(canvas.width(), inner_width as u32);
}

#[wasm_bindgen_test]
fn detach_releases_the_field() {
    let mut background =
        ParticleBackground::attach(canvas("detach-test"), Some(r#"{"seed": 1}"#.to_owned()))
            .unwrap();
    background.detach();
    assert!(!background.is_attached());
    assert_eq!(background.particle_count(), 0);
    background.detach();
}

fn dispatch_resize() -> bool {
    let window = web_sys::window().unwrap();
    let event = Event::new("resize").unwrap();
    window.dispatch_event(&event).unwrap()
}

#[wasm_bindgen_test]
fn resize_after_detach_reaches_no_listener() {
    let canvas = canvas("resize-after-detach");
    let mut background = ParticleBackground::attach(canvas.clone(), None).unwrap();
    assert!(dispatch_resize());

    background.detach();
    canvas.set_width(7);
    assert!(dispatch_resize());
    // The listener is gone, so nothing refit the canvas to the window
    assert_eq!(canvas.width(), 7);
    assert_eq!(background.frame_count(), 0.0);
}

#[wasm_bindgen_test]
fn dropping_the_handle_unregisters_the_listener() {
    let canvas = canvas("resize-after-drop");
    {
        let _background = ParticleBackground::attach(canvas.clone(), None).unwrap();
    }
    canvas.set_width(9);
    assert!(dispatch_resize());
    assert_eq!(canvas.width(), 9);
}

#[wasm_bindgen_test]
fn missing_canvas_is_an_inert_no_op() {
    let background = ParticleBackground::attach_by_id("no-such-canvas", None).unwrap();
    assert!(!background.is_attached());
    assert_eq!(background.frame_count(), 0.0);
}

#[wasm_bindgen_test]
fn invalid_config_is_reported() {
    assert!(ParticleBackground::attach(canvas("bad-config"), Some("{".to_owned())).is_err());
    let config = FieldConfig {
        link_distance: -1.0,
        ..FieldConfig::default()
    };
    assert!(ParticleBackground::attach_with_config(canvas("bad-config-2"), config).is_err());
}

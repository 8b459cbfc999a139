//! WASM bridge for the starfall engine.
//!
//! The page owns the render loop and presentation. Each animation frame it calls
//! `starfall_tick(dt)` and reads star instances and events through
//! Float32Array views over the exported pointers (see `bridge::protocol`).

pub mod runner;

pub use runner::FieldRunner;

use std::cell::RefCell;

use starfall_engine::{FieldCommand, StarHandle};
use wasm_bindgen::prelude::*;

thread_local! {
    static RUNNER: RefCell<Option<FieldRunner>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&mut FieldRunner) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow.as_mut().expect("Star field not initialized. Call starfall_init() first.");
        f(runner)
    })
}

/// Create the star field. `config_json` may be empty for defaults.
#[wasm_bindgen]
pub fn starfall_init(config_json: &str) {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let runner = FieldRunner::from_json(config_json);
    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    log::info!("starfall: initialized");
}

#[wasm_bindgen]
pub fn starfall_tick(dt: f32) {
    with_runner(|r| r.tick(dt));
}

#[wasm_bindgen]
pub fn starfall_reset() {
    with_runner(|r| r.reset());
}

/// Add an orbiting star for `name`. Returns its handle, or 0xFFFFFFFF if the field is full.
#[wasm_bindgen]
pub fn starfall_add_star(name: &str) -> u32 {
    let fallback_seed = (js_sys::Math::random() * 1000.0) as f32;
    with_runner(|r| r.add_star(name, fallback_seed))
}

#[wasm_bindgen]
pub fn starfall_claim(handle: u32, lat: f32, lon: f32) {
    with_runner(|r| r.push_command(FieldCommand::Claim { handle: StarHandle(handle), lat, lon }));
}

#[wasm_bindgen]
pub fn starfall_remove(handle: u32) {
    with_runner(|r| r.push_command(FieldCommand::Remove { handle: StarHandle(handle) }));
}

#[wasm_bindgen]
pub fn starfall_resync(handle: u32, angle: f32) {
    with_runner(|r| r.push_command(FieldCommand::Resync { handle: StarHandle(handle), angle }));
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_instances_ptr() -> *const f32 {
    with_runner(|r| r.instances_ptr())
}

#[wasm_bindgen]
pub fn get_instance_count() -> u32 {
    with_runner(|r| r.instance_count())
}

#[wasm_bindgen]
pub fn get_events_ptr() -> *const f32 {
    with_runner(|r| r.events_ptr())
}

#[wasm_bindgen]
pub fn get_event_count() -> u32 {
    with_runner(|r| r.event_count())
}

#[wasm_bindgen]
pub fn get_star_status(handle: u32) -> f32 {
    with_runner(|r| r.star_status(handle))
}

#[wasm_bindgen]
pub fn get_current_time() -> f32 {
    with_runner(|r| r.current_time())
}

#[wasm_bindgen]
pub fn get_earth_radius() -> f32 {
    with_runner(|r| r.earth_radius())
}

#[wasm_bindgen]
pub fn get_protocol_version() -> f32 {
    with_runner(|r| r.protocol_version())
}

use js_sys::JsString;
use wasm_bindgen::prelude::wasm_bindgen;

pub mod algorithms;
pub mod bases;
pub mod config;
pub mod construction;
pub mod consts;
pub mod creeps;
pub mod errors;
mod game_loop;
mod game_tick;
pub mod geometry;
mod logging;
pub mod memory;
pub mod priorities;
pub mod random;
pub mod serialization;
pub mod spatial;
pub mod spawning;
pub mod utils;
pub mod world;

// `wasm_bindgen` to expose the function to JS.
#[wasm_bindgen]
pub fn setup() {
    game_loop::setup();
}

// `js_name` to use a reserved name as a function name.
#[wasm_bindgen(js_name = loop)]
pub fn game_loop() {
    game_loop::game_loop();
}

#[wasm_bindgen(js_name = take_log)]
pub fn take_log() -> JsString {
    logging::take_log().join("\n").into()
}

/// Requests of all bases from the last tick as JSON, to be fulfilled by spawning and construction.
#[wasm_bindgen(js_name = take_requests)]
pub fn take_requests() -> JsString {
    game_loop::take_requests_json().into()
}

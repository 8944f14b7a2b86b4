//! wasm-bindgen exports called by the page.
//!
//! The host lives in a `thread_local!` slot: wasm-bindgen cannot export a
//! struct that owns `Rc` ports, and the page is single-threaded anyway.
//! Every export except `solar_start` fails with `JsError` until the host
//! exists.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::error::HostError;
use crate::game_loop::FrameHost;

thread_local! {
    static HOST: RefCell<Option<FrameHost>> = const { RefCell::new(None) };
}

fn with_host<R>(f: impl FnOnce(&mut FrameHost) -> Result<R, HostError>) -> Result<R, JsError> {
    HOST.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let host = borrow.as_mut().ok_or(HostError::NotStarted)?;
        f(host)
    })
    .map_err(to_js)
}

fn to_js(err: HostError) -> JsError {
    JsError::new(&err.to_string())
}

/// Create the simulation. Both arguments may be empty strings.
///
/// Frontend: `solar_start(configToml, localStorage.getItem("progress") ?? "")`
#[wasm_bindgen]
pub fn solar_start(config_toml: &str, progress_json: &str) -> Result<(), JsError> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let host = FrameHost::from_sources(config_toml, progress_json).map_err(to_js)?;
    HOST.with(|cell| *cell.borrow_mut() = Some(host));
    log::info!("solar explorer: started");
    Ok(())
}

/// Advance one frame and return the snapshot JSON.
#[wasm_bindgen]
pub fn solar_tick(now_ms: f64) -> Result<String, JsError> {
    with_host(|h| h.tick_json(now_ms))
}

/// Queue a tagged `PlayerCommand` JSON object.
#[wasm_bindgen]
pub fn solar_command(json: &str) -> Result<(), JsError> {
    with_host(|h| h.push_command_json(json))
}

/// Returns false for keys the game does not map.
#[wasm_bindgen]
pub fn solar_key(key: &str, down: bool) -> Result<bool, JsError> {
    with_host(|h| Ok(h.key(key, down)))
}

#[wasm_bindgen]
pub fn solar_pointer(screen_x: f64, screen_y: f64) -> Result<(), JsError> {
    with_host(|h| {
        h.pointer(screen_x, screen_y);
        Ok(())
    })
}

#[wasm_bindgen]
pub fn solar_pointer_released() -> Result<(), JsError> {
    with_host(|h| {
        h.pointer_released();
        Ok(())
    })
}

#[wasm_bindgen]
pub fn solar_resize(width: f64, height: f64) -> Result<(), JsError> {
    with_host(|h| {
        h.resize(width, height);
        Ok(())
    })
}

#[wasm_bindgen]
pub fn solar_set_muted(muted: bool) -> Result<(), JsError> {
    with_host(|h| {
        h.set_muted(muted);
        Ok(())
    })
}

// ---- Data accessors ----

/// Audio cues since the last call, as a JSON array.
#[wasm_bindgen]
pub fn solar_audio_cues() -> Result<String, JsError> {
    with_host(|h| h.drain_audio_json())
}

/// Progress record JSON for the page to persist.
#[wasm_bindgen]
pub fn solar_progress() -> Result<String, JsError> {
    with_host(|h| h.progress_json())
}

/// The static starfield, fetched once by the renderer.
#[wasm_bindgen]
pub fn solar_stars() -> Result<String, JsError> {
    with_host(|h| h.stars_json())
}

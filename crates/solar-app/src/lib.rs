//! Solar explorer browser host.
//!
//! This crate wires the headless simulation to the page: a frame-driven
//! host that owns the engine, a JSON-backed progress store, and the
//! wasm-bindgen exports the frontend calls once per animation frame.

pub mod error;
pub mod game_loop;
pub mod ipc;
pub mod state;

pub use solar_core as core;

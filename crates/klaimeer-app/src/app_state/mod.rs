//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Hosts the globe in a window and animates the title counters.

mod core;
mod event_handler;
mod init;
mod render;
mod shutdown;
mod title;

pub use self::core::KlaimeerApp;

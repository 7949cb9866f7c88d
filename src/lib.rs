//! Catalogbot - product catalog service for chat-bot product browsers
//!
//! This library crate exposes the core functionality for integration testing.

pub mod config;
pub mod messenger;
pub mod server;
pub mod store;

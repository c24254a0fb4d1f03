//! Slash-command side of a chat-platform danmaku plugin.
//!
//! Registers a `/danmaku` command with the host, forwards the trailing text
//! of each invocation to a configured overlay endpoint as JSON, and answers
//! the invoking user with an ephemeral confirmation or error.

pub mod broadcast;
pub mod commands;
pub mod config;
pub mod handlers;
pub mod host;
pub mod icon;
pub mod plugin;

pub use config::Configuration;
pub use plugin::Plugin;

//! Configuration loading and validation.

pub mod commands;
pub mod logging;
pub mod settings;
pub mod telegram;

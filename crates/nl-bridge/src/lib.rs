//! Outer adapter: exposes the site core over newline-delimited JSON.

pub mod bootstrap;
pub mod commands;
pub mod events;
pub mod protocol;

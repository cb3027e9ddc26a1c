//! Pokedex lookup TUI
//!
//! Looks up a single Pokemon against the proxy API and lists every
//! available Pokemon in a collapsible gallery. The library exposes the
//! modules for testing; `main.rs` wires them to a terminal.

pub mod action;
pub mod api;
pub mod components;
pub mod detail;
pub mod effect;
pub mod icons;
pub mod layout;
pub mod logging;
pub mod reducer;
pub mod sprite;
pub mod state;

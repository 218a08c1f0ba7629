// Library surface of the facility map; the binary in main.rs wires it together.
pub mod app;
pub mod category;
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod controls;
pub mod domain;
pub mod event;
pub mod flows;
pub mod logging;
pub mod map;
pub mod modal;
pub mod model;
pub mod render;
pub mod seed;
pub mod store;
pub mod terminal;
pub mod ui;

#[cfg(test)]
mod test_support;

pub use domain::{Category, Facility};

// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod gui;
pub mod progress;

pub mod model;
pub mod loader;
pub mod facets;
pub mod filter;
pub mod pager;
pub mod card;
pub mod modal;
pub mod debounce;
pub mod session;

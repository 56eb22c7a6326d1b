#![no_std]
#![doc = include_str!("../README.md")]
#![doc = document_features::document_features!()]

#[cfg(feature = "defmt")]
#[macro_use(debug, info)]
extern crate defmt;
#[cfg(all(not(feature = "defmt"), feature = "log"))]
#[macro_use(debug, info)]
extern crate log;

#[macro_use]
mod macros;

pub mod buffer;
pub mod config;
pub mod driver;
pub mod screen;
pub mod state;
pub mod wpm;

pub use buffer::OledBuffer;
pub use config::OledConfig;
pub use driver::OledDriver;
pub use screen::OledScreen;
pub use state::{ClockConfig, ClockField, Date, EncoderMode, KeyboardState, LedIndicator, Modifiers, OledMode};
pub use wpm::WpmMonitor;

// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod catalogue;
pub mod config;
pub mod core;
pub mod data;
pub mod error;
pub mod file;
pub mod gui;
pub mod tutors;

#[cfg(feature = "cli")]
pub mod cli;

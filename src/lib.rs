#[macro_use]
extern crate slog;

extern crate nalgebra as na;

pub mod common;
pub mod data;
pub mod spectrum;

// src/lib.rs
// #![allow(dead_code)]
// #![allow(unused)]

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod specs;

pub mod days;
pub mod lesson;
pub mod poll;
pub mod progress;
pub mod refresh;
pub mod remaining;
pub mod render;
pub mod store;

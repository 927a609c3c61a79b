// src/core/mod.rs

pub mod codepage;
pub mod html;
pub mod net;
pub mod sanitize;

pub use net::{BoxError, Fetch, HttpFetcher};

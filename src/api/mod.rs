// src/api/mod.rs

pub mod client;
pub use client::{BackendApi, HttpBackendApi};

// src/services/mod.rs

pub mod graficos_service;
pub mod metrics_service;
pub mod session_service;
pub mod sync_service;

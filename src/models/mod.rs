// src/models/mod.rs

pub mod comandos;
pub mod config;
pub mod dashboard;
pub mod graficos;

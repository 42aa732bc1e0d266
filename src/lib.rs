// src/lib.rs

// Controlador de estado do painel de contagem de estoque.
//
// O núcleo fica em `services::session_service`: uma sessão única que consome
// comandos tipados, recalcula as métricas derivadas de forma síncrona e
// persiste o estado no backend com debounce e guarda de ordenação.

pub mod api;
pub mod common;
pub mod config;
pub mod models;
pub mod services;

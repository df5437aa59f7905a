// ============================================================================
// BLOODLINK - FRONTEND MVVM (RUST + YEW)
// ============================================================================
// Arquitectura:
// - Components: páginas y piezas Yew (sin lógica de negocio)
// - ViewModels: validación, llamadas y escritura de sesión
// - Services: SOLO comunicación API
// - State: sesión persistida en localStorage
// - Models: estructuras compartidas con el backend
// ============================================================================

mod app;
mod components;
mod config;
mod dom;
mod hooks;
mod models;
mod router;
mod services;
mod state;
mod utils;
mod viewmodels;

use wasm_bindgen::prelude::*;
use wasm_logger::Config;

use crate::app::App;
use crate::config::CONFIG;

#[wasm_bindgen(start)]
pub fn main() {
    // Panics legibles en la consola del navegador
    console_error_panic_hook::set_once();

    let level = if CONFIG.is_logging_enabled() {
        log::Level::Debug
    } else {
        log::Level::Error
    };
    wasm_logger::init(Config::new(level));
    log::info!(
        "🚀 BloodLink starting ({} -> {})",
        CONFIG.environment,
        CONFIG.backend_url()
    );

    yew::Renderer::<App>::new().render();
}

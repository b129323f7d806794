use wasm_bindgen::prelude::*;
use orrery_engine::*;

mod animation;
mod bodies;
mod config;
mod game;
mod navigator;
mod ui;
use game::SolarSystem;

orrery_web::export_game!(SolarSystem, "solar-system");

// ---- UI strings (numbers travel through game events) ----

#[wasm_bindgen]
pub fn get_planet_count() -> u32 {
    with_runner(|r| r.game().planets().len() as u32)
}

/// Lowercase planet identifier, used as the slider's element id.
#[wasm_bindgen]
pub fn get_planet_name(index: u32) -> String {
    with_runner(|r| {
        r.game()
            .planets()
            .get(index as usize)
            .map(|p| p.name.clone())
            .unwrap_or_default()
    })
}

#[wasm_bindgen]
pub fn get_tooltip_text() -> String {
    with_runner(|r| r.game().ui().tooltip_text().to_string())
}

#[wasm_bindgen]
pub fn get_speed_label(index: u32) -> String {
    with_runner(|r| r.game().ui().speed_label(index as usize).to_string())
}

#[wasm_bindgen]
pub fn get_play_label() -> String {
    with_runner(|r| r.game().ui().play_label().to_string())
}

#[wasm_bindgen]
pub fn get_theme_class() -> String {
    with_runner(|r| r.game().ui().theme.css_class().to_string())
}

// Platform-independent page logic; compiled and tested on every target.
pub mod config;
pub mod error;
pub mod frame;
pub mod indicator;
pub mod navigator;
pub mod particles;
pub mod playground;
pub mod pointer;
pub mod reveal;
pub mod samples;
pub mod state;
pub mod theme;

// DOM wiring is only compiled when targeting wasm32.

#[cfg(target_arch = "wasm32")]
pub mod wasm {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;

    use crate::state::AppState;

    mod cursor;
    pub mod dom;
    pub mod editor;
    mod nav;
    pub mod render;
    mod reveal;
    mod skills;
    pub mod theme;

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Trace).ok();

        let config = dom::site_config()?;
        log::set_max_level(config.log_level.to_level_filter());
        log::info!("portfolio starting");

        let state = Rc::new(RefCell::new(AppState::default()));

        theme::init(&config, &state)?;
        cursor::init(&config)?;
        nav::init(&config)?;
        skills::init(&config)?;
        editor::init(&config, &state)?;
        reveal::init(&config)?;
        render::start_background(&config, &state)?;

        log::debug!("page wired");
        Ok(())
    }
}

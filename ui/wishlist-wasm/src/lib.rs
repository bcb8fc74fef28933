//! WebzMovies wishlist frontend (WASM).
//!
//! Binds the wishlist buttons and listing rows of a server-rendered page to
//! [`wz_wishlist_core::WishlistController`], backed by browser collaborators.

pub mod config;
pub mod dom;
pub mod events;
pub mod logging;
pub mod platform;
pub mod toast;
pub mod views;

use std::rc::Rc;

use tracing::{error, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wz_wishlist_core::{Platform, WishlistConfig, WishlistController};

/// WASM entry point – called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let loaded = config::load();
    let config = match &loaded {
        Ok(Some(config)) => config.clone(),
        _ => WishlistConfig::default(),
    };
    logging::init(&config.log_filter.0);
    if let Err(err) = &loaded {
        warn!("{}, using defaults", err);
    }

    // The module may load before the markup it binds to.
    if dom::document().ready_state() == "loading" {
        let cb = Closure::once(move || {
            if let Err(err) = init(config) {
                error!("wishlist init failed: {:#}", err);
            }
        });
        dom::document()
            .add_event_listener_with_callback("DOMContentLoaded", cb.as_ref().unchecked_ref())?;
        cb.forget();
        return Ok(());
    }

    init(config).map_err(|err| JsValue::from_str(&format!("{:#}", err)))
}

fn browser_platform() -> Platform {
    Platform {
        cookies: Rc::new(platform::DocumentCookies),
        transport: Rc::new(platform::FetchTransport),
        navigator: Rc::new(platform::LocationNavigator),
        scheduler: Rc::new(platform::TimeoutScheduler),
        toasts: Rc::new(toast::BodyToastSurface),
    }
}

fn init(config: WishlistConfig) -> anyhow::Result<()> {
    let controller = WishlistController::new(config, browser_platform());
    events::bind_events(&controller)?;
    Ok(())
}

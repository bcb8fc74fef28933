//! Binds page elements to the controller.
//!
//! Every button and row becomes a view registered under its movie id; each
//! click spawns the matching async handler via `spawn_local`.

use std::rc::Rc;

use anyhow::Result;
use tracing::{info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, MouseEvent};
use wz_api_types::MovieId;
use wz_wishlist_core::{ButtonRole, WishlistController};

use crate::dom;
use crate::views::{ElementButton, ElementRow};

const MOVIE_ID_ATTR: &str = "data-movie-id";
const MAIN_SELECTOR: &str = ".btn-wishlist";
const OVERLAY_SELECTOR: &str = ".btn-wishlist-overlay";
const ROW_SELECTOR: &str = ".wishlist-item";
const REMOVE_SELECTOR: &str = ".btn-remove-wishlist";

#[derive(Debug, Default, Clone, Copy)]
pub struct BindSummary {
    pub main: usize,
    pub overlay: usize,
    pub rows: usize,
}

/// Attach a click listener that runs `handler` as a local future.
/// Overlay controls sit inside links, so they can opt out of the default
/// action and bubbling.
fn on_click_async<F, Fut>(el: &Element, suppress_default: bool, handler: F) -> Result<()>
where
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = ()> + 'static,
{
    let cb = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
        if suppress_default {
            event.prevent_default();
            event.stop_propagation();
        }
        wasm_bindgen_futures::spawn_local(handler());
    });
    el.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
        .map_err(dom::js_error)?;
    cb.forget();
    Ok(())
}

fn movie_id(el: &Element) -> Option<MovieId> {
    dom::attr(el, MOVIE_ID_ATTR).map(MovieId)
}

fn bind_toggles(controller: &WishlistController, selector: &str, role: ButtonRole) -> Result<usize> {
    let mut bound = 0;
    for el in dom::query_all(selector)? {
        let Some(movie) = movie_id(&el) else {
            warn!("{} without {} skipped", selector, MOVIE_ID_ATTR);
            continue;
        };

        controller.register_button(movie.clone(), role, Rc::new(ElementButton::new(el.clone())));

        let controller = controller.clone();
        on_click_async(&el, role == ButtonRole::Overlay, move || {
            let controller = controller.clone();
            let movie = movie.clone();
            async move {
                // Failures are already reported to the user.
                let _ = controller.click_toggle(&movie).await;
            }
        })?;
        bound += 1;
    }
    Ok(bound)
}

/// Rows are keyed by their own `data-movie-id`, falling back to the one on
/// their remove control.
fn bind_rows(controller: &WishlistController) -> Result<usize> {
    let mut bound = 0;
    for row in dom::query_all(ROW_SELECTOR)? {
        let remove = dom::query_within(&row, REMOVE_SELECTOR);
        let Some(movie) = movie_id(&row).or_else(|| remove.as_ref().and_then(movie_id)) else {
            warn!("{} without {} skipped", ROW_SELECTOR, MOVIE_ID_ATTR);
            continue;
        };

        controller.register_row(movie.clone(), Rc::new(ElementRow::new(row.clone())));
        bound += 1;

        let Some(remove) = remove else {
            continue;
        };
        let controller = controller.clone();
        on_click_async(&remove, false, move || {
            let controller = controller.clone();
            let movie = movie.clone();
            async move {
                let _ = controller.click_remove(&movie).await;
            }
        })?;
    }
    Ok(bound)
}

/// Bind all wishlist controls on the current page. Call once after load.
pub fn bind_events(controller: &WishlistController) -> Result<BindSummary> {
    let summary = BindSummary {
        main: bind_toggles(controller, MAIN_SELECTOR, ButtonRole::Main)?,
        overlay: bind_toggles(controller, OVERLAY_SELECTOR, ButtonRole::Overlay)?,
        rows: bind_rows(controller)?,
    };
    info!(
        main = summary.main,
        overlay = summary.overlay,
        rows = summary.rows,
        "wishlist controls bound"
    );
    Ok(summary)
}

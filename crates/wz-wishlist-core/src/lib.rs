//! Headless wishlist controller for the WebzMovies pages.
//!
//! The browser binding lives in `ui/wishlist-wasm`; this crate only talks to
//! the page through the traits in [`platform`].

pub mod config;
pub mod controller;
pub mod csrf;
pub mod error;
pub mod platform;
pub mod registry;
pub mod toast;

#[cfg(test)]
pub(crate) mod testing;

pub use config::WishlistConfig;
pub use controller::WishlistController;
pub use error::{WishlistError, WishlistResult};
pub use platform::{
    ButtonAppearance, ButtonRole, ButtonView, CookieSource, HttpRequest, HttpResponse, IconGlyph,
    Navigator, Platform, RowView, Scheduler, ToastKind, ToastSurface, ToastView, Transport,
};
pub use toast::ToastPresenter;
pub use wz_api_types::{MovieId, ToggleOutcome};

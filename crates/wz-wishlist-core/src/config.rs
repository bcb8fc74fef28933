//! Wishlist configuration.
//!
//! Every field has a default matching the deployed site, so an empty
//! override object (or none at all) yields a working controller.

use serde::{Deserialize, Serialize};
use wz_api_types::MovieId;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct WishlistConfig {
    pub routes: Routes,
    pub csrf: CsrfConfig,
    pub timings: Timings,
    pub messages: Messages,
    pub labels: Labels,
    pub log_filter: LogFilter,
}

impl WishlistConfig {
    pub fn add_url(&self, movie: &MovieId) -> String {
        format!("{}{}/", self.routes.add_prefix, urlencoding::encode(movie.as_str()))
    }

    pub fn remove_url(&self, movie: &MovieId) -> String {
        format!("{}{}/", self.routes.remove_prefix, urlencoding::encode(movie.as_str()))
    }

    pub fn is_wishlist_page(&self, pathname: &str) -> bool {
        pathname == self.routes.wishlist_page
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Routes {
    pub add_prefix: String,
    pub remove_prefix: String,
    pub login: String,
    pub wishlist_page: String,
}

impl Default for Routes {
    fn default() -> Self {
        Self {
            add_prefix: "/add_to_wishlist/".to_owned(),
            remove_prefix: "/remove_from_wishlist/".to_owned(),
            login: "/login/".to_owned(),
            wishlist_page: "/wishlist/".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CsrfConfig {
    pub cookie_name: String,
    pub header_name: String,
    /// Header marking the request as programmatic (the server checks it to
    /// answer with JSON instead of a redirect).
    pub marker_header: String,
    pub marker_value: String,
}

impl Default for CsrfConfig {
    fn default() -> Self {
        Self {
            cookie_name: "csrftoken".to_owned(),
            header_name: "X-CSRFToken".to_owned(),
            marker_header: "X-Requested-With".to_owned(),
            marker_value: "XMLHttpRequest".to_owned(),
        }
    }
}

/// Delays in milliseconds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Timings {
    pub toast_show_delay_ms: u32,
    pub toast_display_ms: u32,
    pub toast_exit_ms: u32,
    pub row_exit_ms: u32,
    pub login_redirect_ms: u32,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            toast_show_delay_ms: 100,
            toast_display_ms: 3_000,
            toast_exit_ms: 300,
            row_exit_ms: 300,
            login_redirect_ms: 1_500,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Messages {
    pub missing_token: String,
    pub login_required: String,
    pub toggle_failed: String,
    pub remove_failed: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            missing_token: "Authentication error. Refresh page.".to_owned(),
            login_required: "Please login to manage wishlist".to_owned(),
            toggle_failed: "Error updating wishlist.".to_owned(),
            remove_failed: "Error removing from wishlist.".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Labels {
    pub in_wishlist: String,
    pub not_in_wishlist: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            in_wishlist: "In Wishlist".to_owned(),
            not_in_wishlist: "Wishlist".to_owned(),
        }
    }
}

/// `EnvFilter` directive string, e.g. `"info"` or `"wz_wishlist_core=debug"`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct LogFilter(pub String);

impl Default for LogFilter {
    fn default() -> Self {
        Self("info".to_owned())
    }
}

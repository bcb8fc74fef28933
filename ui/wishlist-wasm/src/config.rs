//! Page-supplied configuration.
//!
//! Templates may set `window.WISHLIST_CONFIG = {...}` before the module
//! loads; any field left out keeps its default.

use wasm_bindgen::JsValue;
use wz_wishlist_core::WishlistConfig;

use crate::dom;

pub const CONFIG_GLOBAL: &str = "WISHLIST_CONFIG";

/// `Ok(None)` when the page sets no override.
pub fn load() -> Result<Option<WishlistConfig>, String> {
    let raw = js_sys::Reflect::get(&dom::window(), &JsValue::from_str(CONFIG_GLOBAL))
        .map_err(|err| format!("cannot read window.{}: {:?}", CONFIG_GLOBAL, err))?;
    if raw.is_undefined() || raw.is_null() {
        return Ok(None);
    }
    serde_wasm_bindgen::from_value(raw)
        .map(Some)
        .map_err(|err| format!("invalid window.{}: {}", CONFIG_GLOBAL, err))
}

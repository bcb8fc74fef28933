//! Collaborators the controller needs from its host page.
//!
//! The browser binding implements these with `web-sys`; tests use in-memory
//! fakes. Everything is single-threaded, hence `?Send` and `Rc`.

use async_trait::async_trait;
use std::rc::Rc;

use crate::error::WishlistError;

/// Read access to the cookie store, queried fresh on every request.
pub trait CookieSource {
    fn cookies(&self) -> String;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub path: String,
    pub headers: Vec<(String, String)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Issues same-origin `POST` requests with credentials included.
#[async_trait(?Send)]
pub trait Transport {
    async fn post(&self, request: HttpRequest) -> Result<HttpResponse, WishlistError>;
}

pub trait Navigator {
    fn pathname(&self) -> String;
    fn assign(&self, url: &str);
    fn reload(&self);
}

/// Fire-and-forget timers. Tasks cannot be cancelled.
pub trait Scheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Info,
    Error,
}

impl ToastKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Info => "info",
            ToastKind::Error => "error",
        }
    }
}

/// Where toasts live (the document body in the browser).
pub trait ToastSurface {
    /// Remove every toast currently in the document.
    fn clear(&self);
    /// Insert a new, not yet visible toast. `on_dismiss` runs when the user
    /// clicks its close control.
    fn mount(&self, message: &str, kind: ToastKind, on_dismiss: Box<dyn Fn()>) -> Rc<dyn ToastView>;
}

/// One inserted toast. `hide` and `remove` must tolerate a detached element.
pub trait ToastView {
    fn show(&self);
    fn hide(&self);
    fn remove(&self);
    fn is_attached(&self) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonRole {
    Main,
    Overlay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconGlyph {
    Outline,
    Filled,
}

/// Visual state pushed to a wishlist button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonAppearance {
    pub glyph: IconGlyph,
    /// Text shown next to the icon; overlay buttons are icon-only.
    pub label: Option<String>,
    /// Whether the `in-wishlist` class is present.
    pub marked: bool,
}

pub trait ButtonView {
    fn render(&self, appearance: &ButtonAppearance);
}

/// A row on the wishlist listing page.
pub trait RowView {
    /// Start the exit animation (fade out, slide right).
    fn begin_exit(&self);
    fn remove(&self);
    fn is_attached(&self) -> bool;
}

/// Bundle of page-level collaborators handed to the controller.
#[derive(Clone)]
pub struct Platform {
    pub cookies: Rc<dyn CookieSource>,
    pub transport: Rc<dyn Transport>,
    pub navigator: Rc<dyn Navigator>,
    pub scheduler: Rc<dyn Scheduler>,
    pub toasts: Rc<dyn ToastSurface>,
}

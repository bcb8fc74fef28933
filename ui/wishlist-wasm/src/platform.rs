//! Browser implementations of the controller's page collaborators.

use async_trait::async_trait;
use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use tracing::warn;
use web_sys::RequestCredentials;
use wz_wishlist_core::{
    CookieSource, HttpRequest, HttpResponse, Navigator, Scheduler, Transport, WishlistError,
};

use crate::dom;

pub struct DocumentCookies;

impl CookieSource for DocumentCookies {
    fn cookies(&self) -> String {
        dom::cookie_string().unwrap_or_else(|err| {
            warn!("cannot read document.cookie: {:#}", err);
            String::new()
        })
    }
}

/// `fetch` with same-origin credentials.
pub struct FetchTransport;

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn post(&self, request: HttpRequest) -> Result<HttpResponse, WishlistError> {
        let builder = request.headers.iter().fold(
            Request::post(&request.path).credentials(RequestCredentials::SameOrigin),
            |builder, (name, value)| builder.header(name, value),
        );

        let response = builder
            .send()
            .await
            .map_err(|err| WishlistError::Transport(err.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| WishlistError::Transport(err.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}

pub struct LocationNavigator;

impl Navigator for LocationNavigator {
    fn pathname(&self) -> String {
        dom::window().location().pathname().unwrap_or_default()
    }

    fn assign(&self, url: &str) {
        if let Err(err) = dom::window().location().set_href(url) {
            warn!("navigation to {} failed: {:?}", url, err);
        }
    }

    fn reload(&self) {
        if let Err(err) = dom::window().location().reload() {
            warn!("page reload failed: {:?}", err);
        }
    }
}

/// `setTimeout` based; handles are forgotten, so tasks cannot be cancelled.
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        Timeout::new(delay_ms, task).forget();
    }
}

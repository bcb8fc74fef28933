//! Wishlist click handling.
//!
//! Toggle buttons (main and overlay) hit `/add_to_wishlist/{id}/`, which
//! flips membership server-side. Remove buttons on the listing page hit
//! `/remove_from_wishlist/{id}/`. The page only changes after the server
//! answers; every failure ends in a toast.

use std::cell::RefCell;
use std::rc::Rc;

use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};
use wz_api_types::{MovieId, ToggleOutcome, WishlistRemoveResponse, WishlistToggleResponse};

use crate::config::WishlistConfig;
use crate::csrf;
use crate::error::{WishlistError, WishlistResult};
use crate::platform::{ButtonRole, ButtonView, HttpRequest, Platform, RowView, ToastKind};
use crate::registry::WishlistRegistry;
use crate::toast::ToastPresenter;

const STATUS_FORBIDDEN: u16 = 403;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Toggle,
    Remove,
}

/// Cheap to clone; clones share the registry and collaborators.
#[derive(Clone)]
pub struct WishlistController {
    inner: Rc<Inner>,
}

struct Inner {
    config: WishlistConfig,
    platform: Platform,
    toasts: ToastPresenter,
    registry: RefCell<WishlistRegistry>,
}

impl WishlistController {
    pub fn new(config: WishlistConfig, platform: Platform) -> Self {
        let toasts = ToastPresenter::new(
            platform.toasts.clone(),
            platform.scheduler.clone(),
            config.timings,
        );
        Self {
            inner: Rc::new(Inner {
                config,
                platform,
                toasts,
                registry: RefCell::new(WishlistRegistry::default()),
            }),
        }
    }

    pub fn register_button(&self, movie: MovieId, role: ButtonRole, view: Rc<dyn ButtonView>) {
        self.inner
            .registry
            .borrow_mut()
            .register_button(movie, role, view);
    }

    pub fn register_row(&self, movie: MovieId, view: Rc<dyn RowView>) {
        self.inner.registry.borrow_mut().register_row(movie, view);
    }

    pub fn row_count(&self) -> usize {
        self.inner.registry.borrow().row_count()
    }

    /// Click on a main or overlay toggle. Failures are reported with a toast
    /// before being returned.
    pub async fn click_toggle(&self, movie: &MovieId) -> WishlistResult<ToggleOutcome> {
        self.guarded(movie, Action::Toggle, self.toggle(movie)).await
    }

    /// Click on a remove control inside a listing row. `Ok(false)` means the
    /// server declined and nothing changed.
    pub async fn click_remove(&self, movie: &MovieId) -> WishlistResult<bool> {
        self.guarded(movie, Action::Remove, self.remove(movie)).await
    }

    async fn guarded<T>(
        &self,
        movie: &MovieId,
        action: Action,
        work: impl Future<Output = WishlistResult<T>>,
    ) -> WishlistResult<T> {
        if !self.inner.registry.borrow_mut().begin_request(movie) {
            debug!(%movie, ?action, "click ignored, request in flight");
            return Err(WishlistError::InFlight);
        }
        let result = work.await;
        self.inner.registry.borrow_mut().finish_request(movie);

        if let Err(err) = &result {
            self.report(err, action);
        }
        result
    }

    async fn toggle(&self, movie: &MovieId) -> WishlistResult<ToggleOutcome> {
        let url = self.inner.config.add_url(movie);
        let body: WishlistToggleResponse = self.post_json(url).await?;

        match body.outcome() {
            Some(ToggleOutcome::Added) => {
                self.repaint(movie, true);
                self.inner.toasts.show(&body.message, ToastKind::Success);
                info!(%movie, "added to wishlist");
                Ok(ToggleOutcome::Added)
            }
            Some(ToggleOutcome::Removed) => {
                self.repaint(movie, false);
                self.inner.toasts.show(&body.message, ToastKind::Info);
                info!(%movie, "removed from wishlist");

                let path = self.inner.platform.navigator.pathname();
                if self.inner.config.is_wishlist_page(&path) {
                    self.exit_row(movie);
                }
                Ok(ToggleOutcome::Removed)
            }
            Some(ToggleOutcome::Rejected) => Err(WishlistError::Rejected(body.message)),
            None => Err(WishlistError::Malformed(
                "toggle response carries neither `added` nor `status`".to_owned(),
            )),
        }
    }

    async fn remove(&self, movie: &MovieId) -> WishlistResult<bool> {
        let url = self.inner.config.remove_url(movie);
        let body: WishlistRemoveResponse = self.post_json(url).await?;

        if body.success {
            self.exit_row(movie);
            self.inner.toasts.show(&body.message, ToastKind::Info);
            info!(%movie, "removed from wishlist listing");
        } else {
            debug!(%movie, message = %body.message, "server declined removal");
            if !body.message.is_empty() {
                self.inner.toasts.show(&body.message, ToastKind::Info);
            }
        }
        Ok(body.success)
    }

    /// Shared request path: CSRF precondition, POST, 403 check, JSON decode.
    async fn post_json<T: DeserializeOwned>(&self, path: String) -> WishlistResult<T> {
        let config = &self.inner.config;
        let cookies = self.inner.platform.cookies.cookies();
        let token = csrf::token(&cookies, &config.csrf.cookie_name)
            .filter(|token| !token.is_empty())
            .ok_or(WishlistError::MissingCredential)?;

        let request = HttpRequest {
            path,
            headers: vec![
                (config.csrf.header_name.clone(), token),
                (config.csrf.marker_header.clone(), config.csrf.marker_value.clone()),
            ],
        };
        debug!(path = %request.path, "wishlist request");
        let response = self.inner.platform.transport.post(request).await?;

        if response.status == STATUS_FORBIDDEN {
            return Err(WishlistError::AuthenticationFailure);
        }
        serde_json::from_str(&response.body).map_err(|err| {
            WishlistError::Malformed(format!("status {}: {}", response.status, err))
        })
    }

    fn repaint(&self, movie: &MovieId, in_wishlist: bool) {
        // Collect first so no registry borrow is held while views run.
        let plan = self.inner.registry.borrow().repaint_plan(
            movie,
            in_wishlist,
            &self.inner.config.labels,
        );
        for (view, appearance) in plan {
            view.render(&appearance);
        }
    }

    /// Animate the movie's rows out, drop them after the exit delay, and
    /// reload once the last row is gone.
    fn exit_row(&self, movie: &MovieId) {
        let views = self.inner.registry.borrow_mut().claim_row_exit(movie);
        if views.is_empty() {
            debug!(%movie, "no row to remove");
            return;
        }
        for view in &views {
            view.begin_exit();
        }

        let controller = self.clone();
        let movie = movie.clone();
        self.inner.platform.scheduler.schedule(
            self.inner.config.timings.row_exit_ms,
            Box::new(move || controller.finish_row_exit(&movie, &views)),
        );
    }

    fn finish_row_exit(&self, movie: &MovieId, views: &[Rc<dyn RowView>]) {
        if self.inner.registry.borrow_mut().forget_leaving_rows(movie) == 0 {
            return;
        }
        for view in views.iter().filter(|view| view.is_attached()) {
            view.remove();
        }
        if self.row_count() == 0 {
            info!("wishlist emptied, reloading for the server-rendered empty state");
            self.inner.platform.navigator.reload();
        }
    }

    fn report(&self, err: &WishlistError, action: Action) {
        let messages = &self.inner.config.messages;
        let generic = match action {
            Action::Toggle => &messages.toggle_failed,
            Action::Remove => &messages.remove_failed,
        };

        match err {
            WishlistError::InFlight => {}
            WishlistError::MissingCredential => {
                warn!(?action, "no csrf token cookie, request not sent");
                self.inner.toasts.show(&messages.missing_token, ToastKind::Error);
            }
            WishlistError::AuthenticationFailure => {
                warn!(?action, "authentication failed, redirecting to login");
                self.inner.toasts.show(&messages.login_required, ToastKind::Error);
                let navigator = self.inner.platform.navigator.clone();
                let login = self.inner.config.routes.login.clone();
                self.inner.platform.scheduler.schedule(
                    self.inner.config.timings.login_redirect_ms,
                    Box::new(move || navigator.assign(&login)),
                );
            }
            WishlistError::Rejected(message) => {
                warn!(?action, %message, "server refused wishlist request");
                let text = if message.is_empty() { generic } else { message };
                self.inner.toasts.show(text, ToastKind::Error);
            }
            WishlistError::Transport(_) | WishlistError::Malformed(_) => {
                warn!(?action, error = %err, "wishlist request failed");
                self.inner.toasts.show(generic, ToastKind::Error);
            }
        }
    }
}

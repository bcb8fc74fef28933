//! In-memory collaborators for headless tests.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Notify;
use wz_api_types::MovieId;

use crate::config::WishlistConfig;
use crate::controller::WishlistController;
use crate::error::WishlistError;
use crate::platform::{
    ButtonAppearance, ButtonRole, ButtonView, CookieSource, HttpRequest, HttpResponse, Navigator,
    Platform, RowView, Scheduler, ToastKind, ToastSurface, ToastView, Transport,
};

#[derive(Default)]
pub struct FakeCookies(RefCell<String>);

impl FakeCookies {
    pub fn set(&self, cookies: &str) {
        *self.0.borrow_mut() = cookies.to_owned();
    }
}

impl CookieSource for FakeCookies {
    fn cookies(&self) -> String {
        self.0.borrow().clone()
    }
}

/// Replays queued responses in order and records every request.
#[derive(Default)]
pub struct RecordingTransport {
    replies: RefCell<VecDeque<Result<HttpResponse, WishlistError>>>,
    requests: RefCell<Vec<HttpRequest>>,
    gate: RefCell<Option<Arc<Notify>>>,
}

impl RecordingTransport {
    pub fn reply(&self, status: u16, body: &str) {
        self.replies.borrow_mut().push_back(Ok(HttpResponse {
            status,
            body: body.to_owned(),
        }));
    }

    pub fn fail(&self, reason: &str) {
        self.replies
            .borrow_mut()
            .push_back(Err(WishlistError::Transport(reason.to_owned())));
    }

    /// Make the next request wait until the returned handle is notified.
    pub fn hold(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.gate.borrow_mut() = Some(gate.clone());
        gate
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Transport for RecordingTransport {
    async fn post(&self, request: HttpRequest) -> Result<HttpResponse, WishlistError> {
        self.requests.borrow_mut().push(request);
        let gate = self.gate.borrow_mut().take();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(WishlistError::Transport("no reply queued".to_owned())))
    }
}

pub struct FakeNavigator {
    pub path: RefCell<String>,
    assigned: RefCell<Vec<String>>,
    pub reloads: Cell<u32>,
}

impl FakeNavigator {
    pub fn new(path: &str) -> Self {
        Self {
            path: RefCell::new(path.to_owned()),
            assigned: RefCell::default(),
            reloads: Cell::new(0),
        }
    }

    pub fn assigned(&self) -> Vec<String> {
        self.assigned.borrow().clone()
    }
}

impl Navigator for FakeNavigator {
    fn pathname(&self) -> String {
        self.path.borrow().clone()
    }

    fn assign(&self, url: &str) {
        self.assigned.borrow_mut().push(url.to_owned());
    }

    fn reload(&self) {
        self.reloads.set(self.reloads.get() + 1);
    }
}

/// Virtual clock. Tasks run in due order when time is advanced.
#[derive(Default)]
pub struct ManualScheduler {
    now: Cell<u64>,
    seq: Cell<u64>,
    tasks: RefCell<Vec<(u64, u64, Box<dyn FnOnce()>)>>,
}

impl ManualScheduler {
    pub fn advance(&self, ms: u64) {
        let target = self.now.get() + ms;
        loop {
            let next = {
                let mut tasks = self.tasks.borrow_mut();
                let due = tasks
                    .iter()
                    .enumerate()
                    .filter(|(_, (at, _, _))| *at <= target)
                    .min_by_key(|(_, (at, seq, _))| (*at, *seq))
                    .map(|(index, _)| index);
                due.map(|index| tasks.remove(index))
            };
            let Some((at, _, task)) = next else {
                break;
            };
            self.now.set(at);
            task();
        }
        self.now.set(target);
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        let seq = self.seq.get();
        self.seq.set(seq + 1);
        self.tasks
            .borrow_mut()
            .push((self.now.get() + u64::from(delay_ms), seq, task));
    }
}

pub struct FakeToast {
    pub message: String,
    pub kind: ToastKind,
    pub visible: Cell<bool>,
    pub attached: Cell<bool>,
    pub removals: Cell<u32>,
    on_dismiss: Box<dyn Fn()>,
}

impl FakeToast {
    pub fn click_dismiss(&self) {
        (self.on_dismiss)();
    }
}

impl ToastView for FakeToast {
    fn show(&self) {
        self.visible.set(true);
    }

    fn hide(&self) {
        self.visible.set(false);
    }

    fn remove(&self) {
        if self.attached.replace(false) {
            self.removals.set(self.removals.get() + 1);
        }
    }

    fn is_attached(&self) -> bool {
        self.attached.get()
    }
}

#[derive(Default)]
pub struct FakeToastSurface {
    toasts: RefCell<Vec<Rc<FakeToast>>>,
}

impl FakeToastSurface {
    pub fn last(&self) -> Option<Rc<FakeToast>> {
        self.toasts.borrow().last().cloned()
    }

    pub fn attached_count(&self) -> usize {
        self.toasts
            .borrow()
            .iter()
            .filter(|toast| toast.attached.get())
            .count()
    }

    pub fn mounted(&self) -> usize {
        self.toasts.borrow().len()
    }
}

impl ToastSurface for FakeToastSurface {
    fn clear(&self) {
        for toast in self.toasts.borrow().iter() {
            toast.remove();
        }
    }

    fn mount(&self, message: &str, kind: ToastKind, on_dismiss: Box<dyn Fn()>) -> Rc<dyn ToastView> {
        let toast = Rc::new(FakeToast {
            message: message.to_owned(),
            kind,
            visible: Cell::new(false),
            attached: Cell::new(true),
            removals: Cell::new(0),
            on_dismiss,
        });
        self.toasts.borrow_mut().push(toast.clone());
        toast
    }
}

#[derive(Default)]
pub struct FakeButton {
    appearance: RefCell<Option<ButtonAppearance>>,
    pub renders: Cell<u32>,
}

impl FakeButton {
    pub fn current(&self) -> Option<ButtonAppearance> {
        self.appearance.borrow().clone()
    }
}

impl ButtonView for FakeButton {
    fn render(&self, appearance: &ButtonAppearance) {
        *self.appearance.borrow_mut() = Some(appearance.clone());
        self.renders.set(self.renders.get() + 1);
    }
}

pub struct FakeRow {
    pub exiting: Cell<bool>,
    pub attached: Cell<bool>,
    pub removals: Cell<u32>,
}

impl Default for FakeRow {
    fn default() -> Self {
        Self {
            exiting: Cell::new(false),
            attached: Cell::new(true),
            removals: Cell::new(0),
        }
    }
}

impl RowView for FakeRow {
    fn begin_exit(&self) {
        self.exiting.set(true);
    }

    fn remove(&self) {
        if self.attached.replace(false) {
            self.removals.set(self.removals.get() + 1);
        }
    }

    fn is_attached(&self) -> bool {
        self.attached.get()
    }
}

/// A controller wired to fakes, plus handles to inspect them.
pub struct TestPage {
    pub controller: WishlistController,
    pub cookies: Rc<FakeCookies>,
    pub transport: Rc<RecordingTransport>,
    pub navigator: Rc<FakeNavigator>,
    pub scheduler: Rc<ManualScheduler>,
    pub toasts: Rc<FakeToastSurface>,
}

impl TestPage {
    pub fn new(path: &str) -> Self {
        let cookies = Rc::new(FakeCookies::default());
        let transport = Rc::new(RecordingTransport::default());
        let navigator = Rc::new(FakeNavigator::new(path));
        let scheduler = Rc::new(ManualScheduler::default());
        let toasts = Rc::new(FakeToastSurface::default());

        let platform = Platform {
            cookies: cookies.clone(),
            transport: transport.clone(),
            navigator: navigator.clone(),
            scheduler: scheduler.clone(),
            toasts: toasts.clone(),
        };

        Self {
            controller: WishlistController::new(WishlistConfig::default(), platform),
            cookies,
            transport,
            navigator,
            scheduler,
            toasts,
        }
    }

    pub fn with_token(path: &str) -> Self {
        let page = Self::new(path);
        page.cookies.set("sessionid=s3ss; csrftoken=t0ken");
        page
    }

    pub fn main_button(&self, movie: &str) -> Rc<FakeButton> {
        self.button(movie, ButtonRole::Main)
    }

    pub fn overlay_button(&self, movie: &str) -> Rc<FakeButton> {
        self.button(movie, ButtonRole::Overlay)
    }

    fn button(&self, movie: &str, role: ButtonRole) -> Rc<FakeButton> {
        let button = Rc::new(FakeButton::default());
        self.controller
            .register_button(MovieId::from(movie), role, button.clone());
        button
    }

    pub fn row(&self, movie: &str) -> Rc<FakeRow> {
        let row = Rc::new(FakeRow::default());
        self.controller.register_row(MovieId::from(movie), row.clone());
        row
    }
}

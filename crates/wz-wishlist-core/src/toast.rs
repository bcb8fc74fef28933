//! Toast notifications.
//!
//! Lifecycle: mounted → `show` after the show delay → `hide` after the
//! display time (or on dismiss) → removed after the exit delay. At most one
//! toast is in the document; a new one clears the rest.

use std::cell::OnceCell;
use std::rc::{Rc, Weak};

use tracing::debug;

use crate::config::Timings;
use crate::platform::{Scheduler, ToastKind, ToastSurface, ToastView};

#[derive(Clone)]
pub struct ToastPresenter {
    surface: Rc<dyn ToastSurface>,
    scheduler: Rc<dyn Scheduler>,
    timings: Timings,
}

impl ToastPresenter {
    pub fn new(surface: Rc<dyn ToastSurface>, scheduler: Rc<dyn Scheduler>, timings: Timings) -> Self {
        Self {
            surface,
            scheduler,
            timings,
        }
    }

    pub fn show(&self, message: &str, kind: ToastKind) {
        debug!(kind = kind.as_str(), %message, "toast");
        self.surface.clear();

        // The close control needs the view, which only exists after mount.
        let slot: Rc<OnceCell<Weak<dyn ToastView>>> = Rc::new(OnceCell::new());
        let on_dismiss = {
            let slot = slot.clone();
            let scheduler = self.scheduler.clone();
            let exit_ms = self.timings.toast_exit_ms;
            Box::new(move || {
                if let Some(view) = slot.get().and_then(Weak::upgrade) {
                    retire(view, scheduler.as_ref(), exit_ms);
                }
            })
        };

        let view = self.surface.mount(message, kind, on_dismiss);
        let _ = slot.set(Rc::downgrade(&view));

        let shown = view.clone();
        self.scheduler.schedule(
            self.timings.toast_show_delay_ms,
            Box::new(move || {
                if shown.is_attached() {
                    shown.show();
                }
            }),
        );

        let scheduler = self.scheduler.clone();
        let exit_ms = self.timings.toast_exit_ms;
        self.scheduler.schedule(
            self.timings.toast_display_ms,
            Box::new(move || retire(view, scheduler.as_ref(), exit_ms)),
        );
    }
}

fn retire(view: Rc<dyn ToastView>, scheduler: &dyn Scheduler, exit_ms: u32) {
    if !view.is_attached() {
        return;
    }
    view.hide();
    scheduler.schedule(exit_ms, Box::new(move || view.remove()));
}

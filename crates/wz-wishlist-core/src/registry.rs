//! Per-movie lookup of the buttons, rows and request state on the page.

use std::collections::HashMap;
use std::rc::Rc;

use wz_api_types::MovieId;

use crate::config::Labels;
use crate::platform::{ButtonAppearance, ButtonRole, ButtonView, IconGlyph, RowView};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    InFlight,
}

struct RegisteredButton {
    role: ButtonRole,
    view: Rc<dyn ButtonView>,
}

struct RegisteredRow {
    view: Rc<dyn RowView>,
    leaving: bool,
}

#[derive(Default)]
pub struct WishlistRegistry {
    buttons: HashMap<MovieId, Vec<RegisteredButton>>,
    rows: HashMap<MovieId, Vec<RegisteredRow>>,
    requests: HashMap<MovieId, RequestState>,
}

impl WishlistRegistry {
    pub fn register_button(&mut self, movie: MovieId, role: ButtonRole, view: Rc<dyn ButtonView>) {
        self.buttons
            .entry(movie)
            .or_default()
            .push(RegisteredButton { role, view });
    }

    /// A movie listed twice keeps both rows; they leave together.
    pub fn register_row(&mut self, movie: MovieId, view: Rc<dyn RowView>) {
        self.rows
            .entry(movie)
            .or_default()
            .push(RegisteredRow { view, leaving: false });
    }

    pub fn row_count(&self) -> usize {
        self.rows.values().map(Vec::len).sum()
    }

    /// Views to repaint for `movie`, each paired with its appearance.
    pub fn repaint_plan(
        &self,
        movie: &MovieId,
        in_wishlist: bool,
        labels: &Labels,
    ) -> Vec<(Rc<dyn ButtonView>, ButtonAppearance)> {
        self.buttons
            .get(movie)
            .into_iter()
            .flatten()
            .map(|button| {
                (
                    button.view.clone(),
                    appearance(button.role, in_wishlist, labels),
                )
            })
            .collect()
    }

    pub fn request_state(&self, movie: &MovieId) -> RequestState {
        self.requests.get(movie).copied().unwrap_or_default()
    }

    /// Mark `movie` in flight. Returns `false` if it already was.
    pub fn begin_request(&mut self, movie: &MovieId) -> bool {
        let state = self.requests.entry(movie.clone()).or_default();
        if *state == RequestState::InFlight {
            return false;
        }
        *state = RequestState::InFlight;
        true
    }

    pub fn finish_request(&mut self, movie: &MovieId) {
        self.requests.remove(movie);
    }

    /// Claim the movie's rows for their exit animation. Rows already
    /// leaving are not returned again.
    pub fn claim_row_exit(&mut self, movie: &MovieId) -> Vec<Rc<dyn RowView>> {
        self.rows
            .get_mut(movie)
            .into_iter()
            .flatten()
            .filter(|row| !row.leaving)
            .map(|row| {
                row.leaving = true;
                row.view.clone()
            })
            .collect()
    }

    /// Drop the movie's leaving rows. Returns how many were registered.
    pub fn forget_leaving_rows(&mut self, movie: &MovieId) -> usize {
        let Some(rows) = self.rows.get_mut(movie) else {
            return 0;
        };
        let before = rows.len();
        rows.retain(|row| !row.leaving);
        let forgotten = before - rows.len();
        if rows.is_empty() {
            self.rows.remove(movie);
        }
        forgotten
    }
}

pub fn appearance(role: ButtonRole, in_wishlist: bool, labels: &Labels) -> ButtonAppearance {
    let glyph = if in_wishlist {
        IconGlyph::Filled
    } else {
        IconGlyph::Outline
    };
    let label = match (role, in_wishlist) {
        (ButtonRole::Overlay, _) => None,
        (ButtonRole::Main, true) => Some(labels.in_wishlist.clone()),
        (ButtonRole::Main, false) => Some(labels.not_in_wishlist.clone()),
    };
    ButtonAppearance {
        glyph,
        label,
        marked: in_wishlist,
    }
}

//! Element-backed wishlist buttons and listing rows.

use anyhow::Result;
use tracing::warn;
use web_sys::Element;
use wz_wishlist_core::{ButtonAppearance, ButtonView, IconGlyph, RowView};

use crate::dom;

pub const IN_WISHLIST_CLASS: &str = "in-wishlist";
const ICON_CLASS: &str = "fa-bookmark";
const OUTLINE_CLASS: &str = "far";
const FILLED_CLASS: &str = "fas";

fn glyph_class(glyph: IconGlyph) -> &'static str {
    match glyph {
        IconGlyph::Outline => OUTLINE_CLASS,
        IconGlyph::Filled => FILLED_CLASS,
    }
}

/// A `.btn-wishlist` or `.btn-wishlist-overlay` element.
pub struct ElementButton {
    element: Element,
}

impl ElementButton {
    pub fn new(element: Element) -> Self {
        Self { element }
    }

    /// Labelled buttons are rebuilt as `<i class="{glyph} fa-bookmark"></i> {label}`.
    fn rebuild(&self, glyph: IconGlyph, label: &str) -> Result<()> {
        let icon = dom::create_element("i")?;
        icon.set_class_name(&format!("{} {}", glyph_class(glyph), ICON_CLASS));
        let text = dom::document().create_text_node(&format!(" {}", label));

        self.element.set_text_content(None);
        self.element.append_child(&icon).map_err(dom::js_error)?;
        self.element.append_child(&text).map_err(dom::js_error)?;
        Ok(())
    }

    /// Icon-only buttons keep their markup; only the glyph class flips.
    fn swap_glyph(&self, glyph: IconGlyph) {
        let Some(icon) = dom::query_within(&self.element, "i") else {
            warn!("wishlist button has no icon element");
            return;
        };
        dom::toggle_class(&icon, FILLED_CLASS, glyph == IconGlyph::Filled);
        dom::toggle_class(&icon, OUTLINE_CLASS, glyph == IconGlyph::Outline);
    }
}

impl ButtonView for ElementButton {
    fn render(&self, appearance: &ButtonAppearance) {
        match &appearance.label {
            Some(label) => {
                if let Err(err) = self.rebuild(appearance.glyph, label) {
                    warn!("cannot repaint wishlist button: {:#}", err);
                }
            }
            None => self.swap_glyph(appearance.glyph),
        }
        dom::toggle_class(&self.element, IN_WISHLIST_CLASS, appearance.marked);
    }
}

/// A `.wishlist-item` row on the listing page.
pub struct ElementRow {
    element: Element,
}

impl ElementRow {
    pub fn new(element: Element) -> Self {
        Self { element }
    }
}

impl RowView for ElementRow {
    fn begin_exit(&self) {
        dom::set_style(&self.element, "opacity", "0");
        dom::set_style(&self.element, "transform", "translateX(100px)");
    }

    fn remove(&self) {
        self.element.remove();
    }

    fn is_attached(&self) -> bool {
        self.element.is_connected()
    }
}

//! HTML rendering of search results.
//!
//! The rendered string is a full replacement for the result container's
//! markup; there is no diffing against previous content.

use kunmap_core::types::{KunEntry, OkuriganaEntry};

/// Inner markup of one result row.
pub trait RenderEntry {
    fn write_list_item(&self, out: &mut String);
}

impl RenderEntry for KunEntry {
    fn write_list_item(&self, out: &mut String) {
        out.push_str("<b>");
        out.push_str(&self.kun);
        out.push_str("</b> → ");
        out.push_str(&self.kanji);
    }
}

impl RenderEntry for OkuriganaEntry {
    fn write_list_item(&self, out: &mut String) {
        out.push_str("<b>");
        out.push_str(&self.kun_no_okurigana);
        out.push_str("</b> → ");
        out.push_str(&self.kanji_oku);
        if self.has_extended_form() {
            out.push_str(" (外) ");
            out.push_str(&self.kanji_ext_oku);
        }
    }
}

/// Renders matches into `<li>` rows, best match first.
pub fn render_list<'a, T, I>(matches: I) -> String
where
    T: RenderEntry + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut out = String::new();
    for entry in matches {
        out.push_str("<li>");
        entry.write_list_item(&mut out);
        out.push_str("</li>");
    }
    out
}

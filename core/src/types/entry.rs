use serde::Deserialize;

/// Text a record exposes to the fuzzy index.
///
/// Returns the record's indexed fields joined with a space. The set of
/// indexed fields is fixed per record type; once an index is built over
/// the returned text it never changes.
pub trait Searchable: Clone + Send + Sync + 'static {
    fn search_text(&self) -> String;
}

/// One entry of the kun-reading dataset: phonetic reading plus the primary
/// written form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct KunEntry {
    pub kun: String,
    pub kanji: String,
}

impl Searchable for KunEntry {
    fn search_text(&self) -> String {
        format!("{} {}", self.kun, self.kanji)
    }
}

/// One entry of the okurigana-aware dataset.
///
/// `kanji` is the bare written form; `kanji_oku` carries the inflectional
/// suffix. The `kanji_ext`/`kanji_ext_oku` pair holds an alternate written
/// form outside the common-use set and is often missing or empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct OkuriganaEntry {
    pub kun_no_okurigana: String,
    pub kanji: String,
    pub kanji_oku: String,
    #[serde(default)]
    pub kanji_ext: String,
    #[serde(default)]
    pub kanji_ext_oku: String,
}

impl OkuriganaEntry {
    /// An empty extended form counts as absent.
    pub fn has_extended_form(&self) -> bool {
        !self.kanji_ext_oku.is_empty()
    }
}

impl Searchable for OkuriganaEntry {
    fn search_text(&self) -> String {
        if self.has_extended_form() {
            format!(
                "{} {} {}",
                self.kun_no_okurigana, self.kanji_oku, self.kanji_ext_oku
            )
        } else {
            format!("{} {}", self.kun_no_okurigana, self.kanji_oku)
        }
    }
}

#[cfg(test)]
mod tests;

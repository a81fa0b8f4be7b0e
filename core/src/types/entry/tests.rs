use super::*;

#[test]
fn kun_entry_from_json() {
    let entry: KunEntry = serde_json::from_str(r#"{"kun":"たべる","kanji":"食べる"}"#).unwrap();
    assert_eq!(entry.kun, "たべる");
    assert_eq!(entry.kanji, "食べる");
}

#[test]
fn kun_entry_search_text_covers_both_fields() {
    let entry = KunEntry {
        kun: "たべる".to_string(),
        kanji: "食べる".to_string(),
    };
    assert_eq!(entry.search_text(), "たべる 食べる");
}

#[test]
fn okurigana_entry_from_json() {
    let entry: OkuriganaEntry = serde_json::from_str(
        r#"{"kun_no_okurigana":"み","kanji":"見る","kanji_oku":"見る","kanji_ext":"観る","kanji_ext_oku":"観る"}"#,
    )
    .unwrap();
    assert_eq!(entry.kun_no_okurigana, "み");
    assert_eq!(entry.kanji_oku, "見る");
    assert!(entry.has_extended_form());
}

#[test]
fn okurigana_entry_missing_extended_fields_default_to_empty() {
    let entry: OkuriganaEntry = serde_json::from_str(
        r#"{"kun_no_okurigana":"み","kanji":"見る","kanji_oku":"見る"}"#,
    )
    .unwrap();
    assert_eq!(entry.kanji_ext, "");
    assert_eq!(entry.kanji_ext_oku, "");
    assert!(!entry.has_extended_form());
}

#[test]
fn okurigana_entry_empty_extended_form_counts_as_absent() {
    let entry: OkuriganaEntry = serde_json::from_str(
        r#"{"kun_no_okurigana":"み","kanji":"見る","kanji_oku":"見る","kanji_ext":"","kanji_ext_oku":""}"#,
    )
    .unwrap();
    assert!(!entry.has_extended_form());
}

#[test]
fn okurigana_search_text_includes_extended_form_only_when_present() {
    let mut entry = OkuriganaEntry {
        kun_no_okurigana: "み".to_string(),
        kanji: "見る".to_string(),
        kanji_oku: "見る".to_string(),
        kanji_ext: String::new(),
        kanji_ext_oku: String::new(),
    };
    assert_eq!(entry.search_text(), "み 見る");

    entry.kanji_ext = "観る".to_string();
    entry.kanji_ext_oku = "観る".to_string();
    assert_eq!(entry.search_text(), "み 見る 観る");
}

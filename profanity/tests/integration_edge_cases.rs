//! Edge-case coverage for term matching and rewriting.
//!
//! These tests focus on word boundaries, case handling, punctuation, Unicode
//! text and non-text leaves.

use profanity::{ObscureConfig, Options, Profanity, TermSet};
use serde_json::json;

fn engine() -> Profanity {
    Profanity::with_defaults().unwrap()
}

#[test]
fn test_empty_string() {
    let result = engine().purify_str("");
    assert_eq!(result.value, "");
    assert!(result.is_clean());
}

#[test]
fn test_substrings_inside_words_do_not_match() {
    let results = engine().scan_str("classroom uranus scrapbook hello assistant");
    assert!(results.is_empty());
}

#[test]
fn test_punctuation_is_a_word_boundary() {
    let result = engine().purify_str("damn!crap,(poo).");
    assert_eq!(result.value, "d**n!c**p,(p*o).");
    assert_eq!(result.matches, vec!["damn", "crap", "poo"]);
}

#[test]
fn test_underscore_is_part_of_a_word() {
    assert!(engine().scan_str("damn_it").is_empty());
}

#[test]
fn test_mixed_case_keeps_original_letters() {
    let result = engine().purify_str("DaMn CRAP");
    assert_eq!(result.value, "D**n C**P");
    assert_eq!(result.matches, vec!["damn", "crap"]);
}

#[test]
fn test_longer_term_matches_when_shorter_is_a_prefix() {
    let result = engine().purify_str("asshole ass");
    assert_eq!(result.matches, vec!["asshole", "ass"]);
    assert_eq!(result.value, "a*****e a*s");
}

#[test]
fn test_short_terms_are_fully_masked() {
    let engine = Options::new()
        .with_forbidden_list(["ab", "x"])
        .build()
        .unwrap();
    assert_eq!(engine.purify_str("ab x abc").value, "** * abc");
}

#[test]
fn test_unicode_text_around_matches() {
    let result = engine().purify_str("秘密 damn données");
    assert_eq!(result.value, "秘密 d**n données");
}

#[test]
fn test_unicode_terms() {
    let engine = Options::new()
        .with_forbidden_list(["mierdä"])
        .build()
        .unwrap();
    let result = engine.purify_str("MIERDÄ!");
    assert_eq!(result.matches, vec!["mierdä"]);
    assert_eq!(result.value, "M****Ä!");
}

#[test]
fn test_adjacent_matches() {
    let result = engine().purify_str("damn damn");
    assert_eq!(result.value, "d**n d**n");
}

#[test]
fn test_non_text_leaves_pass_through() {
    let input = json!({ "n": 1, "f": 2.5, "b": true, "z": null, "t": "crap" });
    let result = engine().purify(&input);
    assert_eq!(
        result.value,
        json!({ "n": 1, "f": 2.5, "b": true, "z": null, "t": "c**p" })
    );
}

#[test]
fn test_empty_containers() {
    assert_eq!(engine().purify(&json!({})).value, json!({}));
    assert_eq!(engine().purify(&json!([])).value, json!([]));
}

#[test]
fn test_deeply_nested_value() {
    let mut value = json!("crap");
    for _ in 0..64 {
        value = json!([{ "inner": value }]);
    }
    assert_eq!(engine().scan(&value), vec!["crap"]);
}

#[test]
fn test_very_long_string() {
    let text = "fine ".repeat(20_000) + "damn";
    let result = engine().purify_str(&text);
    assert_eq!(result.matches, vec!["damn"]);
    assert!(result.value.ends_with("d**n"));
    assert_eq!(result.value.len(), text.len());
}

#[test]
fn test_regex_metacharacters_in_terms() {
    let terms = TermSet::new(["c++", "foo"]).unwrap();
    assert_eq!(terms.terms(), ["c++", "foo"]);
    assert!(!terms.is_match("cxx"));
}

#[test]
fn test_obscure_config_is_reusable() {
    let config = ObscureConfig::new().with_symbol('#');
    assert_eq!(config.symbol(), '#');
    assert_eq!(config.apply_to("crap"), "c##p");
    assert_eq!(config.apply_to("crap"), "c##p");
}

use std::collections::{BTreeSet, HashSet};

/// Every shipped locale must define each message in the en-US catalog,
/// exactly once. New locales go in `LOCALES` alongside their
/// `ui/i18n/<locale>/adgauge-ui.ftl`.
const EN_US: &str = include_str!("../i18n/en-US/adgauge-ui.ftl");
const AR_EG: &str = include_str!("../i18n/ar-EG/adgauge-ui.ftl");

const LOCALES: &[(&str, &str)] = &[("ar-EG", AR_EG)];

#[test]
fn all_locales_have_all_fallback_keys() {
    let fallback = message_ids(EN_US, "en-US");
    assert!(!fallback.is_empty(), "en-US catalog has no messages");

    let failures: Vec<String> = LOCALES
        .iter()
        .filter_map(|(locale, src)| {
            let keys = message_ids(src, locale);
            let missing: Vec<&str> = fallback
                .iter()
                .filter(|k| !keys.contains(*k))
                .map(String::as_str)
                .collect();
            (!missing.is_empty()).then(|| format!("{locale}: {}", missing.join(", ")))
        })
        .collect();

    assert!(
        failures.is_empty(),
        "translations missing relative to en-US:\n{}",
        failures.join("\n")
    );
}

#[test]
fn arabic_advice_is_written_in_arabic_script() {
    let is_arabic = |c: char| ('\u{0600}'..='\u{06FF}').contains(&c);
    let untranslated: Vec<&str> = AR_EG
        .lines()
        .filter(|line| line.starts_with("rec-") || line.starts_with("tab-"))
        .filter(|line| !line.chars().any(is_arabic))
        .collect();
    assert!(
        untranslated.is_empty(),
        "ar-EG messages without Arabic text: {untranslated:?}"
    );
}

/// Message ids; panics on a duplicate definition.
fn message_ids(src: &str, locale: &str) -> BTreeSet<String> {
    let mut seen = HashSet::new();
    let mut ids = BTreeSet::new();
    for line in src.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('.') {
            continue;
        }
        let Some((key, _)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() || key.contains(char::is_whitespace) {
            continue;
        }
        assert!(seen.insert(key.to_string()), "{locale} defines {key} twice");
        ids.insert(key.to_string());
    }
    ids
}

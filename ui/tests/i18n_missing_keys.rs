use std::collections::{BTreeSet, HashSet};

const EN_US: &str = include_str!("../i18n/en-US/easyway_ui.ftl");
const AR_YE: &str = include_str!("../i18n/ar-YE/easyway_ui.ftl");

/// Translation completeness test.
/// The site switches between exactly two locales at runtime, so both bundles
/// must define the same message set: a key only present in `ar-YE` would be
/// unreachable, one only present in `en-US` would fall back mid-page.
///
/// This is a lightweight parser:
/// - Ignores comment lines starting with `#`
/// - Treats any line of the form `key =` or `key=` as a message definition
/// - Skips blank / attribute / continuation lines
/// - Does not attempt to parse multi-line pattern bodies (only keys)
#[test]
fn arabic_has_all_fallback_keys() {
    let fallback_keys = extract_keys(EN_US);
    assert!(
        !fallback_keys.is_empty(),
        "Fallback (en-US) contains no keys."
    );
    assert_no_dup_keys(EN_US, "en-US");
    assert_no_dup_keys(AR_YE, "ar-YE");

    let missing = difference(&fallback_keys, &extract_keys(AR_YE));
    if !missing.is_empty() {
        panic!(
            "Locale ar-YE is missing {} key(s):\n  {}\n\nHint: copy the missing keys from en-US, then translate.",
            missing.len(),
            missing.into_iter().collect::<Vec<_>>().join("\n  ")
        );
    }
}

#[test]
fn arabic_has_no_extra_keys() {
    let extra = difference(&extract_keys(AR_YE), &extract_keys(EN_US));
    assert!(
        extra.is_empty(),
        "Keys defined only in ar-YE (add them to en-US or delete them):\n  {}",
        extra.into_iter().collect::<Vec<_>>().join("\n  ")
    );
}

fn difference(left: &HashSet<String>, right: &HashSet<String>) -> BTreeSet<String> {
    left.iter().filter(|k| !right.contains(*k)).cloned().collect()
}

/// Extract message keys from a Fluent file (simple heuristic).
fn extract_keys(src: &str) -> HashSet<String> {
    let mut keys = HashSet::new();

    for line in src.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        // Skip attribute or continuation lines (start with '.' or indent).
        if line.starts_with('.') {
            continue;
        }
        // Basic pattern: key [space]* '='
        if let Some(eq_pos) = line.find('=') {
            let (left, _right) = line.split_at(eq_pos);
            let key = left.trim();
            if !key.is_empty()
                && !key.contains(' ')
                && !key.contains('\t')
                && !key.starts_with('[')
                && !key.starts_with('@')
            {
                keys.insert(key.to_string());
            }
        }
    }

    keys
}

/// Assert no duplicate key definitions in a single FTL file (rudimentary).
fn assert_no_dup_keys(src: &str, locale: &str) {
    let mut seen = HashSet::new();
    let mut dups = BTreeSet::new();

    for line in src.lines() {
        let raw = line;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('.') {
            continue;
        }
        if let Some(eq_pos) = line.find('=') {
            let key = line[..eq_pos].trim();
            if !key.is_empty()
                && !key.contains(' ')
                && !key.contains('\t')
                && !key.starts_with('[')
                && !key.starts_with('@')
            {
                if !seen.insert(key.to_string()) {
                    dups.insert(format!("{key}  (line: \"{raw}\")"));
                }
            }
        }
    }

    if !dups.is_empty() {
        panic!(
            "Duplicate key definitions in {locale}:\n  {}",
            dups.into_iter().collect::<Vec<_>>().join("\n  ")
        );
    }
}

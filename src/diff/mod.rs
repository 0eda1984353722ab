use crate::StagedEdit;

/// Characters stripped from both ends before a cleaned comparison.
///
/// Only ASCII space, tab, newline, carriage return, NUL and vertical tab.
/// No-break and other Unicode spaces are part of the translation.
fn is_cleaned_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\0' | '\x0B')
}

/// Decide whether a staged edit changes the published value.
///
/// Without the no-cleaning flag, leading and trailing whitespace is ignored on
/// both sides. Internal whitespace, case and line endings always count.
/// Missing values compare as empty strings.
pub fn is_committable(edit: &StagedEdit) -> bool {
    let current = edit.current.as_deref().unwrap_or("");
    let new = edit.new.as_deref().unwrap_or("");

    if edit.no_cleaning {
        current != new
    } else {
        current.trim_matches(is_cleaned_whitespace) != new.trim_matches(is_cleaned_whitespace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edit(current: Option<&str>, new: Option<&str>, no_cleaning: bool) -> StagedEdit {
        StagedEdit {
            component: "core".to_string(),
            language: "cs".to_string(),
            string_id: "savechanges".to_string(),
            current: current.map(str::to_string),
            new: new.map(str::to_string),
            no_cleaning,
        }
    }

    #[test]
    fn surrounding_whitespace_ignored_when_cleaning() {
        assert!(!is_committable(&edit(Some("Save"), Some("Save "), false)));
        assert!(!is_committable(&edit(Some("  Save\n"), Some("Save"), false)));
    }

    #[test]
    fn surrounding_whitespace_counts_without_cleaning() {
        assert!(is_committable(&edit(Some("Save"), Some("Save "), true)));
    }

    #[test]
    fn internal_whitespace_always_counts() {
        assert!(is_committable(&edit(Some("Save all"), Some("Save  all"), false)));
    }

    #[test]
    fn case_and_line_endings_are_not_normalized() {
        assert!(is_committable(&edit(Some("save"), Some("Save"), false)));
        assert!(is_committable(&edit(Some("a\nb"), Some("a\r\nb"), false)));
    }

    #[test]
    fn different_values_are_committable() {
        assert!(is_committable(&edit(Some("Save"), Some("Cancel"), false)));
        assert!(is_committable(&edit(Some("Save"), Some("Cancel"), true)));
    }

    #[test]
    fn identical_values_are_not_committable() {
        assert!(!is_committable(&edit(Some("Save"), Some("Save"), true)));
        assert!(!is_committable(&edit(Some("Save"), Some("Save"), false)));
    }

    #[test]
    fn unicode_spaces_are_part_of_the_value() {
        // No-break space before French punctuation
        assert!(is_committable(&edit(Some("Enregistrer"), Some("Enregistrer\u{a0}"), false)));
        // Ideographic space
        assert!(is_committable(&edit(Some("保存"), Some("\u{3000}保存"), false)));
        // Form feed
        assert!(is_committable(&edit(Some("Save"), Some("Save\x0C"), false)));
    }

    #[test]
    fn nul_and_vertical_tab_are_cleaned() {
        assert!(!is_committable(&edit(Some("Save"), Some("Save\0"), false)));
        assert!(!is_committable(&edit(Some("\x0BSave"), Some("Save"), false)));
        assert!(!is_committable(&edit(Some("Save\r\n"), Some("\tSave"), false)));
        assert!(is_committable(&edit(Some("Save"), Some("Save\0"), true)));
    }

    #[test]
    fn missing_values_compare_as_empty() {
        assert!(!is_committable(&edit(None, None, true)));
        assert!(!is_committable(&edit(None, Some(""), true)));
        assert!(!is_committable(&edit(None, Some("   "), false)));
        assert!(is_committable(&edit(None, Some("Uložit"), false)));
        assert!(is_committable(&edit(Some("Save"), None, false)));
    }
}

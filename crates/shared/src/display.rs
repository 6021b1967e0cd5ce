//! Pure display formatting for title records.

use crate::domain::TitleRecord;

/// Renders a record as heading text: the first character of each word is
/// uppercased, the remainder passes through verbatim, and the words are
/// joined by single spaces in seniority-field-role order.
///
/// An empty component contributes an empty word; the joining spaces stay.
pub fn format_title(record: &TitleRecord) -> String {
    format!(
        "{} {} {}",
        capitalize_first(&record.seniority),
        capitalize_first(&record.field),
        capitalize_first(&record.role)
    )
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(seniority: &str, field: &str, role: &str) -> TitleRecord {
        TitleRecord {
            seniority: seniority.to_string(),
            field: field.to_string(),
            role: role.to_string(),
        }
    }

    #[test]
    fn capitalizes_first_letter_of_each_word() {
        let formatted = format_title(&record("senior", "backend", "engineer"));
        assert_eq!(formatted, "Senior Backend Engineer");
    }

    #[test]
    fn preserves_casing_beyond_the_first_character() {
        let formatted = format_title(&record("lead", "devOps", "SRE"));
        assert_eq!(formatted, "Lead DevOps SRE");
    }

    #[test]
    fn formatting_is_idempotent() {
        let input = record("principal", "frontend", "architect");
        let once = format_title(&input);
        assert_eq!(once, format_title(&input));

        let reformatted = record("Principal", "Frontend", "Architect");
        assert_eq!(once, format_title(&reformatted));
    }

    #[test]
    fn empty_component_keeps_joining_spaces() {
        let formatted = format_title(&record("senior", "", "engineer"));
        assert_eq!(formatted, "Senior  Engineer");
    }
}

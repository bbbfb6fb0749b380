const SKILL_SEPARATOR: char = ';';

/// Strips byte-order and zero-width marks and collapses inner whitespace.
pub(crate) fn clean_cell(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Splits a `;`-separated skill cell, dropping blanks and case-insensitive repeats.
pub(crate) fn split_skills(value: &str) -> Vec<String> {
    let mut skills: Vec<String> = Vec::new();
    for skill in value.split(SKILL_SEPARATOR).map(clean_cell) {
        if skill.is_empty() {
            continue;
        }
        if skills
            .iter()
            .any(|existing| existing.eq_ignore_ascii_case(&skill))
        {
            continue;
        }
        skills.push(skill);
    }
    skills
}

/// Spreadsheet-style truthy values: `yes`, `y`, `true`, `1`, `x`.
pub(crate) fn parse_flag(value: &str) -> bool {
    matches!(
        clean_cell(value).to_ascii_lowercase().as_str(),
        "yes" | "y" | "true" | "1" | "x"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cleans_hidden_marks_and_spacing() {
        assert_eq!(clean_cell("\u{feff}Computer   Science \u{200b}"), "Computer Science");
    }

    #[test]
    fn skills_split_on_semicolons() {
        assert_eq!(
            split_skills(" Python ;; SQL;python; Machine  Learning "),
            vec!["Python", "SQL", "Machine Learning"]
        );
        assert!(split_skills(" ; ").is_empty());
    }

    #[test]
    fn flags_accept_spreadsheet_values() {
        assert!(parse_flag("Yes"));
        assert!(parse_flag(" x "));
        assert!(!parse_flag("no"));
        assert!(!parse_flag(""));
    }
}

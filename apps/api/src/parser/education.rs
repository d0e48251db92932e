//! Education entry parser — structures the "education" section into
//! blank-line-delimited entries.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::resume::EducationEntry;

static RE_DEGREE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(Bachelor|Master|B\.?Sc|M\.?Sc|B\.?Tech|M\.?Tech|B\.?Eng|M\.?Eng|Ph\.?D|MBA)[^,\n]*")
        .expect("regex is compile-time constant")
});

static RE_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(19|20)\d{2}").expect("regex is compile-time constant"));

/// Parses education section text into entries, one per blank-line-delimited
/// block. Empty blocks produce no entry.
pub fn parse_education(section_text: &str) -> Vec<EducationEntry> {
    section_text.split("\n\n").filter_map(parse_block).collect()
}

fn parse_block(block: &str) -> Option<EducationEntry> {
    let block = block.trim();
    if block.is_empty() {
        return None;
    }

    let degree = RE_DEGREE
        .find(block)
        .map(|m| m.as_str().trim().to_string());

    // First two 4-digit years (19xx/20xx) in order of appearance; any
    // further years are ignored.
    let mut years = RE_YEAR.find_iter(block).map(|m| m.as_str().to_string());
    let start_year = years.next();
    let end_year = years.next();

    // Crude but documented tie-break: the second non-blank line is taken
    // verbatim as the institution, else the only line.
    let lines: Vec<&str> = block
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    let institution = if lines.len() > 1 {
        Some(lines[1].to_string())
    } else {
        lines.first().map(|l| l.to_string())
    };

    Some(EducationEntry {
        degree,
        institution,
        start_year,
        end_year,
        raw: block.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_education_full_block() {
        let entries = parse_education("B.Tech Computer Science\nMIT\n2016-2020");
        assert_eq!(entries.len(), 1);
        let e = &entries[0];
        assert_eq!(e.degree.as_deref(), Some("B.Tech Computer Science"));
        assert_eq!(e.institution.as_deref(), Some("MIT"));
        assert_eq!(e.start_year.as_deref(), Some("2016"));
        assert_eq!(e.end_year.as_deref(), Some("2020"));
        assert_eq!(e.raw, "B.Tech Computer Science\nMIT\n2016-2020");
    }

    #[test]
    fn test_parse_education_multiple_blocks() {
        let text = "M.Sc Data Science\nTU Delft\n2020-2022\n\nBachelor of Arts\nCity College\n1998";
        let entries = parse_education(text);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].degree.as_deref(), Some("Bachelor of Arts"));
        assert_eq!(entries[1].start_year.as_deref(), Some("1998"));
        assert_eq!(entries[1].end_year, None);
    }

    #[test]
    fn test_parse_education_single_line_block_uses_first_line() {
        let entries = parse_education("Springfield Community College");
        assert_eq!(entries.len(), 1);
        assert_eq!(
            entries[0].institution.as_deref(),
            Some("Springfield Community College")
        );
        assert_eq!(entries[0].degree, None);
        assert_eq!(entries[0].start_year, None);
    }

    #[test]
    fn test_parse_education_degree_stops_at_comma() {
        let entries = parse_education("MBA in Finance, Dean's List\nHarvard");
        assert_eq!(entries[0].degree.as_deref(), Some("MBA in Finance"));
    }

    #[test]
    fn test_parse_education_ignores_years_beyond_two() {
        let entries = parse_education("Ph.D\nOxford\n2010 2014 2018");
        assert_eq!(entries[0].start_year.as_deref(), Some("2010"));
        assert_eq!(entries[0].end_year.as_deref(), Some("2014"));
    }

    #[test]
    fn test_parse_education_empty_section() {
        assert!(parse_education("").is_empty());
        assert!(parse_education("\n\n").is_empty());
    }
}

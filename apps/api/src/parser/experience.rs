//! Experience entry parser — structures experience sections into
//! blank-line-delimited job entries.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::resume::ExperienceEntry;

// Month-name date range, e.g. "Jan 2019 - Present" or "March 2015 – Aug 2018".
// Month abbreviations are 3+ letters with an optional trailing period; the
// end token may be a literal Present/Current instead of a month+year.
static RE_DATE_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)(?P<start_month>Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Sept|Oct|Nov|Dec)[a-z]*\.?\s+",
        r"(?P<start_year>(19|20)\d{2})",
        r"\s*[-–]\s*",
        r"(?P<end_month>Present|Current|Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Sept|Oct|Nov|Dec)[a-z]*\.?\s*",
        r"(?P<end_year>(19|20)\d{2})?",
    ))
    .expect("regex is compile-time constant")
});

/// Parses experience section text into entries, one per
/// blank-line-delimited block.
pub fn parse_experience(section_text: &str) -> Vec<ExperienceEntry> {
    section_text.split("\n\n").filter_map(parse_block).collect()
}

fn parse_block(block: &str) -> Option<ExperienceEntry> {
    let block = block.trim();
    if block.is_empty() {
        return None;
    }

    let lines: Vec<&str> = block
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    let header = *lines.first()?;

    // "Title - Company" on the header line; without the separator the
    // whole line is the title.
    let (job_title, company) = match header.split_once(" - ") {
        Some((title, company)) => (
            Some(title.trim().to_string()),
            Some(company.trim().to_string()),
        ),
        None => (Some(header.to_string()), None),
    };

    let (start_date, end_date) = match RE_DATE_RANGE.captures(block) {
        Some(caps) => {
            let start = format!("{} {}", &caps["start_month"], &caps["start_year"]);
            let end = match caps.name("end_year") {
                Some(year) => Some(format!("{} {}", &caps["end_month"], year.as_str())),
                // No year captured: the end token itself, e.g. "Present".
                None => Some(caps["end_month"].to_string()),
            };
            (Some(start), end)
        }
        None => (None, None),
    };

    let description = (lines.len() > 1).then(|| lines[1..].join("\n"));

    Some(ExperienceEntry {
        job_title,
        company,
        start_date,
        end_date,
        description,
        raw: block.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_experience_full_block() {
        let entries = parse_experience("Software Engineer - Acme Corp\nJan 2019 - Present\nBuilt things.");
        assert_eq!(entries.len(), 1);
        let e = &entries[0];
        assert_eq!(e.job_title.as_deref(), Some("Software Engineer"));
        assert_eq!(e.company.as_deref(), Some("Acme Corp"));
        assert_eq!(e.start_date.as_deref(), Some("Jan 2019"));
        assert_eq!(e.end_date.as_deref(), Some("Present"));
        // The description is everything after the header line, date line
        // included — dates are extracted, not consumed.
        assert_eq!(
            e.description.as_deref(),
            Some("Jan 2019 - Present\nBuilt things.")
        );
    }

    #[test]
    fn test_parse_experience_header_without_separator() {
        let entries = parse_experience("Freelance Consultant\nAdvised startups.");
        let e = &entries[0];
        assert_eq!(e.job_title.as_deref(), Some("Freelance Consultant"));
        assert_eq!(e.company, None);
        assert_eq!(e.description.as_deref(), Some("Advised startups."));
    }

    #[test]
    fn test_parse_experience_splits_on_first_separator_only() {
        let entries = parse_experience("Lead - Data - Platform Team");
        let e = &entries[0];
        assert_eq!(e.job_title.as_deref(), Some("Lead"));
        assert_eq!(e.company.as_deref(), Some("Data - Platform Team"));
    }

    #[test]
    fn test_parse_experience_bounded_date_range() {
        let entries = parse_experience("Analyst - BigCo\nMar 2015 – Aug 2018");
        let e = &entries[0];
        assert_eq!(e.start_date.as_deref(), Some("Mar 2015"));
        assert_eq!(e.end_date.as_deref(), Some("Aug 2018"));
    }

    #[test]
    fn test_parse_experience_full_month_names_capture_abbreviation() {
        let entries = parse_experience("Engineer - X\nJanuary 2020 - Current");
        let e = &entries[0];
        assert_eq!(e.start_date.as_deref(), Some("Jan 2020"));
        assert_eq!(e.end_date.as_deref(), Some("Current"));
    }

    #[test]
    fn test_parse_experience_no_dates_leaves_both_unset() {
        let entries = parse_experience("Intern - Lab\nHelped out.");
        assert_eq!(entries[0].start_date, None);
        assert_eq!(entries[0].end_date, None);
    }

    #[test]
    fn test_parse_experience_single_line_block_has_no_description() {
        let entries = parse_experience("Engineer - Acme");
        assert_eq!(entries[0].description, None);
    }

    #[test]
    fn test_parse_experience_multiple_blocks_keep_order() {
        let text = "Dev - A\nJun 2021 - Present\n\nDev - B\nSep 2019 - May 2021";
        let entries = parse_experience(text);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].company.as_deref(), Some("A"));
        assert_eq!(entries[1].end_date.as_deref(), Some("May 2021"));
    }
}

//! CSV flattening of parsed records — presentation only, the pipeline
//! knows nothing about this.

use anyhow::Context;

use crate::errors::AppError;
use crate::models::resume::ResumeRecord;

/// One CSV row summarizing a parsed document.
#[derive(Debug)]
pub struct FlatRow {
    pub file_name: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub skills: String,
    pub education: String,
    pub experience: String,
}

/// Flattens a record into a single-row summary: skills joined with `", "`,
/// education and experience entries summarized and joined with `" | "`.
pub fn flatten_record(file_name: &str, record: &ResumeRecord) -> FlatRow {
    let education = record
        .education
        .iter()
        .map(|e| {
            let mut parts: Vec<String> = Vec::new();
            if let Some(degree) = &e.degree {
                parts.push(degree.clone());
            }
            if let Some(institution) = &e.institution {
                parts.push(format!("@ {institution}"));
            }
            if let Some(end) = &e.end_year {
                parts.push(format!("({}-{})", e.start_year.as_deref().unwrap_or(""), end));
            }
            parts.join(" ")
        })
        .collect::<Vec<_>>()
        .join(" | ");

    let experience = record
        .experience
        .iter()
        .map(|x| {
            let mut parts: Vec<String> = Vec::new();
            if let Some(title) = &x.job_title {
                parts.push(title.clone());
            }
            if let Some(company) = &x.company {
                parts.push(format!("@ {company}"));
            }
            if x.start_date.is_some() || x.end_date.is_some() {
                parts.push(format!(
                    "({} - {})",
                    x.start_date.as_deref().unwrap_or(""),
                    x.end_date.as_deref().unwrap_or("")
                ));
            }
            parts.join(" ")
        })
        .collect::<Vec<_>>()
        .join(" | ");

    FlatRow {
        file_name: file_name.to_string(),
        name: record.name.clone().unwrap_or_default(),
        email: record.email.clone().unwrap_or_default(),
        phone: record.phone.clone().unwrap_or_default(),
        skills: record.skills.join(", "),
        education,
        experience,
    }
}

/// Renders flat rows as CSV with a header line.
pub fn to_csv(rows: &[FlatRow]) -> Result<String, AppError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record([
            "file_name",
            "name",
            "email",
            "phone",
            "skills",
            "education",
            "experience",
        ])
        .context("failed to write csv header")?;

    for row in rows {
        writer
            .write_record([
                &row.file_name,
                &row.name,
                &row.email,
                &row.phone,
                &row.skills,
                &row.education,
                &row.experience,
            ])
            .context("failed to write csv row")?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("failed to flush csv writer: {e}"))?;
    String::from_utf8(bytes)
        .context("csv output was not valid utf-8")
        .map_err(AppError::from)
}

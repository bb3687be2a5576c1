//! CSV export of screening results, one row per result.

use thiserror::Error;

use crate::models::screening::ScreeningResult;

pub const CSV_HEADER: [&str; 5] = [
    "Role",
    "Match Score (%)",
    "Matched Skills",
    "Missing Skills",
    "Final Status",
];

pub const EXPORT_FILE_NAME: &str = "ATS_Result.csv";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to finalize CSV buffer: {0}")]
    Buffer(String),
}

pub fn to_csv(results: &[ScreeningResult]) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;

    for result in results {
        let score = format!("{:.2}", result.match_percentage());
        let matched = result.matched_skills.join(", ");
        let missing = result.missing_skills.join(", ");
        let status = result.verdict_status.to_string();
        writer.write_record([
            result.role.as_str(),
            score.as_str(),
            matched.as_str(),
            missing.as_str(),
            status.as_str(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Buffer(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ExportError::Buffer(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::screening::VerdictStatus;

    fn result() -> ScreeningResult {
        ScreeningResult {
            role: "Python Developer".to_string(),
            similarity_score: 0.4567,
            matched_skills: vec!["python".to_string(), "pandas".to_string()],
            missing_skills: vec!["django".to_string()],
            verdict_status: VerdictStatus::Rejected,
            verdict_text: "REJECTED".to_string(),
        }
    }

    #[test]
    fn test_header_and_row() {
        let csv = to_csv(&[result()]).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some("Role,Match Score (%),Matched Skills,Missing Skills,Final Status")
        );
        assert_eq!(
            lines.next(),
            Some(r#"Python Developer,45.67,"python, pandas",django,Rejected"#)
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_empty_skill_lists_are_empty_fields() {
        let mut r = result();
        r.matched_skills.clear();
        r.missing_skills.clear();
        r.verdict_status = VerdictStatus::Accepted;
        r.similarity_score = 1.0;
        let csv = to_csv(&[r]).unwrap();
        assert!(csv.lines().nth(1).unwrap() == "Python Developer,100.00,,,Accepted");
    }

    #[test]
    fn test_no_results_writes_only_header() {
        let csv = to_csv(&[]).unwrap();
        assert_eq!(csv.lines().count(), 1);
    }
}

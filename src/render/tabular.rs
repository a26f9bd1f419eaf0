//! CSV rendering, one row per record.

use csv::Writer;

use crate::error::{Error, Result};
use crate::model::ResumeRecord;

use super::SourcedRecord;

/// Convert records to CSV with a header row of the nine field names.
pub fn to_csv(records: &[ResumeRecord]) -> Result<String> {
    let mut writer = Writer::from_writer(Vec::new());
    writer.write_record(ResumeRecord::FIELD_NAMES)?;

    for record in records {
        writer.write_record(record.fields().map(|(_, value)| value))?;
    }

    finish(writer)
}

/// Convert records to CSV with a leading `File` column.
pub fn to_csv_with_source(rows: &[SourcedRecord<'_>]) -> Result<String> {
    let mut writer = Writer::from_writer(Vec::new());
    writer.write_record(std::iter::once("File").chain(ResumeRecord::FIELD_NAMES))?;

    for row in rows {
        let values = row.record.fields().map(|(_, value)| value);
        writer.write_record(std::iter::once(row.source).chain(values))?;
    }

    finish(writer)
}

fn finish(writer: Writer<Vec<u8>>) -> Result<String> {
    let bytes = writer
        .into_inner()
        .map_err(|e| Error::Render(format!("CSV flush error: {}", e)))?;
    String::from_utf8(bytes).map_err(|e| Error::Render(format!("CSV output is not UTF-8: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_only_for_empty_input() {
        let csv = to_csv(&[]).unwrap();
        assert_eq!(
            csv,
            "Name,Email,Mobile,Skills,Education,Certifications,Experience,Publications,Awards\n"
        );
    }

    #[test]
    fn test_multiline_fields_are_quoted() {
        let record = ResumeRecord {
            name: "Jane Doe".to_string(),
            education: "10th 88%\nBCA 72%".to_string(),
            skills: "python, sql".to_string(),
            ..Default::default()
        };
        let csv = to_csv(&[record]).unwrap();
        let body = csv.lines().skip(1).collect::<Vec<_>>().join("\n");
        assert_eq!(body, "Jane Doe,,,\"python, sql\",\"10th 88%\nBCA 72%\",,,,");
    }

    #[test]
    fn test_source_column() {
        let record = ResumeRecord {
            name: "Jane Doe".to_string(),
            ..Default::default()
        };
        let csv = to_csv_with_source(&[SourcedRecord::new("cv/jane.txt", &record)]).unwrap();
        let mut lines = csv.lines();
        assert!(lines.next().unwrap().starts_with("File,Name,Email"));
        assert_eq!(lines.next().unwrap(), "cv/jane.txt,Jane Doe,,,,,,,,");
    }
}

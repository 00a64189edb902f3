use std::path::Path;

use thiserror::Error;

use crate::core::record::{DiseaseRecord, DEFAULT_DESCRIPTION, DEFAULT_TREATMENT};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

/// Column layout discovered from the header row
struct TableLayout {
    disease: usize,
    /// Indices of `Symptom_N` columns in header order
    symptoms: Vec<usize>,
    description: Option<usize>,
    treatment: Option<usize>,
}

/// Parse a delimited dataset file with columns
/// `Disease,Symptom_1..Symptom_N,Description,Treatment`.
///
/// The number of symptom columns is discovered from the header, so datasets
/// with more (or fewer) than three slots load without changes.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or
/// `ParseError::InvalidFormat` if the header or rows are malformed.
pub fn parse_table_file(path: &Path, delimiter: char) -> Result<Vec<DiseaseRecord>, ParseError> {
    let content = std::fs::read_to_string(path)?;
    parse_table_text(&content, delimiter)
}

/// Parse delimited dataset text with columns
/// `Disease,Symptom_1..Symptom_N,Description,Treatment`.
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` if the header is missing required
/// columns, a row is shorter than the disease column, or no records are
/// found.
pub fn parse_table_text(text: &str, delimiter: char) -> Result<Vec<DiseaseRecord>, ParseError> {
    let mut records = Vec::new();
    let mut layout: Option<TableLayout> = None;

    for (i, line) in text.lines().enumerate() {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }

        let fields = split_fields(line, delimiter);

        // First non-empty/non-comment line must be the header
        let layout = match layout.as_ref() {
            Some(l) => l,
            None => {
                layout = Some(parse_header(&fields)?);
                continue;
            }
        };

        // Line numbers in errors are 1-based for user friendliness
        let line_num = i + 1;

        if fields.len() <= layout.disease {
            return Err(ParseError::InvalidFormat(format!(
                "Line {line_num} has no value in the Disease column"
            )));
        }

        let name = fields[layout.disease].trim().to_string();
        if name.is_empty() {
            return Err(ParseError::InvalidFormat(format!(
                "Line {line_num} has an empty disease name"
            )));
        }

        let symptoms: Vec<String> = layout
            .symptoms
            .iter()
            .filter_map(|&idx| fields.get(idx))
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let description = column_or_default(&fields, layout.description, DEFAULT_DESCRIPTION);
        let treatment = column_or_default(&fields, layout.treatment, DEFAULT_TREATMENT);

        records.push(DiseaseRecord::new(name, symptoms, description, treatment));
    }

    if records.is_empty() {
        return Err(ParseError::InvalidFormat(
            "No disease records found in file".to_string(),
        ));
    }

    Ok(records)
}

fn parse_header(fields: &[String]) -> Result<TableLayout, ParseError> {
    let mut disease = None;
    let mut symptoms = Vec::new();
    let mut description = None;
    let mut treatment = None;

    for (idx, field) in fields.iter().enumerate() {
        let name = field.trim().to_lowercase();
        if name == "disease" {
            disease = Some(idx);
        } else if name.starts_with("symptom_") || name == "symptom" {
            symptoms.push(idx);
        } else if name == "description" {
            description = Some(idx);
        } else if name == "treatment" {
            treatment = Some(idx);
        }
    }

    let disease = disease.ok_or_else(|| {
        ParseError::InvalidFormat("Header is missing the Disease column".to_string())
    })?;
    if symptoms.is_empty() {
        return Err(ParseError::InvalidFormat(
            "Header has no Symptom_N columns".to_string(),
        ));
    }

    Ok(TableLayout {
        disease,
        symptoms,
        description,
        treatment,
    })
}

fn column_or_default(fields: &[String], idx: Option<usize>, default: &str) -> String {
    idx.and_then(|i| fields.get(i))
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map_or_else(|| default.to_string(), str::to_string)
}

/// Split one line into fields, honoring double-quoted fields so that
/// descriptions containing the delimiter survive. A doubled quote inside a
/// quoted field is an escaped quote.
fn split_fields(line: &str, delimiter: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    field.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
        } else if c == '"' && field.is_empty() {
            in_quotes = true;
        } else if c == delimiter {
            fields.push(std::mem::take(&mut field));
        } else {
            field.push(c);
        }
    }
    fields.push(field);
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_csv() {
        let csv = "Disease,Symptom_1,Symptom_2,Symptom_3,Description,Treatment\n\
                   Influenza,fever,body aches,fatigue,Respiratory illness,Rest and fluids\n\
                   Migraine,headache,nausea,,Severe headache,Pain relievers\n";

        let records = parse_table_text(csv, ',').unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Influenza");
        assert_eq!(records[0].symptoms.len(), 3);
        // Empty third slot dropped
        assert_eq!(records[1].symptoms, vec!["headache", "nausea"]);
    }

    #[test]
    fn test_parse_quoted_fields() {
        let csv = "Disease,Symptom_1,Description,Treatment\n\
                   Gastritis,stomach pain,\"Inflammation, often painful\",\"Diet changes, \"\"bland\"\" food\"\n";

        let records = parse_table_text(csv, ',').unwrap();
        assert_eq!(records[0].description, "Inflammation, often painful");
        assert_eq!(records[0].treatment, "Diet changes, \"bland\" food");
    }

    #[test]
    fn test_parse_extra_symptom_columns() {
        let csv = "Disease,Symptom_1,Symptom_2,Symptom_3,Symptom_4,Symptom_5,Description,Treatment\n\
                   Pneumonia,cough,fever,chills,chest pain,shortness of breath,Lung infection,Antibiotics\n";

        let records = parse_table_text(csv, ',').unwrap();
        assert_eq!(records[0].symptoms.len(), 5);
        assert_eq!(records[0].symptom_terms[4], "shortness of breath");
    }

    #[test]
    fn test_missing_description_gets_default() {
        let csv = "Disease,Symptom_1,Symptom_2\nFlu,fever,cough\n";

        let records = parse_table_text(csv, ',').unwrap();
        assert_eq!(records[0].description, DEFAULT_DESCRIPTION);
        assert_eq!(records[0].treatment, DEFAULT_TREATMENT);
    }

    #[test]
    fn test_tsv_delimiter() {
        let tsv = "Disease\tSymptom_1\tSymptom_2\nFlu\tfever\tcough\n";

        let records = parse_table_text(tsv, '\t').unwrap();
        assert_eq!(records[0].symptom_terms, vec!["fever", "cough"]);
    }

    #[test]
    fn test_missing_disease_column_is_error() {
        let csv = "Name,Symptom_1\nFlu,fever\n";
        assert!(parse_table_text(csv, ',').is_err());
    }

    #[test]
    fn test_empty_file_is_error() {
        let csv = "Disease,Symptom_1,Symptom_2,Symptom_3,Description,Treatment\n";
        assert!(parse_table_text(csv, ',').is_err());
    }

    #[test]
    fn test_comments_and_blank_lines_skipped() {
        let csv = "# disease symptom export\n\nDisease,Symptom_1\nFlu,fever\n";
        let records = parse_table_text(csv, ',').unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_duplicate_names_are_kept() {
        let csv = "Disease,Symptom_1\nFlu,fever\nFlu,cough\n";
        let records = parse_table_text(csv, ',').unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, records[1].name);
    }
}

//! Integration tests for Scour.

use std::fs;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

use scour::{
    CleaningConfig, ParserConfig, Pipeline, Scour, ScourConfig, ScourError, write_audit,
};

const HEADER: &str = "EmpID,Name,Age,Gender,Department,City,Salary,JoiningDate,Email,Phone";

/// Helper to create a temporary file with given content.
fn create_test_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write to temp file");
    file
}

fn messy_input() -> String {
    [
        HEADER,
        "1,  Alice ,30,female,Sales,Paris,50000,03/04/2020,alice@example.com,1234567890",
        "2,Bob,17,MALE,,London,5000,31/02/2020,bad@@x,12345",
        "3,Carol,41,Other,HR,NA,60000,2021-07-15,carol@x.org,0987654321",
        "1,  Alice ,30,female,Sales,Paris,50000,03/04/2020,alice@example.com,1234567890",
    ]
    .join("\n")
        + "\n"
}

fn output_lines(path: &std::path::Path) -> Vec<String> {
    fs::read_to_string(path)
        .expect("Failed to read output")
        .lines()
        .map(str::to_string)
        .collect()
}

// =============================================================================
// End-to-end Cleaning
// =============================================================================

#[test]
fn test_clean_file_end_to_end() {
    let input = create_test_file(&messy_input());
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("cleaned_data.csv");

    let result = Scour::new()
        .clean_file(input.path(), &output)
        .expect("Cleaning failed");

    assert_eq!(
        output_lines(&output),
        vec![
            HEADER,
            "1,Alice,30,F,Sales,Paris,50000,2020-04-03,alice@example.com,1234567890",
            "2,Bob,36,M,Unknown,London,55000,2000-01-01,Unknown,Unknown",
            "3,Carol,41,OTHER,HR,Unknown,60000,2021-07-15,carol@x.org,0987654321",
        ]
    );

    assert_eq!(result.summary.rows_read, 4);
    assert_eq!(result.summary.duplicates_removed, 1);
    assert_eq!(result.summary.rows_written, 3);
    assert!(result.summary.degenerate_columns.is_empty());
    assert!(result.summary.dropped_columns.is_empty());
}

#[test]
fn test_underage_is_replaced_by_rounded_mean() {
    // In-range ages 30 and 41 average to 35.5, which rounds to even.
    let input = create_test_file(&messy_input());
    let result = Scour::new().clean(input.path()).unwrap();

    assert_eq!(result.records[1].age, Some(36));
}

#[test]
fn test_duplicate_rows_keep_first_position() {
    let content = format!(
        "{}\n\
         7,Zed,30,M,Ops,Rome,20000,01/01/2020,z@x.io,1111111111\n\
         8,Amy,31,F,Ops,Rome,21000,01/01/2020,a@x.io,2222222222\n\
         7,Zed,30,M,Ops,Rome,20000,01/01/2020,z@x.io,1111111111\n",
        HEADER
    );
    let input = create_test_file(&content);
    let result = Scour::new().clean(input.path()).unwrap();

    let ids: Vec<_> = result
        .records
        .iter()
        .map(|r| r.emp_id.clone().unwrap_or_default())
        .collect();
    assert_eq!(ids, vec!["7", "8"]);

    let dedup = &result.report.changes[0];
    assert_eq!(dedup.stage, "deduplicate");
    assert_eq!(dedup.rows_removed, 1);
    assert_eq!(dedup.row_audits[0].row, 2);
}

#[test]
fn test_missing_tokens_compare_equal_for_dedup() {
    let content = format!(
        "{}\n\
         1,Ann,30,F,NA,Oslo,20000,01/01/2020,a@x.io,1111111111\n\
         1,Ann,30,F,,Oslo,20000,01/01/2020,a@x.io,1111111111\n",
        HEADER
    );
    let input = create_test_file(&content);
    let result = Scour::new().clean(input.path()).unwrap();

    assert_eq!(result.records.len(), 1);
    assert_eq!(result.records[0].department, "Unknown");
}

#[test]
fn test_phone_and_email_scenarios() {
    let content = format!(
        "{}\n\
         1,Ann,30,F,Ops,Oslo,20000,01/01/2020,bad@@x,12345\n\
         2,Ben,31,M,Ops,Oslo,21000,01/01/2020,a@b.co extra,1234567890\n\
         3,Cat,32,F,Ops,Oslo,22000,01/01/2020,cat.s-m@mail.example.org,123-456-7890\n",
        HEADER
    );
    let input = create_test_file(&content);
    let result = Scour::new().clean(input.path()).unwrap();

    let emails: Vec<_> = result.records.iter().map(|r| r.email.as_str()).collect();
    let phones: Vec<_> = result.records.iter().map(|r| r.phone.as_str()).collect();
    assert_eq!(emails, vec!["Unknown", "Unknown", "cat.s-m@mail.example.org"]);
    assert_eq!(phones, vec!["Unknown", "1234567890", "Unknown"]);
}

#[test]
fn test_all_ages_invalid_leaves_column_empty() {
    let content = format!(
        "{}\n\
         1,Ann,abc,F,Ops,Oslo,20000,01/01/2020,a@x.io,1111111111\n\
         2,Ben,99,M,Ops,Oslo,21000,01/01/2020,b@x.io,2222222222\n",
        HEADER
    );
    let input = create_test_file(&content);
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out.csv");

    let result = Scour::new().clean_file(input.path(), &output).unwrap();

    assert_eq!(result.summary.degenerate_columns, vec!["Age"]);
    assert!(result.records.iter().all(|r| r.age.is_none()));
    assert_eq!(
        output_lines(&output)[1],
        "1,Ann,,F,Ops,Oslo,20000,2020-01-01,a@x.io,1111111111"
    );
}

// =============================================================================
// Column Handling
// =============================================================================

#[test]
fn test_output_column_order_is_fixed() {
    let content = "Notes,Phone,Email,JoiningDate,Salary,City,Department,Gender,Age,Name,EmpID\n\
                   hello,1234567890,e@x.io,2020-05-06,30000,Lima,IT,male,40,Eve,9\n";
    let input = create_test_file(content);
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out.csv");

    let result = Scour::new().clean_file(input.path(), &output).unwrap();

    assert_eq!(
        output_lines(&output),
        vec![HEADER, "9,Eve,40,M,IT,Lima,30000,2020-05-06,e@x.io,1234567890"]
    );
    assert_eq!(result.summary.dropped_columns, vec!["Notes"]);
}

#[test]
fn test_missing_required_column() {
    let content = "EmpID,Name,Age,Gender,Department,City,Salary,JoiningDate,Email\n\
                   1,Ann,30,F,Ops,Oslo,20000,01/01/2020,a@x.io\n";
    let input = create_test_file(content);
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out.csv");

    let err = Scour::new().clean_file(input.path(), &output).unwrap_err();

    match err {
        ScourError::MissingColumn { column } => assert_eq!(column, "Phone"),
        other => panic!("expected missing column, got {:?}", other),
    }
    assert!(!output.exists());
}

#[test]
fn test_header_only_input_writes_header() {
    let input = create_test_file(&format!("{}\n", HEADER));
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out.csv");

    let result = Scour::new().clean_file(input.path(), &output).unwrap();

    assert_eq!(result.summary.rows_written, 0);
    assert_eq!(output_lines(&output), vec![HEADER]);
}

// =============================================================================
// Structural Errors
// =============================================================================

#[test]
fn test_ragged_rows_abort_before_writing() {
    let content = format!(
        "{}\n1,Ann,30,F,Ops,Oslo,20000,01/01/2020,a@x.io,1111111111\n2,Ben,31\n",
        HEADER
    );
    let input = create_test_file(&content);
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out.csv");

    let err = Scour::new().clean_file(input.path(), &output).unwrap_err();

    assert!(matches!(err, ScourError::Format { .. }));
    assert!(!output.exists());
}

#[test]
fn test_missing_input_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = Scour::new()
        .clean(dir.path().join("input_data.csv"))
        .unwrap_err();

    assert!(matches!(err, ScourError::Io { .. }));
}

#[test]
fn test_empty_input_is_format_error() {
    let input = create_test_file("");
    let err = Scour::new().clean(input.path()).unwrap_err();

    assert!(matches!(err, ScourError::Format { .. }));
}

#[test]
fn test_invalid_config_is_rejected() {
    let mut config = ScourConfig::default();
    config.cleaning.age_bounds = scour::Bounds::new(65.0, 18.0);
    let input = create_test_file(&messy_input());

    let err = Scour::with_config(config).clean(input.path()).unwrap_err();

    assert!(matches!(err, ScourError::Config(_)));
}

#[test]
fn test_skipped_stage_surfaces_as_uncleaned() {
    let config = CleaningConfig::default();
    let pipeline = Pipeline::new()
        .with_stage(scour::clean::AgeNormalizer::new(config.age_bounds))
        .with_stage(scour::clean::SalaryNormalizer::new(config.salary_bounds))
        .with_stage(scour::clean::TextNormalizer::new(config.unknown.clone()));
    let input = create_test_file(&messy_input());

    let err = Scour::new()
        .with_pipeline(pipeline)
        .clean(input.path())
        .unwrap_err();

    assert!(matches!(err, ScourError::Uncleaned { .. }));
}

// =============================================================================
// Output Files
// =============================================================================

#[test]
fn test_output_is_overwritten() {
    let input = create_test_file(&messy_input());
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("cleaned_data.csv");
    fs::write(&output, "stale,content\n".repeat(50)).unwrap();

    Scour::new().clean_file(input.path(), &output).unwrap();

    let lines = output_lines(&output);
    assert_eq!(lines.len(), 4);
    assert!(lines.iter().all(|l| !l.contains("stale")));
}

#[test]
fn test_cleaning_own_output_is_a_fixed_point() {
    let input = create_test_file(&messy_input());
    let dir = TempDir::new().unwrap();
    let first = dir.path().join("first.csv");
    let second = dir.path().join("second.csv");

    let scour = Scour::new();
    scour.clean_file(input.path(), &first).unwrap();
    let rerun = scour.clean_file(&first, &second).unwrap();

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
    assert_eq!(rerun.summary.values_changed, 0);
    assert_eq!(rerun.summary.duplicates_removed, 0);
}

#[test]
fn test_audit_report_lists_changes() {
    let input = create_test_file(&messy_input());
    let dir = TempDir::new().unwrap();
    let audit = dir.path().join("audit.json");

    let result = Scour::new().clean(input.path()).unwrap();
    write_audit(&audit, &result).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&audit).unwrap()).unwrap();
    assert_eq!(json["summary"]["duplicates_removed"], 1);
    assert_eq!(json["summary"]["values_changed_by_column"]["Email"], 1);
    assert_eq!(json["report"]["changes"].as_array().unwrap().len(), 8);
    assert!(json["source"]["hash"].as_str().unwrap().starts_with("sha256:"));
}

#[test]
fn test_semicolon_input_with_auto_detection() {
    let content = messy_input().replace(',', ";");
    let input = create_test_file(&content);
    let config = ScourConfig {
        parser: ParserConfig {
            delimiter: None,
            ..ParserConfig::default()
        },
        ..ScourConfig::default()
    };

    let result = Scour::with_config(config).clean(input.path()).unwrap();

    assert_eq!(result.source.format, "csv-semicolon");
    assert_eq!(result.records.len(), 3);
}

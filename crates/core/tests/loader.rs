use std::io::Cursor;

use orgchart_core::loader::{load_employees, parse_employees, parse_line, LoadError};
use tempfile::tempdir;

const SAMPLE: &str = "\
Id,firstName,lastName,salary,managerId
123,Joe,Doe,60000,
124,Martin,Chekov,45000,123
125, Bob , Ronstad , 47000 , 123
300,Alice,Hasacat,50000,124
";

#[test]
fn parses_records_and_skips_header() {
    let employees = parse_employees(Cursor::new(SAMPLE)).expect("parse");

    assert_eq!(employees.len(), 4);
    assert_eq!(employees[0].id, "123");
    assert_eq!(employees[0].manager_id, None);
    assert_eq!(employees[1].manager_id.as_deref(), Some("123"));
    assert_eq!(employees[3].salary, 50_000);
}

#[test]
fn trims_fields() {
    let employees = parse_employees(Cursor::new(SAMPLE)).expect("parse");
    let bob = &employees[2];
    assert_eq!(bob.first_name, "Bob");
    assert_eq!(bob.last_name, "Ronstad");
    assert_eq!(bob.salary, 47_000);
    assert_eq!(bob.manager_id.as_deref(), Some("123"));
}

#[test]
fn missing_manager_column_means_root() {
    let employee = parse_line("1,Ada,Lovelace,100", 2).expect("parse");
    assert!(employee.is_root());
}

#[test]
fn blank_lines_are_ignored() {
    let input = "Id,firstName,lastName,salary,managerId\n\n1,A,B,10,\n   \n2,C,D,5,1\n";
    let employees = parse_employees(Cursor::new(input)).expect("parse");
    assert_eq!(employees.len(), 2);
}

#[test]
fn header_only_yields_no_records() {
    let employees = parse_employees(Cursor::new("Id,firstName,lastName,salary,managerId\n"))
        .expect("parse");
    assert!(employees.is_empty());
}

#[test]
fn empty_input_is_rejected() {
    assert!(matches!(parse_employees(Cursor::new("")), Err(LoadError::EmptyInput)));
}

#[test]
fn invalid_salary_reports_line_number() {
    let input = "header\n1,A,B,10,\n2,C,D,lots,1\n";
    let err = parse_employees(Cursor::new(input)).unwrap_err();
    match err {
        LoadError::InvalidSalary { line, value } => {
            assert_eq!(line, 3);
            assert_eq!(value, "lots");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn negative_salary_is_rejected() {
    assert!(matches!(parse_line("1,A,B,-5,", 2), Err(LoadError::InvalidSalary { .. })));
}

#[test]
fn missing_columns_are_rejected() {
    let err = parse_line("1,A,B", 7).unwrap_err();
    assert!(matches!(err, LoadError::MissingField { line: 7, field: "salary" }));
    assert!(err.to_string().contains("Line 7"));

    let err = parse_line(" ,A,B,10,", 2).unwrap_err();
    assert!(matches!(err, LoadError::MissingField { field: "id", .. }));
}

#[test]
fn loads_from_file() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("employees.csv");
    std::fs::write(&path, SAMPLE).expect("write csv");

    let employees = load_employees(&path).expect("load");
    assert_eq!(employees.len(), 4);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempdir().expect("tempdir");
    let err = load_employees(dir.path().join("nope.csv")).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
    assert!(err.to_string().contains("nope.csv"));
}

//! Record source for comma-separated employee files.
//!
//! Expected layout:
//!
//! ```text
//! Id,firstName,lastName,salary,managerId
//! 123,Joe,Doe,60000,
//! 124,Martin,Chekov,45000,123
//! ```
//!
//! The first line is a header and is skipped. Fields are trimmed; an empty or
//! missing fifth column means the employee has no manager. Blank lines are
//! ignored. Quoting is not supported.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::model::Employee;

const REQUIRED_FIELDS: [&str; 4] = ["id", "firstName", "lastName", "salary"];

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read employee records from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Line {line}: missing required field '{field}'")]
    MissingField { line: usize, field: &'static str },
    #[error("Line {line}: invalid salary '{value}' (expected a non-negative integer)")]
    InvalidSalary { line: usize, value: String },
    #[error("Employee input is empty (expected a header line)")]
    EmptyInput,
}

/// Convenience result type for record loading.
pub type LoadResult<T> = Result<T, LoadError>;

/// Open `path` and parse every employee record in it.
pub fn load_employees(path: impl AsRef<Path>) -> LoadResult<Vec<Employee>> {
    let path = path.as_ref();
    let file =
        File::open(path).map_err(|source| LoadError::Io { path: path.to_path_buf(), source })?;
    let employees = read_records(BufReader::new(file), path)?;
    debug!(path = %path.display(), count = employees.len(), "loaded employee records");
    Ok(employees)
}

/// Parse employee records from any buffered reader.
pub fn parse_employees(reader: impl BufRead) -> LoadResult<Vec<Employee>> {
    read_records(reader, Path::new("<input>"))
}

fn read_records(reader: impl BufRead, origin: &Path) -> LoadResult<Vec<Employee>> {
    let mut lines = reader.lines();

    match lines.next() {
        Some(header) => {
            header.map_err(|source| LoadError::Io { path: origin.to_path_buf(), source })?;
        }
        None => return Err(LoadError::EmptyInput),
    }

    let mut employees = Vec::new();
    // The header is line 1.
    for (index, line) in lines.enumerate() {
        let line = line.map_err(|source| LoadError::Io { path: origin.to_path_buf(), source })?;
        if line.trim().is_empty() {
            continue;
        }
        employees.push(parse_line(&line, index + 2)?);
    }

    Ok(employees)
}

/// Parse a single data line; `line_no` is 1-based and only used for errors.
pub fn parse_line(line: &str, line_no: usize) -> LoadResult<Employee> {
    let parts: Vec<&str> = line.split(',').map(str::trim).collect();

    for (index, field) in REQUIRED_FIELDS.into_iter().enumerate() {
        if parts.len() <= index {
            return Err(LoadError::MissingField { line: line_no, field });
        }
    }
    if parts[0].is_empty() {
        return Err(LoadError::MissingField { line: line_no, field: REQUIRED_FIELDS[0] });
    }

    let salary = parts[3]
        .parse::<u64>()
        .map_err(|_| LoadError::InvalidSalary { line: line_no, value: parts[3].to_string() })?;

    let manager_id = parts.get(4).filter(|m| !m.is_empty()).map(|m| m.to_string());

    Ok(Employee {
        id: parts[0].to_string(),
        first_name: parts[1].to_string(),
        last_name: parts[2].to_string(),
        salary,
        manager_id,
    })
}

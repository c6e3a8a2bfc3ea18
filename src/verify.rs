use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use super::bitvec::BitVector;
use super::config::Config;
use super::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationKind {
    WrongLength { expected: usize, found: usize },
    InvalidCharacter { column: usize, found: char },
    TooManyBits { max: usize, found: usize },
    IndexOutsideRange(usize),
    WrongLineCount { expected: usize, found: usize },
}

/// `line` is 1-based; 0 refers to the file as a whole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub line: usize,
    pub kind: ViolationKind,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.kind {
            ViolationKind::WrongLength { expected, found } => {
                write!(f, "line {}: length {}, expected {}", self.line, found, expected)
            }
            ViolationKind::InvalidCharacter { column, found } => {
                write!(f, "line {}: invalid character {:?} at column {}", self.line, found, column)
            }
            ViolationKind::TooManyBits { max, found } => {
                write!(f, "line {}: {} bits set, at most {} allowed", self.line, found, max)
            }
            ViolationKind::IndexOutsideRange(index) => {
                write!(f, "line {}: bit {} set outside the allowed range", self.line, index)
            }
            ViolationKind::WrongLineCount { expected, found } => {
                write!(f, "{} lines, expected {}", found, expected)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineInfo {
    pub weight: usize,
    pub indices: Vec<usize>,
}

#[derive(Debug, Clone, Default)]
pub struct Report {
    pub lines: Vec<LineInfo>,
    pub violations: Vec<Violation>,
}

impl Report {
    pub fn is_ok(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Reads a vector file and checks every line against `config`. Problems in
/// the content are collected in the report; only I/O errors are returned.
/// Lines are taken as raw bytes split on `\n`, so a stray non-ASCII byte or
/// a `\r` before the terminator is reported as an invalid character. Lines
/// with invalid characters get an empty `LineInfo`.
pub fn check<R: BufRead>(mut reader: R, config: &Config) -> Result<Report> {
    let mut report = Report::default();
    let mut buf: Vec<u8> = Vec::new();
    let mut line_no = 0;
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
        }
        line_no += 1;
        let mut violation = |kind: ViolationKind| {
            report.violations.push(Violation { line: line_no, kind });
        };

        if buf.len() != config.vector_len {
            violation(ViolationKind::WrongLength { expected: config.vector_len, found: buf.len() });
        }

        let vector = match BitVector::parse_bytes(&buf) {
            Ok(vector) => vector,
            Err(Error::InvalidCharacter { column, found }) => {
                violation(ViolationKind::InvalidCharacter { column, found });
                report.lines.push(LineInfo { weight: 0, indices: Vec::new() });
                continue;
            }
            Err(e) => return Err(e),
        };

        let indices = vector.set_indices();
        if indices.len() > config.max_set_bits {
            violation(ViolationKind::TooManyBits { max: config.max_set_bits, found: indices.len() });
        }
        for index in indices.iter() {
            if *index < config.first_index || *index > config.last_index {
                violation(ViolationKind::IndexOutsideRange(*index));
            }
        }
        report.lines.push(LineInfo { weight: indices.len(), indices });
    }

    if report.lines.len() != config.line_count {
        report.violations.push(Violation {
            line: 0,
            kind: ViolationKind::WrongLineCount { expected: config.line_count, found: report.lines.len() },
        });
    }
    Ok(report)
}

pub fn check_file<P: AsRef<Path>>(path: P, config: &Config) -> Result<Report> {
    let file = File::open(path)?;
    check(BufReader::new(file), config)
}

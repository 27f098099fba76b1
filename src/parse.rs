//! Line-oriented process input.
//!
//! One process per line in `PID,Arrival,Burst` form:
//!
//! ```text
//! 1,0,5
//! 2,1,3
//! 3,2,8
//! ```
//!
//! Fields are trimmed; blank lines are skipped. Range checks (positive
//! pid and burst, non-negative arrival) belong to [`crate::validation`].

use std::fmt;

use crate::models::Process;

/// A malformed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// 1-based line number.
    pub line: usize,
    /// What went wrong.
    pub message: String,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

impl std::error::Error for ParseError {}

/// Parses every non-blank line of `input` into a process.
pub fn parse_processes(input: &str) -> Result<Vec<Process>, ParseError> {
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| parse_line(line, i + 1))
        .collect()
}

fn parse_line(line: &str, line_no: usize) -> Result<Process, ParseError> {
    let parts: Vec<&str> = line.split(',').map(str::trim).collect();
    let [pid, arrival, burst] = parts.as_slice() else {
        return Err(ParseError {
            line: line_no,
            message: format!(
                "expected PID,Arrival,Burst but found {} field(s)",
                parts.len()
            ),
        });
    };

    let field = |name: &str, raw: &str| -> Result<i64, ParseError> {
        raw.parse::<i64>().map_err(|_| ParseError {
            line: line_no,
            message: format!("{name} '{raw}' is not an integer"),
        })
    };

    let pid = pid.parse::<u32>().map_err(|_| ParseError {
        line: line_no,
        message: format!("PID '{pid}' is not an unsigned integer"),
    })?;
    Ok(Process::new(
        pid,
        field("arrival", *arrival)?,
        field("burst", *burst)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let ps = parse_processes("1,0,5\n2, 1, 3\n\n3,2,8\n").unwrap();
        assert_eq!(
            ps,
            vec![
                Process::new(1, 0, 5),
                Process::new(2, 1, 3),
                Process::new(3, 2, 8),
            ]
        );
    }

    #[test]
    fn test_parse_wrong_field_count() {
        let err = parse_processes("1,0,5\n2,1").unwrap_err();
        assert_eq!(err.line, 2);
        assert!(err.message.contains("2 field(s)"));
    }

    #[test]
    fn test_parse_non_integer() {
        let err = parse_processes("1,zero,5").unwrap_err();
        assert_eq!(err.to_string(), "line 1: arrival 'zero' is not an integer");

        let err = parse_processes("P1,0,5").unwrap_err();
        assert!(err.message.starts_with("PID"));
    }

    #[test]
    fn test_parse_keeps_out_of_range_values() {
        // Range checks happen in validation, not here.
        let ps = parse_processes("4,-1,0\n0,2,3").unwrap();
        assert_eq!(ps, vec![Process::new(4, -1, 0), Process::new(0, 2, 3)]);
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse_processes("  \n").unwrap().is_empty());
    }
}

//! Line-oriented input helpers for the menu session.
//!
//! Each reader prompts, reads one line, and re-prompts indefinitely on
//! malformed input. `Ok(None)` means the input source is exhausted; callers
//! treat that as the end of the session.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use chrono::NaiveDate;

/// The accepted date format.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Prompts once and reads one line, without its trailing newline.
pub fn read_line<R, W>(input: &mut R, output: &mut W, prompt: &str) -> io::Result<Option<String>>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(Some(line))
}

/// Prompts until the user enters a parseable integer.
pub fn read_integer<T, R, W>(input: &mut R, output: &mut W, prompt: &str) -> io::Result<Option<T>>
where
    T: FromStr,
    R: BufRead,
    W: Write,
{
    loop {
        let Some(line) = read_line(input, output, prompt)? else {
            return Ok(None);
        };
        match line.trim().parse() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => writeln!(output, "Invalid input, please enter a number.")?,
        }
    }
}

/// Prompts until the user enters a date in `YYYY-MM-DD` form.
pub fn read_date<R, W>(input: &mut R, output: &mut W, prompt: &str) -> io::Result<Option<NaiveDate>>
where
    R: BufRead,
    W: Write,
{
    loop {
        let Some(line) = read_line(input, output, prompt)? else {
            return Ok(None);
        };
        match NaiveDate::parse_from_str(line.trim(), DATE_FORMAT) {
            Ok(date) => return Ok(Some(date)),
            Err(_) => writeln!(
                output,
                "Invalid date format, please enter in YYYY-MM-DD format."
            )?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_read_line(data: &str, prompt: &str) -> (Option<String>, String) {
        let mut input = Cursor::new(data.as_bytes().to_vec());
        let mut output = Vec::new();
        let result = read_line(&mut input, &mut output, prompt).unwrap();
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_read_line_returns_line_without_newline() {
        let (line, output) = run_read_line("Alice Smith\n", "Name: ");
        assert_eq!(line, Some("Alice Smith".to_string()));
        assert_eq!(output, "Name: ");
    }

    #[test]
    fn test_read_line_preserves_inner_whitespace() {
        let (line, _) = run_read_line("  spaced out  \n", "Name: ");
        assert_eq!(line, Some("  spaced out  ".to_string()));
    }

    #[test]
    fn test_read_line_handles_crlf() {
        let (line, _) = run_read_line("Alice\r\n", "Name: ");
        assert_eq!(line, Some("Alice".to_string()));
    }

    #[test]
    fn test_read_line_eof() {
        let (line, _) = run_read_line("", "Name: ");
        assert_eq!(line, None);
    }

    #[test]
    fn test_read_integer_reprompts_until_valid() {
        let mut input = Cursor::new(b"abc\n\n42\n".to_vec());
        let mut output = Vec::new();
        let value: Option<i64> = read_integer(&mut input, &mut output, "ID: ").unwrap();

        assert_eq!(value, Some(42));
        let printed = String::from_utf8(output).unwrap();
        assert_eq!(printed.matches("Invalid input").count(), 2);
        assert_eq!(printed.matches("ID: ").count(), 3);
    }

    #[test]
    fn test_read_integer_accepts_negative() {
        let mut input = Cursor::new(b"-5\n".to_vec());
        let mut output = Vec::new();
        let value: Option<i64> = read_integer(&mut input, &mut output, "Guests: ").unwrap();
        assert_eq!(value, Some(-5));
    }

    #[test]
    fn test_read_integer_eof_mid_reprompt() {
        let mut input = Cursor::new(b"abc\n".to_vec());
        let mut output = Vec::new();
        let value: Option<i64> = read_integer(&mut input, &mut output, "ID: ").unwrap();
        assert_eq!(value, None);
    }

    #[test]
    fn test_read_date_reprompts_until_valid() {
        let mut input = Cursor::new(b"not-a-date\n2024-13-01\n2024-03-01\n".to_vec());
        let mut output = Vec::new();
        let date = read_date(&mut input, &mut output, "Date: ").unwrap();

        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 1));
        let printed = String::from_utf8(output).unwrap();
        assert_eq!(printed.matches("Invalid date format").count(), 2);
    }

    #[test]
    fn test_read_date_rejects_trailing_garbage() {
        let mut input = Cursor::new(b"2024-03-01x\n2024-03-01\n".to_vec());
        let mut output = Vec::new();
        let date = read_date(&mut input, &mut output, "Date: ").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 1));
    }
}

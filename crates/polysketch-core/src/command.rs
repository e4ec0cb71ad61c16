//! Explicit commands issued from the control panel, and parsing of their text fields.

use crate::tools::CanvasMode;
use thiserror::Error;

/// A model mutation that does not come from pointer gestures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Translate the selected polygon and the selected control point.
    Move { dx: f64, dy: f64 },
    /// Rotate the selected polygon about the anchor.
    Rotate { degrees: f64 },
    /// Scale the selected polygon about the anchor.
    Scale { sx: f64, sy: f64 },
    /// Stop extending the in-progress polygon.
    FinishPolygon,
    /// Add a vertex as if clicked in polygon creation mode.
    AddVertex { x: f64, y: f64 },
    SetMode(CanvasMode),
    /// Remove everything.
    Clear,
}

/// Errors from parsing command text fields.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CommandError {
    #[error("{0} is empty")]
    Empty(&'static str),
    #[error("{field}: '{value}' is not a number")]
    InvalidNumber { field: &'static str, value: String },
    #[error("{field}: expected {expected} values, found {found}")]
    WrongArity {
        field: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("{field} must be finite")]
    NonFinite { field: &'static str },
}

fn parse_number(field: &'static str, text: &str) -> Result<f64, CommandError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(CommandError::Empty(field));
    }
    let value: f64 = text.parse().map_err(|_| CommandError::InvalidNumber {
        field,
        value: text.to_string(),
    })?;
    if !value.is_finite() {
        return Err(CommandError::NonFinite { field });
    }
    Ok(value)
}

/// Parse a whitespace separated pair, e.g. `"1.5 2"`.
fn parse_pair(field: &'static str, text: &str) -> Result<(f64, f64), CommandError> {
    let parts: Vec<&str> = text.split_whitespace().collect();
    match parts.as_slice() {
        [] => Err(CommandError::Empty(field)),
        [a, b] => Ok((parse_number(field, a)?, parse_number(field, b)?)),
        _ => Err(CommandError::WrongArity {
            field,
            expected: 2,
            found: parts.len(),
        }),
    }
}

/// Parse the x / y fields into a move.
pub fn parse_move(x: &str, y: &str) -> Result<Command, CommandError> {
    Ok(Command::Move {
        dx: parse_number("x", x)?,
        dy: parse_number("y", y)?,
    })
}

/// Parse the angle field (degrees).
pub fn parse_rotate(angle: &str) -> Result<Command, CommandError> {
    Ok(Command::Rotate {
        degrees: parse_number("angle", angle)?,
    })
}

/// Parse the scale field, `"sx sy"`.
pub fn parse_scale(text: &str) -> Result<Command, CommandError> {
    let (sx, sy) = parse_pair("scale", text)?;
    Ok(Command::Scale { sx, sy })
}

/// Parse the point field, `"x y"`, into a vertex addition.
pub fn parse_point(text: &str) -> Result<Command, CommandError> {
    let (x, y) = parse_pair("point", text)?;
    Ok(Command::AddVertex { x, y })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_move() {
        assert_eq!(parse_move("10", " -2.5 "), Ok(Command::Move { dx: 10.0, dy: -2.5 }));
        assert_eq!(parse_move("", "1"), Err(CommandError::Empty("x")));
        assert_eq!(
            parse_move("1", "abc"),
            Err(CommandError::InvalidNumber {
                field: "y",
                value: "abc".to_string()
            })
        );
    }

    #[test]
    fn test_parse_rotate() {
        assert_eq!(parse_rotate("90"), Ok(Command::Rotate { degrees: 90.0 }));
        assert_eq!(
            parse_rotate("inf"),
            Err(CommandError::NonFinite { field: "angle" })
        );
        assert_eq!(
            parse_rotate("NaN"),
            Err(CommandError::NonFinite { field: "angle" })
        );
    }

    #[test]
    fn test_parse_scale() {
        assert_eq!(parse_scale("2 0.5"), Ok(Command::Scale { sx: 2.0, sy: 0.5 }));
        assert_eq!(parse_scale("  2\t3  "), Ok(Command::Scale { sx: 2.0, sy: 3.0 }));
        assert_eq!(
            parse_scale("2"),
            Err(CommandError::WrongArity {
                field: "scale",
                expected: 2,
                found: 1
            })
        );
        assert_eq!(
            parse_scale("1 2 3"),
            Err(CommandError::WrongArity {
                field: "scale",
                expected: 2,
                found: 3
            })
        );
        assert_eq!(parse_scale("   "), Err(CommandError::Empty("scale")));
    }

    #[test]
    fn test_parse_point() {
        assert_eq!(parse_point("100 200"), Ok(Command::AddVertex { x: 100.0, y: 200.0 }));
        assert!(matches!(
            parse_point("100 y"),
            Err(CommandError::InvalidNumber { field: "point", .. })
        ));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(CommandError::Empty("x").to_string(), "x is empty");
        assert_eq!(
            CommandError::WrongArity {
                field: "scale",
                expected: 2,
                found: 1
            }
            .to_string(),
            "scale: expected 2 values, found 1"
        );
    }
}

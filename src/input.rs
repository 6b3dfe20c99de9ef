//! Plain-text point lists for the `freehand-fit` binary.
//!
//! Only built with the `cli` feature.
//!
//! One point per line, `x y` or `x,y`. Blank lines separate strokes and
//! `#` starts a comment that runs to the end of the line.

use std::io::Read;
use std::path::Path;

use kurbo::Point;

use crate::error::FitError;

/// Parse every stroke in `text`. Empty strokes are dropped.
pub fn parse_strokes(text: &str) -> Result<Vec<Vec<Point>>, FitError> {
    let mut strokes = Vec::new();
    let mut current: Vec<Point> = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            // Comment-only lines do not end a stroke.
            if raw.trim().is_empty() && !current.is_empty() {
                strokes.push(std::mem::take(&mut current));
            }
            continue;
        }
        current.push(parse_point(line, idx + 1)?);
    }
    if !current.is_empty() {
        strokes.push(current);
    }
    Ok(strokes)
}

/// Read and parse a point file. `-` reads standard input.
pub fn read_strokes(path: &Path) -> Result<Vec<Vec<Point>>, FitError> {
    let text = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path)?
    };
    parse_strokes(&text)
}

fn parse_point(line: &str, line_no: usize) -> Result<Point, FitError> {
    let fields: Vec<&str> = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .collect();
    if fields.len() != 2 {
        return Err(FitError::Parse {
            line: line_no,
            message: format!("expected 2 coordinates, found {}", fields.len()),
        });
    }

    let coord = |s: &str| -> Result<f64, FitError> {
        match s.parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(v),
            Ok(_) => Err(FitError::Parse {
                line: line_no,
                message: format!("coordinate '{s}' is not finite"),
            }),
            Err(e) => Err(FitError::Parse {
                line: line_no,
                message: format!("invalid coordinate '{s}': {e}"),
            }),
        }
    };
    Ok(Point::new(coord(fields[0])?, coord(fields[1])?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_separators() {
        let strokes = parse_strokes("0 0\n1.5,2\n  3 , -4  \n").unwrap();
        assert_eq!(strokes.len(), 1);
        assert_eq!(
            strokes[0],
            vec![Point::new(0.0, 0.0), Point::new(1.5, 2.0), Point::new(3.0, -4.0)]
        );
    }

    #[test]
    fn blank_lines_split_strokes() {
        let text = "# stroke one\n0 0\n1 1\n\n\n2 2 # trailing\n# still stroke two\n3 3\n";
        let strokes = parse_strokes(text).unwrap();
        assert_eq!(strokes.len(), 2);
        assert_eq!(strokes[0].len(), 2);
        assert_eq!(strokes[1], vec![Point::new(2.0, 2.0), Point::new(3.0, 3.0)]);
    }

    #[test]
    fn reports_line_of_bad_input() {
        let err = parse_strokes("0 0\n1 2 3\n").unwrap_err();
        assert!(matches!(err, FitError::Parse { line: 2, .. }));

        let err = parse_strokes("0 0\n\nx 1\n").unwrap_err();
        assert!(matches!(err, FitError::Parse { line: 3, .. }));

        let err = parse_strokes("inf 0\n").unwrap_err();
        assert!(matches!(err, FitError::Parse { line: 1, .. }));
    }

    #[test]
    fn empty_text_has_no_strokes() {
        assert!(parse_strokes("").unwrap().is_empty());
        assert!(parse_strokes("\n# nothing\n\n").unwrap().is_empty());
    }
}

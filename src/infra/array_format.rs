// ============================================================
// Layer 6: Array Formatter
// ============================================================
// Renders arrays as bracketed, comma-separated text.
//
// Layout rules:
//   - values appear in row-major order, separated by ','
//   - a 2D array nests one '[...]' per row, rows separated by
//     ",\n " so each row starts on its own line
//   - floats use the shortest text that parses back to the same
//     value; whole numbers keep the point ("3.")
//   - float columns line up on the decimal point: integer parts
//     are right-aligned, fractional parts left-aligned
//   - integers are right-aligned to the widest value
//   - a line that would pass `max_line_width` wraps, and the
//     continuation is indented one column past its '['
//
// Example (3 × 4 matrix):
//   [[5.1,3.5,1.4,0.2],
//    [4.9,3. ,1.4,0.2],
//    [7. ,3.2,4.7,1.4]]

use crate::domain::dataset::{FeatureMatrix, LabelVector};
use crate::domain::traits::ArrayText;

/// Default wrap width, matching numpy's printer
pub const DEFAULT_MAX_LINE_WIDTH: usize = 80;

impl ArrayText for FeatureMatrix {
    fn array_text(&self, max_line_width: usize) -> String {
        if self.is_empty() {
            return "[]".to_string();
        }

        let cells = FloatCells::new(self.rows().flatten().copied());
        let rows: Vec<String> = self
            .rows()
            .enumerate()
            .map(|(i, row)| {
                let words: Vec<String> = row.iter().map(|&v| cells.render(v)).collect();
                // The last row is followed by two closing brackets
                let closing = if i + 1 == self.num_rows() { 2 } else { 1 };
                wrap_sequence(&words, 1, closing, max_line_width)
            })
            .collect();

        format!("[{}]", rows.join(",\n "))
    }
}

impl ArrayText for LabelVector {
    fn array_text(&self, max_line_width: usize) -> String {
        if self.is_empty() {
            return "[]".to_string();
        }

        let width = self
            .as_slice()
            .iter()
            .map(|id| id.to_string().len())
            .max()
            .unwrap_or(1);

        let words: Vec<String> = self
            .as_slice()
            .iter()
            .map(|id| format!("{id:>width$}"))
            .collect();

        wrap_sequence(&words, 0, 1, max_line_width)
    }
}

// ─── Float Column Layout ─────────────────────────────────────────────────────
/// Shared padding for every float in one array, so that the
/// decimal points line up across rows.
struct FloatCells {
    /// Widest integer part, including any '-' sign
    int_width: usize,
    /// Widest fractional part (digits after the point)
    frac_width: usize,
    /// Full cell width, also used to right-align nan/inf
    total_width: usize,
}

impl FloatCells {
    fn new(values: impl Iterator<Item = f64>) -> Self {
        let mut int_width = 0;
        let mut frac_width = 0;
        let mut special_width = 0;

        for v in values {
            if v.is_finite() {
                let (int_part, frac_part) = split_float(v);
                int_width = int_width.max(int_part.len());
                frac_width = frac_width.max(frac_part.len());
            } else {
                special_width = special_width.max(non_finite(v).len());
            }
        }

        let positional = if int_width == 0 { 0 } else { int_width + 1 + frac_width };
        let total_width = positional.max(special_width);
        // Widen the integer column if nan/inf is the widest cell
        let int_width = total_width.saturating_sub(1 + frac_width);

        Self {
            int_width,
            frac_width,
            total_width,
        }
    }

    fn render(&self, v: f64) -> String {
        if !v.is_finite() {
            return format!("{:>w$}", non_finite(v), w = self.total_width);
        }

        let (int_part, frac_part) = split_float(v);
        format!(
            "{:>iw$}.{:<fw$}",
            int_part,
            frac_part,
            iw = self.int_width,
            fw = self.frac_width
        )
    }
}

/// Shortest round-trip text of `v`, split at the decimal point.
/// `3.0` → ("3", ""), `-0.25` → ("-0", "25").
fn split_float(v: f64) -> (String, String) {
    let text = v.to_string();
    match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part.to_string(), frac_part.to_string()),
        None => (text, String::new()),
    }
}

fn non_finite(v: f64) -> &'static str {
    if v.is_nan() {
        "nan"
    } else if v > 0.0 {
        "inf"
    } else {
        "-inf"
    }
}

// ─── Line Wrapping ───────────────────────────────────────────────────────────
/// Join `words` into `[w1,w2,...]`, wrapping before a word that
/// would push the line past `max_line_width`.
///
/// * `start_col` - column at which the opening '[' sits
/// * `closing`   - number of ']' that will follow the last word
fn wrap_sequence(words: &[String], start_col: usize, closing: usize, max_line_width: usize) -> String {
    let hanging = " ".repeat(start_col + 1);
    let mut out = String::from("[");
    let mut line_len = start_col + 1;
    let mut words_on_line = 0usize;

    for (i, word) in words.iter().enumerate() {
        let is_last = i + 1 == words.len();
        let piece_len = if is_last { word.len() } else { word.len() + 1 };
        let limit = if is_last {
            max_line_width.saturating_sub(closing)
        } else {
            max_line_width
        };

        if words_on_line > 0 && line_len + piece_len > limit {
            out.push('\n');
            out.push_str(&hanging);
            line_len = hanging.len();
            words_on_line = 0;
        }

        out.push_str(word);
        if !is_last {
            out.push(',');
        }
        line_len += piece_len;
        words_on_line += 1;
    }

    out.push(']');
    out
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(num_features: usize, rows: &[&[f64]]) -> FeatureMatrix {
        let mut m = FeatureMatrix::new(num_features);
        for row in rows {
            m.push_row(row);
        }
        m
    }

    #[test]
    fn test_iris_matrix_layout() {
        let m = matrix(
            4,
            &[
                &[5.1, 3.5, 1.4, 0.2],
                &[4.9, 3.0, 1.4, 0.2],
                &[7.0, 3.2, 4.7, 1.4],
            ],
        );
        assert_eq!(
            m.array_text(DEFAULT_MAX_LINE_WIDTH),
            "[[5.1,3.5,1.4,0.2],\n [4.9,3. ,1.4,0.2],\n [7. ,3.2,4.7,1.4]]"
        );
    }

    #[test]
    fn test_label_vector_layout() {
        let v = LabelVector::from(vec![0, 0, 1]);
        assert_eq!(v.array_text(DEFAULT_MAX_LINE_WIDTH), "[0,0,1]");
    }

    #[test]
    fn test_integers_right_aligned() {
        let v = LabelVector::from(vec![1, 10, 100]);
        assert_eq!(v.array_text(DEFAULT_MAX_LINE_WIDTH), "[  1, 10,100]");
    }

    #[test]
    fn test_negative_floats_align_on_point() {
        let m = matrix(2, &[&[-1.5, 2.25]]);
        assert_eq!(m.array_text(DEFAULT_MAX_LINE_WIDTH), "[[-1.5 , 2.25]]");
    }

    #[test]
    fn test_non_finite_values() {
        let m = matrix(3, &[&[f64::NAN, f64::INFINITY, 1.0]]);
        assert_eq!(m.array_text(DEFAULT_MAX_LINE_WIDTH), "[[nan,inf, 1.]]");
    }

    #[test]
    fn test_long_vector_wraps_within_width() {
        let v = LabelVector::from(vec![0usize; 150]);
        let text = v.array_text(80);
        assert!(text.lines().count() > 1);
        assert!(text.lines().all(|l| l.len() <= 80));
        assert!(text.lines().skip(1).all(|l| l.starts_with(' ')));
        assert_eq!(text.matches('0').count(), 150);
        assert!(text.starts_with('[') && text.ends_with(']'));
    }

    #[test]
    fn test_wide_row_wraps_with_hanging_indent() {
        let row: Vec<f64> = (0..30).map(|i| i as f64 + 0.5).collect();
        let m = matrix(30, &[&row]);
        let text = m.array_text(40);
        assert!(text.lines().all(|l| l.len() <= 40));
        assert!(text.lines().skip(1).all(|l| l.starts_with("  ")));
        assert!(text.ends_with("]]"));
    }

    #[test]
    fn test_empty_arrays() {
        assert_eq!(FeatureMatrix::new(4).array_text(80), "[]");
        assert_eq!(LabelVector::new().array_text(80), "[]");
    }
}

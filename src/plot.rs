//! Text formatters that stream segments to any [`Write`] target.

use crate::segment::{Segment, SegmentSink};
use std::io::{self, Write};

/// Writes one Matlab `line` call per segment:
///
/// ```text
/// line([0 1],[0 0])
/// ```
///
/// Numbers use the C `%g` style so scripts match classic plotting output.
pub struct MatlabWriter<W: Write> {
    out: W,
}

impl<W: Write> MatlabWriter<W> {
    /// Wraps `out`; nothing is written until the first segment.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the underlying writer. Callers flush it themselves.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> SegmentSink for MatlabWriter<W> {
    fn emit(&mut self, segment: Segment) -> io::Result<()> {
        let [x0, y0, x1, y1] = segment.coords().map(general);
        writeln!(self.out, "line([{x0} {x1}],[{y0} {y1}])")
    }
}

/// Writes `x0,y0,x1,y1` per line.
pub struct CsvWriter<W: Write> {
    out: W,
}

impl<W: Write> CsvWriter<W> {
    /// Wraps `out`; nothing is written until the first segment.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the underlying writer. Callers flush it themselves.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> SegmentSink for CsvWriter<W> {
    fn emit(&mut self, segment: Segment) -> io::Result<()> {
        let [x0, y0, x1, y1] = segment.coords();
        writeln!(self.out, "{x0},{y0},{x1},{y1}")
    }
}

/// Writes one JSON object per segment per line.
pub struct JsonLinesWriter<W: Write> {
    out: W,
}

impl<W: Write> JsonLinesWriter<W> {
    /// Wraps `out`; nothing is written until the first segment.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the underlying writer. Callers flush it themselves.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> SegmentSink for JsonLinesWriter<W> {
    fn emit(&mut self, segment: Segment) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, &segment)?;
        self.out.write_all(b"\n")
    }
}

const SIGNIFICANT_DIGITS: i32 = 6;

/// Formats `value` like C's `%g`: six significant digits, trailing zeros
/// dropped, scientific notation when the exponent is below -4 or at least 6.
fn general(value: f32) -> String {
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_owned();
    }
    if !value.is_finite() {
        return if value.is_nan() {
            "nan".to_owned()
        } else if value > 0.0 {
            "inf".to_owned()
        } else {
            "-inf".to_owned()
        };
    }

    // Round once in scientific form; the exponent after rounding picks the style.
    let sci = format!("{:.*e}", (SIGNIFICANT_DIGITS - 1) as usize, value);
    let Some((mantissa, exponent)) = sci.split_once('e') else {
        return sci;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= SIGNIFICANT_DIGITS {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_fraction(mantissa), exponent.abs())
    } else {
        let decimals = (SIGNIFICANT_DIGITS - 1 - exponent) as usize;
        trim_fraction(&format!("{value:.decimals$}")).to_owned()
    }
}

fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn general_matches_printf() {
        assert_eq!(general(0.0), "0");
        assert_eq!(general(-0.0), "-0");
        assert_eq!(general(1.0), "1");
        assert_eq!(general(-2.5), "-2.5");
        assert_eq!(general(0.70710677), "0.707107");
        assert_eq!(general(123456.0), "123456");
        assert_eq!(general(1234567.0), "1.23457e+06");
        assert_eq!(general(0.0001), "0.0001");
        assert_eq!(general(-4.371139e-8), "-4.37114e-08");
        assert_eq!(general(999999.7), "1e+06");
    }

    #[test]
    fn matlab_line_layout() {
        let mut writer = MatlabWriter::new(Vec::new());
        writer
            .emit(Segment::new(Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.5)))
            .unwrap();
        let text = String::from_utf8(writer.into_inner()).unwrap();
        assert_eq!(text, "line([0 1],[0 0.5])\n");
    }

    #[test]
    fn csv_and_json_lines() {
        let segment = Segment::new(Vec2::new(0.0, 0.0), Vec2::new(0.0, -1.0));

        let mut csv = CsvWriter::new(Vec::new());
        csv.emit(segment).unwrap();
        assert_eq!(String::from_utf8(csv.into_inner()).unwrap(), "0,0,0,-1\n");

        let mut json = JsonLinesWriter::new(Vec::new());
        json.emit(segment).unwrap();
        json.emit(segment).unwrap();
        let text = String::from_utf8(json.into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        let parsed: Segment = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(parsed, segment);
    }
}

//! JSON output in the byte layout of Python's `json.dump(..., indent=4)`.
//!
//! Data files written by the original tool escape every character outside
//! printable ASCII as `\uXXXX` (UTF-16 units, lowercase hex) and print floats in
//! Python's `repr` form (`1e+16`, `1e-05`, `10.0`). Re-saving such a file must
//! reproduce it byte for byte, so both are pinned here rather than left to
//! `serde_json`'s defaults.

use std::io;

use serde_json::ser::{Formatter, PrettyFormatter};

/// Four-space pretty printer with ASCII-only strings and Python float repr.
pub struct LegacyFormatter<'a> {
    pretty: PrettyFormatter<'a>,
}

impl<'a> LegacyFormatter<'a> {
    pub fn with_indent(indent: &'a [u8]) -> Self {
        Self {
            pretty: PrettyFormatter::with_indent(indent),
        }
    }
}

impl Formatter for LegacyFormatter<'_> {
    fn write_f64<W>(&mut self, writer: &mut W, value: f64) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(float_repr(value).as_bytes())
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if fragment.bytes().all(|b| (b' '..=b'~').contains(&b)) {
            return writer.write_all(fragment.as_bytes());
        }
        let mut units = [0u16; 2];
        for c in fragment.chars() {
            if (' '..='~').contains(&c) {
                let mut buf = [0u8; 1];
                writer.write_all(c.encode_utf8(&mut buf).as_bytes())?;
            } else {
                for unit in c.encode_utf16(&mut units) {
                    write!(writer, "\\u{unit:04x}")?;
                }
            }
        }
        Ok(())
    }

    fn begin_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.begin_array(writer)
    }

    fn end_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.end_array(writer)
    }

    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.begin_array_value(writer, first)
    }

    fn end_array_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.end_array_value(writer)
    }

    fn begin_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.begin_object(writer)
    }

    fn end_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.end_object(writer)
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.begin_object_key(writer, first)
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.begin_object_value(writer)
    }

    fn end_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.end_object_value(writer)
    }
}

/// Shortest round-trip digits laid out the way Python's `repr(float)` does.
///
/// Scientific notation when the decimal exponent is below -4 or at least 16,
/// with an explicit sign and at least two exponent digits.
fn float_repr(value: f64) -> String {
    let sci = format!("{:e}", value.abs());
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    // Position of the decimal point relative to the start of `digits`.
    let point = exp + 1;

    let mut out = String::new();
    if value.is_sign_negative() {
        out.push('-');
    }

    if point <= -4 || point > 16 {
        out.push_str(&digits[..1]);
        if digits.len() > 1 {
            out.push('.');
            out.push_str(&digits[1..]);
        }
        let sign = if exp < 0 { '-' } else { '+' };
        out.push_str(&format!("e{sign}{:02}", exp.unsigned_abs()));
    } else if point <= 0 {
        out.push_str("0.");
        out.extend(std::iter::repeat_n('0', point.unsigned_abs() as usize));
        out.push_str(&digits);
    } else {
        let point = point as usize;
        if point >= digits.len() {
            out.push_str(&digits);
            out.extend(std::iter::repeat_n('0', point - digits.len()));
            out.push_str(".0");
        } else {
            out.push_str(&digits[..point]);
            out.push('.');
            out.push_str(&digits[point..]);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    fn encode<T: Serialize>(value: &T) -> String {
        let mut buf = Vec::new();
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, LegacyFormatter::with_indent(b"    "));
        value.serialize(&mut ser).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn floats_follow_python_repr() {
        let cases = [
            (2.5, "2.5"),
            (10.0, "10.0"),
            (0.0, "0.0"),
            (-0.0, "-0.0"),
            (-3.75, "-3.75"),
            (0.1, "0.1"),
            (0.0001, "0.0001"),
            (0.00001, "1e-05"),
            (0.000012345, "1.2345e-05"),
            (1234567890123456.0, "1234567890123456.0"),
            (1e16, "1e+16"),
            (1.5e300, "1.5e+300"),
            (5e-324, "5e-324"),
        ];
        for (value, expected) in cases {
            assert_eq!(float_repr(value), expected, "{value:e}");
        }
    }

    #[test]
    fn non_ascii_is_escaped_as_utf16_units() {
        assert_eq!(encode(&"Caf\u{e9}"), r#""Caf\u00e9""#);
        assert_eq!(encode(&"\u{1F4E6} box"), r#""\ud83d\udce6 box""#);
        assert_eq!(encode(&"del\u{7f}"), r#""del\u007f""#);
    }

    #[test]
    fn control_characters_keep_short_escapes() {
        assert_eq!(encode(&"a\"b\\c\nd\te"), r#""a\"b\\c\nd\te""#);
        assert_eq!(encode(&"\u{1}"), r#""\u0001""#);
    }

    #[test]
    fn escaped_text_decodes_back_unchanged() {
        let text = "Ünïcode \u{1F4E6} gadget";
        let back: String = serde_json::from_str(&encode(&text)).unwrap();
        assert_eq!(back, text);
    }
}

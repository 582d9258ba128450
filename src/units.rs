//! Lengths: parsing dimension, glue and number arguments, and converting
//! them to em for a given [`LayoutContext`].

use crate::layout_context::LayoutContext;
use crate::spacing_data::{Measurement, MeasurementOwned};

/// TeX points per unit for the absolute units.
fn pt_per_unit(unit: &str) -> Option<f64> {
    match unit {
        // https://en.wikibooks.org/wiki/LaTeX/Lengths
        "pt" => Some(1.0),
        "mm" => Some(7227.0 / 2540.0),
        "cm" => Some(7227.0 / 254.0),
        "in" => Some(72.27),
        "bp" | "px" => Some(803.0 / 800.0),
        "pc" => Some(12.0),
        "dd" => Some(1238.0 / 1157.0),
        "cc" => Some(14856.0 / 1157.0),
        "nd" => Some(685.0 / 642.0),
        "nc" => Some(1370.0 / 107.0),
        "sp" => Some(1.0 / 65536.0),
        _ => None,
    }
}

/// Whether `unit` is a length unit the layout engine understands.
pub fn valid_unit_str<T>(unit: T) -> bool
where
    T: AsRef<str>,
{
    pt_per_unit(unit.as_ref()).is_some() || matches!(unit.as_ref(), "ex" | "em" | "mu")
}

/// Converts a measurement into em of the normal size, the unit of every box
/// dimension.
///
/// Absolute units keep their physical length whatever the current size.
/// `mu` follows the script size; `em` and `ex` always refer to the
/// textstyle font of the current size. Units are checked when the argument
/// is parsed, so anything unknown here counts as em.
#[must_use]
pub fn calculate_size<T>(size: &Measurement<T>, context: &LayoutContext) -> f64
where
    T: AsRef<str>,
{
    let unit = size.unit.as_ref();
    let scale = if let Some(pt) = pt_per_unit(unit) {
        pt / context.font_metrics().pt_per_em
    } else if unit == "mu" {
        context.font_metrics().css_em_per_mu * context.size_multiplier
    } else {
        let unit_context = if context.is_tight() {
            context.having_style(context.style.text())
        } else {
            context.clone()
        };
        let metrics = unit_context.font_metrics();
        let base = if unit == "ex" {
            metrics.x_height
        } else {
            metrics.quad
        };
        base * unit_context.size_multiplier
    };
    size.number * scale
}

/// Glue with optional stretch and shrink components.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Glue {
    /// Natural length
    pub glue: MeasurementOwned,
    /// `plus` component
    pub grow: Option<MeasurementOwned>,
    /// `minus` component
    pub shrink: Option<MeasurementOwned>,
}

/// Splits a leading signed decimal off `text`.
fn split_number(text: &str) -> Option<(f64, &str)> {
    let text = text.trim_start();
    let mut end = 0;
    let mut sign = 1.0;
    let bytes = text.as_bytes();
    while end < bytes.len() && matches!(bytes[end], b'+' | b'-' | b' ') {
        if bytes[end] == b'-' {
            sign = -sign;
        }
        end += 1;
    }
    let start = end;
    while end < bytes.len() && (bytes[end].is_ascii_digit() || bytes[end] == b'.') {
        end += 1;
    }
    let digits = &text[start..end];
    if digits.is_empty() || digits == "." {
        return None;
    }
    let value: f64 = if digits.starts_with('.') {
        format!("0{digits}").parse().ok()?
    } else {
        digits.trim_end_matches('.').parse().ok()?
    };
    Some((sign * value, &text[end..]))
}

/// Parses a measurement such as `-1.5em` or `3 mu`, returning it and the
/// unconsumed rest of the input.
fn split_measurement(text: &str) -> Option<(MeasurementOwned, &str)> {
    let (number, rest) = split_number(text)?;
    let rest = rest.trim_start();
    let unit_len = rest
        .char_indices()
        .find(|(_, c)| !c.is_ascii_alphabetic())
        .map_or(rest.len(), |(i, _)| i);
    let unit = rest.get(..2.min(unit_len))?;
    if unit.len() != 2 || !valid_unit_str(unit) {
        return None;
    }
    Some((
        Measurement {
            number,
            unit: unit.to_owned(),
        },
        &rest[2..],
    ))
}

/// Parses a dimension argument, e.g. `2pt` or `-0.5 em`.
#[must_use]
pub fn parse_dimension(text: &str) -> Option<MeasurementOwned> {
    let (measurement, rest) = split_measurement(text)?;
    rest.trim().is_empty().then_some(measurement)
}

/// Parses a glue argument, e.g. `3mu plus 1mu minus 2mu`.
#[must_use]
pub fn parse_glue(text: &str) -> Option<Glue> {
    let (glue, mut rest) = split_measurement(text)?;
    let mut grow = None;
    let mut shrink = None;
    loop {
        rest = rest.trim_start();
        if rest.is_empty() {
            break;
        }
        if let Some(after) = rest.strip_prefix("plus") {
            if grow.is_some() {
                return None;
            }
            let (m, r) = split_stretch(after)?;
            grow = Some(m);
            rest = r;
        } else if let Some(after) = rest.strip_prefix("minus") {
            if shrink.is_some() {
                return None;
            }
            let (m, r) = split_stretch(after)?;
            shrink = Some(m);
            rest = r;
        } else {
            return None;
        }
    }
    Some(Glue { glue, grow, shrink })
}

/// Stretch components may also use the infinite `fil` units.
fn split_stretch(text: &str) -> Option<(MeasurementOwned, &str)> {
    if let Some(found) = split_measurement(text) {
        return Some(found);
    }
    let (number, rest) = split_number(text)?;
    let rest = rest.trim_start();
    let unit_len = rest.bytes().take_while(|b| *b == b'f' || *b == b'i' || *b == b'l').count();
    let unit = &rest[..unit_len];
    matches!(unit, "fil" | "fill" | "filll").then(|| {
        (
            Measurement {
                number,
                unit: unit.to_owned(),
            },
            &rest[unit_len..],
        )
    })
}

/// Parses a number argument: decimal, `"hex` or `'octal`.
#[must_use]
pub fn parse_number(text: &str) -> Option<f64> {
    let text = text.trim();
    if let Some(hex) = text.strip_prefix('"') {
        return i64::from_str_radix(hex, 16).ok().map(|n| n as f64);
    }
    if let Some(octal) = text.strip_prefix('\'') {
        return i64::from_str_radix(octal, 8).ok().map(|n| n as f64);
    }
    let (number, rest) = split_number(text)?;
    rest.is_empty().then_some(number)
}

/// Formats a number the way it would be typed: no trailing zeros and at
/// most four decimals.
#[must_use]
pub fn format_number(n: f64) -> String {
    let mut s = format!("{n:.4}");
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    if s == "-0" {
        "0".clone_into(&mut s);
    }
    s
}

/// Formats a measurement as LaTeX source, e.g. `1.5em`.
#[must_use]
pub fn format_measurement<T: AsRef<str>>(m: &Measurement<T>) -> String {
    format!("{}{}", format_number(m.number), m.unit.as_ref())
}

/// Formats glue the way [`parse_glue`] reads it, e.g. `3mu plus 1fil`.
#[must_use]
pub fn format_glue(glue: &Glue) -> String {
    let mut out = format_measurement(&glue.glue);
    if let Some(grow) = &glue.grow {
        out.push_str(" plus ");
        out.push_str(&format_measurement(grow));
    }
    if let Some(shrink) = &glue.shrink {
        out.push_str(" minus ");
        out.push_str(&format_measurement(shrink));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style;

    #[test]
    fn test_valid_unit() {
        assert!(valid_unit_str("pt"));
        assert!(valid_unit_str("mu"));
        assert!(valid_unit_str("ex"));
        assert!(!valid_unit_str("bogus"));
    }

    #[test]
    fn test_parse_dimension() {
        let m = parse_dimension("-1.5 em").unwrap();
        assert_eq!(m.number, -1.5);
        assert_eq!(m.unit, "em");
        assert_eq!(parse_dimension(".5pt").unwrap().number, 0.5);
        assert!(parse_dimension("3").is_none());
        assert!(parse_dimension("3zz").is_none());
        assert!(parse_dimension("3pt junk").is_none());
    }

    #[test]
    fn test_parse_glue() {
        let glue = parse_glue("3mu plus 1fil minus 2mu").unwrap();
        assert_eq!(glue.glue.number, 3.0);
        assert_eq!(glue.grow.unwrap().unit, "fil");
        assert_eq!(glue.shrink.unwrap().number, 2.0);
        assert!(parse_glue("3mu plus").is_none());
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("65"), Some(65.0));
        assert_eq!(parse_number("\"41"), Some(65.0));
        assert_eq!(parse_number("'101"), Some(65.0));
        assert_eq!(parse_number("x"), None);
    }

    #[test]
    fn test_calculate_size() {
        let context = LayoutContext::builder()
            .math_style(style::TEXT.math_style)
            .build();
        let pt = MeasurementOwned {
            number: 10.0,
            unit: "pt".to_owned(),
        };
        assert!((calculate_size(&pt, &context) - 1.0).abs() < 1e-9);
        let ex = MeasurementOwned {
            number: 1.0,
            unit: "ex".to_owned(),
        };
        assert!((calculate_size(&ex, &context) - 0.431).abs() < 1e-9);
        let mu = MeasurementOwned {
            number: 18.0,
            unit: "mu".to_owned(),
        };
        assert!((calculate_size(&mu, &context) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn script_sizes_scale_relative_units_only() {
        let context = LayoutContext::builder()
            .math_style(style::SCRIPT.math_style)
            .build();
        let pt = MeasurementOwned {
            number: 10.0,
            unit: "pt".to_owned(),
        };
        assert!((calculate_size(&pt, &context) - 1.0).abs() < 1e-9);
        let mu = MeasurementOwned {
            number: 18.0,
            unit: "mu".to_owned(),
        };
        assert!((calculate_size(&mu, &context) - 1.171 * 0.7).abs() < 1e-9);
        let em = MeasurementOwned {
            number: 1.0,
            unit: "em".to_owned(),
        };
        assert!((calculate_size(&em, &context) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(1.0), "1");
        assert_eq!(format_number(1.23456), "1.2346");
        assert_eq!(format_number(-0.00001), "0");
    }
}

// File: crates/monod-core/src/format.rs
// Summary: Number formatting for echoing parameter values back to the user.

/// Shortest round-trip form, keeping one decimal on integral values (`2` prints as `2.0`).
///
/// Magnitudes below `1e-4` or from `1e16` up switch to exponent notation with a
/// signed, at least two-digit exponent (`1e-05`, `1.5e+16`).
pub fn format_value(v: f64) -> String {
    let magnitude = v.abs();
    if !v.is_finite() || v == 0.0 || (1e-4..1e16).contains(&magnitude) {
        if v.is_finite() && v.fract() == 0.0 {
            format!("{v:.1}")
        } else {
            format!("{v}")
        }
    } else {
        exponent_form(v)
    }
}

fn exponent_form(v: f64) -> String {
    let shortest = format!("{v:e}");
    match shortest.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(d) => ('-', d),
                None => ('+', exp),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => shortest,
    }
}

#[cfg(test)]
mod tests {
    use super::format_value;

    #[test]
    fn echoes_values_as_typed() {
        assert_eq!(format_value(0.8), "0.8");
        assert_eq!(format_value(0.2), "0.2");
        assert_eq!(format_value(2.0), "2.0");
        assert_eq!(format_value(1.25), "1.25");
        assert_eq!(format_value(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn plain_decimal_range_edges() {
        assert_eq!(format_value(0.0001), "0.0001");
        assert_eq!(format_value(1e15), "1000000000000000.0");
        assert_eq!(format_value(9999999999999998.0), "9999999999999998.0");
    }

    #[test]
    fn extreme_magnitudes_use_exponents() {
        assert_eq!(format_value(1e-5), "1e-05");
        assert_eq!(format_value(2.5e-7), "2.5e-07");
        assert_eq!(format_value(1e16), "1e+16");
        assert_eq!(format_value(1.5e16), "1.5e+16");
        assert_eq!(format_value(1e300), "1e+300");
        assert_eq!(format_value(-3e-10), "-3e-10");
    }
}

/// Fixed-decimal formatting for currency and percentage strings.
///
/// The same strings are rendered natively and in wasm. Float-to-decimal
/// formatting through `format!` has had wasm-facing panics on some
/// toolchain/browser combinations, so these helpers do **not** use `format!`
/// on floats.
///
/// They:
/// - Handle `NaN`/`±Inf` explicitly.
/// - For finite values, scale + round into an `i64`, then format integers.

#[inline]
pub fn fmt_fixed(v: f64, decimals: usize) -> String {
    fmt_fixed_inner(v, decimals, false)
}

#[inline]
pub fn fmt_signed_fixed(v: f64, decimals: usize) -> String {
    fmt_fixed_inner(v, decimals, true)
}

/// Round half away from zero to `decimals` places.
pub fn round_to(v: f64, decimals: u32) -> f64 {
    if !v.is_finite() {
        return v;
    }
    let scale = 10_f64.powi(decimals.min(9) as i32);
    (v * scale).round() / scale
}

fn fmt_fixed_inner(v: f64, decimals: usize, force_sign: bool) -> String {
    if !v.is_finite() {
        return if v.is_nan() {
            "NaN".to_string()
        } else if v.is_sign_positive() {
            "Inf".to_string()
        } else {
            "-Inf".to_string()
        };
    }

    let decimals = decimals.min(9);
    let scale_i64 = 10_i64.checked_pow(decimals as u32).unwrap_or(1_i64);
    let scale_f = scale_i64 as f64;

    let scaled = (v * scale_f).round();
    if !scaled.is_finite() || scaled.abs() > (i64::MAX as f64) {
        return if v.is_sign_negative() {
            "-Inf".to_string()
        } else {
            "Inf".to_string()
        };
    }

    let scaled_i = scaled as i64;
    // A value that rounds to zero is printed without a minus sign.
    let negative = scaled_i < 0;

    let abs_i = scaled_i.abs();
    let int_part = abs_i / scale_i64;
    let frac_part = abs_i % scale_i64;

    let mut out = String::new();
    if negative {
        out.push('-');
    } else if force_sign {
        out.push('+');
    }

    out.push_str(&int_part.to_string());

    if decimals > 0 {
        out.push('.');
        let frac_str = frac_part.to_string();
        for _ in 0..decimals.saturating_sub(frac_str.len()) {
            out.push('0');
        }
        out.push_str(&frac_str);
    }

    out
}

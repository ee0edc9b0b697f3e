//! Display helpers for rendered fragments

use std::borrow::Cow;

/// Format a number with thousands separators and at most three fraction
/// digits, the way the admin page shows currency amounts.
pub fn format_amount(value: f64) -> String {
  if !value.is_finite() {
    return format_plain(value);
  }

  let rounded = (value * 1000.0).round() / 1000.0;
  if rounded == 0.0 {
    return "0".to_string();
  }

  let fixed = format!("{:.3}", rounded.abs());
  let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
  let frac_part = frac_part.trim_end_matches('0');

  let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
  if rounded < 0.0 {
    out.push('-');
  }
  out.push_str(&group_thousands(int_part));
  if !frac_part.is_empty() {
    out.push('.');
    out.push_str(frac_part);
  }
  out
}

/// Shortest plain rendering (`250`, `12.5`) used for raw quantities
pub fn format_plain(value: f64) -> String {
  if value == 0.0 {
    // normalizes -0
    return "0".to_string();
  }
  format!("{}", value)
}

/// Escape text for interpolation into an HTML fragment
pub fn escape_text(text: &str) -> Cow<'_, str> {
  html_escape::encode_text(text)
}

fn group_thousands(digits: &str) -> String {
  let len = digits.len();
  let mut out = String::with_capacity(len + len / 3);
  for (i, ch) in digits.chars().enumerate() {
    if i > 0 && (len - i) % 3 == 0 {
      out.push(',');
    }
    out.push(ch);
  }
  out
}

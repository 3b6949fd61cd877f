//! ルピア表記の価格フォーマット

/// 金額をインドネシア・ルピア表記にする
///
/// 千の位区切りは `.`、小数点は `,`。端数がある場合のみ小数2桁を付ける。
///
/// # Examples
/// ```
/// use indiemart_common::format_idr;
///
/// assert_eq!(format_idr(5000.0), "Rp5.000");
/// assert_eq!(format_idr(1234567.5), "Rp1.234.567,50");
/// ```
pub fn format_idr(amount: f64) -> String {
    if !amount.is_finite() {
        return "Rp0".to_string();
    }

    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let mut out = String::new();
    if negative && cents > 0 {
        out.push('-');
    }
    out.push_str("Rp");
    out.push_str(&group_thousands(whole));
    if frac != 0 {
        out.push_str(&format!(",{:02}", frac));
    }
    out
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

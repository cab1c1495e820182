pub const CURRENCY_SYMBOL: &str = "R$";

/// Formats a price as Brazilian currency with two fraction digits and a
/// comma as the decimal separator, e.g. `12.5` becomes `"R$ 12,50"`.
///
/// Cents are rounded half away from zero. No thousands grouping is applied.
///
/// # Examples
/// ```
/// # use cardapio::catalog::format_price;
/// assert_eq!(format_price(5.0), "R$ 5,00");
/// assert_eq!(format_price(12.345), "R$ 12,35");
/// ```
pub fn format_price(price: f64) -> String {
    let cents = (price * 100.0).round() as u64;
    format!("{CURRENCY_SYMBOL} {},{:02}", cents / 100, cents % 100)
}

use rust_decimal::Decimal;

/// Whole-dollar P&L with an explicit sign, e.g. `+$120` or `-$45`.
pub fn format_pnl(pnl: Decimal) -> String {
    let dollars = pnl.round_dp(0).abs();
    if pnl.is_sign_negative() && !dollars.is_zero() {
        format!("-${}", dollars)
    } else {
        format!("+${}", dollars)
    }
}

pub fn format_trades(count: u32) -> String {
    if count == 1 {
        "1 trade".to_string()
    } else {
        format!("{} trades", count)
    }
}

pub fn format_win_rate(rate: f64) -> String {
    format!("{:.1}%", rate)
}

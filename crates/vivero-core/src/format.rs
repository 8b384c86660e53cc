//! Display formatting for euro amounts.

/// Render a euro amount the way the directory cards show it.
///
/// Magnitude picks the unit: `€36.0M`, `€500.0K`, `€750`. Zero and
/// non-finite amounts render as `N/A` (the sheets use an empty cell for
/// undisclosed rounds).
pub fn format_funding(amount: f64) -> String {
    if amount == 0.0 || !amount.is_finite() {
        return "N/A".to_string();
    }
    if amount >= 1_000_000.0 {
        format!("€{:.1}M", amount / 1_000_000.0)
    } else if amount >= 1_000.0 {
        format!("€{:.1}K", amount / 1_000.0)
    } else {
        format!("€{:.0}", amount)
    }
}

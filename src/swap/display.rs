//! Console formatting for routes, token taxes and fees
//!
//! Pure functions returning lines; callers decide where they go.

use crate::aggregator::{Bps, Fee, Fees, Route, TokenMetadata};
use crate::Result;
use serde::Serialize;

/// Basis points as a percentage with two decimals: 250 -> "2.50%"
pub fn format_bps(bps: u32) -> String {
    format!("{}.{:02}%", bps / 100, bps % 100)
}

/// Sum of `proportionBps` across all fills
pub fn total_bps(route: &Route) -> u32 {
    route
        .fills
        .iter()
        .map(|fill| fill.proportion_bps.value())
        .sum()
}

/// `"{n} Sources"` followed by one `"{source}: {pct}"` line per fill
pub fn route_lines(route: &Route) -> Vec<String> {
    let mut lines = Vec::with_capacity(route.fills.len() + 1);
    lines.push(format!("{} Sources", route.fills.len()));
    for fill in &route.fills {
        let pct = format_bps(fill.proportion_bps.value());
        lines.push(format!("{}: {}", fill.source, pct));
    }
    lines
}

fn tax_line(label: &str, bps: Bps) -> String {
    format!("{}: {}", label, format_bps(bps.value()))
}

/// One line per tax field the API reported
pub fn tax_lines(metadata: &TokenMetadata) -> Vec<String> {
    [
        ("Buy Token Buy Tax", metadata.buy_token.buy_tax_bps),
        ("Buy Token Sell Tax", metadata.buy_token.sell_tax_bps),
        ("Sell Token Buy Tax", metadata.sell_token.buy_tax_bps),
        ("Sell Token Sell Tax", metadata.sell_token.sell_tax_bps),
    ]
    .into_iter()
    .filter_map(|(label, bps)| bps.map(|b| tax_line(label, b)))
    .collect()
}

fn fee_line(label: &str, fee: &Fee) -> String {
    format!("{}: {} of {} ({})", label, fee.amount, fee.token, fee.kind)
}

/// Integrator (affiliate), 0x and gas fee lines, where present
pub fn fee_lines(fees: &Fees) -> Vec<String> {
    [
        ("Integrator Fee", fees.integrator_fee.as_ref()),
        ("0x Fee", fees.zero_ex_fee.as_ref()),
        ("Gas Fee", fees.gas_fee.as_ref()),
    ]
    .into_iter()
    .filter_map(|(label, fee)| fee.map(|f| fee_line(label, f)))
    .collect()
}

pub fn surplus_line(enabled: bool) -> String {
    if enabled {
        "Surplus collection: enabled".to_string()
    } else {
        "Surplus collection: disabled".to_string()
    }
}

pub fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}

/// Pretty JSON dump under a heading
pub fn print_json<T: Serialize>(heading: &str, value: &T) -> Result<()> {
    println!("{}:\n{}", heading, serde_json::to_string_pretty(value)?);
    Ok(())
}

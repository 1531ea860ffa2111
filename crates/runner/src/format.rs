//! Human-readable report lines

use cfm_clock::{pretty_delta, pretty_time};
use cfm_core::{FeeUsd, MintOutcome, PeriodSummary, TickRecord};
use rust_decimal::prelude::ToPrimitive;

/// Fixed-point rendering with thousands separators, e.g. `4,000,000.00`
pub fn grouped(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (fixed.as_str(), None),
    };

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    if value.is_sign_negative() && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        out.push('-');
    }
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    if let Some(frac_part) = frac_part {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

fn usd(fees: FeeUsd) -> String {
    grouped(fees.to_f64().unwrap_or(f64::NAN), 2)
}

/// One line per tick
pub fn format_tick(record: &TickRecord) -> String {
    let mint = match record.outcome {
        MintOutcome::Skipped => "SKIPPED".to_string(),
        outcome => grouped(outcome.shares(), 10),
    };

    format!(
        "Time {} Delta {} Mint {} TotShs {} ShrPrice {} CustVal {} Fees {} FeeRate {}",
        pretty_time(record.clock_secs),
        pretty_delta(record.delta_secs),
        mint,
        grouped(record.fund_shares, 10),
        grouped(record.fund_price, 2),
        grouped(record.customer_value, 2),
        usd(record.cumulative_tx_fees_usd),
        grouped(record.fee_rate_usd_per_day, 2),
    )
}

/// One line per fee period
pub fn format_summary(summary: &PeriodSummary) -> String {
    format!(
        "Time {} Mints {} {}Skips {} Shs {} Price ${} Cust1 ${} Err ${} Earn ${} TxFees ${}",
        pretty_time(summary.display_clock_secs),
        grouped(summary.mints as f64, 0),
        if summary.is_start() { "[START] " } else { "" },
        grouped(summary.skips as f64, 0),
        grouped(summary.fund_shares, 12),
        grouped(summary.fund_price, 2),
        grouped(summary.customer_value, 2),
        grouped(summary.error_usd, 2),
        grouped(summary.earnings_usd, 2),
        usd(summary.cumulative_tx_fees_usd),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_grouped() {
        assert_eq!(grouped(4_000_000.0, 2), "4,000,000.00");
        assert_eq!(grouped(999.999, 2), "1,000.00");
        assert_eq!(grouped(12.4, 0), "12");
        assert_eq!(grouped(0.0, 0), "0");
        assert_eq!(grouped(-1234.5, 1), "-1,234.5");
        assert_eq!(grouped(-0.001, 2), "0.00");
        assert_eq!(grouped(105_120.0, 0), "105,120");
        assert_eq!(grouped(f64::INFINITY, 2), "inf");
    }

    #[test]
    fn test_format_tick() {
        let record = TickRecord {
            tick: 1,
            clock_secs: 600.0,
            delta_secs: 300.3,
            outcome: MintOutcome::Minted { shares: 0.0001923 },
            new_period: false,
            fund_shares: 1000.0001923,
            fund_price: 3999.99923,
            customer_value: 99_999.98,
            cumulative_tx_fees_usd: dec!(0.0045),
            fee_rate_usd_per_day: 0.648,
        };

        assert_eq!(
            format_tick(&record),
            "Time 1970-01-01T00:10:00Z Delta 00:00:05:00 Mint 0.0001923000 \
             TotShs 1,000.0001923000 ShrPrice 4,000.00 CustVal 99,999.98 Fees 0.00 FeeRate 0.65"
        );
    }

    #[test]
    fn test_format_skipped_tick() {
        let record = TickRecord {
            tick: 2,
            clock_secs: 900.0,
            delta_secs: 600.0,
            outcome: MintOutcome::Skipped,
            new_period: false,
            fund_shares: 1000.0,
            fund_price: 4000.0,
            customer_value: 100_000.0,
            cumulative_tx_fees_usd: dec!(0),
            fee_rate_usd_per_day: 1.5,
        };

        assert!(format_tick(&record).contains("Mint SKIPPED TotShs"));
    }

    #[test]
    fn test_format_start_summary() {
        let summary = PeriodSummary {
            display_clock_secs: 0.0,
            period: 0,
            mints: 0,
            skips: 0,
            fund_shares: 1000.0,
            fund_price: 4000.0,
            customer_value: 100_000.0,
            ideal_customer_value: 100_000.0,
            error_usd: 0.0,
            earnings_usd: 0.0,
            cumulative_tx_fees_usd: dec!(0),
        };

        assert_eq!(
            format_summary(&summary),
            "Time 1970-01-01T00:00:00Z Mints 0 [START] Skips 0 Shs 1,000.000000000000 \
             Price $4,000.00 Cust1 $100,000.00 Err $0.00 Earn $0.00 TxFees $0.00"
        );
    }

    #[test]
    fn test_format_period_summary() {
        let summary = PeriodSummary {
            display_clock_secs: 365.0 * 86_400.0,
            period: 1,
            mints: 80_000,
            skips: 25_120,
            fund_shares: 1020.408,
            fund_price: 3920.0,
            customer_value: 98_000.0,
            ideal_customer_value: 98_000.0,
            error_usd: 0.004,
            earnings_usd: 80_000.0,
            cumulative_tx_fees_usd: dec!(360.0),
        };

        let line = format_summary(&summary);
        assert!(line.starts_with("Time 1971-01-01T00:00:00Z Mints 80,000 Skips 25,120 "));
        assert!(line.ends_with("Err $0.00 Earn $80,000.00 TxFees $360.00"));
        assert!(!line.contains("[START]"));
    }
}

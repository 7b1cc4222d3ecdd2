//! Ledger display formatting
//!
//! Summary printed after an import file has been written.

use std::collections::BTreeMap;
use std::path::Path;

use crate::models::{ExpenseAccount, LedgerRecord};

/// Format an amount in yen with thousands separators
pub fn format_yen(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if amount < 0 {
        format!("-¥{}", grouped)
    } else {
        format!("¥{}", grouped)
    }
}

/// Format the post-export summary with per-account totals
pub fn format_export_summary(path: &Path, records: &[LedgerRecord]) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Wrote {} record{} to {}\n",
        records.len(),
        if records.len() == 1 { "" } else { "s" },
        path.display()
    ));

    if records.is_empty() {
        return output;
    }

    let mut by_account: BTreeMap<ExpenseAccount, (usize, i64)> = BTreeMap::new();
    for record in records {
        let entry = by_account.entry(record.account).or_insert((0, 0));
        entry.0 += 1;
        entry.1 = entry.1.saturating_add(record.amount);
    }

    output.push('\n');
    for (account, (count, total)) in &by_account {
        output.push_str(&format!(
            "  {:<10} {:>4}  {:>12}\n",
            account.label(),
            count,
            format_yen(*total)
        ));
    }

    let total: i64 = records
        .iter()
        .fold(0i64, |acc, r| acc.saturating_add(r.amount));
    output.push_str(&format!("  {}\n", "-".repeat(30)));
    output.push_str(&format!(
        "  {:<10} {:>4}  {:>12}\n",
        "Total",
        records.len(),
        format_yen(total)
    ));

    output
}

//! Ledger record model
//!
//! One row of a freee "取引" import file. Column order and header labels are
//! fixed by the import format.

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Direction of money flow for a ledger entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum FlowDirection {
    /// Money going out
    #[default]
    #[serde(rename = "支出")]
    Expense,
    /// Money coming in
    #[serde(rename = "収入")]
    Income,
}

impl FlowDirection {
    /// Label used in the import file
    pub fn label(&self) -> &'static str {
        match self {
            Self::Expense => "支出",
            Self::Income => "収入",
        }
    }
}

impl fmt::Display for FlowDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Expense account a purchase is booked against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Default)]
pub enum ExpenseAccount {
    /// 消耗品費
    #[default]
    #[serde(rename = "消耗品費")]
    ConsumableGoods,
    /// 新聞図書費
    #[serde(rename = "新聞図書費")]
    NewspapersAndBooks,
}

impl ExpenseAccount {
    /// Label used in the import file
    pub fn label(&self) -> &'static str {
        match self {
            Self::ConsumableGoods => "消耗品費",
            Self::NewspapersAndBooks => "新聞図書費",
        }
    }
}

impl fmt::Display for ExpenseAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single freee expense entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LedgerRecord {
    #[serde(rename = "収支区分")]
    pub flow: FlowDirection,

    /// Cross-reference to the receipt's order number
    #[serde(rename = "管理番号")]
    pub management_no: String,

    #[serde(rename = "発生日")]
    pub date: String,

    #[serde(rename = "決済期日")]
    pub due_date: String,

    #[serde(rename = "取引先コード")]
    pub counterparty_code: String,

    #[serde(rename = "取引先")]
    pub counterparty: String,

    #[serde(rename = "勘定科目")]
    pub account: ExpenseAccount,

    #[serde(rename = "税区分")]
    pub tax_section: String,

    #[serde(rename = "金額")]
    pub amount: i64,

    #[serde(rename = "税計算区分")]
    pub tax_calculation: String,

    #[serde(rename = "税額")]
    pub tax: String,

    /// Free-text description, the item name
    #[serde(rename = "備考")]
    pub note: String,

    #[serde(rename = "品目")]
    pub item_kind: String,

    #[serde(rename = "部門")]
    pub department: String,

    /// Memo tags, written comma-joined
    #[serde(
        rename = "メモタグ（複数指定可、カンマ区切り）",
        serialize_with = "join_tags"
    )]
    pub memo_tags: Vec<String>,

    #[serde(rename = "セグメント1")]
    pub segment1: String,

    #[serde(rename = "セグメント2")]
    pub segment2: String,

    #[serde(rename = "セグメント3")]
    pub segment3: String,

    #[serde(rename = "決済日")]
    pub settlement_date: String,

    #[serde(rename = "決済口座")]
    pub settlement_account: String,

    #[serde(rename = "決済金額")]
    pub settlement_amount: i64,
}

impl LedgerRecord {
    /// Header row of the import file, in column order
    pub const HEADERS: [&'static str; 21] = [
        "収支区分",
        "管理番号",
        "発生日",
        "決済期日",
        "取引先コード",
        "取引先",
        "勘定科目",
        "税区分",
        "金額",
        "税計算区分",
        "税額",
        "備考",
        "品目",
        "部門",
        "メモタグ（複数指定可、カンマ区切り）",
        "セグメント1",
        "セグメント2",
        "セグメント3",
        "決済日",
        "決済口座",
        "決済金額",
    ];

    /// Memo tags as they appear in the import file
    pub fn memo(&self) -> String {
        self.memo_tags.join(",")
    }
}

fn join_tags<S: Serializer>(tags: &[String], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&tags.join(","))
}

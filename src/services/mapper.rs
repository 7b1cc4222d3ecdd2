//! Ledger mapping service
//!
//! Turns one selected receipt into one freee expense entry, applying the
//! digital-book classification rule.

use crate::config::{Classification, LedgerConstants};
use crate::error::{ReceiptError, ReceiptResult};
use crate::models::{ExpenseAccount, LedgerRecord, Receipt};

/// Service that maps receipts to ledger records
pub struct LedgerMapper<'a> {
    constants: &'a LedgerConstants,
    classification: &'a Classification,
}

impl<'a> LedgerMapper<'a> {
    /// Create a new mapper
    pub fn new(constants: &'a LedgerConstants, classification: &'a Classification) -> Self {
        Self {
            constants,
            classification,
        }
    }

    /// Map a single receipt
    ///
    /// Fails if the receipt has no price or no count: the amount must never
    /// be silently defaulted.
    pub fn map(&self, receipt: &Receipt) -> ReceiptResult<LedgerRecord> {
        let amount = Self::amount(receipt)?;

        let mut memo_tags = Vec::new();
        let mut account = ExpenseAccount::ConsumableGoods;

        if self.is_digital_book(receipt) {
            memo_tags.push(self.classification.digital_book_tag.clone());
            account = ExpenseAccount::NewspapersAndBooks;
        }

        Ok(LedgerRecord {
            flow: self.constants.flow,
            management_no: receipt.order_no.clone(),
            date: receipt.date.clone(),
            due_date: String::new(),
            counterparty_code: String::new(),
            counterparty: self.constants.counterparty.clone(),
            account,
            tax_section: self.constants.tax_section.clone(),
            amount,
            tax_calculation: self.constants.tax_calculation.clone(),
            tax: String::new(),
            note: receipt.name.clone(),
            item_kind: self.constants.item_kind.clone(),
            department: String::new(),
            memo_tags,
            segment1: String::new(),
            segment2: String::new(),
            segment3: String::new(),
            // Order date doubles as the settlement date
            settlement_date: receipt.date.clone(),
            settlement_account: self.constants.settlement_account.clone(),
            settlement_amount: amount,
        })
    }

    /// Map every receipt, stopping at the first failure
    pub fn map_all(&self, receipts: &[Receipt]) -> ReceiptResult<Vec<LedgerRecord>> {
        receipts.iter().map(|r| self.map(r)).collect()
    }

    /// Check whether the receipt is a digital-book purchase
    pub fn is_digital_book(&self, receipt: &Receipt) -> bool {
        receipt
            .attribute
            .starts_with(&self.classification.digital_book_marker)
    }

    fn amount(receipt: &Receipt) -> ReceiptResult<i64> {
        let price = receipt
            .price
            .ok_or_else(|| ReceiptError::missing_field(&receipt.order_no, "価格"))?;
        let count = receipt
            .count
            .ok_or_else(|| ReceiptError::missing_field(&receipt.order_no, "個数"))?;

        count
            .checked_mul(price)
            .ok_or_else(|| ReceiptError::AmountOverflow {
                order_no: receipt.order_no.clone(),
                count,
                price,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::models::FlowDirection;

    fn kindle_receipt() -> Receipt {
        Receipt::new(
            "2023-01-05",
            "123-4567890",
            "Example Book",
            "[Kindle 版] format info",
        )
        .with_price(1200, 1)
    }

    #[test]
    fn test_map_digital_book() {
        let settings = Settings::default();
        let mapper = LedgerMapper::new(&settings.ledger, &settings.classification);

        let record = mapper.map(&kindle_receipt()).unwrap();

        assert_eq!(record.flow, FlowDirection::Expense);
        assert_eq!(record.management_no, "123-4567890");
        assert_eq!(record.date, "2023-01-05");
        assert_eq!(record.account, ExpenseAccount::NewspapersAndBooks);
        assert_eq!(record.amount, 1200);
        assert_eq!(record.note, "Example Book");
        assert_eq!(record.memo(), "Kindle");
        assert_eq!(record.settlement_date, "2023-01-05");
        assert_eq!(record.settlement_amount, 1200);
        assert_eq!(record.counterparty, "Amazon");
        assert_eq!(record.tax_section, "課対仕入10%");
        assert_eq!(record.tax_calculation, "内税");
        assert_eq!(record.settlement_account, "事業主借");
        assert!(record.due_date.is_empty());
        assert!(record.tax.is_empty());
    }

    #[test]
    fn test_map_consumable() {
        let settings = Settings::default();
        let mapper = LedgerMapper::new(&settings.ledger, &settings.classification);

        let receipt =
            Receipt::new("2023-02-10", "249-1", "USB Cable", "カラー: 黒").with_price(980, 3);
        let record = mapper.map(&receipt).unwrap();

        assert_eq!(record.account, ExpenseAccount::ConsumableGoods);
        assert_eq!(record.amount, 2940);
        assert_eq!(record.settlement_amount, record.amount);
        assert!(record.memo_tags.is_empty());
        assert_eq!(record.memo(), "");
    }

    #[test]
    fn test_marker_must_be_prefix() {
        let settings = Settings::default();
        let mapper = LedgerMapper::new(&settings.ledger, &settings.classification);

        let receipt =
            Receipt::new("2023-02-10", "1", "Book", "Paperback [Kindle 版]").with_price(500, 1);
        let record = mapper.map(&receipt).unwrap();

        assert_eq!(record.account, ExpenseAccount::ConsumableGoods);
    }

    #[test]
    fn test_missing_price_fails() {
        let settings = Settings::default();
        let mapper = LedgerMapper::new(&settings.ledger, &settings.classification);

        let mut receipt = Receipt::new("2023-01-05", "123-4567890", "Bundle", "");
        receipt.count = Some(1);

        let err = mapper.map(&receipt).unwrap_err();
        assert!(matches!(
            err,
            ReceiptError::MissingField { field: "価格", .. }
        ));
    }

    #[test]
    fn test_missing_count_fails() {
        let settings = Settings::default();
        let mapper = LedgerMapper::new(&settings.ledger, &settings.classification);

        let mut receipt = Receipt::new("2023-01-05", "123-4567890", "Bundle", "");
        receipt.price = Some(100);

        let err = mapper.map(&receipt).unwrap_err();
        assert!(matches!(
            err,
            ReceiptError::MissingField { field: "個数", .. }
        ));
    }

    #[test]
    fn test_zero_price_is_not_missing() {
        let settings = Settings::default();
        let mapper = LedgerMapper::new(&settings.ledger, &settings.classification);

        let receipt = Receipt::new("2023-01-05", "1", "Free sample", "").with_price(0, 2);
        assert_eq!(mapper.map(&receipt).unwrap().amount, 0);
    }

    #[test]
    fn test_overflow_fails() {
        let settings = Settings::default();
        let mapper = LedgerMapper::new(&settings.ledger, &settings.classification);

        let receipt = Receipt::new("2023-01-05", "1", "Huge", "").with_price(i64::MAX, 2);
        assert!(matches!(
            mapper.map(&receipt),
            Err(ReceiptError::AmountOverflow { .. })
        ));
    }

    #[test]
    fn test_custom_constants() {
        let mut settings = Settings::default();
        settings.ledger.counterparty = "Example Store".into();
        settings.classification.digital_book_marker = "[電子書籍]".into();
        settings.classification.digital_book_tag = "ebook".into();
        let mapper = LedgerMapper::new(&settings.ledger, &settings.classification);

        let receipt =
            Receipt::new("2023-01-05", "1", "Novel", "[電子書籍] EPUB").with_price(700, 1);
        let record = mapper.map(&receipt).unwrap();

        assert_eq!(record.counterparty, "Example Store");
        assert_eq!(record.account, ExpenseAccount::NewspapersAndBooks);
        assert_eq!(record.memo(), "ebook");
    }

    #[test]
    fn test_map_all_stops_at_first_error() {
        let settings = Settings::default();
        let mapper = LedgerMapper::new(&settings.ledger, &settings.classification);

        let receipts = vec![
            kindle_receipt(),
            Receipt::new("2023-01-06", "2", "No price", ""),
        ];
        assert!(mapper.map_all(&receipts).is_err());
        assert_eq!(mapper.map_all(&receipts[..1]).unwrap().len(), 1);
    }
}

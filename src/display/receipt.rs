//! Receipt display formatting
//!
//! Label and preview text shown by the receipt selector.

use crate::models::Receipt;

/// One-line label for the selector list
pub fn format_receipt_label(receipt: &Receipt) -> String {
    receipt.name.clone()
}

/// Multi-line preview listing every column of the receipt
///
/// Absent numbers are shown as blank rather than `0`.
pub fn format_receipt_preview(receipt: &Receipt) -> String {
    let rows: [(&str, String); 18] = [
        ("注文日", receipt.date.clone()),
        ("注文番号", receipt.order_no.clone()),
        ("商品名", receipt.name.clone()),
        ("付帯情報", receipt.attribute.clone()),
        ("価格", number_or_empty(receipt.price)),
        ("個数", number_or_empty(receipt.count)),
        ("商品小計", number_or_empty(receipt.subtotal)),
        ("注文合計", number_or_empty(receipt.total)),
        ("お届け先", receipt.address.clone()),
        ("状態", receipt.status.clone()),
        ("請求先", receipt.payer.clone()),
        ("請求額", receipt.billing_amount.clone()),
        ("クレカ請求日", receipt.billing_date.clone()),
        ("クレカ請求額", number_or_empty(receipt.card_billing_amount)),
        ("クレカ種類", receipt.card_kind.clone()),
        ("注文概要URL", receipt.order_url.clone()),
        ("領収書URL", receipt.receipt_url.clone()),
        ("商品URL", receipt.item_url.clone()),
    ];

    let mut output = String::new();
    for (label, value) in rows {
        output.push_str(&format!("{}: {}\n", label, value));
    }
    output
}

fn number_or_empty(value: Option<i64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

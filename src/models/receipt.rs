//! Receipt model
//!
//! One purchase line from the vendor's order-history CSV export. Columns are
//! matched by their header label, so the export may order them freely.

use serde::Deserialize;

/// A single purchase line as exported by the vendor
///
/// Numeric columns that may be blank in the export are `Option<i64>`; a blank
/// cell is `None`, which is distinct from an explicit `0`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Receipt {
    /// Order date, kept verbatim
    #[serde(rename = "注文日")]
    pub date: String,

    /// Order number, carried into the ledger's management number
    #[serde(rename = "注文番号")]
    pub order_no: String,

    /// Item name
    #[serde(rename = "商品名")]
    pub name: String,

    /// Free-form attribute line (edition/format information)
    #[serde(rename = "付帯情報")]
    pub attribute: String,

    /// Unit price
    #[serde(rename = "価格")]
    pub price: Option<i64>,

    /// Quantity
    #[serde(rename = "個数")]
    pub count: Option<i64>,

    /// Item subtotal
    #[serde(rename = "商品小計")]
    pub subtotal: Option<i64>,

    /// Order total
    #[serde(rename = "注文合計")]
    pub total: Option<i64>,

    /// Delivery address
    #[serde(rename = "お届け先")]
    pub address: String,

    /// Order status
    #[serde(rename = "状態")]
    pub status: String,

    /// Payer
    #[serde(rename = "請求先")]
    pub payer: String,

    /// Billed amount, pre-formatted by the exporter
    #[serde(rename = "請求額")]
    pub billing_amount: String,

    /// Card billing date
    #[serde(rename = "クレカ請求日")]
    pub billing_date: String,

    /// Amount billed to the card
    #[serde(rename = "クレカ請求額")]
    pub card_billing_amount: Option<i64>,

    /// Card type
    #[serde(rename = "クレカ種類")]
    pub card_kind: String,

    /// Order summary URL
    #[serde(rename = "注文概要URL")]
    pub order_url: String,

    /// Receipt URL
    #[serde(rename = "領収書URL")]
    pub receipt_url: String,

    /// Item page URL
    #[serde(rename = "商品URL")]
    pub item_url: String,
}

impl Receipt {
    /// Create a receipt with the fields the ledger mapping reads
    pub fn new(
        date: impl Into<String>,
        order_no: impl Into<String>,
        name: impl Into<String>,
        attribute: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            order_no: order_no.into(),
            name: name.into(),
            attribute: attribute.into(),
            ..Self::default()
        }
    }

    /// Set unit price and quantity
    pub fn with_price(mut self, price: i64, count: i64) -> Self {
        self.price = Some(price);
        self.count = Some(count);
        self
    }

    /// Check whether the name is wrapped by the given marker pair
    pub fn is_wrapped_by(&self, open: &str, close: &str) -> bool {
        self.name.starts_with(open) && self.name.ends_with(close)
    }
}

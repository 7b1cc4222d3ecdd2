//! Receipt CSV import
//!
//! Decodes the vendor's order-history export into [`Receipt`] rows. The export
//! is UTF-8 and may start with a byte-order mark; columns are matched by
//! header label rather than position.

use std::fs::File;
use std::io::{self, BufReader, Cursor, Read};
use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use crate::error::{ReceiptError, ReceiptResult};
use crate::models::Receipt;

/// UTF-8 byte-order mark
pub const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Drop a leading UTF-8 byte-order mark from a stream
///
/// Up to three bytes are read ahead; if they are not a BOM they are replayed
/// in front of the rest of the stream.
pub fn skip_bom<R: Read>(mut reader: R) -> io::Result<io::Chain<Cursor<Vec<u8>>, R>> {
    let mut prefix = [0u8; 3];
    let mut filled = 0;

    while filled < prefix.len() {
        match reader.read(&mut prefix[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }

    let replay = if prefix[..filled] == UTF8_BOM {
        Vec::new()
    } else {
        prefix[..filled].to_vec()
    };

    Ok(Cursor::new(replay).chain(reader))
}

/// Decode receipts from a CSV stream
pub fn decode_receipts<R: Read>(reader: R) -> ReceiptResult<Vec<Receipt>> {
    let reader = skip_bom(reader)?;
    let mut csv_reader = ReaderBuilder::new().from_reader(reader);

    let mut receipts = Vec::new();
    for result in csv_reader.deserialize::<Receipt>() {
        receipts.push(result?);
    }

    Ok(receipts)
}

/// Decode receipts from a file
///
/// The file is closed when this returns, whether decoding succeeded or not.
pub fn read_receipts(path: &Path) -> ReceiptResult<Vec<Receipt>> {
    let file = File::open(path).map_err(|e| {
        ReceiptError::Io(format!("Failed to open {}: {}", path.display(), e))
    })?;

    let receipts = decode_receipts(BufReader::new(file)).map_err(|e| match e {
        ReceiptError::Decode(msg) => ReceiptError::Decode(format!("{}: {}", path.display(), msg)),
        ReceiptError::Io(msg) => ReceiptError::Io(format!("{}: {}", path.display(), msg)),
        other => other,
    })?;

    debug!(path = %path.display(), rows = receipts.len(), "decoded receipts");
    Ok(receipts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const HEADER: &str = "注文日,注文番号,商品名,付帯情報,価格,個数,商品小計,注文合計,お届け先,状態,請求先,請求額,クレカ請求日,クレカ請求額,クレカ種類,注文概要URL,領収書URL,商品URL";

    fn sample_csv() -> String {
        format!(
            "{}\n{}\n{}\n",
            HEADER,
            "2023-01-05,123-4567890,Example Book,[Kindle 版] format info,1200,1,1200,1200,,,山田 太郎,\"1,200\",2023-01-10,1200,Visa,https://example.com/o,https://example.com/r,https://example.com/i",
            "2023-01-05,123-4567890,（Amazonポイント）,,,,,1200,,,,,,,,,,"
        )
    }

    #[test]
    fn test_decode_full_row() {
        let receipts = decode_receipts(sample_csv().as_bytes()).unwrap();
        assert_eq!(receipts.len(), 2);

        let book = &receipts[0];
        assert_eq!(book.date, "2023-01-05");
        assert_eq!(book.order_no, "123-4567890");
        assert_eq!(book.name, "Example Book");
        assert_eq!(book.attribute, "[Kindle 版] format info");
        assert_eq!(book.price, Some(1200));
        assert_eq!(book.count, Some(1));
        assert_eq!(book.payer, "山田 太郎");
        assert_eq!(book.billing_amount, "1,200");
        assert_eq!(book.card_billing_amount, Some(1200));
        assert_eq!(book.item_url, "https://example.com/i");
    }

    #[test]
    fn test_empty_numbers_are_absent() {
        let receipts = decode_receipts(sample_csv().as_bytes()).unwrap();
        let note = &receipts[1];
        assert_eq!(note.price, None);
        assert_eq!(note.count, None);
        assert_eq!(note.subtotal, None);
        assert_eq!(note.total, Some(1200));
    }

    #[test]
    fn test_columns_matched_by_label() {
        let csv_data = "個数,商品名,価格,注文番号,注文日,unknown\n2,Pen,150,9-9,2023-03-01,x\n";
        let receipts = decode_receipts(csv_data.as_bytes()).unwrap();

        assert_eq!(receipts.len(), 1);
        assert_eq!(receipts[0].name, "Pen");
        assert_eq!(receipts[0].price, Some(150));
        assert_eq!(receipts[0].count, Some(2));
        assert_eq!(receipts[0].order_no, "9-9");
        assert!(receipts[0].attribute.is_empty());
    }

    #[test]
    fn test_bom_is_stripped() {
        let plain = sample_csv();
        let mut with_bom = UTF8_BOM.to_vec();
        with_bom.extend_from_slice(plain.as_bytes());

        let a = decode_receipts(plain.as_bytes()).unwrap();
        let b = decode_receipts(with_bom.as_slice()).unwrap();
        assert_eq!(a, b);
        assert_eq!(b[0].date, "2023-01-05");
    }

    #[test]
    fn test_skip_bom_keeps_short_streams() {
        let mut out = Vec::new();
        skip_bom(&b"ab"[..]).unwrap().read_to_end(&mut out).unwrap();
        assert_eq!(out, b"ab");

        let mut out = Vec::new();
        skip_bom(&UTF8_BOM[..]).unwrap().read_to_end(&mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_non_numeric_price_fails() {
        let csv_data = "注文日,注文番号,商品名,価格,個数\n2023-03-01,1,Pen,abc,1\n";
        let err = decode_receipts(csv_data.as_bytes()).unwrap_err();
        assert!(matches!(err, ReceiptError::Decode(_)));
    }

    #[test]
    fn test_ragged_row_fails() {
        let csv_data = "注文日,注文番号,商品名\n2023-03-01,1\n";
        assert!(decode_receipts(csv_data.as_bytes()).is_err());
    }

    #[test]
    fn test_empty_stream() {
        assert!(decode_receipts(&b""[..]).unwrap().is_empty());
        assert!(decode_receipts(HEADER.as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn test_read_receipts_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("orders.csv");
        std::fs::write(&path, sample_csv()).unwrap();

        let receipts = read_receipts(&path).unwrap();
        assert_eq!(receipts.len(), 2);
    }

    #[test]
    fn test_read_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = read_receipts(&temp_dir.path().join("missing.csv")).unwrap_err();
        assert!(matches!(err, ReceiptError::Io(_)));
    }
}

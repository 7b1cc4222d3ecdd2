//! CSV export of ledger records
//!
//! Writes freee import files: a fixed header row followed by one row per
//! ledger record.

use std::io::Write;

use csv::WriterBuilder;

use crate::error::{ReceiptError, ReceiptResult};
use crate::models::LedgerRecord;

/// Export ledger records to CSV
///
/// The header row is always written, even for an empty slice. The writer is
/// flushed before returning so write errors surface here.
pub fn export_ledger_csv<W: Write>(records: &[LedgerRecord], writer: W) -> ReceiptResult<()> {
    let mut csv_writer = WriterBuilder::new().has_headers(false).from_writer(writer);

    csv_writer
        .write_record(LedgerRecord::HEADERS)
        .map_err(|e| ReceiptError::Export(e.to_string()))?;

    for record in records {
        csv_writer.serialize(record).map_err(|e| {
            ReceiptError::Export(format!(
                "Failed to write record {}: {}",
                record.management_no, e
            ))
        })?;
    }

    csv_writer
        .flush()
        .map_err(|e| ReceiptError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::models::Receipt;
    use crate::services::LedgerMapper;

    fn sample_records() -> Vec<LedgerRecord> {
        let settings = Settings::default();
        let mapper = LedgerMapper::new(&settings.ledger, &settings.classification);
        let receipts = vec![
            Receipt::new("2023-01-05", "123-4567890", "Example Book", "[Kindle 版] format info")
                .with_price(1200, 1),
            Receipt::new("2023-01-06", "249-0000001", "Cable, 2m \"braided\"", "")
                .with_price(650, 2),
        ];
        mapper.map_all(&receipts).unwrap()
    }

    #[test]
    fn test_header_only_for_empty_input() {
        let mut out = Vec::new();
        export_ledger_csv(&[], &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert!(text.starts_with("収支区分,管理番号,発生日,"));
    }

    #[test]
    fn test_reparse_matches_written_values() {
        let records = sample_records();
        let mut out = Vec::new();
        export_ledger_csv(&records, &mut out).unwrap();

        let mut reader = csv::Reader::from_reader(out.as_slice());
        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.iter().collect::<Vec<_>>(), LedgerRecord::HEADERS.to_vec());

        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);

        let first = &rows[0];
        assert_eq!(first.len(), LedgerRecord::HEADERS.len());
        assert_eq!(&first[0], "支出");
        assert_eq!(&first[1], "123-4567890");
        assert_eq!(&first[2], "2023-01-05");
        assert_eq!(&first[3], "");
        assert_eq!(&first[5], "Amazon");
        assert_eq!(&first[6], "新聞図書費");
        assert_eq!(&first[7], "課対仕入10%");
        assert_eq!(&first[8], "1200");
        assert_eq!(&first[9], "内税");
        assert_eq!(&first[11], "Example Book");
        assert_eq!(&first[12], "Amazon");
        assert_eq!(&first[14], "Kindle");
        assert_eq!(&first[18], "2023-01-05");
        assert_eq!(&first[19], "事業主借");
        assert_eq!(&first[20], "1200");

        let second = &rows[1];
        assert_eq!(&second[6], "消耗品費");
        assert_eq!(&second[8], "1300");
        assert_eq!(&second[11], "Cable, 2m \"braided\"");
        assert_eq!(&second[14], "");
    }

    #[test]
    fn test_multiple_tags_are_comma_joined() {
        let mut records = sample_records();
        records[0].memo_tags.push("Reference".into());

        let mut out = Vec::new();
        export_ledger_csv(&records[..1], &mut out).unwrap();

        let mut reader = csv::Reader::from_reader(out.as_slice());
        let row = reader.records().next().unwrap().unwrap();
        assert_eq!(&row[14], "Kindle,Reference");
    }

    #[test]
    fn test_write_error_surfaces() {
        struct FailingWriter;

        impl Write for FailingWriter {
            fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::Other, "disk full"))
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Err(std::io::Error::new(std::io::ErrorKind::Other, "disk full"))
            }
        }

        let err = export_ledger_csv(&sample_records(), FailingWriter).unwrap_err();
        assert!(matches!(err, ReceiptError::Export(_)));
    }
}

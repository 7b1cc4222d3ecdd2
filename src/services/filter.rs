//! Noise filtering
//!
//! The order-history export interleaves annotation rows (point usage, bundle
//! notes and the like) with real purchases. Their names are wrapped in a
//! bracket pair, which is how they are recognized and dropped.

use tracing::debug;

use crate::config::NoiseMarkers;
use crate::models::Receipt;

/// Return the receipts that are not annotation rows, preserving order
pub fn filter_noise(receipts: &[Receipt], markers: &NoiseMarkers) -> Vec<Receipt> {
    receipts
        .iter()
        .filter(|r| {
            let noise = r.is_wrapped_by(&markers.open, &markers.close);
            if noise {
                debug!(order_no = %r.order_no, name = %r.name, "dropping annotation row");
            }
            !noise
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn receipt(name: &str) -> Receipt {
        Receipt::new("2023-01-05", "1", name, "")
    }

    fn names(receipts: &[Receipt]) -> Vec<&str> {
        receipts.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_removes_wrapped_rows() {
        let markers = NoiseMarkers::default();
        let receipts = vec![
            receipt("Notebook"),
            receipt("（Amazonポイント）"),
            receipt("Pen"),
            receipt("（ギフト券の利用）"),
        ];

        let filtered = filter_noise(&receipts, &markers);
        assert_eq!(names(&filtered), vec!["Notebook", "Pen"]);
    }

    #[test]
    fn test_keeps_partially_wrapped_rows() {
        let markers = NoiseMarkers::default();
        let receipts = vec![
            receipt("（限定版"),
            receipt("Cable（2m）"),
            receipt("(ASCII parens)"),
        ];

        let filtered = filter_noise(&receipts, &markers);
        assert_eq!(filtered, receipts);
    }

    #[test]
    fn test_idempotent() {
        let markers = NoiseMarkers::default();
        let receipts = vec![receipt("A"), receipt("（note）"), receipt("B")];

        let once = filter_noise(&receipts, &markers);
        let twice = filter_noise(&once, &markers);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_custom_markers() {
        let markers = NoiseMarkers {
            open: "[".into(),
            close: "]".into(),
        };
        let receipts = vec![receipt("[promo]"), receipt("（kept）")];

        let filtered = filter_noise(&receipts, &markers);
        assert_eq!(names(&filtered), vec!["（kept）"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(filter_noise(&[], &NoiseMarkers::default()).is_empty());
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use tempfile::TempDir;

    use crate::ledger::{LedgerError, LedgerService};
    use crate::models::Position;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn service(dir: &TempDir) -> LedgerService {
        LedgerService::new(
            dir.path().join("positions.csv"),
            dir.path().join("transactions.txt"),
        )
    }

    #[test]
    fn buys_accumulate_and_keep_first_acquisition_date() {
        let dir = TempDir::new().unwrap();
        let ledger = service(&dir);

        ledger.buy("ABC", 10, dec!(50), date("2024-01-01")).unwrap();
        let position = ledger.buy("ABC", 5, dec!(55), date("2024-01-10")).unwrap();

        assert_eq!(*position.quantity(), 15);
        assert_eq!(*position.acquisition_date(), date("2024-01-01"));

        let open: Vec<Position> = ledger.open_positions().unwrap().collect();
        assert_eq!(open.len(), 1);
        assert_eq!(open[0].ticker(), "ABC");
    }

    #[test]
    fn buy_creates_the_store_when_missing() {
        let dir = TempDir::new().unwrap();
        let ledger = service(&dir);

        let position = ledger.buy("XYZ", 3, dec!(12.5), date("2024-03-04")).unwrap();

        assert_eq!(*position.quantity(), 3);
        assert_eq!(*position.acquisition_date(), date("2024-03-04"));
        assert!(dir.path().join("positions.csv").exists());
    }

    #[test]
    fn buy_rejects_non_positive_quantity() {
        let dir = TempDir::new().unwrap();
        let ledger = service(&dir);

        let err = ledger.buy("ABC", 0, dec!(50), date("2024-01-01")).unwrap_err();
        assert!(matches!(err, LedgerError::InvalidQuantity { quantity: 0 }));

        let err = ledger
            .buy("ABC", -3, dec!(50), date("2024-01-01"))
            .unwrap_err();
        assert!(matches!(err, LedgerError::InvalidQuantity { quantity: -3 }));

        assert!(!dir.path().join("positions.csv").exists());
        assert!(!dir.path().join("transactions.txt").exists());
    }

    #[test]
    fn sell_without_a_store_is_no_such_position() {
        let dir = TempDir::new().unwrap();
        let ledger = service(&dir);

        let err = ledger.sell("XYZ", 5, dec!(60)).unwrap_err();
        assert!(matches!(err, LedgerError::NoSuchPosition { .. }));
        assert!(!dir.path().join("transactions.txt").exists());
    }

    #[test]
    fn sell_more_than_held_leaves_the_ledger_unchanged() {
        let dir = TempDir::new().unwrap();
        let ledger = service(&dir);

        ledger.buy("ABC", 10, dec!(50), date("2024-01-01")).unwrap();
        let store_before = fs::read_to_string(dir.path().join("positions.csv")).unwrap();
        let log_before = fs::read_to_string(dir.path().join("transactions.txt")).unwrap();

        let err = ledger.sell("ABC", 11, dec!(60)).unwrap_err();
        match err {
            LedgerError::InsufficientShares {
                requested, held, ..
            } => {
                assert_eq!(requested, 11);
                assert_eq!(held, 10);
            }
            other => panic!("Expected InsufficientShares, got {:?}", other),
        }

        let store_after = fs::read_to_string(dir.path().join("positions.csv")).unwrap();
        let log_after = fs::read_to_string(dir.path().join("transactions.txt")).unwrap();
        assert_eq!(store_before, store_after);
        assert_eq!(log_before, log_after);
    }

    #[test]
    fn sell_of_an_unknown_ticker_is_insufficient_shares() {
        let dir = TempDir::new().unwrap();
        let ledger = service(&dir);

        ledger.buy("ABC", 10, dec!(50), date("2024-01-01")).unwrap();

        let err = ledger.sell("XYZ", 5, dec!(60)).unwrap_err();
        assert!(matches!(
            err,
            LedgerError::InsufficientShares { held: 0, .. }
        ));
    }

    #[test]
    fn partial_sell_keeps_the_remaining_shares() {
        let dir = TempDir::new().unwrap();
        let ledger = service(&dir);

        ledger.buy("ABC", 10, dec!(50), date("2024-01-01")).unwrap();
        let remaining = ledger.sell("ABC", 4, dec!(60)).unwrap();

        let remaining = remaining.expect("position should stay open");
        assert_eq!(*remaining.quantity(), 6);
        assert_eq!(*remaining.acquisition_date(), date("2024-01-01"));

        let open: Vec<Position> = ledger.open_positions().unwrap().collect();
        assert_eq!(open.len(), 1);
        assert_eq!(*open[0].quantity(), 6);
    }

    #[test]
    fn selling_all_shares_closes_the_position() {
        let dir = TempDir::new().unwrap();
        let ledger = service(&dir);

        ledger.buy("ABC", 10, dec!(50), date("2024-01-01")).unwrap();
        ledger.buy("ABC", 5, dec!(55), date("2024-01-10")).unwrap();

        let remaining = ledger.sell("ABC", 15, dec!(60)).unwrap();
        assert!(remaining.is_none());

        let open: Vec<Position> = ledger.open_positions().unwrap().collect();
        assert!(open.is_empty());

        let log = fs::read_to_string(dir.path().join("transactions.txt")).unwrap();
        let lines: Vec<&str> = log.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("Buy 10 of ABC at 50"));
        assert!(lines[1].contains("Buy 5 of ABC at 55"));
        assert!(lines[2].contains("Sell 15 of ABC at 60"));
    }

    #[test]
    fn open_positions_skips_zero_quantity_rows() {
        let dir = TempDir::new().unwrap();
        let ledger = service(&dir);

        fs::write(
            dir.path().join("positions.csv"),
            "ticker,quantity,acquisition_date\nABC,0,2024-01-01\nXYZ,5,2024-02-05\n",
        )
        .unwrap();

        let open: Vec<Position> = ledger.open_positions().unwrap().collect();
        assert_eq!(open.len(), 1);
        assert_eq!(open[0].ticker(), "XYZ");
    }

    #[test]
    fn open_positions_without_a_store_is_store_not_found() {
        let dir = TempDir::new().unwrap();
        let ledger = service(&dir);

        let err = ledger.open_positions().map(|_| ()).unwrap_err();
        assert!(matches!(err, LedgerError::StoreNotFound { .. }));
    }

    #[test]
    fn open_gain_is_price_difference_times_quantity() {
        let position = Position::new(String::from("ABC"), 15, date("2024-01-01"));

        let gain = LedgerService::open_gain(&position, Some(dec!(50)), Some(dec!(60)));
        assert_eq!(gain, Some(dec!(150)));

        let loss = LedgerService::open_gain(&position, Some(dec!(50)), Some(dec!(40)));
        assert_eq!(loss, Some(dec!(-150)));
    }

    #[test]
    fn open_gain_is_unavailable_when_either_price_is_missing() {
        let position = Position::new(String::from("ABC"), 15, date("2024-01-01"));

        assert_eq!(
            LedgerService::open_gain(&position, None, Some(dec!(60))),
            None
        );
        assert_eq!(
            LedgerService::open_gain(&position, Some(dec!(50)), None),
            None
        );
        assert_eq!(LedgerService::open_gain(&position, None, None), None);
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use chrono::NaiveDate;
    use tempfile::TempDir;

    use crate::ledger::{LedgerError, PositionStore};
    use crate::models::Position;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn round_trip_preserves_the_position_set() {
        let dir = TempDir::new().unwrap();
        let store = PositionStore::new(dir.path().join("positions.csv"));

        let mut positions = vec![
            Position::new(String::from("XYZ"), 3, date("2024-02-05")),
            Position::new(String::from("ABC"), 15, date("2024-01-01")),
        ];

        store.save(&positions).unwrap();
        let mut loaded = store.load().unwrap();

        positions.sort_by(|a, b| a.ticker().cmp(b.ticker()));
        loaded.sort_by(|a, b| a.ticker().cmp(b.ticker()));
        assert_eq!(loaded, positions);
    }

    #[test]
    fn load_of_a_missing_file_is_store_not_found() {
        let dir = TempDir::new().unwrap();
        let store = PositionStore::new(dir.path().join("positions.csv"));

        let err = store.load().unwrap_err();
        assert!(matches!(err, LedgerError::StoreNotFound { .. }));
    }

    #[test]
    fn header_row_is_skipped_on_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("positions.csv");
        fs::write(&path, "ticker,quantity,acquisition_date\nABC,10,2024-01-01\n").unwrap();

        let store = PositionStore::new(path);
        let positions = store.load().unwrap();

        assert_eq!(positions.len(), 1);
        assert_eq!(positions[0].ticker(), "ABC");
        assert_eq!(*positions[0].quantity(), 10);
    }

    #[test]
    fn headerless_file_loads_identically() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("positions.csv");
        fs::write(&path, "ABC,10,2024-01-01\nXYZ,2,2024-02-05\n").unwrap();

        let store = PositionStore::new(path);
        let positions = store.load().unwrap();

        assert_eq!(positions.len(), 2);
        assert_eq!(positions[0].ticker(), "ABC");
        assert_eq!(positions[1].ticker(), "XYZ");
    }

    #[test]
    fn rows_keep_file_order() {
        let dir = TempDir::new().unwrap();
        let store = PositionStore::new(dir.path().join("positions.csv"));

        let positions = vec![
            Position::new(String::from("ZZZ"), 1, date("2024-03-01")),
            Position::new(String::from("AAA"), 2, date("2024-03-02")),
        ];
        store.save(&positions).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded, positions);
    }

    #[test]
    fn malformed_quantity_is_an_invalid_row() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("positions.csv");
        fs::write(&path, "ABC,ten,2024-01-01\n").unwrap();

        let store = PositionStore::new(path);
        let err = store.load().unwrap_err();
        assert!(matches!(err, LedgerError::InvalidRow { row: 1, .. }));
    }

    #[test]
    fn malformed_date_is_an_invalid_row() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("positions.csv");
        fs::write(&path, "ABC,10,01/01/2024\n").unwrap();

        let store = PositionStore::new(path);
        let err = store.load().unwrap_err();
        assert!(matches!(err, LedgerError::InvalidRow { row: 1, .. }));
    }

    #[test]
    fn zero_quantity_rows_survive_a_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = PositionStore::new(dir.path().join("positions.csv"));

        let positions = vec![Position::new(String::from("ABC"), 0, date("2024-01-01"))];
        store.save(&positions).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert!(loaded[0].is_closed());
    }
}

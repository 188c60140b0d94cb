#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use crate::services::{ServiceError, credentials};

    #[test]
    fn key_is_trimmed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("api_key.txt");
        fs::write(&path, "  secret-key \n").unwrap();

        let key = credentials::read_api_key(path.to_str().unwrap()).unwrap();
        assert_eq!(key, "secret-key");
    }

    #[test]
    fn missing_file_is_missing_credential() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("api_key.txt");

        let err = credentials::read_api_key(path.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, ServiceError::MissingCredential { .. }));
    }

    #[test]
    fn empty_file_is_missing_credential() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("api_key.txt");
        fs::write(&path, "\n").unwrap();

        let err = credentials::read_api_key(path.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, ServiceError::MissingCredential { .. }));
    }
}

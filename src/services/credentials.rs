use std::fs;

use super::error::ServiceError;

pub fn read_api_key(path: &str) -> Result<String, ServiceError> {
    let contents = fs::read_to_string(path).map_err(|_| ServiceError::MissingCredential {
        path: path.to_string(),
    })?;

    let key = contents.trim().to_string();
    if key.is_empty() {
        return Err(ServiceError::MissingCredential {
            path: path.to_string(),
        });
    }

    Ok(key)
}

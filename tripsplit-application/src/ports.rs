use crate::error::StoreError;
use std::collections::HashMap;

/// String-keyed persistence supplied by the surrounding application.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl KeyValueStore for HashMap<String, String> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(HashMap::get(self, key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

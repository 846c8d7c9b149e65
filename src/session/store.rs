use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

#[derive(Debug, thiserror::Error)]
#[error("token store {path}: {source}")]
pub struct StoreError {
    path: String,
    #[source]
    source: io::Error,
}

/// Persistent home of the single session token
pub trait TokenStore: Send {
    fn load(&self) -> Result<Option<String>, StoreError>;
    fn save(&self, token: &str) -> Result<(), StoreError>;
    fn clear(&self) -> Result<(), StoreError>;
}

/// Keeps the token in one file, written whole on every save
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn error(&self, source: io::Error) -> StoreError {
        StoreError {
            path: self.path.display().to_string(),
            source,
        }
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                let token = contents.trim();
                Ok((!token.is_empty()).then(|| token.to_string()))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(self.error(e)),
        }
    }

    fn save(&self, token: &str) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| self.error(e))?;
        }
        fs::write(&self.path, token).map_err(|e| self.error(e))
    }

    fn clear(&self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.error(e)),
        }
    }
}

#[derive(Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn with_token(token: &str) -> Self {
        Self {
            token: Mutex::new(Some(token.to_string())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        Ok(self.token.lock().unwrap_or_else(|e| e.into_inner()).clone())
    }

    fn save(&self, token: &str) -> Result<(), StoreError> {
        *self.token.lock().unwrap_or_else(|e| e.into_inner()) = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        *self.token.lock().unwrap_or_else(|e| e.into_inner()) = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("jobify-store-{}-{name}", std::process::id()))
            .join("jobportal-token")
    }

    #[test]
    fn file_store_round_trip() {
        let store = FileTokenStore::new(scratch("round-trip"));
        assert_eq!(store.load().unwrap(), None);

        store.save("abc").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("abc"));

        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
        // clearing twice is fine
        store.clear().unwrap();
    }

    #[test]
    fn blank_file_means_no_token() {
        let path = scratch("blank");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "  \n").unwrap();
        assert_eq!(FileTokenStore::new(path).load().unwrap(), None);
    }
}

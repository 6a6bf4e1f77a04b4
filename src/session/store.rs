//! Token persistence backends.

/// Holder of at most one bearer token.
///
/// `set` overwrites any earlier token and `clear` always succeeds, even when
/// nothing is stored.
pub trait SessionStore: Send {
    fn get(&self) -> Option<String>;
    fn set(&mut self, token: &str);
    fn clear(&mut self);
}

/// In-process store
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    token: Option<String>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self) -> Option<String> {
        self.token.clone()
    }

    fn set(&mut self, token: &str) {
        self.token = Some(token.to_string());
    }

    fn clear(&mut self) {
        self.token = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_overwrites() {
        let mut store = MemorySessionStore::new();
        store.set("t1");
        store.set("t2");
        assert_eq!(store.get().as_deref(), Some("t2"));
    }

    #[test]
    fn test_clear_is_unconditional() {
        let mut store = MemorySessionStore::new();
        store.clear();
        assert_eq!(store.get(), None);

        store.set("t1");
        store.clear();
        assert_eq!(store.get(), None);
    }
}

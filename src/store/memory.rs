use std::cell::RefCell;

use super::PostStore;
use crate::error::{BlogError, Result};
use crate::model::Post;

/// In-memory store.
///
/// Uses `RefCell` for interior mutability since blogstore is
/// single-threaded per operation. This avoids the overhead of `RwLock`
/// while still allowing the `PostStore` trait to use `&self` for all
/// methods.
#[derive(Default)]
pub struct InMemoryStore {
    posts: RefCell<Vec<Post>>,
    simulate_write_error: RefCell<bool>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a pre-populated collection.
    pub fn with_posts(posts: Vec<Post>) -> Self {
        Self {
            posts: RefCell::new(posts),
            simulate_write_error: RefCell::new(false),
        }
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }
}

impl PostStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Post>> {
        Ok(self.posts.borrow().clone())
    }

    fn save(&self, posts: &[Post]) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(BlogError::Store("Simulated write error".to_string()));
        }
        *self.posts.borrow_mut() = posts.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store_loads_empty() {
        let store = InMemoryStore::new();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let store = InMemoryStore::new();
        let posts = vec![Post {
            id: 1,
            title: "T".to_string(),
            content: "C".to_string(),
            author: None,
            date: None,
        }];

        store.save(&posts).unwrap();
        assert_eq!(store.load().unwrap(), posts);
    }

    #[test]
    fn test_simulated_write_error() {
        let store = InMemoryStore::new();
        store.set_simulate_write_error(true);

        let err = store.save(&[]).unwrap_err();
        assert!(matches!(err, BlogError::Store(_)));
    }
}

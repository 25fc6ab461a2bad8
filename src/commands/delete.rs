use std::fmt;

use serde::Serialize;

use crate::error::{BlogError, Result};
use crate::store::PostStore;

/// Confirmation of a completed delete, naming the removed id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeleteReceipt {
    pub id: u64,
}

impl fmt::Display for DeleteReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Post {} has been deleted.", self.id)
    }
}

pub fn run<S: PostStore>(store: &S, id: u64) -> Result<DeleteReceipt> {
    let mut posts = store.load()?;
    let position = posts
        .iter()
        .position(|p| p.id == id)
        .ok_or(BlogError::PostNotFound(id))?;

    posts.remove(position);
    store.save(&posts)?;
    Ok(DeleteReceipt { id })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::create;
    use crate::config::Schema;
    use crate::model::PostDraft;
    use crate::store::memory::InMemoryStore;

    fn store_with_two_posts() -> InMemoryStore {
        let store = InMemoryStore::new();
        for title in ["First", "Second"] {
            let draft = PostDraft::new(title, "Body")
                .with_author("Ada")
                .with_date("2024-06-01");
            create::run(&store, Schema::Extended, &draft).unwrap();
        }
        store
    }

    #[test]
    fn removes_post_and_persists() {
        let store = store_with_two_posts();
        let receipt = run(&store, 1).unwrap();

        assert_eq!(receipt, DeleteReceipt { id: 1 });
        let remaining = store.load().unwrap();
        assert_eq!(remaining.len(), 1);
        assert!(remaining.iter().all(|p| p.id != 1));
    }

    #[test]
    fn unknown_id_is_not_found_and_collection_unchanged() {
        let store = store_with_two_posts();
        let before = store.load().unwrap();

        let err = run(&store, 42).unwrap_err();
        assert!(matches!(err, BlogError::PostNotFound(42)));
        assert_eq!(store.load().unwrap(), before);
    }

    #[test]
    fn receipt_renders_confirmation_message() {
        let receipt = DeleteReceipt { id: 7 };
        assert_eq!(receipt.to_string(), "Post 7 has been deleted.");
    }

    #[test]
    fn save_failure_propagates() {
        let store = store_with_two_posts();
        store.set_simulate_write_error(true);

        let err = run(&store, 1).unwrap_err();
        assert!(matches!(err, BlogError::Store(_)));
    }
}

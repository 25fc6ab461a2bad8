use crate::config::Schema;
use crate::error::Result;
use crate::model::{Post, PostDraft};
use crate::store::PostStore;
use crate::validate;

pub fn run<S: PostStore>(store: &S, schema: Schema, draft: &PostDraft) -> Result<Post> {
    let mut posts = store.load()?;
    let post = validate::validated_post(next_id(&posts), draft, schema)?;
    posts.push(post.clone());
    store.save(&posts)?;
    Ok(post)
}

/// Next id is one past the current maximum. Recomputed per create, so
/// deleting the highest-numbered post frees its id for reuse.
fn next_id(posts: &[Post]) -> u64 {
    posts.iter().map(|p| p.id).max().unwrap_or(0) + 1
}

use crate::config::Schema;
use crate::error::{BlogError, Result};
use crate::model::{Post, PostPatch};
use crate::store::PostStore;
use crate::validate;

pub fn run<S: PostStore>(store: &S, schema: Schema, id: u64, patch: &PostPatch) -> Result<Post> {
    let mut posts = store.load()?;
    let post = posts
        .iter_mut()
        .find(|p| p.id == id)
        .ok_or(BlogError::PostNotFound(id))?;

    validate::apply_patch(post, patch, schema)?;
    let updated = post.clone();
    store.save(&posts)?;
    Ok(updated)
}

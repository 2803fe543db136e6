use std::cmp;

use database::Database;
use model::Post;

/// Pagination options for `PostsService::find_many`.
///
/// Both fields are optional: a missing `skip` means "start at the front", a
/// missing `limit` means "everything after the skip". Values are signed so
/// that out-of-range caller input stays representable; negative values are
/// clamped to zero, never interpreted relative to the end of the store.
#[derive(Clone, Copy, Debug, Default)]
pub struct FindManyOptions {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

impl FindManyOptions {
    pub fn new() -> FindManyOptions {
        Default::default()
    }
}

/// In-memory post store. Each instance owns its own `Database`; there is no
/// process-wide state. Reads are total: any combination of options yields a
/// well-defined page, never an error.
#[derive(Clone, Debug, Default)]
pub struct PostsService {
    database: Database,
}

impl PostsService {
    pub fn new() -> PostsService {
        PostsService { database: Database::new() }
    }

    /// Append `post` to the store. Any shape is accepted; there is no
    /// validation and no deduplication.
    pub fn create(&mut self, post: Post) {
        debug!("storing post {:?}", post.text());
        self.database.add_post(post);
    }

    /// Return a freshly allocated page of posts selected by `options`.
    ///
    /// The page is the slice `[skip, skip + limit)` of the store, clipped to
    /// its bounds: a `skip` past the end or a `limit` of zero yields an empty
    /// page, and a page overrunning the end is truncated. The returned vector
    /// never aliases internal storage.
    pub fn find_many(&self, options: FindManyOptions) -> Vec<Post> {
        let posts = self.database.posts();

        let skip = cmp::max(options.skip.unwrap_or(0), 0) as usize;
        let start = cmp::min(skip, posts.len());
        let end = match options.limit {
            Some(limit) => {
                let limit = cmp::max(limit, 0) as usize;
                cmp::min(start.saturating_add(limit), posts.len())
            }
            None => posts.len(),
        };

        debug!("feed query skip={:?} limit={:?} -> {} of {} posts",
               options.skip,
               options.limit,
               end - start,
               posts.len());

        posts[start..end].to_vec()
    }

    /// All posts in insertion order; `find_many` with no options set.
    pub fn find_all(&self) -> Vec<Post> {
        self.find_many(FindManyOptions::new())
    }
}

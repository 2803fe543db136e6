//! An in-memory post store with `skip`/`limit` paginated reads.
//!
//! `PostsService` owns an ordered collection of `Post` records. `create`
//! appends a post, `find_many` returns a freshly allocated contiguous page
//! of the collection selected by `FindManyOptions`. All inputs normalize to
//! a valid page; out-of-range and negative offsets never fail.

#[macro_use]
extern crate log;
extern crate rustc_serialize;

mod model;
mod database;
mod service;

pub use model::Post;
pub use database::Database;
pub use service::{FindManyOptions, PostsService};

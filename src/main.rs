extern crate env_logger;
extern crate post_store;
extern crate rustc_serialize;

use post_store::{FindManyOptions, Post, PostsService};
use rustc_serialize::json;

// RUST_LOG=post_store=debug post_store
fn main() {
    env_logger::init().unwrap();

    let mut service = PostsService::new();
    service.create(Post::new("First post")
        .with_extra("author", "Mathieu"));
    service.create(Post::new("The store is now online")
        .with_extra("author", "Mathieu"));
    service.create(Post::new("Pagination works"));
    service.create(Post::new("Negative offsets clamp to zero"));
    service.create(Post::new("That is all for today"));

    let page_size = 2;
    for page in 0.. {
        let options = FindManyOptions {
            skip: Some(page * page_size),
            limit: Some(page_size),
        };
        let posts = service.find_many(options);
        if posts.is_empty() {
            break;
        }
        let payload = json::encode(&posts).unwrap();
        println!("page {}: {}", page, payload);
    }
}

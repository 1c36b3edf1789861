pub mod posts_config;

pub use posts_config::{Posts, PostsConfigMiddleware};

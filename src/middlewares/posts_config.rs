use async_trait::async_trait;
use telers::{
    errors::EventErrorKind,
    event::EventReturn,
    middlewares::{outer::MiddlewareResponse, OuterMiddleware},
    request::Request,
    FromContext,
};

use crate::config::PostsConfig;

#[derive(Debug, Clone, FromContext)]
#[context(key = "posts_config", from = PostsConfig)]
pub struct Posts(pub PostsConfig);

impl From<PostsConfig> for Posts {
    fn from(value: PostsConfig) -> Self {
        Self(value)
    }
}

pub struct PostsConfigMiddleware {
    pub key: &'static str,
    pub data: PostsConfig,
}

impl PostsConfigMiddleware {
    pub const fn new(config: PostsConfig) -> PostsConfigMiddleware {
        Self {
            key: "posts_config",
            data: config,
        }
    }
}

#[async_trait]
impl OuterMiddleware for PostsConfigMiddleware {
    async fn call(&self, mut request: Request) -> Result<MiddlewareResponse, EventErrorKind> {
        request
            .context
            .insert(self.key, Box::new(self.data.clone()));

        Ok((request, EventReturn::default()))
    }
}

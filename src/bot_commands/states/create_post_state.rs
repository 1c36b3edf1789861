use std::borrow::Cow;

#[derive(Clone)]
pub enum CreatePostState {
    Title,
    Description,
    Media,
    ButtonLabel,
    ButtonUrl,
}

impl CreatePostState {
    const fn as_str(&self) -> &'static str {
        match self {
            CreatePostState::Title => "create_post_title",
            CreatePostState::Description => "create_post_description",
            CreatePostState::Media => "create_post_media",
            CreatePostState::ButtonLabel => "create_post_button_label",
            CreatePostState::ButtonUrl => "create_post_button_url",
        }
    }
}

impl From<CreatePostState> for Cow<'static, str> {
    fn from(state: CreatePostState) -> Self {
        Cow::Borrowed(state.as_str())
    }
}

impl PartialEq<&str> for CreatePostState {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

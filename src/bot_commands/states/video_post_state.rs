use std::borrow::Cow;

#[derive(Clone)]
pub enum VideoPostState {
    Description,
    Video,
    ButtonLabel,
    ButtonUrl,
    Target,
}

impl VideoPostState {
    const fn as_str(&self) -> &'static str {
        match self {
            VideoPostState::Description => "video_post_description",
            VideoPostState::Video => "video_post_video",
            VideoPostState::ButtonLabel => "video_post_button_label",
            VideoPostState::ButtonUrl => "video_post_button_url",
            VideoPostState::Target => "video_post_target",
        }
    }
}

impl From<VideoPostState> for Cow<'static, str> {
    fn from(state: VideoPostState) -> Self {
        Cow::Borrowed(state.as_str())
    }
}

impl PartialEq<&str> for VideoPostState {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

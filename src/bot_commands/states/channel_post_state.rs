use std::borrow::Cow;

#[derive(Clone)]
pub enum ChannelPostState {
    Title,
    Description,
    Media,
    ButtonLabel,
    ButtonUrl,
    Target,
}

impl ChannelPostState {
    const fn as_str(&self) -> &'static str {
        match self {
            ChannelPostState::Title => "channel_post_title",
            ChannelPostState::Description => "channel_post_description",
            ChannelPostState::Media => "channel_post_media",
            ChannelPostState::ButtonLabel => "channel_post_button_label",
            ChannelPostState::ButtonUrl => "channel_post_button_url",
            ChannelPostState::Target => "channel_post_target",
        }
    }
}

impl From<ChannelPostState> for Cow<'static, str> {
    fn from(state: ChannelPostState) -> Self {
        Cow::Borrowed(state.as_str())
    }
}

impl PartialEq<&str> for ChannelPostState {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

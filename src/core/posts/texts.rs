use super::draft::PostTarget;

pub fn start_message(user_first_name: &str) -> String {
    format!(
        "Hello, {user_first_name}! This bot walks you through building a promo post \
        and publishes it for you.\n\
        List of commands you can use:\n\
        /help - Show help message\n\
        /cancel - Cancel post creation\n\
        /create_post - Build a post and publish it to this chat\n\
        /video_post - Build a video post and publish it to any chat or channel\n\
        /channel_post - Build a post for the directory channel\n\n\
        While building a post you can type \"restart\" to start it over \
        or \"exit\" to abandon it."
    )
}

pub fn cancel_message() -> String {
    "Post creation was canceled.".to_owned()
}

pub fn restart_message(entry_prompt: &str) -> String {
    format!("Starting the post from scratch.\n{entry_prompt}")
}

pub fn title_prompt() -> String {
    "Send me a title for your post:".to_owned()
}

pub fn description_prompt() -> String {
    "Now send me a description:".to_owned()
}

pub fn text_reprompt() -> String {
    "Please, send me a text message:".to_owned()
}

pub fn media_prompt() -> String {
    "Send me a photo for the post, or type \"skip\" to publish without one:".to_owned()
}

pub fn media_reprompt() -> String {
    "Please, send me a photo or type \"skip\":".to_owned()
}

pub fn video_prompt() -> String {
    "Send me a video for the post (as a video message or as a video file):".to_owned()
}

pub fn video_reprompt() -> String {
    "Please, send me a video:".to_owned()
}

pub fn button_label_prompt() -> String {
    "Enter a text for the post button:".to_owned()
}

pub fn button_url_prompt() -> String {
    "Now enter an URL the button will open:".to_owned()
}

pub fn target_select_prompt() -> String {
    "Where should I publish the post?".to_owned()
}

pub fn target_select_reprompt() -> String {
    "Please, choose where to publish the post using the buttons above:".to_owned()
}

pub fn target_raw_prompt() -> String {
    "Enter a channel @username or a chat id to publish the post to:".to_owned()
}

pub fn published_message() -> String {
    "The post was published.".to_owned()
}

pub fn target_ack(target: &PostTarget) -> String {
    match target {
        PostTarget::Chat(_) => "The post will be published to this chat.".to_owned(),
        PostTarget::Handle(handle) => format!("The post will be published to {handle}."),
    }
}

/// Public link to the directory channel, for the extra post button.
pub fn directory_link(directory_channel: &str) -> String {
    format!("https://t.me/{}", directory_channel.trim_start_matches('@'))
}

#[test]
fn directory_link_strips_the_handle_prefix() {
    assert_eq!(
        directory_link("@promo_directory"),
        "https://t.me/promo_directory"
    );
    assert_eq!(
        directory_link("promo_directory"),
        "https://t.me/promo_directory"
    );
}

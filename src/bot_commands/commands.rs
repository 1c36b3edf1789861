use telers::{
    client::Reqwest,
    enums::{ChatType as ChatTypeEnum, ContentType as ContentTypeEnum},
    filters::{ChatType, Command, ContentType, State as StateFilter},
    fsm::MemoryStorage,
    Filter as _, Router,
};

use super::handlers::{
    cancel, channel_post, channel_post_button_label, channel_post_button_url,
    channel_post_description, channel_post_media, channel_post_target, channel_post_target_select,
    channel_post_title, create_post, create_post_button_label, create_post_button_url,
    create_post_description, create_post_media, create_post_title, start, video_post,
    video_post_button_label, video_post_button_url, video_post_description, video_post_target,
    video_post_video,
};
use super::states::{ChannelPostState, CreatePostState, VideoPostState};

/// If the user simply writes to the bot without calling any commands, the bot
/// starts the `/create_post` wizard for them
pub async fn process_non_command(router: &mut Router<Reqwest>, ignore_commands: &'static [&str]) {
    router
        .message
        .register(create_post::<MemoryStorage>)
        .filter(StateFilter::none())
        .filter(ContentType::one(ContentTypeEnum::Text))
        .filter(Command::many(ignore_commands.iter().map(ToOwned::to_owned)).invert());
}

/// Executes Telegram commands `/start` and `/help`
pub async fn start_command(router: &mut Router<Reqwest>, commands: &'static [&str]) {
    router
        .message
        .register(start::<MemoryStorage>)
        .filter(ChatType::one(ChatTypeEnum::Private))
        .filter(Command::many(commands.iter().map(ToOwned::to_owned)));
}

/// Executes Telegram command `/cancel`
pub async fn cancel_command(router: &mut Router<Reqwest>, commands: &'static [&str]) {
    router
        .message
        .register(cancel::<MemoryStorage>)
        .filter(ChatType::one(ChatTypeEnum::Private))
        .filter(Command::many(commands.iter().map(ToOwned::to_owned)));
}

/// Executes Telegram command `/create_post`.
///
/// Step handlers take any content type and ignore commands, so `/cancel` and
/// the other entry commands keep working mid-wizard instead of being captured
/// as field values.
pub async fn create_post_command(
    router: &mut Router<Reqwest>,
    command: &'static str,
    ignore_commands: &'static [&str],
) {
    router
        .message
        .register(create_post::<MemoryStorage>)
        .filter(ChatType::one(ChatTypeEnum::Private))
        .filter(Command::one(command))
        .filter(ContentType::one(ContentTypeEnum::Text));

    router
        .message
        .register(create_post_title::<MemoryStorage>)
        .filter(StateFilter::one(CreatePostState::Title))
        .filter(Command::many(ignore_commands.iter().map(ToOwned::to_owned)).invert());

    router
        .message
        .register(create_post_description::<MemoryStorage>)
        .filter(StateFilter::one(CreatePostState::Description))
        .filter(Command::many(ignore_commands.iter().map(ToOwned::to_owned)).invert());

    router
        .message
        .register(create_post_media::<MemoryStorage>)
        .filter(StateFilter::one(CreatePostState::Media))
        .filter(Command::many(ignore_commands.iter().map(ToOwned::to_owned)).invert());

    router
        .message
        .register(create_post_button_label::<MemoryStorage>)
        .filter(StateFilter::one(CreatePostState::ButtonLabel))
        .filter(Command::many(ignore_commands.iter().map(ToOwned::to_owned)).invert());

    router
        .message
        .register(create_post_button_url::<MemoryStorage>)
        .filter(StateFilter::one(CreatePostState::ButtonUrl))
        .filter(Command::many(ignore_commands.iter().map(ToOwned::to_owned)).invert());
}

/// Executes Telegram command `/video_post`
pub async fn video_post_command(
    router: &mut Router<Reqwest>,
    command: &'static str,
    ignore_commands: &'static [&str],
) {
    router
        .message
        .register(video_post::<MemoryStorage>)
        .filter(ChatType::one(ChatTypeEnum::Private))
        .filter(Command::one(command))
        .filter(ContentType::one(ContentTypeEnum::Text));

    router
        .message
        .register(video_post_description::<MemoryStorage>)
        .filter(StateFilter::one(VideoPostState::Description))
        .filter(Command::many(ignore_commands.iter().map(ToOwned::to_owned)).invert());

    router
        .message
        .register(video_post_video::<MemoryStorage>)
        .filter(StateFilter::one(VideoPostState::Video))
        .filter(Command::many(ignore_commands.iter().map(ToOwned::to_owned)).invert());

    router
        .message
        .register(video_post_button_label::<MemoryStorage>)
        .filter(StateFilter::one(VideoPostState::ButtonLabel))
        .filter(Command::many(ignore_commands.iter().map(ToOwned::to_owned)).invert());

    router
        .message
        .register(video_post_button_url::<MemoryStorage>)
        .filter(StateFilter::one(VideoPostState::ButtonUrl))
        .filter(Command::many(ignore_commands.iter().map(ToOwned::to_owned)).invert());

    router
        .message
        .register(video_post_target::<MemoryStorage>)
        .filter(StateFilter::one(VideoPostState::Target))
        .filter(Command::many(ignore_commands.iter().map(ToOwned::to_owned)).invert());
}

/// Executes Telegram command `/channel_post`
pub async fn channel_post_command(
    router: &mut Router<Reqwest>,
    command: &'static str,
    ignore_commands: &'static [&str],
) {
    router
        .message
        .register(channel_post::<MemoryStorage>)
        .filter(ChatType::one(ChatTypeEnum::Private))
        .filter(Command::one(command))
        .filter(ContentType::one(ContentTypeEnum::Text));

    router
        .message
        .register(channel_post_title::<MemoryStorage>)
        .filter(StateFilter::one(ChannelPostState::Title))
        .filter(Command::many(ignore_commands.iter().map(ToOwned::to_owned)).invert());

    router
        .message
        .register(channel_post_description::<MemoryStorage>)
        .filter(StateFilter::one(ChannelPostState::Description))
        .filter(Command::many(ignore_commands.iter().map(ToOwned::to_owned)).invert());

    router
        .message
        .register(channel_post_media::<MemoryStorage>)
        .filter(StateFilter::one(ChannelPostState::Media))
        .filter(Command::many(ignore_commands.iter().map(ToOwned::to_owned)).invert());

    router
        .message
        .register(channel_post_button_label::<MemoryStorage>)
        .filter(StateFilter::one(ChannelPostState::ButtonLabel))
        .filter(Command::many(ignore_commands.iter().map(ToOwned::to_owned)).invert());

    router
        .message
        .register(channel_post_button_url::<MemoryStorage>)
        .filter(StateFilter::one(ChannelPostState::ButtonUrl))
        .filter(Command::many(ignore_commands.iter().map(ToOwned::to_owned)).invert());

    router
        .message
        .register(channel_post_target::<MemoryStorage>)
        .filter(StateFilter::one(ChannelPostState::Target))
        .filter(Command::many(ignore_commands.iter().map(ToOwned::to_owned)).invert());

    router
        .callback_query
        .register(channel_post_target_select::<MemoryStorage>)
        .filter(StateFilter::one(ChannelPostState::Target));
}

use telers::{
    event::{telegram::HandlerResult, EventReturn},
    fsm::{Context, Storage},
    methods::SendMessage,
    types::{Message, MessageText},
    Bot,
};

use crate::bot_commands::states::VideoPostState;
use crate::core::posts::{constants::DRAFT_KEY, draft::PostDraft, event::Event, flow, texts};

use super::common::{apply_outcome, current_draft};

pub async fn video_post<S: Storage>(
    bot: Bot,
    message: MessageText,
    fsm: Context<S>,
) -> HandlerResult {
    fsm.finish().await.map_err(Into::into)?;

    fsm.set_value(DRAFT_KEY, PostDraft::default())
        .await
        .map_err(Into::into)?;
    fsm.set_state(VideoPostState::Description)
        .await
        .map_err(Into::into)?;

    bot.send(SendMessage::new(
        message.chat.id(),
        texts::description_prompt(),
    ))
    .await?;

    Ok(EventReturn::Finish)
}

pub async fn video_post_description<S: Storage>(
    bot: Bot,
    message: Message,
    fsm: Context<S>,
) -> HandlerResult {
    drive(bot, message, fsm, VideoPostState::Description).await
}

pub async fn video_post_video<S: Storage>(
    bot: Bot,
    message: Message,
    fsm: Context<S>,
) -> HandlerResult {
    drive(bot, message, fsm, VideoPostState::Video).await
}

pub async fn video_post_button_label<S: Storage>(
    bot: Bot,
    message: Message,
    fsm: Context<S>,
) -> HandlerResult {
    drive(bot, message, fsm, VideoPostState::ButtonLabel).await
}

pub async fn video_post_button_url<S: Storage>(
    bot: Bot,
    message: Message,
    fsm: Context<S>,
) -> HandlerResult {
    drive(bot, message, fsm, VideoPostState::ButtonUrl).await
}

pub async fn video_post_target<S: Storage>(
    bot: Bot,
    message: Message,
    fsm: Context<S>,
) -> HandlerResult {
    drive(bot, message, fsm, VideoPostState::Target).await
}

async fn drive<S: Storage>(
    bot: Bot,
    message: Message,
    fsm: Context<S>,
    state: VideoPostState,
) -> HandlerResult {
    let chat_id = message.chat().id();
    let event = Event::from_message(&message);

    let mut draft = current_draft(&fsm).await?;
    let outcome = flow::video_post(state, &mut draft, event);

    apply_outcome(&bot, &fsm, chat_id, draft, outcome).await
}

use telers::{
    event::{telegram::HandlerResult, EventReturn},
    fsm::{Context, Storage},
    methods::SendMessage,
    types::{Message, MessageText},
    Bot,
};

use crate::bot_commands::states::CreatePostState;
use crate::core::posts::{constants::DRAFT_KEY, draft::PostDraft, event::Event, flow, texts};

use super::common::{apply_outcome, current_draft};

pub async fn create_post<S: Storage>(
    bot: Bot,
    message: MessageText,
    fsm: Context<S>,
) -> HandlerResult {
    fsm.finish().await.map_err(Into::into)?;

    fsm.set_value(DRAFT_KEY, PostDraft::default())
        .await
        .map_err(Into::into)?;
    fsm.set_state(CreatePostState::Title)
        .await
        .map_err(Into::into)?;

    bot.send(SendMessage::new(message.chat.id(), texts::title_prompt()))
        .await?;

    Ok(EventReturn::Finish)
}

pub async fn create_post_title<S: Storage>(
    bot: Bot,
    message: Message,
    fsm: Context<S>,
) -> HandlerResult {
    drive(bot, message, fsm, CreatePostState::Title).await
}

pub async fn create_post_description<S: Storage>(
    bot: Bot,
    message: Message,
    fsm: Context<S>,
) -> HandlerResult {
    drive(bot, message, fsm, CreatePostState::Description).await
}

pub async fn create_post_media<S: Storage>(
    bot: Bot,
    message: Message,
    fsm: Context<S>,
) -> HandlerResult {
    drive(bot, message, fsm, CreatePostState::Media).await
}

pub async fn create_post_button_label<S: Storage>(
    bot: Bot,
    message: Message,
    fsm: Context<S>,
) -> HandlerResult {
    drive(bot, message, fsm, CreatePostState::ButtonLabel).await
}

pub async fn create_post_button_url<S: Storage>(
    bot: Bot,
    message: Message,
    fsm: Context<S>,
) -> HandlerResult {
    drive(bot, message, fsm, CreatePostState::ButtonUrl).await
}

async fn drive<S: Storage>(
    bot: Bot,
    message: Message,
    fsm: Context<S>,
    state: CreatePostState,
) -> HandlerResult {
    let chat_id = message.chat().id();
    let event = Event::from_message(&message);

    let mut draft = current_draft(&fsm).await?;
    let outcome = flow::create_post(state, &mut draft, event, chat_id);

    apply_outcome(&bot, &fsm, chat_id, draft, outcome).await
}

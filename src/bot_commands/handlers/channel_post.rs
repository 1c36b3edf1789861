use telers::{
    event::{telegram::HandlerResult, EventReturn},
    fsm::{Context, Storage},
    methods::{EditMessageText, SendMessage},
    types::{CallbackQuery, Message, MessageText},
    Bot,
};

use crate::bot_commands::states::ChannelPostState;
use crate::config::PostsConfig;
use crate::core::posts::{
    constants::{DRAFT_KEY, TARGET_PROMPT_KEY},
    draft::PostDraft,
    event::Event,
    flow,
    outcome::Outcome,
    texts,
};
use crate::middlewares::Posts;

use super::common::{apply_outcome, current_draft};

pub async fn channel_post<S: Storage>(
    bot: Bot,
    message: MessageText,
    fsm: Context<S>,
) -> HandlerResult {
    fsm.finish().await.map_err(Into::into)?;

    fsm.set_value(DRAFT_KEY, PostDraft::default())
        .await
        .map_err(Into::into)?;
    fsm.set_state(ChannelPostState::Title)
        .await
        .map_err(Into::into)?;

    bot.send(SendMessage::new(message.chat.id(), texts::title_prompt()))
        .await?;

    Ok(EventReturn::Finish)
}

pub async fn channel_post_title<S: Storage>(
    bot: Bot,
    message: Message,
    Posts(posts): Posts,
    fsm: Context<S>,
) -> HandlerResult {
    drive(bot, message, posts, fsm, ChannelPostState::Title).await
}

pub async fn channel_post_description<S: Storage>(
    bot: Bot,
    message: Message,
    Posts(posts): Posts,
    fsm: Context<S>,
) -> HandlerResult {
    drive(bot, message, posts, fsm, ChannelPostState::Description).await
}

pub async fn channel_post_media<S: Storage>(
    bot: Bot,
    message: Message,
    Posts(posts): Posts,
    fsm: Context<S>,
) -> HandlerResult {
    drive(bot, message, posts, fsm, ChannelPostState::Media).await
}

pub async fn channel_post_button_label<S: Storage>(
    bot: Bot,
    message: Message,
    Posts(posts): Posts,
    fsm: Context<S>,
) -> HandlerResult {
    drive(bot, message, posts, fsm, ChannelPostState::ButtonLabel).await
}

pub async fn channel_post_button_url<S: Storage>(
    bot: Bot,
    message: Message,
    Posts(posts): Posts,
    fsm: Context<S>,
) -> HandlerResult {
    drive(bot, message, posts, fsm, ChannelPostState::ButtonUrl).await
}

/// Text sent while the target keyboard is shown: escapes still work, anything
/// else re-prompts towards the buttons.
pub async fn channel_post_target<S: Storage>(
    bot: Bot,
    message: Message,
    Posts(posts): Posts,
    fsm: Context<S>,
) -> HandlerResult {
    drive(bot, message, posts, fsm, ChannelPostState::Target).await
}

pub async fn channel_post_target_select<S: Storage>(
    bot: Bot,
    query: CallbackQuery,
    Posts(posts): Posts,
    fsm: Context<S>,
) -> HandlerResult {
    let chat_id = match query.chat_id() {
        Some(chat_id) => chat_id,
        None => return Ok(EventReturn::Finish),
    };

    let event = Event::Select(match query.data {
        Some(data) => data.to_string(),
        None => String::new(),
    });

    let mut draft = current_draft(&fsm).await?;
    let outcome = flow::channel_post(ChannelPostState::Target, &mut draft, event, chat_id, &posts);

    if let Outcome::Publish { post, .. } = &outcome {
        // acknowledge the selection on the keyboard message itself
        let prompt_message_id: Option<i64> = fsm
            .get_value(TARGET_PROMPT_KEY)
            .await
            .map_err(Into::into)?;

        if let Some(message_id) = prompt_message_id {
            bot.send(
                EditMessageText::new(texts::target_ack(&post.target))
                    .chat_id(chat_id)
                    .message_id(message_id),
            )
            .await?;
        }
    }

    apply_outcome(&bot, &fsm, chat_id, draft, outcome).await
}

async fn drive<S: Storage>(
    bot: Bot,
    message: Message,
    posts: PostsConfig,
    fsm: Context<S>,
    state: ChannelPostState,
) -> HandlerResult {
    let chat_id = message.chat().id();
    let event = Event::from_message(&message);

    let mut draft = current_draft(&fsm).await?;
    let outcome = flow::channel_post(state, &mut draft, event, chat_id, &posts);

    apply_outcome(&bot, &fsm, chat_id, draft, outcome).await
}

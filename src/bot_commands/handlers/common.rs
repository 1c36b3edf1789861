use std::borrow::Cow;

use telers::{
    errors::HandlerError,
    event::{telegram::HandlerResult, EventReturn},
    fsm::{Context, Storage},
    methods::{SendMessage, SendPhoto, SendVideo},
    types::{ChatIdKind, InputFile, ReplyMarkup},
    Bot,
};
use tracing::debug;

use crate::core::posts::{
    constants::{DRAFT_KEY, TARGET_PROMPT_KEY},
    draft::{Post, PostDraft, PostMedia, PostTarget},
    keyboard,
    outcome::Outcome,
};

pub async fn current_draft<S: Storage>(fsm: &Context<S>) -> Result<PostDraft, HandlerError> {
    let draft: Option<PostDraft> = fsm.get_value(DRAFT_KEY).await.map_err(Into::into)?;

    Ok(draft.unwrap_or_default())
}

/// Applies one transition outcome: persists the draft, moves the session
/// state and sends exactly one reply. A publish performs the single outbound
/// send before the session is finished.
pub async fn apply_outcome<St, S>(
    bot: &Bot,
    fsm: &Context<St>,
    chat_id: i64,
    draft: PostDraft,
    outcome: Outcome<S>,
) -> HandlerResult
where
    St: Storage,
    S: Into<Cow<'static, str>> + Send,
{
    match outcome {
        Outcome::Advance {
            state,
            prompt,
            markup,
        } => {
            fsm.set_value(DRAFT_KEY, draft).await.map_err(Into::into)?;
            fsm.set_state(state).await.map_err(Into::into)?;

            match markup {
                Some(markup) => {
                    let sent = bot
                        .send(
                            SendMessage::new(chat_id, prompt)
                                .reply_markup(ReplyMarkup::InlineKeyboard(markup)),
                        )
                        .await?;

                    // remembered so the selection handler can edit this message
                    fsm.set_value(TARGET_PROMPT_KEY, sent.id())
                        .await
                        .map_err(Into::into)?;
                }
                None => {
                    bot.send(SendMessage::new(chat_id, prompt)).await?;
                }
            }
        }
        Outcome::Reprompt { prompt } => {
            bot.send(SendMessage::new(chat_id, prompt)).await?;
        }
        Outcome::Restart { state, prompt } => {
            fsm.set_value(DRAFT_KEY, draft).await.map_err(Into::into)?;
            fsm.set_state(state).await.map_err(Into::into)?;

            bot.send(SendMessage::new(chat_id, prompt)).await?;
        }
        Outcome::Abort { reply } => {
            fsm.finish().await.map_err(Into::into)?;

            bot.send(SendMessage::new(chat_id, reply)).await?;
        }
        Outcome::Publish { post, confirm } => {
            fsm.finish().await.map_err(Into::into)?;

            debug!(chat_id, "publishing post");

            send_post(bot, post).await?;

            if let Some(confirm) = confirm {
                bot.send(SendMessage::new(chat_id, confirm)).await?;
            }
        }
    }

    Ok(EventReturn::Finish)
}

async fn send_post(bot: &Bot, post: Post) -> HandlerResult {
    let target: ChatIdKind = match post.target {
        PostTarget::Chat(chat_id) => ChatIdKind::Id(chat_id),
        PostTarget::Handle(handle) => ChatIdKind::Username(handle.into()),
    };

    let markup = ReplyMarkup::InlineKeyboard(keyboard::post_buttons(&post.buttons));

    match post.media {
        Some(PostMedia::Photo(file_id)) => {
            bot.send(
                SendPhoto::new(target, InputFile::id(file_id.as_str()))
                    .caption(post.caption)
                    .reply_markup(markup),
            )
            .await?;
        }
        Some(PostMedia::Video(file_id)) => {
            bot.send(
                SendVideo::new(target, InputFile::id(file_id.as_str()))
                    .caption(post.caption)
                    .reply_markup(markup),
            )
            .await?;
        }
        None => {
            bot.send(SendMessage::new(target, post.caption).reply_markup(markup))
                .await?;
        }
    }

    Ok(EventReturn::Finish)
}

use telers::{
    event::{telegram::HandlerResult, EventReturn},
    fsm::{Context, Storage},
    methods::SendMessage,
    types::MessageText,
    Bot,
};

use crate::core::posts::texts::cancel_message;

pub async fn cancel<S: Storage>(bot: Bot, message: MessageText, fsm: Context<S>) -> HandlerResult {
    fsm.finish().await.map_err(Into::into)?;

    bot.send(SendMessage::new(message.chat.id(), cancel_message()))
        .await?;

    Ok(EventReturn::Cancel)
}

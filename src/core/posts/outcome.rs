use telers::types::InlineKeyboardMarkup;

use super::draft::Post;

/// What a wizard transition decided to do with one inbound event.
pub enum Outcome<S> {
    /// Input accepted, move the session to the next step.
    Advance {
        state: S,
        prompt: String,
        markup: Option<InlineKeyboardMarkup>,
    },
    /// Input rejected, stay on the current step.
    Reprompt { prompt: String },
    /// Restart token: back to the first step with an empty draft.
    Restart { state: S, prompt: String },
    /// Exit token: the session is abandoned.
    Abort { reply: String },
    /// Every field collected, perform the single outbound send.
    Publish { post: Post, confirm: Option<String> },
}

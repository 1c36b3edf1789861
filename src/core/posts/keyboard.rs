use telers::types::{InlineKeyboardButton, InlineKeyboardMarkup};

use super::constants::{TARGET_DIRECTORY, TARGET_THIS_CHAT};
use super::draft::PostButton;

/// One URL button per row, in the order the buttons were collected.
pub fn post_buttons(buttons: &[PostButton]) -> InlineKeyboardMarkup {
    let rows = buttons
        .iter()
        .map(|button| vec![InlineKeyboardButton::new(button.label.as_str()).url(button.url.as_str())])
        .collect::<Vec<_>>();

    InlineKeyboardMarkup::new(rows)
}

pub fn target_select() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![
        InlineKeyboardButton::new("Directory channel").callback_data(TARGET_DIRECTORY),
        InlineKeyboardButton::new("This chat").callback_data(TARGET_THIS_CHAT),
    ]])
}

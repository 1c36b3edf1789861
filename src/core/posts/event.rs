use telers::types::Message;

use super::constants::{EXIT_TOKEN, RESTART_TOKEN};

/// One inbound wizard input, reduced to the payload the transition cares
/// about: free text, a media attachment or a callback selection.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Text(String),
    Photo { file_id: String },
    Video { file_id: String },
    Select(String),
    Unsupported,
}

/// Universal escape inputs, recognized before any field validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Escape {
    Restart,
    Exit,
}

impl Event {
    pub fn from_message(message: &Message) -> Self {
        match message {
            Message::Text(message) => Self::Text(message.text.to_string()),
            Message::Photo(message) => match message.photo.last() {
                // sizes come in ascending order, the last one is the largest
                Some(size) => Self::Photo {
                    file_id: size.file_id.to_string(),
                },
                None => Self::Unsupported,
            },
            Message::Video(message) => Self::Video {
                file_id: message.video.file_id.to_string(),
            },
            Message::Document(message) => {
                let mime_is_video = message
                    .document
                    .mime_type
                    .as_deref()
                    .is_some_and(|mime| mime.starts_with("video/"));

                if mime_is_video {
                    Self::Video {
                        file_id: message.document.file_id.to_string(),
                    }
                } else {
                    Self::Unsupported
                }
            }
            _ => Self::Unsupported,
        }
    }

    /// Non-empty free text, if that is what arrived.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text(text) if !text.is_empty() => Some(text),
            _ => None,
        }
    }

    pub fn escape(&self) -> Option<Escape> {
        let token = self.text()?.trim();

        if token.eq_ignore_ascii_case(RESTART_TOKEN) {
            Some(Escape::Restart)
        } else if token.eq_ignore_ascii_case(EXIT_TOKEN) {
            Some(Escape::Exit)
        } else {
            None
        }
    }
}

#[test]
fn escape_tokens_are_case_insensitive() {
    assert_eq!(
        Event::Text("exit".to_owned()).escape(),
        Some(Escape::Exit)
    );
    assert_eq!(
        Event::Text(" EXIT ".to_owned()).escape(),
        Some(Escape::Exit)
    );
    assert_eq!(
        Event::Text("Restart".to_owned()).escape(),
        Some(Escape::Restart)
    );
    assert_eq!(Event::Text("exit now".to_owned()).escape(), None);
}

#[test]
fn escape_ignores_non_text_events() {
    let event = Event::Photo {
        file_id: "exit".to_owned(),
    };

    assert_eq!(event.escape(), None);
    assert_eq!(Event::Select("exit".to_owned()).escape(), None);
}

#[test]
fn empty_text_is_not_a_field_value() {
    assert_eq!(Event::Text(String::new()).text(), None);
    assert_eq!(Event::Unsupported.text(), None);
    assert_eq!(Event::Text("Sale".to_owned()).text(), Some("Sale"));
}

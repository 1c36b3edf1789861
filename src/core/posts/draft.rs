use serde::{Deserialize, Serialize};

/// Media captured at the media step of a wizard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PostMedia {
    Photo(String),
    Video(String),
}

/// Distinguishes "the user skipped the media step" from "the media step was
/// not reached yet", which both would be `None` on a plain optional field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MediaCapture {
    Attached(PostMedia),
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostButton {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PostTarget {
    Chat(i64),
    Handle(String),
}

impl PostTarget {
    /// Parses a user-supplied raw target: a numeric chat id or a `@username`.
    pub fn from_raw(raw: &str) -> Self {
        let raw = raw.trim();

        match raw.parse::<i64>() {
            Ok(chat_id) => Self::Chat(chat_id),
            Err(_) => Self::Handle(raw.to_owned()),
        }
    }
}

/// Per-session scratch record of a wizard, one optional field per step.
/// A field is filled exactly once, in step order, so a value is only ever
/// present for steps the session has already passed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostDraft {
    pub title: Option<String>,
    pub description: Option<String>,
    pub media: Option<MediaCapture>,
    pub button_label: Option<String>,
    pub button_url: Option<String>,
    pub target: Option<PostTarget>,
}

/// A finished post, ready for the single outbound send.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub target: PostTarget,
    pub caption: String,
    pub media: Option<PostMedia>,
    pub buttons: Vec<PostButton>,
}

impl PostDraft {
    /// Title and description separated by a blank line, or the description
    /// alone for flows that collect no title.
    pub fn caption(&self) -> String {
        match (&self.title, &self.description) {
            (Some(title), Some(description)) => format!("{title}\n\n{description}"),
            (Some(title), None) => title.clone(),
            (None, Some(description)) => description.clone(),
            (None, None) => String::new(),
        }
    }

    pub fn button(&self) -> Option<PostButton> {
        match (&self.button_label, &self.button_url) {
            (Some(label), Some(url)) => Some(PostButton {
                label: label.clone(),
                url: url.clone(),
            }),
            _ => None,
        }
    }

    pub fn to_post(&self, target: PostTarget) -> Post {
        let media = match &self.media {
            Some(MediaCapture::Attached(media)) => Some(media.clone()),
            _ => None,
        };

        Post {
            target,
            caption: self.caption(),
            media,
            buttons: self.button().into_iter().collect(),
        }
    }
}

#[test]
fn caption_joins_title_and_description_with_blank_line() {
    let draft = PostDraft {
        title: Some("Sale".to_owned()),
        description: Some("50% off".to_owned()),
        ..Default::default()
    };

    assert_eq!(draft.caption(), "Sale\n\n50% off");
}

#[test]
fn caption_without_title_is_description_alone() {
    let draft = PostDraft {
        description: Some("50% off".to_owned()),
        ..Default::default()
    };

    assert_eq!(draft.caption(), "50% off");
}

#[test]
fn raw_target_parses_chat_id_or_handle() {
    assert_eq!(
        PostTarget::from_raw("-1001234567890"),
        PostTarget::Chat(-1001234567890)
    );
    assert_eq!(
        PostTarget::from_raw(" @promo_channel "),
        PostTarget::Handle("@promo_channel".to_owned())
    );
}

#[test]
fn skipped_media_publishes_without_media() {
    let draft = PostDraft {
        title: Some("Sale".to_owned()),
        description: Some("50% off".to_owned()),
        media: Some(MediaCapture::Skipped),
        button_label: Some("Shop".to_owned()),
        button_url: Some("https://x.test".to_owned()),
        ..Default::default()
    };

    let post = draft.to_post(PostTarget::Chat(1));

    assert_eq!(post.media, None);
    assert_eq!(
        post.buttons,
        vec![PostButton {
            label: "Shop".to_owned(),
            url: "https://x.test".to_owned(),
        }]
    );
}

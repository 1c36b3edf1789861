use crate::bot_commands::states::{ChannelPostState, CreatePostState, VideoPostState};
use crate::config::PostsConfig;

use super::constants::{DIRECTORY_BUTTON_LABEL, SKIP_TOKEN, TARGET_DIRECTORY, TARGET_THIS_CHAT};
use super::draft::{MediaCapture, PostButton, PostDraft, PostMedia, PostTarget};
use super::event::{Escape, Event};
use super::keyboard;
use super::outcome::Outcome;
use super::texts;

fn escaped<S>(escape: Escape, draft: &mut PostDraft, entry_state: S, entry_prompt: String) -> Outcome<S> {
    match escape {
        Escape::Exit => Outcome::Abort {
            reply: texts::cancel_message(),
        },
        Escape::Restart => {
            *draft = PostDraft::default();

            Outcome::Restart {
                state: entry_state,
                prompt: texts::restart_message(&entry_prompt),
            }
        }
    }
}

/// Walks one step of the `/create_post` wizard: title, description, optional
/// photo, button label, button URL, then one publish into the chat the wizard
/// was started in.
pub fn create_post(
    state: CreatePostState,
    draft: &mut PostDraft,
    event: Event,
    origin_chat: i64,
) -> Outcome<CreatePostState> {
    if let Some(escape) = event.escape() {
        return escaped(escape, draft, CreatePostState::Title, texts::title_prompt());
    }

    match state {
        CreatePostState::Title => match event.text() {
            Some(title) => {
                draft.title = Some(title.to_owned());

                Outcome::Advance {
                    state: CreatePostState::Description,
                    prompt: texts::description_prompt(),
                    markup: None,
                }
            }
            None => Outcome::Reprompt {
                prompt: texts::text_reprompt(),
            },
        },
        CreatePostState::Description => match event.text() {
            Some(description) => {
                draft.description = Some(description.to_owned());

                Outcome::Advance {
                    state: CreatePostState::Media,
                    prompt: texts::media_prompt(),
                    markup: None,
                }
            }
            None => Outcome::Reprompt {
                prompt: texts::text_reprompt(),
            },
        },
        CreatePostState::Media => match event {
            Event::Photo { file_id } => {
                draft.media = Some(MediaCapture::Attached(PostMedia::Photo(file_id)));

                Outcome::Advance {
                    state: CreatePostState::ButtonLabel,
                    prompt: texts::button_label_prompt(),
                    markup: None,
                }
            }
            Event::Text(ref text) if text.trim().eq_ignore_ascii_case(SKIP_TOKEN) => {
                draft.media = Some(MediaCapture::Skipped);

                Outcome::Advance {
                    state: CreatePostState::ButtonLabel,
                    prompt: texts::button_label_prompt(),
                    markup: None,
                }
            }
            _ => Outcome::Reprompt {
                prompt: texts::media_reprompt(),
            },
        },
        CreatePostState::ButtonLabel => match event.text() {
            Some(label) => {
                draft.button_label = Some(label.to_owned());

                Outcome::Advance {
                    state: CreatePostState::ButtonUrl,
                    prompt: texts::button_url_prompt(),
                    markup: None,
                }
            }
            None => Outcome::Reprompt {
                prompt: texts::text_reprompt(),
            },
        },
        CreatePostState::ButtonUrl => match event.text() {
            Some(url) => {
                draft.button_url = Some(url.to_owned());

                Outcome::Publish {
                    post: draft.to_post(PostTarget::Chat(origin_chat)),
                    confirm: None,
                }
            }
            None => Outcome::Reprompt {
                prompt: texts::text_reprompt(),
            },
        },
    }
}

/// Walks one step of the `/video_post` wizard: description, mandatory video,
/// button label, button URL, then a raw target id to publish to. The caption
/// of a video post is the description alone.
pub fn video_post(
    state: VideoPostState,
    draft: &mut PostDraft,
    event: Event,
) -> Outcome<VideoPostState> {
    if let Some(escape) = event.escape() {
        return escaped(
            escape,
            draft,
            VideoPostState::Description,
            texts::description_prompt(),
        );
    }

    match state {
        VideoPostState::Description => match event.text() {
            Some(description) => {
                draft.description = Some(description.to_owned());

                Outcome::Advance {
                    state: VideoPostState::Video,
                    prompt: texts::video_prompt(),
                    markup: None,
                }
            }
            None => Outcome::Reprompt {
                prompt: texts::text_reprompt(),
            },
        },
        VideoPostState::Video => match event {
            Event::Video { file_id } => {
                draft.media = Some(MediaCapture::Attached(PostMedia::Video(file_id)));

                Outcome::Advance {
                    state: VideoPostState::ButtonLabel,
                    prompt: texts::button_label_prompt(),
                    markup: None,
                }
            }
            // no skip here: a video post without a video makes no sense
            _ => Outcome::Reprompt {
                prompt: texts::video_reprompt(),
            },
        },
        VideoPostState::ButtonLabel => match event.text() {
            Some(label) => {
                draft.button_label = Some(label.to_owned());

                Outcome::Advance {
                    state: VideoPostState::ButtonUrl,
                    prompt: texts::button_url_prompt(),
                    markup: None,
                }
            }
            None => Outcome::Reprompt {
                prompt: texts::text_reprompt(),
            },
        },
        VideoPostState::ButtonUrl => match event.text() {
            Some(url) => {
                draft.button_url = Some(url.to_owned());

                Outcome::Advance {
                    state: VideoPostState::Target,
                    prompt: texts::target_raw_prompt(),
                    markup: None,
                }
            }
            None => Outcome::Reprompt {
                prompt: texts::text_reprompt(),
            },
        },
        VideoPostState::Target => match event.text() {
            Some(raw) => {
                let target = PostTarget::from_raw(raw);
                draft.target = Some(target.clone());

                Outcome::Publish {
                    post: draft.to_post(target),
                    confirm: Some(texts::published_message()),
                }
            }
            None => Outcome::Reprompt {
                prompt: texts::text_reprompt(),
            },
        },
    }
}

/// Walks one step of the `/channel_post` wizard: the `/create_post` fields
/// followed by an inline-keyboard choice between the directory channel and
/// the chat the wizard runs in. Published posts carry the user's button plus
/// a fixed button linking to the directory channel.
pub fn channel_post(
    state: ChannelPostState,
    draft: &mut PostDraft,
    event: Event,
    origin_chat: i64,
    posts: &PostsConfig,
) -> Outcome<ChannelPostState> {
    if let Some(escape) = event.escape() {
        return escaped(escape, draft, ChannelPostState::Title, texts::title_prompt());
    }

    match state {
        ChannelPostState::Title => match event.text() {
            Some(title) => {
                draft.title = Some(title.to_owned());

                Outcome::Advance {
                    state: ChannelPostState::Description,
                    prompt: texts::description_prompt(),
                    markup: None,
                }
            }
            None => Outcome::Reprompt {
                prompt: texts::text_reprompt(),
            },
        },
        ChannelPostState::Description => match event.text() {
            Some(description) => {
                draft.description = Some(description.to_owned());

                Outcome::Advance {
                    state: ChannelPostState::Media,
                    prompt: texts::media_prompt(),
                    markup: None,
                }
            }
            None => Outcome::Reprompt {
                prompt: texts::text_reprompt(),
            },
        },
        ChannelPostState::Media => match event {
            Event::Photo { file_id } => {
                draft.media = Some(MediaCapture::Attached(PostMedia::Photo(file_id)));

                Outcome::Advance {
                    state: ChannelPostState::ButtonLabel,
                    prompt: texts::button_label_prompt(),
                    markup: None,
                }
            }
            Event::Text(ref text) if text.trim().eq_ignore_ascii_case(SKIP_TOKEN) => {
                draft.media = Some(MediaCapture::Skipped);

                Outcome::Advance {
                    state: ChannelPostState::ButtonLabel,
                    prompt: texts::button_label_prompt(),
                    markup: None,
                }
            }
            _ => Outcome::Reprompt {
                prompt: texts::media_reprompt(),
            },
        },
        ChannelPostState::ButtonLabel => match event.text() {
            Some(label) => {
                draft.button_label = Some(label.to_owned());

                Outcome::Advance {
                    state: ChannelPostState::ButtonUrl,
                    prompt: texts::button_url_prompt(),
                    markup: None,
                }
            }
            None => Outcome::Reprompt {
                prompt: texts::text_reprompt(),
            },
        },
        ChannelPostState::ButtonUrl => match event.text() {
            Some(url) => {
                draft.button_url = Some(url.to_owned());

                Outcome::Advance {
                    state: ChannelPostState::Target,
                    prompt: texts::target_select_prompt(),
                    markup: Some(keyboard::target_select()),
                }
            }
            None => Outcome::Reprompt {
                prompt: texts::text_reprompt(),
            },
        },
        ChannelPostState::Target => match event {
            Event::Select(ref selection) => {
                let target = if selection == TARGET_DIRECTORY {
                    PostTarget::Handle(posts.directory_channel.clone())
                } else if selection == TARGET_THIS_CHAT {
                    PostTarget::Chat(origin_chat)
                } else {
                    return Outcome::Reprompt {
                        prompt: texts::target_select_reprompt(),
                    };
                };

                draft.target = Some(target.clone());

                let mut post = draft.to_post(target);
                post.buttons.push(PostButton {
                    label: DIRECTORY_BUTTON_LABEL.to_owned(),
                    url: texts::directory_link(&posts.directory_channel),
                });

                Outcome::Publish {
                    post,
                    confirm: Some(texts::published_message()),
                }
            }
            _ => Outcome::Reprompt {
                prompt: texts::target_select_reprompt(),
            },
        },
    }
}

#[cfg(test)]
fn text_event(text: &str) -> Event {
    Event::Text(text.to_owned())
}

#[cfg(test)]
fn posts_config() -> PostsConfig {
    PostsConfig {
        directory_channel: "@promo_directory".to_owned(),
    }
}

#[test]
fn create_post_collects_fields_in_step_order() {
    let mut draft = PostDraft::default();

    let outcome = create_post(CreatePostState::Title, &mut draft, text_event("Sale"), 1);
    assert!(matches!(
        outcome,
        Outcome::Advance {
            state: CreatePostState::Description,
            ..
        }
    ));
    assert_eq!(draft.title.as_deref(), Some("Sale"));
    assert_eq!(draft.description, None);
    assert_eq!(draft.media, None);
    assert_eq!(draft.button_label, None);
    assert_eq!(draft.button_url, None);
    assert_eq!(draft.target, None);

    let outcome = create_post(
        CreatePostState::Description,
        &mut draft,
        text_event("50% off"),
        1,
    );
    assert!(matches!(
        outcome,
        Outcome::Advance {
            state: CreatePostState::Media,
            ..
        }
    ));
    assert_eq!(draft.description.as_deref(), Some("50% off"));
    assert_eq!(draft.media, None);
    assert_eq!(draft.button_label, None);
}

#[test]
fn create_post_worked_example_publishes_text_only() {
    let mut draft = PostDraft::default();

    create_post(CreatePostState::Title, &mut draft, text_event("Sale"), 7);
    create_post(
        CreatePostState::Description,
        &mut draft,
        text_event("50% off"),
        7,
    );
    create_post(CreatePostState::Media, &mut draft, text_event("skip"), 7);
    create_post(
        CreatePostState::ButtonLabel,
        &mut draft,
        text_event("Shop"),
        7,
    );
    let outcome = create_post(
        CreatePostState::ButtonUrl,
        &mut draft,
        text_event("https://x.test"),
        7,
    );

    match outcome {
        Outcome::Publish { post, confirm } => {
            assert_eq!(post.caption, "Sale\n\n50% off");
            assert_eq!(post.media, None);
            assert_eq!(post.target, PostTarget::Chat(7));
            assert_eq!(
                post.buttons,
                vec![PostButton {
                    label: "Shop".to_owned(),
                    url: "https://x.test".to_owned(),
                }]
            );
            assert_eq!(confirm, None);
        }
        _ => panic!("expected a publish"),
    }
}

#[test]
fn create_post_with_photo_publishes_photo_with_caption() {
    let mut draft = PostDraft::default();

    create_post(CreatePostState::Title, &mut draft, text_event("Sale"), 7);
    create_post(
        CreatePostState::Description,
        &mut draft,
        text_event("50% off"),
        7,
    );
    let outcome = create_post(
        CreatePostState::Media,
        &mut draft,
        Event::Photo {
            file_id: "photo42".to_owned(),
        },
        7,
    );
    assert!(matches!(
        outcome,
        Outcome::Advance {
            state: CreatePostState::ButtonLabel,
            ..
        }
    ));

    create_post(
        CreatePostState::ButtonLabel,
        &mut draft,
        text_event("Shop"),
        7,
    );
    let outcome = create_post(
        CreatePostState::ButtonUrl,
        &mut draft,
        text_event("https://x.test"),
        7,
    );

    match outcome {
        Outcome::Publish { post, .. } => {
            assert_eq!(post.media, Some(PostMedia::Photo("photo42".to_owned())));
            assert_eq!(post.caption, "Sale\n\n50% off");
            assert_eq!(post.buttons.len(), 1);
        }
        _ => panic!("expected a publish"),
    }
}

#[test]
fn skip_token_is_case_insensitive() {
    let mut draft = PostDraft::default();

    let outcome = create_post(CreatePostState::Media, &mut draft, text_event("SKIP"), 1);

    assert!(matches!(
        outcome,
        Outcome::Advance {
            state: CreatePostState::ButtonLabel,
            ..
        }
    ));
    assert_eq!(draft.media, Some(MediaCapture::Skipped));
}

#[test]
fn media_step_reprompts_on_anything_else() {
    let mut draft = PostDraft::default();

    let outcome = create_post(
        CreatePostState::Media,
        &mut draft,
        text_event("not a photo"),
        1,
    );
    assert!(matches!(outcome, Outcome::Reprompt { .. }));
    assert_eq!(draft.media, None);

    let outcome = create_post(CreatePostState::Media, &mut draft, Event::Unsupported, 1);
    assert!(matches!(outcome, Outcome::Reprompt { .. }));
    assert_eq!(draft.media, None);
}

#[test]
fn wrong_content_type_reprompts_without_touching_the_draft() {
    let mut draft = PostDraft::default();

    let outcome = create_post(
        CreatePostState::Title,
        &mut draft,
        Event::Photo {
            file_id: "photo42".to_owned(),
        },
        1,
    );

    assert!(matches!(outcome, Outcome::Reprompt { .. }));
    assert_eq!(draft, PostDraft::default());
}

#[test]
fn exit_token_aborts_from_every_step() {
    for state in [
        CreatePostState::Title,
        CreatePostState::Description,
        CreatePostState::Media,
        CreatePostState::ButtonLabel,
        CreatePostState::ButtonUrl,
    ] {
        let mut draft = PostDraft::default();
        let outcome = create_post(state, &mut draft, text_event("exit"), 1);

        assert!(matches!(outcome, Outcome::Abort { .. }));
    }

    for state in [
        VideoPostState::Description,
        VideoPostState::Video,
        VideoPostState::ButtonLabel,
        VideoPostState::ButtonUrl,
        VideoPostState::Target,
    ] {
        let mut draft = PostDraft::default();
        let outcome = video_post(state, &mut draft, text_event("exit"));

        assert!(matches!(outcome, Outcome::Abort { .. }));
    }

    for state in [
        ChannelPostState::Title,
        ChannelPostState::Description,
        ChannelPostState::Media,
        ChannelPostState::ButtonLabel,
        ChannelPostState::ButtonUrl,
        ChannelPostState::Target,
    ] {
        let mut draft = PostDraft::default();
        let outcome = channel_post(state, &mut draft, text_event("exit"), 1, &posts_config());

        assert!(matches!(outcome, Outcome::Abort { .. }));
    }
}

#[test]
fn restart_token_resets_the_draft() {
    let mut draft = PostDraft::default();

    create_post(CreatePostState::Title, &mut draft, text_event("Sale"), 1);
    create_post(
        CreatePostState::Description,
        &mut draft,
        text_event("50% off"),
        1,
    );

    let outcome = create_post(CreatePostState::Media, &mut draft, text_event("restart"), 1);

    assert!(matches!(
        outcome,
        Outcome::Restart {
            state: CreatePostState::Title,
            ..
        }
    ));
    assert_eq!(draft, PostDraft::default());
}

#[test]
fn video_post_accepts_only_videos() {
    let mut draft = PostDraft::default();

    let outcome = video_post(VideoPostState::Video, &mut draft, text_event("no video"));
    assert!(matches!(outcome, Outcome::Reprompt { .. }));

    let outcome = video_post(
        VideoPostState::Video,
        &mut draft,
        Event::Photo {
            file_id: "photo42".to_owned(),
        },
    );
    assert!(matches!(outcome, Outcome::Reprompt { .. }));
    assert_eq!(draft.media, None);

    let outcome = video_post(
        VideoPostState::Video,
        &mut draft,
        Event::Video {
            file_id: "video42".to_owned(),
        },
    );
    assert!(matches!(
        outcome,
        Outcome::Advance {
            state: VideoPostState::ButtonLabel,
            ..
        }
    ));
    assert_eq!(
        draft.media,
        Some(MediaCapture::Attached(PostMedia::Video(
            "video42".to_owned()
        )))
    );
}

#[test]
fn video_post_publishes_to_the_raw_target_with_description_caption() {
    let mut draft = PostDraft::default();

    video_post(VideoPostState::Description, &mut draft, text_event("50% off"));
    video_post(
        VideoPostState::Video,
        &mut draft,
        Event::Video {
            file_id: "video42".to_owned(),
        },
    );
    video_post(VideoPostState::ButtonLabel, &mut draft, text_event("Shop"));
    video_post(
        VideoPostState::ButtonUrl,
        &mut draft,
        text_event("https://x.test"),
    );
    let outcome = video_post(VideoPostState::Target, &mut draft, text_event("@promo"));

    match outcome {
        Outcome::Publish { post, confirm } => {
            assert_eq!(post.caption, "50% off");
            assert_eq!(post.media, Some(PostMedia::Video("video42".to_owned())));
            assert_eq!(post.target, PostTarget::Handle("@promo".to_owned()));
            assert!(confirm.is_some());
        }
        _ => panic!("expected a publish"),
    }
}

#[test]
fn channel_post_this_chat_resolves_to_the_origin_chat() {
    let mut draft = PostDraft::default();
    let posts = posts_config();

    channel_post(ChannelPostState::Title, &mut draft, text_event("Sale"), 77, &posts);
    channel_post(
        ChannelPostState::Description,
        &mut draft,
        text_event("50% off"),
        77,
        &posts,
    );
    channel_post(ChannelPostState::Media, &mut draft, text_event("skip"), 77, &posts);
    channel_post(
        ChannelPostState::ButtonLabel,
        &mut draft,
        text_event("Shop"),
        77,
        &posts,
    );
    let outcome = channel_post(
        ChannelPostState::ButtonUrl,
        &mut draft,
        text_event("https://x.test"),
        77,
        &posts,
    );
    match outcome {
        Outcome::Advance { state: ChannelPostState::Target, markup, .. } => {
            assert!(markup.is_some());
        }
        _ => panic!("expected to advance to the target selection"),
    }

    let outcome = channel_post(
        ChannelPostState::Target,
        &mut draft,
        Event::Select(TARGET_THIS_CHAT.to_owned()),
        77,
        &posts,
    );

    match outcome {
        Outcome::Publish { post, .. } => {
            assert_eq!(post.target, PostTarget::Chat(77));
            // the user's button plus the fixed directory button
            assert_eq!(post.buttons.len(), 2);
            assert_eq!(post.buttons[0].label, "Shop");
            assert_eq!(post.buttons[1].url, "https://t.me/promo_directory");
        }
        _ => panic!("expected a publish"),
    }
}

#[test]
fn channel_post_directory_resolves_to_the_configured_channel() {
    let mut draft = PostDraft::default();
    let posts = posts_config();

    let outcome = channel_post(
        ChannelPostState::Target,
        &mut draft,
        Event::Select(TARGET_DIRECTORY.to_owned()),
        77,
        &posts,
    );

    match outcome {
        Outcome::Publish { post, .. } => {
            assert_eq!(
                post.target,
                PostTarget::Handle("@promo_directory".to_owned())
            );
        }
        _ => panic!("expected a publish"),
    }
}

#[test]
fn channel_post_unknown_selection_reprompts() {
    let mut draft = PostDraft::default();
    let posts = posts_config();

    let outcome = channel_post(
        ChannelPostState::Target,
        &mut draft,
        Event::Select("bogus".to_owned()),
        77,
        &posts,
    );

    assert!(matches!(outcome, Outcome::Reprompt { .. }));
    assert_eq!(draft.target, None);
}

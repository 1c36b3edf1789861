/// FSM storage key the in-progress draft is kept under.
pub const DRAFT_KEY: &str = "post_draft";
/// FSM storage key for the id of the target-selection message, so it can be
/// edited after the user taps a button.
pub const TARGET_PROMPT_KEY: &str = "target_prompt_message";

/// Token a user can type to abandon the wizard.
pub const EXIT_TOKEN: &str = "exit";
/// Token a user can type to start the wizard over from the first step.
pub const RESTART_TOKEN: &str = "restart";
/// Token a user can type to publish the post without a photo.
pub const SKIP_TOKEN: &str = "skip";

/// Callback data of the target-selection buttons.
pub const TARGET_DIRECTORY: &str = "target_directory";
pub const TARGET_THIS_CHAT: &str = "target_this_chat";

/// Label of the extra button attached to posts published through `/channel_post`.
pub const DIRECTORY_BUTTON_LABEL: &str = "More posts";

pub mod commands;
pub mod handlers;
pub mod states;

pub use commands::{
    cancel_command, channel_post_command, create_post_command, process_non_command, start_command,
    video_post_command,
};

// export modules
pub mod cancel;
pub mod channel_post;
pub mod common;
pub mod create_post;
pub mod start;
pub mod video_post;

// export functions from modules so as not to bother with the functions paths
pub use cancel::cancel;
pub use channel_post::{
    channel_post, channel_post_button_label, channel_post_button_url, channel_post_description,
    channel_post_media, channel_post_target, channel_post_target_select, channel_post_title,
};
pub use create_post::{
    create_post, create_post_button_label, create_post_button_url, create_post_description,
    create_post_media, create_post_title,
};
pub use start::start;
pub use video_post::{
    video_post, video_post_button_label, video_post_button_url, video_post_description,
    video_post_target, video_post_video,
};

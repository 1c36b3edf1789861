use telers::errors::HandlerError;
use telers::event::ToServiceProvider;
use telers::fsm::{strategy::Strategy, MemoryStorage};
use telers::methods::SetMyCommands;
use telers::middlewares::outer::FSMContext;
use telers::types::{BotCommand, BotCommandScopeAllPrivateChats};
use telers::Bot;
use telers::Dispatcher;
use telers::Router;

use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _, EnvFilter};

mod bot_commands;
mod config;
mod core;
mod middlewares;

use bot_commands::{
    cancel_command, channel_post_command, create_post_command, process_non_command, start_command,
    video_post_command,
};
use config::ConfigToml;
use middlewares::PostsConfigMiddleware;

const CONFIG_PATH: &str = "config.toml";

const BOT_COMMANDS: &[&str] = &[
    "start",
    "help",
    "cancel",
    "create_post",
    "video_post",
    "channel_post",
];

async fn set_commands(bot: Bot) -> Result<(), HandlerError> {
    let help = BotCommand::new("help", "Show help message");
    let cancel = BotCommand::new("cancel", "Cancel post creation");
    let create_post = BotCommand::new("create_post", "Build a post and publish it to this chat");
    let video_post = BotCommand::new("video_post", "Build a video post for any chat or channel");
    let channel_post = BotCommand::new("channel_post", "Build a post for the directory channel");

    let private_chats = [help, cancel, create_post, video_post, channel_post];

    bot.send(SetMyCommands::new(private_chats).scope(BotCommandScopeAllPrivateChats {}))
        .await?;

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = ConfigToml::parse(CONFIG_PATH).expect("failed to read config file");

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::new(config.tracing.log_level))
        .init();

    let bot = Bot::from_env_by_key("BOT_TOKEN");

    let mut main_router = Router::new("main");

    let storage = MemoryStorage::default();
    main_router
        .update
        .outer_middlewares
        .register(FSMContext::new(storage).strategy(Strategy::UserInChat));
    main_router
        .update
        .outer_middlewares
        .register(PostsConfigMiddleware::new(config.posts));

    start_command(&mut main_router, &["start", "help"]).await;
    cancel_command(&mut main_router, &["cancel"]).await;
    create_post_command(&mut main_router, "create_post", BOT_COMMANDS).await;
    video_post_command(&mut main_router, "video_post", BOT_COMMANDS).await;
    channel_post_command(&mut main_router, "channel_post", BOT_COMMANDS).await;
    process_non_command(&mut main_router, BOT_COMMANDS).await;

    main_router.startup.register(set_commands, (bot.clone(),));

    let dispatcher = Dispatcher::builder()
        .bot(bot)
        .allowed_updates(main_router.resolve_used_update_types())
        .router(main_router)
        .build();

    match dispatcher
        .to_service_provider_default()
        .unwrap()
        .run_polling()
        .await
    {
        Ok(()) => debug!("Bot stopped"),
        Err(err) => debug!("Bot stopped with error: {err}"),
    }
}

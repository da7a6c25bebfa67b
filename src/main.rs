use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use user_sdk::{Config, UserManager};

#[tokio::main]
async fn main() {
    // 初始化日志
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 加载配置
    let config = Config::from_env().expect("APP_ID and API_TOKEN must be set");
    let manager = UserManager::new(config).expect("Failed to build HTTP client");

    let mut args = std::env::args().skip(1);
    let command = args.next().unwrap_or_default();
    let argument = args.next().unwrap_or_default();

    let result = match command.as_str() {
        "get" => manager.get_user(&argument).await.map(|user| vec![user]),
        "search" => manager.get_users(&argument).await,
        _ => {
            eprintln!("usage: user-sdk <get USER_ID | search NICKNAME>");
            std::process::exit(2);
        }
    };

    match result {
        Ok(users) => {
            for user in users {
                println!(
                    "{}\t{}\t{}",
                    user.user_id,
                    user.nickname,
                    user.profile_url.unwrap_or_default()
                );
            }
        }
        Err(e) => {
            tracing::error!("Request failed: {}", e);
            std::process::exit(1);
        }
    }
}

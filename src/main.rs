mod common;
mod config;
mod network;
mod storage;
mod ui;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Parser;
use dotenvy::dotenv;
use network::{RemoteAssistant, WebhookClient, WebhookWorker};
use storage::{IdentityStore, MemoryIdentityStore};
use tokio::sync::mpsc;
use ui::{ChatApp, RootController};

#[derive(Parser)]
#[command(
    name = "trilingo_chat",
    version,
    about = "Desktop chat client for the Trilingo assistant"
)]
struct Cli {
    /// Path to JSON config file
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH, value_name = "FILE")]
    config: String,
    /// Directory holding the local identity database
    #[arg(long, default_value = storage::DEFAULT_DATA_DIR, value_name = "DIR")]
    data_dir: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), eframe::Error> {
    dotenv().ok();
    // Khởi tạo Logger để debug
    env_logger::init();

    let cli = Cli::parse();
    let app_config = config::load_config(&cli.config);
    log::info!(
        "Webhooks: chat={} unblock={} schedule={}",
        app_config.chat_webhook,
        app_config.unblock_webhook,
        app_config.schedule_webhook
    );

    let store = open_identity_store(&cli.data_dir);
    let assistant: Arc<dyn RemoteAssistant> = Arc::new(WebhookClient::new(&app_config));

    run_client(assistant, store).await
}

fn open_identity_store(data_dir: &Path) -> Box<dyn IdentityStore> {
    match storage::open_sqlite_store(data_dir) {
        Ok(store) => Box::new(store),
        Err(err) => {
            log::error!(
                "Cannot open identity store in {} ({err}); login will not be remembered",
                data_dir.display()
            );
            Box::new(MemoryIdentityStore::new())
        }
    }
}

async fn run_client(
    assistant: Arc<dyn RemoteAssistant>,
    store: Box<dyn IdentityStore>,
) -> Result<(), eframe::Error> {
    // 1. Tạo các kênh giao tiếp (Channels)
    // UI -> Webhook worker
    let (cmd_tx, cmd_rx) = mpsc::channel(100);
    // Webhook worker -> UI
    let (event_tx, event_rx) = mpsc::channel(100);

    // 2. Khởi chạy webhook worker (Chạy ngầm)
    tokio::spawn(WebhookWorker::new(assistant, event_tx, cmd_rx).run());

    // 3. Khởi chạy UI (Chạy trên Main Thread)
    let options = eframe::NativeOptions::default();

    eframe::run_native(
        "Trilingo",
        options,
        Box::new(move |cc| {
            let root = RootController::start(store);
            log::info!("Client started");

            Ok(Box::new(ChatApp::new(cc, root, cmd_tx, event_rx)))
        }),
    )
}

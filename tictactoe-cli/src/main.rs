use anyhow::Result;
use tictactoe_cli::{CliSettings, Console, Session, SessionOutcome};
use tokio::io::{AsyncWriteExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let loaded = CliSettings::load();
    let settings = loaded.as_ref().cloned().unwrap_or_default();

    // 初始化日志（输出到 stderr，不干扰棋盘）
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.log_level.directive())),
        )
        .init();

    if let Err(e) = &loaded {
        warn!("{}，使用默认设置", e);
    }
    info!(?settings, "井字棋启动");

    let console = Console::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
        .with_cell_indices(settings.show_cell_indices);
    let mut session = Session::new(console, settings.preferred_mark);

    let interrupt = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("无法监听 Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    if session.run(interrupt).await? == SessionOutcome::Interrupted {
        // stdin 的后台读取线程可能仍在阻塞，直接退出进程
        session.into_console().into_writer().flush().await?;
        std::process::exit(0);
    }

    Ok(())
}

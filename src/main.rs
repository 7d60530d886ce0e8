use clap::Parser;
use portfolio_render::core::ConfigProvider;
use portfolio_render::utils::error::{ErrorSeverity, RenderError};
use portfolio_render::utils::{logger, validation::Validate};
use portfolio_render::{CliConfig, LocalStorage, SiteBuilder, SiteConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting portfolio-render");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let result = match cli.config.clone() {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path);
            let config = match SiteConfig::from_file(&path) {
                Ok(config) => config.with_initial_filter(cli.filter.clone()),
                Err(e) => fail(&e),
            };
            build(config).await
        }
        None => build(cli).await,
    };

    match result {
        Ok(output_path) => {
            println!("✅ Site rendered successfully!");
            println!("📁 Output saved to: {}", output_path);
            Ok(())
        }
        Err(e) => fail(&e),
    }
}

async fn build<C: ConfigProvider + Validate>(config: C) -> portfolio_render::Result<String> {
    // 驗證配置
    config.validate()?;
    tracing::info!("Configuration validated, content from {:?}", config.content_location());

    let storage = LocalStorage::new(config.output_path());
    SiteBuilder::new(storage, config).run().await
}

fn fail(e: &RenderError) -> ! {
    tracing::error!(
        "Site build failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    std::process::exit(exit_code(e.severity()));
}

/// 根據錯誤嚴重程度決定退出碼。建置失敗時沒有輸出檔，
/// 即使是 Low 也不能回報成功。
fn exit_code(severity: ErrorSeverity) -> i32 {
    match severity {
        ErrorSeverity::Low | ErrorSeverity::High => 1,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::Critical => 3,
    }
}

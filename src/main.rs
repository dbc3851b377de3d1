use anyhow::Context;
use clap::Parser;
use menu_kit::domain::ports::DisplaySettings;
use menu_kit::utils::{logger, validation::Validate};
use menu_kit::{app::Session, CliConfig, MenuStore, Navigator};
use std::io::{self, BufRead, Write};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 載入 TOML 配置
    let settings = match config.load_toml() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger(config.verbose, settings.log_level());
    } else {
        logger::init_cli_logger(config.verbose, settings.log_level());
    }

    tracing::info!("Starting menu-kit");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let seed = match config.seed_snapshot() {
        Ok(seed) => seed,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };
    tracing::info!("📋 Seeded menu with {} items", seed.menu_items.len());

    let navigator = Navigator::new(MenuStore::from_snapshot(seed));
    let mut session = Session::new(settings, navigator);

    run(&mut session).context("terminal session failed")?;

    tracing::info!(
        "Session ended with {} items",
        session.navigator().store().len()
    );
    Ok(())
}

fn run<D: DisplaySettings>(session: &mut Session<D>) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    writeln!(stdout, "{}", session.handle_line("home"))?;
    writeln!(stdout, "{}", menu_kit::app::render::help())?;

    let mut lines = stdin.lock().lines();
    while !session.is_finished() {
        write!(stdout, "{}", session.prompt())?;
        stdout.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let output = session.handle_line(&line?);
        write!(stdout, "{}", output)?;
    }

    Ok(())
}

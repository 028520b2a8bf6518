use clap::Parser;
use dialoguer::Confirm;
use indicatif::{ProgressBar, ProgressStyle};
use nota_fiscal_common::{Action, Session};
use nota_fiscal_rust::{cli, client, clipboard, config, error, input, logging, report, workflow};
use cli::{Cli, Commands};
use client::ApiClient;
use config::Config;
use error::{NotaFiscalError, Result};
use std::future::Future;
use std::time::Duration;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;

    match cli.command {
        Commands::Extract { file, output, copy, save, yes } => {
            eprintln!("🧾 nota-fiscal - extração de dados\n");

            let api = ApiClient::new(config.api_config(cli.base_url.as_deref())?)?;
            let mut session = Session::new();

            // 1. ファイル選択
            let selected = input::load_pdf(&file)?;
            eprintln!("📄 {} ({})", selected.name, selected.size_label());
            session.drop_files([selected]);

            // 2. 抽出
            with_spinner("Processando...", workflow::extract(&mut session, &api)).await?;
            conclude(&session, Action::Extract)?;

            let Some(data) = session.extracted().cloned() else {
                return Err(NotaFiscalError::ActionFailed("extraction returned no data".into()));
            };

            println!("{}", data.to_pretty_json());
            let lines = report::highlights(&data);
            if !lines.is_empty() {
                eprintln!();
                for line in lines {
                    eprintln!("  {}", line);
                }
            }

            if let Some(output) = output {
                std::fs::write(&output, data.to_pretty_json())?;
                eprintln!("✔ JSON salvo em: {}", output.display());
            }

            // 3. クリップボード（失敗しても続行）
            if copy {
                session.copy_json(&mut clipboard::SystemClipboard);
                if let Some(banner) = session.banner() {
                    eprintln!("{}", banner);
                }
            }

            // 4. 保存
            if save {
                if !yes && !confirm_save()? {
                    eprintln!("Salvamento cancelado");
                    return Ok(());
                }
                with_spinner("Salvando...", workflow::save(&mut session, &api)).await?;
                conclude(&session, Action::Save)?;
            }
        }

        Commands::Save { input: path } => {
            eprintln!("💾 nota-fiscal - salvar no banco\n");

            let api = ApiClient::new(config.api_config(cli.base_url.as_deref())?)?;
            let data = input::load_extracted(&path)?;
            let mut session = Session::from_extracted(data);

            with_spinner("Salvando...", workflow::save(&mut session, &api)).await?;
            conclude(&session, Action::Save)?;
        }

        Commands::Health => {
            let api = ApiClient::new(config.api_config(cli.base_url.as_deref())?)?;
            let health = with_spinner("Verificando API...", api.health()).await?;

            println!("API: {}", api.config().base_url());
            println!("  status: {}", health.status);
            if !health.message.is_empty() {
                println!("  message: {}", health.message);
            }
            if !health.timestamp.is_empty() {
                println!("  timestamp: {}", health.timestamp);
            }
            if !health.is_ok() {
                return Err(NotaFiscalError::ActionFailed(format!(
                    "API status is {}",
                    health.status
                )));
            }
        }

        Commands::Config { set_base_url, show } => {
            let mut config = config;

            if let Some(url) = set_base_url {
                config.set_base_url(url)?;
                println!("✔ API base URLを設定しました");
            }

            if show {
                println!("設定:");
                println!("  ファイル: {}", Config::config_path()?.display());
                println!(
                    "  base URL (設定ファイル): {}",
                    config.api_base_url.as_deref().unwrap_or("未設定")
                );
                println!("  base URL (有効値): {}", config.resolve_base_url(cli.base_url.as_deref()));
            }
        }
    }

    Ok(())
}

/// 通信中はスピナーを表示する（ローディング表示）
async fn with_spinner<F: Future>(message: &'static str, fut: F) -> F::Output {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}").unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(100));

    let output = fut.await;
    spinner.finish_and_clear();
    output
}

/// 成功メッセージを表示し、失敗ならエラーとして返す
fn conclude(session: &Session, action: Action) -> Result<()> {
    if let Some(message) = session.status(action).error() {
        return Err(NotaFiscalError::ActionFailed(message.to_string()));
    }
    if let Some(banner) = session.banner() {
        eprintln!("{}", banner);
    }
    Ok(())
}

fn confirm_save() -> Result<bool> {
    Confirm::new()
        .with_prompt("Salvar no banco de dados?")
        .default(true)
        .interact()
        .map_err(|dialoguer::Error::IO(e)| NotaFiscalError::Io(e))
}

use crate::error::{NotaFiscalError, Result};
use nota_fiscal_common::{ApiConfig, DEFAULT_API_BASE_URL};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// API base URLを上書きする環境変数
pub const BASE_URL_ENV: &str = "API_BASE_URL";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_base_url: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| NotaFiscalError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("nota-fiscal").join("config.json"))
    }

    /// base URLを検証してから保存
    pub fn set_base_url(&mut self, url: String) -> Result<()> {
        let api = ApiConfig::new(&url)?;
        self.api_base_url = Some(api.base_url().to_string());
        self.save()
    }

    /// 優先順位: CLI引数 > 環境変数 > 設定ファイル > デフォルト
    pub fn resolve_base_url(&self, cli_override: Option<&str>) -> String {
        let env = std::env::var(BASE_URL_ENV).ok();
        pick_base_url(cli_override, env.as_deref(), self.api_base_url.as_deref())
    }

    pub fn api_config(&self, cli_override: Option<&str>) -> Result<ApiConfig> {
        Ok(ApiConfig::new(&self.resolve_base_url(cli_override))?)
    }
}

fn pick_base_url(cli: Option<&str>, env: Option<&str>, file: Option<&str>) -> String {
    [cli, env, file]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|url| !url.is_empty())
        .unwrap_or(DEFAULT_API_BASE_URL)
        .to_string()
}

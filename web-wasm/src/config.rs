//! 起動時に注入するアプリ設定

use gloo::console;
use nota_fiscal_common::{ApiConfig, DEFAULT_API_BASE_URL};

#[derive(Clone, Debug, Default)]
pub struct AppConfig {
    pub api: ApiConfig,
}

impl AppConfig {
    /// ビルド時の環境変数 `API_BASE_URL` から作成
    pub fn from_build_env() -> Self {
        let base_url = option_env!("API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL);
        let api = ApiConfig::new(base_url).unwrap_or_else(|e| {
            console::warn!(format!("{}; using {}", e, DEFAULT_API_BASE_URL));
            ApiConfig::default()
        });
        Self { api }
    }
}

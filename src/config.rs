use crate::error::{KeibaSignError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 外部シートの列名
///
/// 列名はシート側の都合で変わりうるので設定項目にしておく。
/// コア側は正規化後の型付きフィールドしか見ない。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnNames {
    pub horse_name: String,
    pub race_name: String,
    pub post_position: String,
    pub previous_finish_rank: String,
    pub birthday: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            horse_name: "馬名".into(),
            race_name: "レース名".into(),
            post_position: "馬番".into(),
            previous_finish_rank: "前走着順".into(),
            birthday: "誕生日".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub sheet_url: Option<String>,
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl_minutes: u64,
    #[serde(default)]
    pub columns: ColumnNames,
}

fn default_cache_ttl() -> u64 {
    10
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default_config())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| KeibaSignError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("keiba-sign").join("config.json"))
    }

    fn default_config() -> Self {
        Self {
            sheet_url: None,
            cache_ttl_minutes: default_cache_ttl(),
            columns: ColumnNames::default(),
        }
    }

    /// シートURLを解決する
    ///
    /// 優先順位: コマンドライン指定 > 環境変数 > 設定ファイル
    pub fn resolve_sheet_url(&self, override_url: Option<&str>) -> Result<String> {
        if let Some(url) = override_url {
            return Ok(url.to_string());
        }

        if let Ok(url) = std::env::var("KEIBA_SIGN_SHEET_URL") {
            if !url.trim().is_empty() {
                return Ok(url);
            }
        }

        self.sheet_url.clone().ok_or(KeibaSignError::MissingSheetUrl)
    }

    pub fn set_sheet_url(&mut self, url: String) -> Result<()> {
        self.sheet_url = Some(url);
        self.save()
    }

    pub fn set_cache_ttl(&mut self, minutes: u64) -> Result<()> {
        self.cache_ttl_minutes = minutes;
        self.save()
    }
}

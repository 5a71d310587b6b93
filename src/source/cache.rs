//! シート取得キャッシュ
//!
//! 最後に取得したCSV本文と取得時刻を保存し、TTL以内の再実行では
//! ネットワークを使わない。URLが変わったら無効。

use crate::error::Result;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

const CACHE_FILE_NAME: &str = "sheet-cache.json";

/// キャッシュファイルの構造
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetCache {
    /// バージョン（互換性チェック用）
    version: u32,
    /// 最後に取得したシート
    entry: Option<CacheEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CacheEntry {
    url: String,
    /// 取得時刻（Unix秒）
    fetched_at: i64,
    body: String,
}

impl SheetCache {
    const CURRENT_VERSION: u32 = 1;

    pub fn cache_path(dir: &Path) -> PathBuf {
        dir.join(CACHE_FILE_NAME)
    }

    /// キャッシュファイルを読み込み。壊れていたら空のキャッシュに戻す。
    pub fn load(dir: &Path) -> Self {
        let cache_path = Self::cache_path(dir);
        if !cache_path.exists() {
            return Self::default();
        }

        let file = match File::open(&cache_path) {
            Ok(f) => f,
            Err(_) => return Self::default(),
        };

        let reader = BufReader::new(file);
        match serde_json::from_reader::<_, SheetCache>(reader) {
            Ok(cache) => {
                if cache.version != Self::CURRENT_VERSION {
                    eprintln!("キャッシュバージョン不一致、再取得します");
                    return Self::default();
                }
                cache
            }
            Err(_) => Self::default(),
        }
    }

    /// キャッシュファイルを保存
    pub fn save(&self, dir: &Path) -> Result<()> {
        std::fs::create_dir_all(dir)?;
        let file = File::create(Self::cache_path(dir))?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// キャッシュファイルを削除。存在しなければ Ok(false)。
    pub fn clear(dir: &Path) -> Result<bool> {
        let cache_path = Self::cache_path(dir);
        if !cache_path.exists() {
            return Ok(false);
        }
        std::fs::remove_file(cache_path)?;
        Ok(true)
    }

    /// 取得結果を記録する（取得時刻は現在時刻）
    pub fn store(&mut self, url: &str, body: &str) {
        self.entry = Some(CacheEntry {
            url: url.to_string(),
            fetched_at: Utc::now().timestamp(),
            body: body.to_string(),
        });
    }

    /// TTL以内なら本文を返す
    pub fn fresh_body(&self, url: &str, ttl_minutes: u64) -> Option<&str> {
        self.fresh_body_at(url, ttl_minutes, Utc::now().timestamp())
    }

    /// TTL判定の時刻を指定できる版
    pub fn fresh_body_at(&self, url: &str, ttl_minutes: u64, now: i64) -> Option<&str> {
        let entry = self.entry.as_ref()?;
        if entry.url != url {
            return None;
        }
        let age = now - entry.fetched_at;
        if age > ttl_minutes as i64 * 60 {
            return None;
        }
        Some(&entry.body)
    }

    /// 期限切れでも同じURLの本文が残っていれば返す（取得失敗時の代用）
    pub fn stale_body(&self, url: &str) -> Option<&str> {
        let entry = self.entry.as_ref()?;
        (entry.url == url).then_some(entry.body.as_str())
    }

    /// 取得時刻（Unix秒）
    pub fn fetched_at(&self) -> Option<i64> {
        self.entry.as_ref().map(|e| e.fetched_at)
    }

    pub fn is_empty(&self) -> bool {
        self.entry.is_none()
    }
}

impl Default for SheetCache {
    fn default() -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            entry: None,
        }
    }
}

/// 既定のキャッシュ置き場（~/.cache/keiba-sign）
pub fn default_cache_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("keiba-sign")
}

//! データ取得モジュール
//!
//! 公開スプレッドシートのCSVエクスポート、またはローカルCSVファイルを
//! 読み込み、列名→セル値のマップ（RawRecord）の列に変換する。
//!
//! コアの正規化・判定はここで材料化した行しか見ない。取得の失敗は
//! このモジュールのエラーで、行単位のデータ不備はエラーにしない。

pub mod cache;

use crate::config::Config;
use crate::error::{KeibaSignError, Result};
use std::collections::HashMap;
use std::path::Path;

/// 外部シートの1行（列名→セル値）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRecord {
    fields: HashMap<String, String>,
}

impl RawRecord {
    /// 列の値を返す。列が無ければ None。
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(|s| s.as_str())
    }

    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self {
            fields: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

/// CSVテキストを行レコード列に変換する
///
/// 1行目をヘッダとして扱い、セル値は前後の空白を落とす。
/// 列数の合わない壊れた行は読み飛ばす。
pub fn parse_csv(text: &str) -> Result<Vec<RawRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = match row {
            Ok(r) => r,
            Err(_) => continue, // 壊れた行は読み飛ばす
        };

        let mut fields = HashMap::new();
        for (header, value) in headers.iter().zip(row.iter()) {
            fields.insert(header.clone(), value.trim().to_string());
        }
        records.push(RawRecord { fields });
    }

    Ok(records)
}

/// ローカルCSVファイルを読み込む
pub fn load_file(path: &Path) -> Result<Vec<RawRecord>> {
    if !path.exists() {
        return Err(KeibaSignError::FileNotFound(path.display().to_string()));
    }

    let text = std::fs::read_to_string(path)?;
    parse_csv(&text)
}

/// 公開シートのCSVを取得する
///
/// `use_cache` のときはTTL内のキャッシュをそのまま使う。取得に失敗しても
/// 期限切れキャッシュが残っていればそれで代用し、警告だけ出す。
pub async fn fetch_sheet(url: &str, config: &Config, use_cache: bool) -> Result<Vec<RawRecord>> {
    let cache_dir = cache::default_cache_dir();

    if use_cache {
        let cached = cache::SheetCache::load(&cache_dir);
        if let Some(body) = cached.fresh_body(url, config.cache_ttl_minutes) {
            return parse_csv(body);
        }
    }

    match download(url).await {
        Ok(body) => {
            let mut cached = cache::SheetCache::load(&cache_dir);
            cached.store(url, &body);
            if let Err(e) = cached.save(&cache_dir) {
                eprintln!("キャッシュ保存に失敗: {}", e);
            }
            parse_csv(&body)
        }
        Err(e) => {
            if use_cache {
                let cached = cache::SheetCache::load(&cache_dir);
                if let Some(body) = cached.stale_body(url) {
                    eprintln!("シート取得に失敗、前回のキャッシュを使用します: {}", e);
                    return parse_csv(body);
                }
            }
            Err(e)
        }
    }
}

async fn download(url: &str) -> Result<String> {
    let client = reqwest::Client::new();
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| KeibaSignError::SheetFetch(e.to_string()))?;

    if !response.status().is_success() {
        return Err(KeibaSignError::SheetFetch(format!(
            "HTTP {}: {}",
            response.status(),
            url
        )));
    }

    response
        .text()
        .await
        .map_err(|e| KeibaSignError::SheetFetch(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_csv_basic() {
        let text = "馬名,レース名,馬番,前走着順,誕生日\n\
                    アカイトリ,中山11R,7,3,2021/01/27\n\
                    キタノオー,中山11R,12,1,03-24\n";
        let records = parse_csv(text).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("馬名"), Some("アカイトリ"));
        assert_eq!(records[0].get("馬番"), Some("7"));
        assert_eq!(records[1].get("誕生日"), Some("03-24"));
    }

    #[test]
    fn test_parse_csv_trims_cells() {
        let text = "馬名,馬番\n テスト号 , 5 \n";
        let records = parse_csv(text).unwrap();
        assert_eq!(records[0].get("馬名"), Some("テスト号"));
        assert_eq!(records[0].get("馬番"), Some("5"));
    }

    #[test]
    fn test_parse_csv_short_row() {
        // 列の足りない行は、ある列だけ埋まる
        let text = "馬名,レース名,馬番\nテスト号\n";
        let records = parse_csv(text).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get("馬名"), Some("テスト号"));
        assert_eq!(records[0].get("馬番"), None);
    }

    #[test]
    fn test_parse_csv_quoted_comma() {
        let text = "馬名,レース名\nテスト号,\"第1回,記念 3R\"\n";
        let records = parse_csv(text).unwrap();
        assert_eq!(records[0].get("レース名"), Some("第1回,記念 3R"));
    }

    #[test]
    fn test_parse_csv_empty() {
        let records = parse_csv("馬名,馬番\n").unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_load_file_not_found() {
        let result = load_file(Path::new("/nonexistent/entries.csv"));
        assert!(matches!(result, Err(KeibaSignError::FileNotFound(_))));
    }
}

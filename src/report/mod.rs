//! レポート生成モジュール
//!
//! 全行を正規化→判定し、一致のあった馬をレース単位にまとめて
//! テキストレポートとJSONに変換する。
//!
//! レースの表示順はレース名末尾の「<数字>R」を優先し、番号の取れない
//! レースは末尾に回す。

use crate::config::ColumnNames;
use crate::error::{KeibaSignError, Result};
use crate::matcher::{self, SignMatch};
use crate::normalizer::{self, Entry};
use crate::source::RawRecord;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// 一致が1件以上あった出走馬の出力レコード
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchedEntry {
    pub horse_name: String,
    pub race_name: String,
    pub post_position: u32,
    pub previous_finish_rank: Option<u32>,
    /// 誕生日の元の表記
    pub birthday: String,
    pub explanations: Vec<String>,
}

impl MatchedEntry {
    fn new(entry: &Entry, matches: &[SignMatch]) -> Self {
        Self {
            horse_name: entry.horse_name.clone(),
            race_name: entry.race_name.clone(),
            post_position: entry.post_position,
            previous_finish_rank: entry.previous_finish_rank,
            birthday: entry.raw_birthday.clone(),
            explanations: matches.iter().map(|m| m.explanation.clone()).collect(),
        }
    }
}

/// 1回分のチェック結果
#[derive(Debug, Clone)]
pub struct Report {
    /// 表示順に並べたレース名（シートに現れた全レース）
    pub races: Vec<String>,
    /// 一致のあった馬（レース表示順 → 行順）
    pub matches: Vec<MatchedEntry>,
    /// 馬番が読めずスキップした行数
    pub skipped: usize,
}

/// 全レコードを正規化→判定してレポートに畳む
pub fn build_report(records: &[RawRecord], columns: &ColumnNames) -> Report {
    // レース一覧は正規化前の全行から拾う。スキップされた行のレースも
    // 「一致なし」として表示対象に残る。
    let races = ordered_races(
        records
            .iter()
            .filter_map(|r| r.get(&columns.race_name))
            .filter(|name| !name.is_empty()),
    );

    let mut skipped = 0;
    let mut matches = Vec::new();
    for record in records {
        let Some(entry) = normalizer::normalize(record, columns) else {
            skipped += 1;
            continue;
        };

        let fired = matcher::check_entry(&entry);
        if !fired.is_empty() {
            matches.push(MatchedEntry::new(&entry, &fired));
        }
    }

    sort_matches(&mut matches);
    Report {
        races,
        matches,
        skipped,
    }
}

impl Report {
    /// 保存済みの一致結果からレポートを組み直す（exportコマンド用）
    ///
    /// 元のシートは手元に無いので、レース一覧は一致結果に現れた
    /// レースだけになる。
    pub fn from_matches(mut matches: Vec<MatchedEntry>) -> Self {
        let races = ordered_races(matches.iter().map(|m| m.race_name.as_str()));
        sort_matches(&mut matches);
        Self {
            races,
            matches,
            skipped: 0,
        }
    }
}

/// レース名末尾の「<数字>R」からレース番号を取り出す
pub fn race_number(race_name: &str) -> Option<u32> {
    lazy_static! {
        static ref RACE_RE: Regex = Regex::new(r"(\d+)R$").unwrap();
    }

    RACE_RE
        .captures(race_name.trim())
        .and_then(|caps| caps[1].parse().ok())
}

fn race_sort_key(race_name: &str) -> (u32, String) {
    // 番号の取れないレースは末尾に回す
    (
        race_number(race_name).unwrap_or(u32::MAX),
        race_name.to_string(),
    )
}

fn ordered_races<'a>(names: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut races: Vec<String> = names
        .filter(|name| seen.insert(name.to_string()))
        .map(|name| name.to_string())
        .collect();
    races.sort_by_key(|name| race_sort_key(name));
    races
}

fn sort_matches(matches: &mut [MatchedEntry]) {
    matches.sort_by(|a, b| {
        race_sort_key(&a.race_name)
            .cmp(&race_sort_key(&b.race_name))
            .then(a.post_position.cmp(&b.post_position))
    });
}

/// テキストレポートを組み立てる
pub fn render_text(report: &Report) -> String {
    let mut out = String::new();
    out.push_str("🏇 ロジック一致チェック\n");

    for race in &report.races {
        out.push_str(&format!("\n🏆 {}\n", race));

        let hits: Vec<&MatchedEntry> = report
            .matches
            .iter()
            .filter(|m| &m.race_name == race)
            .collect();

        if hits.is_empty() {
            out.push_str("一致する馬は見つかりませんでした。\n");
            continue;
        }

        for hit in hits {
            out.push_str(&format!("🐴 {}\n", hit.horse_name));
            out.push_str(&format!("🔢 馬番: {}\n", hit.post_position));
            match hit.previous_finish_rank {
                Some(rank) => out.push_str(&format!("🏁 前走着順: {}\n", rank)),
                None => out.push_str("🏁 前走着順: -\n"),
            }
            if hit.birthday.is_empty() {
                out.push_str("🎂 誕生日: -\n");
            } else {
                out.push_str(&format!("🎂 誕生日: {}\n", hit.birthday));
            }
            for explanation in &hit.explanations {
                out.push_str(explanation);
                out.push('\n');
            }
            out.push_str("---\n");
        }
    }

    out
}

/// 一致結果をJSON文字列にする
pub fn to_json(matches: &[MatchedEntry]) -> Result<String> {
    Ok(serde_json::to_string_pretty(matches)?)
}

/// 一致結果をJSONファイルに保存する
pub fn save_json(matches: &[MatchedEntry], path: &Path) -> Result<()> {
    std::fs::write(path, to_json(matches)?)?;
    Ok(())
}

/// 保存済みのJSON結果を読み込む
pub fn load_json(path: &Path) -> Result<Vec<MatchedEntry>> {
    if !path.exists() {
        return Err(KeibaSignError::FileNotFound(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

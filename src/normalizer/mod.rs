//! 行の正規化モジュール
//!
//! 外部シートの1行（列名→セル値のマップ）を型付きの Entry に変換する。
//!
//! ## 方針
//! - 馬番が数値として読めない行はスキップ（エラーにしない）
//! - 前走着順・誕生日は任意項目。読めなければ None に畳み、
//!   該当ルールが発火しないだけで行自体は残す

pub mod birthday;

use crate::config::ColumnNames;
use crate::source::RawRecord;
use birthday::MonthDay;

/// 正規化済みの出走馬1頭分
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub horse_name: String,
    pub race_name: String,
    /// 馬番
    pub post_position: u32,
    /// 前走着順（読めなければ None）
    pub previous_finish_rank: Option<u32>,
    /// 誕生日の月日（読めなければ None）
    pub birthday: Option<MonthDay>,
    /// 誕生日の元の表記（表示用）
    pub raw_birthday: String,
}

/// 数値に変換できれば正の整数、できなければ None
///
/// `"7.0"` のような整数値の小数表記も受け付ける。
pub fn safe_int(value: &str) -> Option<u32> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(n) = trimmed.parse::<u32>() {
        return (n > 0).then_some(n);
    }

    let f: f64 = trimmed.parse().ok()?;
    if !f.is_finite() || f.fract() != 0.0 || f <= 0.0 || f > u32::MAX as f64 {
        return None;
    }
    Some(f as u32)
}

/// 1行を正規化する
///
/// 馬番が解析できない行は None（スキップ）。それ以外の欠損は
/// Entry 側の Option に畳む。副作用なし。
pub fn normalize(record: &RawRecord, columns: &ColumnNames) -> Option<Entry> {
    let post_position = safe_int(record.get(&columns.post_position)?)?;

    let raw_birthday = record
        .get(&columns.birthday)
        .unwrap_or_default()
        .to_string();

    Some(Entry {
        horse_name: record
            .get(&columns.horse_name)
            .unwrap_or_default()
            .to_string(),
        race_name: record
            .get(&columns.race_name)
            .unwrap_or_default()
            .to_string(),
        post_position,
        previous_finish_rank: record
            .get(&columns.previous_finish_rank)
            .and_then(safe_int),
        birthday: birthday::parse_birthday(&raw_birthday),
        raw_birthday,
    })
}

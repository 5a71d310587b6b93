//! 誕生日文字列の解析
//!
//! `YYYY/MM/DD`・`MM-DD`・`M月D日` の3形式を順に試し、
//! 最初に解析できた形式の（月, 日）を採用する。年は使わない。

use lazy_static::lazy_static;
use regex::Regex;

/// 誕生日の月日
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthDay {
    pub month: u32,
    pub day: u32,
}

impl MonthDay {
    /// 範囲チェック付きで生成する（月1-12、日1-31）
    pub fn new(month: u32, day: u32) -> Option<Self> {
        if (1..=12).contains(&month) && (1..=31).contains(&day) {
            Some(Self { month, day })
        } else {
            None
        }
    }

    /// 月+日
    pub fn sum(&self) -> u32 {
        self.month + self.day
    }

    /// 月と日を連結した数字列の各桁の和（例: 3月24日 → "324" → 9）
    pub fn digit_sum(&self) -> u32 {
        format!("{}{}", self.month, self.day)
            .chars()
            .filter_map(|c| c.to_digit(10))
            .sum()
    }
}

impl std::fmt::Display for MonthDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}月{}日", self.month, self.day)
    }
}

type ParseAttempt = fn(&str) -> Option<MonthDay>;

// 試行順は固定。先に解析できた形式が勝つ。
const PARSERS: &[ParseAttempt] = &[parse_slash_ymd, parse_dash_md, parse_kanji_md];

/// 誕生日文字列を解析する。どの形式でも解析できなければ None。
pub fn parse_birthday(text: &str) -> Option<MonthDay> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    PARSERS.iter().find_map(|parse| parse(trimmed))
}

/// `YYYY/MM/DD` 形式（年は捨てる）
fn parse_slash_ymd(text: &str) -> Option<MonthDay> {
    let mut parts = text.split('/');
    let _year: i32 = parts.next()?.trim().parse().ok()?;
    let month: u32 = parts.next()?.trim().parse().ok()?;
    let day: u32 = parts.next()?.trim().parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    MonthDay::new(month, day)
}

/// `MM-DD` 形式
fn parse_dash_md(text: &str) -> Option<MonthDay> {
    let mut parts = text.split('-');
    let month: u32 = parts.next()?.trim().parse().ok()?;
    let day: u32 = parts.next()?.trim().parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    MonthDay::new(month, day)
}

/// `M月D日` 形式（末尾の「日」は省略可）
fn parse_kanji_md(text: &str) -> Option<MonthDay> {
    lazy_static! {
        static ref KANJI_RE: Regex = Regex::new(r"^(\d{1,2})月(\d{1,2})日?$").unwrap();
    }

    let caps = KANJI_RE.captures(text)?;
    let month: u32 = caps[1].parse().ok()?;
    let day: u32 = caps[2].parse().ok()?;
    MonthDay::new(month, day)
}

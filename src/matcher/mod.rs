//! サイン一致判定モジュール
//!
//! 正規化済みエントリの馬番を、前走着順と誕生日から導出した数値と
//! 突き合わせる。ルールは固定の5つで、評価順＝表示順。
//!
//! 月+日と各桁和が同じ値に畳まれる場合（月・日とも1桁など）は、
//! 同じ説明の重複を避けるため月+日側だけを報告する。

pub mod types;

pub use types::{SignMatch, SignRule};

use crate::normalizer::Entry;

/// 1頭分のルール評価。発火したルールを表の順で返す。
///
/// 入力は正規化済みなので失敗しない。誕生日が無い場合は
/// 前走着順ルールだけが対象になる。
pub fn check_entry(entry: &Entry) -> Vec<SignMatch> {
    let mut matches = Vec::new();
    let num = entry.post_position;

    // 馬番 = 前走着順
    if let Some(prev) = entry.previous_finish_rank {
        if num == prev {
            matches.push(SignMatch {
                rule: SignRule::RankMatch,
                explanation: format!("✅ 前走着順と馬番が一致（馬番={}, 前走着順={}）", num, prev),
            });
        }
    }

    let Some(birthday) = entry.birthday else {
        return matches;
    };

    // 馬番 = 月+日
    let total = birthday.sum();
    if num == total {
        matches.push(SignMatch {
            rule: SignRule::SumMatch,
            explanation: format!(
                "✅ 誕生日の月+日と馬番が一致（{}+{}={}）",
                birthday.month, birthday.day, total
            ),
        });
    }

    // 馬番 = 各桁の和（月+日と同値になるときは月+日側だけを出す）
    let digit_sum = birthday.digit_sum();
    if num == digit_sum && digit_sum != total {
        matches.push(SignMatch {
            rule: SignRule::DigitSumMatch,
            explanation: format!(
                "✅ 月日の各桁の和と馬番が一致（{}{}→{}）",
                birthday.month, birthday.day, digit_sum
            ),
        });
    }

    // 馬番 = 日そのもの
    if num == birthday.day {
        matches.push(SignMatch {
            rule: SignRule::DayMatch,
            explanation: format!("✅ 誕生日の日と馬番が一致（日={}）", birthday.day),
        });
    }

    // 馬番 = 日の一桁
    if num == birthday.day % 10 {
        matches.push(SignMatch {
            rule: SignRule::LastDigitMatch,
            explanation: format!("✅ 誕生日の日の一桁と馬番が一致（日の一桁={}）", birthday.day % 10),
        });
    }

    matches
}

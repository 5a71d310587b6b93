/// サイン一致ルールの種類
///
/// 評価順＝表示順。ルール同士は独立で、排他ではない。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignRule {
    /// 馬番 = 前走着順
    RankMatch,
    /// 馬番 = 誕生日の月+日
    SumMatch,
    /// 馬番 = 月日を連結した数字列の各桁の和
    DigitSumMatch,
    /// 馬番 = 誕生日の日
    DayMatch,
    /// 馬番 = 日の一桁
    LastDigitMatch,
}

impl std::fmt::Display for SignRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SignRule::RankMatch => write!(f, "前走着順一致"),
            SignRule::SumMatch => write!(f, "月+日一致"),
            SignRule::DigitSumMatch => write!(f, "各桁和一致"),
            SignRule::DayMatch => write!(f, "日一致"),
            SignRule::LastDigitMatch => write!(f, "日の一桁一致"),
        }
    }
}

/// 1ルール分の一致結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignMatch {
    pub rule: SignRule,
    /// 表示用の説明文
    pub explanation: String,
}

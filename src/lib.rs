//! keiba-sign - 競馬サイン一致チェックツール
//!
//! 公開スプレッドシートの出走表を読み込み、馬番と誕生日・前走着順から
//! 導出した数値の一致（サイン）をレース単位でレポートする。

pub mod cli;
pub mod config;
pub mod error;
pub mod matcher;
pub mod normalizer;
pub mod report;
pub mod source;

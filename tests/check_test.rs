//! チェック処理の結合テスト
//!
//! CSVテキスト → 行パース → 正規化 → 判定 → レポートまでを通しで検証

use keiba_sign::config::ColumnNames;
use keiba_sign::report::{self, Report};
use keiba_sign::source;
use tempfile::tempdir;

const SAMPLE_CSV: &str = "\
馬名,レース名,馬番,前走着順,誕生日
アカイトリ,中山11R,7,7,2021/01/27
キタノオー,中山11R,12,1,03-24
ハヤテマル,東京2R,27,5,2020/03/24
サトノダイヤ,東京2R,9,,3月24日
ミチノカゼ,東京2R,4,中止,03-24
ツキノユメ,東京2R,,3,2021/01/27
ホシノサイン,有馬記念,3,3,1月2日
アオゾラ,福島1R,8,2,2021/04/05
";

fn build() -> Report {
    let records = source::parse_csv(SAMPLE_CSV).expect("CSVパース失敗");
    report::build_report(&records, &ColumnNames::default())
}

/// レース一覧は番号順（番号なしは末尾）で、全レースが並ぶ
#[test]
fn test_races_ordered_by_number() {
    let result = build();
    assert_eq!(
        result.races,
        vec!["福島1R", "東京2R", "中山11R", "有馬記念"]
    );
}

/// 馬番の読めない行はスキップされ、エラーにならない
#[test]
fn test_skipped_rows_counted() {
    let result = build();
    assert_eq!(result.skipped, 1); // ツキノユメ（馬番が空）
}

/// 一致した馬とルールの確認
#[test]
fn test_expected_matches() {
    let result = build();
    let horses: Vec<&str> = result
        .matches
        .iter()
        .map(|m| m.horse_name.as_str())
        .collect();

    // レース順 → 馬番順
    assert_eq!(
        horses,
        vec!["ミチノカゼ", "サトノダイヤ", "ハヤテマル", "アカイトリ", "ホシノサイン"]
    );

    // 一致しなかった馬は出ない
    assert!(!horses.contains(&"キタノオー"));
    assert!(!horses.contains(&"アオゾラ"));

    // アカイトリ: 前走着順7=馬番7、日の一桁 27%10=7 の2件
    let akaitori = result
        .matches
        .iter()
        .find(|m| m.horse_name == "アカイトリ")
        .unwrap();
    assert_eq!(akaitori.explanations.len(), 2);
    assert!(akaitori.explanations[0].contains("前走着順"));
    assert!(akaitori.explanations[1].contains("日の一桁"));

    // ホシノサイン: 着順一致と月+日（1+2=3）。各桁和は同値なので出ない
    let hoshino = result
        .matches
        .iter()
        .find(|m| m.horse_name == "ホシノサイン")
        .unwrap();
    assert_eq!(hoshino.explanations.len(), 2);
    assert!(hoshino.explanations[1].contains("1+2=3"));
    assert!(!hoshino.explanations.iter().any(|e| e.contains("各桁")));
}

/// テキストレポートの構成確認
#[test]
fn test_render_text_sections() {
    let result = build();
    let text = report::render_text(&result);

    assert!(text.starts_with("🏇 ロジック一致チェック"));

    // 一致の無い福島1Rにも見出しが出て、「見つかりませんでした」になる
    let fukushima = text.find("🏆 福島1R").unwrap();
    let not_found = text.find("一致する馬は見つかりませんでした。").unwrap();
    let tokyo = text.find("🏆 東京2R").unwrap();
    assert!(fukushima < not_found && not_found < tokyo);

    assert!(text.contains("🐴 アカイトリ"));
    assert!(text.contains("🔢 馬番: 7"));
    assert!(text.contains("🎂 誕生日: 2021/01/27"));
    // 着順の読めない馬は「-」表示
    assert!(text.contains("🏁 前走着順: -\n"));
}

/// JSON保存 → 読み込み → 再レポートで同じ内容になる
#[test]
fn test_json_roundtrip_through_export() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("result.json");

    let result = build();
    report::save_json(&result.matches, &path).expect("JSON保存失敗");

    let loaded = report::load_json(&path).expect("JSON読み込み失敗");
    assert_eq!(loaded, result.matches);

    // export用の組み直しでは一致のあったレースだけが並ぶ
    let exported = Report::from_matches(loaded);
    assert_eq!(exported.races, vec!["東京2R", "中山11R", "有馬記念"]);
    assert_eq!(exported.matches, result.matches);
}

/// 空のデータセットでも問題なく空レポートになる
#[test]
fn test_empty_dataset() {
    let records = source::parse_csv("馬名,レース名,馬番,前走着順,誕生日\n").unwrap();
    let result = report::build_report(&records, &ColumnNames::default());

    assert!(result.races.is_empty());
    assert!(result.matches.is_empty());
    assert_eq!(result.skipped, 0);

    let text = report::render_text(&result);
    assert_eq!(text, "🏇 ロジック一致チェック\n");
}

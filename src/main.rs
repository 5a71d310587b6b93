use clap::Parser;
use keiba_sign::{cli, config, error, report, source};

use cli::{Cli, Commands, ReportFormat};
use config::Config;
use error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Check { input, url, output, format, no_cache } => {
            // JSONだけを出すときは進行ログを抑える
            let quiet = matches!(format, ReportFormat::Json);

            if !quiet {
                println!("🏇 keiba-sign - サイン一致チェック\n");
            }

            // 1. データ取得
            if !quiet {
                println!("[1/3] 出走表を読み込み中...");
            }
            let records = if let Some(path) = input {
                source::load_file(&path)?
            } else {
                let sheet_url = config.resolve_sheet_url(url.as_deref())?;
                source::fetch_sheet(&sheet_url, &config, !no_cache).await?
            };
            if !quiet {
                println!("✔ {}行を読み込み\n", records.len());
            }

            // 2. 判定
            if !quiet {
                println!("[2/3] 一致チェック中...");
            }
            let result = report::build_report(&records, &config.columns);
            if !quiet {
                println!("✔ {}頭が一致\n", result.matches.len());
                if cli.verbose && result.skipped > 0 {
                    println!("- 馬番の読めない{}行をスキップ\n", result.skipped);
                }
            }

            // 3. 出力
            if !quiet {
                println!("[3/3] レポートを出力\n");
            }
            match format {
                ReportFormat::Text => print!("{}", report::render_text(&result)),
                ReportFormat::Json => println!("{}", report::to_json(&result.matches)?),
                ReportFormat::Both => {
                    print!("{}", report::render_text(&result));
                    println!("\n{}", report::to_json(&result.matches)?);
                }
            }

            if let Some(path) = output {
                report::save_json(&result.matches, &path)?;
                if !quiet {
                    println!("\n✔ 結果を保存: {}", path.display());
                }
            }

            if !quiet {
                println!("\n✅ チェック完了");
            }
        }

        Commands::Export { input, output } => {
            println!("📄 keiba-sign - レポート出力\n");

            let matches = report::load_json(&input)?;
            let result = report::Report::from_matches(matches);
            let text = report::render_text(&result);

            match output {
                Some(path) => {
                    std::fs::write(&path, &text)?;
                    println!("✔ レポートを保存: {}", path.display());
                }
                None => print!("{}", text),
            }

            println!("\n✅ 出力完了");
        }

        Commands::Config { set_sheet_url, set_cache_ttl, show } => {
            let mut config = config;

            if let Some(url) = set_sheet_url {
                config.set_sheet_url(url)?;
                println!("✔ シートURLを設定しました");
            }

            if let Some(minutes) = set_cache_ttl {
                config.set_cache_ttl(minutes)?;
                println!("✔ キャッシュTTLを{}分に設定しました", minutes);
            }

            if show {
                println!("設定:");
                println!("  シートURL: {}", config.sheet_url.as_deref().unwrap_or("未設定"));
                println!("  キャッシュTTL: {}分", config.cache_ttl_minutes);
                println!(
                    "  列名: 馬名={} レース名={} 馬番={} 前走着順={} 誕生日={}",
                    config.columns.horse_name,
                    config.columns.race_name,
                    config.columns.post_position,
                    config.columns.previous_finish_rank,
                    config.columns.birthday,
                );
            }
        }

        Commands::Cache { clear, info } => {
            let cache_dir = source::cache::default_cache_dir();
            let cache_path = source::cache::SheetCache::cache_path(&cache_dir);

            if info || !clear {
                if cache_path.exists() {
                    let cache = source::cache::SheetCache::load(&cache_dir);
                    println!("キャッシュ情報:");
                    println!("  パス: {}", cache_path.display());
                    if let Some(ts) = cache.fetched_at() {
                        if let Some(fetched) = chrono::DateTime::from_timestamp(ts, 0) {
                            println!("  取得時刻: {}", fetched.format("%Y-%m-%d %H:%M:%S UTC"));
                        }
                    }
                    if let Ok(meta) = std::fs::metadata(&cache_path) {
                        println!("  サイズ: {} bytes", meta.len());
                    }
                } else {
                    println!("キャッシュファイルが存在しません: {}", cache_path.display());
                }
            }

            if clear {
                match source::cache::SheetCache::clear(&cache_dir) {
                    Ok(true) => println!("✔ キャッシュを削除しました: {}", cache_path.display()),
                    Ok(false) => println!("キャッシュファイルが存在しません"),
                    Err(e) => println!("キャッシュ削除エラー: {}", e),
                }
            }
        }
    }

    Ok(())
}

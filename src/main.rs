use clap::Parser;
use geomech_classifier::{cli, config, error, inventory, keyword_source, runner, scanner};
use geomech_common::ClassificationEngine;
use cli::{Cli, Commands};
use config::Config;
use error::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();

    let config = Config::load()?;

    match cli.command {
        Commands::Inventory { root, folders, output, counts } => {
            println!("🗂  geomech - 棚卸し\n");

            println!("[1/2] ファイルを走査中...");
            let entries = scanner::scan_tree(&root, &folders)?;
            println!("✔ {}件のファイルを検出\n", entries.len());

            println!("[2/2] 棚卸しを保存中...");
            let output = output.unwrap_or_else(|| config.filelist_path.clone());
            scanner::write_inventory(&entries, &output)?;
            println!("✔ 棚卸しを保存: {}", output.display());

            if let Some(counts_path) = counts {
                let counts = scanner::format_counts(&entries);
                scanner::write_format_counts(&counts, &counts_path)?;
                println!("✔ 形式別件数を保存: {}", counts_path.display());
            }

            println!("\n✅ Finished.");
        }

        Commands::Classify { formats, limit, filelist, keywords, skip_rows, reports_dir, jobs } => {
            println!("🔍 geomech - 分類\n");

            // 1. 棚卸し・キーワード読み込み（どちらかが欠けると実行不可）
            println!("[1/2] 棚卸し・キーワードを読み込み中...");
            let filelist = filelist.unwrap_or_else(|| config.filelist_path.clone());
            let inventory = inventory::Inventory::load(&filelist)?;
            let keywords = keywords.unwrap_or_else(|| config.keywords_path.clone());
            let store = keyword_source::load_keywords(&keywords, skip_rows.unwrap_or(config.keyword_skip_rows))?;
            let engine = ClassificationEngine::new(&store)?;
            println!("✔ 棚卸し{}件 / キーワード{}件\n", inventory.len(), store.len());

            // 2. 形式ごとに分類
            println!("[2/2] 分類中...");
            let mut options = runner::RunOptions::new(reports_dir.unwrap_or_else(|| config.reports_dir.clone()));
            options.limit = limit;
            options.jobs = jobs.filter(|&n| n > 0).unwrap_or_else(|| config.effective_jobs());
            options.show_progress = true;

            let runner = runner::ClassificationRunner::new(&engine, &inventory, options);
            for outcome in runner.run_all(formats.as_slice())? {
                println!(
                    "✔ {}: {}件 → {}",
                    outcome.format,
                    outcome.rows.len(),
                    outcome.report_path.display()
                );
            }

            println!("\n✅ Finished.");
        }

        Commands::Check { file, keywords, skip_rows } => {
            let keywords = keywords.unwrap_or_else(|| config.keywords_path.clone());
            let store = keyword_source::load_keywords(&keywords, skip_rows.unwrap_or(config.keyword_skip_rows))?;
            let engine = ClassificationEngine::new(&store)?;

            let row = runner::check_file(&engine, &file)?;
            println!("{}", serde_json::to_string_pretty(&row)?);
        }

        Commands::Config { set_filelist, set_keywords, set_reports_dir, set_jobs, show } => {
            let mut config = config;
            let mut changed = false;

            if let Some(path) = set_filelist {
                config.filelist_path = path;
                changed = true;
            }
            if let Some(path) = set_keywords {
                config.keywords_path = path;
                changed = true;
            }
            if let Some(path) = set_reports_dir {
                config.reports_dir = path;
                changed = true;
            }
            if let Some(jobs) = set_jobs {
                config.jobs = (jobs > 0).then_some(jobs);
                changed = true;
            }

            if changed {
                config.save()?;
                println!("✔ 設定を保存しました: {}", Config::config_path()?.display());
            }

            if show || !changed {
                println!("設定:");
                println!("  棚卸しCSV: {}", config.filelist_path.display());
                println!("  キーワード: {}", config.keywords_path.display());
                println!("  読み飛ばし行数: {}", config.keyword_skip_rows);
                println!("  レポート出力先: {}", config.reports_dir.display());
                println!("  並列数: {}", config.effective_jobs());
            }
        }
    }

    Ok(())
}

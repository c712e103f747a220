use clap::Parser;
use evidence_manifest::common::{parse_filename, ParsedName};
use evidence_manifest::{cli, config, error, manifest, scanner};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("❌ {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Commands::Scan { root, out_dir, sequential, no_progress } => {
            println!("📸 evidence-manifest - 走査\n");

            let config = Config::load()?;
            let mut options = scanner::ScanOptions::from_config(&config);
            if sequential {
                options.parallel = false;
            }
            options.show_progress = !no_progress;

            // 1. 走査
            println!("[1/2] ファイルを走査中... {}", root.display());
            let outcome = scanner::scan_root(&root, &options)?;
            let report = outcome.report(chrono::Utc::now());
            println!(
                "✔ {}件中 {}件を登録（規約外 {}件、未解析 {}件）\n",
                report.total_seen, report.parsed, report.ignored_non_conform, report.unparsed_listed
            );

            if cli.verbose {
                for record in &outcome.records {
                    println!(
                        "  {} {} / {} / {} {}x{} {}",
                        record.file_id_str,
                        record.zone_name,
                        record.cat_name,
                        record.viewtype_name,
                        record.image_width_px,
                        record.image_height_px,
                        if record.validations.id_consistency { "" } else { "(ID不整合)" }
                    );
                }
            }
            for u in &outcome.unparsed {
                println!("  未解析: {} ({})", u.rel_path, u.rejection);
            }

            // 2. 出力
            let out_dir = config.resolve_out_dir(out_dir);
            println!("[2/2] 結果を保存中...");
            let written = manifest::write_outputs(&outcome, &report, &out_dir)?;
            println!("✔ マニフェスト: {}", written.paths.manifest.display());
            println!("✔ 取り込み用: {}", written.paths.parsed.display());
            println!("✔ レポート: {}", written.paths.report.display());
            if written.unparsed_written {
                println!("✔ 未解析一覧: {}", written.paths.unparsed.display());
            }

            println!("\n✅ 完了");
        }

        Commands::Validate { names } => {
            let mut rejected = 0;
            for name in &names {
                match parse_filename(name) {
                    Ok(parsed) => print_parsed(name, &parsed, cli.verbose),
                    Err(rejection) => {
                        rejected += 1;
                        println!("❌ {}: {}", name, rejection);
                    }
                }
            }

            if rejected > 0 {
                println!("\n{}件中 {}件が規約外", names.len(), rejected);
                return Ok(ExitCode::FAILURE);
            }
        }

        Commands::Config { set_out_dir, set_chunk_size, set_parallel, show } => {
            let mut config = Config::load()?;
            let changed = set_out_dir.is_some() || set_chunk_size.is_some() || set_parallel.is_some();

            if let Some(dir) = set_out_dir {
                config.default_out_dir = Some(dir);
            }
            if let Some(size) = set_chunk_size {
                config.set_hash_chunk_size(size)?;
            }
            if let Some(parallel) = set_parallel {
                config.parallel = parallel;
            }
            if changed {
                config.save()?;
                println!("✔ 設定を保存しました: {}", Config::config_path()?.display());
            }

            if show || !changed {
                println!("設定:");
                println!(
                    "  出力ディレクトリ: {}",
                    config
                        .default_out_dir
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "(カレント)".into())
                );
                println!("  チャンクサイズ: {} bytes", config.hash_chunk_size);
                println!("  並列処理: {}", if config.parallel { "有効" } else { "無効" });
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn print_parsed(name: &str, parsed: &ParsedName, verbose: bool) {
    println!("✅ {}", name);
    println!(
        "   ID={}, detail={}, view={}, date={}",
        parsed.file_id_str,
        parsed.detail,
        parsed.view_type,
        if parsed.date.is_empty() { "-" } else { parsed.date.as_str() }
    );
    if verbose {
        let id = parsed.file_id;
        println!(
            "   zone={} ({}), cat={} ({}), img={}, view={}, id_ok={}",
            id.zone_id(),
            evidence_manifest::common::zone_name(id.zone_id()),
            id.category_id(),
            evidence_manifest::common::category_name(id.category_id()),
            id.category_image_id(),
            parsed.view_type.label(),
            id.is_consistent()
        );
    }
}

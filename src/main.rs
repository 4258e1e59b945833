// Mon Oct 19 2026 - Alex

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use std::io;
use std::path::PathBuf;
use std::time::Instant;
use ui_info_generator::{
    config::Config,
    output::JsonSerializer,
    report::ReportAssembler,
    utils::LoggingUtils,
};

#[derive(Parser, Debug)]
#[command(name = "gen-ui-info")]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "Generate keyboard UI info (JSON) from a firmware map file and its sources", long_about = None)]
struct Args {
    /// Commit date, rfc-3339 (e.g. 2006-08-07 12:34:56-06:00)
    #[arg(long)]
    git_commit_date: String,

    #[arg(long)]
    git_commit_id: String,

    /// The linker generated '.map' file
    #[arg(long)]
    map_file_path: PathBuf,

    #[arg(long)]
    source_code_path: PathBuf,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[arg(long, default_value = "c")]
    source_extension: String,

    /// Emit null for date-generated
    #[arg(long)]
    no_timestamp: bool,

    #[arg(long, default_value = "4")]
    indent: usize,

    #[arg(short, long, default_value = "warn")]
    log_level: String,
}

impl Args {
    fn into_config(self) -> Config {
        let mut config = Config::new(
            self.map_file_path,
            self.source_code_path,
            self.git_commit_date,
            self.git_commit_id,
        )
        .with_source_extension(&self.source_extension)
        .with_timestamp(!self.no_timestamp)
        .with_indent_size(self.indent);

        if let Some(output) = self.output {
            config = config.with_output_file(output);
        }
        config
    }
}

fn main() {
    let args = Args::parse();
    LoggingUtils::init_logger(LoggingUtils::level_from_str(&args.log_level));

    if let Err(e) = run(args.into_config()) {
        eprintln!("{} {:#}", "[!]".red(), e);
        std::process::exit(1);
    }
}

fn run(config: Config) -> anyhow::Result<()> {
    let start_time = Instant::now();

    let assembler = ReportAssembler::new(config);
    let report = assembler.assemble().context("Failed to generate UI info")?;

    let config = assembler.config();
    let serializer = JsonSerializer::new().with_indent_size(config.indent_size);

    match &config.output_file {
        Some(path) => {
            serializer
                .serialize_to_file(&report, path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!("UI info written to {}", path.display());
        }
        None => {
            serializer
                .write_to(&report, io::stdout().lock())
                .context("Failed to write UI info to stdout")?;
        }
    }

    log::info!("Done in {:.2}s", start_time.elapsed().as_secs_f64());
    Ok(())
}

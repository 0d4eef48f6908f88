use clap::Parser;
use docs_finder::core::config::{self, CliOverrides, EnvOverrides};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "docs-finder", about = "Search and browse documentation pages")]
struct Args {
    /// Catalog file to load (JSON or TOML)
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Id of the page currently being viewed
    #[arg(long)]
    current: Option<String>,

    /// Documentation version forwarded into every link
    #[arg(short, long)]
    version_tag: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let (file_config, config_error) = match config::load_config() {
        Ok(c) => (c, None),
        Err(e) => (config::FinderConfig::default(), Some(e)),
    };
    let cli = CliOverrides {
        catalog: args.catalog,
        current: args.current,
        version_tag: args.version_tag,
    };
    let resolved = config::resolve(&file_config, &EnvOverrides::from_env(), &cli);

    // File logger: the terminal belongs to the TUI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    if let Some(e) = config_error {
        log::warn!("Ignoring config file: {e}");
    }
    log::info!("Docs finder starting with config: {:?}", resolved);

    docs_finder::tui::run(resolved)
}

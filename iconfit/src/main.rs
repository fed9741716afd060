use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use iconfit::{command, Config, Filter};
use std::path::PathBuf;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Folder containing the icons
    folder: PathBuf,
    /// YAML file listing the expected icons and their sizes
    #[clap(long)]
    config: Option<PathBuf>,
    /// Interpolation filter: nearest, triangle, catmull-rom, gaussian or lanczos3
    #[clap(long)]
    filter: Option<Filter>,
    /// Only report icons that would be resized
    #[clap(long)]
    dry_run: bool,
}

fn main() -> Result<()> {
    use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};
    tracing_log::LogTracer::init().ok();
    let env = std::env::var("ICONFIT_LOG").unwrap_or_else(|_| "error".into());
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_span_events(FmtSpan::ACTIVE | FmtSpan::CLOSE)
        .with_env_filter(EnvFilter::new(env))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
    log_panics::init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            err.print()?;
            std::process::exit(1);
        }
    };
    if !args.folder.is_dir() {
        println!("Invalid folder path");
        std::process::exit(1);
    }
    let mut config = match &args.config {
        Some(path) => Config::parse(path)?,
        None => Config::default(),
    };
    if let Some(filter) = args.filter {
        config.set_filter(filter);
    }
    command::fit(&args.folder, &config, args.dry_run);
    Ok(())
}

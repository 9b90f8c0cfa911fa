use anyhow::Context;
use cgmlst_portal::config::PortalConfig;
use cgmlst_portal::ui::SelectOutcome;
use cgmlst_portal::PortalApp;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file (RON); defaults to ./portal.ron when present
    #[arg(long)]
    config: Option<PathBuf>,

    /// List the available species and exit
    #[arg(long)]
    list_targets: bool,

    /// Print the information page of a species and exit
    #[arg(long, value_name = "ID")]
    print: Option<String>,

    /// Species selected at startup
    #[arg(long, value_name = "ID")]
    select: Option<String>,
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let config = PortalConfig::load(args.config.as_deref()).context("Failed to load config")?;

    // Handle --list-targets flag
    if args.list_targets {
        let catalog = config.build_catalog()?;
        for target in catalog.iter() {
            let marker = if target.id == *catalog.default_target() {
                "*"
            } else {
                " "
            };
            println!(
                "{} {:<24} {:<24} {}",
                marker,
                target.id,
                target.display_name,
                target.availability.as_str()
            );
        }
        return Ok(());
    }

    let mut app = PortalApp::new(&config)?;

    // Handle --print flag; species without content print nothing
    if let Some(id) = &args.print {
        print!("{}", app.presenter().plain_text(id));
        return Ok(());
    }

    if let Some(id) = &args.select {
        match app.select(id) {
            SelectOutcome::Accepted | SelectOutcome::Unchanged => {}
            SelectOutcome::Rejected(reason) => {
                log::debug!("Initial selection {} ignored: {:?}", id, reason);
            }
        }
    }

    log::info!("Starting cgMLST portal");

    cgmlst_portal::app::run_native(&config, app)
}

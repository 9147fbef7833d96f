use anyhow::Context;
use clap::Parser;
use student_roster::cli::Cli;
use student_roster::logging;
use student_roster::roster::RecordStore;
use student_roster::storage::Persistence;
use student_roster::ui::{self, app::App};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config().context("Failed to load configuration")?;
    let log_path = logging::init_tracing(&config.logging).context("Failed to open log file")?;
    tracing::info!(log = %log_path.display(), "Starting student-roster");

    let store = RecordStore::open(Persistence::new(cli.open_storage(&config.storage)));
    let app = App::new(store, &config.form);
    ui::run(app, &config.ui).context("Terminal UI failed")?;
    Ok(())
}

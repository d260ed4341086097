//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `tigercrm_core` wiring against a real database file.
//! - Print deterministic `key=value` lines for quick local checks.
//!
//! Usage: `tigercrm [db_path]`. Without an argument the path comes from
//! `TIGERCRM_DB_PATH` or the default file in the working directory.

use std::error::Error;
use std::process::ExitCode;
use tigercrm_core::db::open_db;
use tigercrm_core::{
    core_version, init_logging, ping, seed_reference_data, CoreConfig, DashboardService,
    SqliteKeyValueStorage, Store, SystemClock,
};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("tigercrm error={err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let mut config = CoreConfig::from_env()?;
    if let Some(path) = std::env::args().nth(1) {
        config.db_path = path.into();
    }
    if let Some(log_dir) = config.log_dir.as_ref() {
        init_logging(config.log_level, &log_dir.to_string_lossy())?;
    }

    println!("tigercrm_core ping={}", ping());
    println!("tigercrm_core version={}", core_version());

    let conn = open_db(&config.db_path)?;
    let store = Store::new(SqliteKeyValueStorage::try_new(&conn)?);
    let outcome = seed_reference_data(&store)?;
    println!("seed outcome={outcome:?}");

    let clock = SystemClock;
    let summary = DashboardService::new(&store, &clock).dashboard()?;
    let stats = summary.stats;
    println!("contacts total={} new_leads={}", stats.total_contacts, stats.new_leads);
    println!(
        "deals active={} pipeline_value={:.2} won={} won_revenue={:.2}",
        stats.active_deals, stats.pipeline_value, stats.won_deals, stats.won_revenue
    );
    println!(
        "tasks open={} overdue={}",
        stats.open_tasks, stats.overdue_tasks
    );
    println!(
        "campaigns active={} interactions total={}",
        stats.active_campaigns, stats.total_interactions
    );
    Ok(())
}

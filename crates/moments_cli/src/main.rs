//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `moments_core` linkage, config loading and database bootstrap.
//! - Print a deterministic summary of the configured moment store.
//!
//! Usage: `moments_cli [config.toml]`

use log::error;
use moments_core::db::open_db;
use moments_core::{
    init_logging, CategoryTag, DaoMomentRepository, MomentRepository, MomentsConfig,
    SqliteMomentDao,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("moments_core ping={}", moments_core::ping());
    println!("moments_core version={}", moments_core::core_version());

    let config = match std::env::args().nth(1) {
        Some(path) => MomentsConfig::load(&path),
        None => Ok(MomentsConfig::default()),
    };
    let config = match config {
        Ok(config) => config,
        Err(err) => {
            eprintln!("config error: {err}");
            return ExitCode::FAILURE;
        }
    };

    if let Some(log_dir) = &config.logging.dir {
        if let Err(err) = init_logging(&config.logging.level, log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    let conn = match open_db(&config.db_path) {
        Ok(conn) => conn,
        Err(err) => {
            error!("event=cli_open module=cli status=error error={err}");
            eprintln!("database error: {err}");
            return ExitCode::FAILURE;
        }
    };
    let repository = DaoMomentRepository::new(SqliteMomentDao::new(conn));

    println!("db_path={}", config.db_path.display());
    println!("moments={}", repository.get_all_moments().len());
    for tag in CategoryTag::ALL {
        println!(
            "category.{}={}",
            tag.type_id(),
            repository.get_moments_by_category(tag).len()
        );
    }

    ExitCode::SUCCESS
}

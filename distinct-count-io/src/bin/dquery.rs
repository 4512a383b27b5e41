use std::io;
use std::process::ExitCode;

use clap::Parser;
use distinct_count_io::cli::{self, Args};

fn main() -> ExitCode {
    if std::env::var("DQUERY_LOG").is_ok() {
        let env = env_logger::Env::new()
            .filter("DQUERY_LOG")
            .write_style("DQUERY_LOG_STYLE");
        env_logger::init_from_env(env);
    }

    let args = Args::parse();
    log::debug!("dquery args: {args:?}");

    match cli::run(&args, io::stdin().lock(), io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("dquery: {err:#}");
            ExitCode::FAILURE
        }
    }
}

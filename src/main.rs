use clap::Parser;
use ttdo::cli::commands::Cli;
use ttdo::cli::handlers;
use ttdo::io::logging;

fn main() {
    let cli = Cli::parse();

    match logging::init_logging(cli.log_file.as_deref()) {
        Ok(Some(path)) => tracing::info!(path = %path.display(), "logging started"),
        Ok(None) => {}
        Err(e) => {
            eprintln!("error: could not open log file: {}", e);
            std::process::exit(1);
        }
    }

    if let Err(e) = handlers::dispatch(cli) {
        tracing::error!(error = %e, "exiting with error");
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

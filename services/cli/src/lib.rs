mod cli;
mod config;
mod error;
mod output;
mod telemetry;

pub use error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}

mod cli;
mod commands;

use hpjournal::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}

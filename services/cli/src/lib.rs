mod cli;
mod render;

use crf_tagger::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}

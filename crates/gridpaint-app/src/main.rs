//! Main application entry point.

use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Starting GridPaint");

    let drawing = std::env::args().nth(1);
    match gridpaint_app::run(drawing.as_deref()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("gridpaint: {}", e);
            ExitCode::FAILURE
        }
    }
}

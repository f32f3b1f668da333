use std::process::ExitCode;

mod app;
mod cli;
mod logging;

fn main() -> ExitCode {
    let args = cli::parse();
    match app::run(args) {
        Ok(code) => code,
        Err(e) => {
            file_bridge::output::print_error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}

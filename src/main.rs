use std::process::ExitCode;

fn main() -> ExitCode {
    match git_level::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            git_level::ui::output::error(format!("{:#}", err));
            ExitCode::FAILURE
        }
    }
}

use std::process::ExitCode;

fn main() -> ExitCode {
    betheclub_cli::run()
}

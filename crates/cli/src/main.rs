use std::process::ExitCode;

fn main() -> ExitCode {
    fieldwise_cli::run()
}

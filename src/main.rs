use assfc::{cli, pipeline};
use std::io::Write;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Usage errors exit inside the parser, before any settings are read
    let invocation = cli::parse_invocation();

    match pipeline::run_invocation(&invocation) {
        Ok(outcome) => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            if let Err(e) = outcome.write_to(&mut out).and_then(|()| out.flush()) {
                eprintln!("assfc: error: failed to write output: {e}");
                return ExitCode::FAILURE;
            }
            ExitCode::from(outcome.exit_code())
        }
        Err(e) => {
            eprintln!("assfc: error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

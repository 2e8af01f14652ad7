use expcomplex::shell;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    match shell::run(stdin.lock(), &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("I/O error: {}", err);
            ExitCode::FAILURE
        }
    }
}

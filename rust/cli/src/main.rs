use std::io::{self, Write};

fn main() {
    if let Err(e) = tilemerge_cli::logging::init_logging() {
        let _ = writeln!(io::stderr(), "WARNING: logging disabled: {}", e);
    }
    let mut out = io::stdout();
    let mut err = io::stderr();
    let code = tilemerge_cli::run(std::env::args(), &mut out, &mut err);
    std::process::exit(code);
}

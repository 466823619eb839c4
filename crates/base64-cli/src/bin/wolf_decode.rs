//! `wolf-decode` — decode a base64 file (wrapped or bare) back to raw bytes.
//!
//! Usage:
//!   wolf-decode [INPUT] [OUTPUT] [--keep-wrapper]

use wolf_base64_cli::logger::setup_logger;
use wolf_base64_cli::{decode_file, parse_decode_args, CliError, Invocation, DECODE_USAGE};

fn main() {
    setup_logger();

    let options = match parse_decode_args(std::env::args().skip(1)) {
        Ok(Invocation::Run(options)) => options,
        Ok(Invocation::Help) => {
            println!("{DECODE_USAGE}");
            return;
        }
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}\n\n{DECODE_USAGE}");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    match decode_file(&options) {
        Ok(report) => println!("{report}"),
        Err(e) => {
            log::error!("decode failed: {e}");
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

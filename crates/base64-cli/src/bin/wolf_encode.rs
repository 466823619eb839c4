//! `wolf-encode` — base64 a file and write it wrapped as a JS constant.
//!
//! Usage:
//!   wolf-encode [INPUT] [OUTPUT] [--raw]

use wolf_base64_cli::logger::setup_logger;
use wolf_base64_cli::{encode_file, parse_encode_args, CliError, Invocation, ENCODE_USAGE};

fn main() {
    setup_logger();

    let options = match parse_encode_args(std::env::args().skip(1)) {
        Ok(Invocation::Run(options)) => options,
        Ok(Invocation::Help) => {
            println!("{ENCODE_USAGE}");
            return;
        }
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}\n\n{ENCODE_USAGE}");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    match encode_file(&options) {
        Ok(report) => println!("{report}"),
        Err(e) => {
            log::error!("encode failed: {e}");
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

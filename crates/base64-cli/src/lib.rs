//! File-to-file encode and decode tools over `wolf-base64`.
//!
//! Provides the core logic used by the binary entry points:
//! - `wolf-encode` — read a file, base64 it, write it wrapped as a JS constant
//! - `wolf-decode` — read a file, strip that wrapper, decode it, write the bytes
//!
//! Each run performs exactly one operation; failures are returned to the
//! binary, which reports them and exits.

pub mod logger;

use std::fs;
use std::path::{Path, PathBuf};

use wolf_base64::{try_from_base64, try_to_base64, Base64Error};

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Failed to open {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Codec(#[from] Base64Error),
    #[error("{0}")]
    Usage(String),
}

// ── Wrapper template ──────────────────────────────────────────────────────

pub const WRAP_PREFIX: &str = "const encoded = \"";
pub const WRAP_SUFFIX: &str = "\";\n";

/// Wraps base64 text as `const encoded = "<b64>";\n`.
pub fn wrap_encoded(b64: &str) -> String {
    let mut out = String::with_capacity(WRAP_PREFIX.len() + b64.len() + WRAP_SUFFIX.len());
    out.push_str(WRAP_PREFIX);
    out.push_str(b64);
    out.push_str(WRAP_SUFFIX);
    out
}

/// Returns the quoted payload of a `const encoded = "...";` wrapper, or the
/// input unchanged when it is not wrapped.
///
/// Surrounding whitespace is ignored, so a file with or without the trailing
/// newline unwraps the same way.
pub fn unwrap_encoded(text: &[u8]) -> &[u8] {
    let trimmed = text.trim_ascii();
    let suffix = WRAP_SUFFIX.trim_end().as_bytes();
    trimmed
        .strip_prefix(WRAP_PREFIX.as_bytes())
        .and_then(|rest| rest.strip_suffix(suffix))
        .unwrap_or(text)
}

// ── Options ───────────────────────────────────────────────────────────────

pub const DEFAULT_DECODED_FILE: &str = "decode.txt";
pub const DEFAULT_ENCODED_FILE: &str = "encode.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Write bare base64 without the `const encoded = ...` wrapper.
    pub raw: bool,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_DECODED_FILE),
            output: PathBuf::from(DEFAULT_ENCODED_FILE),
            raw: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Feed the file to the decoder as is, wrapper text included.
    pub keep_wrapper: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_ENCODED_FILE),
            output: PathBuf::from(DEFAULT_DECODED_FILE),
            keep_wrapper: false,
        }
    }
}

/// What a binary should do after argument parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation<T> {
    Run(T),
    Help,
}

pub const ENCODE_USAGE: &str = "Usage: wolf-encode [INPUT] [OUTPUT] [--raw]\n\
    \n\
    Reads INPUT (default decode.txt), writes base64 to OUTPUT (default encode.txt)\n\
    wrapped as `const encoded = \"...\";`. --raw writes bare base64.";

pub const DECODE_USAGE: &str = "Usage: wolf-decode [INPUT] [OUTPUT] [--keep-wrapper]\n\
    \n\
    Reads base64 from INPUT (default encode.txt), writes bytes to OUTPUT (default decode.txt).\n\
    A `const encoded = \"...\";` wrapper is stripped unless --keep-wrapper is given.";

/// Splits arguments into at most two positionals and the flags, applying
/// `flag` to each flag it does not handle itself.
fn parse_common<I, F>(args: I, mut flag: F) -> Result<Option<Vec<String>>, CliError>
where
    I: IntoIterator<Item = String>,
    F: FnMut(&str) -> bool,
{
    let mut positionals = Vec::new();
    for arg in args {
        match arg.as_str() {
            "-h" | "--help" => return Ok(None),
            a if a.starts_with('-') && a.len() > 1 => {
                if !flag(a) {
                    return Err(CliError::Usage(format!("Unknown option: {a}")));
                }
            }
            _ => positionals.push(arg),
        }
    }
    if positionals.len() > 2 {
        return Err(CliError::Usage(format!(
            "Unexpected argument: {}",
            positionals[2]
        )));
    }
    Ok(Some(positionals))
}

/// Parses `wolf-encode` arguments (without the program name).
pub fn parse_encode_args<I>(args: I) -> Result<Invocation<EncodeOptions>, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut options = EncodeOptions::default();
    let parsed = parse_common(args, |a| match a {
        "--raw" => {
            options.raw = true;
            true
        }
        _ => false,
    })?;
    let Some(positionals) = parsed else {
        return Ok(Invocation::Help);
    };
    let mut positionals = positionals.into_iter();
    if let Some(input) = positionals.next() {
        options.input = input.into();
    }
    if let Some(output) = positionals.next() {
        options.output = output.into();
    }
    Ok(Invocation::Run(options))
}

/// Parses `wolf-decode` arguments (without the program name).
pub fn parse_decode_args<I>(args: I) -> Result<Invocation<DecodeOptions>, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut options = DecodeOptions::default();
    let parsed = parse_common(args, |a| match a {
        "--keep-wrapper" => {
            options.keep_wrapper = true;
            true
        }
        _ => false,
    })?;
    let Some(positionals) = parsed else {
        return Ok(Invocation::Help);
    };
    let mut positionals = positionals.into_iter();
    if let Some(input) = positionals.next() {
        options.input = input.into();
    }
    if let Some(output) = positionals.next() {
        options.output = output.into();
    }
    Ok(Invocation::Run(options))
}

// ── Operations ────────────────────────────────────────────────────────────

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub path: PathBuf,
    pub bytes_written: usize,
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Wrote {} ({} bytes)", self.path.display(), self.bytes_written)
    }
}

fn read_input(path: &Path) -> Result<Vec<u8>, CliError> {
    fs::read(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn write_output(path: &Path, data: &[u8]) -> Result<Report, CliError> {
    fs::write(path, data).map_err(|source| CliError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Report {
        path: path.to_path_buf(),
        bytes_written: data.len(),
    })
}

/// Encodes `options.input` and writes the (optionally wrapped) text to `options.output`.
pub fn encode_file(options: &EncodeOptions) -> Result<Report, CliError> {
    let input = read_input(&options.input)?;
    log::debug!("read {} bytes from {}", input.len(), options.input.display());

    let encoded = try_to_base64(&input)?;
    let text = if options.raw {
        encoded
    } else {
        wrap_encoded(&encoded)
    };

    write_output(&options.output, text.as_bytes())
}

/// Decodes `options.input` and writes the raw bytes to `options.output`.
pub fn decode_file(options: &DecodeOptions) -> Result<Report, CliError> {
    let input = read_input(&options.input)?;
    log::debug!("read {} bytes from {}", input.len(), options.input.display());

    let payload = if options.keep_wrapper {
        input.as_slice()
    } else {
        let payload = unwrap_encoded(&input);
        if payload.len() != input.len() {
            log::debug!("stripped const wrapper from {}", options.input.display());
        }
        payload
    };

    let decoded = try_from_base64(payload)?;
    write_output(&options.output, &decoded)
}

use std::str::FromStr;

use super::CliFlags;

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    InvalidNumber(String),
    MissingValue(String),
    MissingRequired(&'static str),
    UnknownArg(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidNumber(s) => write!(f, "Invalid number: {}", s),
            ParseError::MissingValue(s) => write!(f, "Missing value for {}", s),
            ParseError::MissingRequired(s) => write!(f, "Missing required argument: {}", s),
            ParseError::UnknownArg(s) => write!(f, "Unknown argument: {}", s),
        }
    }
}

impl std::error::Error for ParseError {}

/// Parse `args` (program name first) into flags. Required flags are not
/// checked here so that `--help` works on its own.
pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        let arg = args[i].as_str();
        match arg {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-y" | "--yes" => flags.yes = true,
            "--save" => flags.save = true,
            "-c" | "--count" => flags.count = Some(number(args, &mut i)?),
            "-l" | "--length" => flags.length = Some(number(args, &mut i)?),
            "--min" => flags.min = Some(number(args, &mut i)?),
            "--max" => flags.max = Some(number(args, &mut i)?),
            "--seed" => flags.seed = Some(number(args, &mut i)?),
            "-o" | "--output" => flags.output = Some(value(args, &mut i)?.to_string()),
            "-p" | "--pattern" => flags.pattern = Some(value(args, &mut i)?.to_string()),
            _ => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

/// Advance past a flag and return its value, which may itself start with `-`.
fn value<'a>(args: &'a [String], i: &mut usize) -> Result<&'a str, ParseError> {
    let flag = &args[*i];
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| ParseError::MissingValue(flag.clone()))
}

fn number<T: FromStr>(args: &[String], i: &mut usize) -> Result<T, ParseError> {
    let raw = value(args, i)?;
    raw.parse()
        .map_err(|_| ParseError::InvalidNumber(raw.to_string()))
}

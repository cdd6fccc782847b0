use std::collections::HashMap;

mod error;
mod span;

#[cfg(test)]
mod tests;

pub use error::{Error, ErrorKind};
pub use span::Span;

/// A tiny argument parser.
///
/// - positional args: `pfpgen imgs/7x9.png`
/// - flags: `--stats`
/// - arg flags: `--output out.pfp`, `--output=out.pfp`
pub struct ArgParser {
    arg_count: ArgCount,
    arg_type: ArgType,
    flags: Vec<Flag>,
    arg_flags: HashMap<String, ArgFlag>,
}

impl ArgParser {
    pub fn new() -> Self {
        ArgParser {
            arg_count: ArgCount::None,
            arg_type: ArgType::String,
            flags: vec![],
            arg_flags: HashMap::new(),
        }
    }

    pub fn args(&mut self, arg_type: ArgType, arg_count: ArgCount) -> &mut Self {
        self.arg_type = arg_type;
        self.arg_count = arg_count;
        self
    }

    /// `flags` are mutually exclusive. At most one of them can be set.
    pub fn optional_flag(&mut self, flags: &[&str]) -> &mut Self {
        self.flags.push(Flag {
            values: flags.iter().map(|flag| flag.to_string()).collect(),
        });
        self
    }

    pub fn optional_arg_flag(&mut self, flag: &str, arg_type: ArgType) -> &mut Self {
        self.arg_flags.insert(flag.to_string(), ArgFlag { arg_type });
        self
    }

    pub fn parse(&self, raw_args: &[String]) -> Result<ParsedArgs, Error> {
        self.parse_worker(raw_args).map_err(
            |mut e| {
                e.span = e.span.render(raw_args);
                e
            }
        )
    }

    fn parse_worker(&self, raw_args: &[String]) -> Result<ParsedArgs, Error> {
        let mut args = vec![];
        let mut flags = vec![None; self.flags.len()];
        let mut arg_flags = HashMap::new();
        let mut expecting_flag_arg: Option<(String, ArgType)> = None;

        if raw_args.iter().any(|arg| arg == "--help" || arg == "-h") {
            return Ok(ParsedArgs {
                args,
                flags,
                arg_flags,
                show_help: true,
            });
        }

        'raw_arg_loop: for (arg_index, raw_arg) in raw_args.iter().enumerate() {
            if let Some((flag, arg_type)) = expecting_flag_arg.take() {
                let value = arg_type.parse(raw_arg, Span::Exact(arg_index))?;
                insert_arg_flag(&mut arg_flags, flag, value, arg_index)?;
                continue;
            }

            if !raw_arg.starts_with("--") {
                args.push(self.arg_type.parse(raw_arg, Span::Exact(arg_index))?);
                continue;
            }

            for (flag_index, flag) in self.flags.iter().enumerate() {
                if flag.values.contains(raw_arg) {
                    if let Some(prev) = &flags[flag_index] {
                        return Err(Error {
                            span: Span::Exact(arg_index),
                            kind: ErrorKind::SameFlagMultipleTimes(prev.to_string(), raw_arg.to_string()),
                        });
                    }

                    flags[flag_index] = Some(raw_arg.to_string());
                    continue 'raw_arg_loop;
                }
            }

            if let Some(ArgFlag { arg_type, .. }) = self.arg_flags.get(raw_arg) {
                expecting_flag_arg = Some((raw_arg.to_string(), *arg_type));
                continue;
            }

            if let Some((flag, value)) = raw_arg.split_once('=') {
                match self.arg_flags.get(flag) {
                    Some(ArgFlag { arg_type, .. }) => {
                        let value = arg_type.parse(value, Span::Exact(arg_index))?;
                        insert_arg_flag(&mut arg_flags, flag.to_string(), value, arg_index)?;
                        continue;
                    },
                    None => {
                        return Err(Error {
                            span: Span::Exact(arg_index),
                            kind: ErrorKind::UnknownFlag(flag.to_string()),
                        });
                    },
                }
            }

            return Err(Error {
                span: Span::Exact(arg_index),
                kind: ErrorKind::UnknownFlag(raw_arg.to_string()),
            });
        }

        if let Some((flag, arg_type)) = expecting_flag_arg {
            return Err(Error {
                span: Span::End,
                kind: ErrorKind::MissingArgument(flag, arg_type),
            });
        }

        let span = match self.arg_count {
            ArgCount::Leq(n) if args.len() > n => Some(Span::NthArg(n)),
            ArgCount::Exact(n) if args.len() != n => Some(if args.len() > n { Span::NthArg(n) } else { Span::End }),
            ArgCount::None if !args.is_empty() => Some(Span::FirstArg),
            _ => None,
        };

        if let Some(span) = span {
            return Err(Error {
                span,
                kind: ErrorKind::WrongArgCount {
                    expected: self.arg_count,
                    got: args.len(),
                },
            });
        }

        Ok(ParsedArgs {
            args,
            flags,
            arg_flags,
            show_help: false,
        })
    }
}

impl Default for ArgParser {
    fn default() -> Self {
        ArgParser::new()
    }
}

fn insert_arg_flag(
    arg_flags: &mut HashMap<String, String>,
    flag: String,
    value: String,
    arg_index: usize,
) -> Result<(), Error> {
    if arg_flags.contains_key(&flag) {
        return Err(Error {
            span: Span::Exact(arg_index),
            kind: ErrorKind::SameFlagMultipleTimes(flag.clone(), flag),
        });
    }

    arg_flags.insert(flag, value);
    Ok(())
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ArgCount {
    Leq(usize),
    Exact(usize),
    Any,
    None,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ArgType {
    String,
    Path,
    Integer,

    /// one of the given values
    Choice(&'static [&'static str]),
}

impl ArgType {
    pub fn parse(&self, arg: &str, span: Span) -> Result<String, Error> {
        match self {
            ArgType::Integer => match arg.parse::<i64>() {
                Ok(_) => Ok(arg.to_string()),
                Err(e) => Err(Error {
                    span,
                    kind: ErrorKind::ParseIntError(e),
                }),
            },
            ArgType::Choice(choices) => if choices.contains(&arg) {
                Ok(arg.to_string())
            } else {
                Err(Error {
                    span,
                    kind: ErrorKind::InvalidChoice {
                        got: arg.to_string(),
                        choices: choices.iter().map(|c| c.to_string()).collect(),
                    },
                })
            },
            ArgType::String
            | ArgType::Path => Ok(arg.to_string()),
        }
    }
}

struct Flag {
    values: Vec<String>,
}

struct ArgFlag {
    arg_type: ArgType,
}

#[derive(Debug)]
pub struct ParsedArgs {
    args: Vec<String>,
    flags: Vec<Option<String>>,
    arg_flags: HashMap<String, String>,
    show_help: bool,
}

impl ParsedArgs {
    pub fn get_args(&self) -> Vec<String> {
        self.args.clone()
    }

    // if there's an index error, it panics instead of returning None
    // if it returns None, that means Nth flag is not set
    pub fn get_flag(&self, index: usize) -> Option<String> {
        self.flags[index].clone()
    }

    pub fn get_arg_flag(&self, flag: &str) -> Option<String> {
        self.arg_flags.get(flag).cloned()
    }

    pub fn show_help(&self) -> bool {
        self.show_help
    }
}

pub fn underline_span(prefix: &str, args: &str, start: usize, end: usize) -> String {
    format!(
        "{prefix}{args}\n{}{}{}",
        " ".repeat(prefix.chars().count()),
        " ".repeat(args[..start].chars().count()),
        "^".repeat(args[start..end].chars().count().max(1)),
    )
}

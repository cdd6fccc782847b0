use crate::{ArgCount, ArgType, Span, underline_span};

#[derive(Debug)]
pub struct Error {
    pub span: Span,
    pub kind: ErrorKind,
}

impl Error {
    /// message and the underlined args, if the span is rendered
    pub fn render(&self, prefix: &str) -> String {
        match &self.span {
            Span::Rendered((args, start, end)) => format!(
                "{}\n\n{}",
                self.kind.render(),
                underline_span(prefix, args, *start, *end),
            ),
            _ => self.kind.render(),
        }
    }
}

#[derive(Debug)]
pub enum ErrorKind {
    /// see <https://doc.rust-lang.org/stable/std/num/struct.ParseIntError.html>
    ParseIntError(std::num::ParseIntError),

    /// (prev_flag, curr_flag)
    SameFlagMultipleTimes(String, String),

    /// of an arg_flag
    MissingArgument(String, ArgType),

    WrongArgCount {
        expected: ArgCount,
        got: usize,
    },
    UnknownFlag(String),
    InvalidChoice {
        got: String,
        choices: Vec<String>,
    },
}

impl ErrorKind {
    pub fn render(&self) -> String {
        match self {
            ErrorKind::ParseIntError(_) => String::from("Cannot parse int."),
            ErrorKind::SameFlagMultipleTimes(prev, next) => if prev == next {
                format!("Flag `{next}` cannot be used multiple times.")
            } else {
                format!("Flag `{prev}` and `{next}` cannot be used together.")
            },
            ErrorKind::MissingArgument(flag, arg_type) => format!(
                "A value is required for flag `{flag}` ({}), but is missing.",
                match arg_type {
                    ArgType::Choice(choices) => choices.join(" | "),
                    t => format!("{t:?}").to_ascii_lowercase(),
                },
            ),
            ErrorKind::WrongArgCount { expected, got } => format!(
                "Expected {} arguments, got {got} arguments.",
                match expected {
                    ArgCount::Exact(n) => format!("exactly {n}"),
                    ArgCount::Leq(n) => format!("at most {n}"),
                    ArgCount::None => String::from("no"),
                    ArgCount::Any => String::from("any number of"),
                },
            ),
            ErrorKind::UnknownFlag(flag) => format!("Unknown flag: `{flag}`."),
            ErrorKind::InvalidChoice { got, choices } => format!(
                "`{got}` is not a valid value. Valid values are: {}.",
                choices.join(", "),
            ),
        }
    }
}

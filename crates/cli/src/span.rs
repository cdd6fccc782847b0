#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Span {
    Exact(usize),  // including flags and args
    FirstArg,
    End,
    NthArg(usize),  // 0-based, not including flags

    /// (joined args, start, end), in bytes
    Rendered((String, usize, usize)),
}

impl Span {
    pub(crate) fn render(&self, args: &[String]) -> Self {
        let rendered_args = args.iter().map(
            |arg| if arg.contains([' ', '"', '\'', '\n']) {
                format!("{arg:?}")
            } else {
                arg.to_string()
            }
        ).collect::<Vec<_>>();
        let positional_indices = args.iter().enumerate().filter(
            |(_, arg)| !arg.starts_with("--")
        ).map(
            |(index, _)| index
        ).collect::<Vec<_>>();

        let selected_index = match self {
            Span::Exact(n) => *n,
            Span::FirstArg => positional_indices.first().copied().unwrap_or(0),
            Span::NthArg(n) => positional_indices.get(*n).copied().unwrap_or(0),
            _ => 0,
        };
        let joined_args = rendered_args.join(" ");

        if joined_args.is_empty() {
            return Span::Rendered((String::from(" "), 0, 1));
        }

        let (start, end) = match self {
            Span::End => (joined_args.len(), joined_args.len()),
            _ => {
                let selected_index = selected_index.min(rendered_args.len() - 1);
                let start = rendered_args[..selected_index].iter().map(|arg| arg.len() + 1).sum::<usize>();

                (start, start + rendered_args[selected_index].len())
            },
        };

        Span::Rendered((joined_args, start, end))
    }
}

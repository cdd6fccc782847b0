use crate::{ArgCount, ArgParser, ArgType, ErrorKind, Span};

const CHARSETS: &[&str] = &["full", "ks-x-1001"];

fn parser() -> ArgParser {
    let mut parser = ArgParser::new();
    parser
        .optional_flag(&["--stats"])
        .optional_arg_flag("--output", ArgType::Path)
        .optional_arg_flag("--charset", ArgType::Choice(CHARSETS))
        .args(ArgType::Path, ArgCount::Leq(1));
    parser
}

fn args(s: &str) -> Vec<String> {
    s.split_whitespace().map(|s| s.to_string()).collect()
}

#[test]
fn parse_valid_args() {
    let parser = parser();

    let parsed = parser.parse(&args("")).unwrap();
    assert!(parsed.get_args().is_empty());
    assert_eq!(parsed.get_flag(0), None);
    assert_eq!(parsed.get_arg_flag("--output"), None);
    assert_eq!(parsed.get_arg_flag("--charset"), None);

    let parsed = parser.parse(&args("a.png --stats --output out.pfp --charset=ks-x-1001")).unwrap();
    assert_eq!(parsed.get_args(), vec![String::from("a.png")]);
    assert_eq!(parsed.get_flag(0), Some(String::from("--stats")));
    assert_eq!(parsed.get_arg_flag("--output"), Some(String::from("out.pfp")));
    assert_eq!(parsed.get_arg_flag("--charset"), Some(String::from("ks-x-1001")));

    assert!(parser.parse(&args("a.png --help")).unwrap().show_help());
}

#[test]
fn parse_invalid_args() {
    let parser = parser();
    let samples = [
        ("a.png b.png", 1),
        ("--unknown", 0),
        ("--charset ascii", 1),
        ("--output a --output b", 3),
        ("--stats --stats", 1),
    ];

    for (raw_args, index) in samples.into_iter() {
        let e = parser.parse(&args(raw_args)).unwrap_err();
        let Span::Rendered((joined, start, end)) = e.span else { panic!() };

        assert_eq!(&joined[start..end], args(raw_args)[index]);
    }

    let e = parser.parse(&args("--output")).unwrap_err();
    assert!(matches!(e.kind, ErrorKind::MissingArgument(_, ArgType::Path)));

    let e = parser.parse(&args("--charset=ascii")).unwrap_err();
    assert!(matches!(e.kind, ErrorKind::InvalidChoice { .. }));
    assert!(e.render("pfpgen ").contains("full, ks-x-1001"));
}

use chrono::Local;
use pfp_cli::{ArgCount, ArgParser, ArgType};
use pfp_fs::{initialize_log_file, set_log_file_path, write_log};
use pfp_generator::{
    Charset,
    DEFAULT_IMAGE_PATH,
    Error,
    GeneratorConfig,
    Generator,
    generate_with,
};
use std::env;

fn main() {
    let args = env::args().collect::<Vec<_>>();

    match run(args) {
        Ok(()) => {},
        Err(e) => {
            write_log("main", &e.render());

            match e {
                // The rule table is broken. Nothing was written.
                Error::Classification(_) => {
                    eprintln!("{}\nthis is a bug in the shape rules, please report it", e.render());
                },
                e => {
                    eprintln!("{}", e.render());
                },
            }

            std::process::exit(1);
        },
    }
}

fn run(args: Vec<String>) -> Result<(), Error> {
    let parsed_args = ArgParser::new()
        .optional_flag(&["--stats"])
        .optional_arg_flag("--output", ArgType::Path)
        .optional_arg_flag("--config", ArgType::Path)
        .optional_arg_flag("--charset", ArgType::Choice(Charset::ALL_NAMES))
        .optional_arg_flag("--log", ArgType::Path)
        .args(ArgType::Path, ArgCount::Leq(1))
        .parse(&args[1.min(args.len())..])?;

    if parsed_args.show_help() {
        println!("{}", include_str!("../docs/help.txt"));
        return Ok(());
    }

    if let Some(log) = parsed_args.get_arg_flag("--log") {
        initialize_log_file(&log, true)?;
        set_log_file_path(Some(log));
    }

    let mut config = match parsed_args.get_arg_flag("--config") {
        Some(path) => GeneratorConfig::load_from_file(&path)?,
        None => GeneratorConfig::default(),
    };

    if let Some(output) = parsed_args.get_arg_flag("--output") {
        config.output = output;
    }

    if let Some(charset) = parsed_args.get_arg_flag("--charset") {
        config.charset = Charset::parse(&charset).ok_or_else(
            || Error::InvalidConfig(format!("unknown charset: {charset:?}"))
        )?;
    }

    let image_path = parsed_args.get_args().first().cloned().unwrap_or_else(|| DEFAULT_IMAGE_PATH.to_string());
    let show_stats = parsed_args.get_flag(0).is_some();
    let started_at = Local::now();

    write_log("main", &format!("image: `{image_path}`, output: `{}`, charset: {:?}", config.output, config.charset));
    let generator = Generator::new(&config)?;
    let result = generate_with(&generator, &image_path, &config)?;

    println!(
        "wrote {} base glyphs and {} composed glyphs to `{}` in {}ms",
        result.base_glyphs,
        result.composed_glyphs,
        config.output,
        (Local::now() - started_at).num_milliseconds(),
    );
    println!("sha3-256: {}", result.digest);

    if show_stats {
        for (class, count) in generator.class_report(config.charset)?.iter() {
            println!("{:>4} {:>6}  {}", class.rank(), count, class.describe());
        }
    }

    Ok(())
}

//! Command-line interface for linegram
//! Reads an input file according to a grammar file and prints the result.
//!
//! Usage:
//!   linegram `<input>`                     - Parse with the `grammar` file in the working directory
//!   linegram `<input>` `<grammar>`         - Parse with the given grammar file
//!   linegram `<input>` --format json       - Choose the output format (pretty, json, yaml)
//!   linegram --list-formats              - List available output formats

use clap::{Arg, ArgAction, Command};
use linegram::formats::FormatRegistry;
use linegram::grammar::grammar_treeviz;
use linegram::{Error, GrammarParser, ParseOptions, TrailingInput};
use tracing::{info, Level};

const DEFAULT_GRAMMAR: &str = "grammar";

fn main() {
    let matches = Command::new("linegram")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Read a line-oriented text file according to a declarative grammar")
        .arg_required_else_help(true)
        .arg(
            Arg::new("input")
                .help("Path to the input file")
                .required_unless_present("list-formats")
                .index(1),
        )
        .arg(
            Arg::new("grammar")
                .help("Path to the grammar file (default: ./grammar)")
                .index(2),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format")
                .default_value("pretty"),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .help("Fail when input lines are left over after the grammar is exhausted")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("show-grammar")
                .long("show-grammar")
                .help("Print the compiled grammar tree before the result")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log progress to stderr (repeat for more detail)")
                .action(ArgAction::Count),
        )
        .get_matches();

    init_logging(matches.get_count("verbose"));

    let registry = FormatRegistry::with_defaults();

    if matches.get_flag("list-formats") {
        handle_list_formats_command(&registry);
        return;
    }

    let input = matches
        .get_one::<String>("input")
        .expect("input is required unless listing formats");
    let grammar = match matches.get_one::<String>("grammar") {
        Some(path) => path.as_str(),
        None => {
            info!("no grammar file given, assuming a \"{DEFAULT_GRAMMAR}\" file exists in the current directory");
            DEFAULT_GRAMMAR
        }
    };
    let format = matches.get_one::<String>("format").unwrap();

    let options = if matches.get_flag("strict") {
        ParseOptions::default().with_trailing_input(TrailingInput::Strict)
    } else {
        ParseOptions::default()
    };

    handle_parse_command(
        &registry,
        input,
        grammar,
        format,
        options,
        matches.get_flag("show-grammar"),
    );
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

/// Compile the grammar, then parse the input and print it
fn handle_parse_command(
    registry: &FormatRegistry,
    input: &str,
    grammar: &str,
    format: &str,
    options: ParseOptions,
    show_grammar: bool,
) {
    if !registry.has(format) {
        eprintln!("Error: unknown format '{}'", format);
        eprintln!("\nAvailable formats:");
        for name in registry.list_formats() {
            eprintln!("  {}", name);
        }
        std::process::exit(1);
    }

    // The grammar is fully validated before the input file is touched
    let parser = GrammarParser::from_file(grammar)
        .unwrap_or_else(|e| exit_with(e))
        .with_options(options);

    if show_grammar {
        print!("{}", grammar_treeviz(parser.procedures()));
    }

    let state = parser.parse_file(input).unwrap_or_else(|e| exit_with(e));
    let output = registry
        .serialize(&state, format)
        .unwrap_or_else(|e| exit_with(e.into()));

    print!("{}", output);
}

fn exit_with(err: Error) -> ! {
    match err {
        Error::Grammar(e) => eprintln!("{}", e),
        e => eprintln!("Error: {}", e),
    }
    std::process::exit(1);
}

fn handle_list_formats_command(registry: &FormatRegistry) {
    println!("Available output formats:\n");
    for name in registry.list_formats() {
        let description = registry.get(&name).map(|f| f.description()).unwrap_or("");
        println!("  {}", name);
        println!("    {}", description);
    }
}

//! Command-line interface for txt2tex
//! This binary inspects what the front end makes of a txt2tex file. LaTeX generation is
//! done elsewhere; here you can see the token stream and the parse tree.
//!
//! Usage:
//!   txt2tex tokens `<path>`                          - Print the token stream
//!   txt2tex ast `<path>` [--format `<format>`]        - Print the parse tree (tag, json, yaml)
//!
//! Set `RUST_LOG=txt2tex=debug` to see lexer and parser events on stderr.

use clap::{Arg, Command};
use tracing_subscriber::EnvFilter;
use txt2tex::txt2tex::formats::serialize_ast;
use txt2tex::{parse_source, tokenize};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let matches = Command::new("txt2tex")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect how txt2tex source is tokenized and parsed")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("tokens")
                .about("Print the token stream, one token per line")
                .arg(
                    Arg::new("path")
                        .help("Path to the txt2tex file")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(
            Command::new("ast")
                .about("Print the parse tree")
                .arg(
                    Arg::new("path")
                        .help("Path to the txt2tex file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format")
                        .value_parser(["tag", "json", "yaml"])
                        .default_value("tag"),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("tokens", tokens_matches)) => {
            let path = required(tokens_matches, "path");
            handle_tokens_command(path);
        }
        Some(("ast", ast_matches)) => {
            let path = required(ast_matches, "path");
            let format = required(ast_matches, "format");
            handle_ast_command(path, format);
        }
        _ => unreachable!(),
    }
}

fn required<'a>(matches: &'a clap::ArgMatches, name: &str) -> &'a str {
    matches
        .get_one::<String>(name)
        .map(String::as_str)
        .unwrap_or_else(|| fail(&format!("missing argument '{}'", name)))
}

fn fail(message: &str) -> ! {
    eprintln!("Error: {}", message);
    std::process::exit(1);
}

fn read_source(path: &str) -> String {
    std::fs::read_to_string(path)
        .unwrap_or_else(|e| fail(&format!("cannot read {}: {}", path, e)))
}

/// Handle the tokens command
fn handle_tokens_command(path: &str) {
    let source = read_source(path);
    let tokens = tokenize(&source).unwrap_or_else(|e| fail(&format!("{}: {}", path, e)));
    for token in tokens {
        println!(
            "{:>4}:{:<4} {:<16} {:?}",
            token.line,
            token.column,
            format!("{:?}", token.kind),
            token.text
        );
    }
}

/// Handle the ast command
fn handle_ast_command(path: &str, format: &str) {
    let source = read_source(path);
    let ast = parse_source(&source).unwrap_or_else(|e| fail(&format!("{}: {}", path, e)));

    let output = match format {
        "tag" => serialize_ast(&ast),
        "json" => serde_json::to_string_pretty(&ast)
            .unwrap_or_else(|e| fail(&format!("JSON serialization failed: {}", e))),
        "yaml" => serde_yaml::to_string(&ast)
            .unwrap_or_else(|e| fail(&format!("YAML serialization failed: {}", e))),
        other => fail(&format!("unknown format '{}'", other)),
    };

    println!("{}", output.trim_end());
}

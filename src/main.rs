use std::{
    fs,
    io::{self, BufRead, IsTerminal, Write},
};

use anyhow::Context;
use clap::Parser;
use reckon::{
    error::Error,
    evaluate_expression_with,
    interpreter::{
        lexer::{dump_tokens, scan},
        limits::Limits,
        value::number::Number,
        variables::Variables,
    },
    parse_source,
};
use tracing_subscriber::{EnvFilter, fmt};

/// reckon evaluates arithmetic expressions with integers, floats, variables
/// and the operators + - * / %.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells reckon to read expressions from a file, one per line, instead of
    /// taking a single expression.
    #[arg(short, long)]
    file: bool,

    /// Binds a variable for use in expressions. May be repeated.
    #[arg(long = "var", value_name = "NAME=VALUE", value_parser = Variables::parse_binding)]
    vars: Vec<(String, Number)>,

    /// Prints the token sequence before evaluating.
    #[arg(long)]
    tokens: bool,

    /// Prints the syntax tree before evaluating.
    #[arg(long)]
    tree: bool,

    /// Longest accepted expression, in bytes.
    #[arg(long, default_value_t = Limits::default().max_input_len)]
    max_input_len: usize,

    /// Deepest accepted nesting of parentheses.
    #[arg(long, default_value_t = Limits::default().max_depth)]
    max_depth: usize,

    /// The expression, or a path when `--file` is given. Reads standard input
    /// line by line when omitted.
    contents: Option<String>,
}

struct Session {
    variables: Variables,
    limits:    Limits,
    tokens:    bool,
    tree:      bool,
    failures:  usize,
}

impl Session {
    fn run(&mut self, source: &str) {
        if self.tokens {
            match scan(source, &self.variables) {
                Ok(tokens) => print!("{}", dump_tokens(&tokens)),
                Err(e) => return self.report(source, &e.into()),
            }
        }

        if self.tree {
            match parse_source(source, &self.variables, &self.limits) {
                Ok(expr) => print!("{}", expr.dump_tree()),
                Err(e) => return self.report(source, &e),
            }
        }

        match evaluate_expression_with(source, &self.variables, &self.limits) {
            Ok(value) => println!("{value}"),
            Err(e) => self.report(source, &e),
        }
    }

    fn report(&mut self, source: &str, error: &Error) {
        self.failures += 1;
        eprintln!("{source}");
        eprintln!("{}^", " ".repeat(source[..error.offset().min(source.len())].chars().count()));
        eprintln!("{error}");
    }
}

fn is_expression_line(line: &str) -> bool {
    let line = line.trim();
    !line.is_empty() && !line.starts_with('#')
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // RECKON_LOG takes precedence over RUST_LOG; default to warnings only.
    let filter = EnvFilter::try_from_env("RECKON_LOG").or_else(|_| EnvFilter::try_from_default_env())
                                                      .unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter)
         .with_writer(io::stderr)
         .with_target(false)
         .init();

    let mut session = Session { variables: args.vars.into_iter().collect(),
                                limits:    Limits::new(args.max_input_len, args.max_depth),
                                tokens:    args.tokens,
                                tree:      args.tree,
                                failures:  0, };

    match args.contents {
        Some(path) if args.file => {
            let script = fs::read_to_string(&path).with_context(|| {
                             format!("Failed to read the input file '{path}'. Perhaps this file does not exist?")
                         })?;
            for line in script.lines().filter(|line| is_expression_line(line)) {
                session.run(line.trim());
            }
        },
        Some(expression) => session.run(&expression),
        None => {
            let stdin = io::stdin();
            let interactive = stdin.is_terminal();
            let mut lines = stdin.lock().lines();
            loop {
                if interactive {
                    print!("> ");
                    io::stdout().flush()?;
                }
                let Some(line) = lines.next() else { break };
                let line = line.context("Failed to read from standard input")?;
                if is_expression_line(&line) {
                    session.run(line.trim());
                }
            }
        },
    }

    if session.failures > 0 {
        std::process::exit(1);
    }
    Ok(())
}

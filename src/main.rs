use clap::{Parser as ClapParser, Subcommand, ValueEnum};
use log::{LevelFilter, debug};
use ruleval::Engine;
use ruleval::cli::{self, CheckOptions, CliError};
use std::io::{self, BufRead};

#[derive(ClapParser)]
#[command(name = "ruleval")]
#[command(about = "Ruleval - evaluate rule predicates over numbers, booleans, strings, dates and string arrays")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate one or more expressions
    Check {
        /// Expressions to evaluate (reads one per line from stdin if none given)
        expressions: Vec<String>,

        /// Parse representation used for evaluation
        #[arg(short, long, value_enum, default_value_t = EngineArg::Tree)]
        engine: EngineArg,

        /// Print one JSON object per expression
        #[arg(short, long)]
        json: bool,

        /// Only validate syntax and print the postfix form
        #[arg(long)]
        syntax_only: bool,
    },

    /// Evaluate the built-in sample expressions
    Demo {
        #[arg(short, long, value_enum, default_value_t = EngineArg::Tree)]
        engine: EngineArg,
    },

    /// List documentation categories
    Docs,

    /// Show documentation for a specific category
    Doc {
        /// Category name (use 'ruleval docs' to list categories)
        category: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum EngineArg {
    Tree,
    Postfix,
}

impl From<EngineArg> for Engine {
    fn from(arg: EngineArg) -> Self {
        match arg {
            EngineArg::Tree => Engine::Tree,
            EngineArg::Postfix => Engine::Postfix,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Check {
            expressions,
            engine,
            json,
            syntax_only,
        } => run_check(expressions, engine.into(), json, syntax_only),
        Commands::Demo { engine } => {
            run_demo(engine.into());
            Ok(())
        }
        Commands::Docs => {
            print!("{}", cli::get_docs_overview());
            Ok(())
        }
        Commands::Doc { category } => match cli::get_doc_category(&category) {
            Ok(content) => {
                print!("{}", content);
                Ok(())
            }
            Err(e) => Err(e),
        },
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    let mut builder = pretty_env_logger::formatted_builder();
    builder.filter_level(level);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    // A logger may already be installed by an embedding host
    let _ = builder.try_init();
}

fn run_check(
    expressions: Vec<String>,
    engine: Engine,
    json: bool,
    syntax_only: bool,
) -> Result<(), CliError> {
    let expressions = if expressions.is_empty() && !atty::is(atty::Stream::Stdin) {
        read_stdin_expressions()?
    } else {
        expressions
    };
    debug!("Checking {} expression(s) with {:?} engine", expressions.len(), engine);

    let options = CheckOptions {
        expressions,
        engine,
        syntax_only,
    };

    for result in cli::execute_check(&options)? {
        if json {
            println!("{}", serde_json::to_string(&result.to_json())?);
        } else {
            println!("{}", result.to_line());
        }
    }
    Ok(())
}

fn read_stdin_expressions() -> Result<Vec<String>, CliError> {
    let mut expressions = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line?;
        if !line.trim().is_empty() {
            expressions.push(line);
        }
    }
    Ok(expressions)
}

fn run_demo(engine: Engine) {
    for (expression, result) in cli::run_demo(engine) {
        match result {
            Ok(value) => println!("{} => {}", expression, value),
            Err(e) => println!("{} => error: {}", expression, e),
        }
    }
}

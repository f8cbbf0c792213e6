use clap::{Parser as ClapParser, Subcommand};
use sieve_lang::{
    QueryEngine,
    cli::{self, CheckOptions, CliError},
};
use std::{
    io::{self, Read},
    path::PathBuf,
};

#[derive(ClapParser)]
#[command(name = "sieve")]
#[command(about = "Sieve - tokenize, convert and complete filter queries against a field schema")]
#[command(version)]
struct Cli {
    /// JSON file describing the queryable fields
    #[arg(short, long, global = true)]
    schema: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the classified tokens of a query
    Tokenize {
        /// The query text
        query: String,

        /// Print tokens as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check that a query is complete and valid
    Check {
        /// The query text
        query: String,
    },

    /// Convert query text to its JSON tree
    Tree {
        /// The query text
        query: String,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Convert a JSON tree to query text
    Text {
        /// JSON tree (reads from stdin if not provided)
        tree: Option<String>,
    },

    /// Suggest completions at a caret position
    Suggest {
        /// The query text
        query: String,

        /// Caret position as a character offset (defaults to the end)
        #[arg(short, long)]
        cursor: Option<usize>,
    },

    /// List documentation categories
    Docs,

    /// Show documentation for a specific category
    Doc {
        /// Category name (use 'sieve docs' to list categories)
        category: String,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let result = match cli.command {
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
        command => load_engine(cli.schema).and_then(|engine| run(&engine, command)),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn load_engine(schema: Option<PathBuf>) -> Result<QueryEngine, CliError> {
    let schema = match schema {
        Some(path) => cli::load_schema(&path)?,
        None => {
            log::warn!("no --schema given, every field will be unknown");
            sieve_lang::Schema::default()
        }
    };
    Ok(QueryEngine::new(schema))
}

fn run(engine: &QueryEngine, command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Tokenize { query, json } => {
            let tokens = engine.tokenize(&query)?;
            if json {
                let tokens: Vec<_> = tokens
                    .iter()
                    .map(|t| serde_json::json!({ "type": t.kind.name(), "value": t.value }))
                    .collect();
                println!("{}", serde_json::to_string(&tokens)?);
            } else {
                print!("{}", cli::format_tokens(&tokens));
            }
        }
        Commands::Check { query } => {
            let report = cli::execute_check(engine, &CheckOptions { query, strict: true })?;
            println!("Query is valid ({} tokens)", report.tokens.len());
        }
        Commands::Tree { query, pretty } => {
            println!("{}", cli::text_to_tree_json(engine, &query, pretty)?);
        }
        Commands::Text { tree } => {
            let tree = match tree {
                Some(s) => s,
                None if !atty::is(atty::Stream::Stdin) => {
                    let mut buffer = String::new();
                    io::stdin().read_to_string(&mut buffer)?;
                    buffer
                }
                None => return Err(CliError::NoInput),
            };
            println!("{}", cli::tree_json_to_text(engine, &tree)?);
        }
        Commands::Suggest { query, cursor } => {
            for line in cli::execute_suggest(engine, &query, cursor)? {
                println!("{:<24}{}", line.value, line.preview);
            }
        }
        Commands::Docs | Commands::Doc { .. } => {}
    }
    Ok(())
}

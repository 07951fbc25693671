use clap::{Parser as ClapParser, Subcommand};
use jql2::cli::{self, CheckOptions, CheckResult, CliError};
use std::io::{self, Read};

#[derive(ClapParser)]
#[command(name = "jql2")]
#[command(about = "jql2 - Parse JCR-SQL2 queries and print their canonical or QOM form")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a JCR-SQL2 query and print its canonical form
    Check {
        /// The query to parse (reads from stdin if not provided)
        query: Option<String>,

        /// Only validate syntax, don't print the canonical form
        #[arg(long)]
        syntax_only: bool,

        /// Print the parsed QOM as JSON
        #[arg(long)]
        dump: bool,

        /// Pretty-print the QOM JSON
        #[arg(short, long)]
        pretty: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check {
            query,
            syntax_only,
            dump,
            pretty,
        } => run_check(query, syntax_only, dump, pretty),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run_check(
    query: Option<String>,
    syntax_only: bool,
    dump: bool,
    pretty: bool,
) -> Result<(), CliError> {
    let query = match query {
        Some(q) => q,
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(CliError::Io)?;
            buffer.trim().to_string()
        }
        None => return Err(CliError::NoInput),
    };

    let options = CheckOptions {
        query,
        syntax_only,
        dump,
    };

    match cli::execute_check(&options)? {
        CheckResult::SyntaxValid => println!("Syntax is valid"),
        CheckResult::Canonical(sql2) => println!("{}", sql2),
        CheckResult::Dump(qom) => {
            let json = if pretty {
                serde_json::to_string_pretty(&qom)
            } else {
                serde_json::to_string(&qom)
            }
            .map_err(|e| CliError::Io(io::Error::new(io::ErrorKind::Other, e)))?;
            println!("{}", json);
        }
    }
    Ok(())
}

use std::process;

use clap::Parser;
use minisql::parse_query;

#[derive(Parser)]
#[command(
    name = "minisql",
    about = "Parse a SQL statement (SELECT, CREATE TABLE, INSERT) and report the result"
)]
struct Cli {
    /// SQL statement to parse
    #[arg(long)]
    query: String,

    /// Print the parsed AST as indented JSON
    #[arg(long)]
    debug_ast: bool,
}

fn main() {
    let cli = Cli::parse();

    let statement = match parse_query(&cli.query) {
        Ok(statement) => statement,
        Err(err) => {
            println!("{}", err);
            process::exit(1);
        }
    };

    println!("sql: {}", cli.query);
    if cli.debug_ast {
        println!("ast:");
        println!("{}", statement.to_pretty_json());
    } else {
        println!("query parsed ok");
    }
}

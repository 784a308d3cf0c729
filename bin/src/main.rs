use std::{
    io::{stdin, stdout, Write},
    path::PathBuf,
};

use ast::{AstPrinter, RpnPrinter};
use clap::Parser;
use scanner::Scanner;

#[derive(clap::Parser)]
struct Args {
    /// File holding a single expression. Starts a prompt if omitted.
    file: Option<PathBuf>,

    /// Print the parenthesized syntax tree instead of reverse polish notation.
    #[arg(long)]
    ast: bool,

    /// Print the scanned tokens before the expression.
    #[arg(long)]
    tokens: bool,
}

fn run_file(path: PathBuf, args: &Args) -> anyhow::Result<()> {
    println!("{}", run(&std::fs::read_to_string(path)?, args)?);
    Ok(())
}

fn run_prompt(args: &Args) -> anyhow::Result<()> {
    loop {
        print!("> ");
        stdout().flush()?;
        let mut line = String::new();
        if stdin().read_line(&mut line)? == 0 {
            return Ok(());
        }
        match run(&line, args) {
            Ok(output) => println!("{output}"),
            Err(e) => println!("{e}"),
        }
    }
}

fn run(source: &str, args: &Args) -> anyhow::Result<String> {
    if args.tokens {
        println!("{}", Scanner::new(source).scan_tokens());
    }

    let expr = parser::parse_source(source)?;
    log::debug!("{:?}", expr);

    Ok(if args.ast { AstPrinter.print(&expr) } else { RpnPrinter.print(&expr) })
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    match &args.file {
        Some(file) => run_file(file.clone(), &args),
        None => run_prompt(&args),
    }
}

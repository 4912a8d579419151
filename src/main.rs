use std::io::Read;

use anyhow::Context;
use clap::Parser as ClapParser;
use log::debug;

use jsonast::PrettyPrinter;

/// Read one JSON document from stdin and pretty-print it to stdout.
#[derive(Debug, ClapParser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Spaces per nesting level in the output.
    #[arg(long, default_value_t = 4)]
    indent: usize,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;
    debug!("read {} bytes", input.len());

    match jsonast::parse(&input) {
        Ok(tree) => {
            let mut printer = PrettyPrinter::new(args.indent);
            tree.accept(&mut printer);
            println!("{}", printer.into_string());
        }
        Err(e) => println!("JsonSyntaxError: {e}"),
    }
    Ok(())
}

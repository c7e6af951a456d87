use std::{
    io::{self, BufRead, IsTerminal, Write},
    process::ExitCode,
};

use clap::Parser;
use plotexpr::{
    ast::Node,
    error::Error,
    interpreter::{
        evaluator::interpret,
        lexer::tokenize,
        parser::{ParseOptions, parse_with},
        symbols::{SymbolEntry, SymbolTable},
    },
};
use tracing_subscriber::{EnvFilter, fmt};

/// plotexpr evaluates arithmetic expressions such as `2pi`, `sin(0)` or
/// `|3-10|*2`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Recover from missing delimiters and operands instead of failing.
    #[arg(short, long)]
    lenient: bool,

    /// Use the extended symbol table (tau, sqrt, ln, exp, ...).
    #[arg(short, long)]
    extended: bool,

    /// Print the tokens of each expression before evaluating it.
    #[arg(long)]
    tokens: bool,

    /// Print the parsed tree of each expression before evaluating it.
    #[arg(long)]
    tree: bool,

    /// List the names in the symbol table and exit.
    #[arg(long)]
    symbols: bool,

    /// Expression to evaluate. Starts an interactive session when omitted;
    /// `:q` leaves it.
    expression: Option<String>,
}

struct Session {
    symbols: SymbolTable,
    options: ParseOptions,
    tokens:  bool,
    tree:    bool,
}

impl Session {
    fn new(args: &Args) -> Self {
        let symbols = if args.extended {
            SymbolTable::extended()
        } else {
            SymbolTable::default()
        };
        let options = if args.lenient {
            ParseOptions::lenient()
        } else {
            ParseOptions::strict()
        };
        Self { symbols,
               options,
               tokens: args.tokens,
               tree: args.tree }
    }

    fn run(&self, source: &str) -> Result<(), Error> {
        if self.tokens {
            let dump: Vec<String> = tokenize(source).map(|token| token.to_string()).collect();
            println!("{}", dump.join(" "));
        }

        let tree: Node<'_> = parse_with(tokenize(source), self.options)?;
        if self.tree {
            print!("{tree}");
        }

        let result = interpret(&tree, &self.symbols)?;
        println!("{result} ({})", result.ty);
        Ok(())
    }

    fn list_symbols(&self) {
        for name in self.symbols.names() {
            match self.symbols.get(name) {
                Some(SymbolEntry::Constant(value)) => println!("{name} = {value}"),
                Some(SymbolEntry::Function(function)) => {
                    println!("{name}/{}", function.arity());
                },
                None => {},
            }
        }
    }

    fn repl(&self) -> io::Result<()> {
        let interactive = io::stdin().is_terminal();
        let mut stdout = io::stdout();
        let mut lines = io::stdin().lock().lines();

        loop {
            if interactive {
                print!("> ");
                stdout.flush()?;
            }
            let Some(line) = lines.next() else {
                return Ok(());
            };
            let line = line?;
            let source = line.trim();
            if source == ":q" {
                return Ok(());
            }
            if source.is_empty() {
                continue;
            }
            if let Err(e) = self.run(source) {
                eprintln!("{e}");
            }
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter)
         .with_writer(io::stderr)
         .with_target(false)
         .init();

    let session = Session::new(&args);

    if args.symbols {
        session.list_symbols();
        return ExitCode::SUCCESS;
    }

    if let Some(expression) = &args.expression {
        return match session.run(expression) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            },
        };
    }

    if let Err(e) = session.repl() {
        eprintln!("Failed to read from standard input: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

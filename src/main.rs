use std::{
    io::{self, BufRead, Write},
    process::ExitCode,
};

use clap::Parser;
use opcalc::{
    interpreter::{
        calculator::Calculator,
        lexer::Token,
        operator::Placement,
        registry::{BINARY_MINUS, SIGN_MINUS, UNARY_MINUS},
    },
    util::num::format_number,
};
use tracing_subscriber::{EnvFilter, fmt};

/// opcalc evaluates arithmetic expressions with a table of prefix, postfix
/// and binary operators.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Prints the postfix form of each expression. With an expression
    /// argument, the postfix form is printed instead of the result.
    #[arg(short, long)]
    postfix: bool,

    /// Lists the available operators and exits.
    #[arg(short, long)]
    operators: bool,

    /// The expression to evaluate. Without it, expressions are read from
    /// standard input, one per line, until `exit`.
    expression: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // OPCALC_LOG takes precedence over RUST_LOG; warnings only by default.
    let filter = EnvFilter::try_from_env("OPCALC_LOG").or_else(|_| EnvFilter::try_from_default_env())
                                                      .unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter)
         .with_writer(io::stderr)
         .with_target(false)
         .init();

    let calculator = Calculator::new();

    if args.operators {
        list_operators(&calculator);
        return ExitCode::SUCCESS;
    }

    if let Some(expression) = &args.expression {
        let output = if args.postfix {
            calculator.to_postfix(expression).map(|postfix| render(&postfix))
        } else {
            calculator.calculate(expression).map(format_number)
        };

        return match output {
            Ok(output) => {
                println!("{output}");
                ExitCode::SUCCESS
            },
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            },
        };
    }

    if let Err(e) = run_interactive(&calculator, args.postfix) {
        eprintln!("Failed to read from standard input: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

/// Reads expressions line by line until `exit` or end of input. Errors are
/// reported and the loop continues.
fn run_interactive(calculator: &Calculator, show_postfix: bool) -> io::Result<()> {
    println!("Type an expression to evaluate it, `exit` to quit.");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();

    loop {
        print!("Input expression: ");
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let input = line.trim_end_matches(['\r', '\n']);
        if input == "exit" {
            break;
        }
        if input.trim().is_empty() {
            continue;
        }

        if show_postfix && let Ok(postfix) = calculator.to_postfix(input) {
            println!("postfix: {}", render(&postfix));
        }

        match calculator.calculate(input) {
            Ok(value) => println!("{}", format_number(value)),
            Err(e) => eprintln!("{e}"),
        }
    }

    Ok(())
}

fn list_operators(calculator: &Calculator) {
    for operator in calculator.registry().iter() {
        let symbol = match operator.symbol() {
            BINARY_MINUS | UNARY_MINUS | SIGN_MINUS => "-",
            symbol => symbol,
        };
        let placement = match operator.placement() {
            Placement::LeftOfValue => "prefix",
            Placement::BetweenValues => "binary",
            Placement::RightOfValue => "postfix",
        };
        println!("{symbol:>3}  {:<16} {placement:<8} precedence {}",
                 operator.name(),
                 operator.precedence());
    }
}

fn render(postfix: &[Token<'_>]) -> String {
    postfix.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ")
}

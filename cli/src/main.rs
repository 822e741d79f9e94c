mod formatter;
mod interactive;
mod server;

use anyhow::Result;
use clap::{Parser, Subcommand};
use formatter::Formatter;

#[derive(Parser)]
#[command(name = "calc")]
#[command(about = "A four-operation calculator.")]
#[command(
    long_about = "Adds, subtracts, multiplies and divides two numbers.\nThe CLI evaluates a single calculation, or serves a calculator page and a /calculate endpoint over HTTP."
)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate one calculation and display the result
    ///
    /// Takes two operands and an operation name. Division by zero and unknown
    /// operations are reported as errors.
    ///
    /// Examples:
    ///   calc eval 4 2 add
    ///   calc eval -7.5 2.5 multiply
    ///   calc eval 10 4 divide --raw
    #[command(allow_negative_numbers = true)]
    Eval {
        /// First operand
        num1: Option<f64>,
        /// Second operand
        num2: Option<f64>,
        /// Operation to perform: add, subtract, multiply or divide
        operation: Option<String>,
        /// Output the raw value only (for piping to other tools)
        #[arg(short = 'r', long, conflicts_with = "json")]
        raw: bool,
        /// Output the response as JSON, as the HTTP endpoint returns it
        #[arg(long)]
        json: bool,
        /// Prompt for any operand or operation not given on the command line
        #[arg(short = 'i', long)]
        interactive: bool,
    },
    /// List the supported operations
    Operations,
    /// Start HTTP server (default: localhost:3000)
    ///
    /// Serves the calculator page at / and evaluates calculations via POST /calculate
    /// with num1, num2 and operation as form or query parameters.
    Server {
        /// Host address to bind to
        #[arg(long, env = "CALC_HOST", default_value = "127.0.0.1")]
        host: String,
        /// Port number to listen on
        #[arg(short, long, env = "CALC_PORT", default_value = "3000")]
        port: u16,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Eval {
            num1,
            num2,
            operation,
            raw,
            json,
            interactive,
        } => eval_command(num1, num2, operation, raw, json, interactive),
        Commands::Operations => operations_command(),
        Commands::Server { host, port } => server_command(&host, port),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn eval_command(
    num1: Option<f64>,
    num2: Option<f64>,
    operation: Option<String>,
    raw: bool,
    json: bool,
    interactive: bool,
) -> Result<()> {
    let (num1, num2, operation) = match (num1, num2, operation) {
        (Some(num1), Some(num2), Some(operation)) if !interactive => {
            (num1, num2, calc::Operation::from(operation))
        }
        (num1, num2, operation) => {
            if !interactive {
                eprintln!("Error: Missing operands\n");
                eprintln!("Usage: calc eval <NUM1> <NUM2> <OPERATION> [OPTIONS]\n");
                eprintln!("Examples:");
                eprintln!("  calc eval 4 2 add              - Add two numbers");
                eprintln!("  calc eval 10 4 divide --raw    - Print only the value");
                eprintln!("  calc eval --interactive        - Prompt for the missing values\n");
                eprintln!("To see available operations:");
                eprintln!("  calc operations");
                std::process::exit(1);
            }
            interactive::run_interactive(num1, num2, operation)?
        }
    };

    let response = calc::evaluate_operation(num1, num2, &operation);
    let formatter = Formatter::default();

    if json {
        print!("{}", formatter.format_json(&response)?);
    }

    match response.value() {
        Ok(value) => {
            if !json {
                print!(
                    "{}",
                    formatter.format_result(num1, num2, &operation, value, raw)
                );
            }
            Ok(())
        }
        Err(message) => Err(anyhow::anyhow!("{}", message)),
    }
}

fn operations_command() -> Result<()> {
    print!("{}", Formatter::default().format_operations());
    Ok(())
}

fn server_command(host: &str, port: u16) -> Result<()> {
    #[cfg(feature = "server")]
    {
        use tokio::runtime::Runtime;
        let rt = Runtime::new()?;
        rt.block_on(async {
            println!("Starting HTTP server on {}:{}", host, port);
            server::http::start_server(host, port).await
        })?;
    }

    #[cfg(not(feature = "server"))]
    {
        let _ = (host, port);
        eprintln!("Error: Server feature not enabled");
        eprintln!("Recompile with: cargo build --features server");
        std::process::exit(1);
    }

    Ok(())
}

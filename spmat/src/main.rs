//! `spmat` command-line entry point

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use spmat::{compute_files, init_logging, menu, BinaryOp, LogConfig, LogFormat, MatrixFile, MatrixSummary};

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(about = "spmat - add, subtract and multiply sparse integer matrices stored as text files")]
struct Cli {
    /// Log filter directive (overrides RUST_LOG)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Log output format (overrides SPMAT_LOG_FORMAT)
    #[arg(long, global = true, value_enum)]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive operation menu (default)
    Menu,
    /// Add two matrices
    Add(OperandArgs),
    /// Subtract the second matrix from the first
    Sub(OperandArgs),
    /// Multiply two matrices
    Mul(OperandArgs),
    /// Show matrix dimensions and fill
    Info {
        /// Matrix file
        file: PathBuf,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
struct OperandArgs {
    /// Left operand file
    left: PathBuf,

    /// Right operand file
    right: PathBuf,

    /// Output file for the result
    #[arg(short, long)]
    output: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = LogConfig::default().with_overrides(cli.log_format, cli.log_level);
    if let Err(e) = init_logging(&config) {
        eprintln!("Error: invalid logging configuration: {e}");
        return ExitCode::FAILURE;
    }

    let result = match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => menu::run_stdio().map_err(|e| e.to_string()),
        Commands::Add(args) => run_operation(BinaryOp::Add, args),
        Commands::Sub(args) => run_operation(BinaryOp::Subtract, args),
        Commands::Mul(args) => run_operation(BinaryOp::Multiply, args),
        Commands::Info { file, json } => show_info(file, json),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run_operation(op: BinaryOp, args: OperandArgs) -> Result<(), String> {
    let result = compute_files(op, &args.left, &args.right, &args.output).map_err(|e| e.to_string())?;
    println!(
        "{} completed: {}x{} with {} non-zero elements saved to {}",
        op.name(),
        result.rows(),
        result.cols(),
        result.nnz(),
        args.output.display()
    );
    Ok(())
}

fn show_info(file: PathBuf, json: bool) -> Result<(), String> {
    let matrix = MatrixFile::read(&file).map_err(|e| e.to_string())?;

    if json {
        return print_json(&MatrixSummary::of(&matrix));
    }

    println!("Matrix Info:");
    println!("  File: {}", file.display());
    for line in matrix.to_string().lines() {
        println!("  {line}");
    }
    println!("  Density: {:.6}", matrix.density());
    Ok(())
}

#[cfg(feature = "serde")]
fn print_json(summary: &MatrixSummary) -> Result<(), String> {
    let json = summary.to_json().map_err(|e| e.to_string())?;
    println!("{json}");
    Ok(())
}

#[cfg(not(feature = "serde"))]
fn print_json(_summary: &MatrixSummary) -> Result<(), String> {
    Err("JSON output requires the 'serde' feature".to_string())
}

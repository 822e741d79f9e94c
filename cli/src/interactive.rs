use anyhow::{Context, Result};
use calc::Operation;
use inquire::{CustomType, Select};

/// Prompt for whatever the command line left out
pub fn run_interactive(
    num1: Option<f64>,
    num2: Option<f64>,
    operation: Option<String>,
) -> Result<(f64, f64, Operation)> {
    let num1 = match num1 {
        Some(value) => value,
        None => prompt_operand("First number")?,
    };

    let operation = match operation {
        Some(selector) => Operation::from(selector),
        None => select_operation()?,
    };

    let num2 = match num2 {
        Some(value) => value,
        None => prompt_operand("Second number")?,
    };

    Ok((num1, num2, operation))
}

fn prompt_operand(label: &str) -> Result<f64> {
    CustomType::<f64>::new(label)
        .with_help_message("Examples: 4, -2.5, 1e3")
        .with_error_message("Please enter a valid number")
        .prompt()
        .with_context(|| format!("Failed to get value for {}", label.to_lowercase()))
}

fn select_operation() -> Result<Operation> {
    let display_options: Vec<String> = Operation::SUPPORTED
        .iter()
        .map(|op| format!("{} ({})", op.name(), op.symbol().unwrap_or_default()))
        .collect();

    let selected = Select::new("Select an operation:", display_options.clone())
        .with_help_message("Use arrow keys to navigate, Enter to select")
        .prompt()
        .context("Failed to get operation selection")?;

    let index = display_options
        .iter()
        .position(|option| option == &selected)
        .context("Failed to find selected operation index")?;

    Ok(Operation::SUPPORTED[index].clone())
}

use calc::{Operation, Response};
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Row, Table};

pub struct Formatter {}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter {
    pub fn new() -> Self {
        Self {}
    }

    /// Format a successful evaluation. In raw mode only the value is printed.
    pub fn format_result(
        &self,
        num1: f64,
        num2: f64,
        operation: &Operation,
        result: f64,
        raw: bool,
    ) -> String {
        if raw {
            return format!("{}\n", result);
        }

        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(Row::from(vec![
            Cell::new("Expression").set_alignment(CellAlignment::Left),
            Cell::new("Result").set_alignment(CellAlignment::Right),
        ]));
        table.add_row(Row::from(vec![
            Cell::new(self.format_expression(num1, num2, operation)),
            Cell::new(result).set_alignment(CellAlignment::Right),
        ]));

        format!("{}\n", table)
    }

    pub fn format_json(&self, response: &Response) -> serde_json::Result<String> {
        serde_json::to_string_pretty(response).map(|json| format!("{}\n", json))
    }

    pub fn format_expression(&self, num1: f64, num2: f64, operation: &Operation) -> String {
        match operation.symbol() {
            Some(symbol) => format!("{} {} {}", num1, symbol, num2),
            None => format!("{}({}, {})", operation.name(), num1, num2),
        }
    }

    pub fn format_operations(&self) -> String {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(Row::from(vec![
            Cell::new("Operation").set_alignment(CellAlignment::Left),
            Cell::new("Symbol").set_alignment(CellAlignment::Center),
        ]));

        for operation in Operation::SUPPORTED {
            table.add_row(Row::from(vec![
                Cell::new(operation.name()),
                Cell::new(operation.symbol().unwrap_or_default())
                    .set_alignment(CellAlignment::Center),
            ]));
        }

        format!("{}\n", table)
    }
}

//! Parsing of typed command lines

use anyhow::{bail, Context, Result};
use hisab::prelude::*;

/// One parsed line of input
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    /// A command for the session
    Run(Command),
    /// Print the grid
    Show { json: bool },
    /// List the context menu of a row or column
    Menu(Line),
    Help,
    Quit,
    /// Blank line or comment
    Nothing,
}

pub const HELP: &str = "\
Commands:
  set A1 10                 store a value (anything non-numeric is kept as text)
  clear A1                  empty a cell
  run A*B                   run a column formula (a bare A*B works too)
  sum col A                 total a column into the blank slot after its values
  add|sub|mul|div row 3 5   apply a value to every non-zero cell of a line
  clear col A | clear row 3 empty a line
  clear all                 empty the grid
  menu col A | menu row 3   list the context menu of a line
  import FILE               load an exported CSV file
  export                    write the grid into a zip archive
  share open|keep|cancel    act on the archive (exports first if needed)
  show [--json]             print the grid
  help                      show this text
  quit                      leave";

/// Parse one input line
pub fn parse_line(line: &str) -> Result<Input> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(Input::Nothing);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let input = match word.to_ascii_lowercase().as_str() {
        "help" | "?" => Input::Help,
        "quit" | "exit" => Input::Quit,
        "show" => match rest {
            "" => Input::Show { json: false },
            "--json" | "json" => Input::Show { json: true },
            other => bail!("Unknown show option '{}'", other),
        },
        "set" => {
            let (cell, raw) = match rest.split_once(char::is_whitespace) {
                Some((cell, raw)) => (cell, raw.trim_start()),
                None => (rest, ""),
            };
            Input::Run(Command::Edit {
                address: address(cell)?,
                raw: raw.to_string(),
            })
        }
        "run" => Input::Run(Command::RunFormula(rest.to_string())),
        "import" | "load" => {
            if rest.is_empty() {
                bail!("Usage: import FILE");
            }
            Input::Run(Command::Import(rest.into()))
        }
        "export" => Input::Run(Command::Export),
        "share" => {
            let decision = if rest.is_empty() { "open" } else { rest };
            let decision: ShareDecision = decision.parse().map_err(anyhow::Error::msg)?;
            Input::Run(Command::Share(decision))
        }
        "menu" => Input::Menu(line_ref(rest)?),
        "clear" => match rest.to_ascii_lowercase().as_str() {
            "all" => Input::Run(Command::ClearAll),
            _ if is_line_ref(rest) => line_command(MenuAction::Clear, rest)?,
            _ => Input::Run(Command::ClearCell(address(rest)?)),
        },
        other => match other.parse::<MenuAction>() {
            Ok(action) => line_command(action, rest)?,
            // Anything else is taken as a formula typed on its own
            Err(_) => Input::Run(Command::RunFormula(line.to_string())),
        },
    };
    Ok(input)
}

fn address(cell: &str) -> Result<CellAddress> {
    if cell.is_empty() {
        bail!("Missing cell address");
    }
    CellAddress::parse(cell).with_context(|| format!("Invalid cell '{}'", cell))
}

fn is_line_ref(rest: &str) -> bool {
    let kind = rest.split_whitespace().next().unwrap_or("");
    matches!(
        kind.to_ascii_lowercase().as_str(),
        "col" | "column" | "row"
    )
}

/// Parse `col A` or `row 3`, ignoring anything after the line
fn line_ref(rest: &str) -> Result<Line> {
    let mut parts = rest.split_whitespace();
    let kind = parts.next().unwrap_or("").to_ascii_lowercase();
    let target = parts
        .next()
        .with_context(|| format!("Expected 'col A' or 'row 3', got '{}'", rest))?;

    let line = match kind.as_str() {
        "col" | "column" => Line::column(Column::parse(target)?)?,
        "row" => {
            let number: u32 = target
                .parse()
                .with_context(|| format!("Invalid row number '{}'", target))?;
            Line::row(number)?
        }
        _ => bail!("Expected 'col A' or 'row 3', got '{}'", rest),
    };
    Ok(line)
}

fn line_command(action: MenuAction, rest: &str) -> Result<Input> {
    let line = line_ref(rest)?;
    let value = rest.split_whitespace().nth(2);

    let operand = match value {
        Some(v) => Some(Number::parse(v).with_context(|| format!("Invalid number '{}'", v))?),
        None => None,
    };
    if operand.is_some() && !action.needs_operand() {
        bail!("{} does not take a value", action);
    }

    let operation = action.with_operand(operand)?;
    Ok(Input::Run(Command::Line { line, operation }))
}

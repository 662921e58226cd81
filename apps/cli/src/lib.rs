//! # Droidworks CLI
//!
//! Interactive menu over a [`Catalog`].
//!
//! ## Session Loop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  greeting ──► menu ──┬── 1 Create     ──► prompts ──► catalog.add_*    │
//! │                ▲     ├── 2 Print      ──► catalog Display + value      │
//! │                │     ├── 3 Categories ──► sort_into_categories (fatal) │
//! │                │     ├── 4 Cost       ──► sort_by_total_cost           │
//! │                │     ├── 5 JSON       ──► to_json                      │
//! │                │     └── 6 Exit / EOF ──► goodbye                      │
//! │                └──────────────┘                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod ui;

use std::io::{BufRead, Write};

use droidworks_core::Catalog;
use tracing::{error, info};

use crate::error::{CliError, CliResult};
use crate::ui::{MenuChoice, UserInterface};

/// Runs the menu until the user exits or input closes.
///
/// A category-sort failure is returned as an error and ends the session.
pub fn run<R: BufRead, W: Write>(
    ui: &mut UserInterface<R, W>,
    catalog: &mut Catalog,
) -> CliResult<()> {
    ui.display_greeting()?;

    loop {
        match step(ui, catalog) {
            Ok(true) => continue,
            Ok(false) => break,
            Err(CliError::InputClosed) => {
                info!("Input closed, ending session");
                break;
            }
            Err(err) => {
                error!(error = %err, "Session aborted");
                return Err(err);
            }
        }
    }

    ui.display_exit_message()
}

/// One menu round trip. Returns `false` once the user picks Exit.
fn step<R: BufRead, W: Write>(
    ui: &mut UserInterface<R, W>,
    catalog: &mut Catalog,
) -> CliResult<bool> {
    match ui.get_menu_choice()? {
        MenuChoice::CreateDroid => ui.create_droid(catalog)?,
        MenuChoice::PrintList => ui.print_droid_list(catalog)?,
        MenuChoice::SortIntoCategories => {
            catalog.sort_into_categories()?;
            ui.display_sort_into_categories_success_message()?;
        }
        MenuChoice::SortByTotalCost => {
            catalog.sort_by_total_cost();
            ui.display_sort_by_total_cost_success_message()?;
        }
        MenuChoice::ExportJson => ui.print_json(catalog)?,
        MenuChoice::Exit => return Ok(false),
    }
    Ok(true)
}

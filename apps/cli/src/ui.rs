//! # Terminal User Interface
//!
//! Menu rendering and prompting. Generic over the input and output streams
//! so tests can script a whole session.
//!
//! ## Create Droid Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  model ──► material ──► color ──┬── Protocol  ──► languages             │
//! │                                 ├── Utility   ──► toolbox, computer,    │
//! │                                 │                 scanner               │
//! │                                 ├── Janitor   ──► utility + broom,      │
//! │                                 │                 vacuum                │
//! │                                 └── Astromech ──► utility + navigation, │
//! │                                                   ships                 │
//! │                                                                         │
//! │  Any rejected answer prints the reason and asks the same question.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};
use std::str::FromStr;

use droidworks_core::validation::{
    validate_language_count, validate_menu_choice, validate_ship_count, ValidationResult,
};
use droidworks_core::{Catalog, Category, Color, Material, UtilityOptions, ValidationError};
use tracing::debug;

use crate::error::{CliError, CliResult};

/// Model menu order, simplest first.
const MODELS: [Category; 4] = [
    Category::Protocol,
    Category::Utility,
    Category::Janitor,
    Category::Astromech,
];

/// Entries of the main menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CreateDroid,
    PrintList,
    SortIntoCategories,
    SortByTotalCost,
    ExportJson,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 6] = [
        MenuChoice::CreateDroid,
        MenuChoice::PrintList,
        MenuChoice::SortIntoCategories,
        MenuChoice::SortByTotalCost,
        MenuChoice::ExportJson,
        MenuChoice::Exit,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            MenuChoice::CreateDroid => "Create A Droid",
            MenuChoice::PrintList => "Print The List Of Droids",
            MenuChoice::SortIntoCategories => "Sort Droids Into Categories",
            MenuChoice::SortByTotalCost => "Sort Droids By Total Cost",
            MenuChoice::ExportJson => "Export Droids As JSON",
            MenuChoice::Exit => "Exit Program",
        }
    }
}

/// Terminal front end over a reader and a writer.
pub struct UserInterface<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> UserInterface<R, W> {
    pub fn new(input: R, output: W) -> Self {
        UserInterface { input, output }
    }

    /// Hands back the writer, e.g. to inspect a scripted session.
    pub fn into_output(self) -> W {
        self.output
    }

    pub fn display_greeting(&mut self) -> CliResult<()> {
        writeln!(self.output, "Welcome to the Droidworks catalog")?;
        writeln!(self.output)?;
        Ok(())
    }

    /// Shows the main menu until a valid entry is picked.
    pub fn get_menu_choice(&mut self) -> CliResult<MenuChoice> {
        let labels: Vec<&str> = MenuChoice::ALL.iter().map(|c| c.label()).collect();
        let index = self.prompt_index("What would you like to do?", &labels)?;
        Ok(MenuChoice::ALL[index])
    }

    /// Walks the create-droid questions and adds the droid to `catalog`.
    pub fn create_droid(&mut self, catalog: &mut Catalog) -> CliResult<()> {
        let names: Vec<&str> = MODELS.iter().map(|c| c.name()).collect();
        let category = MODELS[self.prompt_index("What type of droid is it?", &names)?];
        let material: Material =
            self.prompt_named("What material is the droid made of?", &Material::ALL, Material::name)?;
        let color: Color = self.prompt_named("What color is the droid?", &Color::ALL, Color::name)?;

        let id = match category {
            Category::Protocol => {
                let languages =
                    self.prompt_count("How many languages does it know?", validate_language_count)?;
                catalog.add_protocol(material, color, languages)?
            }
            Category::Utility => {
                let utility = self.prompt_utility_options()?;
                catalog.add_utility(material, color, utility)?
            }
            Category::Janitor => {
                let utility = self.prompt_utility_options()?;
                let broom = self.prompt_bool("Does it have a broom?")?;
                let vacuum = self.prompt_bool("Does it have a vacuum?")?;
                catalog.add_janitor(material, color, utility, broom, vacuum)?
            }
            Category::Astromech => {
                let utility = self.prompt_utility_options()?;
                let navigation = self.prompt_bool("Does it have navigation?")?;
                let ships =
                    self.prompt_count("How many ships can it work on?", validate_ship_count)?;
                catalog.add_astromech(material, color, utility, navigation, ships)?
            }
        };

        debug!(%id, %category, "Droid created from menu");
        writeln!(self.output, "{} droid added to the catalog.", category)?;
        writeln!(self.output)?;
        Ok(())
    }

    pub fn print_droid_list(&mut self, catalog: &Catalog) -> CliResult<()> {
        if catalog.is_empty() {
            writeln!(self.output, "There are no droids in the catalog.")?;
            writeln!(self.output)?;
            return Ok(());
        }
        write!(self.output, "{}", catalog)?;
        writeln!(self.output, "Catalog Value: {}", catalog.total_value())?;
        writeln!(self.output)?;
        Ok(())
    }

    pub fn print_json(&mut self, catalog: &Catalog) -> CliResult<()> {
        writeln!(self.output, "{}", catalog.to_json()?)?;
        writeln!(self.output)?;
        Ok(())
    }

    pub fn display_sort_into_categories_success_message(&mut self) -> CliResult<()> {
        writeln!(self.output, "Droids have been sorted into categories.")?;
        writeln!(self.output)?;
        Ok(())
    }

    pub fn display_sort_by_total_cost_success_message(&mut self) -> CliResult<()> {
        writeln!(self.output, "Droids have been sorted by total cost.")?;
        writeln!(self.output)?;
        Ok(())
    }

    pub fn display_exit_message(&mut self) -> CliResult<()> {
        writeln!(self.output, "Goodbye.")?;
        self.output.flush()?;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Prompts
    // -------------------------------------------------------------------------

    fn prompt_utility_options(&mut self) -> CliResult<UtilityOptions> {
        let toolbox = self.prompt_bool("Does it have a toolbox?")?;
        let computer_connection = self.prompt_bool("Does it have a computer connection?")?;
        let scanner = self.prompt_bool("Does it have a scanner?")?;
        Ok(UtilityOptions::new(toolbox, computer_connection, scanner))
    }

    /// Numbered list; returns the 0-based index picked.
    fn prompt_index(&mut self, question: &str, options: &[&str]) -> CliResult<usize> {
        self.prompt_until_valid(
            |out| {
                writeln!(out, "{}", question)?;
                for (n, option) in options.iter().enumerate() {
                    writeln!(out, "{}. {}", n + 1, option)?;
                }
                Ok(())
            },
            |line| {
                let choice = parse_number::<i64>("choice", line)?;
                Ok(validate_menu_choice(choice, options.len())? - 1)
            },
        )
    }

    /// Numbered list that also accepts the option's name.
    fn prompt_named<T: Copy + FromStr<Err = ValidationError>>(
        &mut self,
        question: &str,
        all: &[T],
        name: fn(T) -> &'static str,
    ) -> CliResult<T> {
        let names: Vec<&str> = all.iter().map(|t| name(*t)).collect();
        self.prompt_until_valid(
            |out| {
                writeln!(out, "{}", question)?;
                for (n, option) in names.iter().enumerate() {
                    writeln!(out, "{}. {}", n + 1, option)?;
                }
                Ok(())
            },
            |line| match line.parse::<i64>() {
                Ok(choice) => Ok(all[validate_menu_choice(choice, all.len())? - 1]),
                Err(_) => line.parse::<T>(),
            },
        )
    }

    fn prompt_bool(&mut self, question: &str) -> CliResult<bool> {
        self.prompt_until_valid(
            |out| writeln!(out, "{} (y/n)", question),
            |line| match line.to_ascii_lowercase().as_str() {
                "y" | "yes" | "true" => Ok(true),
                "n" | "no" | "false" => Ok(false),
                _ => Err(ValidationError::InvalidFormat {
                    field: "answer".to_string(),
                    reason: "enter y or n".to_string(),
                }),
            },
        )
    }

    fn prompt_count(
        &mut self,
        question: &str,
        validate: fn(u32) -> ValidationResult<()>,
    ) -> CliResult<u32> {
        self.prompt_until_valid(
            |out| writeln!(out, "{}", question),
            |line| {
                let count = parse_number::<u32>("count", line)?;
                validate(count)?;
                Ok(count)
            },
        )
    }

    /// Asks, reads a line, and re-asks with the validation message until
    /// `parse` accepts. End of input ends the session.
    fn prompt_until_valid<T>(
        &mut self,
        mut ask: impl FnMut(&mut W) -> std::io::Result<()>,
        mut parse: impl FnMut(&str) -> ValidationResult<T>,
    ) -> CliResult<T> {
        loop {
            ask(&mut self.output)?;
            write!(self.output, "> ")?;
            self.output.flush()?;

            let line = self.read_line()?;
            match parse(line.trim()) {
                Ok(value) => return Ok(value),
                Err(err) => {
                    writeln!(self.output, "Invalid input: {}", err)?;
                    writeln!(self.output)?;
                }
            }
        }
    }

    fn read_line(&mut self) -> CliResult<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(CliError::InputClosed);
        }
        Ok(line)
    }
}

fn parse_number<T: FromStr>(field: &str, line: &str) -> ValidationResult<T> {
    line.parse::<T>().map_err(|_| ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: "must be a whole number".to_string(),
    })
}

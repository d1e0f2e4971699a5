//! # CLI Layer
//!
//! The interactive menu is **one possible UI client** for the registry.
//!
//! This module is the only place that:
//! - Reads stdin and writes stdout
//! - Turns `ParkingError`s into one-line messages
//! - Decides exit codes
//!
//! ## Structure
//!
//! - `run()`: parse arguments, set up logging and config, dispatch
//! - `Session`: the menu loop, generic over its input and output so tests can
//!   script a whole conversation
//! - `drive_*` / `check_parking` / `print_history`: one flow per menu option

use super::print::{
    render_config, render_history, render_menu, render_message, render_messages,
    render_receipt, MENU_PROMPT,
};
use super::setup::{Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use parklot::api::{CmdMessage, ConfigAction, HistoryOrder, ParkingApi, ParkingPaths};
use parklot::config::ParkingConfig;
use parklot::error::{ParkingError, Result};
use parklot::store::StayStore;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut api = init_api(&cli)?;

    match cli.command {
        None | Some(Commands::Menu) => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            Session::new(&mut api, stdin.lock(), stdout.lock()).run()
        }
        Some(Commands::Config { key }) => handle_config(&api, key),
        Some(Commands::Init) => handle_init(&api),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn config_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.config_dir {
        return Ok(dir.clone());
    }
    ProjectDirs::from("com", "parklot", "parklot")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| ParkingError::Config("Could not determine config dir".to_string()))
}

fn init_api(cli: &Cli) -> Result<ParkingApi<parklot::store::memory::InMemoryStore>> {
    let config_dir = config_dir(cli)?;
    let mut config = ParkingConfig::load(&config_dir).unwrap_or_else(|e| {
        warn!(target: "parklot::config", error = %e, "Ignoring unreadable config, using defaults");
        ParkingConfig::default()
    });

    if let Some(capacity) = cli.capacity {
        config.capacity = Some(capacity);
    }
    if cli.unbounded {
        config.capacity = None;
    }
    config.validate()?;
    debug!(target: "parklot::config", capacity = ?config.capacity, lot = %config.lot_name, "Registry ready");

    Ok(ParkingApi::in_memory(config, ParkingPaths { config_dir }))
}

fn handle_config<S: StayStore>(api: &ParkingApi<S>, key: Option<String>) -> Result<()> {
    let action = match key {
        Some(key) => ConfigAction::ShowKey(key),
        None => ConfigAction::ShowAll,
    };
    let result = api.config(action)?;
    if let Some(config) = &result.config {
        print!("{}", render_config(config));
    }
    print!("{}", render_messages(&result.messages));
    Ok(())
}

fn handle_init<S: StayStore>(api: &ParkingApi<S>) -> Result<()> {
    let result = api.init()?;
    print!("{}", render_messages(&result.messages));
    Ok(())
}

/// One-line text shown for a rejected operation.
fn user_message(err: &ParkingError) -> &'static str {
    match err {
        ParkingError::RegistryFull { .. } => "Parking lot is full.",
        ParkingError::InvalidRegistration(_) => {
            "Invalid registration number. It must be 3-8 characters long."
        }
        ParkingError::InvalidDate(_) => "Invalid date format.",
        ParkingError::InvalidExitDate(_) => "Invalid exit date.",
        ParkingError::NotCurrentlyParked(_) => "Car is not currently parked.",
        _ => "Operation failed.",
    }
}

fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub(super) struct Session<'a, S: StayStore, R: BufRead, W: Write> {
    api: &'a mut ParkingApi<S>,
    input: R,
    out: W,
    clock: fn() -> String,
}

impl<'a, S: StayStore, R: BufRead, W: Write> Session<'a, S, R, W> {
    pub(super) fn new(api: &'a mut ParkingApi<S>, input: R, out: W) -> Self {
        Self {
            api,
            input,
            out,
            clock: today,
        }
    }

    /// Runs the menu until `q` or end of input.
    pub(super) fn run(mut self) -> Result<()> {
        loop {
            write!(self.out, "{}", render_menu(&self.api.settings().lot_name))?;
            let Some(option) = self.prompt_raw(MENU_PROMPT)? else {
                break;
            };

            let flow = match option.as_str() {
                "1" => self.drive_in(),
                "2" => self.drive_out(),
                "3" => self.check_parking(),
                "4" => self.print_history(HistoryOrder::EntryDate),
                "5" => self.print_history(HistoryOrder::Registration),
                "q" => Ok(Flow::Quit),
                _ => {
                    self.say(&CmdMessage::warning("Invalid option. Please try again."))?;
                    Ok(Flow::Continue)
                }
            };

            match flow {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(e) if e.is_recoverable() => {
                    debug!(target: "parklot::registry", error = %e, "Operation rejected");
                    self.say(&CmdMessage::error(user_message(&e)))?;
                }
                Err(e) => return Err(e),
            }
        }

        writeln!(self.out, "Exiting program...")?;
        self.out.flush()?;
        Ok(())
    }

    fn drive_in(&mut self) -> Result<Flow> {
        self.api.pre_check_arrival()?;

        let Some(registration) = self.prompt_raw("> Enter registration number: ")? else {
            return Ok(Flow::Quit);
        };
        parklot::model::validate_registration(&registration)?;

        let Some(date) = self.prompt_date()? else {
            return Ok(Flow::Quit);
        };
        parklot::model::ParkDate::parse(&date)?;

        let Some(charge) = self.prompt_raw("> Charge electric vehicle (Yes/No): ")? else {
            return Ok(Flow::Quit);
        };
        let charging = charge.eq_ignore_ascii_case("yes");

        let result = self.api.register_arrival(&registration, &date, charging)?;
        self.say_all(&result.messages)?;
        Ok(Flow::Continue)
    }

    fn drive_out(&mut self) -> Result<Flow> {
        let Some(registration) = self.prompt_raw("> Enter registration number: ")? else {
            return Ok(Flow::Quit);
        };
        self.api.open_stay(&registration)?;

        let Some(date) = self.prompt_date()? else {
            return Ok(Flow::Quit);
        };
        let result = self.api.register_departure(&registration, &date)?;
        if let Some(receipt) = &result.receipt {
            let currency = self.api.settings().currency.clone();
            write!(self.out, "{}", render_receipt(receipt, &currency))?;
        }
        Ok(Flow::Continue)
    }

    fn check_parking(&mut self) -> Result<Flow> {
        let Some(registration) = self.prompt_raw("> Enter registration number: ")? else {
            return Ok(Flow::Quit);
        };
        let result = self.api.check_status(&registration)?;
        self.say_all(&result.messages)?;
        Ok(Flow::Continue)
    }

    fn print_history(&mut self, order: HistoryOrder) -> Result<Flow> {
        let (title, result) = match order {
            HistoryOrder::EntryDate => (
                "Parking history sorted by entrance date",
                self.api.history_by_entry_date()?,
            ),
            HistoryOrder::Registration => (
                "Parking history sorted by registration number",
                self.api.history_by_registration()?,
            ),
        };
        let currency = &self.api.settings().currency;
        write!(
            self.out,
            "{}",
            render_history(title, &result.listed_stays, currency)
        )?;
        Ok(Flow::Continue)
    }

    /// Writes `label`, reads one trimmed line. `None` at end of input.
    fn prompt_raw(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.out, "{}", label)?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.out)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Date prompt; a blank answer means today.
    fn prompt_date(&mut self) -> Result<Option<String>> {
        let today = (self.clock)();
        let label = format!("> Current date (YYYY-MM-DD) [{}]: ", today);
        Ok(self
            .prompt_raw(&label)?
            .map(|answer| if answer.is_empty() { today } else { answer }))
    }

    fn say(&mut self, message: &CmdMessage) -> Result<()> {
        write!(self.out, "{}", render_message(message))?;
        Ok(())
    }

    fn say_all(&mut self, messages: &[CmdMessage]) -> Result<()> {
        for message in messages {
            self.say(message)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parklot::store::memory::InMemoryStore;
    use std::io::Cursor;

    fn test_api(capacity: Option<usize>) -> ParkingApi<InMemoryStore> {
        let config = ParkingConfig {
            capacity,
            ..ParkingConfig::default()
        };
        ParkingApi::in_memory(
            config,
            ParkingPaths {
                config_dir: PathBuf::from("/nonexistent/parklot"),
            },
        )
    }

    fn fixed_today() -> String {
        "2024-06-15".to_string()
    }

    fn script(api: &mut ParkingApi<InMemoryStore>, input: &str) -> String {
        let mut out = Vec::new();
        let mut session = Session::new(api, Cursor::new(input.to_string()), &mut out);
        session.clock = fixed_today;
        session.run().unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn arrival_then_status() {
        let mut api = test_api(None);
        let out = script(&mut api, "1\nABC123\n2024-01-01\nno\n3\nABC123\nq\n");

        assert!(out.contains("Car ABC123 entered at 2024-01-01"));
        assert!(out.contains("Car ABC123 is currently parked since 2024-01-01"));
        assert!(out.ends_with("Exiting program...\n"));
    }

    #[test]
    fn departure_prints_receipt() {
        let mut api = test_api(None);
        let out = script(
            &mut api,
            "1\nEV0001\n2024-01-01\nYES\n2\nEV0001\n2024-02-01\nq\n",
        );

        assert!(out.contains("RECEIPT PARKING"));
        assert!(out.contains("Number of days: 30 days"));
        assert!(out.contains("Charge: Yes"));
        assert!(out.contains("Cost: 2450 kr"));
    }

    #[test]
    fn departure_of_unknown_car_skips_date_prompt() {
        let mut api = test_api(None);
        let out = script(&mut api, "2\nNOPE99\nq\n");

        assert!(out.contains("Car is not currently parked."));
        assert!(!out.contains("Current date"));
    }

    #[test]
    fn rejected_inputs_return_to_menu() {
        let mut api = test_api(None);
        let out = script(
            &mut api,
            "1\nAB\n1\nABC123\n2024/01/01\n1\nABC123\n2024-01-10\nno\n2\nABC123\n2024-01-01\nx\nq\n",
        );

        assert!(out.contains("Invalid registration number. It must be 3-8 characters long."));
        assert!(out.contains("Invalid date format."));
        assert!(out.contains("Invalid exit date."));
        assert!(out.contains("Invalid option. Please try again."));
        assert_eq!(api.store().len(), 1);
        assert!(api.open_stay("ABC123").is_ok());
    }

    #[test]
    fn full_lot_rejects_before_prompting() {
        let mut api = test_api(Some(1));
        let out = script(&mut api, "1\nAAA111\n2024-01-01\nno\n1\nq\n");

        assert!(out.contains("Parking lot is full."));
        assert_eq!(out.matches("> Enter registration number: ").count(), 1);
        assert_eq!(api.store().len(), 1);
    }

    #[test]
    fn blank_date_means_today() {
        let mut api = test_api(None);
        let out = script(&mut api, "1\nABC123\n\nno\nq\n");

        assert!(out.contains("[2024-06-15]"));
        assert!(out.contains("Car ABC123 entered at 2024-06-15"));
    }

    #[test]
    fn history_views_are_sorted() {
        let mut api = test_api(None);
        let out = script(
            &mut api,
            "1\nZZZ999\n2024-01-01\nno\n1\nAAA111\n2024-01-05\nno\n4\n5\nq\n",
        );

        let by_date = out.find("sorted by entrance date").unwrap();
        let by_reg = out.find("sorted by registration number").unwrap();
        let date_section = &out[by_date..by_reg];
        let reg_section = &out[by_reg..];
        assert!(date_section.find("ZZZ999").unwrap() < date_section.find("AAA111").unwrap());
        assert!(reg_section.find("AAA111").unwrap() < reg_section.find("ZZZ999").unwrap());
    }

    #[test]
    fn end_of_input_exits_cleanly() {
        let mut api = test_api(None);
        let out = script(&mut api, "1\nABC123\n");

        assert!(out.ends_with("Exiting program...\n"));
        assert!(api.store().is_empty());
    }

    #[test]
    fn user_messages_cover_domain_errors() {
        assert_eq!(
            user_message(&ParkingError::RegistryFull { capacity: 1 }),
            "Parking lot is full."
        );
        assert_eq!(
            user_message(&ParkingError::NotCurrentlyParked("X".into())),
            "Car is not currently parked."
        );
    }
}

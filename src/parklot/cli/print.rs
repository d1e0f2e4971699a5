use super::styles::{BANNER, COST, PARKED, RULE, TABLE_HEADER};
use colored::Colorize;
use parklot::api::{CmdMessage, MessageLevel};
use parklot::config::ParkingConfig;
use parklot::model::{Receipt, StayView};
use unicode_width::UnicodeWidthStr;

const MENU_RULE: &str = "----------------------------------";
const RECEIPT_RULE: &str = "###################################";
const RECEIPT_INNER: usize = 31;

const REG_COL: usize = 13;
const DATE_COL: usize = 12;
const CHARGE_COL: usize = 16;

pub(super) const MENU_PROMPT: &str = "> Enter your option: ";

pub(super) fn render_menu(lot_name: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", RULE.apply_to(MENU_RULE)));
    out.push_str(&format!("{}\n", BANNER.apply_to(format!("# {}", lot_name))));
    out.push_str(&format!("{}\n", RULE.apply_to(MENU_RULE)));
    for line in [
        "1. Drive in",
        "2. Drive out",
        "3. Check parking",
        "4. Print parking history (by arrival date)",
        "5. Print parking history (by registration number)",
        "q. End program",
    ] {
        out.push_str(line);
        out.push('\n');
    }
    out
}

pub(super) fn render_message(message: &CmdMessage) -> String {
    let text = message.content.as_str();
    let styled = match message.level {
        MessageLevel::Info => text.normal(),
        MessageLevel::Success => text.green(),
        MessageLevel::Warning => text.yellow(),
        MessageLevel::Error => text.red(),
    };
    format!("{}\n", styled)
}

pub(super) fn render_messages(messages: &[CmdMessage]) -> String {
    messages.iter().map(render_message).collect()
}

fn receipt_line(content: &str) -> String {
    format!("# {} #\n", pad_to_width(content, RECEIPT_INNER))
}

pub(super) fn render_receipt(receipt: &Receipt, currency: &str) -> String {
    let mut out = String::new();
    out.push_str(RECEIPT_RULE);
    out.push('\n');
    out.push_str(&receipt_line("RECEIPT PARKING"));
    out.push_str(RECEIPT_RULE);
    out.push('\n');
    out.push_str(&receipt_line(&format!(
        "{} {} {}",
        pad_to_width("Reg", 8),
        pad_to_width("IN", 10),
        "OUT"
    )));
    out.push_str(&receipt_line(&format!(
        "{} {} {}",
        pad_to_width(&receipt.registration, 8),
        receipt.entry_date,
        receipt.exit_date
    )));
    out.push_str(&receipt_line(""));
    out.push_str(&receipt_line(&format!(
        "Number of days: {} days",
        receipt.days
    )));
    out.push_str(&receipt_line(&format!("Charge: {}", yes_no(receipt.charging))));
    out.push_str(&receipt_line(&format!(
        "Cost: {} {}",
        receipt.cost, currency
    )));
    out.push_str(RECEIPT_RULE);
    out.push('\n');
    out
}

pub(super) fn render_history(title: &str, stays: &[StayView], currency: &str) -> String {
    let mut out = String::new();
    out.push_str(title);
    out.push('\n');
    let header = format!(
        "{}{}{}{}{}",
        pad_to_width("Registration", REG_COL + 1),
        pad_to_width("Entered", DATE_COL + 1),
        pad_to_width("Exited", DATE_COL + 1),
        pad_to_width("Charging used", CHARGE_COL + 1),
        "Parking cost"
    );
    out.push_str(&format!("{}\n", TABLE_HEADER.apply_to(header)));

    for stay in stays {
        let exited = stay
            .exit_date
            .as_ref()
            .map(|d| d.to_string())
            .unwrap_or_default();
        let cost = stay
            .cost
            .map(|c| format!("{}{}", c, currency))
            .unwrap_or_default();

        let reg_cell = pad_to_width(&stay.registration, REG_COL);
        let reg_cell = if stay.exit_date.is_none() {
            PARKED.apply_to(reg_cell).to_string()
        } else {
            reg_cell
        };

        out.push_str(&format!(
            "{} {} {} {} {}\n",
            reg_cell,
            pad_to_width(stay.entry_date.as_str(), DATE_COL),
            pad_to_width(&exited, DATE_COL),
            pad_to_width(yes_no(stay.charging), CHARGE_COL),
            COST.apply_to(cost)
        ));
    }
    out
}

pub(super) fn render_config(config: &ParkingConfig) -> String {
    ParkingConfig::keys()
        .iter()
        .filter_map(|key| config.get(key).map(|value| format!("{} = {}\n", key, value)))
        .collect()
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

use console::Style;
use once_cell::sync::Lazy;

pub static BANNER: Lazy<Style> = Lazy::new(|| Style::new().cyan().bold());
pub static RULE: Lazy<Style> = Lazy::new(|| Style::new().dim());
pub static TABLE_HEADER: Lazy<Style> = Lazy::new(|| Style::new().bold().underlined());
pub static PARKED: Lazy<Style> = Lazy::new(|| Style::new().yellow());
pub static COST: Lazy<Style> = Lazy::new(|| Style::new().green());

use colored::*;
use proxylist_core::ports::{ItemKind, ListItem};
use tracing::info;
use unicode_width::UnicodeWidthStr;

use crate::terminal::colors;

pub const TOTAL_WIDTH: usize = 64;
pub const PRINT_TARGET: &str = "proxylist::print";

#[macro_export]
macro_rules! pprint {
    () => {
        $crate::terminal::print::print("");
    };
    ($msg:expr) => {
        $crate::terminal::print::print($msg);
    };
}

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

pub fn banner(q_level: u8) {
    if q_level > 0 {
        return;
    }

    let text_content: String = format!("⟦ PROXYLIST v{} ⟧", env!("CARGO_PKG_VERSION"));
    let text_width: usize = UnicodeWidthStr::width(text_content.as_str());
    let text: ColoredString = text_content.bright_green().bold();
    let sep: ColoredString = "═"
        .repeat(TOTAL_WIDTH.saturating_sub(text_width) / 2)
        .bright_black();

    print(&format!("{sep}{text}{sep}"));
}

pub fn header(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }

    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black();

    print(&format!("{}", line));
}

pub fn fat_separator() {
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR);
    print(&format!("{}", sep));
}

pub fn print_status<T: AsRef<str>>(msg: T) {
    let prefix: ColoredString = ">".color(colors::SEPARATOR);
    let message: String = format!("{} {}", prefix, msg.as_ref().color(colors::TEXT_DEFAULT));
    print(&message);
}

pub fn centerln(msg: &str) {
    let space: String =
        " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    print(&format!("{}{}{}", space, msg, space));
}

/// Prints a whole list under its title, one line per item.
pub fn list(title: &str, items: &[ListItem], q_level: u8) {
    header(title, q_level);
    for item in items {
        print(&list_line(item));
    }
}

/// Terminal rendering of one list item. The item text itself is never altered.
pub fn list_line(item: &ListItem) -> String {
    let (bullet, text): (ColoredString, ColoredString) = match item.kind {
        ItemKind::Record => (
            "•".color(colors::ACCENT),
            item.text.as_str().color(colors::TEXT_DEFAULT),
        ),
        ItemKind::Placeholder => (
            "…".color(colors::PLACEHOLDER),
            item.text.as_str().color(colors::PLACEHOLDER).italic(),
        ),
        ItemKind::Empty => ("•".color(colors::EMPTY), item.text.as_str().color(colors::EMPTY)),
        ItemKind::Error => (
            "✗".color(colors::ERROR).bold(),
            item.text.as_str().color(colors::ERROR),
        ),
    };
    format!(" {bullet} {text}")
}

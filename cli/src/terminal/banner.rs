use std::thread;
use std::time::Duration;

use colored::*;
use unicode_width::UnicodeWidthStr;

use crate::terminal::print::{self, TOTAL_WIDTH};

const LOGO: &[&str] = &[
    ".--------------------------------------------------------------.",
    "| 88                                           ad88            |",
    "| 88                                          d8\"              |",
    "| 88                                          88               |",
    "| 88   ,d8  ,adPPYb,d8 888888888  ,adPPYba, MM88MMM ,adPPYb,d8 |",
    "| 88 ,a8\"  a8\"    `Y88      a8P\" a8\"     \"\"   88   a8\"    `Y88 |",
    "| 8888[    8b       88   ,d8P'   8b           88   8b       88 |",
    "| 88`\"Yba, \"8a,   ,d88 ,d8\"      \"8a,   ,aa   88   \"8a,   ,d88 |",
    "| 88   `Y8a `\"YbbdP\"Y8 888888888  `\"Ybbd8\"'   88    `\"YbbdP\"Y8 |",
    "|           aa,    ,88                              aa,    ,88 |",
    "|            \"Y8bbdP\"                                \"Y8bbdP\"  |",
    "`--------------------------------------------------------------'",
];

/// Clears the screen and prints the title and logo, one line per `delay`.
pub fn show(delay: Duration) {
    let _ = console::Term::stdout().clear_screen();

    let text_content: String = format!("⟦ KGZCFG v{} ⟧ ", env!("CARGO_PKG_VERSION"));
    let text_width: usize = UnicodeWidthStr::width(text_content.as_str());
    let text: ColoredString = text_content.bright_green().bold();
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH.saturating_sub(text_width) / 2).bright_black();
    print::print(&format!("{}{}{}", sep, text, sep));

    for line in LOGO {
        print::print(&format!("{}", line.green()));
        thread::sleep(delay);
    }
}

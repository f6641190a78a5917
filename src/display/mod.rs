//! Terminal output
//!
//! Reports are produced as Markdown and printed through termimad when the
//! terminal supports it, falling back to plain text otherwise.

use std::io::IsTerminal;
use termimad::MadSkin;

/// Print markdown to the terminal, styled when supported
pub fn print_markdown(markdown: &str) {
    if should_use_colors() {
        let skin = report_skin();
        skin.print_text(markdown);
    } else {
        println!("{}", markdown);
    }
}

/// Skin used for report output
fn report_skin() -> MadSkin {
    use termimad::crossterm::style::{Attribute, Color::*};

    let mut skin = MadSkin::default();
    skin.headers[0].set_fg(Green);
    skin.headers[0].add_attr(Attribute::Bold);
    skin.headers[1].set_fg(Cyan);
    skin.bold.add_attr(Attribute::Bold);
    skin.bullet.set_fg(Green);
    skin.table.set_fg(White);
    skin
}

/// Color decision honoring NO_COLOR, CLICOLOR_FORCE, CLICOLOR and TTY
/// status, in that order
pub fn should_use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    match std::env::var("CLICOLOR_FORCE") {
        Ok(val) if val != "0" => return true,
        _ => {}
    }
    match std::env::var("CLICOLOR") {
        Ok(val) if val == "0" => return false,
        _ => {}
    }
    std::io::stdout().is_terminal()
}

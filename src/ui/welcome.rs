use std::io::{self, Write};

pub fn render_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "===== Console Quiz =====")
}

pub fn render_menu<W: Write>(out: &mut W, name: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Hi {name}! Choose an option:")?;
    writeln!(out, "1) Start Quiz")?;
    writeln!(out, "2) Practice (view questions sorted by text)")?;
    writeln!(out, "3) Exit")
}

pub fn render_goodbye<W: Write>(out: &mut W, name: &str) -> io::Result<()> {
    writeln!(out, "Goodbye, {name}!")
}

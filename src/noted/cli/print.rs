use chrono::{Local, NaiveDateTime, TimeZone};
use colored::Colorize;
use noted::api::{CmdMessage, MessageLevel};
use noted::config::{NotedConfig, CONFIG_KEYS};
use noted::model::{Note, TIMESTAMP_FORMAT};
use std::io::{self, Write};
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 21;

pub(super) fn print_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}

/// Full form: `[id] title (timestamp)` then the body, one blank line between notes.
pub(super) fn print_full_notes<W: Write>(out: &mut W, notes: &[Note]) -> io::Result<()> {
    for note in notes {
        let age = format_age(&note.timestamp)
            .map(|age| format!(" {}", age.dimmed()))
            .unwrap_or_default();
        writeln!(
            out,
            "{} {} ({}){}",
            format!("[{}]", note.id).yellow(),
            note.title.bold(),
            note.timestamp,
            age
        )?;
        writeln!(out, "{}", note.body)?;
        writeln!(out)?;
    }
    Ok(())
}

/// One line per note: id, title and a body preview cut to fit, timestamp right-aligned.
pub(super) fn print_compact_notes<W: Write>(out: &mut W, notes: &[Note]) -> io::Result<()> {
    for note in notes {
        let idx_str = format!("{:>4}. ", note.id);

        let preview: String = note
            .body
            .chars()
            .take(60)
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect();
        let title_content = if preview.is_empty() {
            note.title.clone()
        } else {
            format!("{} {}", note.title, preview.dimmed())
        };
        let plain_content = if preview.is_empty() {
            note.title.clone()
        } else {
            format!("{} {}", note.title, preview)
        };

        let available = LINE_WIDTH.saturating_sub(idx_str.width() + TIME_WIDTH);
        let (display, width) = if plain_content.width() > available {
            let cut = truncate_to_width(&plain_content, available);
            let width = cut.width();
            (cut, width)
        } else {
            (title_content, plain_content.width())
        };
        let padding = available.saturating_sub(width);

        let time_str = format!("{:>width$}", note.timestamp, width = TIME_WIDTH);

        writeln!(
            out,
            "{}{}{}{}",
            idx_str.yellow(),
            display,
            " ".repeat(padding),
            time_str.dimmed()
        )?;
    }
    Ok(())
}

pub(super) fn print_config<W: Write>(out: &mut W, config: &NotedConfig) -> io::Result<()> {
    for key in CONFIG_KEYS {
        if let Some(value) = config.get(key) {
            writeln!(out, "{} = {}", key, value)?;
        }
    }
    Ok(())
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

/// "3 minutes ago" style age for a stored timestamp, if it parses.
fn format_age(timestamp: &str) -> Option<String> {
    let naive = NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT).ok()?;
    let then = Local.from_local_datetime(&naive).earliest()?;
    let duration = Local::now().signed_duration_since(then).to_std().ok()?;
    Some(Formatter::new().convert(duration))
}

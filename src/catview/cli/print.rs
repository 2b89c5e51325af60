use catview::api::{CmdMessage, MessageLevel};
use catview::config::CatviewConfig;
use catview::model::{FilterCriteria, FilterField, Product};
use colored::Colorize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const TITLE_MAX_WIDTH: usize = 40;
const COLUMN_GAP: &str = "  ";
const HEADERS: [&str; 6] = ["ID", "Title", "Brand", "Category", "Price", "Rating"];

pub(super) fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };
        out.push_str(&format!("{}\n", line));
    }
    out
}

pub(super) fn print_messages(messages: &[CmdMessage]) {
    print!("{}", render_messages(messages));
}

fn cells(product: &Product) -> [String; 6] {
    [
        product.id.to_string(),
        truncate_to_width(&product.title, TITLE_MAX_WIDTH),
        product.brand.clone(),
        product.category.clone(),
        format!("${}", product.price),
        product.rating.to_string(),
    ]
}

/// Renders products as an aligned table, or a `No data` line when empty.
pub(super) fn render_table(products: &[Product]) -> String {
    if products.is_empty() {
        return "No data\n".to_string();
    }

    let rows: Vec<[String; 6]> = products.iter().map(cells).collect();
    let mut widths = HEADERS.map(|h| h.width());
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.width());
        }
    }

    let mut out = String::new();
    let header: Vec<String> = HEADERS
        .iter()
        .zip(widths.iter())
        .map(|(h, w)| pad_to_width(h, *w))
        .collect();
    out.push_str(&format!("{}\n", header.join(COLUMN_GAP).trim_end().bold()));

    for row in &rows {
        let line: Vec<String> = row
            .iter()
            .zip(widths.iter())
            .enumerate()
            .map(|(i, (cell, w))| {
                // Numbers align right
                if i == 0 || i >= 4 {
                    format!("{}{}", " ".repeat(w.saturating_sub(cell.width())), cell)
                } else {
                    pad_to_width(cell, *w)
                }
            })
            .collect();
        out.push_str(line.join(COLUMN_GAP).trim_end());
        out.push('\n');
    }
    out
}

pub(super) fn print_table(products: &[Product]) {
    print!("{}", render_table(products));
}

/// One line summary of the active filters, empty when none are set.
pub(super) fn render_criteria(criteria: &FilterCriteria) -> String {
    let active: Vec<String> = FilterField::all()
        .iter()
        .filter(|f| !criteria.get(**f).is_empty())
        .map(|f| format!("{}={}", f, criteria.get(*f)))
        .collect();
    if active.is_empty() {
        String::new()
    } else {
        format!("{}\n", format!("Filters: {}", active.join(", ")).dimmed())
    }
}

pub(super) fn print_options(options: &[String]) {
    if options.is_empty() {
        println!("No options.");
        return;
    }
    for value in options {
        if value.is_empty() {
            println!("{}", "(none)".dimmed());
        } else {
            println!("{}", value);
        }
    }
}

pub(super) fn print_config(config: &CatviewConfig) {
    for key in CatviewConfig::KEYS {
        if let Some(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
}

fn pad_to_width(s: &str, width: usize) -> String {
    format!("{}{}", s, " ".repeat(width.saturating_sub(s.width())))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

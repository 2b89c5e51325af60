//! Interactive session over a line-oriented input.
//!
//! Each line is one user event, handled to completion before the next is read.
//! The table is redrawn whenever the catalog reports a recompute.

use super::print::{render_criteria, render_messages, render_table};
use catview::api::{CatalogApi, CmdResult};
use catview::cache::SnapshotCache;
use catview::error::Result;
use catview::model::{FilterField, ProductId};
use catview::source::ProductSource;
use std::cell::Cell;
use std::io::{BufRead, Write};
use std::rc::Rc;
use std::str::FromStr;

pub(super) const HELP: &str = "\
Commands:
  show                      print the current table
  delete <id>               remove a product from this session
  edit <id> <title...>      rename a product
  filter <field> [value]    set a filter (brand, category, price, rating); no value clears it
  reset                     clear all filters
  options <field>           list values of brand or category
  help                      this text
  quit                      leave the session
";

#[derive(Debug, Clone, PartialEq)]
pub(super) enum ShellCommand {
    Show,
    Delete(ProductId),
    Edit(ProductId, String),
    Filter(FilterField, String),
    Reset,
    Options(FilterField),
    Help,
    Quit,
}

fn parse_id(raw: Option<&str>) -> std::result::Result<ProductId, String> {
    let raw = raw.ok_or_else(|| "missing product id".to_string())?;
    raw.parse()
        .map_err(|_| format!("invalid product id: {}", raw))
}

fn parse_field(raw: Option<&str>) -> std::result::Result<FilterField, String> {
    let raw = raw.ok_or_else(|| "missing field name".to_string())?;
    FilterField::from_str(raw).map_err(|e| e.to_string())
}

impl FromStr for ShellCommand {
    type Err = String;

    fn from_str(line: &str) -> std::result::Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((w, r)) => (w, r.trim()),
            None => (line, ""),
        };
        let mut args = rest.splitn(2, char::is_whitespace);

        match word {
            "show" | "ls" | "" => Ok(ShellCommand::Show),
            "delete" | "rm" => Ok(ShellCommand::Delete(parse_id(args.next())?)),
            "edit" => {
                let id = parse_id(args.next())?;
                Ok(ShellCommand::Edit(id, args.next().unwrap_or("").trim().to_string()))
            }
            "filter" => {
                let field = parse_field(args.next())?;
                Ok(ShellCommand::Filter(
                    field,
                    args.next().unwrap_or("").trim().to_string(),
                ))
            }
            "reset" => Ok(ShellCommand::Reset),
            "options" => Ok(ShellCommand::Options(parse_field(args.next())?)),
            "help" | "?" => Ok(ShellCommand::Help),
            "quit" | "exit" | "q" => Ok(ShellCommand::Quit),
            other => Err(format!("unknown command: {} (try 'help')", other)),
        }
    }
}

/// Runs commands from `input` until `quit` or end of input.
pub(super) fn run_session<S, C, R, W>(
    api: &mut CatalogApi<S, C>,
    input: R,
    out: &mut W,
    prompt: bool,
) -> Result<()>
where
    S: ProductSource,
    C: SnapshotCache,
    R: BufRead,
    W: Write,
{
    let revision = Rc::new(Cell::new(0u64));
    let observed = Rc::clone(&revision);
    api.catalog_mut()
        .subscribe(move |_| observed.set(observed.get() + 1));

    write_rows(api.rows(), out)?;
    let mut seen = revision.get();

    let mut lines = input.lines();
    loop {
        if prompt {
            write!(out, "> ")?;
            out.flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let command = match line.parse::<ShellCommand>() {
            Ok(c) => c,
            Err(e) => {
                writeln!(out, "{}", e)?;
                continue;
            }
        };
        tracing::debug!(?command, "shell command");

        let result = match command {
            ShellCommand::Quit => break,
            ShellCommand::Help => {
                write!(out, "{}", HELP)?;
                continue;
            }
            ShellCommand::Show => {
                write_rows(api.rows(), out)?;
                continue;
            }
            ShellCommand::Options(field) => match api.options(field) {
                Ok(res) => {
                    for value in &res.options {
                        writeln!(out, "{}", value)?;
                    }
                    continue;
                }
                Err(e) => {
                    writeln!(out, "{}", e)?;
                    continue;
                }
            },
            ShellCommand::Delete(id) => api.delete(id),
            ShellCommand::Edit(id, title) => api.edit_title(id, &title),
            ShellCommand::Filter(field, value) => api.set_filter(field, &value),
            ShellCommand::Reset => api.reset_filters(),
        };

        if revision.get() != seen {
            seen = revision.get();
            write_rows(result, out)?;
        } else {
            write!(out, "{}", render_messages(&result.messages))?;
        }
    }

    api.catalog_mut().teardown();
    Ok(())
}

fn write_rows<W: Write>(result: CmdResult, out: &mut W) -> Result<()> {
    if let Some(criteria) = &result.criteria {
        write!(out, "{}", render_criteria(criteria))?;
    }
    write!(out, "{}", render_table(&result.listed_products))?;
    write!(out, "{}", render_messages(&result.messages))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use catview::api::CatviewPaths;
    use catview::cache::memory::MemoryCache;
    use catview::model::Product;
    use catview::source::memory::StaticSource;
    use catview::source::ProductService;

    fn parse(line: &str) -> std::result::Result<ShellCommand, String> {
        line.parse()
    }

    #[test]
    fn parses_commands() {
        assert_eq!(parse("show"), Ok(ShellCommand::Show));
        assert_eq!(parse("delete 3"), Ok(ShellCommand::Delete(3)));
        assert_eq!(
            parse("edit 2  New   Title "),
            Ok(ShellCommand::Edit(2, "New   Title".into()))
        );
        assert_eq!(
            parse("filter price 100"),
            Ok(ShellCommand::Filter(FilterField::Price, "100".into()))
        );
        assert_eq!(
            parse("filter brand"),
            Ok(ShellCommand::Filter(FilterField::Brand, String::new()))
        );
        assert_eq!(
            parse("options category"),
            Ok(ShellCommand::Options(FilterField::Category))
        );
        assert_eq!(parse("quit"), Ok(ShellCommand::Quit));
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse("delete").is_err());
        assert!(parse("delete one").is_err());
        assert!(parse("filter title x").is_err());
        assert!(parse("dance").is_err());
    }

    #[test]
    fn session_applies_events_in_order() {
        colored::control::set_override(false);
        let products = vec![
            Product::new(1, "Phone One", "A", "X", 50.0, 4.5),
            Product::new(2, "Phone Two", "B", "X", 150.0, 3.0),
        ];
        let temp = tempfile::tempdir().unwrap();
        let mut api = CatalogApi::new(
            ProductService::new(StaticSource::new(products), MemoryCache::new()),
            CatviewPaths::under(temp.path()),
        );
        api.load();

        let input = "filter price 100\nreset\ndelete 1\nedit 2 Renamed\nquit\ndelete 2\n";
        let mut out = Vec::new();
        run_session(&mut api, input.as_bytes(), &mut out, false).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Filters: price=100"));
        assert!(text.contains("Product 1 deleted"));
        assert!(text.contains("Renamed"));
        // Input after quit is ignored
        assert_eq!(api.catalog().state().canonical().len(), 1);
        assert!(api.catalog().is_torn_down());
    }
}

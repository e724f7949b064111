//! Interactive numbered menu.

use anyhow::Result;
use std::io::{BufRead, Write};

use super::delete::is_confirmation;
use crate::cli::notebook::{Entry, Notebook};
use crate::cli::output::{write_detail, write_listing};
use crate::domain::{NotePatch, Query, parse_tags};

const MENU: &str = "\
=== Notes ===
1. Add note
2. List notes
3. Search by category
4. Search by tag
5. Search by keyword
6. View note
7. Edit note
8. Delete note
0. Exit";

/// Runs the menu until `0` is chosen or input ends.
///
/// Missing notes and bad numbers are reported and the loop continues;
/// storage errors end the loop and propagate.
pub fn run_menu<R: BufRead, W: Write>(
    notebook: &mut dyn Notebook,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    loop {
        writeln!(out, "{}", MENU)?;
        let Some(choice) = read_answer(input, out, "Choose an option: ")? else {
            break;
        };

        match choice.trim() {
            "1" => add(notebook, input, out)?,
            "2" => write_listing(out, &notebook.list()?)?,
            "3" => search(notebook, input, out, "Category: ", Query::Category)?,
            "4" => search(notebook, input, out, "Tag: ", Query::Tag)?,
            "5" => search(notebook, input, out, "Keyword: ", Query::Keyword)?,
            "6" => {
                if let Some(entry) = pick(notebook, input, out)? {
                    write_detail(out, &entry)?;
                }
            }
            "7" => edit(notebook, input, out)?,
            "8" => delete(notebook, input, out)?,
            "0" => {
                writeln!(out, "Goodbye!")?;
                break;
            }
            _ => writeln!(out, "Invalid option.")?,
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Prompts and reads one line. `None` at end of input.
fn read_answer<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> Result<Option<String>> {
    write!(out, "{}", label)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
}

fn ask<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> Result<String> {
    Ok(read_answer(input, out, label)?.unwrap_or_default())
}

/// Asks for a note number and resolves it, reporting bad or unknown numbers.
fn pick<R: BufRead, W: Write>(
    notebook: &dyn Notebook,
    input: &mut R,
    out: &mut W,
) -> Result<Option<Entry>> {
    let answer = ask(input, out, "Note number: ")?;
    let Ok(number) = answer.trim().parse::<u64>() else {
        writeln!(out, "Invalid note number.")?;
        return Ok(None);
    };

    let entry = notebook.get(number)?;
    if entry.is_none() {
        writeln!(out, "{}.", notebook.missing_message())?;
    }
    Ok(entry)
}

fn add<R: BufRead, W: Write>(notebook: &mut dyn Notebook, input: &mut R, out: &mut W) -> Result<()> {
    let title = ask(input, out, "Title: ")?;
    let content = ask(input, out, "Content: ")?;
    let category = ask(input, out, "Category (blank for General): ")?;
    let tags = ask(input, out, "Tags (comma-separated): ")?;

    let entry = notebook.add(&title, &content, Some(category.as_str()), parse_tags(&tags))?;
    writeln!(out, "Added: {} [{}]", entry.note.title(), entry.number)?;
    Ok(())
}

fn search<R: BufRead, W: Write>(
    notebook: &dyn Notebook,
    input: &mut R,
    out: &mut W,
    label: &str,
    make: fn(String) -> Query,
) -> Result<()> {
    let term = ask(input, out, label)?;
    write_listing(out, &notebook.search(&make(term))?)?;
    Ok(())
}

fn edit<R: BufRead, W: Write>(notebook: &mut dyn Notebook, input: &mut R, out: &mut W) -> Result<()> {
    let Some(entry) = pick(notebook, input, out)? else {
        return Ok(());
    };
    let note = &entry.note;

    writeln!(out, "Leave a field blank to keep its current value.")?;
    let title = ask(input, out, &format!("Title [{}]: ", note.title()))?;
    let content = ask(input, out, &format!("Content [{}]: ", note.content()))?;
    let category = ask(input, out, &format!("Category [{}]: ", note.category()))?;
    let tags = ask(input, out, &format!("Tags [{}]: ", note.tags().join(",")))?;

    let patch = NotePatch::from_input(&title, &content, &category, &tags);
    match notebook.edit(entry.number, &patch)? {
        Some(_) => writeln!(out, "Note updated.")?,
        None => writeln!(out, "{}.", notebook.missing_message())?,
    }
    Ok(())
}

fn delete<R: BufRead, W: Write>(notebook: &mut dyn Notebook, input: &mut R, out: &mut W) -> Result<()> {
    let Some(entry) = pick(notebook, input, out)? else {
        return Ok(());
    };

    let answer = ask(input, out, &format!("Delete '{}'? (y/N): ", entry.note.title()))?;
    if !is_confirmation(&answer) {
        writeln!(out, "Cancelled.")?;
        return Ok(());
    }

    if notebook.remove(entry.number)? {
        writeln!(out, "Note deleted.")?;
    } else {
        writeln!(out, "{}.", notebook.missing_message())?;
    }
    Ok(())
}

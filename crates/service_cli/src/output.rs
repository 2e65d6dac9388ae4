//! Output rendering: tables, JSON and CSV.

use crate::Result;
use serde::Serialize;
use std::fmt;
use std::io::Write;
use std::str::FromStr;

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Box-drawn text table.
    #[default]
    Table,
    /// Pretty-printed JSON.
    Json,
    /// CSV with a header row.
    Csv,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            other => Err(format!(
                "Unknown format: {}. Supported: json, csv, table",
                other
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Table => "table",
            Self::Json => "json",
            Self::Csv => "csv",
        };
        f.write_str(name)
    }
}

/// Formats a USD amount, optionally in compact form ($1.23B, $4.5M, $67K).
pub fn format_currency(value: f64, compact: bool) -> String {
    if compact {
        if value >= 1e9 {
            return format!("${:.2}B", value / 1e9);
        }
        if value >= 1e6 {
            return format!("${:.1}M", value / 1e6);
        }
        if value >= 1e3 {
            return format!("${:.0}K", value / 1e3);
        }
    }
    let rounded = value.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{}${}", sign, group_thousands(rounded.abs()))
}

/// Formats a quantity with a B/M/K suffix.
pub fn format_number(value: f64, decimals: usize) -> String {
    if value >= 1e9 {
        format!("{:.*}B", decimals, value / 1e9)
    } else if value >= 1e6 {
        format!("{:.*}M", decimals, value / 1e6)
    } else if value >= 1e3 {
        format!("{:.*}K", decimals, value / 1e3)
    } else {
        format!("{:.*}", decimals, value)
    }
}

fn group_thousands(whole: f64) -> String {
    let digits = format!("{:.0}", whole);
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

const NO_DATA: &str = "(no data)";

/// Text table with box-drawing borders.
#[derive(Debug, Clone, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Creates a table with the given column headers.
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Appends a row. Missing cells render empty.
    pub fn add_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
    }

    /// Returns true when the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }
        if self.is_empty() {
            if let Some(first) = widths.first_mut() {
                *first = (*first).max(NO_DATA.chars().count());
            }
        }
        widths
    }

    /// Renders the table. Columns after the first are right-aligned.
    pub fn render(&self) -> String {
        let widths = self.widths();
        let rule = |left: &str, mid: &str, right: &str| {
            let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
            format!("{}{}{}\n", left, segments.join(mid), right)
        };
        let line = |cells: &[String], right_align: bool| {
            let padded: Vec<String> = widths
                .iter()
                .enumerate()
                .map(|(i, &w)| {
                    let cell = cells.get(i).map(String::as_str).unwrap_or("");
                    let pad = w.saturating_sub(cell.chars().count());
                    if right_align && i > 0 {
                        format!(" {}{} ", " ".repeat(pad), cell)
                    } else {
                        format!(" {}{} ", cell, " ".repeat(pad))
                    }
                })
                .collect();
            format!("│{}│\n", padded.join("│"))
        };

        let mut out = rule("┌", "┬", "┐");
        out.push_str(&line(&self.headers, false));
        out.push_str(&rule("├", "┼", "┤"));
        if self.is_empty() {
            out.push_str(&line(&[NO_DATA.to_string()], false));
        }
        for row in &self.rows {
            out.push_str(&line(row, true));
        }
        out.push_str(&rule("└", "┴", "┘"));
        out
    }
}

/// Writes a value as pretty-printed JSON.
pub fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Writes records as CSV with a header row.
pub fn write_csv<W: Write, T: Serialize>(out: &mut W, rows: &[T]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

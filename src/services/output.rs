use crate::domain::models::JsonOut;
use serde::Serialize;

fn print_json<T: Serialize>(data: T) -> anyhow::Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(&JsonOut { ok: true, data })?
    );
    Ok(())
}

/// A list: one text row per item, or one JSON array.
pub fn print_rows<T: Serialize>(
    json: bool,
    rows: &[T],
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        return print_json(rows);
    }
    for r in rows {
        println!("{}", row(r));
    }
    Ok(())
}

/// A single report rendered as several text lines, or one JSON object.
pub fn print_report<T: Serialize>(
    json: bool,
    report: T,
    lines: impl Fn(&T) -> Vec<String>,
) -> anyhow::Result<()> {
    if json {
        return print_json(report);
    }
    for line in lines(&report) {
        println!("{}", line);
    }
    Ok(())
}

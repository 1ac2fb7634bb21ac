//! Terminal rendering of command results.

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use mt_pools::{Report, Response};

/// Render a response for the terminal.
pub fn response(response: &Response) -> String {
    match response {
        Response::Text(text) => text.clone(),
        Response::Report(report) => self::report(report),
    }
}

/// Render a report: a coloured title, the description, then a field table.
pub fn report(report: &Report) -> String {
    let title = match report.color {
        Some(rgb) => {
            let [_, r, g, b] = rgb.to_be_bytes();
            report.title.truecolor(r, g, b).bold().to_string()
        }
        None => report.title.bold().to_string(),
    };

    let mut out = format!("  {title}");
    if let Some(description) = &report.description {
        out.push_str(&format!("\n  {}", description.dimmed()));
    }
    if report.fields.is_empty() {
        return out;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    for field in &report.fields {
        table.add_row(vec![field.name.as_str(), field.value.as_str()]);
    }
    out.push_str(&format!("\n{table}"));
    out
}

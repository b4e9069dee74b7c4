pub mod console;
pub mod report;

use serde::Serialize;

use crate::model::{Product, SupplierRecord};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Html,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "text" | "txt" => Some(Self::Text),
            "json" => Some(Self::Json),
            "html" | "htm" => Some(Self::Html),
            _ => None,
        }
    }
}

pub fn infer_format_from_path(path: &str) -> Option<OutputFormat> {
    let lower = path.trim().to_lowercase();
    if lower.ends_with(".json") {
        return Some(OutputFormat::Json);
    }
    if lower.ends_with(".html") || lower.ends_with(".htm") {
        return Some(OutputFormat::Html);
    }
    if lower.ends_with(".txt") {
        return Some(OutputFormat::Text);
    }
    None
}

/// One search result, reduced to the four displayed columns.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResultRow {
    pub id: String,
    pub name: String,
    pub category: String,
    pub preferred: String,
}

impl From<&SupplierRecord> for ResultRow {
    fn from(r: &SupplierRecord) -> Self {
        Self {
            id: r.id.as_ref().map(|id| id.to_string()).unwrap_or_default(),
            name: r.name.clone().unwrap_or_default(),
            category: r.category.clone().unwrap_or_default(),
            preferred: r.preferred.map(|p| p.to_string()).unwrap_or_default(),
        }
    }
}

pub fn build_rows(records: &[SupplierRecord]) -> Vec<ResultRow> {
    records.iter().map(ResultRow::from).collect()
}

const HEADERS: [&str; 4] = ["ID", "Name", "Category", "Preferred"];

pub fn render_text(rows: &[ResultRow]) -> Vec<u8> {
    let cells: Vec<[&str; 4]> = rows
        .iter()
        .map(|r| [r.id.as_str(), r.name.as_str(), r.category.as_str(), r.preferred.as_str()])
        .collect();
    render_columns(&HEADERS, &cells).into_bytes()
}

pub fn render_json(rows: &[ResultRow]) -> Vec<u8> {
    serde_json::to_vec_pretty(rows).unwrap_or_else(|_| b"[]\n".to_vec())
}

pub fn render_html(rows: &[ResultRow]) -> Vec<u8> {
    report::render_html(rows)
}

pub fn render(rows: &[ResultRow], format: OutputFormat) -> Vec<u8> {
    match format {
        OutputFormat::Text => render_text(rows),
        OutputFormat::Json => render_json(rows),
        OutputFormat::Html => render_html(rows),
    }
}

pub fn render_products(products: &[Product]) -> String {
    let owned: Vec<[String; 5]> = products
        .iter()
        .map(|p| {
            [
                opt_to_string(p.id),
                p.name.clone().unwrap_or_default(),
                p.desc.clone().unwrap_or_default(),
                opt_to_string(p.wholesale_price),
                opt_to_string(p.quantity),
            ]
        })
        .collect();
    let cells: Vec<[&str; 5]> = owned
        .iter()
        .map(|row| [&*row[0], &*row[1], &*row[2], &*row[3], &*row[4]])
        .collect();
    render_columns(&["ID", "Name", "Description", "Price", "Quantity"], &cells)
}

fn opt_to_string(v: Option<i64>) -> String {
    v.map(|n| n.to_string()).unwrap_or_default()
}

fn render_columns<const N: usize>(headers: &[&str; N], rows: &[[&str; N]]) -> String {
    let mut widths = headers.map(|h| h.chars().count());
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, headers, &widths);
    for row in rows {
        push_line(&mut out, row, &widths);
    }
    out
}

fn push_line<const N: usize>(out: &mut String, cells: &[&str; N], widths: &[usize; N]) {
    let line = cells
        .iter()
        .zip(widths.iter())
        .map(|(c, w)| format!("{:<width$}", c, width = *w))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}

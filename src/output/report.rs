use super::ResultRow;

const TABLE_OPEN: &str = r#"<table class="table-striped" cellpadding="10">"#;
const HEADER_ROW: &str = concat!(
    "<tr>",
    r#"<th style="width:10%">ID</th>"#,
    r#"<th style="width:40%">Name</th>"#,
    r#"<th style="width:40%">Category</th>"#,
    r#"<th style="width:10%">Preferred</th></tr>"#,
);

/// Search results as an HTML table fragment.
///
/// Cell values are inserted as-is, without escaping. Only feed this
/// data from a trusted service.
pub fn render_html(rows: &[ResultRow]) -> Vec<u8> {
    let mut out = String::new();
    out.push_str(TABLE_OPEN);
    out.push('\n');
    out.push_str(HEADER_ROW);
    out.push('\n');
    for r in rows {
        out.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            r.id, r.name, r.category, r.preferred
        ));
    }
    out.push_str("</table>\n");
    out.into_bytes()
}

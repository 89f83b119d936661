use crate::document::Element;
use crate::error::ScrapeError;
use pokedex_model::{resolve_cell_text, Table};

/// Read the column labels from the table's `<thead>`.
///
/// Text nodes are stripped, empty ones dropped, and multi-line nodes split
/// into one label per line.
pub fn column_labels<E: Element>(table: &E) -> Result<Vec<String>, ScrapeError> {
    let thead = table
        .find_first_descendant("thead")
        .ok_or(ScrapeError::SectionMissing { section: "thead" })?;

    let labels: Vec<String> = thead
        .text_segments()
        .iter()
        .flat_map(|segment| segment.trim().split('\n'))
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(str::to_string)
        .collect();

    tracing::debug!(count = labels.len(), labels = ?labels, "Extracted column labels");
    Ok(labels)
}

/// Return the `<tr>` children of the table's `<tbody>`, header rows excluded.
pub fn content_rows<E: Element>(table: &E) -> Result<Vec<E>, ScrapeError> {
    let tbody = table
        .find_first_descendant("tbody")
        .ok_or(ScrapeError::SectionMissing { section: "tbody" })?;

    let rows = tbody.find_children("tr");
    tracing::debug!(count = rows.len(), "Found content rows");
    Ok(rows)
}

/// Pair each row's `<td>` cells with the labels and collect typed values.
///
/// Pairing stops at the shorter of cells and labels, so short rows leave
/// trailing columns without a value and extra cells are ignored.
pub fn build_table<E: Element>(labels: &[String], rows: &[E]) -> Table {
    let mut table = Table::with_labels(labels);

    for (index, row) in rows.iter().enumerate() {
        let cells = row.find_all_descendants("td");
        if cells.len() != labels.len() {
            tracing::debug!(
                row = index,
                cells = cells.len(),
                labels = labels.len(),
                "Row width differs from header"
            );
        }
        for (cell, label) in cells.iter().zip(labels) {
            table.push(label, resolve_cell_text(&cell.text_content()));
        }
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;
    use pokedex_model::CellValue;
    use scraper::Html;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_column_labels_from_sortwrap_headers() {
        let html = Html::parse_document(
            r#"<table id="pokedex">
                <thead><tr>
                  <th><div class="sortwrap">#</div></th>
                  <th> <div class="sortwrap">Name</div> </th>
                  <th><div class="sortwrap">Sp. Atk</div></th>
                </tr></thead>
                <tbody></tbody>
            </table>"#,
        );
        let table = html.find_by_id("pokedex").unwrap();
        assert_eq!(column_labels(&table).unwrap(), labels(&["#", "Name", "Sp. Atk"]));
    }

    #[test]
    fn test_column_labels_split_on_line_breaks() {
        let html = Html::parse_document(
            "<table id=\"t\"><thead><tr><th>Total\nBase</th><th>HP</th></tr></thead></table>",
        );
        let table = html.find_by_id("t").unwrap();
        assert_eq!(column_labels(&table).unwrap(), labels(&["Total", "Base", "HP"]));
    }

    #[test]
    fn test_missing_thead() {
        let html = Html::parse_document(r#"<table id="t"><tr><td>1</td></tr></table>"#);
        let table = html.find_by_id("t").unwrap();
        let err = column_labels(&table).unwrap_err();
        assert!(matches!(err, ScrapeError::SectionMissing { section: "thead" }));
    }

    #[test]
    fn test_missing_tbody() {
        let html = Html::parse_document(r#"<div id="t"><thead></thead></div>"#);
        let table = html.find_by_id("t").unwrap();
        let err = content_rows(&table).unwrap_err();
        assert!(matches!(err, ScrapeError::SectionMissing { section: "tbody" }));
    }

    #[test]
    fn test_content_rows_exclude_header() {
        let html = Html::parse_document(
            r#"<table id="t">
                <thead><tr><th>A</th></tr></thead>
                <tbody><tr><td>1</td></tr><tr><td>2</td></tr></tbody>
            </table>"#,
        );
        let table = html.find_by_id("t").unwrap();
        assert_eq!(content_rows(&table).unwrap().len(), 2);
    }

    #[test]
    fn test_build_table_coerces_per_cell() {
        let html = Html::parse_document(
            r#"<table id="t">
                <thead><tr><th>Name</th><th>Type</th></tr></thead>
                <tbody>
                  <tr><td>Bulbasaur</td><td>Grass</td></tr>
                  <tr><td>1</td><td>Fire</td></tr>
                </tbody>
            </table>"#,
        );
        let table = html.find_by_id("t").unwrap();
        let labels = column_labels(&table).unwrap();
        let rows = content_rows(&table).unwrap();
        let built = build_table(&labels, &rows);

        assert_eq!(
            built.column("Name").unwrap(),
            &[CellValue::from("Bulbasaur"), CellValue::Integer(1)]
        );
        assert_eq!(
            built.column("Type").unwrap(),
            &[CellValue::from("Grass"), CellValue::from("Fire")]
        );
        assert!(built.is_rectangular());
        assert_eq!(built.row_count(), rows.len());
    }

    #[test]
    fn test_build_table_short_and_long_rows() {
        let html = Html::parse_document(
            r#"<table id="t">
                <thead><tr><th>A</th><th>B</th></tr></thead>
                <tbody>
                  <tr><td>1</td></tr>
                  <tr><td>2</td><td>y</td><td>extra</td></tr>
                </tbody>
            </table>"#,
        );
        let table = html.find_by_id("t").unwrap();
        let rows = content_rows(&table).unwrap();
        let built = build_table(&labels(&["A", "B"]), &rows);

        assert_eq!(built.column("A").unwrap(), &[CellValue::Integer(1), CellValue::Integer(2)]);
        assert_eq!(built.column("B").unwrap(), &[CellValue::from("y")]);
        assert!(!built.is_rectangular());
    }

    #[test]
    fn test_build_table_cell_with_markup() {
        let html = Html::parse_document(
            r#"<table id="t">
                <thead><tr><th>#</th><th>Type</th></tr></thead>
                <tbody><tr>
                  <td><span class="infocard-cell-data">0003</span></td>
                  <td> <a>Grass</a><br> <a>Poison</a> </td>
                </tr></tbody>
            </table>"#,
        );
        let table = html.find_by_id("t").unwrap();
        let rows = content_rows(&table).unwrap();
        let built = build_table(&labels(&["#", "Type"]), &rows);

        assert_eq!(built.column("#").unwrap(), &[CellValue::Integer(3)]);
        assert_eq!(built.column("Type").unwrap(), &[CellValue::from("Grass Poison")]);
    }
}

use rera_core::ProjectRecord;
use scraper::{ElementRef, Html, Selector};

/// Sample cap: at most this many data rows are taken from an accepted table.
pub const ROW_SAMPLE_LIMIT: usize = 6;

/// A usable data row carries at least registration number and project name.
const MIN_DATA_CELLS: usize = 2;

const HEADER_KEYWORDS: [&str; 4] = ["project", "rera", "registration", "promoter"];

/// Heuristic classifier for listing tables: the header row must mention at
/// least one registry keyword. Tables failing this test are skipped even if
/// they hold usable data; that is an accepted limitation.
pub fn is_project_table_header(header_text: &str) -> bool {
    let lowered = header_text.to_lowercase();
    HEADER_KEYWORDS.iter().any(|keyword| lowered.contains(keyword))
}

/// Finds the project listing table in a parsed document and converts its
/// rows into records. Strategy-agnostic: both acquisition paths feed their
/// documents through here.
pub struct ListingTableExtractor {
    tables: Selector,
    rows: Selector,
    cells: Selector,
    anchors: Selector,
}

impl ListingTableExtractor {
    pub fn new() -> Self {
        Self {
            tables: Selector::parse("table").expect("static selector"),
            rows: Selector::parse("tr").expect("static selector"),
            cells: Selector::parse("td, th").expect("static selector"),
            anchors: Selector::parse("a").expect("static selector"),
        }
    }

    /// Pure function of the document: scans tables in document order and
    /// maps up to [`ROW_SAMPLE_LIMIT`] data rows of the first accepted table
    /// to records.
    ///
    /// The first table passing the row-count and header checks decides the
    /// whole outcome. The row cap is applied before short rows are dropped,
    /// so sparse rows near the top shrink the emitted set; an accepted table
    /// whose sampled rows are all short yields an empty result rather than
    /// falling through to a later table.
    pub fn extract(&self, document: &Html) -> Vec<ProjectRecord> {
        for table in document.select(&self.tables) {
            let rows: Vec<ElementRef> = table.select(&self.rows).collect();
            // Header plus at least one data row.
            if rows.len() < 2 {
                continue;
            }
            if !is_project_table_header(&element_text(rows[0])) {
                continue;
            }
            log::debug!("candidate project table with {} data rows", rows.len() - 1);

            let mut records = Vec::new();
            for row in rows.iter().skip(1).take(ROW_SAMPLE_LIMIT) {
                let cells: Vec<ElementRef> = row.select(&self.cells).collect();
                if cells.len() < MIN_DATA_CELLS {
                    continue;
                }
                let mut record = ProjectRecord::from_listing_row(
                    cell_text(cells[0]),
                    cell_text(cells[1]),
                    cells.get(2).map(|cell| cell_text(*cell)),
                );
                record.detail_link = self.find_view_link(*row);
                log::debug!("extracted project: {}", record.project_name);
                records.push(record);
            }
            return records;
        }
        Vec::new()
    }

    /// An anchor whose visible text mentions "view" points at the per-project
    /// detail page. Anchors without an `href` still mark the link as seen.
    fn find_view_link(&self, row: ElementRef) -> Option<String> {
        row.select(&self.anchors)
            .find(|anchor| element_text(*anchor).to_lowercase().contains("view"))
            .map(|anchor| {
                anchor
                    .value()
                    .attr("href")
                    .unwrap_or("Not found")
                    .to_string()
            })
    }
}

impl Default for ListingTableExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn element_text(element: ElementRef) -> String {
    element.text().collect::<String>()
}

fn cell_text(cell: ElementRef) -> String {
    cell.text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

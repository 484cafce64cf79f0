//! Extracts ranking rows from the TIOBE index page.
//!
//! The page carries a `table#top20` whose body rows look like:
//! rank | rank a year ago | change icon | language | rating | change

use scraper::{ElementRef, Html, Selector};
use tiobe_common::error::{Result, TiobeError};
use tiobe_common::Language;

const ROW_SELECTOR: &str = "table#top20 tbody tr";
const CELL_SELECTOR: &str = "td";
const MIN_CELLS: usize = 5;

pub fn parse_index_table(html: &str) -> Result<Vec<Language>> {
    let document = Html::parse_document(html);
    let row_sel = selector(ROW_SELECTOR)?;
    let cell_sel = selector(CELL_SELECTOR)?;

    let mut languages = Vec::new();
    for row in document.select(&row_sel) {
        let cells: Vec<ElementRef> = row.select(&cell_sel).collect();
        if cells.len() < MIN_CELLS {
            continue;
        }

        let rank: i32 = cell_text(&cells[0]).parse().unwrap_or(0);
        let prev_rank: i32 = cell_text(&cells[1]).parse().unwrap_or(0);
        let name = cell_text(&cells[3]);
        let rating = cell_text(&cells[4]);
        let change = cells
            .get(5)
            .map(cell_text)
            .unwrap_or_else(|| "N/A".to_string());

        if name.is_empty() || rank <= 0 {
            continue;
        }

        languages.push(Language { rank, prev_rank, name, rating, change });
    }

    Ok(languages)
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| TiobeError::Parse(format!("selector {css:?}: {e}")))
}

fn cell_text(cell: &ElementRef) -> String {
    cell.text().collect::<String>().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
    <html><body>
      <table id="top20" class="table">
        <thead><tr><th>Oct 2025</th><th>Oct 2024</th><th>Change</th><th>Language</th><th>Ratings</th><th>Change</th></tr></thead>
        <tbody>
          <tr><td>1</td><td>1</td><td></td><td><a href="/py">Python</a></td><td>24.45%</td><td>+2.55%</td></tr>
          <tr><td> 2 </td><td>3</td><td><img src="up.png"></td><td> C </td><td>9.29%</td><td>-0.14%</td></tr>
          <tr><td>3</td><td></td><td></td><td>C++</td><td>8.84%</td></tr>
          <tr><td>x</td><td>4</td><td></td><td>Broken</td><td>1.00%</td><td>+0.1%</td></tr>
          <tr><td>5</td><td>5</td><td></td><td>   </td><td>1.00%</td><td>+0.1%</td></tr>
          <tr><td>6</td><td>6</td><td>Java</td></tr>
        </tbody>
      </table>
      <table id="otherPL"><tbody><tr><td>21</td><td>Dart</td><td>0.9%</td></tr></tbody></table>
    </body></html>
    "#;

    #[test]
    fn test_parses_valid_rows() {
        let langs = parse_index_table(PAGE).unwrap();
        assert_eq!(langs.len(), 3);
        assert_eq!(langs[0], Language::new(1, 1, "Python", "24.45%", "+2.55%"));
        assert_eq!(langs[1], Language::new(2, 3, "C", "9.29%", "-0.14%"));
    }

    #[test]
    fn test_missing_change_and_prev_rank_default() {
        let langs = parse_index_table(PAGE).unwrap();
        assert_eq!(langs[2].name, "C++");
        assert_eq!(langs[2].prev_rank, 0);
        assert_eq!(langs[2].change, "N/A");
    }

    #[test]
    fn test_rows_outside_top20_ignored() {
        let langs = parse_index_table(PAGE).unwrap();
        assert!(langs.iter().all(|l| l.name != "Dart" && l.name != "Java"));
    }

    #[test]
    fn test_page_without_table_is_empty() {
        let langs = parse_index_table("<html><body><p>Access denied</p></body></html>").unwrap();
        assert!(langs.is_empty());
    }
}

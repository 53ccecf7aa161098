use std::sync::LazyLock;

use lexis_core::normalize_text;
use lexis_types::VerbForm;
use scraper::{ElementRef, Html, Selector};

static CELL: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("table.inflection-table td").unwrap_or_else(|e| panic!("invalid selector: {e:?}"))
});
static PARAGRAPH: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("p").unwrap_or_else(|e| panic!("invalid selector: {e:?}")));

/// Pull verb forms out of the companion inflection-table page.
///
/// Each table cell holds a label and a form, either on separate lines or
/// separated by a `<br>`. Cells that match neither shape are skipped, so a
/// page without the table yields an empty list.
pub fn extract_verb_forms(html: &str) -> Vec<VerbForm> {
    let document = Html::parse_document(html);

    document
        .select(&CELL)
        .filter_map(cell_form)
        .enumerate()
        .map(|(id, (kind, text))| VerbForm { id, kind, text })
        .collect()
}

fn cell_form(cell: ElementRef<'_>) -> Option<(String, String)> {
    let paragraph = cell.select(&PARAGRAPH).next()?;

    let (kind, text) = split_lines(paragraph).or_else(|| split_at_break(paragraph))?;

    if kind.is_empty() || text.is_empty() {
        return None;
    }
    Some((kind, text))
}

/// `Past tense\nran` shaped cells
fn split_lines(paragraph: ElementRef<'_>) -> Option<(String, String)> {
    let raw: String = paragraph.text().collect();

    let mut lines = raw
        .lines()
        .map(normalize_text)
        .filter(|line| !line.is_empty());

    let kind = lines.next()?;
    let text = lines.next()?;
    Some((kind, text))
}

/// `Past tense<br>ran` shaped cells
fn split_at_break(paragraph: ElementRef<'_>) -> Option<(String, String)> {
    let markup = paragraph.inner_html();
    let (before, after) = split_at_first_break(&markup)?;

    Some((fragment_text(before), fragment_text(after)))
}

/// Split markup around its first `<br>`, `<br/>` or `<br />` tag
fn split_at_first_break(markup: &str) -> Option<(&str, &str)> {
    // ASCII lowercasing keeps byte offsets aligned with `markup`
    let lower = markup.to_ascii_lowercase();
    let mut from = 0;

    while let Some(found) = lower[from..].find("<br") {
        let start = from + found;
        let after_name = start + "<br".len();

        let is_break = matches!(
            lower[after_name..].chars().next(),
            Some('>' | '/' | ' ' | '\t' | '\n' | '\r')
        );
        if is_break {
            let end = after_name + lower[after_name..].find('>')? + 1;
            return Some((&markup[..start], &markup[end..]));
        }
        from = after_name;
    }

    None
}

/// Text of a markup snippet, re-parsed as a fragment. Falls back to plain
/// tag stripping when the parser finds no text.
fn fragment_text(markup: &str) -> String {
    let fragment = Html::parse_fragment(markup);
    let parsed = normalize_text(&fragment.root_element().text().collect::<String>());

    if parsed.is_empty() {
        normalize_text(markup)
    } else {
        parsed
    }
}

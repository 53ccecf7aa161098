use std::collections::HashSet;
use std::sync::LazyLock;

use lexis_core::{LookupError, normalize_text};
use lexis_types::{Definition, DictionaryRecord, Example, Pronunciation};
use scraper::{ElementRef, Html, Selector};
use url::Url;

/// Source id used when an entry names none
const FALLBACK_SOURCE: &str = "oxford";

const ENTRY_CONTAINER_CLASS: &str = "entry-body__el";

fn selector(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid selector {css:?}: {e:?}"))
}

static HEADWORD: LazyLock<Selector> = LazyLock::new(|| selector(".headword"));
static POS: LazyLock<Selector> = LazyLock::new(|| selector(".pos"));
static POS_HEADER: LazyLock<Selector> = LazyLock::new(|| selector(".pos-header"));
static PRON_BLOCK: LazyLock<Selector> = LazyLock::new(|| selector(".dpron-i"));
static REGION: LazyLock<Selector> = LazyLock::new(|| selector(".region"));
static TRANSCRIPTION: LazyLock<Selector> = LazyLock::new(|| selector(".pron"));
static AUDIO_SOURCE: LazyLock<Selector> = LazyLock::new(|| selector("audio source[src]"));
static SENSE: LazyLock<Selector> = LazyLock::new(|| selector(".def-block"));
static ENTRY_POS: LazyLock<Selector> = LazyLock::new(|| selector(".posgram .pos"));
static DEFINITION: LazyLock<Selector> = LazyLock::new(|| selector(".def"));
static TOP_MARKER: LazyLock<Selector> = LazyLock::new(|| selector(".top[id]"));
static EXAMPLE: LazyLock<Selector> = LazyLock::new(|| selector(".examp"));
static MORE_EXAMPLES: LazyLock<Selector> = LazyLock::new(|| selector(".daccord li"));

/// Parses the primary dictionary page into a [`DictionaryRecord`].
///
/// Only the headword is mandatory. Every other field degrades to an empty
/// value when the page lacks it. `verb_forms` is always left empty here.
#[derive(Debug, Clone)]
pub struct DictionaryPageExtractor {
    site_origin: Option<Url>,
}

impl DictionaryPageExtractor {
    pub fn new(site_origin: &str) -> Self {
        let site_origin = match Url::parse(site_origin) {
            Ok(url) => Some(url),
            Err(e) => {
                tracing::warn!("Ignoring site origin '{}': {}", site_origin, e);
                None
            }
        };
        Self { site_origin }
    }

    pub fn extract(&self, html: &str) -> Result<DictionaryRecord, LookupError> {
        let document = Html::parse_document(html);

        let word = document
            .select(&HEADWORD)
            .next()
            .map(element_text)
            .unwrap_or_default();

        if word.is_empty() {
            return Err(LookupError::NotFound("page has no headword".to_string()));
        }

        Ok(DictionaryRecord {
            word,
            parts_of_speech: parts_of_speech(&document),
            verb_forms: Vec::new(),
            pronunciations: self.pronunciations(&document),
            definitions: definitions(&document),
        })
    }

    fn pronunciations(&self, document: &Html) -> Vec<Pronunciation> {
        let mut pronunciations = Vec::new();

        for header in document.select(&POS_HEADER) {
            let part_of_speech = first_text(header, &POS);

            for block in header.select(&PRON_BLOCK) {
                let transcription = first_text(block, &TRANSCRIPTION);
                if transcription.is_empty() {
                    continue;
                }

                let audio_url = block
                    .select(&AUDIO_SOURCE)
                    .next()
                    .and_then(|source| source.value().attr("src"))
                    .map(|src| self.resolve_url(src))
                    .unwrap_or_default();

                pronunciations.push(Pronunciation {
                    part_of_speech: part_of_speech.clone(),
                    region: first_text(block, &REGION),
                    audio_url,
                    transcription,
                });
            }
        }

        pronunciations
    }

    /// Make an audio path absolute against the site origin. Anything that
    /// does not resolve becomes an empty string.
    fn resolve_url(&self, src: &str) -> String {
        let src = src.trim();
        if src.is_empty() {
            return String::new();
        }

        let resolved = match &self.site_origin {
            Some(origin) => origin.join(src),
            None => Url::parse(src),
        };

        resolved.map(String::from).unwrap_or_default()
    }
}

fn parts_of_speech(document: &Html) -> Vec<String> {
    let mut seen = HashSet::new();

    document
        .select(&POS)
        .map(element_text)
        .filter(|pos| !pos.is_empty())
        .filter(|pos| seen.insert(pos.clone()))
        .collect()
}

fn definitions(document: &Html) -> Vec<Definition> {
    let mut definitions = Vec::new();

    for sense in document.select(&SENSE) {
        let text = first_text(sense, &DEFINITION);
        if text.is_empty() {
            continue;
        }

        let entry = enclosing_entry(sense);
        let part_of_speech = entry.map(entry_part_of_speech).unwrap_or_default();
        let source_id = entry
            .and_then(entry_source)
            .unwrap_or_else(|| FALLBACK_SOURCE.to_string());

        definitions.push(Definition {
            id: definitions.len(),
            part_of_speech,
            source_id,
            text,
            translation: String::new(),
            examples: examples(sense),
        });
    }

    definitions
}

fn enclosing_entry(sense: ElementRef<'_>) -> Option<ElementRef<'_>> {
    sense
        .ancestors()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().classes().any(|c| c == ENTRY_CONTAINER_CLASS))
}

fn entry_part_of_speech(entry: ElementRef<'_>) -> String {
    let labelled = first_text(entry, &ENTRY_POS);
    if labelled.is_empty() {
        first_text(entry, &POS)
    } else {
        labelled
    }
}

/// `data-source` on the entry, then the id of its top marker
fn entry_source(entry: ElementRef<'_>) -> Option<String> {
    let explicit = entry
        .value()
        .attr("data-source")
        .map(normalize_text)
        .filter(|s| !s.is_empty());

    explicit.or_else(|| {
        entry
            .select(&TOP_MARKER)
            .filter_map(|el| el.value().attr("id"))
            .map(normalize_text)
            .find(|id| !id.is_empty())
    })
}

/// Primary examples followed by the grouped ones, deduplicated on text
fn examples(sense: ElementRef<'_>) -> Vec<Example> {
    let mut seen = HashSet::new();

    sense
        .select(&EXAMPLE)
        .chain(sense.select(&MORE_EXAMPLES))
        .map(element_text)
        .filter(|text| !text.is_empty() && seen.insert(text.clone()))
        .enumerate()
        .map(|(id, text)| Example {
            id,
            text,
            translation: String::new(),
        })
        .collect()
}

fn first_text(scope: ElementRef<'_>, selector: &Selector) -> String {
    scope
        .select(selector)
        .next()
        .map(element_text)
        .unwrap_or_default()
}

fn element_text(element: ElementRef<'_>) -> String {
    normalize_text(&element.text().collect::<String>())
}

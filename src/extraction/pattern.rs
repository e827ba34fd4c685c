//! Rule-based named-entity extraction.
//!
//! Numeric entities are matched first (money, percent, date, quantity, cardinal)
//! and claim their byte ranges. Remaining capitalized word runs are then grouped
//! into spans and labelled ORG, GPE or PERSON with small keyword lists and a
//! gazetteer. Output is in document order.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

use super::EntityExtractor;
use super::types::{Entity, EntityLabel};

const MONTHS: &str =
    "January|February|March|April|May|June|July|August|September|October|November|December";

static MONEY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?:[$€£]\s?\d[\d,]*(?:\.\d+)?(?:\s(?:thousand|million|billion|trillion))?|\b\d[\d,]*(?:\.\d+)?\s(?:(?:thousand|million|billion|trillion)\s)?(?:dollars|euros|USD|EUR|GBP)\b)",
    )
    .expect("money pattern is valid")
});

static PERCENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b\d+(?:\.\d+)?(?:\s?%|\s?percent\b|\sper\scent\b)")
        .expect("percent pattern is valid")
});

static DATE: Lazy<Regex> = Lazy::new(|| {
    let pattern = format!(
        r"\b(?:(?:{m})(?:\s+\d{{1,2}}(?:st|nd|rd|th)?)?(?:,?\s+(?:19|20)\d{{2}})?|\d{{1,2}}\s+(?:{m})(?:,?\s+(?:19|20)\d{{2}})?|Monday|Tuesday|Wednesday|Thursday|Friday|Saturday|Sunday|\d{{4}}-\d{{2}}-\d{{2}}|(?:19|20)\d{{2}}s?)\b",
        m = MONTHS
    );
    Regex::new(&pattern).expect("date pattern is valid")
});

static QUANTITY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b\d+(?:\.\d+)?\s?(?:mg|mcg|g|kg|ml|mL|L|cm|mm|km|lbs?|pounds|ounces|oz|miles|mmHg|IU)\b",
    )
    .expect("quantity pattern is valid")
});

static CARDINAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d[\d,]*(?:\.\d+)?\b").expect("cardinal pattern is valid"));

static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+").expect("word pattern is valid"));

const TITLES: &[&str] = &["Dr.", "Dr", "Prof.", "Prof", "Mr.", "Mrs.", "Ms."];

const CONNECTORS: &[&str] = &["of", "for", "the", "de"];

/// Capitalized words that start sentences without naming anything.
const SENTENCE_STARTERS: &[&str] = &[
    "the", "a", "an", "in", "on", "at", "this", "that", "these", "those", "it", "its", "there",
    "their", "they", "we", "our", "he", "she", "his", "her", "after", "before", "during",
    "according", "however", "but", "and", "for", "with", "among", "while", "when", "if", "as",
    "by", "from", "of", "to", "some", "many", "most", "all", "each", "one", "both", "also",
    "although", "since", "because", "despite", "overall", "i", "researchers", "patients",
    "doctors", "officials", "experts", "scientists", "results", "data", "participants",
];

const ORG_KEYWORDS: &[&str] = &[
    "organization",
    "organisation",
    "institute",
    "institutes",
    "university",
    "hospital",
    "clinic",
    "center",
    "centre",
    "centers",
    "association",
    "agency",
    "administration",
    "department",
    "ministry",
    "foundation",
    "council",
    "society",
    "college",
    "school",
    "board",
    "company",
    "corporation",
    "inc",
    "corp",
    "ltd",
    "group",
    "trust",
    "service",
    "services",
    "network",
    "alliance",
    "journal",
    "committee",
    "commission",
    "laboratories",
    "pharmaceuticals",
];

const GAZETTEER: &[&str] = &[
    "united states",
    "us",
    "usa",
    "uk",
    "united kingdom",
    "canada",
    "mexico",
    "brazil",
    "china",
    "india",
    "japan",
    "germany",
    "france",
    "italy",
    "spain",
    "australia",
    "africa",
    "south africa",
    "nigeria",
    "kenya",
    "europe",
    "asia",
    "america",
    "north america",
    "latin america",
    "england",
    "scotland",
    "wales",
    "ireland",
    "russia",
    "ukraine",
    "israel",
    "egypt",
    "pakistan",
    "bangladesh",
    "indonesia",
    "philippines",
    "vietnam",
    "korea",
    "south korea",
    "new zealand",
    "sweden",
    "norway",
    "denmark",
    "finland",
    "netherlands",
    "switzerland",
    "california",
    "texas",
    "new york",
    "florida",
    "washington",
    "massachusetts",
    "ohio",
    "michigan",
    "london",
    "paris",
    "beijing",
    "tokyo",
    "delhi",
    "new delhi",
    "geneva",
    "atlanta",
    "boston",
    "chicago",
    "toronto",
    "sydney",
    "wuhan",
    "seattle",
    "los angeles",
    "san francisco",
];

#[derive(Debug, Clone)]
struct Token<'a> {
    start: usize,
    end: usize,
    word: &'a str,
    title: bool,
    /// Trailing punctuation (or a possessive) ends any span at this token.
    breaks: bool,
    ends_sentence: bool,
}

/// Rule-based extractor used as the primary NER collaborator.
#[derive(Debug, Clone, Default)]
pub struct PatternEntityExtractor;

impl PatternEntityExtractor {
    pub fn new() -> Self {
        Self
    }

    fn numeric_entities(text: &str, claimed: &mut Vec<(usize, usize)>) -> Vec<(usize, Entity)> {
        let rules: [(&Lazy<Regex>, EntityLabel); 5] = [
            (&MONEY, EntityLabel::Money),
            (&PERCENT, EntityLabel::Percent),
            (&DATE, EntityLabel::Date),
            (&QUANTITY, EntityLabel::Quantity),
            (&CARDINAL, EntityLabel::Cardinal),
        ];

        let mut found = Vec::new();
        for (pattern, label) in rules {
            for m in pattern.find_iter(text) {
                if overlaps(claimed, m.start(), m.end()) || attached_to_word(text, m.start()) {
                    continue;
                }
                claimed.push((m.start(), m.end()));
                found.push((m.start(), Entity::new(m.as_str(), label.clone())));
            }
        }
        found
    }

    fn span_entities(text: &str, claimed: &[(usize, usize)]) -> Vec<(usize, Entity)> {
        let tokens = tokenize(text);
        let usable = |t: &Token<'_>| is_capitalized(t.word) && !overlaps(claimed, t.start, t.end);

        let mut found = Vec::new();
        let mut i = 0;
        while i < tokens.len() {
            if !usable(&tokens[i]) {
                i += 1;
                continue;
            }

            let mut last = i;
            while !tokens[last].breaks {
                let next = last + 1;
                if next < tokens.len() && usable(&tokens[next]) {
                    last = next;
                    continue;
                }
                if next + 1 < tokens.len()
                    && CONNECTORS.contains(&tokens[next].word)
                    && !tokens[next].breaks
                    && usable(&tokens[next + 1])
                {
                    last = next + 1;
                    continue;
                }
                break;
            }

            let sentence_start = i == 0 || tokens[i - 1].ends_sentence;
            let mut first = i;
            if sentence_start
                && !tokens[first].title
                && SENTENCE_STARTERS.contains(&tokens[first].word.to_lowercase().as_str())
            {
                first += 1;
            }

            if first <= last
                && let Some(entity) = classify(text, &tokens[first..=last], sentence_start && first == i)
            {
                found.push((tokens[first].start, entity));
            }

            i = last + 1;
        }
        found
    }
}

impl EntityExtractor for PatternEntityExtractor {
    fn name(&self) -> &'static str {
        "pattern"
    }

    fn extract(&self, text: &str) -> Vec<Entity> {
        let mut claimed = Vec::new();
        let mut found = Self::numeric_entities(text, &mut claimed);
        found.extend(Self::span_entities(text, &claimed));
        found.sort_by_key(|(start, _)| *start);

        trace!(count = found.len(), "Extracted entities");

        found.into_iter().map(|(_, entity)| entity).collect()
    }
}

fn classify(text: &str, span: &[Token<'_>], at_sentence_start: bool) -> Option<Entity> {
    let first = span.first()?;
    let last = span.last()?;
    let surface = &text[first.start..last.end];
    let lower = surface.to_lowercase();

    if first.title {
        return (span.len() > 1).then(|| Entity::new(surface, EntityLabel::Person));
    }

    if GAZETTEER.contains(&lower.as_str()) {
        return Some(Entity::new(surface, EntityLabel::Gpe));
    }

    let has_org_keyword = span
        .iter()
        .any(|t| ORG_KEYWORDS.contains(&t.word.to_lowercase().as_str()));
    if has_org_keyword {
        return Some(Entity::new(surface, EntityLabel::Org));
    }

    if span.len() == 1 {
        if is_acronym(first.word) {
            return Some(Entity::new(surface, EntityLabel::Org));
        }
        // A lone capitalized word opening a sentence is usually not a name.
        if at_sentence_start || SENTENCE_STARTERS.contains(&lower.as_str()) {
            return None;
        }
        return Some(Entity::new(surface, EntityLabel::Org));
    }

    let has_connector = span.iter().any(|t| CONNECTORS.contains(&t.word));
    let all_title_case = span.iter().all(|t| !is_acronym(t.word));
    if !has_connector && all_title_case && span.len() <= 3 {
        return Some(Entity::new(surface, EntityLabel::Person));
    }

    Some(Entity::new(surface, EntityLabel::Org))
}

fn tokenize(text: &str) -> Vec<Token<'_>> {
    const LEADING: &[char] = &['"', '\'', '(', '[', '{', '“', '‘'];
    const TRAILING: &[char] = &['.', ',', ';', ':', '!', '?', '"', '\'', ')', ']', '}', '”', '’'];

    let mut tokens = Vec::new();
    for m in WORD.find_iter(text) {
        let raw = m.as_str();
        let lead_trimmed = raw.trim_start_matches(LEADING);
        let start = m.start() + (raw.len() - lead_trimmed.len());

        if TITLES.contains(&lead_trimmed) {
            tokens.push(Token {
                start,
                end: m.end(),
                word: lead_trimmed.trim_end_matches('.'),
                title: true,
                breaks: false,
                ends_sentence: false,
            });
            continue;
        }

        let word = lead_trimmed.trim_end_matches(TRAILING);
        let trailing = &lead_trimmed[word.len()..];
        let (word, possessive) = match word.strip_suffix("'s").or_else(|| word.strip_suffix("’s")) {
            Some(stem) => (stem, true),
            None => (word, false),
        };
        if word.is_empty() {
            if let Some(prev) = tokens.last_mut() {
                prev.breaks = true;
                prev.ends_sentence |= trailing.contains(['.', '!', '?']);
            }
            continue;
        }

        tokens.push(Token {
            start,
            end: start + word.len(),
            word,
            title: false,
            breaks: possessive || !trailing.is_empty(),
            ends_sentence: trailing.contains(['.', '!', '?']),
        });
    }
    tokens
}

fn is_capitalized(word: &str) -> bool {
    word.chars().next().is_some_and(|c| c.is_uppercase())
}

fn is_acronym(word: &str) -> bool {
    let upper = word.chars().filter(|c| c.is_ascii_uppercase()).count();
    upper >= 2
        && word
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '-' || c == '.')
}

/// Digits glued to a preceding letter or hyphen (`COVID-19`) belong to that word.
fn attached_to_word(text: &str, start: usize) -> bool {
    text[..start]
        .chars()
        .next_back()
        .is_some_and(|c| c.is_alphabetic() || c == '-')
}

fn overlaps(claimed: &[(usize, usize)], start: usize, end: usize) -> bool {
    claimed.iter().any(|&(s, e)| start < e && s < end)
}

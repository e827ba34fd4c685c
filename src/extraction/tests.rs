use super::readability::{count_sentences, count_syllables};
use super::*;
use std::io::Write;

fn pairs(entities: &[Entity]) -> Vec<(&str, EntityLabel)> {
    entities
        .iter()
        .map(|e| (e.text.as_str(), e.label.clone()))
        .collect()
}

#[test]
fn test_pattern_extracts_mixed_entities_in_order() {
    let extractor = PatternEntityExtractor::new();
    let entities =
        extractor.extract("Dr. Smith from the CDC in Atlanta reported 45% efficacy on January 5.");

    assert_eq!(
        pairs(&entities),
        vec![
            ("Dr. Smith", EntityLabel::Person),
            ("CDC", EntityLabel::Org),
            ("Atlanta", EntityLabel::Gpe),
            ("45%", EntityLabel::Percent),
            ("January 5", EntityLabel::Date),
        ]
    );
}

#[test]
fn test_pattern_drops_sentence_starter() {
    let extractor = PatternEntityExtractor::new();
    let entities = extractor.extract("The World Health Organization declared a pandemic.");

    assert_eq!(
        pairs(&entities),
        vec![("World Health Organization", EntityLabel::Org)]
    );
}

#[test]
fn test_pattern_no_entities() {
    let extractor = PatternEntityExtractor::new();
    assert!(
        extractor
            .extract("There are many possible outcomes in this scenario.")
            .is_empty()
    );
}

#[test]
fn test_pattern_numeric_labels() {
    let extractor = PatternEntityExtractor::new();
    let entities =
        extractor.extract("In 2023, 42% of 1200 patients received $5 million in 10 mg doses.");

    assert_eq!(
        pairs(&entities),
        vec![
            ("2023", EntityLabel::Date),
            ("42%", EntityLabel::Percent),
            ("1200", EntityLabel::Cardinal),
            ("$5 million", EntityLabel::Money),
            ("10 mg", EntityLabel::Quantity),
        ]
    );
}

#[test]
fn test_pattern_org_keyword_span() {
    let extractor = PatternEntityExtractor::new();
    let entities = extractor.extract("Researchers at Johns Hopkins University found benefits.");

    assert_eq!(
        pairs(&entities),
        vec![("Johns Hopkins University", EntityLabel::Org)]
    );
}

#[test]
fn test_pattern_connector_inside_span() {
    let extractor = PatternEntityExtractor::new();
    let entities = extractor.extract("Funding came from the National Institutes of Health last year.");

    assert_eq!(
        pairs(&entities),
        vec![("National Institutes of Health", EntityLabel::Org)]
    );
}

#[test]
fn test_pattern_possessive_and_acronym() {
    let extractor = PatternEntityExtractor::new();
    let entities = extractor.extract("The WHO's guidance on COVID-19 was updated.");

    assert_eq!(
        pairs(&entities),
        vec![("WHO", EntityLabel::Org), ("COVID-19", EntityLabel::Org)]
    );
}

#[test]
fn test_pattern_punctuation_breaks_spans() {
    let extractor = PatternEntityExtractor::new();
    let entities = extractor.extract("Trials ran in Canada, Brazil and Kenya.");

    assert_eq!(
        pairs(&entities),
        vec![
            ("Canada", EntityLabel::Gpe),
            ("Brazil", EntityLabel::Gpe),
            ("Kenya", EntityLabel::Gpe),
        ]
    );
}

#[test]
fn test_key_labels() {
    assert!(EntityLabel::Org.is_key());
    assert!(EntityLabel::Quantity.is_key());
    assert!(!EntityLabel::Cardinal.is_key());
    assert!(!EntityLabel::Domain.is_key());
    assert_eq!(EntityLabel::Domain.to_string(), "DISEASE/ENTITY");
}

#[test]
fn test_lexicon_prefers_longest_term() {
    let extractor =
        LexiconEntityExtractor::from_terms(["diabetes", "type 2 diabetes", "Insulin"]).unwrap();
    let entities = extractor.extract("Patients with Type 2 diabetes need insulin.");

    assert_eq!(
        pairs(&entities),
        vec![
            ("Type 2 diabetes", EntityLabel::Domain),
            ("insulin", EntityLabel::Domain),
        ]
    );
    assert_eq!(extractor.term_count(), 3);
}

#[test]
fn test_lexicon_respects_word_boundaries() {
    let extractor = LexiconEntityExtractor::from_terms(["flu"]).unwrap();
    assert!(extractor.extract("Fluid intake matters.").is_empty());
    assert_eq!(extractor.extract("The flu season began.").len(), 1);
}

#[test]
fn test_lexicon_load_skips_comments() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "# disease terms\n\nmeasles\n  hepatitis b  \n").unwrap();

    let extractor = LexiconEntityExtractor::load(file.path()).unwrap();
    assert_eq!(extractor.term_count(), 2);
    assert_eq!(
        pairs(&extractor.extract("Cases of Hepatitis B and measles rose.")),
        vec![
            ("Hepatitis B", EntityLabel::Domain),
            ("measles", EntityLabel::Domain),
        ]
    );
}

#[test]
fn test_lexicon_load_errors() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "# only a comment").unwrap();
    assert!(matches!(
        LexiconEntityExtractor::load(file.path()),
        Err(ExtractionError::EmptyLexicon { .. })
    ));

    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        LexiconEntityExtractor::load(&dir.path().join("missing.txt")),
        Err(ExtractionError::LexiconRead { .. })
    ));

    assert!(matches!(
        LexiconEntityExtractor::from_terms(Vec::<String>::new()),
        Err(ExtractionError::NoTerms)
    ));
}

#[test]
fn test_syllable_counts() {
    assert_eq!(count_syllables("the"), 1);
    assert_eq!(count_syllables("table"), 2);
    assert_eq!(count_syllables("reported"), 3);
    assert_eq!(count_syllables("reduced"), 2);
    assert_eq!(count_syllables("agreed"), 2);
    assert_eq!(count_syllables("efficacy"), 4);
    assert_eq!(count_syllables("2023"), 1);
}

#[test]
fn test_syllable_silent_endings_floor_at_one() {
    assert_eq!(count_syllables("make"), 1);
    assert_eq!(count_syllables("jumped"), 1);
    assert_eq!(count_syllables("shed"), 1);
    assert_eq!(count_syllables("the"), 1);
}

#[test]
fn test_sentence_count() {
    assert_eq!(count_sentences("One. Two! Three?"), 3);
    assert_eq!(count_sentences("No terminator"), 1);
    assert_eq!(count_sentences("..."), 0);
}

#[test]
fn test_flesch_simple_sentence() {
    let scores = FleschScorer::new().score("The cat sat on the mat.");

    assert!((scores.fkgl - (-1.45)).abs() < 1e-9);
    assert!((scores.fre - 116.145).abs() < 1e-9);
}

#[test]
fn test_flesch_empty_text() {
    let scores = FleschScorer::new().score("   ");
    assert_eq!(scores, Readability { fkgl: 0.0, fre: 0.0 });
}

#[test]
fn test_flesch_complex_text_is_harder() {
    let scorer = FleschScorer::new();
    let simple = scorer.score("The drug works. It is safe. Most people did well.");
    let complex = scorer.score(
        "Pharmacological interventions demonstrated statistically significant \
         cardiovascular improvements among immunocompromised participants receiving \
         individualized chemotherapy regimens.",
    );

    assert!(complex.fkgl > simple.fkgl);
    assert!(complex.fre < simple.fre);
}

//! Corpus-level terminology extraction behavior

use kireme_core::{aggregate, TagPattern, TaggedSegment, DEFAULT_PATTERNS};

fn parse_corpus(lines: &[&str]) -> Vec<TaggedSegment> {
    lines
        .iter()
        .map(|line| TaggedSegment::parse(line).unwrap())
        .collect()
}

#[test]
fn ranked_output_over_a_small_corpus() {
    let corpus = parse_corpus(&[
        "the|DET neural|ADJ network|NOUN converged|VERB",
        "a|DET deep|ADJ neural|ADJ network|NOUN helps|VERB",
        "the|DET neural|ADJ network|NOUN training|NOUN stalled|VERB",
    ]);
    let patterns = TagPattern::parse_all(DEFAULT_PATTERNS).unwrap();

    let ranked = aggregate(&corpus, &patterns).rank();

    // "neural network" appears in all three lines; the single-count
    // terms keep first-insertion order among themselves.
    assert_eq!(ranked[0], (3, "neural network".to_string()));
    let once: Vec<&str> = ranked[1..].iter().map(|(_, t)| t.as_str()).collect();
    assert_eq!(once, vec!["deep neural network", "network training"]);
}

#[test]
fn overlapping_patterns_double_count_across_the_corpus() {
    let corpus = parse_corpus(&["big|ADJ red|ADJ barn|NOUN"]);
    let patterns = TagPattern::parse_all(["ADJ NOUN", "ADJ ADJ NOUN"]).unwrap();

    let table = aggregate(&corpus, &patterns);
    assert_eq!(table.count("red barn"), 1);
    assert_eq!(table.count("big red barn"), 1);
    assert_eq!(table.len(), 2);
}

#[test]
fn aggregation_matches_line_by_line_fold() {
    let lines = [
        "code|NOUN review|NOUN queue|NOUN",
        "code|NOUN review|NOUN",
        "review|NOUN queue|NOUN",
    ];
    let corpus = parse_corpus(&lines);
    let patterns = TagPattern::parse_all(["NOUN NOUN"]).unwrap();

    let whole = aggregate(&corpus, &patterns);

    let mut folded = kireme_core::FrequencyTable::new();
    for segment in &corpus {
        let partial = aggregate(std::iter::once(segment), &patterns);
        folded.merge(&partial);
    }

    assert_eq!(whole.rank(), folded.rank());
}

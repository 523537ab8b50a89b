use counter_core::{CorpusScanner, CounterTypeSet, Face, Vocabulary};
use pretty_assertions::assert_eq;

fn init_logging() {
    engine_logging::initialize_for_tests();
}

fn faces(texts: &[&str]) -> Vec<Face> {
    texts.iter().copied().map(Face::from).collect()
}

fn set(names: &[&str]) -> CounterTypeSet {
    names.iter().copied().collect()
}

const CORPUS: &[&str] = &[
    "Frankenstein's Monster enters the battlefield with X +2/+0, +1/+1, or +0/+2 counters on it.",
    "At the beginning of your upkeep, put an age counter on this enchantment.",
    "Whenever this creature deals combat damage to a player, that player gets a poison counter in addition to the damage.",
    "Proliferate. Remove all counters from target creature.",
    "+1: Put a loyalty counter on it.",
];

#[test]
fn scan_collects_types_from_every_face() {
    init_logging();
    let found = CorpusScanner::standard().scan(&faces(CORPUS));

    assert_eq!(
        found,
        set(&["+0/+2", "+1/+1", "+2/+0", "age", "loyalty", "poison"])
    );
}

#[test]
fn empty_and_absent_text_contribute_nothing() {
    let scanner = CorpusScanner::standard();

    assert!(scanner.scan(&[Face::from_text(None)]).is_empty());
    assert!(scanner.scan(&faces(&["", "   "])).is_empty());
    assert!(scanner.scan_texts([None, Some("")]).is_empty());
}

#[test]
fn marker_as_first_token_is_ignored() {
    let found = CorpusScanner::standard().scan(&faces(&["counters are fun"]));
    assert!(found.is_empty());
}

#[test]
fn marker_with_trailing_punctuation_is_not_an_anchor() {
    let found = CorpusScanner::standard().scan(&faces(&["remove a time counter."]));
    assert!(found.is_empty());
}

#[test]
fn several_anchors_in_one_face() {
    let found = CorpusScanner::standard().scan(&faces(&[
        "Put a fade counter on it. If you can't, remove a time counter from it.",
    ]));
    assert_eq!(found, set(&["fade", "time"]));

    let found = CorpusScanner::standard()
        .scan(&faces(&["put a fade counter or a time counter on it"]));
    assert_eq!(found, set(&["fade", "time"]));
}

#[test]
fn scanning_twice_yields_identical_sets() {
    let scanner = CorpusScanner::standard();
    let corpus = faces(CORPUS);

    assert_eq!(scanner.scan(&corpus), scanner.scan(&corpus));
}

#[test]
fn scan_of_concatenation_is_union_of_scans() {
    let scanner = CorpusScanner::standard();
    let first = faces(&CORPUS[..2]);
    let second = faces(&CORPUS[2..]);
    let all: Vec<Face> = first.iter().chain(second.iter()).cloned().collect();

    assert_eq!(
        scanner.scan(&all),
        scanner.scan(&first).union(scanner.scan(&second))
    );
}

#[test]
fn parallel_scan_matches_sequential_scan() {
    let scanner = CorpusScanner::standard();
    let corpus: Vec<Face> = faces(CORPUS).into_iter().cycle().take(200).collect();

    assert_eq!(scanner.scan_parallel(&corpus), scanner.scan(&corpus));
}

#[test]
fn scan_texts_tokenizes_on_any_whitespace() {
    let found = CorpusScanner::standard().scan_texts([Some("a\tshield\ncounter")]);
    assert_eq!(found, set(&["shield"]));
}

#[test]
fn custom_markers_are_respected() {
    let vocabulary = Vocabulary::new(["marker"], ["a"]);
    let scanner = CorpusScanner::new(&vocabulary);

    let found = scanner.scan(&faces(&["put a treasure marker and a shield counter"]));
    assert_eq!(found, set(&["treasure"]));
}

#[test]
fn bare_comma_before_marker_is_collected_as_empty_name() {
    let found = CorpusScanner::standard().scan(&faces(&["put a , counter"]));
    assert_eq!(found, set(&[""]));
}

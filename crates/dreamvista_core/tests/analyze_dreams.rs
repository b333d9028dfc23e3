use dreamvista_core::{
    AnalyzeOptions, DreamService, DreamStore, KEYWORD_MATCH_RELEVANCE, NAME_MATCH_RELEVANCE,
};
use tempfile::TempDir;

fn open_service(dir: &TempDir) -> DreamService {
    DreamService::open(dir.path().join("dream_vista_data.json"))
}

#[test]
fn worked_example_matches_and_persists_dream_with_interpretations() {
    let dir = TempDir::new().unwrap();
    let mut service = open_service(&dir);

    let text = "I was flying over the ocean and then started falling";
    let matches = service.analyze_dream(text);

    let summary: Vec<(&str, u8)> = matches
        .iter()
        .map(|m| (m.symbol.symbol.as_str(), m.relevance))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("flying", NAME_MATCH_RELEVANCE),
            ("falling", NAME_MATCH_RELEVANCE),
            ("water", KEYWORD_MATCH_RELEVANCE),
        ]
    );

    let store = service.store();
    assert_eq!(store.dreams().len(), 1);
    let dream = &store.dreams()[0];
    assert_eq!(dream.id, 1);
    assert_eq!(dream.dream_text, text);
    assert_eq!(dream.dream_date, dream.created_at.date());
    assert_eq!(dream.mood_before, None);
    assert!(!dream.recurring);

    let interpretations = store.interpretations();
    assert_eq!(interpretations.len(), 3);
    let symbol_ids: Vec<u64> = interpretations.iter().map(|i| i.symbol_id).collect();
    let scores: Vec<u8> = interpretations.iter().map(|i| i.relevance_score).collect();
    assert_eq!(symbol_ids, vec![1, 2, 3]);
    assert_eq!(scores, vec![10, 10, 7]);
    assert!(interpretations.iter().all(|i| i.dream_id == 1));

    // The whole dataset was flushed to disk in the same operation.
    let reloaded = DreamStore::open(store.path());
    assert_eq!(reloaded.dreams().len(), 1);
    assert_eq!(reloaded.interpretations().len(), 3);
}

#[test]
fn no_match_returns_empty_and_persists_nothing() {
    let dir = TempDir::new().unwrap();
    let mut service = open_service(&dir);

    let matches = service.analyze_dream("an uneventful evening walk");

    assert!(matches.is_empty());
    assert!(service.store().dreams().is_empty());
    assert!(service.store().interpretations().is_empty());

    let reloaded = DreamStore::open(service.store().path());
    assert!(reloaded.dreams().is_empty());
    assert!(reloaded.interpretations().is_empty());
}

#[test]
fn persist_disabled_returns_matches_without_recording() {
    let dir = TempDir::new().unwrap();
    let mut service = open_service(&dir);

    let options = AnalyzeOptions {
        persist: false,
        ..AnalyzeOptions::default()
    };
    let matches = service.analyze_dream_with("a snake by the river", &options);

    assert_eq!(matches.len(), 2);
    assert!(service.store().dreams().is_empty());
    assert!(service.store().interpretations().is_empty());
}

#[test]
fn options_record_mood_and_recurring_on_the_dream() {
    let dir = TempDir::new().unwrap();
    let mut service = open_service(&dir);

    let options = AnalyzeOptions {
        persist: true,
        mood_before: Some("anxious".to_string()),
        recurring: true,
    };
    service.analyze_dream_with("chased through a dark house", &options);

    let dream = &service.store().dreams()[0];
    assert_eq!(dream.mood_before.as_deref(), Some("anxious"));
    assert!(dream.recurring);
}

#[test]
fn repeated_analyses_assign_monotonic_ids() {
    let dir = TempDir::new().unwrap();
    let mut service = open_service(&dir);

    service.analyze_dream("a spider spinning its web");
    service.analyze_dream("climbing a mountain at dawn");

    let store = service.store();
    let dream_ids: Vec<u64> = store.dreams().iter().map(|d| d.id).collect();
    assert_eq!(dream_ids, vec![1, 2]);

    let interpretation_ids: Vec<u64> = store.interpretations().iter().map(|i| i.id).collect();
    assert_eq!(interpretation_ids, vec![1, 2]);
}

#[test]
fn keyword_only_text_scores_seven_with_one_entry_per_symbol() {
    let dir = TempDir::new().unwrap();
    let mut service = open_service(&dir);

    let matches = service.analyze_dream("rain over the sea turned into a flood");

    let water: Vec<_> = matches
        .iter()
        .filter(|m| m.symbol.symbol == "water")
        .collect();
    assert_eq!(water.len(), 1);
    assert_eq!(water[0].relevance, KEYWORD_MATCH_RELEVANCE);
    assert_eq!(
        service
            .store()
            .interpretations()
            .iter()
            .filter(|i| i.symbol_id == 3)
            .count(),
        1
    );
}

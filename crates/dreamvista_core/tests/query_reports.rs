use std::fs;

use chrono::NaiveDate;
use dreamvista_core::{
    find_symbol, search_by_symbol, statistics, Dream, DreamService, DreamStore, Interpretation,
    SymbolFrequency, ToneCount,
};
use tempfile::TempDir;

fn open_store(dir: &TempDir) -> DreamStore {
    DreamStore::open(dir.path().join("dream_vista_data.json"))
}

fn timestamp(hour: u32) -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 2)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

fn record(store: &mut DreamStore, symbol_name: &str, dream_id: u64) {
    let symbol_id = find_symbol(store, symbol_name).unwrap().id;
    let interpretation = Interpretation {
        id: store.next_interpretation_id(),
        dream_id,
        symbol_id,
        relevance_score: 10,
    };
    store.append_interpretation(interpretation).unwrap();
}

#[test]
fn statistics_on_empty_store_returns_zeroes() {
    let dir = TempDir::new().unwrap();
    let store = open_store(&dir);

    let stats = statistics(&store);

    assert_eq!(stats.total_dreams, 0);
    assert!(stats.common_symbols.is_empty());
    assert!(stats.emotional_tones.is_empty());
}

#[test]
fn statistics_ranks_top_five_with_ties_in_first_seen_order() {
    let dir = TempDir::new().unwrap();
    let mut store = open_store(&dir);
    for id in 1..=3 {
        store.append_dream(Dream::new(id, "placeholder", timestamp(id as u32 + 6)));
    }

    for (symbol, dream_id) in [
        ("flying", 1),
        ("fire", 1),
        ("water", 1),
        ("snake", 2),
        ("water", 2),
        ("fire", 2),
        ("water", 3),
        ("house", 3),
        ("car", 3),
    ] {
        record(&mut store, symbol, dream_id);
    }

    let stats = statistics(&store);

    assert_eq!(stats.total_dreams, 3);
    let expected: Vec<SymbolFrequency> = [
        ("water", 3),
        ("fire", 2),
        ("flying", 1),
        ("snake", 1),
        ("house", 1),
    ]
    .into_iter()
    .map(|(symbol, frequency)| SymbolFrequency {
        symbol: symbol.to_string(),
        frequency,
    })
    .collect();
    assert_eq!(stats.common_symbols, expected);

    let expected_tones: Vec<ToneCount> = [
        ("positive", 1),
        ("intense", 2),
        ("neutral", 5),
        ("mysterious", 1),
    ]
    .into_iter()
    .map(|(emotional_tone, count)| ToneCount {
        emotional_tone: emotional_tone.to_string(),
        count,
    })
    .collect();
    assert_eq!(stats.emotional_tones, expected_tones);
}

#[test]
fn interpretations_with_unresolvable_symbols_are_skipped() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dream_vista_data.json");
    fs::write(
        &path,
        r#"{
  "symbols": [
    {
      "id": 1,
      "symbol": "flying",
      "meaning": "Freedom, ambition, desire to escape limitations, spiritual elevation",
      "emotional_tone": "positive",
      "category": "movement",
      "keywords": "soar, float, levitate, air, wings"
    }
  ],
  "dreams": [
    {
      "id": 1,
      "dream_text": "soaring over rooftops",
      "dream_date": "2024-05-02",
      "mood_before": null,
      "recurring": false,
      "created_at": "2024-05-02 08:00:00"
    }
  ],
  "interpretations": [
    { "id": 1, "dream_id": 1, "symbol_id": 1, "relevance_score": 7 },
    { "id": 2, "dream_id": 1, "symbol_id": 999, "relevance_score": 10 }
  ]
}"#,
    )
    .unwrap();

    let store = DreamStore::open(&path);
    let stats = statistics(&store);

    assert_eq!(stats.total_dreams, 1);
    assert_eq!(
        stats.common_symbols,
        vec![SymbolFrequency {
            symbol: "flying".to_string(),
            frequency: 1,
        }]
    );
    assert_eq!(
        stats.emotional_tones,
        vec![ToneCount {
            emotional_tone: "positive".to_string(),
            count: 1,
        }]
    );
}

#[test]
fn search_unknown_symbol_returns_empty() {
    let dir = TempDir::new().unwrap();
    let store = open_store(&dir);

    assert!(search_by_symbol(&store, "no such symbol").is_empty());
}

#[test]
fn search_is_case_insensitive_and_sorts_most_recent_first() {
    let dir = TempDir::new().unwrap();
    let mut store = open_store(&dir);

    for id in 1..=3 {
        store.append_dream(Dream::new(id, "placeholder", timestamp(8 + id as u32)));
    }
    record(&mut store, "water", 1);
    record(&mut store, "fire", 2);
    record(&mut store, "water", 3);

    let hits = search_by_symbol(&store, "WATER");

    let dream_ids: Vec<u64> = hits.iter().map(|hit| hit.dream.id).collect();
    assert_eq!(dream_ids, vec![3, 1]);
    assert!(hits.iter().all(|hit| hit.symbol == "water"));
    assert_eq!(
        hits[0].meaning,
        "Emotions, unconscious mind, purification, life force"
    );
}

#[test]
fn search_finds_dreams_matched_through_keywords() {
    let dir = TempDir::new().unwrap();
    let mut service = DreamService::open(dir.path().join("dream_vista_data.json"));

    service.analyze_dream("drifting on the ocean at night");

    let hits = service.search_by_symbol("water");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].dream.dream_text, "drifting on the ocean at night");
    assert_eq!(hits[0].symbol, "water");
}

//! Built-in symbol catalog.
//!
//! # Responsibility
//! - Provide the fixed list of well-known symbols seeded into a new store.
//!
//! # Invariants
//! - Entries, ids and keyword lists are reproduced verbatim from the
//!   original data file for compatibility; do not reword or reorder.

use crate::model::symbol::{split_keywords, Symbol, SymbolId};

fn entry(
    id: SymbolId,
    symbol: &str,
    meaning: &str,
    emotional_tone: &str,
    category: &str,
    keywords: &str,
) -> Symbol {
    Symbol {
        id,
        symbol: symbol.to_string(),
        meaning: meaning.to_string(),
        emotional_tone: emotional_tone.to_string(),
        category: category.to_string(),
        keywords: split_keywords(keywords),
    }
}

/// Returns the 20 default symbols seeded when no prior document exists.
pub fn default_symbols() -> Vec<Symbol> {
    vec![
        entry(
            1,
            "flying",
            "Freedom, ambition, desire to escape limitations, spiritual elevation",
            "positive",
            "movement",
            "soar, float, levitate, air, wings",
        ),
        entry(
            2,
            "falling",
            "Loss of control, anxiety, insecurity, fear of failure",
            "negative",
            "movement",
            "drop, plunge, descend, crash",
        ),
        entry(
            3,
            "water",
            "Emotions, unconscious mind, purification, life force",
            "neutral",
            "nature",
            "ocean, sea, river, rain, flood, swimming",
        ),
        entry(
            4,
            "fire",
            "Passion, transformation, anger, destruction, purification",
            "intense",
            "element",
            "flames, burning, heat, smoke, blaze",
        ),
        entry(
            5,
            "death",
            "Transformation, ending, new beginning, fear of change",
            "transformative",
            "life",
            "dying, funeral, corpse, grave",
        ),
        entry(
            6,
            "snake",
            "Transformation, healing, hidden fears, temptation, wisdom",
            "mysterious",
            "animal",
            "serpent, reptile, viper, python",
        ),
        entry(
            7,
            "teeth falling out",
            "Anxiety, powerlessness, aging, communication issues",
            "anxious",
            "body",
            "tooth, dental, losing teeth, mouth",
        ),
        entry(
            8,
            "chase",
            "Avoidance, running from problems, fear, anxiety",
            "stressful",
            "action",
            "pursued, running, escape, hunted",
        ),
        entry(
            9,
            "naked in public",
            "Vulnerability, fear of exposure, authenticity, shame",
            "vulnerable",
            "social",
            "nude, exposed, undressed, bare",
        ),
        entry(
            10,
            "exam or test",
            "Performance anxiety, feeling unprepared, self-judgment",
            "anxious",
            "achievement",
            "test, school, unprepared, studying",
        ),
        entry(
            11,
            "house",
            "Self, psyche, different aspects of personality, security",
            "neutral",
            "structure",
            "home, building, room, mansion",
        ),
        entry(
            12,
            "car",
            "Direction in life, control, ambition, journey",
            "neutral",
            "vehicle",
            "driving, vehicle, automobile, road",
        ),
        entry(
            13,
            "baby",
            "New beginnings, vulnerability, potential, responsibility",
            "positive",
            "life",
            "infant, child, newborn, pregnancy",
        ),
        entry(
            14,
            "cat",
            "Independence, intuition, femininity, mystery",
            "neutral",
            "animal",
            "kitten, feline, kitty",
        ),
        entry(
            15,
            "dog",
            "Loyalty, friendship, protection, instinct",
            "positive",
            "animal",
            "puppy, canine, pet",
        ),
        entry(
            16,
            "spider",
            "Creativity, feminine energy, feeling trapped, patience",
            "mysterious",
            "animal",
            "web, arachnid, insect",
        ),
        entry(
            17,
            "mountain",
            "Challenge, achievement, obstacle, spiritual journey",
            "challenging",
            "nature",
            "climb, peak, hill, summit",
        ),
        entry(
            18,
            "bridge",
            "Transition, connection, decision, moving forward",
            "transitional",
            "structure",
            "crossing, connect, span",
        ),
        entry(
            19,
            "mirror",
            "Self-reflection, truth, identity, vanity",
            "reflective",
            "object",
            "reflection, looking glass",
        ),
        entry(
            20,
            "money",
            "Value, self-worth, power, security, opportunity",
            "neutral",
            "material",
            "cash, wealth, coins, currency",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::default_symbols;

    #[test]
    fn catalog_has_twenty_entries_with_sequential_ids() {
        let symbols = default_symbols();
        assert_eq!(symbols.len(), 20);
        for (index, symbol) in symbols.iter().enumerate() {
            assert_eq!(symbol.id, index as u64 + 1);
        }
    }

    #[test]
    fn catalog_names_are_unique_ignoring_case() {
        let symbols = default_symbols();
        for (i, a) in symbols.iter().enumerate() {
            for b in &symbols[i + 1..] {
                assert!(!a.name_matches(&b.symbol), "duplicate name {}", a.symbol);
            }
        }
    }
}

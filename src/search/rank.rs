//! Tiered relevance ordering for matched entries.

use std::cmp::Ordering;

use crate::models::LexiconEntry;
use crate::search::query::MatchPredicate;

/// Relevance bucket, the most significant sort key. Lower is better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    /// Lemma starts with the query
    LemmaPrefix = 1,
    /// Lemma contains the query but does not start with it
    LemmaSubstring = 2,
    /// Match occurred only in the definition or transliteration
    OtherField = 3,
}

/// Assign the relevance tier for a matched entry. Prefix/substring tests
/// use the same case folding as the match predicate.
pub fn tier(predicate: &MatchPredicate, entry: &LexiconEntry) -> Tier {
    let lemma = entry.lemma.to_lowercase();
    if lemma.starts_with(predicate.needle()) {
        Tier::LemmaPrefix
    } else if lemma.contains(predicate.needle()) {
        Tier::LemmaSubstring
    } else {
        Tier::OtherField
    }
}

/// Total order over matched entries: tier ascending, then frequency
/// descending, then lemma ascending, then id ascending.
///
/// The final id key makes the order deterministic for exact duplicates
/// regardless of how the backing store iterates.
pub fn compare(predicate: &MatchPredicate, a: &LexiconEntry, b: &LexiconEntry) -> Ordering {
    tier(predicate, a)
        .cmp(&tier(predicate, b))
        .then_with(|| b.frequency.cmp(&a.frequency))
        .then_with(|| a.lemma.cmp(&b.lemma))
        .then_with(|| a.id.cmp(&b.id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::query::LanguageFilter;
    use chrono::Utc;
    use uuid::Uuid;

    fn entry(lemma: &str, definition: &str, frequency: u64) -> LexiconEntry {
        LexiconEntry {
            id: Uuid::new_v4(),
            lemma: lemma.to_string(),
            transliteration: None,
            definition: definition.to_string(),
            language: "latin".to_string(),
            part_of_speech: None,
            frequency,
            era: None,
            etymology: None,
            created_at: Utc::now(),
        }
    }

    fn pred(q: &str) -> MatchPredicate {
        MatchPredicate::new(q, LanguageFilter::All)
    }

    #[test]
    fn test_tier_assignment() {
        let p = pred("amor");
        assert_eq!(tier(&p, &entry("amor", "love", 50)), Tier::LemmaPrefix);
        assert_eq!(tier(&p, &entry("amoris", "of love", 10)), Tier::LemmaPrefix);
        assert_eq!(
            tier(&p, &entry("clamor", "shout", 30)),
            Tier::LemmaSubstring
        );
        assert_eq!(
            tier(&p, &entry("cupido", "amor-like desire", 90)),
            Tier::OtherField
        );
    }

    #[test]
    fn test_tier_is_case_insensitive() {
        let p = pred("AMOR");
        assert_eq!(tier(&p, &entry("Amor", "love", 50)), Tier::LemmaPrefix);
    }

    #[test]
    fn test_prefix_tier_beats_any_frequency() {
        // A prefix match at frequency 1 still ranks above a definition-only
        // match at frequency 1000.
        let p = pred("amor");
        let prefix = entry("amoris", "of love", 1);
        let other = entry("cupido", "amor-like desire", 1000);
        assert_eq!(compare(&p, &prefix, &other), Ordering::Less);
    }

    #[test]
    fn test_frequency_descending_within_tier() {
        let p = pred("amor");
        let common = entry("amor", "love", 50);
        let rare = entry("amoris", "of love", 10);
        assert_eq!(compare(&p, &common, &rare), Ordering::Less);
        assert_eq!(compare(&p, &rare, &common), Ordering::Greater);
    }

    #[test]
    fn test_lemma_ascending_breaks_frequency_ties() {
        let p = pred("amor");
        let a = entry("amor", "love", 10);
        let b = entry("amoris", "of love", 10);
        assert_eq!(compare(&p, &a, &b), Ordering::Less);
    }

    #[test]
    fn test_id_breaks_exact_duplicates() {
        let p = pred("amor");
        let mut a = entry("amor", "love", 10);
        let mut b = entry("amor", "love", 10);
        // Force a known id order.
        a.id = Uuid::from_u128(1);
        b.id = Uuid::from_u128(2);
        assert_eq!(compare(&p, &a, &b), Ordering::Less);
        assert_eq!(compare(&p, &b, &a), Ordering::Greater);
        assert_eq!(compare(&p, &a, &a.clone()), Ordering::Equal);
    }

    #[test]
    fn test_scenario_ordering() {
        // amor (prefix, 50) < amoris (prefix, 10) < cupido (other field, 90)
        let p = pred("amor");
        let mut entries = vec![
            entry("cupido", "amor-like desire", 90),
            entry("amoris", "of love", 10),
            entry("amor", "love", 50),
        ];
        entries.sort_by(|a, b| compare(&p, a, b));
        let lemmas: Vec<&str> = entries.iter().map(|e| e.lemma.as_str()).collect();
        assert_eq!(lemmas, vec!["amor", "amoris", "cupido"]);
    }
}

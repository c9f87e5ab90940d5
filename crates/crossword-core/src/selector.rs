use crate::bank::{WordEntry, MAX_ANSWER_LEN, MIN_ANSWER_LEN};
use crate::rng::Mulberry32;
use std::collections::HashSet;

/// Answer length the ordering favours
const PREFERRED_LEN: usize = 7;

/// Narrow a bank down to the day's ordered candidate list.
///
/// Entries are stably sorted by distance from a medium length, shuffled with
/// `rng`, then filtered to 3-13 letter answers with the first occurrence of
/// each answer kept.
pub fn select_candidates(bank: &[WordEntry], rng: &mut Mulberry32) -> Vec<WordEntry> {
    let mut ordered: Vec<&WordEntry> = bank.iter().collect();
    ordered.sort_by_key(|entry| entry.len().abs_diff(PREFERRED_LEN));
    rng.shuffle(&mut ordered);

    let mut seen = HashSet::new();
    ordered
        .into_iter()
        .filter(|entry| (MIN_ANSWER_LEN..=MAX_ANSWER_LEN).contains(&entry.len()))
        .filter(|entry| seen.insert(entry.answer.clone()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WordBank;

    #[test]
    fn test_empty_bank() {
        let mut rng = Mulberry32::new(1);
        assert!(select_candidates(&[], &mut rng).is_empty());
    }

    #[test]
    fn test_filters_length_and_duplicates() {
        let bank = vec![
            WordEntry::new("OX", "Yoked beast"),
            WordEntry::new("OWL", "Night hooter"),
            WordEntry::new("OWL", "Wise bird"),
            WordEntry::new("ABCDEFGHIJKLMN", "Fourteen letters"),
            WordEntry::new("ZEBRA", "Striped horse"),
        ];
        let mut rng = Mulberry32::new(99);
        let selected = select_candidates(&bank, &mut rng);

        let mut answers: Vec<&str> = selected.iter().map(|e| e.answer.as_str()).collect();
        answers.sort();
        assert_eq!(answers, vec!["OWL", "ZEBRA"]);
    }

    #[test]
    fn test_deterministic_per_seed() {
        let bank = WordBank::builtin();
        let a = select_candidates(bank.entries(), &mut Mulberry32::new(7));
        let b = select_candidates(bank.entries(), &mut Mulberry32::new(7));
        let c = select_candidates(bank.entries(), &mut Mulberry32::new(8));
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.len(), bank.len());
    }

    #[test]
    fn test_single_entry_draws_nothing() {
        let bank = vec![WordEntry::new("OWL", "Night hooter")];
        let mut rng = Mulberry32::new(3);
        select_candidates(&bank, &mut rng);
        assert_eq!(rng, Mulberry32::new(3));
    }
}

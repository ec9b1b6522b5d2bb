//! Multiple-choice exercise generation.
//!
//! One correct item is drawn from the category, honoring the repetition
//! memory, and four distractors are sampled from the remaining items. The five
//! option texts are shuffled and numbered 1..=5.

use std::collections::HashSet;
use std::iter;
use std::sync::Arc;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{ExerciseError, Result};
use crate::memory::RepetitionMemory;
use crate::types::{Exercise, ExerciseOption, LexicalItem, DISTRACTOR_COUNT, OPTION_COUNT, OPTION_ORDER};

/// Generates exercises and keeps the repetition memory up to date.
#[derive(Clone)]
pub struct ExerciseGenerator {
    memory: Arc<dyn RepetitionMemory>,
}

impl ExerciseGenerator {
    pub fn new(memory: Arc<dyn RepetitionMemory>) -> Self {
        Self { memory }
    }

    /// The memory this generator reads and writes.
    pub fn memory(&self) -> &Arc<dyn RepetitionMemory> {
        &self.memory
    }

    /// Generate an exercise for `category_id` from the category's full item set.
    ///
    /// The item remembered for the category is not chosen again while another
    /// item is available. Only this generator's memory decides what counts as
    /// the previous item.
    ///
    /// # Errors
    /// - `InsufficientItems` if `items` is empty
    /// - `InsufficientDistractors` if fewer than five distinct items exist
    pub fn generate<R: Rng + ?Sized>(
        &self,
        category_id: i64,
        items: &[LexicalItem],
        rng: &mut R,
    ) -> Result<Exercise> {
        if items.is_empty() {
            return Err(ExerciseError::InsufficientItems { category_id });
        }
        let distinct = items
            .iter()
            .map(|item| item.lexical_item_id)
            .collect::<HashSet<i64>>()
            .len();
        if distinct < OPTION_COUNT {
            return Err(ExerciseError::InsufficientDistractors {
                category_id,
                available: distinct,
            });
        }

        let mut correct_index = 0;
        self.memory.select_next(category_id, &mut |last| {
            let candidates = candidate_indices(items, last);
            correct_index = candidates[rng.gen_range(0..candidates.len())];
            items[correct_index].lexical_item_id
        });
        let correct = &items[correct_index];

        // One entry per id, so distractors stay distinct even with duplicate rows.
        let mut seen = HashSet::from([correct.lexical_item_id]);
        let pool: Vec<&LexicalItem> = items
            .iter()
            .filter(|item| seen.insert(item.lexical_item_id))
            .collect();
        let distractors: Vec<&LexicalItem> = pool
            .choose_multiple(rng, DISTRACTOR_COUNT)
            .copied()
            .collect();

        if distractors.iter().any(|d| d.text == correct.text) {
            tracing::warn!(
                category_id,
                text = %correct.text,
                "Category contains duplicate item text"
            );
        }

        let mut entries: Vec<(&str, bool)> = iter::once((correct.text.as_str(), true))
            .chain(distractors.iter().map(|d| (d.text.as_str(), false)))
            .collect();
        entries.shuffle(rng);

        let options = OPTION_ORDER
            .iter()
            .zip(entries)
            .map(|(&option_id, (text, is_correct))| ExerciseOption {
                option_id,
                text: text.to_string(),
                is_correct,
            })
            .collect();

        tracing::debug!(
            category_id,
            lexical_item_id = correct.lexical_item_id,
            "Generated exercise"
        );

        Ok(Exercise {
            category_id,
            lexical_item_id: correct.lexical_item_id,
            option_order: OPTION_ORDER.to_vec(),
            options,
        })
    }
}

/// Indices of items eligible as the correct answer.
///
/// Excludes `last` only when more than one item exists, and falls back to every
/// item if the exclusion would leave nothing.
fn candidate_indices(items: &[LexicalItem], last: Option<i64>) -> Vec<usize> {
    let all: Vec<usize> = (0..items.len()).collect();
    let Some(last) = last else {
        return all;
    };
    if items.len() <= 1 {
        return all;
    }

    let filtered: Vec<usize> = all
        .iter()
        .copied()
        .filter(|&i| items[i].lexical_item_id != last)
        .collect();
    if filtered.is_empty() {
        all
    } else {
        filtered
    }
}

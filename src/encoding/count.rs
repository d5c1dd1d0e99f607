//! Count vectors over a fixed vocabulary.
//!
//! Both free-text fields (after trigram extraction) and label fields are
//! turned into vectors the same way: one slot per vocabulary entry, holding
//! how often that entry occurs. Label vectors are called "one-hot" but still
//! accumulate repeats.

use crate::encoding::trigram::TrigramExtractor;
use crate::encoding::vocabulary::IndexMapping;
use crate::error::AppError;

/// Counts tokens into a vector of `mapping.len()` slots.
///
/// Every token must be in the mapping; the first unknown token aborts the
/// whole vector.
pub fn count_vector<I, S>(tokens: I, mapping: &IndexMapping) -> Result<Vec<u32>, AppError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut vector = vec![0u32; mapping.len()];
    for token in tokens {
        let index = mapping.index_of(token.as_ref())?;
        vector[index] += 1;
    }
    Ok(vector)
}

/// Word-hashed vector of free text: trigram counts.
pub fn hashed_vector<S: AsRef<str>>(
    texts: &[S],
    extractor: &TrigramExtractor,
    mapping: &IndexMapping,
) -> Result<Vec<u32>, AppError> {
    count_vector(extractor.extract(texts), mapping)
}

/// Summed one-hot vector of discrete labels.
pub fn onehot_vector<S: AsRef<str>>(
    labels: &[S],
    mapping: &IndexMapping,
) -> Result<Vec<u32>, AppError> {
    count_vector(labels, mapping)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::vocabulary::VocabularyKind;

    fn relations() -> IndexMapping {
        IndexMapping::new(VocabularyKind::Relation, ["ba", "baa", "bab"]).unwrap()
    }

    #[test]
    fn test_onehot_counts_each_label() {
        let vector = onehot_vector(&["bab", "ba"], &relations()).unwrap();
        assert_eq!(vector, vec![1, 0, 1]);
    }

    #[test]
    fn test_onehot_accumulates_repeats() {
        let vector = onehot_vector(&["baa", "baa", "baa"], &relations()).unwrap();
        assert_eq!(vector, vec![0, 3, 0]);
    }

    #[test]
    fn test_empty_input_is_all_zero() {
        let empty: [&str; 0] = [];
        let vector = onehot_vector(&empty, &relations()).unwrap();
        assert_eq!(vector, vec![0, 0, 0]);
    }

    #[test]
    fn test_unknown_label_is_error() {
        let err = onehot_vector(&["ba", "xyz"], &relations()).unwrap_err();
        assert!(matches!(
            err,
            AppError::UnknownToken { vocabulary: VocabularyKind::Relation, ref token } if token == "xyz"
        ));
    }

    #[test]
    fn test_hashed_vector_sum_matches_trigram_count() {
        let mapping =
            IndexMapping::new(VocabularyKind::Trigram, ["_a_", "_ab", "ab_", "aba", "ba_"])
                .unwrap();
        let extractor = TrigramExtractor::default();

        let vector = hashed_vector(&["ab aba a"], &extractor, &mapping).unwrap();

        assert_eq!(vector, vec![1, 2, 1, 1, 1]);
        assert_eq!(
            vector.iter().sum::<u32>() as usize,
            extractor.extract(&["ab aba a"]).len()
        );
    }

    #[test]
    fn test_hashed_vector_unknown_trigram() {
        let mapping = IndexMapping::new(VocabularyKind::Trigram, ["_a_"]).unwrap();
        let err = hashed_vector(&["b"], &TrigramExtractor::default(), &mapping).unwrap_err();
        assert!(matches!(
            err,
            AppError::UnknownToken { vocabulary: VocabularyKind::Trigram, ref token } if token == "_b_"
        ));
    }
}

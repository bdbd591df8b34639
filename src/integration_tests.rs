//! End-to-end tests for the translation pipeline
//!
//! These tests drive a [`Translator`] backed by the real `WordMap` engine
//! through corpus ingestion, alignment memory and translation.
//!
//! The slow test over a generated corpus is ignored by default:
//!
//! ```bash
//! cargo test --lib integration_tests -- --ignored --nocapture
//! ```

#[cfg(test)]
mod tests {
    use crate::*;
    use std::collections::HashSet;
    use std::time::Instant;

    const MATTHEW_1_1: &str = "Βίβλος γενέσεως Ἰησοῦ Χριστοῦ υἱοῦ Δαυὶδ υἱοῦ Ἀβραάμ.";
    const MATTHEW_1_1_EN: &str =
        "The book of the genealogy of Jesus Christ, the son of David, the son of Abraham.";

    fn memory_translator() -> Translator {
        let mut translator = Translator::new();
        translator
            .append_alignment_memory_from_text("Βίβλος", "book")
            .unwrap();
        translator
            .append_alignment_memory_from_text("γενέσεως", "genealogy")
            .unwrap();
        translator
    }

    /// Position-qualified keys of every n-gram of a sentence
    fn sentence_keys(translator: &Translator, sentence: &str) -> HashSet<String> {
        let engine = translator.engine();
        let tokens = AlignmentEngine::tokenize(engine, sentence);
        AlignmentEngine::ngrams(engine, &tokens)
            .iter()
            .map(position_key)
            .collect()
    }

    // ========== Empty translator ==========

    #[test]
    fn test_e2e_no_corpus_no_memory() {
        let mut translator = Translator::new();
        let suggestions = translator.translate(MATTHEW_1_1, 1).unwrap();
        assert!(suggestions.is_empty());

        let table = translator.translate_verbose(MATTHEW_1_1, 1).unwrap();
        assert!(table.is_empty());
        assert_eq!(translator.state(), TranslatorState::Empty);
    }

    // ========== Alignment memory only ==========

    #[test]
    fn test_e2e_memory_only() {
        let mut translator = memory_translator();
        let suggestions = translator.translate(MATTHEW_1_1, 1).unwrap();

        assert_eq!(suggestions.len(), 1);
        assert_eq!(
            suggestions[0].to_string(),
            "1 [1|n:βίβλος->n:book] [1|n:γενέσεως->n:genealogy]"
        );
    }

    #[test]
    fn test_e2e_memory_only_verbose() {
        let mut translator = memory_translator();
        let table = translator.translate_verbose(MATTHEW_1_1, 1).unwrap();

        let keys: Vec<&str> = table.keys().collect();
        assert_eq!(keys, vec!["n:βίβλος@0", "n:γενέσεως@1"]);
        assert_eq!(translator.state(), TranslatorState::Ready);
    }

    #[test]
    fn test_e2e_memory_is_case_insensitive() {
        let mut translator = memory_translator();
        let suggestions = translator.translate("βίβλος", 1).unwrap();
        assert_eq!(suggestions[0].to_string(), "1 [1|n:βίβλος->n:book]");
    }

    // ========== Corpus ==========

    #[test]
    fn test_e2e_corpus_self_alignment() {
        let mut translator = Translator::new();
        translator.append_corpus(&[CorpusPair::new(MATTHEW_1_1, MATTHEW_1_1_EN)]);

        let table = translator.translate_verbose(MATTHEW_1_1, 1).unwrap();
        assert!(!table.is_empty());

        let expected = sentence_keys(&translator, MATTHEW_1_1);
        for key in table.keys() {
            assert!(expected.contains(key), "unexpected table key {}", key);
        }

        let suggestions = translator.translate(MATTHEW_1_1, 1).unwrap();
        assert_eq!(suggestions.len(), 1);
    }

    #[test]
    fn test_e2e_repeated_word_gets_two_entries() {
        let mut translator = Translator::new();
        translator.append_corpus(&[CorpusPair::new(MATTHEW_1_1, MATTHEW_1_1_EN)]);
        translator
            .append_alignment_memory_from_text("υἱοῦ", "son")
            .unwrap();

        let table = translator.translate_verbose(MATTHEW_1_1, 1).unwrap();
        let first = table.get("n:υἱοῦ@4").unwrap();
        let second = table.get("n:υἱοῦ@6").unwrap();
        assert_eq!(first, second);
        assert_eq!(first[0].target().key(), "n:son");
    }

    #[test]
    fn test_e2e_memory_and_corpus() {
        let mut translator = memory_translator();
        translator.append_corpus(&[CorpusPair::new(MATTHEW_1_1, MATTHEW_1_1_EN)]);

        let table = translator.translate_verbose(MATTHEW_1_1, 2).unwrap();
        let book = table.get("n:βίβλος@0").unwrap();
        assert_eq!(book[0].confidence(), 1.0);
        assert_eq!(book[0].target().key(), "n:book");

        let suggestions = translator.translate(MATTHEW_1_1, 2).unwrap();
        assert!(!suggestions.is_empty());
        assert!(suggestions.len() <= 2);
    }

    #[test]
    fn test_e2e_corpus_statistics() {
        let mut translator = Translator::new();
        translator.append_corpus(&[
            CorpusPair::new(MATTHEW_1_1, MATTHEW_1_1_EN),
            CorpusPair::new("Ἀβραὰμ ἐγέννησεν τὸν Ἰσαάκ", "Abraham was the father of Isaac"),
        ]);

        let statistics = translator.corpus_statistics();
        assert_eq!(statistics.token_length(), 8 + 4);
        assert_eq!(statistics.ngram_frequency().read_key("n:υἱοῦ"), 2);
    }

    #[test]
    fn test_e2e_consecutive_translations_are_equal() {
        let mut translator = memory_translator();
        translator.append_corpus(&[CorpusPair::new(MATTHEW_1_1, MATTHEW_1_1_EN)]);

        let first = translator.translate(MATTHEW_1_1, 3).unwrap();
        let second = translator.translate(MATTHEW_1_1, 3).unwrap();
        assert_eq!(first, second);
    }

    // ========== Larger corpus ==========

    #[test]
    #[ignore]
    fn test_e2e_generated_corpus() {
        let mut corpus = Vec::new();
        for i in 0..500 {
            corpus.push(CorpusPair::new(
                format!("λόγος {} ἀρχή", i),
                format!("word {} beginning", i),
            ));
        }

        let mut translator = Translator::new();
        translator.append_corpus(&corpus);

        let start = Instant::now();
        let suggestions = translator.translate("ἀρχή λόγος", 1).unwrap();
        println!("Rebuild and translate took {:?}", start.elapsed());

        assert_eq!(suggestions.len(), 1);
        assert!(!translator.prediction_index().is_empty());
    }
}

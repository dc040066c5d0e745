//! Property tests for the analysis pipeline

use lengthmark_core::{
    classify, count_words, Analyzer, Category, Config, ExclusionIndex, ExclusionRange, Thresholds,
};
use proptest::prelude::*;

/// Characters that exercise every branch of the scanner and word counter
const ALPHABET: &[char] = &[
    'a', 'b', 'Z', '9', 'é', 'ł', ' ', ' ', ' ', '\n', '\t', '.', '!', '?', ':', '。', '…',
    '·', '"', '”', '\'', '’', '」', '>', ',', '-', '日', 'か', 'ア', '한',
];

fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(ALPHABET), 0..160)
        .prop_map(|chars| chars.into_iter().collect())
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        any::<bool>(),
        any::<bool>(),
        prop::sample::select(vec!["", ";", ",", "-"]),
        (-5i64..30, -5i64..30, -5i64..30, -5i64..30),
    )
        .prop_map(|(enabled, line_breaks, extra, (xs, sm, md, lg))| Config {
            enabled,
            treat_line_break_as_sentence_end: line_breaks,
            extra_sentence_enders: extra.to_string(),
            thresholds: Thresholds::new(xs, sm, md, lg),
            ..Config::default()
        })
}

fn exclusions_strategy() -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec((0usize..400, 0usize..40), 0..6)
}

fn index_from(pairs: &[(usize, usize)]) -> ExclusionIndex {
    pairs
        .iter()
        .map(|&(min, len)| ExclusionRange::new(min, min + len))
        .collect()
}

proptest! {
    #[test]
    fn empty_text_yields_nothing(config in config_strategy()) {
        let sentences = Analyzer::new(config).analyze("", &ExclusionIndex::new());
        prop_assert!(sentences.is_empty());
    }

    #[test]
    fn spans_are_sorted_and_disjoint(text in text_strategy(), config in config_strategy()) {
        let sentences = Analyzer::new(config).analyze(&text, &ExclusionIndex::new());

        for sentence in &sentences {
            prop_assert!(sentence.start() < sentence.end());
            prop_assert!(sentence.end() <= text.len());
            prop_assert!(text.is_char_boundary(sentence.start()));
            prop_assert!(text.is_char_boundary(sentence.end()));
        }
        for pair in sentences.windows(2) {
            prop_assert!(pair[0].end() <= pair[1].start());
        }
    }

    #[test]
    fn no_span_touches_an_exclusion(
        text in text_strategy(),
        config in config_strategy(),
        pairs in exclusions_strategy(),
    ) {
        let index = index_from(&pairs);
        let sentences = Analyzer::new(config).analyze(&text, &index);

        for sentence in &sentences {
            prop_assert!(!index.overlaps(sentence.start(), sentence.end()));
        }
    }

    #[test]
    fn exclusions_only_remove_sentences(
        text in text_strategy(),
        pairs in exclusions_strategy(),
    ) {
        let analyzer = Analyzer::default();
        let all = analyzer.analyze(&text, &ExclusionIndex::new());
        let kept = analyzer.analyze(&text, &index_from(&pairs));

        prop_assert!(kept.iter().all(|s| all.contains(s)));
    }

    #[test]
    fn analysis_is_idempotent(
        text in text_strategy(),
        config in config_strategy(),
        pairs in exclusions_strategy(),
    ) {
        let index = index_from(&pairs);
        let analyzer = Analyzer::new(config);
        prop_assert_eq!(analyzer.analyze(&text, &index), analyzer.analyze(&text, &index));
    }

    #[test]
    fn latin_tokens_count_once_each(tokens in prop::collection::vec("[A-Za-z0-9]{1,12}", 0..30)) {
        let sentence = tokens.join(" ");
        prop_assert_eq!(count_words(&sentence), tokens.len());
    }

    #[test]
    fn cjk_ideographs_count_individually(ideographs in prop::collection::vec(0x4E00u32..=0x9FFF, 0..50)) {
        let sentence: String = ideographs
            .iter()
            .filter_map(|&cp| char::from_u32(cp))
            .collect();
        prop_assert_eq!(count_words(&sentence), ideographs.len());
    }

    #[test]
    fn threshold_boundaries_are_inclusive(base in 0i64..1000) {
        let thresholds = Thresholds::new(base, base + 10, base + 20, base + 30);
        let at = |offset: i64| classify((base + offset) as usize, &thresholds);

        prop_assert_eq!(at(0), Category::Xs);
        prop_assert_eq!(at(1), Category::Sm);
        prop_assert_eq!(at(10), Category::Sm);
        prop_assert_eq!(at(11), Category::Md);
        prop_assert_eq!(at(20), Category::Md);
        prop_assert_eq!(at(21), Category::Lg);
        prop_assert_eq!(at(30), Category::Lg);
        prop_assert_eq!(at(31), Category::Xl);
    }

    #[test]
    fn disabled_config_yields_nothing(text in text_strategy()) {
        let config = Config { enabled: false, ..Config::default() };
        prop_assert!(Analyzer::new(config).analyze(&text, &ExclusionIndex::new()).is_empty());
    }
}

use rpawocheck::prohibited::ProhibitedSet;
use rpawocheck::scoring::*;

#[test]
fn test_empty_password_scores_zero_everywhere() {
    assert_eq!(length_score(""), 0.0);
    assert_eq!(variety_score(""), 0.0);
    assert_eq!(entropy_bits(""), 0.0);
    assert_eq!(entropy_score(""), 0.0);
    assert_eq!(repetition_and_pattern_score(""), 0.0);
}

#[test]
fn test_empty_password_is_neutral_not_graded() {
    let set = ProhibitedSet::new();
    assert_eq!(assess_password("", &set), StrengthReport::Empty);
}

#[test]
fn test_length_score_bands() {
    assert_eq!(length_score("x"), 2.0);
    assert_eq!(length_score(&"x".repeat(4)), 2.0);
    assert_eq!(length_score(&"x".repeat(5)), 4.0);
    assert_eq!(length_score(&"x".repeat(7)), 4.0);
    assert_eq!(length_score(&"x".repeat(10)), 6.0);
    assert_eq!(length_score(&"x".repeat(14)), 8.0);
    assert_eq!(length_score(&"x".repeat(15)), 10.0);
}

#[test]
fn test_length_score_flat_past_the_cap() {
    assert_eq!(length_score(&"x".repeat(16)), length_score(&"x".repeat(20)));
    assert_eq!(length_score(&"x".repeat(100)), 10.0);
}

#[test]
fn test_variety_score_steps() {
    assert_eq!(variety_score("zzzz"), 2.0);
    assert_eq!(variety_score("zzZZ"), 5.0);
    assert_eq!(variety_score("zzZ9"), 8.0);
    assert_eq!(variety_score("zzZ9!"), 10.0);
}

#[test]
fn test_variety_monotonic_in_class_count() {
    assert!(variety_score("aB3!xKw9") >= variety_score("aaaaaaaa"));
}

#[test]
fn test_single_class_penalty_is_opt_in() {
    let penalizing = ScoringOptions {
        single_class_penalty: true,
    };
    assert_eq!(variety_score_with("zzzz", &penalizing), 1.0);
    // Long enough single-class passwords are not penalized
    assert_eq!(variety_score_with("zzzzzzzz", &penalizing), 2.0);
    // Off by default
    assert_eq!(variety_score_with("zzzz", &ScoringOptions::default()), 2.0);
}

#[test]
fn test_entropy_uses_flat_class_bonuses() {
    let expected = 4.0 * 26f64.log2();
    assert!((entropy_bits("wxyz") - expected).abs() < 1e-9);

    let expected = 3.0 * 36f64.log2();
    assert!((entropy_bits("a9b") - expected).abs() < 1e-9);

    let expected = 4.0 * 95f64.log2();
    assert!((entropy_bits("aA9!") - expected).abs() < 1e-9);
}

#[test]
fn test_entropy_monotonic_in_length() {
    assert!(entropy_bits(&"q".repeat(10)) > entropy_bits(&"q".repeat(6)));
    assert!(entropy_score(&"q".repeat(12)) >= entropy_score(&"q".repeat(8)));
}

#[test]
fn test_entropy_score_capped() {
    assert_eq!(entropy_score(&"aB9!xKwm".repeat(10)), 10.0);
}

#[test]
fn test_repetition_bands() {
    assert_eq!(repetition_and_pattern_score("aaaaaa"), 2.0);
    assert_eq!(repetition_and_pattern_score("aabbc"), 4.0);
    assert_eq!(repetition_and_pattern_score("aabwde"), 6.0);
    assert_eq!(repetition_and_pattern_score("aabwdefh"), 8.0);
    assert_eq!(repetition_and_pattern_score("abwdefhk"), 10.0);
}

#[test]
fn test_repetition_is_case_insensitive() {
    // 'A' and 'a' count as the same character
    assert_eq!(repetition_and_pattern_score("aAaAaA"), 2.0);
}

#[test]
fn test_banned_substring_never_gets_top_pattern_score() {
    for pw in ["Password!xyz", "say123now", "zqwertyz", "Xiloveyou7", "admin"] {
        assert!(
            repetition_and_pattern_score(pw) <= 3.0,
            "expected a pattern penalty for {:?}",
            pw
        );
    }
}

#[test]
fn test_category_scores_stay_in_bounds() {
    let samples = [
        "",
        "a",
        "aaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
        "password",
        "Tr0ub&dourKx!",
        "!!!###$$$",
        "密码密码",
        "🔒🔑🔒🔑",
        "p@ssW0rd with spaces and length",
    ];
    for pw in samples {
        for score in [
            length_score(pw),
            variety_score(pw),
            entropy_score(pw),
            repetition_and_pattern_score(pw),
        ] {
            assert!(
                (0.0..=MAX_SCORE).contains(&score),
                "score {} out of bounds for {:?}",
                score,
                pw
            );
        }
    }
}

#[test]
fn test_scoring_is_deterministic() {
    let set = ProhibitedSet::default_list();
    for pw in ["", "abw", "Tr0ub&dourKx!", "password"] {
        assert_eq!(length_score(pw), length_score(pw));
        assert_eq!(variety_score(pw), variety_score(pw));
        assert_eq!(entropy_bits(pw), entropy_bits(pw));
        assert_eq!(
            repetition_and_pattern_score(pw),
            repetition_and_pattern_score(pw)
        );
        assert_eq!(assess_password(pw, &set), assess_password(pw, &set));
    }
}

#[test]
fn test_weights_sum_to_one() {
    let sum = WEIGHT_LENGTH + WEIGHT_VARIETY + WEIGHT_ENTROPY + WEIGHT_PATTERN + WEIGHT_COMMON;
    assert!((sum - 1.0).abs() < 1e-12);
}

#[test]
fn test_label_band_boundaries_are_inclusive_low() {
    assert_eq!(label_for(0.0), StrengthLabel::VeryWeak);
    assert_eq!(label_for(1.99), StrengthLabel::VeryWeak);
    assert_eq!(label_for(2.0), StrengthLabel::Weak);
    assert_eq!(label_for(4.0), StrengthLabel::Moderate);
    assert_eq!(label_for(6.0), StrengthLabel::Strong);
    assert_eq!(label_for(8.0), StrengthLabel::VeryStrong);
    assert_eq!(label_for(10.0), StrengthLabel::VeryStrong);
}

#[test]
fn test_labels_are_ordered() {
    assert!(StrengthLabel::VeryWeak < StrengthLabel::Weak);
    assert!(StrengthLabel::Weak < StrengthLabel::Moderate);
    assert!(StrengthLabel::Moderate < StrengthLabel::Strong);
    assert!(StrengthLabel::Strong < StrengthLabel::VeryStrong);
}

#[test]
fn test_label_parsing() {
    assert_eq!("very-strong".parse::<StrengthLabel>(), Ok(StrengthLabel::VeryStrong));
    assert_eq!("Very Weak".parse::<StrengthLabel>(), Ok(StrengthLabel::VeryWeak));
    assert_eq!("moderate".parse::<StrengthLabel>(), Ok(StrengthLabel::Moderate));
    assert!("bogus".parse::<StrengthLabel>().is_err());
}

#[test]
fn test_prohibited_overrides_graded_score() {
    // Even a password that would grade highly is rejected outright
    let mut set = ProhibitedSet::new();
    set.insert("Password123!");
    assert_eq!(assess_password("Password123!", &set), StrengthReport::Prohibited);

    let defaults = ProhibitedSet::default_list();
    assert_eq!(assess_password("password1", &defaults), StrengthReport::Prohibited);
}

#[test]
fn test_strong_password_grades_very_strong() {
    let set = ProhibitedSet::default_list();
    match assess_password("Tr0ub&dourKx!", &set) {
        StrengthReport::Scored { score, label, breakdown } => {
            assert!(score >= 8.0, "expected a high composite, got {}", score);
            assert_eq!(label, StrengthLabel::VeryStrong);
            assert_eq!(breakdown.variety, 10.0);
            assert_eq!(breakdown.common, 10.0);
        }
        other => panic!("expected a graded result, got {:?}", other),
    }
}

#[test]
fn test_composite_stays_in_bounds() {
    let set = ProhibitedSet::default_list();
    for pw in ["a", "zz", "!!!!!!", "aB3!xKw9mQ2#pL5&", "aaaa1111"] {
        if let StrengthReport::Scored { score, .. } = assess_password(pw, &set) {
            assert!((0.0..=MAX_SCORE).contains(&score), "composite {} out of bounds", score);
        }
    }
}

#[test]
fn test_unicode_input_does_not_crash() {
    let set = ProhibitedSet::new();
    for pw in ["päss wörd", "密码密码", "🔒🔑🔒🔑", "e\u{301}e\u{301}"] {
        let _ = assess_password(pw, &set);
    }
}

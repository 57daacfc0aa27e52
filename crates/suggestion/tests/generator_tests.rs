use mealmix_shared::{Ingredient, MealLogEntry, MealType, NewMealLog, PairingRule};
use mealmix_suggestion::{
    Combination, CombinationGenerator, Freshness, GenerateInput, GeneratorConfig, SelectionMode,
    SuggestionError,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use time::Date;
use time::macros::date;

const TODAY: Date = date!(2025-10-19);

fn create_test_ingredient(id: &str, meal_types: &[MealType]) -> Ingredient {
    Ingredient::new(id, id.to_uppercase(), "test", meal_types.iter().copied())
}

fn breakfast_pool(ids: &[&str]) -> Vec<Ingredient> {
    ids.iter()
        .map(|id| create_test_ingredient(id, &[MealType::Breakfast]))
        .collect()
}

fn logged(ids: &[&str], date: Date) -> MealLogEntry {
    NewMealLog::new(MealType::Breakfast, date, ids.iter().copied()).into_entry("entry", 0)
}

fn input<'a>(
    ingredients: &'a [Ingredient],
    rules: &'a [PairingRule],
    history: &'a [MealLogEntry],
) -> GenerateInput<'a> {
    GenerateInput {
        meal_type: MealType::Breakfast,
        ingredients,
        pairing_rules: rules,
        history,
        today: TODAY,
    }
}

fn pair_config(candidate_count: usize) -> GeneratorConfig {
    GeneratorConfig::default()
        .with_sizes(2, 2)
        .with_candidate_count(candidate_count)
}

#[test]
fn test_milk_orange_scenario() {
    let ingredients = breakfast_pool(&["milk", "cereals", "orange", "banana"]);
    let rules = vec![PairingRule::negative("milk", "orange").unwrap()];
    let generator = CombinationGenerator::new(pair_config(10)).unwrap();
    let forbidden = Combination::new(["milk", "orange"]);

    for seed in 0..200 {
        let mut rng = StdRng::seed_from_u64(seed);
        let suggestions = generator
            .generate(&input(&ingredients, &rules, &[]), &mut rng)
            .unwrap();

        // C(4, 2) - 1 valid pairs
        assert_eq!(suggestions.candidates.len(), 5);
        assert!(suggestions.exhausted);
        assert!(suggestions.is_partial());
        assert_eq!(suggestions.mode, SelectionMode::Enumerated);
        assert!(
            suggestions
                .candidates
                .iter()
                .all(|c| c.combination != forbidden),
            "seed {seed} suggested milk+orange"
        );
    }
}

#[test]
fn test_no_negative_pair_across_many_generations() {
    let ids: Vec<String> = (0..30).map(|i| format!("ingredient-{i:02}")).collect();
    let id_refs: Vec<&str> = ids.iter().map(String::as_str).collect();
    let ingredients = breakfast_pool(&id_refs);

    let mut rules = Vec::new();
    for i in (0..30).step_by(3) {
        rules.push(PairingRule::negative(ids[i].as_str(), ids[(i + 1) % 30].as_str()).unwrap());
        rules.push(PairingRule::negative(ids[i].as_str(), ids[(i + 7) % 30].as_str()).unwrap());
    }

    let generator = CombinationGenerator::new(GeneratorConfig::default()).unwrap();
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..300 {
        let suggestions = generator
            .generate(&input(&ingredients, &rules, &[]), &mut rng)
            .unwrap();

        assert_eq!(suggestions.mode, SelectionMode::Sampled);
        for candidate in &suggestions.candidates {
            for rule in &rules {
                assert!(
                    !(candidate.combination.contains(&rule.ingredient_a_id)
                        && candidate.combination.contains(&rule.ingredient_b_id)),
                    "{} contains forbidden pair {}+{}",
                    candidate.combination,
                    rule.ingredient_a_id,
                    rule.ingredient_b_id
                );
            }
        }
    }
}

#[test]
fn test_sizes_within_bounds_and_distinct() {
    let ingredients = breakfast_pool(&["a", "b", "c", "d", "e", "f", "g", "h"]);
    let config = GeneratorConfig::default()
        .with_sizes(2, 4)
        .with_candidate_count(6);
    let generator = CombinationGenerator::new(config).unwrap();
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..100 {
        let suggestions = generator
            .generate(&input(&ingredients, &[], &[]), &mut rng)
            .unwrap();

        assert_eq!(suggestions.candidates.len(), 6);
        assert!(!suggestions.exhausted);

        let mut seen = std::collections::HashSet::new();
        for candidate in &suggestions.candidates {
            assert!((2..=4).contains(&candidate.combination.len()));
            assert!(seen.insert(candidate.combination.clone()), "duplicate candidate");
        }
    }
}

#[test]
fn test_sorted_by_descending_score() {
    let ingredients = breakfast_pool(&["milk", "cereals", "orange", "banana", "honey"]);
    let rules = vec![
        PairingRule::positive("milk", "cereals").unwrap(),
        PairingRule::positive("banana", "honey").unwrap(),
    ];
    let generator = CombinationGenerator::new(pair_config(10)).unwrap();
    let mut rng = StdRng::seed_from_u64(1);

    let suggestions = generator
        .generate(&input(&ingredients, &rules, &[]), &mut rng)
        .unwrap();

    assert!(
        suggestions
            .candidates
            .windows(2)
            .all(|w| w[0].score >= w[1].score)
    );

    // Both preferred pairs outrank everything else
    let top: Vec<String> = suggestions.candidates[..2]
        .iter()
        .map(|c| c.combination.to_string())
        .collect();
    assert_eq!(top, vec!["banana+honey", "cereals+milk"]);
    assert!(suggestions.candidates[..2].iter().all(|c| c.positive_pairs == 1));
}

#[test]
fn test_recently_used_ingredients_rank_lower() {
    let ingredients = breakfast_pool(&["milk", "cereals", "orange", "banana"]);
    let history = vec![logged(&["milk", "cereals"], TODAY)];
    let generator = CombinationGenerator::new(pair_config(6)).unwrap();
    let mut rng = StdRng::seed_from_u64(3);

    let suggestions = generator
        .generate(&input(&ingredients, &[], &history), &mut rng)
        .unwrap();

    let first = &suggestions.candidates[0];
    let last = suggestions.candidates.last().unwrap();

    assert_eq!(first.combination, Combination::new(["banana", "orange"]));
    assert_eq!(last.combination, Combination::new(["cereals", "milk"]));
    assert_eq!(last.freshness, Freshness::SeenToday);
}

#[test]
fn test_empty_history_all_new() {
    let ingredients = breakfast_pool(&["a", "b", "c", "d", "e"]);
    let generator = CombinationGenerator::new(GeneratorConfig::default()).unwrap();
    let mut rng = StdRng::seed_from_u64(11);

    let suggestions = generator
        .generate(&input(&ingredients, &[], &[]), &mut rng)
        .unwrap();

    assert!(!suggestions.is_empty());
    assert!(suggestions.candidates.iter().all(|c| c.freshness == Freshness::New));
}

#[test]
fn test_freshness_relative_to_history() {
    let ingredients = breakfast_pool(&["milk", "cereals"]);
    let generator = CombinationGenerator::new(pair_config(1)).unwrap();
    let mut rng = StdRng::seed_from_u64(5);

    let cases = [
        (TODAY, Freshness::SeenToday),
        (date!(2025-10-09), Freshness::SeenRecently),
        (date!(2025-09-09), Freshness::New),
    ];

    for (logged_on, expected) in cases {
        let history = vec![logged(&["cereals", "milk"], logged_on)];
        let suggestions = generator
            .generate(&input(&ingredients, &[], &history), &mut rng)
            .unwrap();

        assert_eq!(suggestions.candidates.len(), 1);
        assert_eq!(
            suggestions.candidates[0].freshness, expected,
            "logged on {logged_on}"
        );
    }
}

#[test]
fn test_insufficient_ingredients() {
    let ingredients = breakfast_pool(&["milk"]);
    let generator = CombinationGenerator::new(GeneratorConfig::default()).unwrap();
    let mut rng = StdRng::seed_from_u64(0);

    let result = generator.generate(&input(&ingredients, &[], &[]), &mut rng);

    assert_eq!(
        result.unwrap_err(),
        SuggestionError::InsufficientIngredients {
            meal_type: MealType::Breakfast,
            minimum: 2,
            current: 1,
        }
    );
}

#[test]
fn test_empty_ingredient_list_fails_fast() {
    let generator = CombinationGenerator::new(GeneratorConfig::default()).unwrap();
    let mut rng = StdRng::seed_from_u64(0);

    let result = generator.generate(&input(&[], &[], &[]), &mut rng);

    assert!(matches!(
        result,
        Err(SuggestionError::InsufficientIngredients { current: 0, .. })
    ));
}

#[test]
fn test_pool_restricted_to_meal_type_and_active() {
    let mut ingredients = vec![
        create_test_ingredient("milk", &[MealType::Breakfast]),
        create_test_ingredient("chips", &[MealType::Snack]),
        create_test_ingredient("apple", &[MealType::Snack]),
        create_test_ingredient("nuts", &[MealType::Snack, MealType::Breakfast]),
    ];
    ingredients[3].is_active = false;

    let generator = CombinationGenerator::new(GeneratorConfig::default()).unwrap();
    let mut rng = StdRng::seed_from_u64(0);

    let result = generator.generate(&input(&ingredients, &[], &[]), &mut rng);
    assert!(matches!(
        result,
        Err(SuggestionError::InsufficientIngredients { current: 1, .. })
    ));

    let snack = GenerateInput {
        meal_type: MealType::Snack,
        ..input(&ingredients, &[], &[])
    };
    let suggestions = generator.generate(&snack, &mut rng).unwrap();

    assert_eq!(suggestions.candidates.len(), 1);
    assert_eq!(
        suggestions.candidates[0].combination,
        Combination::new(["apple", "chips"])
    );
}

#[test]
fn test_invalid_config_rejected() {
    let result = CombinationGenerator::new(GeneratorConfig::default().with_sizes(3, 2));
    assert!(matches!(result, Err(SuggestionError::InvalidConfig(_))));
}

#[test]
fn test_all_pairs_forbidden_returns_empty_partial_result() {
    let ingredients = breakfast_pool(&["a", "b", "c"]);
    let rules = vec![
        PairingRule::negative("a", "b").unwrap(),
        PairingRule::negative("a", "c").unwrap(),
        PairingRule::negative("b", "c").unwrap(),
    ];
    let generator = CombinationGenerator::new(GeneratorConfig::default()).unwrap();
    let mut rng = StdRng::seed_from_u64(0);

    let suggestions = generator
        .generate(&input(&ingredients, &rules, &[]), &mut rng)
        .unwrap();

    assert!(suggestions.is_empty());
    assert!(suggestions.exhausted);
}

#[test]
fn test_sampling_budget_exhausted_returns_partial_result() {
    let ids: Vec<String> = (0..40).map(|i| format!("i{i:02}")).collect();
    let id_refs: Vec<&str> = ids.iter().map(String::as_str).collect();
    let ingredients = breakfast_pool(&id_refs);

    // Every pair is forbidden except i00+i01
    let mut rules = Vec::new();
    for a in 0..40 {
        for b in (a + 1)..40 {
            if (a, b) != (0, 1) {
                rules.push(PairingRule::negative(ids[a].as_str(), ids[b].as_str()).unwrap());
            }
        }
    }

    let generator = CombinationGenerator::new(GeneratorConfig::default()).unwrap();
    let allowed = Combination::new(["i00", "i01"]);

    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let suggestions = generator
            .generate(&input(&ingredients, &rules, &[]), &mut rng)
            .unwrap();

        assert_eq!(suggestions.mode, SelectionMode::Sampled);
        assert!(suggestions.exhausted);
        assert!(suggestions.is_partial());
        assert!(suggestions.candidates.len() <= 1);
        assert!(
            suggestions
                .candidates
                .iter()
                .all(|c| c.combination == allowed),
            "seed {seed} suggested a forbidden pair"
        );
    }
}

#[test]
fn test_same_seed_same_suggestions() {
    let ids: Vec<String> = (0..25).map(|i| format!("i{i:02}")).collect();
    let id_refs: Vec<&str> = ids.iter().map(String::as_str).collect();
    let ingredients = breakfast_pool(&id_refs);
    let generator = CombinationGenerator::new(GeneratorConfig::default()).unwrap();

    let first = generator
        .generate(
            &input(&ingredients, &[], &[]),
            &mut StdRng::seed_from_u64(99),
        )
        .unwrap();
    let second = generator
        .generate(
            &input(&ingredients, &[], &[]),
            &mut StdRng::seed_from_u64(99),
        )
        .unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_candidate_to_log_request() {
    let ingredients = breakfast_pool(&["milk", "cereals"]);
    let generator = CombinationGenerator::new(pair_config(1)).unwrap();
    let mut rng = StdRng::seed_from_u64(0);

    let suggestions = generator
        .generate(&input(&ingredients, &[], &[]), &mut rng)
        .unwrap();
    let request = suggestions.candidates[0].to_log_request(MealType::Breakfast, TODAY);

    assert_eq!(request.ingredient_ids, vec!["cereals", "milk"]);
    assert_eq!(request.date, TODAY);
    assert!(request.validate().is_ok());
}

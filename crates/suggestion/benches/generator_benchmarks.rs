use criterion::{Criterion, criterion_group, criterion_main};
use mealmix_shared::{Ingredient, MealLogEntry, MealType, NewMealLog, PairingRule};
use mealmix_suggestion::{CombinationGenerator, GenerateInput, GeneratorConfig};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::hint::black_box;
use time::macros::date;
use time::{Date, Duration};

/// Create an ingredient pool with a spread of meal types
fn create_bench_ingredients(count: usize) -> Vec<Ingredient> {
    (0..count)
        .map(|i| {
            let meal_types = match i % 3 {
                0 => vec![MealType::Breakfast],
                1 => vec![MealType::Snack],
                _ => vec![MealType::Breakfast, MealType::Snack],
            };
            Ingredient::new(format!("ingredient_{i}"), format!("Ingredient {i}"), "bench", meal_types)
        })
        .collect()
}

fn create_bench_rules(count: usize) -> Vec<PairingRule> {
    (0..count)
        .step_by(2)
        .filter_map(|i| {
            let a = format!("ingredient_{i}");
            let b = format!("ingredient_{}", (i + 5) % count);
            if i % 4 == 0 {
                PairingRule::negative(a, b).ok()
            } else {
                PairingRule::positive(a, b).ok()
            }
        })
        .collect()
}

fn create_bench_history(count: usize, today: Date) -> Vec<MealLogEntry> {
    (0..60)
        .map(|day| {
            let ids = [
                format!("ingredient_{}", day % count),
                format!("ingredient_{}", (day * 7 + 2) % count),
            ];
            NewMealLog::new(MealType::Breakfast, today - Duration::days(day as i64 / 2), ids)
                .into_entry(format!("entry_{day}"), 0)
        })
        .collect()
}

fn bench_generate(c: &mut Criterion) {
    let today = date!(2025-10-19);
    let generator = CombinationGenerator::new(GeneratorConfig::default()).unwrap();

    for size in [12usize, 60] {
        let ingredients = create_bench_ingredients(size);
        let rules = create_bench_rules(size);
        let history = create_bench_history(size, today);
        let input = GenerateInput {
            meal_type: MealType::Breakfast,
            ingredients: &ingredients,
            pairing_rules: &rules,
            history: &history,
            today,
        };

        c.bench_function(&format!("generate_{size}_ingredients"), |b| {
            let mut rng = StdRng::seed_from_u64(42);
            b.iter(|| generator.generate(black_box(&input), &mut rng))
        });
    }
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);

//! Property-based tests for fpa-evo
//!
//! Uses proptest to verify invariants and properties of the library.

use fpa_evo::prelude::*;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn sphere(x: &[f64]) -> f64 {
    x.iter().map(|v| v * v).sum()
}

proptest! {
    // ==================== Bounds Properties ====================

    #[test]
    fn clip_lands_in_interval(
        value in -1e6f64..1e6,
        lower in -100.0f64..100.0,
        width in 0.0f64..100.0
    ) {
        let upper = lower + width;
        let clipped = clip(value, lower, upper);
        prop_assert!(clipped >= lower && clipped <= upper);
        if value >= lower && value <= upper {
            prop_assert_eq!(clipped, value);
        }
    }

    #[test]
    fn sampled_points_within_bounds(
        dim in 1usize..10,
        half_width in 0.1f64..100.0,
        seed in any::<u64>()
    ) {
        let mut rng = RngSource::new(StdRng::seed_from_u64(seed));
        let bounds = MultiBounds::symmetric(half_width, dim);
        let point = bounds.sample(&mut rng).unwrap();
        prop_assert_eq!(point.len(), dim);
        prop_assert!(bounds.contains_vec(&point));
    }

    // ==================== Operator Properties ====================

    #[test]
    fn neighbors_are_distinct(n in 2usize..50, seed in any::<u64>()) {
        let mut rng = RngSource::new(StdRng::seed_from_u64(seed));
        let (a, b) = draw_neighbors(n, &mut rng).unwrap();
        prop_assert_ne!(a, b);
        prop_assert!(a < n && b < n);
    }

    #[test]
    fn levy_steps_are_finite(beta in 0.1f64..=2.0, seed in any::<u64>()) {
        let levy = LevyFlight::new(beta).unwrap();
        let mut rng = RngSource::new(StdRng::seed_from_u64(seed));
        for _ in 0..100 {
            prop_assert!(levy.step(&mut rng).unwrap().is_finite());
        }
    }

    // ==================== Optimizer Properties ====================

    #[test]
    fn flowers_never_leave_tight_bounds(
        dim in 1usize..4,
        half_width in 0.01f64..1.0,
        gamma in 0.1f64..100.0,
        seed in any::<u64>()
    ) {
        let bounds = MultiBounds::symmetric(half_width, dim);
        let optimizer = FlowerPollination::builder()
            .flower_count(6)
            .iterations(15)
            .gamma(gamma)
            .bounds(bounds.clone())
            .objective(sphere)
            .build()
            .unwrap();

        let mut rng = RngSource::new(StdRng::seed_from_u64(seed));
        let mut streams = RandomStreams::unified(&mut rng);
        let outcome = optimizer.run(&mut streams).unwrap();

        prop_assert!(outcome.population.all_within(&bounds));
        prop_assert!(bounds.contains_vec(outcome.best.position()));
    }

    #[test]
    fn best_fitness_is_monotone(
        flowers in 2usize..15,
        p in 0.0f64..=1.0,
        seed in any::<u64>()
    ) {
        let optimizer = FlowerPollination::builder()
            .flower_count(flowers)
            .iterations(20)
            .switch_probability(p)
            .objective(SixHumpCamelBack::new())
            .build()
            .unwrap();

        let mut rng = RngSource::new(StdRng::seed_from_u64(seed));
        let mut streams = RandomStreams::unified(&mut rng);
        let mut trace = BestFitnessTrace::new();
        let outcome = optimizer.run_with_observer(&mut streams, &mut trace).unwrap();

        prop_assert!(trace.is_monotone());
        let history = outcome.stats.best_fitness_history();
        prop_assert!(history.windows(2).all(|w| w[1] <= w[0]));
        prop_assert_eq!(outcome.best.fitness(), *history.last().unwrap());
    }

    #[test]
    fn run_is_reproducible(seed in any::<u64>()) {
        let optimizer = FlowerPollination::builder()
            .flower_count(8)
            .iterations(10)
            .bounds(MultiBounds::symmetric(3.0, 3))
            .objective(sphere)
            .build()
            .unwrap();

        let run = |seed: u64| {
            let mut rng = RngSource::new(StdRng::seed_from_u64(seed));
            let mut streams = RandomStreams::unified(&mut rng);
            optimizer.run(&mut streams).unwrap()
        };
        let a = run(seed);
        let b = run(seed);
        prop_assert_eq!(a.best, b.best);
        prop_assert_eq!(a.evaluations, b.evaluations);
    }

    // ==================== Population Properties ====================

    #[test]
    fn accept_never_worsens(
        values in prop::collection::vec(-10.0f64..10.0, 2..20),
        index_seed in any::<usize>(),
        trial in -10.0f64..10.0
    ) {
        let candidates = values
            .iter()
            .map(|&v| Candidate::evaluate(vec![v], &sphere).unwrap())
            .collect();
        let mut population = Population::from_candidates(candidates);
        let index = index_seed % population.len();
        let before = population[index].fitness();

        let trial = Candidate::evaluate(vec![trial], &sphere).unwrap();
        let trial_fitness = trial.fitness();
        let accepted = population.accept(index, trial);

        prop_assert!(population[index].fitness() <= before);
        prop_assert_eq!(accepted, trial_fitness <= before);
    }
}

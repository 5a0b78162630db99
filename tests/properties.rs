//! Property tests for both solvers and the pheromone field.

use proptest::prelude::*;
use u_tsp::aco::{AcoConfig, AcoRunner, PheromoneField};
use u_tsp::exact::ExactRunner;
use u_tsp::{DistanceMatrix, Tour};

/// Square matrices with positive off-diagonal entries and a zero diagonal.
fn matrix(max_n: usize) -> impl Strategy<Value = DistanceMatrix> {
    (1..=max_n).prop_flat_map(|n| {
        prop::collection::vec(1u64..=50, n * n).prop_map(move |mut data| {
            for i in 0..n {
                data[i * n + i] = 0;
            }
            DistanceMatrix::from_data(n, data).unwrap()
        })
    })
}

fn symmetric_matrix(max_n: usize) -> impl Strategy<Value = DistanceMatrix> {
    (1..=max_n).prop_flat_map(|n| {
        prop::collection::vec(1u64..=50, n * n).prop_map(move |mut data| {
            for i in 0..n {
                data[i * n + i] = 0;
                for j in 0..i {
                    data[i * n + j] = data[j * n + i];
                }
            }
            DistanceMatrix::from_data(n, data).unwrap()
        })
    })
}

/// Shortest closed tour found by fixing city 0 and recursively extending
/// partial paths. Shares no code with the permutation successor.
fn brute_force_minimum(dm: &DistanceMatrix) -> u64 {
    fn extend(dm: &DistanceMatrix, path: &mut Vec<usize>, used: &mut [bool], best: &mut u64) {
        let n = dm.size();
        if path.len() == n {
            let length = Tour::new(path.clone()).length(dm);
            *best = (*best).min(length);
            return;
        }
        for city in 0..n {
            if !used[city] {
                used[city] = true;
                path.push(city);
                extend(dm, path, used, best);
                path.pop();
                used[city] = false;
            }
        }
    }

    let n = dm.size();
    let mut used = vec![false; n];
    used[0] = true;
    let mut best = u64::MAX;
    extend(dm, &mut vec![0], &mut used, &mut best);
    best
}

fn aco_config() -> impl Strategy<Value = AcoConfig> {
    (
        1usize..=5,
        0.0f64..=1.0,
        0.0f64..=2.0,
        0.0f64..=3.0,
        0.0f64..=3.0,
        0usize..=8,
        any::<u64>(),
    )
        .prop_map(|(ants, evaporation_rate, alpha, beta, elite, iterations, seed)| {
            AcoConfig::default()
                .with_ants(ants)
                .with_evaporation_rate(evaporation_rate)
                .with_alpha(alpha)
                .with_beta(beta)
                .with_elite_multiplier(elite)
                .with_iterations(iterations)
                .with_seed(seed)
        })
}

#[derive(Debug, Clone)]
enum FieldOp {
    Evaporate(f64),
    Reinforce(usize, usize, f64),
    Elite(Vec<usize>, f64, u64),
}

fn field_ops(n: usize) -> impl Strategy<Value = Vec<FieldOp>> {
    let op = prop_oneof![
        (0.0f64..=1.0).prop_map(FieldOp::Evaporate),
        (0..n, 0..n, 0.0f64..10.0).prop_map(|(i, j, a)| FieldOp::Reinforce(i, j, a)),
        (
            Just((0..n).collect::<Vec<_>>()).prop_shuffle(),
            0.0f64..5.0,
            0u64..100
        )
            .prop_map(|(tour, elite, length)| FieldOp::Elite(tour, elite, length)),
    ];
    prop::collection::vec(op, 0..40)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn exact_matches_independent_enumeration(dm in matrix(6)) {
        let result = ExactRunner::run(&dm);
        prop_assert_eq!(result.best_length, brute_force_minimum(&dm));
        prop_assert_eq!(result.best.length(&dm), result.best_length);
        prop_assert!(result.best.is_permutation_of(dm.size()));
    }

    #[test]
    fn exact_matches_on_symmetric_instances(dm in symmetric_matrix(6)) {
        prop_assert_eq!(ExactRunner::run(&dm).best_length, brute_force_minimum(&dm));
    }

    #[test]
    fn exact_is_deterministic(dm in matrix(6)) {
        prop_assert_eq!(ExactRunner::run(&dm).best_length, ExactRunner::run(&dm).best_length);
    }

    #[test]
    fn aco_never_beats_optimum(dm in matrix(6), config in aco_config()) {
        let exact = ExactRunner::run(&dm);
        let result = AcoRunner::run(&dm, &config).unwrap();
        if let Some(solution) = result.solution() {
            prop_assert!(solution.length >= exact.best_length);
            prop_assert!(solution.tour.is_permutation_of(dm.size()));
            prop_assert_eq!(solution.tour.length(&dm), solution.length);
        } else {
            prop_assert_eq!(config.iterations, 0);
        }
    }

    #[test]
    fn aco_best_is_non_increasing(dm in matrix(6), config in aco_config()) {
        let result = AcoRunner::run(&dm, &config).unwrap();
        prop_assert_eq!(result.cost_history.len(), config.iterations);
        for window in result.cost_history.windows(2) {
            prop_assert!(window[1] <= window[0]);
        }
    }

    #[test]
    fn pheromone_stays_non_negative(
        (n, ops) in (1usize..=6).prop_flat_map(|n| (Just(n), field_ops(n)))
    ) {
        let mut field = PheromoneField::new(n, 1.0);
        for op in ops {
            match op {
                FieldOp::Evaporate(rate) => field.evaporate(rate),
                FieldOp::Reinforce(i, j, amount) => field.reinforce_edge(i, j, amount),
                FieldOp::Elite(tour, elite, length) => {
                    field.reinforce_best_tour(&Tour::new(tour), elite, length);
                }
            }
            prop_assert!(field.values().all(|v| v >= 0.0));
        }
    }
}

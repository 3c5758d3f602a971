use crate::{
    common::round_half_up,
    config::Weights,
    schemas::computing::{Category, Score, MAX_SCORE},
};

/// Weighted mean of the present component scores.
///
/// Weights are renormalized over the categories actually given, so a build
/// without storage is graded on cpu, gpu and ram alone. Nothing given scores 0.
pub fn overall_score<I>(weights: &Weights, scores: I) -> Score
where
    I: IntoIterator<Item = (Category, Score)>,
{
    let (total, weight) = scores
        .into_iter()
        .fold((0.0, 0.0), |(total, weight), (category, score)| {
            let w = weights.weight(category);
            (total + f64::from(score) * w, weight + w)
        });
    if weight <= 0.0 {
        return 0;
    }
    round_half_up(total / weight).clamp(0.0, f64::from(MAX_SCORE)) as Score
}

#[cfg(test)]
mod tests {
    use super::overall_score;
    use crate::{config::Weights, schemas::computing::Category};

    #[test]
    fn test_reference_weights() {
        let weights = Weights::default();
        let score = overall_score(
            &weights,
            [
                (Category::Cpu, 98),
                (Category::Gpu, 98),
                (Category::Ram, 85),
                (Category::Storage, 80),
            ],
        );
        assert_eq!(score, 95);
    }

    #[test]
    fn test_uniform_scores_are_fixed_points() {
        let weights = Weights::default();
        for s in [0, 1, 37, 50, 99, 100] {
            let all = Category::ALL.iter().map(|c| (*c, s));
            assert_eq!(overall_score(&weights, all), s);
        }
    }

    #[test]
    fn test_renormalizes_missing_components() {
        let weights = Weights::default();
        // (70 * 0.35 + 60 * 0.45) / 0.8 = 64.375
        assert_eq!(
            overall_score(&weights, [(Category::Cpu, 70), (Category::Gpu, 60)]),
            64
        );
        assert_eq!(overall_score(&weights, [(Category::Storage, 42)]), 42);
        assert_eq!(overall_score(&weights, std::iter::empty()), 0);
    }

    #[test]
    fn test_rounds_halves_up() {
        let weights = Weights {
            cpu: 0.5,
            gpu: 0.5,
            ram: 0.0,
            storage: 0.0,
        };
        assert_eq!(
            overall_score(&weights, [(Category::Cpu, 60), (Category::Gpu, 61)]),
            61
        );
    }
}

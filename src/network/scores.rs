use crate::Probability;
use crate::Score;

/// Numerically stable softmax over raw class scores.
pub fn softmax(scores: &[Score]) -> Vec<Probability> {
    let max = scores.iter().copied().fold(Score::NEG_INFINITY, Score::max);
    let exps = scores.iter().map(|s| (s - max).exp()).collect::<Vec<_>>();
    let sum = exps.iter().sum::<Probability>();
    exps.into_iter().map(|e| e / sum).collect()
}

/// The `k` most probable classes as (index, probability), best first.
/// Ties keep the lower index first.
pub fn top_k(probabilities: &[Probability], k: usize) -> Vec<(usize, Probability)> {
    let mut ranked = probabilities.iter().copied().enumerate().collect::<Vec<_>>();
    ranked.sort_by(|(i, a), (j, b)| b.total_cmp(a).then(i.cmp(j)));
    ranked.truncate(k);
    ranked
}

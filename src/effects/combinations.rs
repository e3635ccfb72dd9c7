//! k-subset enumeration for "choose k of n" effects.

use smallvec::SmallVec;

/// Index set of one combination. Cards rarely offer more than four choices.
pub type Combination = SmallVec<[usize; 4]>;

/// All k-element subsets of `0..n`, each ascending, in lexicographic order.
///
/// Returns nothing when `k > n` and a single empty subset when `k == 0`.
///
/// ```
/// use deckbuild_sim::effects::combinations::k_subsets;
///
/// let subsets: Vec<Vec<usize>> = k_subsets(3, 2).into_iter().map(|c| c.to_vec()).collect();
/// assert_eq!(subsets, vec![vec![0, 1], vec![0, 2], vec![1, 2]]);
/// ```
#[must_use]
pub fn k_subsets(n: usize, k: usize) -> Vec<Combination> {
    if k > n {
        return Vec::new();
    }

    let mut out = Vec::with_capacity(binomial(n, k));
    let mut indices: Combination = (0..k).collect();

    loop {
        out.push(indices.clone());

        // Rightmost position that has not reached its maximum value
        let mut i = k;
        loop {
            if i == 0 {
                return out;
            }
            i -= 1;
            if indices[i] != i + n - k {
                break;
            }
        }

        indices[i] += 1;
        for j in i + 1..k {
            indices[j] = indices[j - 1] + 1;
        }
    }
}

/// Number of k-subsets of an n-set; 0 when `k > n`.
#[must_use]
pub fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
}

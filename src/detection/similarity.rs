//! String similarity measures used for fuzzy reference-list matching.
//!
//! Both measures operate on Unicode scalar values and return a ratio in `[0, 1]`, where
//! `1.0` means identical. Two empty strings are identical.

/// A similarity ratio between two strings, in `[0, 1]`.
///
/// Implementations must be deterministic: the same inputs always give the same ratio.
pub trait StringSimilarity: Send + Sync {
    fn similarity(&self, a: &str, b: &str) -> f64;
}

impl<F> StringSimilarity for F
where
    F: Fn(&str, &str) -> f64 + Send + Sync,
{
    fn similarity(&self, a: &str, b: &str) -> f64 {
        self(a, b)
    }
}

/// Ratcliff/Obershelp "gestalt pattern matching" ratio: `2 * M / (|a| + |b|)`, where `M`
/// counts characters in recursively found longest common blocks.
#[derive(Debug, Clone, Copy, Default)]
pub struct RatcliffObershelp;

impl StringSimilarity for RatcliffObershelp {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        let total = a.len() + b.len();
        if total == 0 {
            return 1.0;
        }
        2.0 * matching_chars(&a, &b) as f64 / total as f64
    }
}

fn matching_chars(a: &[char], b: &[char]) -> usize {
    let mut matched = 0;
    let mut pending = vec![(0, a.len(), 0, b.len())];
    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let (i, j, k) = longest_common_block(a, b, alo, ahi, blo, bhi);
        if k == 0 {
            continue;
        }
        matched += k;
        if alo < i && blo < j {
            pending.push((alo, i, blo, j));
        }
        if i + k < ahi && j + k < bhi {
            pending.push((i + k, ahi, j + k, bhi));
        }
    }
    matched
}

/// Longest common contiguous block of `a[alo..ahi]` and `b[blo..bhi]` as `(i, j, len)`.
///
/// Among equally long blocks the one found first (lowest end in `a`, then in `b`) wins.
fn longest_common_block(
    a: &[char],
    b: &[char],
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let width = bhi - blo + 1;
    let mut best = (alo, blo, 0);
    let mut prev = vec![0usize; width];
    let mut cur = vec![0usize; width];
    for i in alo..ahi {
        for j in blo..bhi {
            let col = j - blo + 1;
            cur[col] = if a[i] == b[j] { prev[col - 1] + 1 } else { 0 };
            let k = cur[col];
            if k > best.2 {
                best = (i + 1 - k, j + 1 - k, k);
            }
        }
        std::mem::swap(&mut prev, &mut cur);
    }
    best
}

/// `1 - levenshtein(a, b) / max(|a|, |b|)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NormalizedLevenshtein;

impl StringSimilarity for NormalizedLevenshtein {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        let longest = a.len().max(b.len());
        if longest == 0 {
            return 1.0;
        }
        1.0 - levenshtein(&a, &b) as f64 / longest as f64
    }
}

fn levenshtein(a: &[char], b: &[char]) -> usize {
    let n = b.len();
    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0; n + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=n {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

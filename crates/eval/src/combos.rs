// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards combinations.

/// Returns the binomial coefficient for n choose k, 0 if k > n.
pub fn nck(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }

    // Each partial product is a binomial coefficient so the division is exact.
    (1..=k.min(n - k)).fold(1, |acc, i| acc * (n + 1 - i) / i)
}

/// Calls the given closure with the indices of each k-subset of `0..n` in
/// colexicographic order, nothing is called if k > n.
pub fn for_each_ksubset<F>(n: usize, k: usize, mut f: F)
where
    F: FnMut(&[usize]),
{
    if k > n {
        return;
    }

    // Algorithm L from TAOCP 4a, c[0] is unused and c[k + 1], c[k + 2] are
    // the sentinels.
    let mut c = vec![0usize; k + 3];
    for (j, v) in c[1..=k].iter_mut().enumerate() {
        *v = j;
    }

    c[k + 1] = n;

    loop {
        f(&c[1..=k]);

        let mut j = 1;
        while c[j] + 1 == c[j + 1] {
            c[j] = j - 1;
            j += 1;
        }

        if j > k {
            break;
        }

        c[j] += 1;
    }
}

/// Returns all the k-items subsets of `items`.
pub fn combinations<T: Copy>(items: &[T], k: usize) -> Vec<Vec<T>> {
    let mut subsets = Vec::with_capacity(nck(items.len(), k));
    for_each_ksubset(items.len(), k, |p| {
        subsets.push(p.iter().map(|&pos| items[pos]).collect());
    });
    subsets
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn test_nck() {
        // For n < k = 0
        assert_eq!(nck(2, 3), 0);
        assert_eq!(nck(0, 0), 1);

        [1, 52, 1326, 22100, 270725, 2598960, 20358520, 133784560]
            .into_iter()
            .enumerate()
            .for_each(|(k, v)| assert_eq!(nck(52, k), v));

        [1, 5, 10, 10, 5, 1, 0, 0]
            .into_iter()
            .enumerate()
            .for_each(|(k, v)| assert_eq!(nck(5, k), v));

        [1, 4, 6, 4, 1, 0, 0, 0]
            .into_iter()
            .enumerate()
            .for_each(|(k, v)| assert_eq!(nck(4, k), v));

        [1, 1, 0, 0, 0, 0, 0, 0]
            .into_iter()
            .enumerate()
            .for_each(|(k, v)| assert_eq!(nck(1, k), v));

        // Symmetric and not limited to a deck.
        for n in 0..=60 {
            for k in 0..=n {
                assert_eq!(nck(n, k), nck(n, n - k), "n={n} k={k}");
            }
        }
        assert_eq!(nck(52, 45), nck(52, 7));
        assert_eq!(nck(60, 5), 5_461_512);
    }

    #[test]
    fn ksubsets() {
        let mut subsets = Vec::new();
        for_each_ksubset(4, 2, |s| subsets.push(s.to_vec()));
        assert_eq!(
            subsets,
            vec![
                vec![0, 1],
                vec![0, 2],
                vec![1, 2],
                vec![0, 3],
                vec![1, 3],
                vec![2, 3],
            ]
        );

        for n in 0..=9 {
            for k in 0..=n.min(7) {
                let mut seen = HashSet::default();
                for_each_ksubset(n, k, |s| {
                    assert_eq!(s.len(), k);
                    assert!(s.windows(2).all(|w| w[0] < w[1]));
                    assert!(s.iter().all(|&i| i < n));
                    seen.insert(s.to_vec());
                });
                assert_eq!(seen.len(), nck(n, k), "n={n} k={k}");
            }
        }
    }

    #[test]
    fn ksubsets_out_of_range() {
        let mut count = 0;
        for_each_ksubset(3, 4, |_| count += 1);
        assert_eq!(count, 0);
    }

    #[test]
    fn items_combinations() {
        let subsets = combinations(&['a', 'b', 'c', 'd', 'e'], 3);
        assert_eq!(subsets.len(), nck(5, 3));
        assert_eq!(subsets[0], vec!['a', 'b', 'c']);
        assert_eq!(subsets[9], vec!['c', 'd', 'e']);

        assert_eq!(combinations(&[1, 2], 0), vec![Vec::<i32>::new()]);
        assert!(combinations(&[1, 2], 3).is_empty());
    }
}

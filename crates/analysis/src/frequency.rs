//! Top-K frequency analysis for log aggregation.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

/// The `k` most frequent items with their occurrence counts.
///
/// Counting is O(N); selection keeps a bounded heap of size `k`
/// (O(N log K)) rather than sorting the full tally. The result is ordered
/// by descending count, ties broken by ascending item, so identical input
/// always yields identical output. Fewer than `k` distinct items yields
/// them all.
#[must_use]
pub fn top_k<I, S>(items: I, k: usize) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    if k == 0 {
        return Vec::new();
    }

    let mut counts: HashMap<String, usize> = HashMap::new();
    for item in items {
        *counts.entry(item.as_ref().to_string()).or_insert(0) += 1;
    }

    // Min-heap of the current best k: (count, Reverse(item)) ranks higher
    // counts first and earlier items on ties, so the heap root is always
    // the entry to evict.
    let mut heap: BinaryHeap<Reverse<(usize, Reverse<String>)>> =
        BinaryHeap::with_capacity(k + 1);
    for (item, count) in counts {
        heap.push(Reverse((count, Reverse(item))));
        if heap.len() > k {
            heap.pop();
        }
    }

    heap.into_sorted_vec()
        .into_iter()
        .map(|Reverse((count, Reverse(item)))| (item, count))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_the_most_frequent_urls() {
        let logs = [
            "/home", "/login", "/home", "/dashboard", "/login", "/home", "/settings",
            "/dashboard", "/home",
        ];
        let top = top_k(logs, 2);
        // /dashboard and /login tie at 2; ascending tie-break picks /dashboard
        assert_eq!(top, [("/home".to_string(), 4), ("/dashboard".to_string(), 2)]);
    }

    #[test]
    fn ties_break_lexicographically() {
        let top = top_k(["b", "a", "b", "a", "c"], 2);
        assert_eq!(top, [("a".to_string(), 2), ("b".to_string(), 2)]);
    }

    #[test]
    fn fewer_distinct_items_than_k_returns_them_all() {
        let top = top_k(["x", "y", "x"], 10);
        assert_eq!(top, [("x".to_string(), 2), ("y".to_string(), 1)]);
    }

    #[test]
    fn zero_k_returns_nothing() {
        assert!(top_k(["a", "b"], 0).is_empty());
    }

    #[test]
    fn empty_input_returns_nothing() {
        assert!(top_k(Vec::<String>::new(), 3).is_empty());
    }
}

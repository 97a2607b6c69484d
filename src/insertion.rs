/// Sorts a copy of `arr` by insertion. The input is left untouched.
pub fn insertion_sort(arr: &[u64]) -> Vec<u64> {
    insertion_sort_by_key(arr, |x: &u64| *x)
}

/// Insertion sort on the key returned by `key`. Equal keys keep their input order.
pub fn insertion_sort_by_key<T, K, F>(arr: &[T], key: F) -> Vec<T>
where
    T: Copy,
    K: Ord,
    F: Fn(&T) -> K,
{
    let mut out = arr.to_vec();
    // out[0..j] is sorted at the start of every iteration
    for j in 1..out.len() {
        let current = out[j];
        let current_key = key(&current);
        let mut i = j;
        while i > 0 && key(&out[i - 1]) > current_key {
            out[i] = out[i - 1];
            i -= 1;
        }
        out[i] = current;
    }
    out
}

/// Top-down merge sort. Returns a new vector, the input is left untouched.
pub fn merge_sort(arr: &[u64]) -> Vec<u64> {
    merge_sort_by_key(arr, &|x: &u64| *x)
}

/// Merge sort on the key returned by `key`. Stable: on equal keys the element
/// from the left half is taken first.
pub fn merge_sort_by_key<T, K, F>(arr: &[T], key: &F) -> Vec<T>
where
    T: Copy,
    K: Ord,
    F: Fn(&T) -> K,
{
    if arr.len() <= 1 {
        return arr.to_vec();
    }
    let mid = arr.len() / 2;
    let left = merge_sort_by_key(&arr[..mid], key);
    let right = merge_sort_by_key(&arr[mid..], key);
    merge(&left, &right, key)
}

/// Merges two sorted runs into one.
pub fn merge<T, K, F>(left: &[T], right: &[T], key: &F) -> Vec<T>
where
    T: Copy,
    K: Ord,
    F: Fn(&T) -> K,
{
    let mut result = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);

    while i < left.len() && j < right.len() {
        if key(&left[i]) <= key(&right[j]) {
            result.push(left[i]);
            i += 1;
        } else {
            result.push(right[j]);
            j += 1;
        }
    }

    result.extend_from_slice(&left[i..]);
    result.extend_from_slice(&right[j..]);
    result
}

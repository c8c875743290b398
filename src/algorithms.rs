use itertools::Itertools;
use ncollide2d::na::RealField;

/// Returns the index of the first element of a non-decreasing slice which is greater than or
/// equal to `test_value`. A test value beyond the last element returns the last index instead of
/// one past the end, so the result can always be used to index into a non-empty slice.
///
/// The result is meaningless if the slice is not sorted, see `first_decrease`.
pub fn left_bisect<N: RealField + Copy>(slice: &[N], test_value: N) -> usize {
    if slice.is_empty() {
        return 0;
    }

    let last = slice.len() - 1;
    if slice[last] < test_value {
        return last;
    }

    let mut a = 0;
    let mut b = last;
    while a < b {
        let check = (a + b) / 2;
        if slice[check] < test_value {
            a = check + 1;
        } else {
            b = check;
        }
    }
    a
}

/// Finds the index of the first element which is smaller than its predecessor, or None if the
/// slice is non-decreasing.
pub fn first_decrease<N: RealField + Copy>(slice: &[N]) -> Option<usize> {
    slice
        .iter()
        .tuple_windows()
        .position(|(a, b)| b < a)
        .map(|i| i + 1)
}

//! Replaced by the submission at judge time.

use std::collections::HashMap;

use judge_driver::prelude::Int;

/// Indices of the first pair summing to `target`, empty when there is none.
pub fn two_sum(nums: Vec<Int>, target: Int) -> Vec<Int> {
    let mut seen: HashMap<Int, usize> = HashMap::with_capacity(nums.len());
    for (j, &n) in nums.iter().enumerate() {
        if let Some(&i) = target.checked_sub(n).and_then(|want| seen.get(&want)) {
            return vec![i as Int, j as Int];
        }
        seen.entry(n).or_insert(j);
    }
    vec![]
}

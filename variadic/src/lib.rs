/// Sum any number of values passed as a slice.
pub fn sum(nums: &[i64]) -> i64 {
    nums.iter().sum()
}

pub fn sum_iter<I>(nums: I) -> i64
where
    I: IntoIterator<Item = i64>,
{
    let mut total = 0;
    for num in nums {
        total += num;
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sums_literal_args() {
        assert_eq!(sum(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]), 55);
    }

    #[test]
    fn sums_a_vec() {
        let nums: Vec<i64> = (1..=11).collect();
        assert_eq!(sum(&nums), 66);
        assert_eq!(sum_iter(nums), 66);
    }

    #[test]
    fn no_args_is_zero() {
        assert_eq!(sum(&[]), 0);
        assert_eq!(sum_iter(std::iter::empty()), 0);
    }
}

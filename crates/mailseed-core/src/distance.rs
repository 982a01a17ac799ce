// Levenshtein edit distance.

/// Compute the Levenshtein distance between two strings.
///
/// Standard dynamic-programming formulation over a full `(m+1) x (n+1)`
/// table with unit cost for insertion, deletion and substitution. Operates
/// on `char` boundaries, so multi-byte characters count as one edit.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let m = a.len();
    let n = b.len();

    let mut dp = vec![vec![0usize; n + 1]; m + 1];
    for (i, row) in dp.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=n {
        dp[0][j] = j;
    }

    for i in 1..=m {
        for j in 1..=n {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            dp[i][j] = (dp[i - 1][j] + 1)
                .min(dp[i][j - 1] + 1)
                .min(dp[i - 1][j - 1] + cost);
        }
    }
    dp[m][n]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_strings_have_zero_distance() {
        assert_eq!(edit_distance("abcd", "abcd"), 0);
        assert_eq!(edit_distance("", ""), 0);
    }

    #[test]
    fn fully_disjoint_strings_need_full_substitution() {
        assert_eq!(edit_distance("night", "xyzab"), 5);
    }

    #[test]
    fn empty_versus_nonempty_is_length() {
        assert_eq!(edit_distance("", "abc"), 3);
        assert_eq!(edit_distance("abc", ""), 3);
    }

    #[test]
    fn single_edits() {
        assert_eq!(edit_distance("cat", "cut"), 1); // substitution
        assert_eq!(edit_distance("cat", "cats"), 1); // insertion
        assert_eq!(edit_distance("cat", "at"), 1); // deletion
    }

    #[test]
    fn classic_kitten_sitting() {
        assert_eq!(edit_distance("kitten", "sitting"), 3);
    }

    #[test]
    fn distance_is_symmetric() {
        assert_eq!(
            edit_distance("spark", "ember"),
            edit_distance("ember", "spark")
        );
    }
}

use once_cell::sync::Lazy;

/// Integer letter weights approximating English letter frequency.
/// A uniform draw in `[0, weight_total())` maps to a letter through the
/// cumulative distribution, so common letters dominate generated grids.
pub static LETTER_WEIGHTS: Lazy<Vec<(char, u32)>> = Lazy::new(|| {
    vec![
        ('E', 13),
        ('A', 12),
        ('I', 10),
        ('O', 9),
        ('N', 8),
        ('R', 7),
        ('T', 7),
        ('L', 6),
        ('S', 6),
        ('U', 5),
        ('D', 4),
        ('G', 4),
        ('C', 3),
        ('M', 3),
        ('B', 2),
        ('P', 2),
        ('F', 2),
        ('H', 2),
        ('V', 1),
        ('W', 1),
        ('Y', 1),
        ('K', 1),
        ('J', 1),
        ('X', 1),
        ('Q', 1),
        ('Z', 1),
    ]
});

/// Calculate the cumulative distribution for weighted random selection
pub fn get_cumulative_distribution() -> Vec<(char, u32)> {
    let mut cumulative = 0;
    LETTER_WEIGHTS
        .iter()
        .map(|(ch, weight)| {
            cumulative += weight;
            (*ch, cumulative)
        })
        .collect()
}

/// Sum of all letter weights
pub fn weight_total() -> u32 {
    LETTER_WEIGHTS.iter().map(|(_, weight)| weight).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_total() {
        assert_eq!(weight_total(), 113);
    }

    #[test]
    fn test_covers_alphabet() {
        assert_eq!(LETTER_WEIGHTS.len(), 26);
        let mut letters: Vec<char> = LETTER_WEIGHTS.iter().map(|(ch, _)| *ch).collect();
        letters.sort_unstable();
        letters.dedup();
        assert_eq!(letters.len(), 26);
        assert!(letters.iter().all(|ch| ch.is_ascii_uppercase()));
    }

    #[test]
    fn test_cumulative_distribution() {
        let dist = get_cumulative_distribution();
        assert_eq!(dist.len(), 26);
        assert_eq!(dist.last().unwrap().1, weight_total());
        // Strictly increasing since every weight is positive
        for window in dist.windows(2) {
            assert!(window[0].1 < window[1].1);
        }
    }
}

//! Pattern statistics

use crate::models::{Pattern, PatternStatistics};

/// Aggregate weight counts over all pattern lines in verse order
pub fn pattern_statistics(patterns: &[Pattern]) -> PatternStatistics {
    let total: usize = patterns.iter().map(Pattern::len).sum();
    let heavy: usize = patterns.iter().map(Pattern::heavy_count).sum();
    let guru_percentage = if total > 0 {
        heavy as f64 / total as f64 * 100.0
    } else {
        0.0
    };

    PatternStatistics {
        total_syllables: total,
        guru_count: heavy,
        laghu_count: total - heavy,
        guru_percentage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterns(ps: &[&str]) -> Vec<Pattern> {
        ps.iter().map(|p| p.parse().unwrap()).collect()
    }

    #[test]
    fn test_counts() {
        let stats = pattern_statistics(&patterns(&["LGG", "GL", ""]));
        assert_eq!(stats.total_syllables, 5);
        assert_eq!(stats.guru_count, 3);
        assert_eq!(stats.laghu_count, 2);
        assert!((stats.guru_percentage - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_verse() {
        let stats = pattern_statistics(&[]);
        assert_eq!(stats, PatternStatistics::default());
        assert_eq!(stats.guru_percentage, 0.0);
    }
}

//! Approximate substring matching.
//!
//! Finds the substring of a text with the smallest edit distance to a
//! pattern (semi-global alignment: the match may start and end anywhere in
//! the text at no cost). Works on `char` slices so positions are character
//! indices.

/// Best alignment of a pattern inside a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FuzzyMatch {
    /// Edit distance between the pattern and the matched substring.
    pub errors: usize,
    /// First character of the match.
    pub start: usize,
    /// One past the last character of the match.
    pub end: usize,
}

impl FuzzyMatch {
    /// Errors relative to the pattern length. `0.0` is an exact match.
    pub fn score(&self, pattern_len: usize) -> f64 {
        if pattern_len == 0 {
            return 1.0;
        }
        self.errors as f64 / pattern_len as f64
    }
}

#[derive(Debug, Clone, Copy)]
struct Cell {
    cost: usize,
    start: usize,
}

/// Lowest-error match of `pattern` anywhere in `text`.
///
/// Ties go to the match that ends first. Returns `None` for an empty
/// pattern.
pub fn best_match(pattern: &[char], text: &[char]) -> Option<FuzzyMatch> {
    let m = pattern.len();
    if m == 0 {
        return None;
    }

    // prev[i]: best alignment of pattern[..i] ending at the previous text column.
    let mut prev: Vec<Cell> = (0..=m).map(|i| Cell { cost: i, start: 0 }).collect();
    let mut cur = prev.clone();

    let mut best = FuzzyMatch {
        errors: m,
        start: 0,
        end: 0,
    };

    for (j, &tc) in text.iter().enumerate() {
        cur[0] = Cell {
            cost: 0,
            start: j + 1,
        };

        for i in 1..=m {
            let diagonal = prev[i - 1];
            let substitute = Cell {
                cost: diagonal.cost + usize::from(pattern[i - 1] != tc),
                start: diagonal.start,
            };
            let skip_text = Cell {
                cost: prev[i].cost + 1,
                start: prev[i].start,
            };
            let skip_pattern = Cell {
                cost: cur[i - 1].cost + 1,
                start: cur[i - 1].start,
            };

            let mut cell = substitute;
            if skip_text.cost < cell.cost {
                cell = skip_text;
            }
            if skip_pattern.cost < cell.cost {
                cell = skip_pattern;
            }
            cur[i] = cell;
        }

        if cur[m].cost < best.errors {
            best = FuzzyMatch {
                errors: cur[m].cost,
                start: cur[m].start,
                end: j + 1,
            };
        }
        if best.errors == 0 {
            break;
        }
        std::mem::swap(&mut prev, &mut cur);
    }

    Some(best)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn find(pattern: &str, text: &str) -> FuzzyMatch {
        best_match(&chars(pattern), &chars(text)).unwrap()
    }

    #[test]
    fn test_exact_substring() {
        let m = find("mate", "yerba mate cocido");
        assert_eq!(m, FuzzyMatch { errors: 0, start: 6, end: 10 });
        assert_eq!(m.score(4), 0.0);
    }

    #[test]
    fn test_single_typo() {
        let m = find("mtae", "yerba mate");
        assert!(m.errors <= 2);

        let m = find("cafr", "cafe de altura");
        assert_eq!(m.errors, 1);
        assert_eq!(m.start, 0);
    }

    #[test]
    fn test_missing_character() {
        let m = find("poncho", "ponco andino");
        assert_eq!(m.errors, 1);
        assert_eq!(m.start, 0);
    }

    #[test]
    fn test_no_match_costs_pattern_length() {
        let m = find("xyz", "abc");
        assert_eq!(m.errors, 3);
        assert_eq!(find("ab", "").errors, 2);
    }

    #[test]
    fn test_empty_pattern() {
        assert_eq!(best_match(&[], &chars("abc")), None);
    }

    #[test]
    fn test_earliest_end_wins_ties() {
        let m = find("ab", "ab ab");
        assert_eq!((m.start, m.end), (0, 2));
    }
}

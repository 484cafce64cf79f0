//! Built-in snapshot of the index, served when the live source is unavailable.

use tiobe_common::Language;

// (rank, prev_rank, name, rating, change)
const SNAPSHOT: [(i32, i32, &str, &str, &str); 20] = [
    (1,  1,  "Python",               "23.64%", "-0.21%"),
    (2,  4,  "C",                    "10.11%", "+1.01%"),
    (3,  2,  "C++",                  "8.95%",  "-1.87%"),
    (4,  3,  "Java",                 "8.70%",  "-1.02%"),
    (5,  5,  "C#",                   "7.26%",  "+2.39%"),
    (6,  6,  "JavaScript",           "2.96%",  "-1.66%"),
    (7,  9,  "Visual Basic",         "2.81%",  "+0.85%"),
    (8,  8,  "SQL",                  "2.10%",  "+0.11%"),
    (9,  26, "Perl",                 "1.97%",  "+1.33%"),
    (10, 16, "R",                    "1.96%",  "+0.91%"),
    (11, 11, "Delphi/Object Pascal", "1.91%",  "+0.48%"),
    (12, 10, "Fortran",              "1.60%",  "-0.18%"),
    (13, 15, "MATLAB",               "1.52%",  "+0.43%"),
    (14, 24, "Ada",                  "1.49%",  "+0.77%"),
    (15, 7,  "Go",                   "1.37%",  "-0.80%"),
    (16, 12, "PHP",                  "1.36%",  "-0.03%"),
    (17, 14, "Rust",                 "1.30%",  "+0.01%"),
    (18, 13, "Scratch",              "1.11%",  "-0.23%"),
    (19, 17, "Assembly language",    "1.04%",  "-0.01%"),
    (20, 23, "Kotlin",               "0.92%",  "+0.10%"),
];

pub fn fallback_rankings() -> Vec<Language> {
    SNAPSHOT
        .iter()
        .map(|&(rank, prev_rank, name, rating, change)| Language::new(rank, prev_rank, name, rating, change))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_is_ordered_top20() {
        let langs = fallback_rankings();
        assert_eq!(langs.len(), 20);
        for (i, lang) in langs.iter().enumerate() {
            assert_eq!(lang.rank, i as i32 + 1);
            assert!(lang.rating_percent().is_some(), "{} has unparsable rating", lang.name);
        }
        assert_eq!(langs[0].name, "Python");
        assert_eq!(langs[19].name, "Kotlin");
    }
}

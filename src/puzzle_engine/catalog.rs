//! Puzzle catalog: an ordered, validated sequence of [`PuzzleLine`]s.
//!
//! All structural checks happen here, eagerly, so the engine never has to
//! handle malformed content at runtime (every later operation is total).

use thiserror::Error;

use crate::puzzle_engine::models::{PuzzleLine, Segment};

/// A load-time contract violation in puzzle content.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("catalog has no lines")]
    Empty,
    #[error("line {line}: {blanks} blanks but {words} bank words")]
    WordCountMismatch { line: usize, blanks: usize, words: usize },
    #[error("line {line}: {blanks} blanks but {solutions} solution tokens")]
    SolutionCountMismatch { line: usize, blanks: usize, solutions: usize },
    #[error("line {line}: blank ids must be exactly 0..{blanks}, found id {id}")]
    BlankIdOutOfRange { line: usize, blanks: usize, id: usize },
    #[error("line {line}: duplicate blank id {id}")]
    DuplicateBlankId { line: usize, id: usize },
    #[error("line {line}: bank word {word:?} is not a permutation of the solution")]
    WordsNotPermutation { line: usize, word: String },
}

/// An ordered sequence of puzzle lines, validated at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleCatalog {
    lines: Vec<PuzzleLine>,
}

impl PuzzleCatalog {
    /// Validate `lines` and build the catalog. Fails fast on the first
    /// malformed line rather than deferring to runtime.
    pub fn new(lines: Vec<PuzzleLine>) -> Result<Self, CatalogError> {
        if lines.is_empty() {
            return Err(CatalogError::Empty);
        }
        for (index, line) in lines.iter().enumerate() {
            validate_line(index, line)?;
        }
        Ok(PuzzleCatalog { lines })
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Panics if `index` is out of range; the engine only indexes with its
    /// own `current_line_index`, which it keeps in range.
    pub fn line(&self, index: usize) -> &PuzzleLine {
        &self.lines[index]
    }

    pub fn lines(&self) -> &[PuzzleLine] {
        &self.lines
    }
}

fn validate_line(index: usize, line: &PuzzleLine) -> Result<(), CatalogError> {
    let blanks = line.blank_count();

    // Ids must cover exactly 0..blanks with no repeats.
    let mut seen = vec![false; blanks];
    for segment in &line.sentence {
        if let Segment::Blank { id } = segment {
            if *id >= blanks {
                return Err(CatalogError::BlankIdOutOfRange { line: index, blanks, id: *id });
            }
            if seen[*id] {
                return Err(CatalogError::DuplicateBlankId { line: index, id: *id });
            }
            seen[*id] = true;
        }
    }

    if line.words.len() != blanks {
        return Err(CatalogError::WordCountMismatch {
            line: index,
            blanks,
            words: line.words.len(),
        });
    }
    if line.solution.len() != blanks {
        return Err(CatalogError::SolutionCountMismatch {
            line: index,
            blanks,
            solutions: line.solution.len(),
        });
    }

    // Bank must be a multiset permutation of the solution: each bank word
    // consumes one matching solution token.
    let mut remaining: Vec<&str> = line.solution.iter().map(String::as_str).collect();
    for word in &line.words {
        match remaining.iter().position(|token| token == word) {
            Some(at) => {
                remaining.swap_remove(at);
            }
            None => {
                return Err(CatalogError::WordsNotPermutation {
                    line: index,
                    word: word.clone(),
                });
            }
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Built-in drill content
// ---------------------------------------------------------------------------

impl PuzzleCatalog {
    /// The built-in four-line "hasDuplicate" Python drill.
    ///
    /// Builds the classic set-based duplicate check one statement at a time;
    /// each line repeats the previously completed code as literal text.
    pub fn has_duplicate_drill() -> Self {
        let lines = vec![
            PuzzleLine {
                sentence: vec![
                    Segment::text("def hasDuplicate(self, nums: List[int]) -> bool:\n  "),
                    Segment::blank(0),
                    Segment::text(" = set()\n  for "),
                    Segment::blank(1),
                    Segment::text(" in nums:"),
                ],
                words: vec!["seen".into(), "num".into()],
                hint: "Initialize an empty set to keep track of numbers we've seen, \
                       and start a loop to iterate through each number in the array."
                    .into(),
                solution: vec!["seen".into(), "num".into()],
            },
            PuzzleLine {
                sentence: vec![
                    Segment::text(
                        "def hasDuplicate(self, nums: List[int]) -> bool:\n  seen = set()\n  for num in nums:\n    if ",
                    ),
                    Segment::blank(0),
                    Segment::text(" in "),
                    Segment::blank(1),
                    Segment::text(":"),
                ],
                words: vec!["num".into(), "seen".into()],
                hint: "Check if the current number is already in our set of seen numbers.".into(),
                solution: vec!["num".into(), "seen".into()],
            },
            PuzzleLine {
                sentence: vec![
                    Segment::text(
                        "def hasDuplicate(self, nums: List[int]) -> bool:\n  seen = set()\n  for num in nums:\n    if num in seen:\n      return ",
                    ),
                    Segment::blank(0),
                    Segment::text("\n    seen.add("),
                    Segment::blank(1),
                    Segment::text(")"),
                ],
                words: vec!["True".into(), "num".into()],
                hint: "If we found a duplicate, return True. Otherwise, add the current \
                       number to our set of seen numbers."
                    .into(),
                solution: vec!["True".into(), "num".into()],
            },
            PuzzleLine {
                sentence: vec![
                    Segment::text(
                        "def hasDuplicate(self, nums: List[int]) -> bool:\n  seen = set()\n  for num in nums:\n    if num in seen:\n      return True\n    seen.add(num)\n  return ",
                    ),
                    Segment::blank(0),
                ],
                words: vec!["False".into()],
                hint: "If we've checked all numbers and found no duplicates, return False.".into(),
                solution: vec!["False".into()],
            },
        ];
        PuzzleCatalog::new(lines).expect("built-in drill content is valid")
    }
}

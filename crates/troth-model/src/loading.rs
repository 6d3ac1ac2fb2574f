// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use crate::index::{HospitalIndex, StudentIndex};
use crate::instance::{Instance, InstanceBuilder};
use std::io::{BufRead, BufReader, Read, Write};
use std::path::Path;
use troth_core::math::permutation;

/// Identifies which agent set an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Hospital,
    Student,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Hospital => write!(f, "hospital"),
            Side::Student => write!(f, "student"),
        }
    }
}

/// An error that occurs when a token cannot be parsed as an agent id.
///
/// Carries the offending token and the 1-based line number in the source
/// file, counting blank and comment lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTokenError {
    pub token: String,
    pub line: usize,
}

impl std::fmt::Display for ParseTokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "failed to parse token `{}` on line {}", self.token, self.line)
    }
}

impl std::error::Error for ParseTokenError {}

/// An error that occurs while loading an instance from the text format.
///
/// Every way an input file can be malformed maps to exactly one variant, so
/// callers can both print a precise message and branch on the failure kind.
#[derive(Debug)]
pub enum LoadError {
    /// Reading the underlying source failed.
    Io(std::io::Error),
    /// The input contains no significant lines at all.
    MissingHeader,
    /// The declared number of agents is unusable.
    InvalidSize { found: usize },
    /// The number of significant lines does not match the declared size.
    LineCount { expected: usize, found: usize },
    /// A token is not a valid agent id.
    Parse(ParseTokenError),
    /// A preference list has the wrong number of entries.
    ListLength {
        side: Side,
        agent: usize,
        expected: usize,
        found: usize,
    },
    /// A preference list ranks an id outside the declared agent range.
    IdOutOfRange {
        side: Side,
        agent: usize,
        id: usize,
        limit: usize,
    },
    /// A preference list ranks the same id more than once.
    DuplicateId { side: Side, agent: usize, id: usize },
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Io(err) => write!(f, "io error: {}", err),
            LoadError::MissingHeader => {
                write!(f, "missing header line with the number of agents")
            }
            LoadError::InvalidSize { found } => write!(
                f,
                "invalid number of agents {}: at least one agent per side is required",
                found
            ),
            LoadError::LineCount { expected, found } => write!(
                f,
                "expected {} significant lines but found {}",
                expected, found
            ),
            LoadError::Parse(err) => write!(f, "{}", err),
            LoadError::ListLength {
                side,
                agent,
                expected,
                found,
            } => write!(
                f,
                "preference list of {} {} has {} entries but expected {}",
                side, agent, found, expected
            ),
            LoadError::IdOutOfRange {
                side,
                agent,
                id,
                limit,
            } => write!(f, "{} {} ranks id {} outside 1..={}", side, agent, id, limit),
            LoadError::DuplicateId { side, agent, id } => {
                write!(f, "{} {} ranks id {} more than once", side, agent, id)
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(err) => Some(err),
            LoadError::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(err: std::io::Error) -> Self {
        LoadError::Io(err)
    }
}

impl From<ParseTokenError> for LoadError {
    fn from(err: ParseTokenError) -> Self {
        LoadError::Parse(err)
    }
}

/// Loads matching instances from the plain-text exchange format.
///
/// The format is line-oriented:
/// - the first significant line holds the number of agents `n`,
/// - the next `n` significant lines hold the hospital preference lists,
/// - the final `n` significant lines hold the student preference lists.
///
/// Each preference list contains `n` ids separated by whitespace, most
/// preferred first. All ids are 1-based in the file and converted to
/// 0-based indices on load. Blank lines are ignored everywhere; lines
/// starting with `#` are treated as comments and ignored as well unless
/// disabled via `with_comment_lines`.
///
/// The loader performs all input validation itself, so a successful load
/// always yields a well-formed `Instance`.
///
/// # Examples
///
/// ```rust
/// # use troth_model::loading::InstanceLoader;
/// let input = "2\n1 2\n1 2\n2 1\n1 2\n";
/// let instance = InstanceLoader::new().from_str(input).unwrap();
/// assert_eq!(instance.num_agents(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct InstanceLoader {
    comment_lines: bool,
}

impl Default for InstanceLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl InstanceLoader {
    /// Creates a new loader with default settings (comment lines enabled).
    pub fn new() -> Self {
        InstanceLoader {
            comment_lines: true,
        }
    }

    /// Controls whether lines starting with `#` are skipped as comments.
    ///
    /// When disabled, such lines are parsed like any other line and fail
    /// with a `Parse` error.
    pub fn with_comment_lines(mut self, enabled: bool) -> Self {
        self.comment_lines = enabled;
        self
    }

    /// Loads an instance from a file.
    pub fn from_path<P: AsRef<Path>>(&self, path: P) -> Result<Instance, LoadError> {
        let file = std::fs::File::open(path)?;
        self.from_bufread(BufReader::new(file))
    }

    /// Loads an instance from an arbitrary reader.
    pub fn from_reader<R: Read>(&self, reader: R) -> Result<Instance, LoadError> {
        self.from_bufread(BufReader::new(reader))
    }

    /// Loads an instance from a string slice.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(&self, input: &str) -> Result<Instance, LoadError> {
        self.from_bufread(input.as_bytes())
    }

    /// Loads an instance from a buffered reader.
    ///
    /// This is the workhorse behind the other `from_*` constructors.
    pub fn from_bufread<R: BufRead>(&self, reader: R) -> Result<Instance, LoadError> {
        let lines = self.significant_lines(reader)?;

        let Some((header_line, header)) = lines.first() else {
            return Err(LoadError::MissingHeader);
        };
        let num_agents = header.parse::<usize>().map_err(|_| ParseTokenError {
            token: header.clone(),
            line: *header_line,
        })?;
        if num_agents == 0 {
            return Err(LoadError::InvalidSize { found: num_agents });
        }

        let expected_lines = 2 * num_agents + 1;
        if lines.len() != expected_lines {
            return Err(LoadError::LineCount {
                expected: expected_lines,
                found: lines.len(),
            });
        }

        let mut builder = InstanceBuilder::new(num_agents);
        let mut prefs = Vec::with_capacity(num_agents);

        for agent in 0..num_agents {
            let (line_number, line) = &lines[1 + agent];
            parse_preference_line(
                line,
                *line_number,
                num_agents,
                Side::Hospital,
                agent,
                &mut prefs,
            )?;
            let row: Vec<StudentIndex> = prefs.iter().map(|&id| StudentIndex::new(id)).collect();
            builder.set_hospital_preferences(HospitalIndex::new(agent), &row);
        }

        for agent in 0..num_agents {
            let (line_number, line) = &lines[1 + num_agents + agent];
            parse_preference_line(
                line,
                *line_number,
                num_agents,
                Side::Student,
                agent,
                &mut prefs,
            )?;
            let row: Vec<HospitalIndex> = prefs.iter().map(|&id| HospitalIndex::new(id)).collect();
            builder.set_student_preferences(StudentIndex::new(agent), &row);
        }

        // Every list passed the length, range and duplicate checks above,
        // so the permutation asserts inside build cannot fire.
        Ok(builder.build())
    }

    fn significant_lines<R: BufRead>(&self, reader: R) -> Result<Vec<(usize, String)>, LoadError> {
        let mut lines = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            if self.comment_lines && trimmed.starts_with('#') {
                continue;
            }
            lines.push((index + 1, trimmed.to_string()));
        }
        Ok(lines)
    }
}

/// Parses one preference line into 0-based ids, validating length, range
/// and uniqueness. `agent` is the 0-based index of the list's owner; error
/// variants report it 1-based to match the file format.
fn parse_preference_line(
    line: &str,
    line_number: usize,
    num_agents: usize,
    side: Side,
    agent: usize,
    out: &mut Vec<usize>,
) -> Result<(), LoadError> {
    out.clear();
    for token in line.split_whitespace() {
        let id = token.parse::<usize>().map_err(|_| ParseTokenError {
            token: token.to_string(),
            line: line_number,
        })?;
        if id < 1 || id > num_agents {
            return Err(LoadError::IdOutOfRange {
                side,
                agent: agent + 1,
                id,
                limit: num_agents,
            });
        }
        out.push(id - 1);
    }

    if out.len() != num_agents {
        return Err(LoadError::ListLength {
            side,
            agent: agent + 1,
            expected: num_agents,
            found: out.len(),
        });
    }

    if let Some(duplicate) = permutation::first_duplicate(out) {
        return Err(LoadError::DuplicateId {
            side,
            agent: agent + 1,
            id: duplicate + 1,
        });
    }

    Ok(())
}

/// Writes an instance in the plain-text exchange format.
///
/// The output round-trips through `InstanceLoader`: the declared size on
/// the first line, then the hospital lists, then the student lists, all
/// ids 1-based.
pub fn write_instance<W: Write>(instance: &Instance, writer: &mut W) -> std::io::Result<()> {
    let n = instance.num_agents();
    writeln!(writer, "{}", n)?;
    for h in 0..n {
        let row: Vec<String> = instance
            .hospital_preferences(HospitalIndex::new(h))
            .iter()
            .map(|student| (student.get() + 1).to_string())
            .collect();
        writeln!(writer, "{}", row.join(" "))?;
    }
    for s in 0..n {
        let row: Vec<String> = instance
            .student_preferences(StudentIndex::new(s))
            .iter()
            .map(|hospital| (hospital.get() + 1).to_string())
            .collect();
        writeln!(writer, "{}", row.join(" "))?;
    }
    Ok(())
}

/// Writes an instance to a file in the plain-text exchange format.
pub fn write_instance_to_path<P: AsRef<Path>>(
    instance: &Instance,
    path: P,
) -> std::io::Result<()> {
    let file = std::fs::File::create(path)?;
    let mut writer = std::io::BufWriter::new(file);
    write_instance(instance, &mut writer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hi(i: usize) -> HospitalIndex {
        HospitalIndex::new(i)
    }

    fn si(i: usize) -> StudentIndex {
        StudentIndex::new(i)
    }

    const SMALL_INSTANCE: &str = r"3
2 1 3
1 2 3
1 3 2
1 2 3
3 1 2
2 3 1
";

    #[test]
    fn test_from_str_parses_small_instance() {
        let instance = InstanceLoader::new().from_str(SMALL_INSTANCE).unwrap();
        assert_eq!(instance.num_agents(), 3);
        assert_eq!(instance.hospital_preferences(hi(0)), &[si(1), si(0), si(2)]);
        assert_eq!(instance.hospital_preferences(hi(2)), &[si(0), si(2), si(1)]);
        assert_eq!(instance.student_preferences(si(1)), &[hi(2), hi(0), hi(1)]);
        assert_eq!(instance.student_preferences(si(2)), &[hi(1), hi(2), hi(0)]);
    }

    #[test]
    fn test_blank_lines_are_ignored() {
        let input = "\n2\n\n1 2\n1 2\n\n\n2 1\n1 2\n\n";
        let instance = InstanceLoader::new().from_str(input).unwrap();
        assert_eq!(instance.num_agents(), 2);
        assert_eq!(instance.student_preferences(si(0)), &[hi(1), hi(0)]);
    }

    #[test]
    fn test_comment_lines_are_ignored() {
        let input = "# two agents per side\n2\n1 2\n# hospital lists above\n1 2\n2 1\n1 2\n";
        let instance = InstanceLoader::new().from_str(input).unwrap();
        assert_eq!(instance.num_agents(), 2);
    }

    #[test]
    fn test_comment_lines_can_be_disabled() {
        let input = "# header\n2\n1 2\n1 2\n2 1\n1 2\n";
        let result = InstanceLoader::new()
            .with_comment_lines(false)
            .from_str(input);
        assert!(matches!(
            result,
            Err(LoadError::Parse(ParseTokenError { line: 1, .. }))
        ));
    }

    #[test]
    fn test_empty_input_is_missing_header() {
        let result = InstanceLoader::new().from_str("");
        assert!(matches!(result, Err(LoadError::MissingHeader)));

        let result = InstanceLoader::new().from_str("\n\n   \n");
        assert!(matches!(result, Err(LoadError::MissingHeader)));
    }

    #[test]
    fn test_zero_agents_is_invalid() {
        let result = InstanceLoader::new().from_str("0\n");
        assert!(matches!(result, Err(LoadError::InvalidSize { found: 0 })));
    }

    #[test]
    fn test_non_numeric_header() {
        let result = InstanceLoader::new().from_str("three\n1 2\n");
        assert!(matches!(
            result,
            Err(LoadError::Parse(ParseTokenError { line: 1, .. }))
        ));
    }

    #[test]
    fn test_wrong_line_count() {
        // Declares 3 agents but provides only 5 preference lists.
        let input = "3\n1 2 3\n1 2 3\n1 2 3\n1 2 3\n1 2 3\n";
        let result = InstanceLoader::new().from_str(input);
        assert!(matches!(
            result,
            Err(LoadError::LineCount {
                expected: 7,
                found: 6
            })
        ));
    }

    #[test]
    fn test_non_numeric_token_reports_line() {
        let input = "2\n1 2\n1 x\n2 1\n1 2\n";
        let result = InstanceLoader::new().from_str(input);
        match result {
            Err(LoadError::Parse(err)) => {
                assert_eq!(err.token, "x");
                assert_eq!(err.line, 3);
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_list_length_mismatch() {
        let input = "2\n1 2\n1\n2 1\n1 2\n";
        let result = InstanceLoader::new().from_str(input);
        assert!(matches!(
            result,
            Err(LoadError::ListLength {
                side: Side::Hospital,
                agent: 2,
                expected: 2,
                found: 1
            })
        ));
    }

    #[test]
    fn test_id_out_of_range() {
        let input = "2\n1 2\n1 3\n2 1\n1 2\n";
        let result = InstanceLoader::new().from_str(input);
        assert!(matches!(
            result,
            Err(LoadError::IdOutOfRange {
                side: Side::Hospital,
                agent: 2,
                id: 3,
                limit: 2
            })
        ));
    }

    #[test]
    fn test_duplicate_id() {
        let input = "2\n1 2\n1 2\n1 1\n1 2\n";
        let result = InstanceLoader::new().from_str(input);
        assert!(matches!(
            result,
            Err(LoadError::DuplicateId {
                side: Side::Student,
                agent: 1,
                id: 1
            })
        ));
    }

    #[test]
    fn test_written_instance_round_trips() {
        let instance = InstanceLoader::new().from_str(SMALL_INSTANCE).unwrap();
        let mut buffer = Vec::new();
        write_instance(&instance, &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text, SMALL_INSTANCE);
    }

    #[test]
    fn test_error_messages() {
        let err = LoadError::DuplicateId {
            side: Side::Student,
            agent: 3,
            id: 1,
        };
        assert_eq!(format!("{}", err), "student 3 ranks id 1 more than once");

        let err = LoadError::LineCount {
            expected: 7,
            found: 6,
        };
        assert_eq!(
            format!("{}", err),
            "expected 7 significant lines but found 6"
        );

        let err = LoadError::Parse(ParseTokenError {
            token: "x".to_string(),
            line: 3,
        });
        assert_eq!(format!("{}", err), "failed to parse token `x` on line 3");
    }
}

use crate::component::course::{normalize_code, Course};
use crate::index::tree::Tree;
use std::fmt;
use std::fs;
use std::io;
use std::io::{BufRead, BufReader};

static FIELD_DELIMITER: char = ',';

#[derive(Debug, Clone)]
pub struct File {
    /* definition */
// Ideally, File is a stateless struct
}

#[derive(Debug, PartialEq, Clone)]
pub enum FileError {
    Io,
    SourceUnreadable(String),
}

impl From<io::Error> for FileError {
    fn from(_err: io::Error) -> FileError {
        FileError::Io
    }
}

impl fmt::Display for FileError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            FileError::Io => write!(f, "Unable to read file"),
            FileError::SourceUnreadable(_) => write!(f, "Unable to open file"),
        }
    }
}

/// Why a source line could not become a course.
#[derive(Debug, PartialEq, Clone)]
pub enum RecordError {
    MissingName,
    EmptyCode,
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            RecordError::MissingName => write!(f, "expected at least a code and a name"),
            RecordError::EmptyCode => write!(f, "course code is empty"),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Default)]
pub struct LoadSummary {
    pub loaded: usize,
    /// (1-based line number, reason)
    pub skipped: Vec<(usize, RecordError)>,
}

impl File {
    /// Read a course source and insert every well-formed line into `tree`.
    ///
    /// Line format: `code,name[,prereq]*`. Malformed lines are skipped and
    /// listed in the summary, the rest of the source is still loaded.
    pub fn load_courses<T: Tree<Course>>(
        path: &str,
        tree: &mut T,
    ) -> Result<LoadSummary, FileError> {
        let source = fs::File::open(path).map_err(|e| {
            warn!("cannot open `{}`: {}", path, e);
            FileError::SourceUnreadable(path.to_string())
        })?;

        let mut summary = LoadSummary::default();
        let mut reader = BufReader::new(source);
        let mut buf = Vec::new();
        let mut line_no = 0;
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            line_no += 1;

            // bytes that are not UTF-8 (Latin-1 titles) are replaced, the line still loads
            let line = String::from_utf8_lossy(&buf);
            match File::parse_line(line.trim_end_matches('\n')) {
                Ok(Some(course)) => {
                    tree.insert(course);
                    summary.loaded += 1;
                }
                Ok(None) => {}
                Err(e) => {
                    warn!("{}:{}: bad record skipped: {}", path, line_no, e);
                    summary.skipped.push((line_no, e));
                }
            }
        }

        info!(
            "loaded {} courses from `{}`, skipped {}",
            summary.loaded,
            path,
            summary.skipped.len()
        );
        Ok(summary)
    }

    /// Parse one source line. Blank lines give `Ok(None)`.
    pub fn parse_line(line: &str) -> Result<Option<Course>, RecordError> {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            return Ok(None);
        }

        let fields: Vec<&str> = line.split(FIELD_DELIMITER).map(|s| s.trim()).collect();
        if fields.len() < 2 {
            return Err(RecordError::MissingName);
        }
        if fields[0].is_empty() {
            return Err(RecordError::EmptyCode);
        }

        // trailing empty fields are padding, not prerequisites
        let prereqs: Vec<&str> = fields[2..].iter().cloned().filter(|p| !p.is_empty()).collect();
        Ok(Some(Course::with_prereqs(&normalize_code(fields[0]), fields[1], &prereqs)))
    }
}

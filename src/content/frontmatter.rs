//! Front-matter field extraction
//!
//! Only `title` and `description` are ever read, so the block is scanned
//! line by line with a tiny classifier instead of a YAML parser. The scan
//! stops at the closing `---` and never reads the post body.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::error::{Error, FrontMatterFault, Result};

/// Delimiter line opening and closing the block
const DELIMITER: &str = "---";

/// Which fields the caller needs from the block
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Wants {
    pub title: bool,
    pub description: bool,
}

impl Wants {
    /// Request both fields
    pub fn all() -> Self {
        Self {
            title: true,
            description: true,
        }
    }

    /// True when nothing has to be read
    pub fn is_empty(&self) -> bool {
        !self.title && !self.description
    }
}

/// Fields extracted from a front-matter block
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl FrontMatter {
    /// Extract the requested fields from the file at `path`
    pub fn extract<P: AsRef<Path>>(path: P, wants: Wants) -> Result<Self> {
        let path = path.as_ref();
        let reader = BufReader::new(File::open(path)?);
        let mut scanner = Scanner::new(wants);

        for line in reader.lines() {
            let line = line.map_err(|e| match e.kind() {
                io::ErrorKind::InvalidData => {
                    Error::malformed(path, FrontMatterFault::InvalidUtf8)
                }
                _ => Error::Io(e),
            })?;
            match scanner.feed(&line) {
                Ok(Step::Continue) => {}
                Ok(Step::Done) => {
                    tracing::debug!("Read front-matter of {:?}: {:?}", path, scanner.found);
                    return Ok(scanner.found);
                }
                Err(fault) => return Err(Error::malformed(path, fault)),
            }
        }

        Err(Error::malformed(path, scanner.fault_at_eof()))
    }

    /// Extract the requested fields from in-memory content
    pub fn parse(content: &str, wants: Wants) -> std::result::Result<Self, FrontMatterFault> {
        let mut scanner = Scanner::new(wants);
        for line in content.lines() {
            if let Step::Done = scanner.feed(line)? {
                return Ok(scanner.found);
            }
        }
        Err(scanner.fault_at_eof())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Key {
    Title,
    Description,
}

/// A classified front-matter line
#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    Delimiter,
    Field(Key, &'a str),
    Other,
}

impl<'a> Line<'a> {
    fn classify(line: &'a str) -> Self {
        if line.trim_end() == DELIMITER {
            return Line::Delimiter;
        }

        let key = if line.starts_with("title") {
            Key::Title
        } else if line.starts_with("description") {
            Key::Description
        } else {
            return Line::Other;
        };

        // Everything after the first colon, further colons included
        match line.split_once(':') {
            Some((_, value)) => Line::Field(key, value.trim()),
            None => Line::Other,
        }
    }
}

enum Step {
    Continue,
    Done,
}

struct Scanner {
    wants: Wants,
    found: FrontMatter,
    opened: bool,
}

impl Scanner {
    fn new(wants: Wants) -> Self {
        Self {
            wants,
            found: FrontMatter::default(),
            opened: false,
        }
    }

    fn feed(&mut self, line: &str) -> std::result::Result<Step, FrontMatterFault> {
        let line = Line::classify(line);

        if !self.opened {
            return match line {
                Line::Delimiter => {
                    self.opened = true;
                    Ok(Step::Continue)
                }
                _ => Err(FrontMatterFault::MissingOpening),
            };
        }

        match line {
            Line::Field(Key::Title, value) if self.wants.title && self.found.title.is_none() => {
                self.found.title = Some(value.to_string());
            }
            Line::Field(Key::Description, value)
                if self.wants.description && self.found.description.is_none() =>
            {
                self.found.description = Some(value.to_string());
            }
            Line::Delimiter => {
                let missing = self.missing();
                if !missing.is_empty() {
                    return Err(FrontMatterFault::MissingFields(missing));
                }
                return Ok(Step::Done);
            }
            _ => {}
        }

        Ok(Step::Continue)
    }

    fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.wants.title && self.found.title.is_none() {
            missing.push("title");
        }
        if self.wants.description && self.found.description.is_none() {
            missing.push("description");
        }
        missing
    }

    fn fault_at_eof(&self) -> FrontMatterFault {
        if self.opened {
            FrontMatterFault::Unterminated
        } else {
            FrontMatterFault::MissingOpening
        }
    }
}

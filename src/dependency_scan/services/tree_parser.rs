use crate::dependency_scan::domain::DependencyCoordinate;
use std::io::{self, BufRead};

/// Minimum number of colon-separated fields for a line to be a coordinate
const MIN_COORDINATE_FIELDS: usize = 4;

/// Glyphs Maven uses to draw the dependency tree
const TREE_GLYPHS: [&str; 3] = ["|", "+-", "\\-"];

/// DependencyTreeParser extracts coordinates from `mvn dependency:tree` text output
///
/// The text format of the dependency plugin is not a stable contract, so this is
/// a tolerant line matcher rather than a grammar:
///
/// 1. Remove the tree glyphs `|`, `+-` and `\-`, then every whitespace character.
/// 2. Split what remains on `:`.
/// 3. Four or more fields yield `groupId:artifactId:packaging:version`
///    taken from the first four fields; anything after (scope, classifier)
///    is ignored. Fewer fields mean the line is a header or continuation
///    and is skipped.
///
/// Output order follows input order. A dependency printed at several depths
/// of the tree is reported once per occurrence.
pub struct DependencyTreeParser;

impl DependencyTreeParser {
    /// Parses every line of the reader
    ///
    /// # Errors
    /// Only an I/O failure of the reader itself is an error. Malformed lines
    /// are skipped.
    pub fn parse<R: BufRead>(mut reader: R) -> io::Result<Vec<DependencyCoordinate>> {
        let mut coordinates = Vec::new();
        let mut buffer = Vec::new();

        loop {
            buffer.clear();
            if reader.read_until(b'\n', &mut buffer)? == 0 {
                break;
            }
            let line = String::from_utf8_lossy(&buffer);
            if let Some(coordinate) = Self::parse_line(&line) {
                coordinates.push(coordinate);
            }
        }

        Ok(coordinates)
    }

    /// Parses a single tree line, returning `None` when it is not a coordinate
    pub fn parse_line(line: &str) -> Option<DependencyCoordinate> {
        let stripped = Self::strip_decoration(line);
        let fields: Vec<&str> = stripped.split(':').collect();

        if fields.len() < MIN_COORDINATE_FIELDS {
            return None;
        }

        Some(DependencyCoordinate::new(
            fields[0], fields[1], fields[2], fields[3],
        ))
    }

    fn strip_decoration(line: &str) -> String {
        let without_glyphs = TREE_GLYPHS
            .iter()
            .fold(line.to_string(), |acc, glyph| acc.replace(glyph, ""));

        without_glyphs
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect()
    }
}

//! Stamped header format
//!
//! ```text
//! /* <40-char hash>
//!  * This file is automatically generated by <tool>. */
//!
//! <body>
//! ```

/// Literal that opens every stamped file
pub const MARKER: &str = "/* ";

/// Length of the hash field, in characters
pub const HASH_LEN: usize = 40;

/// Tool name written into headers when none is configured
pub const DEFAULT_TOOL_NAME: &str = "genstamp";

/// Formats generated content with a source hash header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stamper {
    tool_name: String,
}

impl Default for Stamper {
    fn default() -> Self {
        Self::new(DEFAULT_TOOL_NAME)
    }
}

impl Stamper {
    pub fn new(tool_name: impl Into<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
        }
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    /// Prepend the header carrying `source_hash` to `content`
    ///
    /// The hash is not validated here; `content` is kept byte for byte.
    pub fn stamp(&self, source_hash: &str, content: &str) -> String {
        format!(
            "{}{}\n * This file is automatically generated by {}. */\n\n{}",
            MARKER, source_hash, self.tool_name, content
        )
    }
}

/// Stamp `content` using the default tool name
pub fn with_hash(source_hash: &str, content: &str) -> String {
    Stamper::default().stamp(source_hash, content)
}

/// Extract the hash from the leading text of a stamped file
///
/// `leading` only needs to hold the marker, the hash field and the line
/// ending after it. The field may end with `\n`, `\r\n`, or, when `at_eof`
/// says `leading` is the whole file, the end of the text. Returns `None`
/// unless the text starts with [`MARKER`] and the field is exactly
/// [`HASH_LEN`] characters.
pub fn parse_hash(leading: &str, at_eof: bool) -> Option<&str> {
    let rest = leading.strip_prefix(MARKER)?;
    let hash = match rest.split_once('\n') {
        Some((line, _)) => line.strip_suffix('\r').unwrap_or(line),
        None if at_eof => rest,
        None => return None,
    };
    (hash.chars().count() == HASH_LEN).then_some(hash)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hash_of(c: char) -> String {
        std::iter::repeat(c).take(HASH_LEN).collect()
    }

    #[test]
    fn test_stamp_layout() {
        let hash = hash_of('a');
        let stamped = with_hash(&hash, "export const x = 1;");

        assert_eq!(&stamped[..3], "/* ");
        assert_eq!(&stamped[3..43], hash);
        assert!(stamped.ends_with("export const x = 1;"));
        assert_eq!(
            stamped,
            format!(
                "/* {}\n * This file is automatically generated by genstamp. */\n\nexport const x = 1;",
                hash
            )
        );
    }

    #[test]
    fn test_stamp_uses_tool_name() {
        let stamper = Stamper::new("graphql-let");
        let stamped = stamper.stamp(&hash_of('0'), "body");

        assert_eq!(stamper.tool_name(), "graphql-let");
        assert!(stamped.contains("automatically generated by graphql-let. */\n\nbody"));
    }

    #[test]
    fn test_stamp_keeps_content_verbatim() {
        let content = "\r\n/* not a header */\n\u{1F600}\n\n";
        let stamped = with_hash(&hash_of('f'), content);
        assert!(stamped.ends_with(content));
    }

    #[test]
    fn test_parse_hash_from_stamped() {
        let hash = "0123456789abcdef0123456789abcdef01234567";
        let stamped = with_hash(hash, "type Query = {};");
        assert_eq!(parse_hash(&stamped, false), Some(hash));
    }

    #[test]
    fn test_parse_hash_wrong_length() {
        let short = with_hash(&"a".repeat(39), "");
        let long = with_hash(&"a".repeat(41), "");
        assert_eq!(parse_hash(&short, false), None);
        assert_eq!(parse_hash(&long, false), None);
    }

    #[test]
    fn test_parse_hash_requires_marker() {
        let text = format!("// {}\n", hash_of('a'));
        assert_eq!(parse_hash(&text, false), None);
        assert_eq!(parse_hash("", true), None);
        assert_eq!(parse_hash("/* ", true), None);
    }

    #[test]
    fn test_parse_hash_field_ending_at_eof() {
        let hash = hash_of('a');
        let text = format!("/* {}", hash);
        assert_eq!(parse_hash(&text, true), Some(hash.as_str()));

        // Not the whole file: more characters may follow
        assert_eq!(parse_hash(&text, false), None);

        let long = format!("/* {}b", hash);
        assert_eq!(parse_hash(&long, true), None);
    }

    #[test]
    fn test_parse_hash_crlf_header() {
        let hash = hash_of('c');
        let text = format!("/* {}\r\n * This file is automatically generated", hash);
        assert_eq!(parse_hash(&text, false), Some(hash.as_str()));

        let long = format!("/* {}c\r\n", hash);
        assert_eq!(parse_hash(&long, false), None);
    }
}

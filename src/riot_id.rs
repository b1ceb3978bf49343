use std::{fmt, str::FromStr};

use crate::ValidationError;

/// Player handle in the `Name#Tag` form.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RiotId {
    pub game_name: String,
    pub tag_line: String,
}

impl RiotId {
    /// Splits `input` at the last `#` and trims both halves.
    ///
    /// Names may contain `#`-free spaces; the tag never contains `#`.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let (name, tag) = input
            .trim()
            .rsplit_once('#')
            .ok_or(ValidationError::MissingSeparator)?;
        let name = name.trim();
        let tag = tag.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if tag.is_empty() {
            return Err(ValidationError::EmptyTag);
        }
        // `.` and `..` would be collapsed out of the request path.
        for part in [name, tag] {
            if is_dot_segment(part) {
                return Err(ValidationError::DotSegment(part.to_owned()));
            }
        }
        Ok(Self {
            game_name: name.to_owned(),
            tag_line: tag.to_owned(),
        })
    }
}

pub(crate) fn is_dot_segment(segment: &str) -> bool {
    matches!(segment, "." | "..")
}

impl FromStr for RiotId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for RiotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.game_name, self.tag_line)
    }
}

#[cfg(test)]
mod tests {
    use super::RiotId;
    use crate::ValidationError;

    #[test]
    fn parses_name_and_tag() {
        let id = RiotId::parse("Player#NA1").expect("valid id");
        assert_eq!(id.game_name, "Player");
        assert_eq!(id.tag_line, "NA1");
        assert_eq!(id.to_string(), "Player#NA1");
    }

    #[test]
    fn trims_and_keeps_inner_spaces() {
        let id: RiotId = "  Hide on bush # KR1 ".parse().expect("valid id");
        assert_eq!(id.game_name, "Hide on bush");
        assert_eq!(id.tag_line, "KR1");
    }

    #[test]
    fn splits_at_last_separator() {
        let id = RiotId::parse("a#b#EUW").expect("valid id");
        assert_eq!(id.game_name, "a#b");
        assert_eq!(id.tag_line, "EUW");
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!(RiotId::parse("Player"), Err(ValidationError::MissingSeparator));
        assert_eq!(RiotId::parse("#NA1"), Err(ValidationError::EmptyName));
        assert_eq!(RiotId::parse("Player# "), Err(ValidationError::EmptyTag));
    }

    #[test]
    fn rejects_dot_segments() {
        assert_eq!(
            RiotId::parse("..#NA1"),
            Err(ValidationError::DotSegment("..".to_owned()))
        );
        assert_eq!(
            RiotId::parse("Player# . "),
            Err(ValidationError::DotSegment(".".to_owned()))
        );
        assert!(RiotId::parse("Mr. Dot#...").is_ok());
    }
}

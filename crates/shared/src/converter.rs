use crate::error::ConvertError;
use crate::models::{RawItem, Story};

/// The only item kind the converter accepts.
pub const STORY_TYPE: &str = "story";

/// Returns true if the string has an absolute, scheme-qualified URL form.
/// Any registered scheme is accepted; relative references are not.
pub(crate) fn is_absolute_url(candidate: &str) -> bool {
    url::Url::parse(candidate).is_ok()
}

/// Validates raw Hacker News items and converts them into [`Story`] values.
///
/// The conversion policy is fixed at construction: whether empty strings are
/// allowed, whether and where to truncate long strings, and the minimum score
/// and comment count a story must have. String lengths are counted in
/// characters, so truncation never splits a UTF-8 sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemConverter {
    empty_strings_allowed: bool,
    enforce_max_string_length: bool,
    max_string_length: usize,
    min_comments: i64,
    min_points: i64,
}

impl ItemConverter {
    /// Creates a converter, rejecting contradictory options up front:
    /// length enforcement with a zero limit, and non-positive minimums.
    pub fn new(
        empty_strings_allowed: bool,
        enforce_max_string_length: bool,
        max_string_length: usize,
        min_comments: i64,
        min_points: i64,
    ) -> Result<Self, ConvertError> {
        if enforce_max_string_length && max_string_length == 0 {
            return Err(ConvertError::InvalidMaxLength);
        }
        if min_comments <= 0 {
            return Err(ConvertError::BelowMinimum {
                min: 1,
                actual: min_comments,
            });
        }
        if min_points <= 0 {
            return Err(ConvertError::BelowMinimum {
                min: 1,
                actual: min_points,
            });
        }

        Ok(Self {
            empty_strings_allowed,
            enforce_max_string_length,
            max_string_length,
            min_comments,
            min_points,
        })
    }

    /// Validates a string against the configured policy. A string longer
    /// than the configured maximum is truncated to exactly that many
    /// characters; truncation is not an error.
    pub fn validate_str(&self, s: &str) -> Result<String, ConvertError> {
        let len = s.chars().count();

        if !self.empty_strings_allowed && len == 0 {
            return Err(ConvertError::EmptyString);
        }

        if self.enforce_max_string_length && len > self.max_string_length {
            if self.max_string_length == 0 {
                return Err(ConvertError::InvalidMaxLength);
            }
            return Ok(s.chars().take(self.max_string_length).collect());
        }

        Ok(s.to_string())
    }

    fn points(&self, item: &RawItem) -> Result<i64, ConvertError> {
        if item.score < self.min_points {
            return Err(ConvertError::BelowMinimum {
                min: self.min_points,
                actual: item.score,
            });
        }
        Ok(item.score)
    }

    fn comments(&self, item: &RawItem) -> Result<i64, ConvertError> {
        if item.descendants < self.min_comments {
            return Err(ConvertError::BelowMinimum {
                min: self.min_comments,
                actual: item.descendants,
            });
        }
        Ok(item.descendants)
    }

    /// Converts a raw item into a [`Story`], assigning the given 1-based
    /// rank. Checks run in a fixed order and the first failure wins: item
    /// kind, rank, title, author, URL, score, comment count.
    pub fn convert(&self, rank: i64, item: &RawItem) -> Result<Story, ConvertError> {
        if item.item_type != STORY_TYPE {
            return Err(ConvertError::ItemKindMismatch {
                expected: STORY_TYPE,
                actual: item.item_type.clone(),
            });
        }

        if rank < 1 {
            return Err(ConvertError::BelowMinimum {
                min: 1,
                actual: rank,
            });
        }

        let title = self.validate_str(&item.title)?;
        let author = self.validate_str(&item.by)?;

        if !is_absolute_url(&item.url) {
            return Err(ConvertError::InvalidUrl(item.url.clone()));
        }

        let points = self.points(item)?;
        let comments = self.comments(item)?;

        Ok(Story {
            id: item.id,
            title,
            url: item.url.clone(),
            author,
            points,
            comments,
            rank,
        })
    }
}

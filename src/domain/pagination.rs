//! Pagination parameters for listing contacts.

use super::errors::ValidationError;

/// Page used when the caller does not supply one.
pub const DEFAULT_PAGE: u32 = 1;

/// Page size used when the caller does not supply one.
pub const DEFAULT_LIMIT: u32 = 10;

/// A validated page/limit pair.
///
/// Both values are at least 1. The limit never exceeds the cap it was
/// parsed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: u32,
    limit: u32,
}

impl Pagination {
    /// Build pagination from already-typed values.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPageParam` if either value is zero.
    pub fn new(page: u32, limit: u32, max_limit: u32) -> Result<Self, ValidationError> {
        if page == 0 {
            return Err(ValidationError::InvalidPageParam {
                param: "page",
                value: page.to_string(),
            });
        }
        if limit == 0 {
            return Err(ValidationError::InvalidPageParam {
                param: "limit",
                value: limit.to_string(),
            });
        }

        Ok(Self {
            page,
            limit: limit.min(max_limit.max(1)),
        })
    }

    /// Parse raw query-string values, applying defaults for absent ones.
    ///
    /// Values above `max_limit` are clamped; anything that is not a
    /// positive integer is rejected.
    pub fn from_query(
        page: Option<&str>,
        limit: Option<&str>,
        max_limit: u32,
    ) -> Result<Self, ValidationError> {
        let page = parse_param("page", page, DEFAULT_PAGE)?;
        let limit = parse_param("limit", limit, DEFAULT_LIMIT)?;
        Self::new(page, limit, max_limit)
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Number of rows to skip: `(page - 1) * limit`.
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.limit)
    }
}

fn parse_param(
    param: &'static str,
    raw: Option<&str>,
    default: u32,
) -> Result<u32, ValidationError> {
    let Some(raw) = raw else {
        return Ok(default);
    };

    match raw.trim().parse::<u32>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(ValidationError::InvalidPageParam {
            param,
            value: raw.to_string(),
        }),
    }
}

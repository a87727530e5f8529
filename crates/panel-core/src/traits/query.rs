//! Query parameters shared by the repositories

/// Page size of the log listing
pub const LOG_PAGE_SIZE: u32 = 15;

/// One-based page request
///
/// Repositories return up to `per_page + 1` rows; the extra row only signals
/// that a following page exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub per_page: u32,
}

impl PageRequest {
    /// Pages below 1 are treated as page 1
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.max(1),
        }
    }

    #[inline]
    pub fn offset(&self) -> i64 {
        i64::from(self.page - 1) * i64::from(self.per_page)
    }

    /// Rows to fetch, including the look-ahead row
    #[inline]
    pub fn fetch_limit(&self) -> i64 {
        i64::from(self.per_page) + 1
    }

    pub fn prev_page(&self) -> Option<u32> {
        (self.page > 1).then(|| self.page - 1)
    }

    /// Following page when more rows exist, `None` past the last representable page
    pub fn next_page(&self, has_more: bool) -> Option<u32> {
        has_more.then(|| self.page.checked_add(1)).flatten()
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1, LOG_PAGE_SIZE)
    }
}

/// Exact or substring text match
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextMatch {
    Exact(String),
    Contains(String),
}

impl TextMatch {
    /// A leading `=` selects an exact match, anything else a substring match
    pub fn parse(raw: &str) -> Self {
        match raw.strip_prefix('=') {
            Some(exact) => Self::Exact(exact.to_string()),
            None => Self::Contains(raw.to_string()),
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Self::Exact(value) | Self::Contains(value) => value,
        }
    }
}

/// Filters of the log listing, combined with AND
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogFilter {
    /// Any of these identifiers (exact)
    pub identifiers: Vec<String>,
    /// Strictly before this unix timestamp
    pub before: Option<i64>,
    /// Strictly after this unix timestamp
    pub after: Option<i64>,
    /// Any of these server ids, matched as ` [<id>] ` in the details
    pub servers: Vec<i64>,
    /// Any of these actions
    pub actions: Vec<TextMatch>,
    pub details: Option<TextMatch>,
}

impl LogFilter {
    /// Build a filter from the raw query string values
    pub fn from_raw(
        identifier: Option<&str>,
        before: Option<&str>,
        after: Option<&str>,
        server: Option<&str>,
        action: Option<&str>,
        details: Option<&str>,
    ) -> Self {
        Self {
            identifiers: identifier.map(split_values).unwrap_or_default(),
            before: before.and_then(parse_timestamp),
            after: after.and_then(parse_timestamp),
            servers: server
                .map(|raw| split_values(raw).iter().map(|s| parse_server(s)).collect())
                .unwrap_or_default(),
            actions: action
                .map(|raw| split_values(raw).iter().map(|s| TextMatch::parse(s)).collect())
                .unwrap_or_default(),
            details: details
                .filter(|raw| !raw.is_empty())
                .map(TextMatch::parse),
        }
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Split a comma separated value, trimming entries and dropping empty ones
pub fn split_values(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_timestamp(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    raw.parse().ok()
}

// Leading integer prefix ("3abc" is 3, "1.5" is 1); no digits means server 0
fn parse_server(raw: &str) -> i64 {
    let raw = raw.trim_start();
    let (negative, rest) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };

    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return 0;
    }

    match rest[..digits].parse::<i64>() {
        Ok(value) if negative => -value,
        Ok(value) => value,
        Err(_) if negative => i64::MIN,
        Err(_) => i64::MAX,
    }
}

/// Player search by name or steam identifier
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerSearch {
    pub query: Option<String>,
}

impl PlayerSearch {
    pub fn new(query: Option<&str>) -> Self {
        Self {
            query: query
                .map(str::trim)
                .filter(|q| !q.is_empty())
                .map(str::to_string),
        }
    }

    /// Whether the query should match the steam identifier exactly
    pub fn is_steam_lookup(&self) -> bool {
        self.query
            .as_deref()
            .is_some_and(|q| q.starts_with("steam:"))
    }
}

//! Query-string construction for the persons list endpoint.
//!
//! Filter values arrive as raw text from form inputs, so they are carried
//! as strings and validated here, at the point the URL is built.

use crate::error::{PawbookError, Result};

/// Optional query parameters for `GET /persons`.
///
/// `None` and empty-string values are dropped before validation; surviving
/// values must parse as non-negative numbers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersonListParams {
    pub width: Option<String>,
    pub height: Option<String>,
    pub page_index: Option<String>,
}

impl PersonListParams {
    /// Params carrying only a page index.
    pub fn page(index: u32) -> Self {
        Self {
            page_index: Some(index.to_string()),
            ..Self::default()
        }
    }
}

/// Append validated query parameters to `base`.
///
/// Keys are emitted in declaration order (`width`, `height`, `pageIndex`),
/// `?key=value` for the first survivor and `&key=value` after. Values are
/// appended as-is, without percent-encoding; the literal output is part of
/// the backend contract. Returns `base` unchanged when no key survives.
pub fn build_list_url(base: &str, params: Option<&PersonListParams>) -> Result<String> {
    let mut url = base.to_string();
    let Some(params) = params else {
        return Ok(url);
    };

    let entries = [
        ("width", params.width.as_deref()),
        ("height", params.height.as_deref()),
        ("pageIndex", params.page_index.as_deref()),
    ];

    let mut appended = 0usize;
    for (key, value) in entries {
        let Some(value) = value else { continue };
        if value.is_empty() {
            continue;
        }

        let number: f64 = value
            .parse()
            .map_err(|_| PawbookError::validation(key, "is not a number"))?;
        // f64::parse accepts the literal "NaN"; the contract does not.
        if number.is_nan() {
            return Err(PawbookError::validation(key, "is not a number"));
        }
        if number < 0.0 {
            return Err(PawbookError::validation(key, "cannot be less than 0"));
        }

        url.push(if appended == 0 { '?' } else { '&' });
        url.push_str(key);
        url.push('=');
        url.push_str(value);
        appended += 1;
    }

    Ok(url)
}

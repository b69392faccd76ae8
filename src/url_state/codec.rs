//! Query parameter encoding and decoding

use super::types::{UrlState, CLASSIFICATION_PARAM, PAGE_PARAM, ROWS_PARAM, SEARCH_PARAM};
use crate::classification::{parse, to_token, Classification};
use crate::error::{Error, Result};
use crate::pagination::RowsPerPage;
use crate::search::SearchQuery;
use crate::types::{QueryParams, QueryValue};
use tracing::debug;
use url::{form_urlencoded, Url};

/// Parameters read by the decoder
const STATE_PARAMS: [&str; 4] = [PAGE_PARAM, ROWS_PARAM, CLASSIFICATION_PARAM, SEARCH_PARAM];

// ============================================================================
// Encoding
// ============================================================================

/// Encode state as a flat parameter map
///
/// `page` and `rows` are always written; `classification` and `q` only when set.
pub fn encode(state: &UrlState) -> QueryParams {
    let mut params = QueryParams::new();
    params.insert(PAGE_PARAM.to_string(), QueryValue::Number(state.page));
    params.insert(ROWS_PARAM.to_string(), QueryValue::Number(state.rows.get()));

    if let Some(classification) = state.classification.filter(|c| !c.is_fallback()) {
        params.insert(
            CLASSIFICATION_PARAM.to_string(),
            QueryValue::Text(to_token(classification.category())),
        );
    }

    if let Some(search) = state.search.as_str() {
        params.insert(SEARCH_PARAM.to_string(), QueryValue::Text(search.to_string()));
    }

    params
}

/// Encode state as a query string (without the leading `?`)
pub fn encode_query(state: &UrlState) -> String {
    query_string(&encode(state))
}

pub(super) fn query_string(params: &QueryParams) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in params {
        serializer.append_pair(key, &value.as_query_str());
    }
    serializer.finish()
}

// ============================================================================
// Decoding
// ============================================================================

/// Decode state from a parameter map; absent parameters take their defaults
///
/// Same as [`decode_with`] with the default of 10 rows per page.
pub fn decode(params: &QueryParams) -> Result<UrlState> {
    decode_with(params, RowsPerPage::default())
}

/// Decode state, using `default_rows` when `rows` is absent
///
/// # Errors
///
/// `MalformedQueryParameter` for a `page` that is not a positive integer or a
/// `rows` that is not a number, `InvalidRowsPerPage` for a number outside
/// the allowed set.
pub fn decode_with(params: &QueryParams, default_rows: RowsPerPage) -> Result<UrlState> {
    let page = match params.get(PAGE_PARAM) {
        None => 1,
        Some(value) => decode_page(value)?,
    };

    let rows = match params.get(ROWS_PARAM) {
        None => default_rows,
        Some(value) => RowsPerPage::try_from(decode_number(ROWS_PARAM, value)?)?,
    };

    let classification = params
        .get(CLASSIFICATION_PARAM)
        .and_then(|value| decode_classification(&value.as_query_str()));

    let search = SearchQuery::new(params.get(SEARCH_PARAM).map(QueryValue::as_query_str));

    Ok(UrlState {
        page,
        rows,
        classification,
        search,
    })
}

/// Decode state from a raw query string, with or without the leading `?`
pub fn decode_query(query: &str) -> Result<UrlState> {
    decode(&parse_query(query)?)
}

/// Split a raw query string into a parameter map
///
/// Every value is kept as text. A state parameter given twice is an error;
/// other repeated parameters keep their first value.
pub fn parse_query(query: &str) -> Result<QueryParams> {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut params = QueryParams::new();

    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        if params.contains_key(&*key) {
            if STATE_PARAMS.contains(&&*key) {
                return Err(Error::repeated(key));
            }
            continue;
        }
        params.insert(key.into_owned(), QueryValue::Text(value.into_owned()));
    }

    Ok(params)
}

/// Decode state from a full URL's query
pub fn decode_url(url: &Url) -> Result<UrlState> {
    decode_query(url.query().unwrap_or_default())
}

fn decode_number(param: &str, value: &QueryValue) -> Result<u32> {
    match value {
        QueryValue::Number(n) => Ok(*n),
        QueryValue::Text(text) => text
            .parse::<u32>()
            .map_err(|_| Error::malformed(param, text.as_str())),
    }
}

fn decode_page(value: &QueryValue) -> Result<u32> {
    match decode_number(PAGE_PARAM, value)? {
        0 => Err(Error::malformed(PAGE_PARAM, value.as_query_str())),
        page => Ok(page),
    }
}

/// Decode a classification token
///
/// Unknown tokens and the fallback token mean "no selection".
pub fn decode_classification(token: &str) -> Option<Classification> {
    match parse(token) {
        Some(bucket) if !bucket.is_fallback() => Some(bucket.classification),
        _ => {
            debug!(token, "ignoring unknown classification token");
            None
        }
    }
}

//! String record API endpoints.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::analysis;
use crate::query::{apply_filters, parse_natural_query};
use crate::server::error::ApiError;
use crate::server::ServerState;
use crate::types::{AnalyzedString, FilterSpec};

/// Raw list query parameters. Numerics arrive as strings so a bad value can
/// be answered with the service's own 400 body instead of a rejection from
/// the extractor.
#[derive(Debug, Deserialize)]
pub struct ListStringsQuery {
    pub is_palindrome: Option<String>,
    pub min_length: Option<String>,
    pub max_length: Option<String>,
    pub word_count: Option<String>,
    pub contains_character: Option<String>,
}

impl ListStringsQuery {
    fn into_filter_spec(self) -> Result<FilterSpec, ApiError> {
        Ok(FilterSpec {
            is_palindrome: self.is_palindrome.map(|v| v == "true"),
            min_length: parse_numeric("min_length", self.min_length)?,
            max_length: parse_numeric("max_length", self.max_length)?,
            word_count: parse_numeric("word_count", self.word_count)?,
            // Only the first character of the parameter is used; an empty
            // value leaves the field unset.
            contains_character: self.contains_character.and_then(|v| v.chars().next()),
        })
    }
}

fn parse_numeric(name: &str, raw: Option<String>) -> Result<Option<i64>, ApiError> {
    match raw {
        None => Ok(None),
        Some(text) => text
            .parse::<i64>()
            .map(Some)
            .map_err(|_| ApiError::bad_request(format!("Invalid {name}"))),
    }
}

#[derive(Debug, Deserialize)]
pub struct NaturalLanguageQuery {
    pub query: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ListStringsResponse {
    pub data: Vec<AnalyzedString>,
    pub count: usize,
    pub filters_applied: FilterSpec,
}

#[derive(Debug, Serialize)]
pub struct NaturalLanguageResponse {
    pub data: Vec<AnalyzedString>,
    pub count: usize,
    pub interpreted_query: InterpretedQuery,
}

#[derive(Debug, Serialize)]
pub struct InterpretedQuery {
    pub original: String,
    pub parsed_filters: FilterSpec,
}

/// POST /strings
///
/// Analyse and store a new string. 400 when `value` is missing, 422 when it
/// is not a string, 409 when the content hash is already stored.
pub(crate) async fn create(
    State(state): State<Arc<ServerState>>,
    Json(payload): Json<serde_json::Value>,
) -> Result<(StatusCode, Json<AnalyzedString>), ApiError> {
    let value = payload
        .get("value")
        .ok_or_else(|| ApiError::bad_request("Missing \"value\" field"))?
        .as_str()
        .ok_or_else(|| ApiError::unprocessable("\"value\" must be a string"))?
        .to_string();

    let record = analysis::analyze(&value);
    let mut store = state.store.write().expect("string store lock poisoned");
    if store.get_by_id(&record.id).is_some() {
        return Err(ApiError::conflict("String already exists"));
    }
    store.insert(record.clone()).map_err(ApiError::from)?;
    tracing::debug!(id = %record.id, length = record.properties.length, "stored string");

    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /strings/:value
pub(crate) async fn get_by_value(
    State(state): State<Arc<ServerState>>,
    Path(value): Path<String>,
) -> Result<Json<AnalyzedString>, ApiError> {
    let record = state
        .store
        .read()
        .expect("string store lock poisoned")
        .get_by_value(&value)
        .ok_or_else(|| ApiError::not_found("String not found"))?;
    Ok(Json(record))
}

/// GET /strings
///
/// List stored strings, narrowed by any filter parameters present.
pub(crate) async fn list(
    State(state): State<Arc<ServerState>>,
    Query(params): Query<ListStringsQuery>,
) -> Result<Json<ListStringsResponse>, ApiError> {
    let filters = params.into_filter_spec()?;
    let records = state
        .store
        .read()
        .expect("string store lock poisoned")
        .list();
    let data = apply_filters(&records, &filters);

    Ok(Json(ListStringsResponse {
        count: data.len(),
        data,
        filters_applied: filters,
    }))
}

/// GET /strings/filter-by-natural-language
///
/// Interpret `query` as filter criteria and apply them. 400 when the query
/// is missing or no heuristic matches.
pub(crate) async fn filter_by_natural_language(
    State(state): State<Arc<ServerState>>,
    Query(params): Query<NaturalLanguageQuery>,
) -> Result<Json<NaturalLanguageResponse>, ApiError> {
    let query = params
        .query
        .filter(|q| !q.is_empty())
        .ok_or_else(|| ApiError::bad_request("Missing or invalid \"query\" parameter"))?;
    let filters = parse_natural_query(&query).map_err(ApiError::from)?;
    tracing::debug!(query = %query, ?filters, "parsed natural-language query");

    let records = state
        .store
        .read()
        .expect("string store lock poisoned")
        .list();
    let data = apply_filters(&records, &filters);

    Ok(Json(NaturalLanguageResponse {
        count: data.len(),
        data,
        interpreted_query: InterpretedQuery {
            original: query,
            parsed_filters: filters,
        },
    }))
}

/// DELETE /strings/:value
pub(crate) async fn remove(
    State(state): State<Arc<ServerState>>,
    Path(value): Path<String>,
) -> Result<StatusCode, ApiError> {
    let mut store = state.store.write().expect("string store lock poisoned");
    let record = store
        .get_by_value(&value)
        .ok_or_else(|| ApiError::not_found("String not found"))?;
    store.delete(&record.id);
    tracing::debug!(id = %record.id, "deleted string");

    Ok(StatusCode::NO_CONTENT)
}

use std::collections::BTreeMap;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::{Form, Json};
use serde::Deserialize;
use tracing::{error, info, warn};

use crate::core::ingest;
use crate::web::routes::AppState;
use crate::web::views;

const INDEX_LIMIT: i64 = 100;

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RunParams {
    pub algo: Option<String>,
    pub site: Option<String>,
}

pub async fn index(State(state): State<AppState>) -> Response {
    match state.repository.list_recent(INDEX_LIMIT).await {
        Ok(records) => Html(views::render_index(&records)).into_response(),
        Err(error) => {
            error!(%error, "failed to load recent news");
            StatusCode::NOT_FOUND.into_response()
        }
    }
}

pub async fn search(State(state): State<AppState>, Form(params): Form<SearchParams>) -> Response {
    let name = params.name.unwrap_or_default();
    if name.is_empty() {
        return Html(views::EMPTY_QUERY_MESSAGE.to_string()).into_response();
    }

    info!(query = %name, "searching news by title");
    match state.repository.search_by_title(&name).await {
        Ok(records) if records.is_empty() => {
            Html(views::NOTHING_FOUND_MESSAGE.to_string()).into_response()
        }
        Ok(records) => Html(views::render_items(&records)).into_response(),
        Err(error) => {
            error!(%error, "search query failed");
            StatusCode::NOT_FOUND.into_response()
        }
    }
}

pub async fn run_ingestion(
    State(state): State<AppState>,
    Form(params): Form<RunParams>,
) -> Response {
    let Some(algo) = params.algo.filter(|value| !value.is_empty()) else {
        return StatusCode::NOT_ACCEPTABLE.into_response();
    };
    let Ok(selector) = algo.parse::<i64>() else {
        return StatusCode::NOT_FOUND.into_response();
    };
    let site = params.site.unwrap_or_default();

    match ingest::run(&state.repository, &state.client, selector, site.trim()).await {
        Ok(tally) => format!("{}/{}", tally.completed, tally.attempted).into_response(),
        Err(error) => {
            warn!(%error, "rejected ingestion request");
            StatusCode::NOT_FOUND.into_response()
        }
    }
}

pub async fn drop_all(State(state): State<AppState>) -> Response {
    match state.repository.delete_all().await {
        Ok(count) => {
            info!(count, "dropped stored news");
            format!("Rows deleted: {count}").into_response()
        }
        Err(error) => {
            error!(%error, "drop failed");
            StatusCode::NOT_FOUND.into_response()
        }
    }
}

pub async fn health(State(state): State<AppState>) -> Json<BTreeMap<String, String>> {
    Json(state.services.health_report())
}

//! Home Feed Handler
//!
//! `GET /` and `GET /home`. Query parameters:
//! - `guest=true` serves the feed to a guest
//! - `currentpage=N` selects the page for signed-in viewers (defaults to 1)

use std::time::Instant;

use axum::{
    extract::{Extension, Query, State},
    response::{IntoResponse, Redirect, Response},
    Json,
};
use serde::Deserialize;

use crate::application::dto::HomeResponse;
use crate::application::services::HomeOutcome;
use crate::domain::{PageRequest, Viewer};
use crate::infrastructure::metrics;
use crate::presentation::middleware::CurrentUser;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Home feed query string
#[derive(Debug, Default, Deserialize)]
pub struct HomeQuery {
    pub guest: Option<String>,
    pub currentpage: Option<String>,
}

impl HomeQuery {
    pub fn is_guest(&self) -> bool {
        self.guest.as_deref() == Some("true")
    }

    pub fn page(&self) -> PageRequest {
        PageRequest::parse(self.currentpage.as_deref())
    }
}

/// Render the home feed, or redirect to the welcome page when the caller is
/// neither a guest nor signed in.
pub async fn home(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Query(query): Query<HomeQuery>,
) -> Result<Response, AppError> {
    let started = Instant::now();

    let viewer = state
        .viewers
        .resolve(query.is_guest(), current.user_id())
        .await
        .map_err(|e| {
            metrics::record_feed_request("unknown", "error", started.elapsed().as_secs_f64());
            AppError::Internal(e.to_string())
        })?;

    let kind = viewer.as_ref().map(Viewer::kind).unwrap_or("anonymous");
    let outcome = state.feed.assemble_home(viewer, query.page()).await;
    let elapsed = started.elapsed().as_secs_f64();

    match outcome {
        Ok(HomeOutcome::Render(view)) => {
            metrics::record_feed_request(kind, "rendered", elapsed);
            Ok(Json(HomeResponse::from(view)).into_response())
        }
        Ok(HomeOutcome::AuthenticationRequired) => {
            metrics::record_feed_request(kind, "redirected", elapsed);
            Ok(Redirect::to(&state.settings.feed.welcome_path).into_response())
        }
        Err(e) => {
            metrics::record_feed_request(kind, "error", elapsed);
            Err(AppError::Internal(e.to_string()))
        }
    }
}

//! HTTP request handlers for the payroll engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    body::Bytes,
    extract::{Query, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{MalformedRowPolicy, compute_report};
use crate::error::EngineResult;
use crate::export::write_csv;
use crate::extract::extract_records_from_bytes;
use crate::models::{ComputedRecord, RateTable, ReportTotals};

use super::request::ShiftWindowQuery;
use super::response::{ApiError, ApiErrorResponse, ReportResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/report", post(report_handler))
        .route("/report/csv", post(report_csv_handler))
        .route("/rates", get(rates_handler).put(update_rates_handler))
        .with_state(state)
}

/// Everything a processed report produces, before response formatting.
struct ProcessedReport {
    records: Vec<ComputedRecord>,
    totals: ReportTotals,
    new_employees: Vec<String>,
    rates_persisted: bool,
}

/// Runs the full pipeline for one uploaded report.
///
/// Extraction, shift-window resolution, rate loading, zero-rate
/// provisioning for unseen employees, persistence of the provisioned
/// table, and metric calculation. A failed save of the provisioned table
/// is flagged in the output but does not abort the run: the results are
/// still computed from the provisioned in-memory table.
fn process_report(
    state: &AppState,
    window: ShiftWindowQuery,
    body: &[u8],
    correlation_id: Uuid,
) -> EngineResult<ProcessedReport> {
    let punches = extract_records_from_bytes(body)?;
    info!(
        correlation_id = %correlation_id,
        records = punches.len(),
        "Extracted attendance records"
    );

    let mut schedule = state.config().schedule();
    if let Some(start) = window.start {
        schedule.start_time = start;
    }
    if let Some(end) = window.end {
        schedule.end_time = end;
    }

    let loaded = state.rate_store().load()?;
    let (rates, new_employees) =
        loaded.provisioned(punches.iter().map(|r| r.employee_id.as_str()));

    let mut rates_persisted = true;
    if !new_employees.is_empty() {
        if let Err(err) = state.rate_store().save(&rates) {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Failed to persist provisioned rates"
            );
            rates_persisted = false;
        } else {
            info!(
                correlation_id = %correlation_id,
                new_employees = new_employees.len(),
                "Provisioned default rates for new employees"
            );
        }
    }

    let (records, totals) =
        compute_report(&punches, &schedule, &rates, MalformedRowPolicy::FailFast)?;

    Ok(ProcessedReport {
        records,
        totals,
        new_employees,
        rates_persisted,
    })
}

/// Handler for `POST /report`.
///
/// Accepts the raw HTML export as the request body and responds with the
/// computed records, totals, and provisioning outcome as JSON.
async fn report_handler(
    State(state): State<AppState>,
    Query(window): Query<ShiftWindowQuery>,
    body: Bytes,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        bytes = body.len(),
        "Processing attendance report"
    );

    match process_report(&state, window, &body, correlation_id) {
        Ok(report) => {
            info!(
                correlation_id = %correlation_id,
                records = report.records.len(),
                total_pay = %report.totals.total_pay,
                "Report computed successfully"
            );
            (
                StatusCode::OK,
                Json(ReportResponse {
                    records: report.records,
                    totals: report.totals,
                    new_employees: report.new_employees,
                    rates_persisted: report.rates_persisted,
                }),
            )
                .into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Report processing failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for `POST /report/csv`.
///
/// Same pipeline as `POST /report`, but responds with the BOM-prefixed
/// CSV rendering of the computed records.
async fn report_csv_handler(
    State(state): State<AppState>,
    Query(window): Query<ShiftWindowQuery>,
    body: Bytes,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        bytes = body.len(),
        "Processing attendance report for CSV export"
    );

    let result = process_report(&state, window, &body, correlation_id)
        .and_then(|report| write_csv(&report.records));
    match result {
        Ok(csv) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/csv; charset=utf-8")],
            csv,
        )
            .into_response(),
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "CSV export failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for `GET /rates`.
async fn rates_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.rate_store().load() {
        Ok(rates) => (StatusCode::OK, Json(rates)).into_response(),
        Err(err) => {
            warn!(error = %err, "Failed to load rate table");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for `PUT /rates`.
///
/// Replaces the stored rate table. Negative rates are rejected before
/// anything is written.
async fn update_rates_handler(
    State(state): State<AppState>,
    payload: Result<Json<RateTable>, JsonRejection>,
) -> impl IntoResponse {
    let rates = match payload {
        Ok(Json(rates)) => rates,
        Err(rejection) => {
            warn!(error = %rejection.body_text(), "Malformed rate table payload");
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiError::malformed_json(rejection.body_text())),
            )
                .into_response();
        }
    };

    let result = rates
        .validate()
        .and_then(|()| state.rate_store().save(&rates));
    match result {
        Ok(()) => {
            info!(employees = rates.len(), "Rate table replaced");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(err) => {
            warn!(error = %err, "Rate table update rejected");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

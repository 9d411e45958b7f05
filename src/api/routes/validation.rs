//! Validation Routes
//!
//! - POST /api/v1/validate - Validate savings plan form values

use axum::{extract::rejection::JsonRejection, Json};

use crate::api::dto::ValidateRequest;
use crate::api::error::ApiResult;
use crate::etf::Etf;
use crate::plan::{SavingsPlanInput, ValidationResult};

/// POST /api/v1/validate
///
/// Same rule the form applies in the browser. An out-of-range rate is a
/// normal `200` answer with `is_valid: false`; only malformed requests
/// (unknown ETF, bad JSON, missing fields) are errors.
pub async fn validate_plan(
    payload: Result<Json<ValidateRequest>, JsonRejection>,
) -> ApiResult<Json<ValidationResult>> {
    let Json(req) = payload?;
    let etf: Etf = req.etf.parse()?;

    let input = SavingsPlanInput {
        etf,
        rate: req.rate,
        years: req.years,
    };

    let result = input.validate();
    tracing::debug!(etf = etf.id(), rate = req.rate, years = req.years, valid = result.is_valid, "Validated plan");

    Ok(Json(result))
}

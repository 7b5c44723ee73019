use napi::Result as NapiResult;
use napi_derive::napi;

use sentinel_risk_core::assessment::{self, AssessmentInput};
use sentinel_risk_core::ReferenceData;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

/// Assess a transaction + customer pair against the builtin
/// reference tables. JSON string in, JSON string out.
#[napi]
pub fn assess_transaction(input_json: String) -> NapiResult<String> {
    let input: AssessmentInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = assessment::evaluate(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

/// Assess against caller-supplied reference tables.
#[napi]
pub fn assess_transaction_with_reference(
    input_json: String,
    reference_json: String,
) -> NapiResult<String> {
    let input: AssessmentInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let reference = ReferenceData::from_json_str(&reference_json).map_err(to_napi_error)?;
    let output =
        assessment::evaluate_with_reference(&input, &reference).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

/// Dump the builtin reference tables so the host can show or extend
/// them.
#[napi]
pub fn builtin_reference_data() -> NapiResult<String> {
    serde_json::to_string(ReferenceData::builtin()).map_err(to_napi_error)
}

//! Output shapes and exit-status mapping.

use abrechnung_core::{StatementError, StatementModel};
use abrechnung_shared::AppError;
use abrechnung_shared::types::UnitId;
use serde::Serialize;

/// Failure entry in `--all` output.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    /// Stable error code.
    pub code: &'static str,
    /// Message.
    pub message: String,
}

/// One unit in `--all` output.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitOutcome {
    /// Unit.
    pub unit_id: UnitId,
    /// The statement, when it could be built.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statement: Option<Box<StatementModel>>,
    /// The failure otherwise.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
    #[serde(skip)]
    source: Option<StatementError>,
}

impl UnitOutcome {
    /// Wraps one `build_all` result.
    pub fn from_result(unit_id: UnitId, result: Result<StatementModel, StatementError>) -> Self {
        match result {
            Ok(model) => Self {
                unit_id,
                statement: Some(Box::new(model)),
                error: None,
                source: None,
            },
            Err(err) => {
                let app = AppError::from(err.clone());
                Self {
                    unit_id,
                    statement: None,
                    error: Some(ErrorBody {
                        code: app.error_code(),
                        message: app.to_string(),
                    }),
                    source: Some(err),
                }
            }
        }
    }

    /// The failure as an application error.
    pub fn into_error(self) -> Option<AppError> {
        self.source.map(AppError::from)
    }
}

/// Process exit status for `err`; unknown errors are internal.
pub fn exit_code(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<AppError>()
        .map_or_else(|| AppError::Internal(String::new()).exit_code(), AppError::exit_code)
}

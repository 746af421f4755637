// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Terminal handler for unauthenticated access to protected routes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::error::{ErrorDetails, ErrorResponseBody};

/// Fixed diagnostic message returned on every rejection.
pub const UNAUTHORIZED_MESSAGE: &str = "Access Denied / Unauthenticated";

/// Emits the fixed 401 response for protected routes reached without a
/// valid authentication context.
///
/// There is exactly one rejection shape: a constant status and message.
/// No retry, no escalation.
#[derive(Debug, Clone, Copy)]
pub struct UnauthorizedResponder;

impl UnauthorizedResponder {
    /// Builds the rejection response.
    pub fn respond() -> Response {
        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponseBody {
                error: ErrorDetails {
                    code: "UNAUTHENTICATED".to_string(),
                    message: UNAUTHORIZED_MESSAGE.to_string(),
                },
            }),
        )
            .into_response()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_is_fixed_401() {
        let response = UnauthorizedResponder::respond();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}

use std::fmt;

/// Closed classification of backend failures.
///
/// `NotFound` means the identity service reported the account missing. A 404
/// on a project, database or endpoint means the request was aimed wrong and
/// classifies as `InvalidArgument`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendErrorKind {
    NotFound,
    AlreadyExists,
    InvalidArgument,
    PermissionDenied,
    Unauthenticated,
    Unavailable,
    Internal,
    Unknown,
}

impl BackendErrorKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::NotFound => "not_found",
            Self::AlreadyExists => "already_exists",
            Self::InvalidArgument => "invalid_argument",
            Self::PermissionDenied => "permission_denied",
            Self::Unauthenticated => "unauthenticated",
            Self::Unavailable => "unavailable",
            Self::Internal => "internal",
            Self::Unknown => "unknown",
        }
    }

    /// Classify a Google API error from its canonical `status` string.
    pub fn from_status(status: &str) -> Self {
        match status {
            "ALREADY_EXISTS" => Self::AlreadyExists,
            "INVALID_ARGUMENT" | "FAILED_PRECONDITION" | "OUT_OF_RANGE" | "NOT_FOUND" => {
                Self::InvalidArgument
            }
            "PERMISSION_DENIED" => Self::PermissionDenied,
            "UNAUTHENTICATED" => Self::Unauthenticated,
            "UNAVAILABLE" | "DEADLINE_EXCEEDED" | "RESOURCE_EXHAUSTED" => Self::Unavailable,
            "INTERNAL" | "DATA_LOSS" => Self::Internal,
            _ => Self::Unknown,
        }
    }

    /// Classify an Identity Toolkit error message code such as `USER_NOT_FOUND`.
    ///
    /// The code is the leading token of the message; anything after ` : ` is detail.
    pub fn from_identity_code(message: &str) -> Option<Self> {
        let code = message.split(" : ").next().unwrap_or(message).trim();
        match code {
            "USER_NOT_FOUND" | "EMAIL_NOT_FOUND" => Some(Self::NotFound),
            "EMAIL_EXISTS" | "DUPLICATE_EMAIL" | "DUPLICATE_LOCAL_ID" => Some(Self::AlreadyExists),
            "INVALID_EMAIL" | "INVALID_PASSWORD" | "WEAK_PASSWORD" | "MISSING_LOCAL_ID"
            | "INVALID_CLAIMS" | "CLAIMS_TOO_LARGE" | "FORBIDDEN_CLAIM" => {
                Some(Self::InvalidArgument)
            }
            "INSUFFICIENT_PERMISSION" | "PROJECT_NOT_FOUND" | "USER_DISABLED" => {
                Some(Self::PermissionDenied)
            }
            "INVALID_ID_TOKEN" | "CREDENTIAL_TOO_OLD_LOGIN_AGAIN" | "TOKEN_EXPIRED" => {
                Some(Self::Unauthenticated)
            }
            _ => None,
        }
    }

    /// Fallback classification from an HTTP status code.
    pub fn from_http_status(status: u16) -> Self {
        match status {
            400 | 404 => Self::InvalidArgument,
            401 => Self::Unauthenticated,
            403 => Self::PermissionDenied,
            409 => Self::AlreadyExists,
            429 | 502..=504 => Self::Unavailable,
            500 => Self::Internal,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for BackendErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

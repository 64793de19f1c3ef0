// Copyright 2024 The Kongming Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Error and Result implementations.

use std::fmt;

/// Kind of an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Authentication failure.
    ///
    /// Maps to HTTP 401.
    AuthenticationFailed,

    /// Access denied.
    ///
    /// Maps to HTTP 403.
    AccessDenied,

    /// The server reports that the targeted resource does not exist.
    ///
    /// Roughly maps to HTTP 404 and 410.
    ResourceNotFound,

    /// No resource matched a name-or-ID lookup.
    ///
    /// Unlike `ResourceNotFound`, this is produced on the client side
    /// when the token matched nothing after the full fallback scan.
    NoMatchingResource,

    /// Request returned more items than expected.
    ///
    /// Also used when a name-or-ID lookup matched more than one
    /// resource, making the token an unsafe reference.
    TooManyItems,

    /// Requested service endpoint was not found.
    EndpointNotFound,

    /// Invalid value passed to one of the parameters.
    ///
    /// May be a result of HTTP 400.
    InvalidInput,

    /// Unsupported or incompatible API version.
    ///
    /// May be a result of HTTP 406.
    IncompatibleApiVersion,

    /// Conflict in the request.
    Conflict,

    /// Operation has reached the specified time out.
    OperationTimedOut,

    /// Operation failed to complete.
    ///
    /// Also reported when a batch operation finished with failures.
    OperationFailed,

    /// Protocol-level error reported by the underlying HTTP library.
    ProtocolError,

    /// Response received from the server is malformed.
    InvalidResponse,

    /// Internal server error.
    ///
    /// Maps to HTTP 5xx codes.
    InternalServerError,
}

/// Error from a Kongming call.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    message: String,
}

/// Result of a Kongming call.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn new<S: Into<String>>(kind: ErrorKind, message: S) -> Error {
        Error {
            kind,
            message: message.into(),
        }
    }

    /// Error kind.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl ErrorKind {
    /// Short description of the error kind.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorKind::AuthenticationFailed => "Failed to authenticate",
            ErrorKind::AccessDenied => "Access to the resource is denied",
            ErrorKind::ResourceNotFound => "Requested resource was not found",
            ErrorKind::NoMatchingResource => "No resource matched the lookup",
            ErrorKind::TooManyItems => "Request returned too many items",
            ErrorKind::EndpointNotFound => "Requested endpoint was not found",
            ErrorKind::InvalidInput => "Input value(s) are invalid or missing",
            ErrorKind::IncompatibleApiVersion => "Incompatible or unsupported API version",
            ErrorKind::Conflict => "Request cannot be fulfilled due to a conflict",
            ErrorKind::OperationTimedOut => "Time out reached while waiting for the operation",
            ErrorKind::OperationFailed => "Requested operation has failed",
            ErrorKind::ProtocolError => "Error when accessing the server",
            ErrorKind::InvalidResponse => "Received invalid response",
            ErrorKind::InternalServerError => "Internal server error or bad gateway",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{}: {}", self.kind, self.message)
        }
    }
}

impl std::error::Error for Error {}

impl From<osauth::Error> for Error {
    fn from(value: osauth::Error) -> Error {
        let kind = match value.kind() {
            osauth::ErrorKind::AuthenticationFailed => ErrorKind::AuthenticationFailed,
            osauth::ErrorKind::AccessDenied => ErrorKind::AccessDenied,
            osauth::ErrorKind::ResourceNotFound => ErrorKind::ResourceNotFound,
            osauth::ErrorKind::TooManyItems => ErrorKind::TooManyItems,
            osauth::ErrorKind::EndpointNotFound => ErrorKind::EndpointNotFound,
            osauth::ErrorKind::InvalidInput => ErrorKind::InvalidInput,
            osauth::ErrorKind::IncompatibleApiVersion => ErrorKind::IncompatibleApiVersion,
            osauth::ErrorKind::Conflict => ErrorKind::Conflict,
            osauth::ErrorKind::OperationTimedOut => ErrorKind::OperationTimedOut,
            osauth::ErrorKind::OperationFailed => ErrorKind::OperationFailed,
            osauth::ErrorKind::InvalidResponse => ErrorKind::InvalidResponse,
            osauth::ErrorKind::InternalServerError => ErrorKind::InternalServerError,
            _ => ErrorKind::ProtocolError,
        };
        Error::new(kind, value.to_string())
    }
}

#[cfg(test)]
mod test {
    use super::{Error, ErrorKind};

    #[test]
    fn test_display_with_message() {
        let err = Error::new(ErrorKind::TooManyItems, "too many mappings");
        assert_eq!(
            err.to_string(),
            "Request returned too many items: too many mappings"
        );
    }

    #[test]
    fn test_from_transport_error() {
        let err: Error = osauth::Error::new(osauth::ErrorKind::ResourceNotFound, "gone").into();
        assert_eq!(err.kind(), ErrorKind::ResourceNotFound);
    }

    #[test]
    fn test_not_found_kinds_are_distinct() {
        assert!(ErrorKind::NoMatchingResource != ErrorKind::ResourceNotFound);
    }
}

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

//! Various utilities.

use json_patch::{Patch, PatchOperation};
use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::{Error, ErrorKind, Result};

/// Implement an accessor mirroring a field of the inner protocol struct.
macro_rules! transparent_property {
    ($(#[$attr:meta])* $name:ident: ref $type:ty) => (
        $(#[$attr])*
        pub fn $name(&self) -> &$type {
            &self.inner.$name
        }
    );

    ($(#[$attr:meta])* $name:ident: $type:ty) => (
        $(#[$attr])*
        pub fn $name(&self) -> $type {
            self.inner.$name
        }
    );
}

/// Implement setters for a field of the inner creation request.
macro_rules! creation_inner_field {
    ($(#[$attr:meta])* $set_func:ident, $with_func:ident -> $name:ident: optional $type:ty) => (
        $(#[$attr])*
        pub fn $set_func<S: Into<$type>>(&mut self, value: S) {
            self.inner.$name = Some(value.into());
        }

        $(#[$attr])*
        pub fn $with_func<S: Into<$type>>(mut self, value: S) -> Self {
            self.$set_func(value);
            self
        }
    );

    ($(#[$attr:meta])* $set_func:ident, $with_func:ident -> $name:ident: $type:ty) => (
        $(#[$attr])*
        pub fn $set_func<S: Into<$type>>(&mut self, value: S) {
            self.inner.$name = value.into();
        }

        $(#[$attr])*
        pub fn $with_func<S: Into<$type>>(mut self, value: S) -> Self {
            self.$set_func(value);
            self
        }
    );
}

/// One recorded change of a partial update, in caller order.
#[derive(Debug, Clone)]
pub enum PatchEntry {
    /// Replace the value of a top-level field.
    Replace(&'static str, Value),
    /// An arbitrary caller-provided patch operation.
    Raw(PatchOperation),
}

/// Assemble recorded changes into a JSON patch, preserving their order.
pub fn build_patch(entries: Vec<PatchEntry>) -> Result<Patch> {
    let mut ops = Vec::with_capacity(entries.len());
    for entry in entries {
        ops.push(match entry {
            PatchEntry::Replace(field, value) => json!({
                "op": "replace",
                "path": format!("/{}", field),
                "value": value
            }),
            PatchEntry::Raw(op) => serde_json::to_value(op)
                .map_err(|e| Error::new(ErrorKind::InvalidInput, e.to_string()))?,
        });
    }
    serde_json::from_value(Value::Array(ops))
        .map_err(|e| Error::new(ErrorKind::InvalidInput, e.to_string()))
}

/// Represent a protocol structure as a plain field-to-value mapping.
pub fn to_object<T: Serialize>(value: &T) -> Result<Map<String, Value>> {
    match serde_json::to_value(value) {
        Ok(Value::Object(fields)) => Ok(fields),
        Ok(..) => Err(Error::new(
            ErrorKind::InvalidResponse,
            "Expected an object of fields",
        )),
        Err(err) => Err(Error::new(ErrorKind::InvalidResponse, err.to_string())),
    }
}

/// Pick the only resource matching a human-supplied token.
///
/// Zero matches and more than one match are both errors: a token
/// matching several resources is not a safe reference and is never
/// resolved to the first hit.
pub fn unique_match<T, F>(items: Vec<T>, token: &str, resource: &str, check: F) -> Result<T>
where
    F: Fn(&T) -> bool,
{
    let mut found = items.into_iter().filter(|item| check(item));
    match (found.next(), found.next()) {
        (Some(result), None) => Ok(result),
        (Some(..), Some(..)) => Err(Error::new(
            ErrorKind::TooManyItems,
            format!("More than one {} matches '{}'", resource, token),
        )),
        (None, ..) => Err(Error::new(
            ErrorKind::NoMatchingResource,
            format!("No {} matching '{}' found", resource, token),
        )),
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::{build_patch, unique_match, PatchEntry};
    use crate::ErrorKind;

    fn names() -> Vec<&'static str> {
        vec!["a", "b", "a"]
    }

    #[test]
    fn test_unique_match() {
        let result = unique_match(names(), "b", "item", |name| *name == "b").unwrap();
        assert_eq!(result, "b");
    }

    #[test]
    fn test_unique_match_ambiguous() {
        let err = unique_match(names(), "a", "item", |name| *name == "a").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TooManyItems);
    }

    #[test]
    fn test_unique_match_missing() {
        let err = unique_match(names(), "c", "item", |name| *name == "c").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NoMatchingResource);
    }

    #[test]
    fn test_build_patch_keeps_order() {
        let patch = build_patch(vec![
            PatchEntry::Replace("name", json!("gold-48")),
            PatchEntry::Replace("description", json!("48 dedicated cores")),
        ])
        .unwrap();
        assert_eq!(
            serde_json::to_value(&patch).unwrap(),
            json!([
                {"op": "replace", "path": "/name", "value": "gold-48"},
                {"op": "replace", "path": "/description", "value": "48 dedicated cores"},
            ])
        );
    }

    #[test]
    fn test_build_patch_empty() {
        let patch = build_patch(Vec::new()).unwrap();
        assert_eq!(serde_json::to_value(&patch).unwrap(), json!([]));
    }
}

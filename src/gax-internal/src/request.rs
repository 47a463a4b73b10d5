// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Operation descriptors and the request descriptors built from them.
//!
//! Each operation in a service crate is described by a static
//! [OperationDescriptor]: the HTTP method, the path template, the required
//! parameters, and how each request field maps to the path, the query
//! string, the body, or the headers. The request struct for a call is
//! serialized into [Parameters], and [build] combines both into a
//! [RequestDescriptor] ready for the transport.
//!
//! Headers are merged in increasing priority:
//!
//! 1. The client default headers.
//! 2. The SDK headers, see [crate::api_header::SdkHeader].
//! 3. The operation headers: `Accept`, `Content-Type`, and any header
//!    computed from a request field, such as `If-Match`.
//! 4. The caller headers, set via [gax::options::RequestOptions].
//!
//! A header in a later layer replaces all the values for the same header name
//! in the earlier layers.

use crate::query_parameter::QueryParameter;
use bytes::Bytes;
use http::header::{ACCEPT, CONTENT_TYPE};
use http::{HeaderMap, HeaderName, HeaderValue, Method};
use serde_json::{Map, Value};

/// Maps a parameter name on the wire to the request field holding its value.
///
/// The request fields use `camelCase`, the services mostly use `snake_case`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldMapping {
    pub wire: &'static str,
    pub field: &'static str,
}

impl FieldMapping {
    pub const fn new(wire: &'static str, field: &'static str) -> Self {
        Self { wire, field }
    }
}

/// The static shape of one REST endpoint.
#[derive(Debug)]
pub struct OperationDescriptor {
    /// The operation id, reported in the SDK analytics header.
    pub id: &'static str,
    pub method: Method,
    /// The path template, relative to the service endpoint.
    pub path: &'static str,
    /// The required request fields, in declaration order.
    pub required: &'static [&'static str],
    pub path_params: &'static [FieldMapping],
    pub query: &'static [FieldMapping],
    pub body: &'static [FieldMapping],
    pub headers: &'static [FieldMapping],
    /// The multipart form parts, the fields are set via [Parameters::with_file].
    pub form: &'static [FieldMapping],
    pub accept: Option<&'static str>,
    pub content_type: Option<&'static str>,
}

impl OperationDescriptor {
    /// A descriptor with no parameters.
    ///
    /// Use the `with_*` functions to complete the descriptor, they are `const`
    /// so the descriptors can be `static` items.
    pub const fn new(id: &'static str, method: Method, path: &'static str) -> Self {
        Self {
            id,
            method,
            path,
            required: &[],
            path_params: &[],
            query: &[],
            body: &[],
            headers: &[],
            form: &[],
            accept: None,
            content_type: None,
        }
    }

    pub const fn with_required(mut self, v: &'static [&'static str]) -> Self {
        self.required = v;
        self
    }

    pub const fn with_path_params(mut self, v: &'static [FieldMapping]) -> Self {
        self.path_params = v;
        self
    }

    pub const fn with_query(mut self, v: &'static [FieldMapping]) -> Self {
        self.query = v;
        self
    }

    pub const fn with_body(mut self, v: &'static [FieldMapping]) -> Self {
        self.body = v;
        self
    }

    pub const fn with_headers(mut self, v: &'static [FieldMapping]) -> Self {
        self.headers = v;
        self
    }

    pub const fn with_form(mut self, v: &'static [FieldMapping]) -> Self {
        self.form = v;
        self
    }

    pub const fn with_accept(mut self, v: &'static str) -> Self {
        self.accept = Some(v);
        self
    }

    pub const fn with_content_type(mut self, v: &'static str) -> Self {
        self.content_type = Some(v);
        self
    }
}

/// The contents of a file uploaded in a multipart request.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilePart {
    pub data: Bytes,
    pub content_type: Option<String>,
    pub filename: Option<String>,
}

/// One part in a multipart form.
#[derive(Clone, Debug, PartialEq)]
pub struct FormPart {
    pub name: String,
    pub file: FilePart,
}

/// The parameters for a single call.
///
/// The parameters own a copy of the request, changes made by the caller after
/// the call starts do not affect it.
#[derive(Clone, Debug, Default)]
pub struct Parameters {
    values: Map<String, Value>,
    files: Vec<(String, FilePart)>,
    headers: HeaderMap,
}

impl Parameters {
    /// Serializes `request` into the parameters for a call.
    ///
    /// The request must serialize to a JSON object, its field names are the
    /// names used in the [FieldMapping::field] entries.
    pub fn new<T: serde::Serialize>(request: T) -> gax::Result<Self> {
        let values = match serde_json::to_value(request).map_err(gax::error::Error::ser)? {
            Value::Object(m) => m,
            Value::Null => Map::new(),
            v => {
                return Err(gax::error::Error::ser(format!(
                    "expected the request to serialize as an object, got {v}"
                )));
            }
        };
        Ok(Self {
            values,
            ..Default::default()
        })
    }

    /// Adds a file to upload. Unset files are ignored.
    pub fn with_file<T: Into<String>>(mut self, field: T, file: Option<FilePart>) -> Self {
        if let Some(f) = file {
            self.files.push((field.into(), f));
        }
        self
    }

    /// Sets the caller headers, they replace any other header with the same
    /// name.
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }

    pub fn values(&self) -> &Map<String, Value> {
        &self.values
    }

    /// Verifies all the `required` fields are set, files count as set fields.
    pub fn validate(&self, required: &[&str]) -> gax::Result<()> {
        let missing = crate::required_parameter::missing_parameters(Some(&self.values), required)
            .into_iter()
            .filter(|name| !self.files.iter().any(|(f, _)| f == name))
            .collect::<Vec<_>>();
        if missing.is_empty() {
            return Ok(());
        }
        Err(gax::error::Error::missing_parameters(missing))
    }
}

/// The headers merged below the operation and caller headers.
#[derive(Clone, Debug, Default)]
pub struct HeaderLayers<'a> {
    pub default: Option<&'a HeaderMap>,
    pub sdk: HeaderMap,
}

/// The request body.
#[derive(Clone, Debug, PartialEq)]
pub enum Body {
    Empty,
    Json(Map<String, Value>),
    Multipart(Vec<FormPart>),
}

/// A request, ready to send.
#[derive(Clone, Debug)]
pub struct RequestDescriptor {
    pub operation_id: &'static str,
    pub method: Method,
    /// The resolved path, relative to the service endpoint.
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Body,
    pub headers: HeaderMap,
}

/// Builds the request for `op` from `params`.
///
/// The caller should [validate][Parameters::validate] the parameters first.
/// A path placeholder without a value results in a
/// [binding][gax::error::Error::is_binding] error.
pub fn build(
    op: &OperationDescriptor,
    params: Parameters,
    layers: HeaderLayers<'_>,
) -> gax::Result<RequestDescriptor> {
    let Parameters {
        mut values,
        files,
        headers: caller,
    } = params;
    let path = crate::path_parameter::expand(op.path, op.path_params, Some(&values))?;

    let mut query = Vec::new();
    for m in op.query {
        values.remove(m.field).add(&mut query, m.wire);
    }

    let mut headers = HeaderMap::new();
    if let Some(default) = layers.default {
        merge(&mut headers, default);
    }
    merge(&mut headers, &layers.sdk);
    if let Some(accept) = op.accept {
        headers.insert(ACCEPT, HeaderValue::from_static(accept));
    }
    if let Some(content_type) = op.content_type {
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
    }
    for m in op.headers {
        if let Some(v) = values.get(m.field).and_then(header_value).transpose()? {
            let name = HeaderName::from_bytes(m.wire.as_bytes()).map_err(gax::error::Error::ser)?;
            headers.insert(name, v);
        }
    }
    merge(&mut headers, &caller);

    let body = if !op.form.is_empty() {
        let parts = op
            .form
            .iter()
            .filter_map(|m| {
                files
                    .iter()
                    .find(|(f, _)| f == m.field)
                    .map(|(_, file)| FormPart {
                        name: m.wire.to_string(),
                        file: file.clone(),
                    })
            })
            .collect();
        Body::Multipart(parts)
    } else if !op.body.is_empty() {
        let fields = op
            .body
            .iter()
            .filter_map(|m| match values.remove(m.field) {
                None | Some(Value::Null) => None,
                Some(v) => Some((m.wire.to_string(), v)),
            })
            .collect();
        Body::Json(fields)
    } else {
        Body::Empty
    };

    Ok(RequestDescriptor {
        operation_id: op.id,
        method: op.method.clone(),
        path,
        query,
        body,
        headers,
    })
}

fn header_value(value: &Value) -> Option<gax::Result<HeaderValue>> {
    let text = match value {
        Value::Null => return None,
        Value::String(s) => s.clone(),
        v => v.to_string(),
    };
    Some(HeaderValue::try_from(text).map_err(gax::error::Error::ser))
}

// Replaces all the values in `into` for each header name present in `from`.
fn merge(into: &mut HeaderMap, from: &HeaderMap) {
    for name in from.keys() {
        into.remove(name);
        for v in from.get_all(name) {
            into.append(name.clone(), v.clone());
        }
    }
}

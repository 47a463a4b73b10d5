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


#![allow(rustdoc::redundant_explicit_links)]
#![allow(rustdoc::broken_intra_doc_links)]

use serde::{Deserialize, Serialize};

/// Details of an attachment.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Attachment {
    /// Unique identifier of the attachment in the database.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Name of the attachment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,

    /// Size of the attachment in bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_in_bytes: Option<i64>,

    /// Date time of uploading in UTC.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    /// URL of the attachment used to download.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// List of attachments in the case.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttachmentList {
    /// New attachments array.
    pub attachments: Vec<Attachment>,
}

/// A support case.
///
/// The service returns many fields, some of them only for specific case types.
/// The most common fields are typed, anything else is kept in
/// [extra][Case::extra].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Case {
    /// Number/ID of the case.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,

    /// Short description of the case.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,

    /// Full description of the case.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Date time of case creation in UTC.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    /// Date time of case last update in UTC.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,

    /// Name of the console to interact with the contact.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_type: Option<String>,

    /// Status of the case.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// The severity of the case.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<i64>,

    /// Indicate if the case is a support tier 1 case.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support_tier: Option<String>,

    /// Notes of case closing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub close_notes: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub eu: Option<EuPayload>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub offering: Option<Offering>,

    /// List of comments/updates sorted in chronological order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<Comment>,

    /// List of users in the case watchlist.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub watchlist: Vec<User>,

    /// List of attachments/files of the case.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,

    /// List of attached resources.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<Resource>,

    /// Any other fields returned by the service.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Response of a request listing cases.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaseList {
    /// Total number of cases satisfying the query.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<PaginationLink>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<PaginationLink>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<PaginationLink>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last: Option<PaginationLink>,

    /// List of cases.
    pub cases: Vec<Case>,
}

/// A comment in a case.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Comment {
    /// The comment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Timestamp of when comment is added.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub added_at: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub added_by: Option<User>,
}

/// Specify if the case should be treated as EU regulated. Only one of the
/// following properties is required. Call EU support utility endpoint to
/// receive the list of EU data centers.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EuPayload {
    /// Indicating whether the case is EU supported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supported: Option<bool>,

    /// If EU supported utility endpoint is available, use it to get the list of
    /// EU data centers, else use the data center name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_center: Option<i64>,
}

impl EuPayload {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [supported][Self::supported].
    pub fn set_supported<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.supported = Some(v.into());
        self
    }

    /// Sets the value of [data_center][Self::data_center].
    pub fn set_data_center<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.data_center = Some(v.into());
        self
    }
}

/// Offering details, as returned by the service.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Offering {
    /// Name of the offering.
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<OfferingType>,
}

/// Offering type, as returned by the service.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OfferingType {
    /// Offering type group. "crn_service_name" is strongly prefered over
    /// "category" as the latter is legacy and will be deprecated in the future.
    pub group: String,

    /// CRN service name of the offering.
    pub key: String,

    /// Optional. Platform kind of the offering.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Offering id in the category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Offering details for a new case.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OfferingPayload {
    /// Offering name.
    pub name: String,

    /// Offering type.
    pub r#type: OfferingPayloadType,
}

impl OfferingPayload {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][Self::name].
    pub fn set_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [r#type][Self::r#type].
    pub fn set_type<T: std::convert::Into<OfferingPayloadType>>(mut self, v: T) -> Self {
        self.r#type = v.into();
        self
    }
}

/// Offering type for a new case.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OfferingPayloadType {
    /// Offering type group, e.g. `crn_service_name` or `category`.
    pub group: String,

    /// CRN service name of the offering.
    pub key: String,

    /// Optional. Platform kind of the offering.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Offering id in the category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl OfferingPayloadType {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [group][Self::group].
    pub fn set_group<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.group = v.into();
        self
    }

    /// Sets the value of [key][Self::key].
    pub fn set_key<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.key = v.into();
        self
    }

    /// Sets the value of [kind][Self::kind].
    pub fn set_kind<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.kind = Some(v.into());
        self
    }

    /// Sets the value of [id][Self::id].
    pub fn set_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }
}

/// Container for URL pointer to related pages of cases.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationLink {
    /// URL to related pages of cases.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

/// A resource record of a case.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Resource {
    /// ID of the resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crn: Option<String>,

    /// Name of the resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Type of resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,

    /// Classic IaaS resource id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// URL of deeplink to the resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Note about the resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Payload detail for adding a resource to a case.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourcePayload {
    /// Cloud Resource Name of the resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crn: Option<String>,

    /// Classic IaaS resource type. Specify with `id`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,

    /// Deprecated. Classic IaaS resource id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// A note about this resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl ResourcePayload {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [crn][Self::crn].
    pub fn set_crn<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.crn = Some(v.into());
        self
    }

    /// Sets the value of [r#type][Self::r#type].
    pub fn set_type<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.r#type = Some(v.into());
        self
    }

    /// Sets the value of [id][Self::id].
    pub fn set_id<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    /// Sets the value of [note][Self::note].
    pub fn set_note<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.note = Some(v.into());
        self
    }
}

/// User info in a case.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    /// Full name of the user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The ID realm, e.g. `IBMid`, `SL`, or `BSS`.
    pub realm: String,

    /// User ID in the realm.
    pub user_id: String,
}

impl User {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][Self::name].
    pub fn set_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [realm][Self::realm].
    pub fn set_realm<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.realm = v.into();
        self
    }

    /// Sets the value of [user_id][Self::user_id].
    pub fn set_user_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.user_id = v.into();
        self
    }
}

/// User ID and realm, used to change a case watchlist.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserIdAndRealm {
    /// The ID realm.
    pub realm: String,

    /// The user ID in the realm.
    pub user_id: String,
}

impl UserIdAndRealm {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [realm][Self::realm].
    pub fn set_realm<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.realm = v.into();
        self
    }

    /// Sets the value of [user_id][Self::user_id].
    pub fn set_user_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.user_id = v.into();
        self
    }
}

/// Payload containing the watchlist of a case.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Watchlist {
    pub watchlist: Vec<User>,
}

/// Response of a request adding to a case watchlist.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WatchlistAddResponse {
    /// List of added user.
    pub added: Vec<User>,

    /// List of failed to add user.
    pub failed: Vec<User>,
}

/// The request for [CaseManagement::get_cases][crate::client::CaseManagement::get_cases].
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetCasesRequest {
    /// Number of cases to skip.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    /// Number of cases returned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    /// String that a case might contain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Sort field and direction. If omitted, default to descending of updated
    /// date. Prefix `~` signifies sort in ascending.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    /// Case status filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Vec<String>>,
    /// Selected fields of interest instead of the entire case information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,
}

impl GetCasesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [offset][Self::offset].
    pub fn set_offset<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.offset = Some(v.into());
        self
    }

    /// Sets or clears the value of [offset][Self::offset].
    pub fn set_or_clear_offset<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.offset = v.map(|x| x.into());
        self
    }

    /// Sets the value of [limit][Self::limit].
    pub fn set_limit<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.limit = Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][Self::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [search][Self::search].
    pub fn set_search<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.search = Some(v.into());
        self
    }

    /// Sets or clears the value of [search][Self::search].
    pub fn set_or_clear_search<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.search = v.map(|x| x.into());
        self
    }

    /// Sets the value of [sort][Self::sort].
    pub fn set_sort<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.sort = Some(v.into());
        self
    }

    /// Sets or clears the value of [sort][Self::sort].
    pub fn set_or_clear_sort<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.sort = v.map(|x| x.into());
        self
    }

    /// Sets the value of [status][Self::status].
    pub fn set_status<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<String>,
    {
        self.status = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [fields][Self::fields].
    pub fn set_fields<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<String>,
    {
        self.fields = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }
}

/// The request for [CaseManagement::create_case][crate::client::CaseManagement::create_case].
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCaseRequest {
    /// Case type, `technical` or `account_and_access`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
    /// Short description used to identify the case.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// Detailed description of the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Severity of the case. Smaller values mean higher severity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eu: Option<crate::model::EuPayload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offering: Option<crate::model::OfferingPayload>,
    /// List of resources that are related to the case.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<crate::model::ResourcePayload>>,
    /// Users to be added to the case watchlist.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watchlist: Option<Vec<crate::model::User>>,
    /// Invoice number of an `account_and_access` billing case.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<String>,
    /// Flag to indicate the case requests an SLA credit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sla_credit_request: Option<bool>,
}

impl CreateCaseRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [type][Self::r#type].
    pub fn set_type<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.r#type = Some(v.into());
        self
    }

    /// Sets or clears the value of [type][Self::r#type].
    pub fn set_or_clear_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.r#type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [subject][Self::subject].
    pub fn set_subject<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.subject = Some(v.into());
        self
    }

    /// Sets or clears the value of [subject][Self::subject].
    pub fn set_or_clear_subject<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.subject = v.map(|x| x.into());
        self
    }

    /// Sets the value of [description][Self::description].
    pub fn set_description<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }

    /// Sets or clears the value of [description][Self::description].
    pub fn set_or_clear_description<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.description = v.map(|x| x.into());
        self
    }

    /// Sets the value of [severity][Self::severity].
    pub fn set_severity<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.severity = Some(v.into());
        self
    }

    /// Sets or clears the value of [severity][Self::severity].
    pub fn set_or_clear_severity<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.severity = v.map(|x| x.into());
        self
    }

    /// Sets the value of [eu][Self::eu].
    pub fn set_eu<T: std::convert::Into<crate::model::EuPayload>>(mut self, v: T) -> Self {
        self.eu = Some(v.into());
        self
    }

    /// Sets or clears the value of [eu][Self::eu].
    pub fn set_or_clear_eu<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::EuPayload>,
    {
        self.eu = v.map(|x| x.into());
        self
    }

    /// Sets the value of [offering][Self::offering].
    pub fn set_offering<T: std::convert::Into<crate::model::OfferingPayload>>(
        mut self,
        v: T,
    ) -> Self {
        self.offering = Some(v.into());
        self
    }

    /// Sets or clears the value of [offering][Self::offering].
    pub fn set_or_clear_offering<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::OfferingPayload>,
    {
        self.offering = v.map(|x| x.into());
        self
    }

    /// Sets the value of [resources][Self::resources].
    pub fn set_resources<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::ResourcePayload>,
    {
        self.resources = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [watchlist][Self::watchlist].
    pub fn set_watchlist<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::User>,
    {
        self.watchlist = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [invoice_number][Self::invoice_number].
    pub fn set_invoice_number<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.invoice_number = Some(v.into());
        self
    }

    /// Sets or clears the value of [invoice_number][Self::invoice_number].
    pub fn set_or_clear_invoice_number<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.invoice_number = v.map(|x| x.into());
        self
    }

    /// Sets the value of [sla_credit_request][Self::sla_credit_request].
    pub fn set_sla_credit_request<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.sla_credit_request = Some(v.into());
        self
    }

    /// Sets or clears the value of [sla_credit_request][Self::sla_credit_request].
    pub fn set_or_clear_sla_credit_request<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.sla_credit_request = v.map(|x| x.into());
        self
    }
}

/// The request for [CaseManagement::get_case][crate::client::CaseManagement::get_case].
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetCaseRequest {
    /// Case number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_number: Option<String>,
    /// Selected fields of interest instead of the entire case information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,
}

impl GetCaseRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [case_number][Self::case_number].
    pub fn set_case_number<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.case_number = Some(v.into());
        self
    }

    /// Sets or clears the value of [case_number][Self::case_number].
    pub fn set_or_clear_case_number<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.case_number = v.map(|x| x.into());
        self
    }

    /// Sets the value of [fields][Self::fields].
    pub fn set_fields<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<String>,
    {
        self.fields = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }
}

/// The request for [CaseManagement::update_case_status][crate::client::CaseManagement::update_case_status].
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCaseStatusRequest {
    /// Case number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_number: Option<String>,
    /// One of `resolve`, `unresolve`, or `accept`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    /// Comment about the action.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Required when resolving a case, see
    /// [get_resolution_codes][crate::client::CaseManagement::get_resolution_codes].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution_code: Option<i64>,
}

impl UpdateCaseStatusRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [case_number][Self::case_number].
    pub fn set_case_number<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.case_number = Some(v.into());
        self
    }

    /// Sets or clears the value of [case_number][Self::case_number].
    pub fn set_or_clear_case_number<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.case_number = v.map(|x| x.into());
        self
    }

    /// Sets the value of [action][Self::action].
    pub fn set_action<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.action = Some(v.into());
        self
    }

    /// Sets or clears the value of [action][Self::action].
    pub fn set_or_clear_action<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.action = v.map(|x| x.into());
        self
    }

    /// Sets the value of [comment][Self::comment].
    pub fn set_comment<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.comment = Some(v.into());
        self
    }

    /// Sets or clears the value of [comment][Self::comment].
    pub fn set_or_clear_comment<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.comment = v.map(|x| x.into());
        self
    }

    /// Sets the value of [resolution_code][Self::resolution_code].
    pub fn set_resolution_code<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.resolution_code = Some(v.into());
        self
    }

    /// Sets or clears the value of [resolution_code][Self::resolution_code].
    pub fn set_or_clear_resolution_code<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.resolution_code = v.map(|x| x.into());
        self
    }
}

/// The request for [CaseManagement::add_comment][crate::client::CaseManagement::add_comment].
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCommentRequest {
    /// Case number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_number: Option<String>,
    /// Comment to add to the case.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl AddCommentRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [case_number][Self::case_number].
    pub fn set_case_number<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.case_number = Some(v.into());
        self
    }

    /// Sets or clears the value of [case_number][Self::case_number].
    pub fn set_or_clear_case_number<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.case_number = v.map(|x| x.into());
        self
    }

    /// Sets the value of [comment][Self::comment].
    pub fn set_comment<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.comment = Some(v.into());
        self
    }

    /// Sets or clears the value of [comment][Self::comment].
    pub fn set_or_clear_comment<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.comment = v.map(|x| x.into());
        self
    }
}

/// The request for [CaseManagement::add_watchlist][crate::client::CaseManagement::add_watchlist].
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddWatchlistRequest {
    /// Case number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_number: Option<String>,
    /// Users to add to the watchlist.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watchlist: Option<Vec<crate::model::UserIdAndRealm>>,
}

impl AddWatchlistRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [case_number][Self::case_number].
    pub fn set_case_number<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.case_number = Some(v.into());
        self
    }

    /// Sets or clears the value of [case_number][Self::case_number].
    pub fn set_or_clear_case_number<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.case_number = v.map(|x| x.into());
        self
    }

    /// Sets the value of [watchlist][Self::watchlist].
    pub fn set_watchlist<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::UserIdAndRealm>,
    {
        self.watchlist = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }
}

/// The request for [CaseManagement::remove_watchlist][crate::client::CaseManagement::remove_watchlist].
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveWatchlistRequest {
    /// Case number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_number: Option<String>,
    /// Users to remove from the watchlist.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watchlist: Option<Vec<crate::model::UserIdAndRealm>>,
}

impl RemoveWatchlistRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [case_number][Self::case_number].
    pub fn set_case_number<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.case_number = Some(v.into());
        self
    }

    /// Sets or clears the value of [case_number][Self::case_number].
    pub fn set_or_clear_case_number<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.case_number = v.map(|x| x.into());
        self
    }

    /// Sets the value of [watchlist][Self::watchlist].
    pub fn set_watchlist<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::UserIdAndRealm>,
    {
        self.watchlist = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }
}

/// The request for [CaseManagement::add_resource][crate::client::CaseManagement::add_resource].
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddResourceRequest {
    /// Case number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_number: Option<String>,
    /// Cloud Resource Name of the resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crn: Option<String>,
    /// The name of the resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Only used for classic infrastructure resources.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
    /// The ID of a classic infrastructure resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// A note about the resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl AddResourceRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [case_number][Self::case_number].
    pub fn set_case_number<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.case_number = Some(v.into());
        self
    }

    /// Sets or clears the value of [case_number][Self::case_number].
    pub fn set_or_clear_case_number<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.case_number = v.map(|x| x.into());
        self
    }

    /// Sets the value of [crn][Self::crn].
    pub fn set_crn<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.crn = Some(v.into());
        self
    }

    /// Sets or clears the value of [crn][Self::crn].
    pub fn set_or_clear_crn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.crn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [name][Self::name].
    pub fn set_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets or clears the value of [name][Self::name].
    pub fn set_or_clear_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [type][Self::r#type].
    pub fn set_type<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.r#type = Some(v.into());
        self
    }

    /// Sets or clears the value of [type][Self::r#type].
    pub fn set_or_clear_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.r#type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [id][Self::id].
    pub fn set_id<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    /// Sets or clears the value of [id][Self::id].
    pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [note][Self::note].
    pub fn set_note<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.note = Some(v.into());
        self
    }

    /// Sets or clears the value of [note][Self::note].
    pub fn set_or_clear_note<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.note = v.map(|x| x.into());
        self
    }
}

/// The request for [CaseManagement::upload_file][crate::client::CaseManagement::upload_file].
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadFileRequest {
    /// Case number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_number: Option<String>,
    /// The file contents.
    #[serde(skip)]
    pub file: Option<bytes::Bytes>,
    /// The content type of the file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_content_type: Option<String>,
    /// The filename reported to the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

impl UploadFileRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [case_number][Self::case_number].
    pub fn set_case_number<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.case_number = Some(v.into());
        self
    }

    /// Sets or clears the value of [case_number][Self::case_number].
    pub fn set_or_clear_case_number<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.case_number = v.map(|x| x.into());
        self
    }

    /// Sets the value of [file][Self::file].
    pub fn set_file<T: std::convert::Into<bytes::Bytes>>(mut self, v: T) -> Self {
        self.file = Some(v.into());
        self
    }

    /// Sets or clears the value of [file][Self::file].
    pub fn set_or_clear_file<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bytes::Bytes>,
    {
        self.file = v.map(|x| x.into());
        self
    }

    /// Sets the value of [file_content_type][Self::file_content_type].
    pub fn set_file_content_type<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.file_content_type = Some(v.into());
        self
    }

    /// Sets or clears the value of [file_content_type][Self::file_content_type].
    pub fn set_or_clear_file_content_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.file_content_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [filename][Self::filename].
    pub fn set_filename<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.filename = Some(v.into());
        self
    }

    /// Sets or clears the value of [filename][Self::filename].
    pub fn set_or_clear_filename<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.filename = v.map(|x| x.into());
        self
    }
}

/// The request for [CaseManagement::download_file][crate::client::CaseManagement::download_file].
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadFileRequest {
    /// Case number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_number: Option<String>,
    /// Unique identifier of the attachment in the case.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_id: Option<String>,
}

impl DownloadFileRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [case_number][Self::case_number].
    pub fn set_case_number<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.case_number = Some(v.into());
        self
    }

    /// Sets or clears the value of [case_number][Self::case_number].
    pub fn set_or_clear_case_number<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.case_number = v.map(|x| x.into());
        self
    }

    /// Sets the value of [file_id][Self::file_id].
    pub fn set_file_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.file_id = Some(v.into());
        self
    }

    /// Sets or clears the value of [file_id][Self::file_id].
    pub fn set_or_clear_file_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.file_id = v.map(|x| x.into());
        self
    }
}

/// The request for [CaseManagement::delete_file][crate::client::CaseManagement::delete_file].
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteFileRequest {
    /// Case number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_number: Option<String>,
    /// Unique identifier of the attachment in the case.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_id: Option<String>,
}

impl DeleteFileRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [case_number][Self::case_number].
    pub fn set_case_number<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.case_number = Some(v.into());
        self
    }

    /// Sets or clears the value of [case_number][Self::case_number].
    pub fn set_or_clear_case_number<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.case_number = v.map(|x| x.into());
        self
    }

    /// Sets the value of [file_id][Self::file_id].
    pub fn set_file_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.file_id = Some(v.into());
        self
    }

    /// Sets or clears the value of [file_id][Self::file_id].
    pub fn set_or_clear_file_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.file_id = v.map(|x| x.into());
        self
    }
}

/// The request for [CaseManagement::get_eu_support][crate::client::CaseManagement::get_eu_support].
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetEuSupportRequest {
}

impl GetEuSupportRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }
}

/// The request for [CaseManagement::get_technical_offerings][crate::client::CaseManagement::get_technical_offerings].
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetTechnicalOfferingsRequest {
}

impl GetTechnicalOfferingsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }
}

/// The request for [CaseManagement::get_resolution_codes][crate::client::CaseManagement::get_resolution_codes].
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetResolutionCodesRequest {
}

impl GetResolutionCodesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }
}

/// The request for [CaseManagement::get_statuses][crate::client::CaseManagement::get_statuses].
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetStatusesRequest {
}

impl GetStatusesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn create_case_names() -> anyhow::Result<()> {
        let request = CreateCaseRequest::new()
            .set_type("technical")
            .set_subject("Cannot reach my instance")
            .set_severity(2)
            .set_eu(EuPayload::new().set_supported(true).set_data_center(123))
            .set_offering(
                OfferingPayload::new().set_name("Cloud Object Storage").set_type(
                    OfferingPayloadType::new()
                        .set_group("crn_service_name")
                        .set_key("cloud-object-storage"),
                ),
            )
            .set_watchlist([User::new().set_realm("IBMid").set_user_id("user@example.com")])
            .set_invoice_number("INV-1")
            .set_sla_credit_request(false);
        let got = serde_json::to_value(request)?;
        assert_eq!(
            got,
            json!({
                "type": "technical",
                "subject": "Cannot reach my instance",
                "severity": 2,
                "eu": {"supported": true, "data_center": 123},
                "offering": {
                    "name": "Cloud Object Storage",
                    "type": {"group": "crn_service_name", "key": "cloud-object-storage"},
                },
                "watchlist": [{"realm": "IBMid", "user_id": "user@example.com"}],
                "invoiceNumber": "INV-1",
                "slaCreditRequest": false,
            })
        );
        Ok(())
    }

    #[test]
    fn upload_file_skips_the_data() -> anyhow::Result<()> {
        let request = UploadFileRequest::new()
            .set_case_number("TS001234")
            .set_file(bytes::Bytes::from_static(b"the quick brown fox"));
        let got = serde_json::to_value(request)?;
        assert_eq!(got, json!({"caseNumber": "TS001234"}));
        Ok(())
    }

    #[test]
    fn case_keeps_unknown_fields() -> anyhow::Result<()> {
        let input = json!({
            "number": "TS001234",
            "short_description": "Cannot reach my instance",
            "severity": 2,
            "status": "New",
            "watchlist": [{"name": "A User", "realm": "IBMid", "user_id": "user@example.com"}],
            "agent_close_only": false,
            "invoice_number": "INV-1",
        });
        let got = serde_json::from_value::<Case>(input.clone())?;
        assert_eq!(got.number.as_deref(), Some("TS001234"));
        assert_eq!(got.severity, Some(2));
        assert_eq!(got.watchlist[0].name.as_deref(), Some("A User"));
        assert_eq!(got.extra.get("agent_close_only"), Some(&json!(false)));
        assert_eq!(got.extra.get("invoice_number"), Some(&json!("INV-1")));
        assert_eq!(serde_json::to_value(&got)?, input);
        Ok(())
    }

    #[test]
    fn case_list_defaults() -> anyhow::Result<()> {
        let got = serde_json::from_value::<CaseList>(json!({
            "total_count": 1,
            "next": {"href": "/case-management/v1/cases?offset=10"},
        }))?;
        assert_eq!(got.total_count, Some(1));
        assert_eq!(
            got.next.and_then(|l| l.href).as_deref(),
            Some("/case-management/v1/cases?offset=10")
        );
        assert!(got.cases.is_empty());
        Ok(())
    }
}

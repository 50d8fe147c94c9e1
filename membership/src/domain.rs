use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

/// Declares an enum the API exchanges. Each variant carries its wire name,
/// used both by serde and as `<option>` value, and its display label.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $ty:ident {
            $($(#[$vmeta:meta])* $variant:ident => $wire:literal, $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, Display,
            Default,
        )]
        pub enum $ty {
            $(
                $(#[$vmeta])*
                #[serde(rename = $wire)]
                #[strum(to_string = $label)]
                $variant,
            )+
        }

        impl $ty {
            pub fn as_wire(&self) -> &'static str {
                match self {
                    $(Self::$variant => $wire),+
                }
            }

            pub fn from_wire(value: &str) -> Option<Self> {
                Self::iter().find(|v| v.as_wire() == value)
            }
        }
    };
}

wire_enum! {
    pub enum Role {
        #[default]
        Member => "MEMBER", "Member",
        Admin => "ADMIN", "Admin",
        Subscriber => "SUBSCRIBER", "Subscriber",
    }
}

wire_enum! {
    pub enum AccountStatus {
        #[default]
        Active => "ACTIVE", "Active",
        Inactive => "INACTIVE", "Inactive",
        Deleted => "DELETED", "Deleted",
    }
}

wire_enum! {
    /// Review state of a sign-up request.
    pub enum RegisterStatus {
        #[default]
        Pending => "PENDING", "Pending approval",
        Approved => "APPROVED", "Approved",
        Rejected => "REJECTED", "Rejected",
        Cancelled => "CANCELLED", "Cancelled",
    }
}

impl RegisterStatus {
    /// Statuses offered by the list filter. Cancelled requests are listed but not filterable.
    pub fn filterable() -> impl Iterator<Item = RegisterStatus> {
        Self::iter().filter(|s| *s != RegisterStatus::Cancelled)
    }

    /// Targets an operator may move a request to.
    pub fn is_decision(&self) -> bool {
        matches!(self, RegisterStatus::Approved | RegisterStatus::Rejected)
    }
}

wire_enum! {
    pub enum MemberSearchType {
        #[default]
        All => "ALL", "All fields",
        Email => "EMAIL", "Email",
        OrganizationName => "ORGANIZATION_NAME", "Organization",
        BizNumber => "BIZ_NUMBER", "Business number",
        RepresentativeName => "REPRESENTATIVE_NAME", "Representative",
    }
}

/// An organization member or sign-up applicant. `email` is the identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub email: String,
    pub organization_name: String,
    pub biz_number: String,
    pub representative_name: String,
    pub contact_name: String,
    pub role: Role,
    pub account_status: AccountStatus,
    pub approved_at: Option<String>,
    pub reject_reason: Option<String>,
    pub register_status: RegisterStatus,
    pub created_at: String,
    pub checked_at: Option<String>,
}

impl Member {
    /// A reject reason may only accompany a rejected request.
    pub fn reject_reason_consistent(&self) -> bool {
        self.reject_reason.is_none() || self.register_status == RegisterStatus::Rejected
    }

    pub fn is_pending(&self) -> bool {
        self.register_status == RegisterStatus::Pending
    }
}

/// One page of members as returned by the list query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MembersPage {
    pub content: Vec<Member>,
    pub total_pages: u32,
    pub total_elements: u64,
    pub current_page: u32,
    pub is_first: bool,
    pub is_last: bool,
}

impl MembersPage {
    pub fn empty() -> Self {
        Self {
            content: Vec::new(),
            total_pages: 0,
            total_elements: 0,
            current_page: 1,
            is_first: true,
            is_last: true,
        }
    }

    /// Whether the first/last flags agree with the page numbers.
    pub fn flags_consistent(&self) -> bool {
        self.is_first == (self.current_page <= 1)
            && self.is_last == (self.current_page >= self.total_pages)
    }

    pub fn find(&self, email: &str) -> Option<&Member> {
        self.content.iter().find(|m| m.email == email)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SearchCondition {
    pub member_search_type: MemberSearchType,
    pub keyword: String,
    pub register_status: Option<RegisterStatus>,
    pub role: Option<Role>,
}

/// Variables of the list query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberPageRequest {
    pub page: u32,
    pub size: u32,
    pub condition: SearchCondition,
}

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Formats a server timestamp for display, falling back to the raw text.
pub fn display_timestamp(raw: &str) -> String {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return ts.format(DISPLAY_FORMAT).to_string();
    }
    if let Ok(ts) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return ts.format(DISPLAY_FORMAT).to_string();
    }
    raw.to_string()
}

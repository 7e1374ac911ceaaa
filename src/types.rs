//! Shared data for the window: preset tables and the lookup message types.

use hickory_resolver::proto::rr::RecordType;

/// A selectable upstream nameserver. An empty address means "use the system
/// resolver configuration".
#[derive(Debug, Clone, Copy)]
pub struct NameserverEntry {
    pub label: &'static str,
    pub address: &'static str,
}

impl NameserverEntry {
    /// The override address, or `None` for the system-default entry.
    pub fn address(&self) -> Option<&'static str> {
        if self.address.is_empty() {
            None
        } else {
            Some(self.address)
        }
    }
}

/// Preset nameservers, in display order.
pub const NAMESERVERS: &[NameserverEntry] = &[
    NameserverEntry { label: "System Default", address: "" },
    NameserverEntry { label: "Cloudflare (1.1.1.1)", address: "1.1.1.1" },
    NameserverEntry { label: "Google (8.8.8.8)", address: "8.8.8.8" },
    NameserverEntry { label: "Hetzner - (helium.ns.hetzner.de)", address: "193.47.99.5" },
    NameserverEntry { label: "Hetzner - (oxygen.ns.hetzner.com)", address: "88.198.229.192" },
    NameserverEntry { label: "Hetzner - (hydrogen.ns.hetzner.com)", address: "213.133.100.98" },
    NameserverEntry { label: "Quad9 (9.9.9.9)", address: "9.9.9.9" },
];

/// Record types offered in the UI, in display order.
pub const RECORD_TYPES: &[RecordType] = &[
    RecordType::A,
    RecordType::AAAA,
    RecordType::ANY,
    RecordType::CAA,
    RecordType::CNAME,
    RecordType::DNSKEY,
    RecordType::DS,
    RecordType::MX,
    RecordType::NS,
    RecordType::PTR,
    RecordType::SOA,
    RecordType::SRV,
    RecordType::TLSA,
    RecordType::TSIG,
    RecordType::TXT,
];

/// One DNS query as dispatched to the lookup worker.
#[derive(Debug, Clone)]
pub struct LookupRequest {
    pub domain: String,
    pub record_type: RecordType,
    pub nameserver: Option<String>,
}

/// Terminal result of a lookup, fully formatted for the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Success(String),
    Failure(String),
}

impl LookupOutcome {
    pub fn text(&self) -> &str {
        match self {
            Self::Success(text) | Self::Failure(text) => text,
        }
    }
}

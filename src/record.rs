/// Default cell value for telemetry fields that were never populated.
pub const NA: &str = "N/A";

/// Fixed column order for both the CSV table and the XLSX sheet.
pub const HEADERS: [&str; 11] = [
    "#",
    "Instance ID",
    "Instance Name",
    "OS Type",
    "Status",
    "Uptime",
    "Falcon Service",
    "Pending Updates",
    "Hostname",
    "Kernel",
    "OS",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Skipped,
    DryRun,
    Error,
    InvalidJson,
    Success,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Skipped => "Skipped",
            Status::DryRun => "Dry-Run",
            Status::Error => "Error",
            Status::InvalidJson => "Error: Invalid JSON",
            Status::Success => "Success",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsType {
    Unknown,
    Linux,
    Windows,
}

impl OsType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OsType::Unknown => "Unknown",
            OsType::Linux => "Linux",
            OsType::Windows => "Windows",
        }
    }
}

/// One output row. Telemetry fields keep their `N/A` defaults unless the
/// section carried a recognized JSON payload.
#[derive(Debug, Clone)]
pub struct Record {
    pub ordinal: String,
    pub instance_id: String,
    pub instance_name: String,
    pub os_type: OsType,
    pub status: Status,
    pub uptime: String,
    pub falcon_service: String,
    pub pending_updates: String,
    pub hostname: String,
    pub kernel: String,
    pub os_name: String,
}

impl Record {
    pub fn new(ordinal: &str, instance_id: &str, instance_name: &str) -> Self {
        Self {
            ordinal: ordinal.to_string(),
            instance_id: instance_id.to_string(),
            instance_name: instance_name.to_string(),
            os_type: OsType::Unknown,
            status: Status::Success,
            uptime: NA.to_string(),
            falcon_service: NA.to_string(),
            pending_updates: NA.to_string(),
            hostname: NA.to_string(),
            kernel: NA.to_string(),
            os_name: NA.to_string(),
        }
    }

    /// Cells in `HEADERS` order.
    pub fn row(&self) -> [&str; 11] {
        [
            &self.ordinal,
            &self.instance_id,
            &self.instance_name,
            self.os_type.as_str(),
            self.status.as_str(),
            &self.uptime,
            &self.falcon_service,
            &self.pending_updates,
            &self.hostname,
            &self.kernel,
            &self.os_name,
        ]
    }

    /// Sort key: plain string comparison on status, then OS type, then
    /// instance id. Alphabetical, not severity-ranked.
    pub fn sort_key(&self) -> (&str, &str, &str) {
        (self.status.as_str(), self.os_type.as_str(), &self.instance_id)
    }
}

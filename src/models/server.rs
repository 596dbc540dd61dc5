use serde::{Deserialize, Serialize};

/// One inventory record as stored by the registry and sent over the wire.
///
/// Field names are capitalised on the wire (`ID`, `HostName`, `IPAddress`,
/// `Status`) and must stay that way for existing clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Server {
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(rename = "HostName")]
    pub host_name: String,
    #[serde(rename = "IPAddress")]
    pub ip_address: String,
    #[serde(rename = "Status")]
    pub status: String,
}

/// Request body for create and update.
///
/// Every field is optional and defaults to an empty string. Any `ID` the
/// client sends is accepted by the decoder and then dropped, since ids are
/// assigned by the registry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerPayload {
    #[serde(rename = "ID", skip_serializing)]
    pub id: Option<i64>,
    #[serde(rename = "HostName")]
    pub host_name: String,
    #[serde(rename = "IPAddress")]
    pub ip_address: String,
    #[serde(rename = "Status")]
    pub status: String,
}

impl ServerPayload {
    pub fn new(host_name: &str, ip_address: &str, status: &str) -> Self {
        Self {
            id: None,
            host_name: host_name.to_string(),
            ip_address: ip_address.to_string(),
            status: status.to_string(),
        }
    }

    /// Decodes a raw request body.
    ///
    /// The JSON literal `null` is accepted and yields an empty payload.
    pub fn from_json(body: &[u8]) -> serde_json::Result<Self> {
        let payload: Option<Self> = serde_json::from_slice(body)?;
        Ok(payload.unwrap_or_default())
    }

    /// Builds the stored record under a registry-assigned id.
    pub fn into_server(self, id: i64) -> Server {
        Server {
            id,
            host_name: self.host_name,
            ip_address: self.ip_address,
            status: self.status,
        }
    }
}

impl Server {
    /// Replaces every mutable field, keeping the id.
    pub fn apply(&mut self, payload: ServerPayload) {
        self.host_name = payload.host_name;
        self.ip_address = payload.ip_address;
        self.status = payload.status;
    }
}

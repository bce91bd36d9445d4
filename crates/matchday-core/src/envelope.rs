// Response envelope wire format
//
// Every handler reply is `{"params":{"status":...},"data":{...}}`. The
// `data` field is omitted entirely for absence/negative codes.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;
use crate::status::StatusCode;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResponseParams {
    pub status: StatusCode,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResponseEnvelope {
    pub params: ResponseParams,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl ResponseEnvelope {
    /// Envelope with a status and no payload
    pub fn status(status: StatusCode) -> Self {
        Self {
            params: ResponseParams { status },
            data: None,
        }
    }

    /// Success envelope carrying an action-specific payload
    pub fn success(data: impl Serialize) -> Result<Self> {
        Ok(Self {
            params: ResponseParams {
                status: StatusCode::Success,
            },
            data: Some(serde_json::to_value(data)?),
        })
    }

    pub fn status_code(&self) -> StatusCode {
        self.params.status
    }
}

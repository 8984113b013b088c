//! API Response wrapper

use chrono::Utc;
use menu_core::FieldError;
use menu_shared::PageMeta;
use serde::Serialize;

#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<ErrorBody>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PageMeta>,
    pub timestamp: String,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<FieldError>>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            pagination: None,
            timestamp: Utc::now().to_rfc3339(),
        }
    }

    pub fn paginated(data: T, meta: PageMeta) -> Self {
        Self {
            pagination: Some(meta),
            ..Self::success(data)
        }
    }

    pub fn error(code: &str, message: &str) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ErrorBody {
                code: code.to_string(),
                message: message.to_string(),
                fields: None,
            }),
            pagination: None,
            timestamp: Utc::now().to_rfc3339(),
        }
    }

    pub fn with_fields(mut self, fields: Vec<FieldError>) -> Self {
        if let Some(error) = self.error.as_mut() {
            error.fields = Some(fields);
        }
        self
    }
}

/// Simplified error system: one enum, one variant per failure surface.
///
/// Nothing in the seat-map core is fatal; these only surface while loading
/// the venue document.
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// The venue document could not be parsed
    DataError(String),
    /// A structurally valid document with unusable content
    ValidationError(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::DataError(msg) => write!(f, "Data Error: {}", msg),
            AppError::ValidationError(msg) => write!(f, "Validation Error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        AppError::DataError(error.to_string())
    }
}

impl From<AppError> for wasm_bindgen::JsValue {
    fn from(error: AppError) -> Self {
        wasm_bindgen::JsValue::from_str(&error.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
pub type DataResult<T> = Result<T, AppError>;

use wasm_bindgen::JsValue;

#[derive(Debug, thiserror::Error)]
pub enum FieldError {
    #[error("invalid field config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("invalid color {0:?}, expected #rrggbb or #rrggbbaa")]
    InvalidColor(String),
    #[error("invalid value for {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },
    #[error("browser call failed: {0}")]
    Dom(String),
}

pub type FieldResult<T> = Result<T, FieldError>;

impl From<JsValue> for FieldError {
    fn from(value: JsValue) -> FieldError {
        FieldError::Dom(format!("{:?}", value))
    }
}

impl From<FieldError> for JsValue {
    fn from(err: FieldError) -> JsValue {
        js_sys::Error::new(&err.to_string()).into()
    }
}

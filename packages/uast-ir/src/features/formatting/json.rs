use super::format::LlmFormat;
use crate::errors::Result;
use crate::features::uast::Uast;

/// The container's JSON form
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormat {
    pub pretty: bool,
}

impl JsonFormat {
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl LlmFormat for JsonFormat {
    fn format(&self, uast: &Uast) -> Result<String> {
        uast.to_json(self.pretty)
    }
}

use serde::{Deserialize, Serialize};

/// Тело ответа backend при ошибке.
///
/// Разные маршруты кладут текст в `message` или в `error`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiErrorBody {
    /// Первый непустой текст ошибки, как его прислал сервер
    pub fn into_message(self) -> Option<String> {
        [self.message, self.error]
            .into_iter()
            .flatten()
            .find(|m| !m.trim().is_empty())
    }
}

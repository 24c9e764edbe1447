//! HTTP-коллаборатор: gloo-net запросы к backend с bearer-токеном

use super::{Confirmer, MutationError, Transport};
use crate::shared::api_utils::{api_url, auth_header};
use contracts::shared::{ApiErrorBody, EntityKind, EntityRoute, HttpVerb, Record};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::Serialize;
use serde_json::Value;

/// Транспорт мутаций поверх `fetch` браузера
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpTransport;

impl Transport for HttpTransport {
    async fn send(&self, route: &EntityRoute, body: Option<&Value>) -> Result<(), MutationError> {
        let url = api_url(&route.path);
        let builder = with_auth(match route.verb {
            HttpVerb::Get => Request::get(&url),
            HttpVerb::Delete => Request::delete(&url),
            HttpVerb::Patch => Request::patch(&url),
        });

        let response = match body {
            Some(body) => builder
                .json(body)
                .map_err(|e| MutationError::Decode(e.to_string()))?
                .send()
                .await,
            None => builder.send().await,
        }
        .map_err(|e| MutationError::Transport(e.to_string()))?;

        ensure_ok(response).await.map(|_| ())
    }
}

/// Подтверждение через `window.confirm()`; без окна считаем отказом
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserConfirm;

impl Confirmer for BrowserConfirm {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}

/// Параметры запроса коллекции
#[derive(Debug, Clone, Default, Serialize)]
pub struct FetchParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_id: Option<String>,
}

impl FetchParams {
    /// `?search=...&store_id=...` или пустая строка
    pub fn query_string(&self) -> String {
        match serde_qs::to_string(self) {
            Ok(qs) if !qs.is_empty() => format!("?{}", qs),
            Ok(_) => String::new(),
            Err(e) => {
                log::warn!("failed to encode fetch params: {}", e);
                String::new()
            }
        }
    }
}

/// Загрузить коллекцию сущности
pub async fn fetch_collection(
    kind: EntityKind,
    params: &FetchParams,
) -> Result<Vec<Record>, MutationError> {
    let url = api_url(&format!("{}{}", kind.collection_path(), params.query_string()));
    log::debug!("GET {}", url);

    let response = with_auth(Request::get(&url))
        .send()
        .await
        .map_err(|e| MutationError::Transport(e.to_string()))?;
    let response = ensure_ok(response).await?;

    let body: Value = response
        .json()
        .await
        .map_err(|e| MutationError::Decode(e.to_string()))?;
    decode_collection(body)
}

/// Разобрать тело ответа коллекции.
///
/// Принимается голый массив или конверт `{ "data": [...] }` / `{ "items": [...] }`.
/// Не-объекты и записи без пригодного `id` отбрасываются.
pub fn decode_collection(body: Value) -> Result<Vec<Record>, MutationError> {
    let items = match body {
        Value::Array(items) => items,
        Value::Object(mut envelope) => match ["data", "items"]
            .iter()
            .find_map(|key| envelope.remove(*key).filter(Value::is_array))
        {
            Some(Value::Array(items)) => items,
            _ => {
                return Err(MutationError::Decode(
                    "expected an array or an object with 'data'/'items'".to_string(),
                ))
            }
        },
        other => {
            return Err(MutationError::Decode(format!(
                "unexpected collection body: {}",
                other
            )))
        }
    };

    let total = items.len();
    let records: Vec<Record> = items
        .into_iter()
        .filter_map(Record::from_value)
        .filter(|r| r.id().is_some())
        .collect();
    if records.len() != total {
        log::warn!(
            "dropped {} of {} collection items without a usable id",
            total - records.len(),
            total
        );
    }
    Ok(records)
}

fn with_auth(builder: RequestBuilder) -> RequestBuilder {
    let builder = builder.header("Accept", "application/json");
    match auth_header() {
        Some(header) => builder.header("Authorization", &header),
        None => builder,
    }
}

async fn ensure_ok(response: Response) -> Result<Response, MutationError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let message = response
        .json::<ApiErrorBody>()
        .await
        .ok()
        .and_then(ApiErrorBody::into_message);
    Err(MutationError::server(status, message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_bare_array() {
        let records = decode_collection(json!([{"id": 1}, {"id": "x"}])).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_decode_envelopes() {
        assert_eq!(decode_collection(json!({"data": [{"id": 1}]})).unwrap().len(), 1);
        assert_eq!(
            decode_collection(json!({"success": true, "items": [{"id": 1}, {"id": 2}]}))
                .unwrap()
                .len(),
            2
        );
    }

    #[test]
    fn test_decode_drops_items_without_id() {
        let records = decode_collection(json!([{"id": 1}, {"name": "no id"}, 5, null])).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_decode_rejects_unexpected_shapes() {
        assert!(matches!(
            decode_collection(json!({"data": "nope"})),
            Err(MutationError::Decode(_))
        ));
        assert!(matches!(
            decode_collection(json!("text")),
            Err(MutationError::Decode(_))
        ));
    }

    #[test]
    fn test_fetch_params_query_string() {
        assert_eq!(FetchParams::default().query_string(), "");
        let params = FetchParams {
            search: Some("milk bag".to_string()),
            store_id: Some("7".to_string()),
        };
        let qs = params.query_string();
        assert!(qs.starts_with('?'));
        assert!(qs.contains("store_id=7"));
        assert!(qs.contains("search=milk"));
    }
}

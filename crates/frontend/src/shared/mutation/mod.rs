//! Диспетчер мутаций сущностей: удаление и переключение поля по `id`
//!
//! Диспетчер разрешает маршрут по реестру `EntityKind`, выполняет запрос и
//! возвращает событие [`MutationEvent`]. В состояние вызывающего он не лезет:
//! список сам применяет событие к своей коллекции (см. `ListState::apply`).
//!
//! Каждый вызов независим: `idle → in flight → success | failure`, без
//! очередей, повторов и отмены.

pub mod http;

use crate::shared::list::controller::ListEvent;
use crate::shared::list::guard::ScheduleRefusal;
use contracts::shared::{EntityKind, EntityRoute, RecordId, RouteError};
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MutationError {
    /// Ошибка программиста: неизвестная сущность или нет маршрута
    #[error(transparent)]
    Route(#[from] RouteError),
    #[error("Сетевая ошибка: {0}")]
    Transport(String),
    /// Текст ошибки сервера передаётся как есть
    #[error("{message}")]
    Server { status: u16, message: String },
    #[error("Не удалось разобрать ответ сервера: {0}")]
    Decode(String),
    #[error(transparent)]
    Refused(#[from] ScheduleRefusal),
}

impl MutationError {
    pub fn server(status: u16, message: Option<String>) -> Self {
        let message = message
            .unwrap_or_else(|| format!("Запрос завершился с ошибкой (HTTP {})", status));
        Self::Server { status, message }
    }
}

/// Отправка запроса на backend
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, route: &EntityRoute, body: Option<&Value>) -> Result<(), MutationError>;
}

/// Подтверждение удаления пользователем
pub trait Confirmer {
    fn confirm(&self, message: &str) -> bool;
}

/// Результат успешной мутации, который список применяет к своей коллекции
#[derive(Debug, Clone, PartialEq)]
pub enum MutationEvent {
    Removed {
        id: RecordId,
    },
    Toggled {
        id: RecordId,
        field: String,
        value: Value,
    },
}

impl From<MutationEvent> for ListEvent {
    fn from(event: MutationEvent) -> Self {
        match event {
            MutationEvent::Removed { id } => ListEvent::Removed(id),
            MutationEvent::Toggled { id, field, value } => ListEvent::Toggled { id, field, value },
        }
    }
}

pub struct EntityMutationDispatcher<T, C> {
    transport: T,
    confirmer: C,
}

impl<T: Transport, C: Confirmer> EntityMutationDispatcher<T, C> {
    pub fn new(transport: T, confirmer: C) -> Self {
        Self {
            transport,
            confirmer,
        }
    }

    /// Удалить запись сущности с именем `entity_name`.
    ///
    /// `Ok(None)`: пользователь отказался, запрос не отправлялся.
    pub async fn remove(
        &self,
        entity_name: &str,
        id: &RecordId,
    ) -> Result<Option<MutationEvent>, MutationError> {
        let kind = parse_entity(entity_name)?;
        self.remove_kind(kind, id).await
    }

    pub async fn remove_kind(
        &self,
        kind: EntityKind,
        id: &RecordId,
    ) -> Result<Option<MutationEvent>, MutationError> {
        let route = kind.delete_route(id);
        let question = format!("Удалить запись «{}» ({})?", id, kind.list_name());
        if !self.confirmer.confirm(&question) {
            log::debug!("delete {} {} declined", kind, id);
            return Ok(None);
        }

        log::debug!("{} {}", route.verb.as_str(), route.path);
        self.transport.send(&route, None).await?;
        Ok(Some(MutationEvent::Removed { id: id.clone() }))
    }

    /// Переключить поле-флаг (`1`/`0`) записи сущности `entity_name`
    pub async fn toggle_field(
        &self,
        entity_name: &str,
        id: &RecordId,
        current: &Value,
        field: &str,
    ) -> Result<MutationEvent, MutationError> {
        let kind = parse_entity(entity_name)?;
        self.toggle_field_kind(kind, id, current, field).await
    }

    pub async fn toggle_field_kind(
        &self,
        kind: EntityKind,
        id: &RecordId,
        current: &Value,
        field: &str,
    ) -> Result<MutationEvent, MutationError> {
        let route = kind.toggle_route(id).inspect_err(|e| log::error!("{}", e))?;
        let value = toggled(current);

        let mut body = Map::new();
        body.insert(field.to_string(), value.clone());
        let body = Value::Object(body);

        log::debug!("{} {} {}", route.verb.as_str(), route.path, body);
        self.transport.send(&route, Some(&body)).await?;
        Ok(MutationEvent::Toggled {
            id: id.clone(),
            field: field.to_string(),
            value,
        })
    }
}

fn parse_entity(entity_name: &str) -> Result<EntityKind, MutationError> {
    entity_name.parse::<EntityKind>().map_err(|e| {
        log::error!("{}", e);
        MutationError::from(e)
    })
}

/// Значение поля как флаг: `true`, ненулевое число, `"1"`/`"true"`
pub fn flag_of(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|x| x != 0.0),
        Value::String(s) => {
            let s = s.trim();
            s == "1" || s.eq_ignore_ascii_case("true")
        }
        _ => false,
    }
}

/// Новое значение флага: дополнение текущего, всегда `0` или `1`
pub fn toggled(current: &Value) -> Value {
    Value::from(if flag_of(current) { 0 } else { 1 })
}

/// In-memory коллабораторы для тестов: запоминают вызовы, сеть не трогают
#[cfg(test)]
pub(crate) mod fakes {
    use super::*;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    pub struct FakeTransport {
        pub calls: RefCell<Vec<(EntityRoute, Option<Value>)>>,
        pub fail_with: Option<MutationError>,
    }

    impl FakeTransport {
        pub fn failing(err: MutationError) -> Self {
            Self {
                fail_with: Some(err),
                ..Self::default()
            }
        }
    }

    impl Transport for &FakeTransport {
        async fn send(
            &self,
            route: &EntityRoute,
            body: Option<&Value>,
        ) -> Result<(), MutationError> {
            self.calls
                .borrow_mut()
                .push((route.clone(), body.cloned()));
            match &self.fail_with {
                Some(err) => Err(err.clone()),
                None => Ok(()),
            }
        }
    }

    pub struct FakeConfirm {
        pub answer: bool,
        pub asked: Cell<usize>,
    }

    impl FakeConfirm {
        pub fn answering(answer: bool) -> Self {
            Self {
                answer,
                asked: Cell::new(0),
            }
        }
    }

    impl Confirmer for &FakeConfirm {
        fn confirm(&self, _message: &str) -> bool {
            self.asked.set(self.asked.get() + 1);
            self.answer
        }
    }
}

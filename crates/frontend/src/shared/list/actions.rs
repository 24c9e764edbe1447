//! Мутации строки списка: проверка расписания, запрос через диспетчер и
//! применение результата к состоянию списка.
//!
//! Событие передаётся в `apply` только после успешного ответа. При отказе,
//! ошибке или отмене удаления состояние списка не трогается.

use super::controller::ListEvent;
use super::guard::check_schedule;
use crate::shared::mutation::{
    Confirmer, EntityMutationDispatcher, MutationError, MutationEvent, Transport,
};
use chrono::{DateTime, Utc};
use contracts::shared::{EntityKind, Record, RecordId};
use serde_json::Value;

/// Переключить флаг `field` записи `record`.
///
/// Если задан `schedule_field` и показ ещё не начался, запрос не
/// отправляется и возвращается `MutationError::Refused`.
pub async fn toggle_record<T: Transport, C: Confirmer>(
    dispatcher: &EntityMutationDispatcher<T, C>,
    kind: EntityKind,
    record: &Record,
    field: &str,
    schedule_field: Option<&str>,
    now: DateTime<Utc>,
    apply: impl FnOnce(ListEvent),
) -> Result<MutationEvent, MutationError> {
    let id = record.id().ok_or_else(|| {
        MutationError::Decode(format!("{}: запись без id", kind.name()))
    })?;
    if let Some(start_field) = schedule_field {
        check_schedule(record, start_field, now)?;
    }

    let current = record.get(field).cloned().unwrap_or(Value::Null);
    let event = dispatcher
        .toggle_field_kind(kind, &id, &current, field)
        .await?;
    apply(event.clone().into());
    Ok(event)
}

/// Удалить запись; `Ok(None)` если пользователь отказался
pub async fn remove_record<T: Transport, C: Confirmer>(
    dispatcher: &EntityMutationDispatcher<T, C>,
    kind: EntityKind,
    id: &RecordId,
    apply: impl FnOnce(ListEvent),
) -> Result<Option<MutationEvent>, MutationError> {
    let event = dispatcher.remove_kind(kind, id).await?;
    if let Some(event) = &event {
        apply(event.clone().into());
    }
    Ok(event)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list::controller::{ListState, SearchMode};
    use crate::shared::list::guard::ScheduleRefusal;
    use crate::shared::mutation::fakes::{FakeConfirm, FakeTransport};
    use chrono::TimeZone;
    use futures::executor::block_on;
    use serde_json::json;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 15, 12, 0, 0).unwrap()
    }

    fn banners() -> ListState {
        let records = vec![
            json!({"id": 1, "title": "Весна", "status": 0, "start_date": "2025-04-01"}),
            json!({"id": 2, "title": "Зима", "status": 1, "start_date": "2025-01-01"}),
        ]
        .into_iter()
        .filter_map(Record::from_value)
        .collect();
        let mut state = ListState::new(10, SearchMode::Local);
        state.apply(ListEvent::FetchStarted);
        state.apply(ListEvent::FetchSucceeded(records));
        state
    }

    #[test]
    fn test_toggle_before_start_sends_nothing() {
        let transport = FakeTransport::default();
        let confirm = FakeConfirm::answering(true);
        let dispatcher = EntityMutationDispatcher::new(&transport, &confirm);
        let mut state = banners();
        let before = state.clone();
        let record = state.find(&RecordId::Int(1)).cloned().unwrap();

        let result = block_on(toggle_record(
            &dispatcher,
            EntityKind::Banner,
            &record,
            "status",
            Some("start_date"),
            now(),
            |e| state.apply(e),
        ));

        assert!(matches!(
            result,
            Err(MutationError::Refused(ScheduleRefusal::NotStarted { .. }))
        ));
        assert!(transport.calls.borrow().is_empty());
        assert_eq!(state.collection(), before.collection());
        assert_eq!(state.view(), before.view());
    }

    #[test]
    fn test_toggle_after_start_patches_row() {
        let transport = FakeTransport::default();
        let confirm = FakeConfirm::answering(true);
        let dispatcher = EntityMutationDispatcher::new(&transport, &confirm);
        let mut state = banners();
        let record = state.find(&RecordId::Int(2)).cloned().unwrap();

        block_on(toggle_record(
            &dispatcher,
            EntityKind::Banner,
            &record,
            "status",
            Some("start_date"),
            now(),
            |e| state.apply(e),
        ))
        .unwrap();

        assert_eq!(transport.calls.borrow().len(), 1);
        let row = state.find(&RecordId::Int(2)).unwrap();
        assert_eq!(row.get("status"), Some(&json!(0)));
    }

    #[test]
    fn test_toggle_transport_error_keeps_state() {
        let transport = FakeTransport::failing(MutationError::Transport("offline".to_string()));
        let confirm = FakeConfirm::answering(true);
        let dispatcher = EntityMutationDispatcher::new(&transport, &confirm);
        let mut state = banners();
        let before = state.clone();
        let record = state.find(&RecordId::Int(2)).cloned().unwrap();

        let result = block_on(toggle_record(
            &dispatcher,
            EntityKind::Banner,
            &record,
            "status",
            None,
            now(),
            |e| state.apply(e),
        ));

        assert_eq!(result, Err(MutationError::Transport("offline".to_string())));
        assert_eq!(transport.calls.borrow().len(), 1);
        assert_eq!(state.collection(), before.collection());
        assert_eq!(state.view(), before.view());
    }

    #[test]
    fn test_declined_remove_keeps_row() {
        let transport = FakeTransport::default();
        let confirm = FakeConfirm::answering(false);
        let dispatcher = EntityMutationDispatcher::new(&transport, &confirm);
        let mut state = banners();

        let result = block_on(remove_record(
            &dispatcher,
            EntityKind::Banner,
            &RecordId::Int(1),
            |e| state.apply(e),
        ));

        assert_eq!(result, Ok(None));
        assert!(transport.calls.borrow().is_empty());
        assert_eq!(state.collection().len(), 2);
    }

    #[test]
    fn test_remove_error_keeps_row() {
        let transport = FakeTransport::failing(MutationError::server(409, None));
        let confirm = FakeConfirm::answering(true);
        let dispatcher = EntityMutationDispatcher::new(&transport, &confirm);
        let mut state = banners();

        let result = block_on(remove_record(
            &dispatcher,
            EntityKind::Banner,
            &RecordId::Int(1),
            |e| state.apply(e),
        ));

        assert!(matches!(result, Err(MutationError::Server { status: 409, .. })));
        assert_eq!(state.collection().len(), 2);
        assert!(state.find(&RecordId::Int(1)).is_some());
    }

    #[test]
    fn test_confirmed_remove_drops_row() {
        let transport = FakeTransport::default();
        let confirm = FakeConfirm::answering(true);
        let dispatcher = EntityMutationDispatcher::new(&transport, &confirm);
        let mut state = banners();

        block_on(remove_record(
            &dispatcher,
            EntityKind::Banner,
            &RecordId::Int(1),
            |e| state.apply(e),
        ))
        .unwrap();

        assert_eq!(state.collection().len(), 1);
        assert!(state.find(&RecordId::Int(1)).is_none());
        assert!(state.view().iter().all(|r| r.id() != Some(RecordId::Int(1))));
    }
}

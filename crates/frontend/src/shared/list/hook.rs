//! Реактивная обёртка над `ListState` для экранов Leptos.
//!
//! `ListController` загружает коллекцию, держит индикатор загрузки не меньше
//! заданного времени, рассылает события в `ListState` и выполняет мутации
//! через `EntityMutationDispatcher`, сообщая об исходе уведомлением.

use super::actions::{remove_record, toggle_record};
use super::controller::{loader_hold_ms, ListEvent, ListPrefs, ListState, SearchMode};
use crate::shared::config::AppConfig;
use crate::shared::mutation::http::{fetch_collection, BrowserConfirm, FetchParams, HttpTransport};
use crate::shared::mutation::{EntityMutationDispatcher, MutationError, MutationEvent};
use crate::shared::notify::NotificationService;
use crate::system::auth::storage;
use contracts::shared::{EntityKind, RecordId};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Параметры поведения списка конкретного экрана
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ListSettings {
    pub page_size: usize,
    pub min_loading_ms: u32,
    pub search_debounce_ms: u32,
    pub search_mode: SearchMode,
    /// Поле с временем начала показа; до него переключение статуса запрещено
    pub schedule_field: Option<&'static str>,
}

impl ListSettings {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            page_size: config.list.page_size,
            min_loading_ms: config.list.min_loading_ms,
            search_debounce_ms: config.list.search_debounce_ms,
            search_mode: SearchMode::Local,
            schedule_field: None,
        }
    }

    pub fn with_server_search(mut self) -> Self {
        self.search_mode = SearchMode::Server;
        self
    }

    pub fn with_schedule_guard(mut self, start_field: &'static str) -> Self {
        self.schedule_field = Some(start_field);
        self
    }
}

fn prefs_key(kind: EntityKind) -> String {
    format!("{}_list_state_v1", kind.name().to_lowercase())
}

fn load_prefs(kind: EntityKind) -> Option<ListPrefs> {
    let raw = storage::get_item(&prefs_key(kind))?;
    match serde_json::from_str(&raw) {
        Ok(prefs) => Some(prefs),
        Err(e) => {
            log::warn!("ignoring saved {} list state: {}", kind, e);
            None
        }
    }
}

fn save_prefs(kind: EntityKind, prefs: &ListPrefs) {
    match serde_json::to_string(prefs) {
        Ok(json) => storage::set_item(&prefs_key(kind), &json),
        Err(e) => log::warn!("failed to save {} list state: {}", kind, e),
    }
}

#[derive(Clone, Copy)]
pub struct ListController {
    kind: EntityKind,
    settings: ListSettings,
    state: RwSignal<ListState>,
    notices: NotificationService,
    /// Номер последней запущенной загрузки; ответы старых загрузок отбрасываются
    fetch_seq: StoredValue<u64>,
}

impl ListController {
    pub fn new(kind: EntityKind, settings: ListSettings, notices: NotificationService) -> Self {
        let mut state = ListState::new(settings.page_size, settings.search_mode);
        if let Some(prefs) = load_prefs(kind) {
            state = state.with_prefs(prefs);
        }
        Self {
            kind,
            settings,
            state: RwSignal::new(state),
            notices,
            fetch_seq: StoredValue::new(0),
        }
    }

    pub fn state(&self) -> RwSignal<ListState> {
        self.state
    }

    fn dispatch(&self, event: ListEvent) {
        let _ = self.state.try_update(|s| s.apply(event));
    }

    fn persist(&self) {
        let prefs = self.state.with_untracked(|s| s.prefs());
        save_prefs(self.kind, &prefs);
    }

    fn fetch_params(&self) -> FetchParams {
        let search = match self.settings.search_mode {
            SearchMode::Server => Some(self.state.with_untracked(|s| s.query().trim().to_string())),
            SearchMode::Local => None,
        }
        .filter(|q| !q.is_empty());

        let store_id = if self.kind.is_store_scoped() {
            storage::get_current_store_id()
        } else {
            None
        };
        FetchParams { search, store_id }
    }

    /// Загрузить (или перезагрузить) коллекцию
    pub fn reload(&self) {
        let seq = self.fetch_seq.get_value() + 1;
        self.fetch_seq.set_value(seq);
        self.dispatch(ListEvent::FetchStarted);

        let this = *self;
        let params = self.fetch_params();
        let started = js_sys::Date::now();
        spawn_local(async move {
            let result = fetch_collection(this.kind, &params).await;

            let hold = loader_hold_ms(js_sys::Date::now() - started, this.settings.min_loading_ms);
            if hold > 0 {
                TimeoutFuture::new(hold).await;
            }

            if this.fetch_seq.try_get_value() != Some(seq) {
                log::debug!("{}: stale response #{} dropped", this.kind, seq);
                return;
            }
            let event = match result {
                Ok(records) => {
                    log::info!("{}: loaded {} records", this.kind, records.len());
                    ListEvent::FetchSucceeded(records)
                }
                Err(e) => {
                    log::error!("{}: failed to load collection: {}", this.kind, e);
                    ListEvent::FetchFailed(e.to_string())
                }
            };
            this.dispatch(event);
        });
    }

    /// Поиск. В серверном режиме запрос уходит на backend новой загрузкой.
    pub fn search(&self, query: String) {
        self.dispatch(ListEvent::Search(query));
        if self.settings.search_mode == SearchMode::Server {
            self.reload();
        }
    }

    pub fn sort_by(&self, key: String) {
        self.dispatch(ListEvent::SortBy(key));
        self.persist();
    }

    pub fn go_to_page(&self, page: usize) {
        self.dispatch(ListEvent::GoToPage(page));
    }

    pub fn set_page_size(&self, size: usize) {
        self.dispatch(ListEvent::SetPageSize(size));
        self.persist();
    }

    pub fn remove(&self, id: RecordId) {
        let this = *self;
        spawn_local(async move {
            let dispatcher = EntityMutationDispatcher::new(HttpTransport, BrowserConfirm);
            match remove_record(&dispatcher, this.kind, &id, |e| this.dispatch(e)).await {
                Ok(Some(event)) => this.on_mutated(&event),
                Ok(None) => {}
                Err(e) => this.on_failed("delete", &id, e),
            }
        });
    }

    /// Переключить поле-флаг записи (статус, доступность курьера)
    pub fn toggle(&self, id: RecordId, field: &'static str) {
        let Some(record) = self.state.with_untracked(|s| s.find(&id).cloned()) else {
            log::warn!("{}: toggle of unknown record {}", self.kind, id);
            return;
        };

        let this = *self;
        spawn_local(async move {
            let dispatcher = EntityMutationDispatcher::new(HttpTransport, BrowserConfirm);
            let result = toggle_record(
                &dispatcher,
                this.kind,
                &record,
                field,
                this.settings.schedule_field,
                chrono::Utc::now(),
                |e| this.dispatch(e),
            )
            .await;
            match result {
                Ok(event) => this.on_mutated(&event),
                Err(e) => this.on_failed("toggle", &id, e),
            }
        });
    }

    fn on_mutated(&self, event: &MutationEvent) {
        let text = match event {
            MutationEvent::Removed { id } => format!("Запись {} удалена", id),
            MutationEvent::Toggled { id, .. } => format!("Статус записи {} изменён", id),
        };
        log::info!("{}: {}", self.kind, text);
        self.notices.success(text);
    }

    fn on_failed(&self, operation: &str, id: &RecordId, error: MutationError) {
        match error {
            MutationError::Refused(refusal) => {
                log::info!("{}: {} of {} refused: {}", self.kind, operation, id, refusal);
                self.notices.warning(refusal.to_string());
            }
            error => {
                log::error!("{}: {} {} failed: {}", self.kind, operation, id, error);
                self.notices.error(error.to_string());
            }
        }
    }
}

/// Создать контроллер и сразу запустить первую загрузку
pub fn use_list_controller(kind: EntityKind, settings: ListSettings) -> ListController {
    let notices = crate::shared::notify::use_notifications();
    let controller = ListController::new(kind, settings, notices);
    controller.reload();
    controller
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_from_config() {
        let settings = ListSettings::from_config(&AppConfig::default());
        assert_eq!(settings.page_size, 10);
        assert_eq!(settings.min_loading_ms, 2000);
        assert_eq!(settings.search_mode, SearchMode::Local);
        assert_eq!(settings.schedule_field, None);
    }

    #[test]
    fn test_settings_builders() {
        let settings = ListSettings::from_config(&AppConfig::default())
            .with_server_search()
            .with_schedule_guard("start_date");
        assert_eq!(settings.search_mode, SearchMode::Server);
        assert_eq!(settings.schedule_field, Some("start_date"));
    }

    #[test]
    fn test_prefs_key_is_per_entity() {
        assert_eq!(prefs_key(EntityKind::Banner), "banner_list_state_v1");
        assert_ne!(prefs_key(EntityKind::Product), prefs_key(EntityKind::Order));
    }
}

//! Состояние списочного экрана и его переходы
//!
//! `ListState` владеет исходной коллекцией и её отображаемым представлением
//! (отфильтрованным и отсортированным). Все изменения идут через
//! [`ListState::apply`]: реактивная обёртка в `hook.rs` только рассылает
//! события, а вся логика переходов живёт здесь и тестируется без браузера.
//!
//! Фазы загрузки: `Idle → Loading → {Ready, Error}`; из `Ready` обратно в
//! `Loading` попадаем только явной перезагрузкой.

use super::filter::filter;
use super::pagination::{paginate, PageWindow};
use super::sort::{apply_sort, sort, SortState};
use contracts::shared::{Record, RecordId};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Ready,
    Error(String),
}

/// Где выполняется поиск: по загруженной коллекции или на backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    #[default]
    Local,
    Server,
}

/// Почему в таблице нечего показать
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmptyState {
    FetchFailed(String),
    NoData,
    NoMatches,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListEvent {
    FetchStarted,
    FetchSucceeded(Vec<Record>),
    FetchFailed(String),
    Search(String),
    SortBy(String),
    GoToPage(usize),
    SetPageSize(usize),
    Removed(RecordId),
    Toggled {
        id: RecordId,
        field: String,
        value: Value,
    },
}

/// Сохраняемые между сессиями настройки списка
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListPrefs {
    pub sort: SortState,
    pub page_size: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListState {
    phase: LoadPhase,
    collection: Vec<Record>,
    view: Vec<Record>,
    query: String,
    sort: SortState,
    page: usize,
    page_size: usize,
    search_mode: SearchMode,
}

impl ListState {
    pub fn new(page_size: usize, search_mode: SearchMode) -> Self {
        Self {
            phase: LoadPhase::Idle,
            collection: Vec::new(),
            view: Vec::new(),
            query: String::new(),
            sort: SortState::default(),
            page: 1,
            page_size: page_size.max(1),
            search_mode,
        }
    }

    pub fn with_prefs(mut self, prefs: ListPrefs) -> Self {
        self.sort = prefs.sort;
        self.page_size = prefs.page_size.max(1);
        self
    }

    pub fn prefs(&self) -> ListPrefs {
        ListPrefs {
            sort: self.sort.clone(),
            page_size: self.page_size,
        }
    }

    pub fn apply(&mut self, event: ListEvent) {
        match event {
            ListEvent::FetchStarted => {
                self.phase = LoadPhase::Loading;
            }
            ListEvent::FetchSucceeded(records) => {
                self.collection = records;
                self.rebuild_view();
                self.phase = LoadPhase::Ready;
                self.clamp_page();
            }
            ListEvent::FetchFailed(message) => {
                log::debug!("list phase -> error");
                self.phase = LoadPhase::Error(message);
            }
            ListEvent::Search(query) => {
                // Запрос запоминаем всегда: если загрузка ещё идёт, он будет
                // применён к пришедшей коллекции
                self.query = query;
                self.page = 1;
                if self.is_ready() && self.search_mode == SearchMode::Local {
                    self.rebuild_view();
                }
            }
            ListEvent::SortBy(key) => {
                if !self.is_ready() {
                    log::debug!("sort by '{}' ignored: list is not ready", key);
                    return;
                }
                let (sorted, next) = sort(&self.view, &key, &self.sort);
                self.view = sorted;
                self.sort = next;
            }
            ListEvent::GoToPage(page) => {
                if !self.is_ready() {
                    return;
                }
                self.page = page;
                self.clamp_page();
            }
            ListEvent::SetPageSize(size) => {
                if !self.is_ready() {
                    return;
                }
                self.page_size = size.max(1);
                self.page = 1;
            }
            ListEvent::Removed(id) => {
                remove_first(&mut self.collection, &id);
                remove_first(&mut self.view, &id);
                // если удалили последнюю запись страницы, шаг назад
                self.clamp_page();
            }
            ListEvent::Toggled { id, field, value } => {
                // фильтр намеренно не пересчитывается: запись остаётся на месте,
                // даже если новое значение больше не подходит под запрос
                patch_first(&mut self.collection, &id, &field, &value);
                patch_first(&mut self.view, &id, &field, &value);
            }
        }
    }

    /// Представление всегда строится от исходной коллекции, а не от
    /// предыдущего отфильтрованного вида
    fn rebuild_view(&mut self) {
        let filtered = match self.search_mode {
            SearchMode::Local => filter(&self.collection, &self.query),
            SearchMode::Server => self.collection.clone(),
        };
        self.view = apply_sort(&filtered, &self.sort);
    }

    fn clamp_page(&mut self) {
        self.page = self.window().effective_page;
    }

    pub fn window(&self) -> PageWindow {
        paginate(self.view.len(), self.page_size, self.page)
    }

    /// Записи текущей страницы
    pub fn visible(&self) -> &[Record] {
        self.window().slice(&self.view)
    }

    pub fn find(&self, id: &RecordId) -> Option<&Record> {
        self.collection.iter().find(|r| r.has_id(id))
    }

    pub fn empty_state(&self) -> Option<EmptyState> {
        match &self.phase {
            LoadPhase::Error(message) => Some(EmptyState::FetchFailed(message.clone())),
            LoadPhase::Ready if self.collection.is_empty() => Some(EmptyState::NoData),
            LoadPhase::Ready if self.view.is_empty() => Some(EmptyState::NoMatches),
            _ => None,
        }
    }

    pub fn phase(&self) -> &LoadPhase {
        &self.phase
    }

    pub fn is_ready(&self) -> bool {
        self.phase == LoadPhase::Ready
    }

    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    pub fn collection(&self) -> &[Record] {
        &self.collection
    }

    pub fn view(&self) -> &[Record] {
        &self.view
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn sort_state(&self) -> &SortState {
        &self.sort
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }
}

fn remove_first(records: &mut Vec<Record>, id: &RecordId) {
    if let Some(pos) = records.iter().position(|r| r.has_id(id)) {
        records.remove(pos);
    }
}

fn patch_first(records: &mut [Record], id: &RecordId, field: &str, value: &Value) {
    if let Some(record) = records.iter_mut().find(|r| r.has_id(id)) {
        record.set(field, value.clone());
    }
}

/// Сколько ещё держать индикатор загрузки, чтобы он не мигал на быстрых
/// ответах. Отсчёт идёт от начала фазы `Loading`.
pub fn loader_hold_ms(elapsed_ms: f64, min_visible_ms: u32) -> u32 {
    if !elapsed_ms.is_finite() || elapsed_ms <= 0.0 {
        return min_visible_ms;
    }
    let remaining = f64::from(min_visible_ms) - elapsed_ms;
    if remaining <= 0.0 {
        0
    } else {
        remaining.ceil() as u32
    }
}

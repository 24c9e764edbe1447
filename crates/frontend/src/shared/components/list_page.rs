//! Универсальный списочный экран сущности.
//!
//! Экран конкретной сущности описывает только колонки и настройки, а загрузку,
//! поиск, сортировку, постраничный вывод и мутации берёт из `ListController`.

use crate::shared::components::table::{SortableHeaderCell, StatusCell};
use crate::shared::components::PaginationControls;
use crate::shared::config;
use crate::shared::format::{format_date, format_money, format_value};
use crate::shared::icons::icon;
use crate::shared::list::{
    use_list_controller, EmptyState, ListController, ListSettings, SearchMode,
};
use crate::shared::list_utils::{highlight_matches, SearchInput};
use crate::system::auth::storage;
use contracts::shared::{EntityKind, Record};
use leptos::prelude::*;
use serde_json::Value;
use thaw::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnKind {
    Text,
    Money,
    Date,
    /// Флаг `1`/`0` с переключением по клику
    Flag {
        on: &'static str,
        off: &'static str,
    },
}

/// Колонка таблицы: `key`: путь к полю записи через точку
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Column {
    pub key: &'static str,
    pub title: &'static str,
    pub kind: ColumnKind,
    pub sortable: bool,
    pub min_width: f64,
}

impl Column {
    pub const fn text(key: &'static str, title: &'static str) -> Self {
        Self {
            key,
            title,
            kind: ColumnKind::Text,
            sortable: true,
            min_width: 120.0,
        }
    }

    pub const fn money(key: &'static str, title: &'static str) -> Self {
        Self {
            kind: ColumnKind::Money,
            ..Self::text(key, title)
        }
    }

    pub const fn date(key: &'static str, title: &'static str) -> Self {
        Self {
            kind: ColumnKind::Date,
            ..Self::text(key, title)
        }
    }

    pub const fn flag(key: &'static str, title: &'static str) -> Self {
        Self {
            kind: ColumnKind::Flag {
                on: "Активен",
                off: "Неактивен",
            },
            min_width: 100.0,
            ..Self::text(key, title)
        }
    }

    pub const fn labels(mut self, on: &'static str, off: &'static str) -> Self {
        if let ColumnKind::Flag { .. } = self.kind {
            self.kind = ColumnKind::Flag { on, off };
        }
        self
    }

    pub const fn unsortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    pub const fn width(mut self, min_width: f64) -> Self {
        self.min_width = min_width;
        self
    }

    fn is_right_aligned(&self) -> bool {
        matches!(self.kind, ColumnKind::Money)
    }
}

/// Текст ячейки без подсветки
pub fn cell_text(record: &Record, column: &Column) -> String {
    let value = record.lookup(column.key);
    match (column.kind, value) {
        (ColumnKind::Money, Some(v)) if v.is_number() => v.as_f64().map(format_money).unwrap_or_default(),
        (ColumnKind::Date, Some(Value::String(s))) => format_date(s),
        _ => format_value(value),
    }
}

/// Значение флага. Флаг читается по ключу верхнего уровня: тем же ключом
/// его пишет переключение и в тело запроса, и в запись списка.
pub fn flag_value(record: &Record, column: &Column) -> Value {
    record.get(column.key).cloned().unwrap_or(Value::Null)
}

/// Текст строки состояния вместо таблицы
pub fn empty_message(state: &EmptyState, query: &str) -> String {
    match state {
        EmptyState::FetchFailed(message) => format!("Не удалось загрузить данные: {}", message),
        EmptyState::NoData => "Нет данных".to_string(),
        EmptyState::NoMatches => format!("Ничего не найдено по запросу «{}»", query.trim()),
    }
}

#[component]
fn ListHeader(
    kind: EntityKind,
    #[prop(into)] total_count: Signal<usize>,
    #[prop(into)] is_loading: Signal<bool>,
    on_refresh: Callback<()>,
) -> impl IntoView {
    let icon_name = kind.name().to_lowercase();

    view! {
        <div class="page__header">
            <div class="page__header-left">
                {icon(&icon_name)}
                <h1 class="page__title">{kind.list_name()}</h1>
                <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                    <span>{move || total_count.get().to_string()}</span>
                </Badge>
            </div>

            <div class="page__header-right">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_refresh.run(())
                    disabled=is_loading
                >
                    {icon("refresh")}
                    {move || if is_loading.get() { " Загрузка..." } else { " Обновить" }}
                </Button>
            </div>
        </div>
    }
}

fn render_cell(controller: ListController, record: &Record, column: Column, query: &str) -> AnyView {
    match column.kind {
        ColumnKind::Flag { on, off } => {
            let value = flag_value(record, &column);
            let id = record.id();
            let field = column.key;
            view! {
                <StatusCell
                    value=Signal::derive(move || value.clone())
                    labels=(on, off)
                    on_toggle=Callback::new(move |_| {
                        if let Some(id) = id.clone() {
                            controller.toggle(id, field);
                        }
                    })
                />
            }
            .into_any()
        }
        _ => {
            let text = cell_text(record, &column);
            let class = if column.is_right_aligned() { "table__cell--right" } else { "" };
            let content = if column.kind == ColumnKind::Text {
                highlight_matches(&text, query)
            } else {
                view! { <span>{text}</span> }.into_any()
            };
            view! {
                <TableCell class=class>
                    <TableCellLayout truncate=true>{content}</TableCellLayout>
                </TableCell>
            }
            .into_any()
        }
    }
}

fn status_row(colspan: usize, content: AnyView) -> AnyView {
    view! {
        <TableRow>
            <TableCell attr:colspan=colspan.to_string()>
                <TableCellLayout>{content}</TableCellLayout>
            </TableCell>
        </TableRow>
    }
    .into_any()
}

#[component]
pub fn EntityListPage(
    kind: EntityKind,
    columns: Vec<Column>,
    /// Настройки списка; по умолчанию берутся из конфигурации
    #[prop(optional)]
    settings: Option<ListSettings>,
    /// Показывать кнопку удаления в строке
    #[prop(optional, default = true)]
    deletable: bool,
) -> impl IntoView {
    let app_config = config::current();
    let settings = settings.unwrap_or_else(|| ListSettings::from_config(app_config));
    let controller = use_list_controller(kind, settings);
    let state = controller.state();

    let columns = StoredValue::new(columns);
    let colspan = columns.with_value(|c| c.len()) + usize::from(deletable);

    let total_count = Signal::derive(move || state.with(|s| s.collection().len()));
    let is_loading = Signal::derive(move || state.with(|s| s.is_loading()));
    let query = Signal::derive(move || state.with(|s| s.query().to_string()));
    let sort = Signal::derive(move || state.with(|s| s.sort_state().clone()));
    let window = Signal::derive(move || state.with(|s| s.window()));
    let page_size = Signal::derive(move || state.with(|s| s.page_size()));

    let search_debounce = match settings.search_mode {
        SearchMode::Server => settings.search_debounce_ms,
        SearchMode::Local => 0,
    };
    let store_missing = kind.is_store_scoped() && storage::get_current_store_id().is_none();

    view! {
        <div id=format!("{}--list", kind.name().to_lowercase()) class="page" data-page-category="list">
            <ListHeader
                kind=kind
                total_count=total_count
                is_loading=is_loading
                on_refresh=Callback::new(move |_| controller.reload())
            />

            <div class="page__content">
                <Show when=move || store_missing>
                    <MessageBar intent=MessageBarIntent::Warning>
                        "Магазин не выбран: показаны записи всех магазинов"
                    </MessageBar>
                </Show>

                <Flex gap=FlexGap::Small align=FlexAlign::Center>
                    <SearchInput
                        value=query
                        on_change=Callback::new(move |q: String| controller.search(q))
                        debounce_ms=search_debounce
                    />
                    <PaginationControls
                        window=window
                        page_size=page_size
                        on_page_change=Callback::new(move |p| controller.go_to_page(p))
                        on_page_size_change=Callback::new(move |s| controller.set_page_size(s))
                        page_size_options=app_config.list.page_size_options.clone()
                    />
                </Flex>

                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            {columns.with_value(|cols| cols.iter().map(|col| {
                                let col = *col;
                                view! {
                                    <SortableHeaderCell
                                        label=col.title
                                        sort_key=col.key
                                        sort=sort
                                        on_sort=Callback::new(move |key: String| controller.sort_by(key))
                                        sortable=col.sortable
                                        min_width=col.min_width
                                        align=if col.is_right_aligned() { "right" } else { "left" }
                                    />
                                }
                            }).collect_view())}
                            {deletable.then(|| view! {
                                <TableHeaderCell min_width=60.0>""</TableHeaderCell>
                            })}
                        </TableRow>
                    </TableHeader>

                    <TableBody>
                        {move || {
                            if is_loading.get() {
                                return vec![status_row(colspan, view! {
                                    <Flex gap=FlexGap::Small align=FlexAlign::Center>
                                        <Spinner />
                                        <span class="text-muted">"Загрузка…"</span>
                                    </Flex>
                                }.into_any())];
                            }

                            if let Some(empty) = state.with(|s| s.empty_state()) {
                                let text = empty_message(&empty, &query.get());
                                let content = match empty {
                                    EmptyState::FetchFailed(_) => view! {
                                        <MessageBar intent=MessageBarIntent::Error>{text}</MessageBar>
                                    }.into_any(),
                                    _ => view! { <span class="text-muted">{text}</span> }.into_any(),
                                };
                                return vec![status_row(colspan, content)];
                            }

                            let q = query.get();
                            let rows = state.with(|s| s.visible().to_vec());
                            rows.into_iter().map(|record| {
                                let cells = columns.with_value(|cols| {
                                    cols.iter()
                                        .map(|col| render_cell(controller, &record, *col, &q))
                                        .collect_view()
                                });
                                let id = record.id();
                                view! {
                                    <TableRow>
                                        {cells}
                                        {deletable.then(|| view! {
                                            <TableCell>
                                                <TableCellLayout>
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        on_click=move |_| {
                                                            if let Some(id) = id.clone() {
                                                                controller.remove(id);
                                                            }
                                                        }
                                                        attr:title="Удалить"
                                                    >
                                                        {icon("trash")}
                                                    </Button>
                                                </TableCellLayout>
                                            </TableCell>
                                        })}
                                    </TableRow>
                                }.into_any()
                            }).collect::<Vec<_>>()
                        }}
                    </TableBody>
                </Table>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        Record::from_value(value).unwrap()
    }

    #[test]
    fn test_cell_text_by_kind() {
        let r = record(json!({
            "id": 1,
            "name": "Milk",
            "price": 1250.5,
            "created_at": "2024-03-15",
            "store": { "name": "Central" }
        }));
        assert_eq!(cell_text(&r, &Column::text("name", "Name")), "Milk");
        assert_eq!(cell_text(&r, &Column::money("price", "Price")), "1 250.50");
        assert_eq!(cell_text(&r, &Column::date("created_at", "Created")), "15.03.2024");
        assert_eq!(cell_text(&r, &Column::text("store.name", "Store")), "Central");
        assert_eq!(cell_text(&r, &Column::text("missing", "Missing")), "");
    }

    #[test]
    fn test_column_builders() {
        let col = Column::flag("status", "Статус").labels("Доступен", "Занят").unsortable();
        assert_eq!(col.kind, ColumnKind::Flag { on: "Доступен", off: "Занят" });
        assert!(!col.sortable);
        assert_eq!(Column::text("name", "Name").labels("a", "b").kind, ColumnKind::Text);
    }

    #[test]
    fn test_flag_reads_the_key_toggle_writes() {
        let column = Column::flag("promo.active", "Акция");
        let mut r = record(json!({"id": 1, "promo": {"active": 1}}));
        assert_eq!(flag_value(&r, &column), Value::Null);

        r.set(column.key, json!(1));
        assert_eq!(flag_value(&r, &column), json!(1));
        r.set(column.key, json!(0));
        assert_eq!(flag_value(&r, &column), json!(0));
    }

    #[test]
    fn test_flag_follows_toggled_row() {
        use crate::shared::list::{ListEvent, ListState, SearchMode};
        use contracts::shared::RecordId;

        let column = Column::flag("is_available", "Доступен");
        let mut state = ListState::new(10, SearchMode::Local);
        state.apply(ListEvent::FetchStarted);
        state.apply(ListEvent::FetchSucceeded(vec![record(
            json!({"id": 4, "is_available": true}),
        )]));
        state.apply(ListEvent::Toggled {
            id: RecordId::Int(4),
            field: column.key.to_string(),
            value: json!(0),
        });

        let row = state.find(&RecordId::Int(4)).unwrap();
        assert_eq!(flag_value(row, &column), json!(0));
    }

    #[test]
    fn test_empty_messages() {
        assert_eq!(empty_message(&EmptyState::NoData, ""), "Нет данных");
        assert_eq!(
            empty_message(&EmptyState::NoMatches, " milk "),
            "Ничего не найдено по запросу «milk»"
        );
        assert!(empty_message(&EmptyState::FetchFailed("HTTP 500".into()), "").ends_with("HTTP 500"));
    }
}

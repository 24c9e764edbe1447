//! Компонент сортируемой ячейки заголовка таблицы
//!
//! # Пример
//!
//! ```rust,ignore
//! <SortableHeaderCell
//!     label="Цена"
//!     sort_key="price"
//!     sort=Signal::derive(move || state.with(|s| s.sort_state().clone()))
//!     on_sort=Callback::new(move |key| controller.sort_by(key))
//!     align="right"
//! />
//! ```

use crate::shared::list::SortState;
use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use leptos::prelude::*;
use thaw::*;

/// Ячейка заголовка с индикатором сортировки (▲▼).
/// Несортируемая колонка рисуется без индикатора и не реагирует на клик.
#[component]
pub fn SortableHeaderCell(
    /// Текст заголовка
    #[prop(into)]
    label: String,

    /// Ключ сортировки (путь через точку)
    #[prop(into)]
    sort_key: String,

    /// Текущая сортировка списка
    #[prop(into)]
    sort: Signal<SortState>,

    /// Callback при клике на заголовок
    on_sort: Callback<String>,

    /// Можно ли сортировать по колонке
    #[prop(optional, default = true)]
    sortable: bool,

    /// Минимальная ширина колонки
    #[prop(optional, default = 100.0)]
    min_width: f64,

    /// Выравнивание заголовка (left/right)
    #[prop(optional, default = "left")]
    align: &'static str,
) -> impl IntoView {
    if !sortable {
        return view! {
            <TableHeaderCell min_width=min_width>{label}</TableHeaderCell>
        }
        .into_any();
    }

    let key_for_click = sort_key.clone();
    let key_for_indicator = sort_key.clone();
    let key_for_class = sort_key;

    let header_style = if align == "right" {
        "cursor: pointer; justify-content: flex-end; padding-right: 12px;"
    } else {
        "cursor: pointer; padding-right: 12px;"
    };

    view! {
        <TableHeaderCell resizable=true min_width=min_width class="resizable">
            <div
                class=move || sort.with(|s| get_sort_class(s, &key_for_class))
                style=header_style
                on:click=move |_| on_sort.run(key_for_click.clone())
            >
                {label}
                <span class="table__sort-indicator">
                    {move || sort.with(|s| get_sort_indicator(s, &key_for_indicator))}
                </span>
            </div>
        </TableHeaderCell>
    }
    .into_any()
}

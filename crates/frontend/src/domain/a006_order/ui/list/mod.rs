use crate::shared::components::{Column, EntityListPage};
use crate::shared::config;
use crate::shared::list::ListSettings;
use contracts::shared::EntityKind;
use leptos::prelude::*;

/// Заказов много, поэтому поиск выполняет backend
#[component]
pub fn OrderList() -> impl IntoView {
    let settings = ListSettings::from_config(config::current()).with_server_search();

    let columns = vec![
        Column::text("order_number", "Номер"),
        Column::text("customer.name", "Клиент").width(200.0),
        Column::text("store.name", "Магазин"),
        Column::money("total", "Сумма"),
        Column::text("order_status", "Статус"),
        Column::date("created_at", "Создан"),
    ];

    view! { <EntityListPage kind=EntityKind::Order columns=columns settings=settings /> }
}

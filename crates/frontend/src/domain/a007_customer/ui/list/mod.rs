use crate::shared::components::{Column, EntityListPage};
use contracts::shared::EntityKind;
use leptos::prelude::*;

#[component]
pub fn CustomerList() -> impl IntoView {
    let columns = vec![
        Column::text("name", "Клиент").width(200.0),
        Column::text("email", "Email").width(220.0),
        Column::text("phone", "Телефон"),
        Column::text("orders_count", "Заказов").width(90.0),
        Column::date("created_at", "Регистрация"),
        Column::flag("status", "Статус").labels("Активен", "Заблокирован"),
    ];

    // клиентов не удаляют, только блокируют
    view! { <EntityListPage kind=EntityKind::Customer columns=columns deletable=false /> }
}

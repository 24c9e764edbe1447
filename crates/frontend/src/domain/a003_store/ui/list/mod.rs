use crate::shared::components::{Column, EntityListPage};
use contracts::shared::EntityKind;
use leptos::prelude::*;

#[component]
pub fn StoreList() -> impl IntoView {
    let columns = vec![
        Column::text("name", "Магазин").width(200.0),
        Column::text("address", "Адрес").width(280.0),
        Column::text("phone", "Телефон"),
        Column::text("owner.name", "Владелец"),
        Column::flag("status", "Статус").labels("Открыт", "Закрыт"),
    ];

    view! { <EntityListPage kind=EntityKind::Store columns=columns /> }
}

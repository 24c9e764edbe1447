use crate::shared::components::{Column, EntityListPage};
use contracts::shared::EntityKind;
use leptos::prelude::*;

#[component]
pub fn RiderList() -> impl IntoView {
    let columns = vec![
        Column::text("name", "Курьер").width(200.0),
        Column::text("phone", "Телефон"),
        Column::text("vehicle", "Транспорт"),
        Column::text("store.name", "Магазин"),
        Column::flag("is_available", "Доступность").labels("Свободен", "Занят"),
    ];

    view! { <EntityListPage kind=EntityKind::Rider columns=columns /> }
}

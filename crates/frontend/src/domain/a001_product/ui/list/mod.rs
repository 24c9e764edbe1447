use crate::shared::components::{Column, EntityListPage};
use contracts::shared::EntityKind;
use leptos::prelude::*;

#[component]
pub fn ProductList() -> impl IntoView {
    let columns = vec![
        Column::text("name", "Наименование").width(240.0),
        Column::text("sku", "Артикул"),
        Column::text("category.name", "Категория"),
        Column::money("price", "Цена"),
        Column::text("stock", "Остаток").width(90.0),
        Column::flag("status", "Статус"),
    ];

    view! { <EntityListPage kind=EntityKind::Product columns=columns /> }
}

use crate::shared::components::{Column, EntityListPage};
use contracts::shared::EntityKind;
use leptos::prelude::*;

#[component]
pub fn CategoryList() -> impl IntoView {
    let columns = vec![
        Column::text("name", "Наименование").width(240.0),
        Column::text("parent.name", "Родитель"),
        Column::text("sort_order", "Порядок").width(90.0),
        Column::flag("status", "Статус"),
    ];

    view! { <EntityListPage kind=EntityKind::Category columns=columns /> }
}

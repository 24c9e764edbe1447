use crate::shared::components::{Column, EntityListPage};
use crate::shared::config;
use crate::shared::list::ListSettings;
use contracts::shared::EntityKind;
use leptos::prelude::*;

const START_FIELD: &str = "start_date";

#[component]
pub fn BannerList() -> impl IntoView {
    let settings = ListSettings::from_config(config::current()).with_schedule_guard(START_FIELD);

    let columns = vec![
        Column::text("title", "Заголовок").width(220.0),
        Column::text("placement", "Размещение"),
        Column::date(START_FIELD, "Начало показа"),
        Column::date("end_date", "Окончание"),
        Column::flag("status", "Статус").labels("Показывается", "Скрыт"),
    ];

    view! { <EntityListPage kind=EntityKind::Banner columns=columns settings=settings /> }
}

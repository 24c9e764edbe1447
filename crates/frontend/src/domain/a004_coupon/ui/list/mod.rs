use crate::shared::components::{Column, EntityListPage};
use contracts::shared::EntityKind;
use leptos::prelude::*;

#[component]
pub fn CouponList() -> impl IntoView {
    let columns = vec![
        Column::text("code", "Код"),
        Column::text("title", "Название").width(220.0),
        Column::money("discount", "Скидка"),
        Column::money("min_purchase", "Мин. сумма"),
        Column::date("expire_date", "Действует до"),
        Column::flag("status", "Статус"),
    ];

    view! { <EntityListPage kind=EntityKind::Coupon columns=columns /> }
}

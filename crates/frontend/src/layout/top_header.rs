//! TopHeader component - application top navigation bar.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::auth::storage;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let is_sidebar_visible = move || ctx.left_open.get();
    let store_label = match storage::get_current_store_id() {
        Some(id) => format!("Магазин: {}", id),
        None => "Все магазины".to_string(),
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Скрыть навигацию" } else { "Показать навигацию" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"Панель администратора"</span>
            </div>

            <div class="top-header__actions">
                <Badge appearance=BadgeAppearance::Outline color=BadgeColor::Informative>
                    {store_label}
                </Badge>
            </div>
        </div>
    }
}

use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::config;
use crate::shared::notify::{NotificationHost, NotificationService};
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    let app_config = config::current();
    log::debug!("config: {:?}", app_config);

    provide_context(NotificationService::new(app_config.list.notice_ttl_ms));
    provide_context(AppGlobalContext::new());

    view! {
        <ConfigProvider>
            <NotificationHost />
            <AppRoutes />
        </ConfigProvider>
    }
}

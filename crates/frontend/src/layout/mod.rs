pub mod global_context;
pub mod left;
pub mod top_header;

use crate::system::auth::storage;
use leptos::prelude::*;
use thaw::*;
use top_header::TopHeader;

/// Main application shell.
///
/// ```text
/// +------------------------------+
/// |          TopHeader           |
/// +------------------------------+
/// |  Sidebar  |     Content      |
/// +------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let has_session = storage::get_access_token().is_some();

    view! {
        <div class="app-layout">
            <TopHeader />

            <div class="app-body">
                <left::Left>
                    <left::navbar::Navbar />
                </left::Left>

                <div class="app-main">
                    <Show when=move || !has_session>
                        <MessageBar intent=MessageBarIntent::Warning>
                            "Сессия не найдена: запросы отправляются без токена доступа"
                        </MessageBar>
                    </Show>
                    {children()}
                </div>
            </div>
        </div>
    }
}

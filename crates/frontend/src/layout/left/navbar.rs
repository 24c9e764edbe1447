use crate::routes::routes::screen_path;
use crate::shared::icons::icon;
use contracts::shared::EntityKind;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="main-nav-bar">
            <ul>
                {EntityKind::ALL.into_iter().map(|kind| {
                    let icon_name = kind.name().to_lowercase();
                    view! {
                        <li>
                            <A href=screen_path(kind)>
                                {icon(&icon_name)}
                                <span>{kind.list_name()}</span>
                            </A>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </nav>
    }
}

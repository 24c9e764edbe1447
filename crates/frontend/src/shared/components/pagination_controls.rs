use crate::shared::icons::icon;
use crate::shared::list::PageWindow;
use leptos::prelude::*;

/// Подпись диапазона: «1–10 из 25»
pub fn range_label(window: &PageWindow) -> String {
    let (from, to) = window.display_range;
    format!("{}–{} из {}", from, to, window.total_items)
}

/// PaginationControls component - reusable pagination controls
///
/// Страницы нумеруются с 1.
#[component]
pub fn PaginationControls(
    /// Рассчитанное окно текущей страницы
    #[prop(into)]
    window: Signal<PageWindow>,

    /// Current page size
    #[prop(into)]
    page_size: Signal<usize>,

    /// Callback when page changes
    on_page_change: Callback<usize>,

    /// Callback when page size changes
    on_page_size_change: Callback<usize>,

    /// Available page size options
    page_size_options: Vec<usize>,
) -> impl IntoView {
    let current = move || window.get().effective_page;
    let no_prev = move || !window.get().has_prev();
    let no_next = move || !window.get().has_next();

    view! {
        <div class="pagination-controls">
            <span class="pagination-range">{move || range_label(&window.get())}</span>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(1)
                disabled=no_prev
                title="Первая страница"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(current().saturating_sub(1).max(1))
                disabled=no_prev
                title="Предыдущая страница"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || format!("{} / {}", current(), window.get().total_pages.max(1))}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(current() + 1)
                disabled=no_next
                title="Следующая страница"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(window.get().total_pages.max(1))
                disabled=no_next
                title="Последняя страница"
            >
                {icon("chevrons-right")}
            </button>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                        on_page_size_change.run(size);
                    }
                }
                prop:value=move || page_size.get().to_string()
            >
                {page_size_options.into_iter().map(|size| {
                    view! {
                        <option value=size.to_string() selected=move || page_size.get() == size>
                            {size.to_string()}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}

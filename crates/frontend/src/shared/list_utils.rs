/// Универсальные UI-утилиты для списков (подсветка, поле поиска, индикаторы сортировки)
use crate::shared::list::{SortDirection, SortState};
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Разбить текст на фрагменты `(кусок, совпал)` по вхождениям запроса без учёта регистра.
///
/// Работает по символам, поэтому кириллица и другие многобайтовые символы
/// не рвутся посередине.
pub fn split_matches(text: &str, filter: &str) -> Vec<(String, bool)> {
    if filter.trim().is_empty() {
        return vec![(text.to_string(), false)];
    }

    let chars: Vec<char> = text.chars().collect();
    let lower: Vec<char> = chars.iter().map(|c| fold(*c)).collect();
    let needle: Vec<char> = filter.chars().map(fold).collect();

    let mut parts = Vec::new();
    let mut plain_start = 0;
    let mut pos = 0;
    while pos + needle.len() <= lower.len() {
        if lower[pos..pos + needle.len()] == needle[..] {
            if pos > plain_start {
                parts.push((chars[plain_start..pos].iter().collect(), false));
            }
            parts.push((chars[pos..pos + needle.len()].iter().collect(), true));
            pos += needle.len();
            plain_start = pos;
        } else {
            pos += 1;
        }
    }
    if plain_start < chars.len() || parts.is_empty() {
        parts.push((chars[plain_start..].iter().collect(), false));
    }
    parts
}

fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Подсветка совпадений в тексте (case-insensitive)
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let parts = split_matches(text, filter);
    if parts.len() == 1 && !parts[0].1 {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    parts
        .into_iter()
        .map(|(chunk, matched)| {
            if matched {
                view! {
                    <span style="background-color: #ff9800; color: white; padding: 1px 2px; border-radius: 2px; font-weight: 500;">
                        {chunk}
                    </span>
                }
                .into_any()
            } else {
                view! { <span>{chunk}</span> }.into_any()
            }
        })
        .collect_view()
        .into_any()
}

/// Компонент поиска с debounce и кнопкой очистки
#[component]
pub fn SearchInput(
    /// Текущее значение фильтра (для отображения)
    #[prop(into)]
    value: Signal<String>,
    /// Callback для обновления значения фильтра
    #[prop(into)]
    on_change: Callback<String>,
    /// Задержка перед вызовом `on_change`; 0 означает без задержки
    #[prop(optional, default = 300)]
    debounce_ms: u32,
    /// Placeholder текст
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Поиск...".to_string()
    } else {
        placeholder
    };

    // Локальное состояние для input (до debounce)
    let (input_value, set_input_value) = signal(value.get_untracked());

    let debounce_timeout = StoredValue::new(None::<i32>);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());

        // Отменяем предыдущий таймер если есть
        if let Some(timeout_id) = debounce_timeout.get_value() {
            if let Some(w) = web_sys::window() {
                w.clear_timeout_with_handle(timeout_id);
            }
            debounce_timeout.set_value(None);
        }

        let window = match web_sys::window() {
            Some(w) if debounce_ms > 0 => w,
            _ => {
                on_change.run(new_value);
                return;
            }
        };

        let value_for_timer = new_value.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            on_change.run(value_for_timer.clone());
        }) as Box<dyn Fn()>);

        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref::<js_sys::Function>(),
            debounce_ms as i32,
        ) {
            Ok(timeout_id) => {
                closure.forget();
                debounce_timeout.set_value(Some(timeout_id));
            }
            Err(e) => {
                log::warn!("setTimeout failed: {:?}", e);
                on_change.run(new_value);
            }
        }
    };

    let is_filter_active = move || !value.get().trim().is_empty();

    let clear_filter = move |_| {
        if let Some(timeout_id) = debounce_timeout.get_value() {
            if let Some(w) = web_sys::window() {
                w.clear_timeout_with_handle(timeout_id);
            }
            debounce_timeout.set_value(None);
        }
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div style="position: relative; display: inline-flex; align-items: center;">
            <input
                type="text"
                placeholder={placeholder}
                style=move || format!(
                    "width: 250px; padding: 6px 32px 6px 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 15px; background: {};",
                    if is_filter_active() { "#fffbea" } else { "white" }
                )
                prop:value=move || input_value.get()
                on:input=move |ev| {
                    let val = event_target_value(&ev);
                    handle_input_change(val);
                }
            />
            {move || if !input_value.get().is_empty() {
                view! {
                    <button
                        style="position: absolute; right: 6px; background: none; border: none; cursor: pointer; padding: 4px; display: inline-flex; align-items: center; color: #666; line-height: 1;"
                        on:click=clear_filter
                        title="Очистить"
                    >
                        {crate::shared::icons::icon("x")}
                    </button>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}

/// Получить индикатор сортировки для заголовка
pub fn get_sort_indicator(state: &SortState, key: &str) -> &'static str {
    if state.key != key {
        return " ⇅";
    }
    match state.direction {
        SortDirection::Asc => " ▲",
        SortDirection::Desc => " ▼",
        SortDirection::None => " ⇅",
    }
}

/// CSS-класс заголовка: активная колонка подсвечивается
pub fn get_sort_class(state: &SortState, key: &str) -> &'static str {
    if state.is_active() && state.key == key {
        "table__sortable-header table__sortable-header--active"
    } else {
        "table__sortable-header"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn joined(parts: &[(String, bool)]) -> String {
        parts.iter().map(|(s, _)| s.as_str()).collect()
    }

    #[test]
    fn test_split_matches_case_insensitive() {
        let parts = split_matches("Milk and MILKSHAKE", "milk");
        assert_eq!(
            parts,
            vec![
                ("Milk".to_string(), true),
                (" and ".to_string(), false),
                ("MILK".to_string(), true),
                ("SHAKE".to_string(), false),
            ]
        );
    }

    #[test]
    fn test_split_matches_cyrillic() {
        let parts = split_matches("Молоко Домик", "мол");
        assert_eq!(parts[0], ("Мол".to_string(), true));
        assert_eq!(joined(&parts), "Молоко Домик");
    }

    #[test]
    fn test_split_matches_no_match_or_blank() {
        assert_eq!(split_matches("Bread", "milk"), vec![("Bread".to_string(), false)]);
        assert_eq!(split_matches("Bread", "  "), vec![("Bread".to_string(), false)]);
        assert_eq!(split_matches("", "x"), vec![(String::new(), false)]);
    }

    #[test]
    fn test_sort_indicator() {
        let state = SortState::default().next("name");
        assert_eq!(get_sort_indicator(&state, "name"), " ▲");
        assert_eq!(get_sort_indicator(&state.next("name"), "name"), " ▼");
        assert_eq!(get_sort_indicator(&state, "price"), " ⇅");
        assert!(get_sort_class(&state, "name").ends_with("--active"));
        assert_eq!(get_sort_class(&state, "price"), "table__sortable-header");
    }
}

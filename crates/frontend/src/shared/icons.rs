use leptos::prelude::*;

/// SVG-разметка иконки: размер и внутренние элементы
fn glyph(name: &str) -> (u32, &'static str) {
    match name {
        "product" => (20, r#"<path d="M21 16V8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16z"/><path d="M3.27 6.96 12 12l8.73-5.04"/><path d="M12 22V12"/>"#),
        "category" => (20, r#"<rect x="3" y="3" width="7" height="7" rx="1"/><rect x="14" y="3" width="7" height="7" rx="1"/><rect x="14" y="14" width="7" height="7" rx="1"/><rect x="3" y="14" width="7" height="7" rx="1"/>"#),
        "store" => (20, r#"<path d="M3 22h18"/><path d="M6 22V8l6-5 6 5v14"/><rect x="9" y="13" width="6" height="9"/>"#),
        "coupon" => (20, r#"<path d="M3 8a2 2 0 0 0 0 4v4a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2v-4a2 2 0 0 0 0-4V6a2 2 0 0 0-2-2H5a2 2 0 0 0-2 2z"/><path d="M13 5v2"/><path d="M13 11v2"/><path d="M13 17v2"/>"#),
        "rider" => (20, r#"<circle cx="5.5" cy="17.5" r="3.5"/><circle cx="18.5" cy="17.5" r="3.5"/><path d="M15 6a1 1 0 1 0 0-2 1 1 0 0 0 0 2z"/><path d="M12 17.5V14l-3-3 4-3 2 3h2"/>"#),
        "order" => (20, r#"<path d="M21 15V5a2 2 0 0 0-2-2H7l-4 4v8a2 2 0 0 0 2 2h6"/><path d="M3 7h4V3"/><path d="M16 21l2-2 4 4"/>"#),
        "customer" => (20, r#"<path d="M17 21v-2a4 4 0 0 0-4-4H7a4 4 0 0 0-4 4v2"/><circle cx="9" cy="7" r="4"/><path d="M23 21v-2a4 4 0 0 0-3-3.87"/><path d="M16 3.13a4 4 0 0 1 0 7.75"/>"#),
        "banner" => (20, r#"<rect x="3" y="3" width="18" height="18" rx="2"/><circle cx="8.5" cy="8.5" r="1.5"/><path d="M21 15l-5-5L5 21"/>"#),
        "refresh" => (16, r#"<polyline points="23 4 23 10 17 10"/><polyline points="1 20 1 14 7 14"/><path d="M3.51 9a9 9 0 0 1 14.85-3.36L23 10M1 14l4.64 4.36A9 9 0 0 0 20.49 15"/>"#),
        "trash" => (16, r#"<polyline points="3 6 5 6 21 6"/><path d="M19 6l-1 14a2 2 0 0 1-2 2H8a2 2 0 0 1-2-2L5 6"/><path d="M10 11v6"/><path d="M14 11v6"/><path d="M9 6V4a1 1 0 0 1 1-1h4a1 1 0 0 1 1 1v2"/>"#),
        "menu" => (20, r#"<line x1="3" y1="6" x2="21" y2="6"/><line x1="3" y1="12" x2="21" y2="12"/><line x1="3" y1="18" x2="21" y2="18"/>"#),
        "x" => (14, r#"<line x1="18" y1="6" x2="6" y2="18"/><line x1="6" y1="6" x2="18" y2="18"/>"#),
        "chevron-left" => (16, r#"<polyline points="15 18 9 12 15 6"/>"#),
        "chevron-right" => (16, r#"<polyline points="9 18 15 12 9 6"/>"#),
        "chevrons-left" => (16, r#"<polyline points="11 17 6 12 11 7"/><polyline points="18 17 13 12 18 7"/>"#),
        "chevrons-right" => (16, r#"<polyline points="13 17 18 12 13 7"/><polyline points="6 17 11 12 6 7"/>"#),
        _ => (20, r#"<circle cx="12" cy="12" r="10"/><path d="M12 8v4l3 3"/>"#),
    }
}

pub fn icon(name: &str) -> AnyView {
    let (size, body) = glyph(name);
    view! {
        <svg
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            inner_html=body
        ></svg>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::EntityKind;

    #[test]
    fn test_every_entity_has_own_icon() {
        let fallback = glyph("unknown").1;
        for kind in EntityKind::ALL {
            let name = kind.name().to_lowercase();
            assert_ne!(glyph(&name).1, fallback, "{} uses fallback icon", name);
        }
    }
}

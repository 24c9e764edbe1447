use crate::shared::mutation::flag_of;
use leptos::prelude::*;
use serde_json::Value;
use thaw::*;

/// Ячейка флага (статус, доступность) с переключением по клику.
///
/// Текущее значение показывается бейджем; клик не всплывает до строки.
#[component]
pub fn StatusCell(
    /// Текущее значение поля
    #[prop(into)]
    value: Signal<Value>,
    /// Подписи для включённого и выключенного состояния
    #[prop(optional, default = ("Активен", "Неактивен"))]
    labels: (&'static str, &'static str),
    /// Callback переключения
    on_toggle: Callback<()>,
) -> impl IntoView {
    let is_on = Signal::derive(move || value.with(flag_of));

    view! {
        <TableCell>
            <TableCellLayout>
                <div
                    class="table__status-toggle"
                    style="cursor: pointer; display: inline-flex;"
                    title="Переключить"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        on_toggle.run(());
                    }
                >
                    {move || if is_on.get() {
                        view! {
                            <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>{labels.0}</Badge>
                        }.into_any()
                    } else {
                        view! {
                            <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Danger>{labels.1}</Badge>
                        }.into_any()
                    }}
                </div>
            </TableCellLayout>
        </TableCell>
    }
}

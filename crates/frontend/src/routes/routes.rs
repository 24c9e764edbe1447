use crate::domain::a001_product::ui::list::ProductList;
use crate::domain::a002_category::ui::list::CategoryList;
use crate::domain::a003_store::ui::list::StoreList;
use crate::domain::a004_coupon::ui::list::CouponList;
use crate::domain::a005_rider::ui::list::RiderList;
use crate::domain::a006_order::ui::list::OrderList;
use crate::domain::a007_customer::ui::list::CustomerList;
use crate::domain::a008_banner::ui::list::BannerList;
use crate::layout::Shell;
use contracts::shared::EntityKind;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

/// Адрес списочного экрана сущности в навигации
pub fn screen_path(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Product => "/products",
        EntityKind::Category => "/categories",
        EntityKind::Store => "/stores",
        EntityKind::Coupon => "/coupons",
        EntityKind::Rider => "/riders",
        EntityKind::Order => "/orders",
        EntityKind::Customer => "/customers",
        EntityKind::Banner => "/banners",
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <p class="text-muted">"Страница не найдена"</p> }>
                    <Route path=path!("/") view=ProductList />
                    <Route path=path!("/products") view=ProductList />
                    <Route path=path!("/categories") view=CategoryList />
                    <Route path=path!("/stores") view=StoreList />
                    <Route path=path!("/coupons") view=CouponList />
                    <Route path=path!("/riders") view=RiderList />
                    <Route path=path!("/orders") view=OrderList />
                    <Route path=path!("/customers") view=CustomerList />
                    <Route path=path!("/banners") view=BannerList />
                </Routes>
            </Shell>
        </Router>
    }
}

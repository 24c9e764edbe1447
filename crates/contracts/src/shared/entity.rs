//! Реестр маршрутов сущностей
//!
//! Каждой сущности консоли соответствует набор REST-маршрутов backend.
//! Реестр статический: `match` по `EntityKind` проверяется компилятором на
//! полноту, а строковое имя сущности разбирается только через `FromStr`,
//! который для неизвестного имени возвращает ошибку, а не маршрут по умолчанию.

use crate::shared::record::RecordId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Ошибки разрешения маршрута. Это ошибки программиста, операция прерывается.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("Unknown entity '{0}': no route registered")]
    UnknownEntity(String),
    #[error("Entity '{entity}' has no {operation} route")]
    MissingRoute {
        entity: &'static str,
        operation: &'static str,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpVerb {
    Get,
    Delete,
    Patch,
}

impl HttpVerb {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Delete => "DELETE",
            Self::Patch => "PATCH",
        }
    }
}

/// Шаблон пути с плейсхолдером `{id}`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteTemplate(pub &'static str);

impl RouteTemplate {
    /// Подставить идентификатор (URL-encoded) вместо `{id}`
    pub fn resolve(&self, id: &RecordId) -> String {
        let id = id.to_string();
        self.0.replace("{id}", &urlencoding::encode(&id))
    }
}

/// Разрешённый маршрут: HTTP-метод и путь относительно базового URL API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityRoute {
    pub verb: HttpVerb,
    pub path: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Product,
    Category,
    Store,
    Coupon,
    Rider,
    Order,
    Customer,
    Banner,
}

impl EntityKind {
    pub const ALL: [EntityKind; 8] = [
        Self::Product,
        Self::Category,
        Self::Store,
        Self::Coupon,
        Self::Rider,
        Self::Order,
        Self::Customer,
        Self::Banner,
    ];

    /// Логическое имя сущности (ключ реестра)
    pub fn name(&self) -> &'static str {
        match self {
            Self::Product => "Product",
            Self::Category => "Category",
            Self::Store => "Store",
            Self::Coupon => "Coupon",
            Self::Rider => "Rider",
            Self::Order => "Order",
            Self::Customer => "Customer",
            Self::Banner => "Banner",
        }
    }

    /// Имя списка для UI (множественное число)
    pub fn list_name(&self) -> &'static str {
        match self {
            Self::Product => "Товары",
            Self::Category => "Категории",
            Self::Store => "Магазины",
            Self::Coupon => "Купоны",
            Self::Rider => "Курьеры",
            Self::Order => "Заказы",
            Self::Customer => "Клиенты",
            Self::Banner => "Рекламные баннеры",
        }
    }

    /// Путь коллекции (GET)
    pub fn collection_path(&self) -> &'static str {
        match self {
            Self::Product => "/api/products",
            Self::Category => "/api/categories",
            Self::Store => "/api/stores",
            Self::Coupon => "/api/coupons",
            Self::Rider => "/api/riders",
            Self::Order => "/api/orders",
            Self::Customer => "/api/customers",
            Self::Banner => "/api/banners",
        }
    }

    pub fn delete_template(&self) -> RouteTemplate {
        match self {
            Self::Product => RouteTemplate("/api/products/{id}"),
            Self::Category => RouteTemplate("/api/categories/{id}"),
            Self::Store => RouteTemplate("/api/stores/{id}"),
            Self::Coupon => RouteTemplate("/api/coupons/{id}"),
            Self::Rider => RouteTemplate("/api/riders/{id}"),
            Self::Order => RouteTemplate("/api/orders/{id}"),
            Self::Customer => RouteTemplate("/api/customers/{id}"),
            Self::Banner => RouteTemplate("/api/banners/{id}"),
        }
    }

    /// Шаблон маршрута переключения поля; у заказов его нет
    pub fn toggle_template(&self) -> Option<RouteTemplate> {
        match self {
            Self::Product => Some(RouteTemplate("/api/products/{id}/status")),
            Self::Category => Some(RouteTemplate("/api/categories/{id}/status")),
            Self::Store => Some(RouteTemplate("/api/stores/{id}/status")),
            Self::Coupon => Some(RouteTemplate("/api/coupons/{id}/status")),
            Self::Rider => Some(RouteTemplate("/api/riders/{id}/availability")),
            Self::Customer => Some(RouteTemplate("/api/customers/{id}/status")),
            Self::Banner => Some(RouteTemplate("/api/banners/{id}/status")),
            Self::Order => None,
        }
    }

    pub fn delete_route(&self, id: &RecordId) -> EntityRoute {
        EntityRoute {
            verb: HttpVerb::Delete,
            path: self.delete_template().resolve(id),
        }
    }

    pub fn toggle_route(&self, id: &RecordId) -> Result<EntityRoute, RouteError> {
        let template = self.toggle_template().ok_or(RouteError::MissingRoute {
            entity: self.name(),
            operation: "toggle",
        })?;
        Ok(EntityRoute {
            verb: HttpVerb::Patch,
            path: template.resolve(id),
        })
    }

    /// Сущности, список которых зависит от выбранного магазина
    pub fn is_store_scoped(&self) -> bool {
        matches!(self, Self::Product | Self::Coupon | Self::Order)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EntityKind {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| RouteError::UnknownEntity(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_entity_has_delete_route_with_id() {
        let id = RecordId::Int(12);
        for kind in EntityKind::ALL {
            let route = kind.delete_route(&id);
            assert_eq!(route.verb, HttpVerb::Delete);
            assert!(route.path.starts_with(kind.collection_path()));
            assert!(route.path.ends_with("/12"), "{}", route.path);
        }
    }

    #[test]
    fn test_toggle_route_resolves_template() {
        let route = EntityKind::Coupon
            .toggle_route(&RecordId::from("c-7"))
            .unwrap();
        assert_eq!(route.verb, HttpVerb::Patch);
        assert_eq!(route.path, "/api/coupons/c-7/status");
    }

    #[test]
    fn test_order_has_no_toggle_route() {
        let err = EntityKind::Order.toggle_route(&RecordId::Int(1)).unwrap_err();
        assert_eq!(
            err,
            RouteError::MissingRoute {
                entity: "Order",
                operation: "toggle"
            }
        );
    }

    #[test]
    fn test_template_encodes_id() {
        let path = RouteTemplate("/api/products/{id}").resolve(&RecordId::from("a b/c"));
        assert_eq!(path, "/api/products/a%20b%2Fc");
    }

    #[test]
    fn test_parse_known_names() {
        for kind in EntityKind::ALL {
            assert_eq!(kind.name().parse::<EntityKind>(), Ok(kind));
        }
        assert_eq!("coupon".parse::<EntityKind>(), Ok(EntityKind::Coupon));
    }

    #[test]
    fn test_unknown_name_fails_fast() {
        let err = "Warehouse".parse::<EntityKind>().unwrap_err();
        assert_eq!(err, RouteError::UnknownEntity("Warehouse".to_string()));
        assert!(err.to_string().contains("Warehouse"));
        assert!("".parse::<EntityKind>().is_err());
    }
}

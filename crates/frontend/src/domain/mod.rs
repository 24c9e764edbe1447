pub mod a001_product;
pub mod a002_category;
pub mod a003_store;
pub mod a004_coupon;
pub mod a005_rider;
pub mod a006_order;
pub mod a007_customer;
pub mod a008_banner;

pub mod a001_supplier;
pub mod a002_location;
pub mod a003_employee;
pub mod a004_asset;
pub mod a005_category;
pub mod a006_payment;

pub mod create;
pub mod delivery;
pub mod dispute;
pub mod refund;
pub mod shipping;
pub mod views;

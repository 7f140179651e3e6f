//!
//! src/backend/mod.rs
//! Backend 层：与终端界面无关的服务
//!
//! 车辆数据由 car-inventory-core 直接提供（纯内存，无需适配），
//! 这里只保留本地配置的读写。
//!

mod config_service;

pub use config_service::{default_log_path, AppConfig, ConfigService, LocalConfigService};

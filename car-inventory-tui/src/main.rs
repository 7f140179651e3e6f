//! Car Inventory TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新，含控制器 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 本地配置 (`backend/`)
//!
//!
//! main.rs
//! 程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     LocalConfigService::load()   // 读取配置（不存在时使用默认值）
//!     init_logging()               // 日志写入文件
//!     load_cars()                  // 读取种子数据，构建车辆集合
//!     App::new() + recompute()     // 创建应用实例并推导初始 props
//!     init_terminal()              // 初始化终端
//!     app::run()                   // 运行 app.rs 主循环
//!     restore_terminal()           // 无论成功与否，都恢复终端
//!
//! }

mod app;
mod backend;
mod error;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use anyhow::{Context, Result};
use car_inventory_core::seed::{self, SeedData};
use car_inventory_core::CarsCollection;

use backend::{default_log_path, AppConfig, ConfigService, LocalConfigService};
use util::{init_logging, init_terminal, restore_terminal};

fn main() -> Result<(), anyhow::Error> {
    // 1. 读取配置，首次运行时写入默认配置
    let config_service = LocalConfigService::default_location()?;
    let first_run = !config_service.path().exists();
    let config = config_service.load()?;
    if first_run {
        config_service.save(&config)?;
    }

    // 2. 初始化日志
    let log_path = config.log_file.clone().unwrap_or_else(default_log_path);
    init_logging(&log_path)?;
    log::info!("Config: {}", config_service.path().display());

    // 3. 加载数据，创建应用实例
    let cars = load_cars(&config)?;
    view::theme::set_theme(config.theme);
    let mut app = model::App::new(cars);
    update::recompute(&mut app).context("Seed data is inconsistent")?;

    // 4. 初始化终端并运行主循环
    let mut terminal = init_terminal()?;
    let result = app::run(&mut terminal, &mut app);

    // 5. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    log::info!("Exited");
    result
}

/// 配置了种子文件时从文件加载，否则使用内置数据
fn load_cars(config: &AppConfig) -> Result<CarsCollection> {
    let seed = match &config.seed_file {
        Some(path) => {
            log::info!("Loading seed file {}", path.display());
            SeedData::from_file(path)?
        }
        None => seed::builtin()?,
    };
    Ok(seed.into_collection()?)
}

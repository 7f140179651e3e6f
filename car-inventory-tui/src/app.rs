//! 
//! app.rs
//! 应用主循环
//! 
//! 
//! 
//! 在应用启动时，创建终端并初始化为以下状态：
//! 
//! App {
//! 
//!     should_quit: bool = false,                      // 决定应用是否应该退出
//!     focus: FocusPanel::Table,                       // 当前焦点在哪个面板
//!     status_message = None,                          // 状态栏消息
//!     cars: CarsCollection,                           // 由种子数据构建的车辆集合
//!     selection: SelectionState {                     // 控制器持有的选择状态
//!         selected_brand_id: None,                        // 不筛选品牌
//!         edit: EditMode::Idle,                           // 没有正在编辑的车辆
//!     },
//!     brand_select / car_table / car_form,            // 组件，props 由 update::recompute 推导
//!     modal: ModalState { active: None },             // 弹窗状态
//! 
//! }
//! 
//! 
//! 主循环大约每 100 ms 执行一次（取决于有无事件）
//! 应用的主循环中有：
//! loop {
//! 
//!     terminal.draw(|f| view::render(&app , f))       // 渲染 UI
//!     if app.should_quit{ break }                     // 检查 APP 是否应该退出
//!     if let Some(event) = poll_event() {             // 轮询获取输入，在此等待 100ms
//!                                                     // 若用户按键，返回 Some(Event::Key(...))，否则为 None
//!         let msg = handle_event(event , &app);           // 接收原始事件并分发消息
//!         update::update(&mut app , msg)                  // 更新终端状态
//!     }
//!     清除过期的状态栏消息
//! }

use std::time::{Duration, Instant};

use anyhow::Result;

use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 状态栏消息显示时长
const STATUS_TTL: Duration = Duration::from_secs(5);

/// 运行应用主循环
pub fn run(terminal: &mut Term, app: &mut App) -> Result<()> {
    let mut status_since: Option<Instant> = None;

    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            // 4. 处理事件，获取消息
            let msg = event::handle_event(event, app);
            if msg != AppMessage::Noop {
                log::trace!("{msg:?}");
            }

            // 5. 更新状态，记录状态消息出现的时间
            let previous_status = app.status_message.clone();
            update::update(app, msg);
            if app.status_message != previous_status {
                status_since = app.status_message.as_ref().map(|_| Instant::now());
            }
        }

        // 6. 状态消息过期后清除
        if status_since.is_some_and(|since| since.elapsed() >= STATUS_TTL) {
            update::update(app, AppMessage::ClearStatus);
            status_since = None;
        }
    }

    Ok(())
}

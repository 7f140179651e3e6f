//! 品牌筛选下拉框

use crate::message::{AppMessage, FilterMessage};
use crate::model::App;

/// 切换筛选选项，返回 `on_change` 产生的消息
pub fn update(app: &mut App, msg: FilterMessage) -> Option<AppMessage> {
    match msg {
        FilterMessage::Prev => app.brand_select.select_prev(),
        FilterMessage::Next => app.brand_select.select_next(),
    }
}

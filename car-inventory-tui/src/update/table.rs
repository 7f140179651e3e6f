//! 表格交互：光标移动与行操作

use crate::message::{AppMessage, TableMessage};
use crate::model::App;

/// 处理表格消息，行操作经回调返回控制器消息
pub fn update(app: &mut App, msg: TableMessage) -> Option<AppMessage> {
    let table = &mut app.car_table;
    match msg {
        TableMessage::SelectPrevious => table.select_previous(),
        TableMessage::SelectNext => table.select_next(),
        TableMessage::SelectFirst => table.select_first(),
        TableMessage::SelectLast => table.select_last(),
        TableMessage::Edit => return table.activate_edit(),
        TableMessage::Delete => return table.activate_delete(),
    }
    None
}

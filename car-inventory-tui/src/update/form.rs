//! 表单交互

use crate::message::{AppMessage, FormMessage};
use crate::model::App;

/// 处理表单消息，提交经 `on_submit` 回调返回控制器消息
pub fn update(app: &mut App, msg: FormMessage) -> Option<AppMessage> {
    let form = &mut app.car_form;
    match msg {
        FormMessage::NextField => form.focus_next(),
        FormMessage::PrevField => form.focus_prev(),
        FormMessage::NextOption => form.select_next_option(),
        FormMessage::PrevOption => form.select_prev_option(),
        FormMessage::Input(c) => form.input(c),
        FormMessage::Backspace => form.backspace(),
        FormMessage::Submit => return form.submit(),
    }
    None
}

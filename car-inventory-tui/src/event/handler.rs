//! 事件处理器：按键 → AppMessage

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, FilterMessage, FormMessage, ModalMessage, TableMessage};
use crate::model::{App, FocusPanel};

/// 轮询事件，最长等待 timeout
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 把原始事件翻译为消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // 终端窗口大小改变时下一帧自动重绘
        _ => AppMessage::Noop,
    }
}

fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，Windows 终端上会额外产生 Release
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // 有弹窗时只处理关闭
    if app.modal.is_open() {
        return handle_modal_keys(key);
    }

    if DefaultKeymap::ALT_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if DefaultKeymap::HELP.matches(&key) {
        return AppMessage::ShowHelp;
    }

    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::GoBack;
    }

    if DefaultKeymap::FOCUS_NEXT.matches(&key) {
        return AppMessage::FocusNext;
    }

    // Shift+Tab 在多数终端上报告为 BackTab（带或不带 SHIFT 修饰）
    if key.code == KeyCode::BackTab {
        return AppMessage::FocusPrev;
    }

    // 表单需要接收字符输入，单字母快捷键只在表单外生效
    if !app.focus.is_form() {
        if DefaultKeymap::QUIT.matches(&key) {
            return AppMessage::Quit;
        }
        if key.code == KeyCode::Char('?') {
            return AppMessage::ShowHelp;
        }
    }

    match app.focus {
        FocusPanel::BrandFilter => handle_filter_keys(key),
        FocusPanel::Table => handle_table_keys(key),
        FocusPanel::Form => handle_form_keys(key),
    }
}

fn handle_modal_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => {
            AppMessage::Modal(ModalMessage::Close)
        }
        _ => AppMessage::Noop,
    }
}

fn handle_filter_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => AppMessage::Filter(FilterMessage::Prev),
        KeyCode::Right | KeyCode::Char('l') => AppMessage::Filter(FilterMessage::Next),
        _ => AppMessage::Noop,
    }
}

fn handle_table_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::ROW_EDIT.matches(&key) || DefaultKeymap::SUBMIT.matches(&key) {
        return AppMessage::Table(TableMessage::Edit);
    }
    if DefaultKeymap::ROW_DELETE.matches(&key) {
        return AppMessage::Table(TableMessage::Delete);
    }

    match key.code {
        // ↑ 或 k: 上移
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Table(TableMessage::SelectPrevious),

        // ↓ 或 j: 下移
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Table(TableMessage::SelectNext),

        KeyCode::Home => AppMessage::Table(TableMessage::SelectFirst),
        KeyCode::End => AppMessage::Table(TableMessage::SelectLast),
        KeyCode::Delete => AppMessage::Table(TableMessage::Delete),
        _ => AppMessage::Noop,
    }
}

fn handle_form_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::SUBMIT.matches(&key) {
        return AppMessage::Form(FormMessage::Submit);
    }

    match key.code {
        KeyCode::Up => AppMessage::Form(FormMessage::PrevField),
        KeyCode::Down => AppMessage::Form(FormMessage::NextField),
        KeyCode::Left => AppMessage::Form(FormMessage::PrevOption),
        KeyCode::Right => AppMessage::Form(FormMessage::NextOption),
        KeyCode::Backspace => AppMessage::Form(FormMessage::Backspace),
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            AppMessage::Form(FormMessage::Input(c))
        }
        _ => AppMessage::Noop,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use car_inventory_core::seed;

    fn app() -> App {
        App::new(seed::builtin().unwrap().into_collection().unwrap())
    }

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn table_keys() {
        let app = app();
        assert_eq!(
            handle_event(press(KeyCode::Char('j')), &app),
            AppMessage::Table(TableMessage::SelectNext)
        );
        assert_eq!(
            handle_event(press(KeyCode::Enter), &app),
            AppMessage::Table(TableMessage::Edit)
        );
        assert_eq!(
            handle_event(press(KeyCode::Delete), &app),
            AppMessage::Table(TableMessage::Delete)
        );
        assert_eq!(handle_event(press(KeyCode::Char('q')), &app), AppMessage::Quit);
    }

    #[test]
    fn form_captures_plain_characters() {
        let mut app = app();
        app.focus = FocusPanel::Form;
        assert_eq!(
            handle_event(press(KeyCode::Char('q')), &app),
            AppMessage::Form(FormMessage::Input('q'))
        );
        assert_eq!(
            handle_event(press(KeyCode::Enter), &app),
            AppMessage::Form(FormMessage::Submit)
        );
        let alt_q = Event::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::ALT));
        assert_eq!(handle_event(alt_q, &app), AppMessage::Quit);
    }

    #[test]
    fn modal_swallows_other_keys() {
        let mut app = app();
        app.modal.show_help();
        assert_eq!(handle_event(press(KeyCode::Char('d')), &app), AppMessage::Noop);
        assert_eq!(
            handle_event(press(KeyCode::Esc), &app),
            AppMessage::Modal(ModalMessage::Close)
        );
    }

    #[test]
    fn focus_cycling_and_filter_keys() {
        let mut app = app();
        assert_eq!(handle_event(press(KeyCode::Tab), &app), AppMessage::FocusNext);
        let back_tab = Event::Key(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT));
        assert_eq!(handle_event(back_tab, &app), AppMessage::FocusPrev);

        app.focus = FocusPanel::BrandFilter;
        assert_eq!(
            handle_event(press(KeyCode::Right), &app),
            AppMessage::Filter(FilterMessage::Next)
        );
    }

    #[test]
    fn release_events_are_ignored() {
        let app = app();
        let mut key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert_eq!(handle_event(Event::Key(key), &app), AppMessage::Noop);
    }
}

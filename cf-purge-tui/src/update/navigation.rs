//! 导航更新逻辑

use crate::backend::Command;
use crate::message::NavigationMessage;
use crate::model::{App, FocusPanel};

/// 处理导航消息
pub fn update(app: &mut App, msg: NavigationMessage) -> Option<Command> {
    match msg {
        NavigationMessage::SelectPrevious => {
            app.navigation.select_previous();
            None
        }

        NavigationMessage::SelectNext => {
            app.navigation.select_next();
            None
        }

        NavigationMessage::Confirm => {
            let id = app.navigation.current_id()?;
            app.clear_status(); // 切换页面时清除状态消息
            app.focus = FocusPanel::Content;
            super::open_page(app, id.page())
        }

        NavigationMessage::SelectFirst => {
            app.navigation.selected = 0;
            None
        }

        NavigationMessage::SelectLast => {
            app.navigation.selected = app.navigation.items.len().saturating_sub(1);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Page;

    #[test]
    fn selection_stays_in_bounds() {
        let mut app = App::default();
        update(&mut app, NavigationMessage::SelectPrevious);
        assert_eq!(app.navigation.selected, 0);

        update(&mut app, NavigationMessage::SelectLast);
        update(&mut app, NavigationMessage::SelectNext);
        assert_eq!(app.navigation.selected, app.navigation.items.len() - 1);
    }

    #[test]
    fn confirm_quick_purge_starts_initialization() {
        let mut app = App::default();
        app.set_status("old");
        app.navigation.selected = 2;

        let cmd = update(&mut app, NavigationMessage::Confirm);
        assert_eq!(app.current_page, Page::QuickPurge);
        assert_eq!(cmd, Some(Command::InitQuickPurge));
        assert!(app.notification.is_none());
    }
}

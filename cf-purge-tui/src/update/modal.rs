//! 弹窗更新逻辑

use cf_purge_core::PurgeRequest;

use crate::backend::Command;
use crate::i18n::t;
use crate::message::{ModalMessage, PurgeOrigin};
use crate::model::{App, Modal};

/// 处理弹窗消息
pub fn update(app: &mut App, msg: ModalMessage) -> Option<Command> {
    match app.modal.active {
        Some(Modal::ConfirmPurgeAll { .. }) => handle_confirm_purge_all(app, msg),
        Some(Modal::Help | Modal::Error { .. }) => {
            handle_simple_modal(app, msg);
            None
        }
        None => None,
    }
}

/// 清除确认弹窗：只有焦点在"清除"上按 Enter 才会发出请求
fn handle_confirm_purge_all(app: &mut App, msg: ModalMessage) -> Option<Command> {
    let Some(Modal::ConfirmPurgeAll {
        ref zone_id,
        ref zone_name,
        ref mut focus,
    }) = app.modal.active
    else {
        return None;
    };

    match msg {
        ModalMessage::Close => {
            app.modal.close();
            None
        }

        ModalMessage::ToggleFocus => {
            *focus = 1 - *focus;
            None
        }

        ModalMessage::Confirm => {
            if *focus == 0 {
                // 焦点在"取消"
                app.modal.close();
                return None;
            }

            let zone_id = zone_id.clone();
            let zone_name = zone_name.clone();
            app.modal.close();

            app.purge_all.in_flight = Some(zone_id.clone());
            app.notify_progress(t().notify.purging_cache, None);

            Some(Command::Purge {
                zone_id,
                request: PurgeRequest::Everything,
                origin: PurgeOrigin::Everything { zone_name },
            })
        }
    }
}

/// 帮助 / 错误弹窗：任意确认或关闭都直接关闭
fn handle_simple_modal(app: &mut App, msg: ModalMessage) {
    match msg {
        ModalMessage::Close | ModalMessage::Confirm => app.modal.close(),
        ModalMessage::ToggleFocus => {}
    }
}

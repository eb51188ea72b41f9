//! 页面状态模块
//!
//! 定义各个页面的状态数据结构

mod forms;
mod modal;
mod zones;

pub use forms::{
    ListMode, PurgeAllState, QuickPurgeField, QuickPurgeState, TagFormState, UrlFormState,
};
pub use modal::{Modal, ModalState};
pub use zones::ZoneListState;

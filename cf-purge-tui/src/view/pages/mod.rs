//! 各页面的内容区渲染

mod input;
pub mod quick_purge;
pub mod tag_form;
pub mod url_form;
pub mod zone_list;

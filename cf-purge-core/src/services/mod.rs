//! 业务逻辑服务层

mod purge_service;

pub use purge_service::PurgeService;

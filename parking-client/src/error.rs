use parking_core::{format::error::RequestError, messages::reply::ApiReply};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Refresh,
    ValidateLicensePlate,
    ReserveSpot,
    Entry,
}

impl RequestKind {
    /// Generic toast for transport failures and non-2xx statuses.
    pub fn failure_message(&self) -> &'static str {
        match self {
            RequestKind::Refresh => "车位状态更新失败，请稍后重试",
            RequestKind::ValidateLicensePlate => "验证车牌时发生错误",
            RequestKind::ReserveSpot => "预订失败，请重试",
            RequestKind::Entry => "停车失败，请重试",
        }
    }
}

/// Everything that can stop a workflow step. `Display` is the text shown to
/// the user.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WorkflowError {
    #[error("无效的选择，请输入1或2")]
    InvalidActionChoice,
    #[error("车牌号不能为空")]
    EmptyLicensePlate,
    #[error("请输入有效的预定使用时间")]
    InvalidReservationTime,
    #[error("{0}")]
    Rejected(String),
    #[error("{}", .kind.failure_message())]
    Request {
        kind: RequestKind,
        #[source]
        source: RequestError,
    },
}

impl WorkflowError {
    /// Turns a `success: false` reply into the message the server gave, or
    /// the generic failure text when it gave none.
    pub fn rejected(kind: RequestKind, reply: ApiReply) -> Self {
        match reply.message {
            Some(message) if !message.is_empty() => WorkflowError::Rejected(message),
            _ => WorkflowError::Rejected(kind.failure_message().to_string()),
        }
    }

    pub fn request(kind: RequestKind, source: RequestError) -> Self {
        WorkflowError::Request { kind, source }
    }
}

use thiserror::Error;

/// Reasons a manager-submitted form is refused. Each maps to one user-facing
/// message; the caller re-prompts and nothing is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("title is required")]
    MissingTitle,
    #[error("title is too long")]
    TitleTooLong,
    #[error("discount value must be a number greater than zero")]
    InvalidDiscountValue,
    #[error("start date is required")]
    MissingStartDate,
    #[error("start time is required")]
    MissingStartTime,
    #[error("end date is required")]
    MissingEndDate,
    #[error("end time is required")]
    MissingEndTime,
    #[error("end must be later than start")]
    EndNotAfterStart,
    #[error("at least one ticket must be selected")]
    MissingTickets,
    #[error("discount value exceeds the lowest selected ticket price")]
    ExceedsTicketPrice,
    #[error("a selected ticket already has a discount in this period")]
    Conflict,
    #[error("ticket name is required")]
    MissingTicketName,
    #[error("ticket name is too long")]
    TicketNameTooLong,
    #[error("ticket price must be a number greater than zero")]
    InvalidTicketPrice,
    #[error("stock must be a non-negative whole number")]
    InvalidStock,
    #[error("venue name is required")]
    MissingScenicName,
    #[error("venue name is too long")]
    ScenicNameTooLong,
    #[error("venue address is required")]
    MissingAddress,
    #[error("contact phone must be a mainland mobile number")]
    InvalidContactPhone,
    #[error("a venue has at most five images")]
    TooManyImages,
    #[error("the owner already manages a venue")]
    ScenicAlreadyExists,
}

impl Rejection {
    pub fn code(&self) -> &'static str {
        match self {
            Rejection::MissingTitle => "MISSING_TITLE",
            Rejection::TitleTooLong => "TITLE_TOO_LONG",
            Rejection::InvalidDiscountValue => "INVALID_DISCOUNT_VALUE",
            Rejection::MissingStartDate => "MISSING_START_DATE",
            Rejection::MissingStartTime => "MISSING_START_TIME",
            Rejection::MissingEndDate => "MISSING_END_DATE",
            Rejection::MissingEndTime => "MISSING_END_TIME",
            Rejection::EndNotAfterStart => "END_NOT_AFTER_START",
            Rejection::MissingTickets => "MISSING_TICKETS",
            Rejection::ExceedsTicketPrice => "EXCEEDS_TICKET_PRICE",
            Rejection::Conflict => "CONFLICT",
            Rejection::MissingTicketName => "MISSING_TICKET_NAME",
            Rejection::TicketNameTooLong => "TICKET_NAME_TOO_LONG",
            Rejection::InvalidTicketPrice => "INVALID_TICKET_PRICE",
            Rejection::InvalidStock => "INVALID_STOCK",
            Rejection::MissingScenicName => "MISSING_SCENIC_NAME",
            Rejection::ScenicNameTooLong => "SCENIC_NAME_TOO_LONG",
            Rejection::MissingAddress => "MISSING_ADDRESS",
            Rejection::InvalidContactPhone => "INVALID_CONTACT_PHONE",
            Rejection::TooManyImages => "TOO_MANY_IMAGES",
            Rejection::ScenicAlreadyExists => "SCENIC_ALREADY_EXISTS",
        }
    }

    /// Message shown to the venue manager.
    pub fn message(&self) -> &'static str {
        match self {
            Rejection::MissingTitle => "请输入优惠标题",
            Rejection::TitleTooLong => "优惠标题过长",
            Rejection::InvalidDiscountValue => "请输入正确的优惠值",
            Rejection::MissingStartDate => "请选择开始日期",
            Rejection::MissingStartTime => "请选择开始时间",
            Rejection::MissingEndDate => "请选择结束日期",
            Rejection::MissingEndTime => "请选择结束时间",
            Rejection::EndNotAfterStart => "结束时间必须晚于开始时间",
            Rejection::MissingTickets => "请选择适用门票",
            Rejection::ExceedsTicketPrice => "直减金额不能大于门票原价",
            Rejection::Conflict => "所选门票在该时间段内已有其他优惠方案",
            Rejection::MissingTicketName => "请输入门票名称",
            Rejection::TicketNameTooLong => "门票名称过长",
            Rejection::InvalidTicketPrice => "请输入正确的价格",
            Rejection::InvalidStock => "请输入正确的库存",
            Rejection::MissingScenicName => "请输入景区名称",
            Rejection::ScenicNameTooLong => "景区名称过长",
            Rejection::MissingAddress => "请输入景区地址",
            Rejection::InvalidContactPhone => "请输入正确的手机号",
            Rejection::TooManyImages => "最多上传5张图片",
            Rejection::ScenicAlreadyExists => "该用户已有景区",
        }
    }
}

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Resource not found")]
    NotFound,
    #[error("Rejected: {0}")]
    Rejected(#[from] Rejection),
    #[error("Malformed date-time: {0}")]
    MalformedDateTime(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

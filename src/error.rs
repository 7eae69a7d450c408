pub type CarouselResult<T> = Result<T, CarouselError>;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CarouselError {
    #[error("invalid slot {slot}: carousel has {len} slots")]
    InvalidSlot { slot: usize, len: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl CarouselError {
    pub fn invalid_slot(slot: usize, len: usize) -> Self {
        Self::InvalidSlot { slot, len }
    }

    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}

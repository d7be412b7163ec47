/// Result alias carrying [`MotionError`].
pub type Result<T> = std::result::Result<T, MotionError>;

/// Failures the hub observes. None of them escape `dispatch`; they are
/// logged and counted in the [`DispatchReport`](crate::DispatchReport).
#[derive(Debug, thiserror::Error)]
pub enum MotionError {
    #[error("subscriber '{id}' failed on '{trigger}': {source}")]
    Subscriber {
        id: String,
        trigger: String,
        #[source]
        source: anyhow::Error,
    },
    #[error("subscriber '{id}' panicked on '{trigger}'")]
    SubscriberPanicked { id: String, trigger: String },
    /// The platform host could not attach or schedule.
    #[error("host: {0}")]
    Host(String),
}

impl MotionError {
    pub fn host<T: Into<String>>(msg: T) -> Self {
        Self::Host(msg.into())
    }
}

use gymlog_core::{CheckInStore, CheckInStoreError, UserId};

/// Count check-ins use case - total number of gym visits for one user
///
/// A pass-through to the store's filtered count; an unknown user simply has
/// zero check-ins.
pub struct CountCheckInsUseCase<C>
where
    C: CheckInStore,
{
    check_ins: C,
}

impl<C> CountCheckInsUseCase<C>
where
    C: CheckInStore,
{
    pub fn new(check_ins: C) -> Self {
        Self { check_ins }
    }

    #[tracing::instrument(name = "CountCheckInsUseCase::execute", skip(self))]
    pub async fn execute(&self, user_id: &UserId) -> Result<u64, CheckInStoreError> {
        self.check_ins.count_by_user(user_id).await
    }
}

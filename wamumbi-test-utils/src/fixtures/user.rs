use sea_orm::EntityTrait;

use crate::{error::TestError, fixtures::factory, TestSetup};

impl TestSetup {
    pub fn user<'a>(&'a mut self) -> UserFixtures<'a> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a mut TestSetup,
}

impl<'a> UserFixtures<'a> {
    pub async fn insert_user(
        &self,
        auth_id: &str,
    ) -> Result<entity::wamumbi_user::Model, TestError> {
        Ok(
            entity::prelude::WamumbiUser::insert(factory::user(auth_id))
                .exec_with_returning(&self.setup.state.db)
                .await?,
        )
    }
}

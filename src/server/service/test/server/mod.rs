use crate::server::{
    error::{auth::AuthError, validation::ValidationError, AppError},
    model::{server::ServerListQuery, user::User},
    service::server::ServerService,
};
use test_utils::{builder::TestBuilder, factory};


fn as_caller(user: &entity::user::Model) -> Option<User> {
    Some(User::from_entity(user.clone()))
}

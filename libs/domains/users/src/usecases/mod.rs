//! One struct per user operation. Outputs never carry the password hash.

mod authenticate;
mod create;
mod delete;
mod get;
mod search;
mod update;
mod update_password;

pub use authenticate::AuthenticateUserUseCase;
pub use create::CreateUserUseCase;
pub use delete::DeleteUserUseCase;
pub use get::GetUserUseCase;
pub use search::SearchUsersUseCase;
pub use update::UpdateUserUseCase;
pub use update_password::UpdatePasswordUseCase;

use std::sync::Arc;

use crate::repository::UserRepository;

/// The account management use cases wired to one repository.
///
/// Login lives apart in [`AuthenticateUserUseCase`] since it also needs the
/// token signer.
pub struct UserUseCases<R> {
    pub create: CreateUserUseCase<R>,
    pub get: GetUserUseCase<R>,
    pub update: UpdateUserUseCase<R>,
    pub update_password: UpdatePasswordUseCase<R>,
    pub delete: DeleteUserUseCase<R>,
    pub search: SearchUsersUseCase<R>,
}

impl<R: UserRepository> UserUseCases<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            create: CreateUserUseCase::new(Arc::clone(&repository)),
            get: GetUserUseCase::new(Arc::clone(&repository)),
            update: UpdateUserUseCase::new(Arc::clone(&repository)),
            update_password: UpdatePasswordUseCase::new(Arc::clone(&repository)),
            delete: DeleteUserUseCase::new(Arc::clone(&repository)),
            search: SearchUsersUseCase::new(repository),
        }
    }
}

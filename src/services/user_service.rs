// src/services/user_service.rs
use crate::domain::validation::check_password;
use crate::domain::{validate_user, User, UserRole};
use crate::error::{AppError, AppResult};
use crate::repositories::UserRepository;
use crate::util::hash_password;
use log::{info, warn};
use std::sync::Arc;

const DEFAULT_ADMIN_USERNAME: &str = "admin";
const DEFAULT_ADMIN_PASSWORD: &str = "admin";

#[derive(Debug, Clone)]
pub struct CreateUserRequest {
    pub username: String,
    /// Plain text; hashed before it reaches the store
    pub password: String,
    pub full_name: String,
    pub role: UserRole,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateUserRequest {
    pub username: String,
    pub full_name: Option<String>,
    pub role: Option<UserRole>,
    pub active: Option<bool>,
    /// `None` or empty keeps the current password
    pub password: Option<String>,
}

pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
}

impl UserService {
    /// Seeds the default administrator when the user store is empty.
    pub fn new(user_repo: Arc<dyn UserRepository>) -> AppResult<Self> {
        let service = Self { user_repo };
        service.ensure_admin()?;
        Ok(service)
    }

    fn ensure_admin(&self) -> AppResult<()> {
        if self.user_repo.count()? > 0 {
            return Ok(());
        }

        let admin = User::new(
            DEFAULT_ADMIN_USERNAME,
            hash_password(DEFAULT_ADMIN_PASSWORD)?,
            "Administrator",
            UserRole::Admin,
        );
        match self.user_repo.insert(&admin) {
            Ok(()) => {}
            // Another service instance seeded it first
            Err(AppError::Duplicate(_)) => return Ok(()),
            Err(err) => return Err(err),
        }
        warn!("User store was empty; created default '{}' account", DEFAULT_ADMIN_USERNAME);
        Ok(())
    }

    /// The active user matching these credentials.
    pub fn authenticate(&self, username: &str, password: &str) -> AppResult<User> {
        let digest = hash_password(password).map_err(|_| AppError::Authentication)?;
        self.user_repo
            .authenticate(username, &digest)?
            .ok_or(AppError::Authentication)
    }

    pub fn add_user(&self, request: CreateUserRequest) -> AppResult<User> {
        check_password(&request.password)?;
        let user = User::new(
            request.username,
            hash_password(&request.password)?,
            request.full_name,
            request.role,
        );
        validate_user(&user).map_err(AppError::Domain)?;
        self.user_repo.insert(&user)?;
        info!("Created user {} ({})", user.username, user.role);
        Ok(user)
    }

    pub fn get_user(&self, username: &str) -> AppResult<Option<User>> {
        self.user_repo.find_by_id(username)
    }

    pub fn list_users(&self) -> AppResult<Vec<User>> {
        self.user_repo.find_all()
    }

    pub fn update_user(&self, request: UpdateUserRequest) -> AppResult<User> {
        let password_hash = match request.password.as_deref().filter(|p| !p.is_empty()) {
            Some(password) => {
                check_password(password)?;
                Some(hash_password(password)?)
            }
            None => None,
        };

        self.user_repo
            .modify(&request.username, &mut |user: &mut User| -> AppResult<()> {
                if let Some(full_name) = &request.full_name {
                    user.full_name = full_name.clone();
                }
                if let Some(role) = &request.role {
                    user.role = role.clone();
                }
                if let Some(active) = request.active {
                    user.active = active;
                }
                if let Some(hash) = &password_hash {
                    user.password = hash.clone();
                }
                validate_user(user).map_err(AppError::Domain)
            })
    }

    pub fn delete_user(&self, username: &str) -> AppResult<()> {
        self.user_repo.delete(username)?;
        Ok(())
    }

    pub fn search_users(&self, query: Option<&str>) -> AppResult<Vec<User>> {
        self.user_repo.search(query)
    }

    pub fn find_by_role(&self, role: &UserRole) -> AppResult<Vec<User>> {
        self.user_repo.find_by_role(role)
    }

    /// Requires the current password; fails with `Authentication` otherwise.
    pub fn change_password(
        &self,
        username: &str,
        old_password: &str,
        new_password: &str,
    ) -> AppResult<()> {
        self.authenticate(username, old_password)?;
        check_password(new_password)?;
        self.user_repo
            .set_password_hash(username, &hash_password(new_password)?)?;
        info!("Password changed for {}", username);
        Ok(())
    }

    pub fn set_user_status(&self, username: &str, active: bool) -> AppResult<User> {
        self.user_repo.set_active(username, active)
    }

    pub fn count(&self) -> AppResult<usize> {
        self.user_repo.count()
    }
}

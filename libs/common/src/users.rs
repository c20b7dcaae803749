//! Credential store: persisted users and password hashing

use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use tracing::info;
use uuid::Uuid;

use crate::error::DatabaseResult;

/// Name of the unique constraint on `users.email`
pub const USERS_EMAIL_KEY: &str = "users_email_key";

const USER_COLUMNS: &str = "id, email, password_hash, nome, data_nascimento, profissao, \
     telefone_contato, contato_emergencia, telefone_contato_emergencia, cpf, estado_civil, \
     tamanho_camiseta, created_at, updated_at";

/// User entity
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub nome: String,
    pub data_nascimento: NaiveDate,
    pub profissao: String,
    pub telefone_contato: String,
    pub contato_emergencia: String,
    pub telefone_contato_emergencia: String,
    pub cpf: String,
    pub estado_civil: String,
    pub tamanho_camiseta: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Profile attributes shared by registration and profile updates
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    pub nome: String,
    pub data_nascimento: NaiveDate,
    pub profissao: String,
    pub telefone_contato: String,
    pub contato_emergencia: String,
    pub telefone_contato_emergencia: String,
    pub cpf: String,
    pub estado_civil: String,
    pub tamanho_camiseta: String,
}

/// New user creation payload
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub profile: Profile,
}

/// Profile update payload
#[derive(Debug, Clone)]
pub struct ProfileUpdate {
    pub email: String,
    pub profile: Profile,
}

/// Hash a password with Argon2 and a random salt
pub fn hash_password(password: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut rand::thread_rng());
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e))?
        .to_string();
    Ok(hash)
}

/// Verify a password against a stored hash; unparsable hashes never match
pub fn verify_password(password: &str, password_hash: &str) -> bool {
    let Ok(parsed_hash) = PasswordHash::new(password_hash) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}

/// User repository
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new user
    ///
    /// A duplicate email surfaces as
    /// [`DatabaseError::UniqueViolation`](crate::error::DatabaseError::UniqueViolation) on
    /// [`USERS_EMAIL_KEY`].
    pub async fn create(&self, new_user: &NewUser) -> DatabaseResult<User> {
        info!("Creating new user: {}", new_user.email);

        let profile = &new_user.profile;

        let user = sqlx::query_as::<_, User>(&format!(
            r#"
            INSERT INTO users (email, password_hash, nome, data_nascimento, profissao,
                telefone_contato, contato_emergencia, telefone_contato_emergencia, cpf,
                estado_civil, tamanho_camiseta)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(&new_user.email)
        .bind(&new_user.password_hash)
        .bind(&profile.nome)
        .bind(profile.data_nascimento)
        .bind(&profile.profissao)
        .bind(&profile.telefone_contato)
        .bind(&profile.contato_emergencia)
        .bind(&profile.telefone_contato_emergencia)
        .bind(&profile.cpf)
        .bind(&profile.estado_civil)
        .bind(&profile.tamanho_camiseta)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    /// Find a user by email
    pub async fn find_by_email(&self, email: &str) -> DatabaseResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Find a user by ID
    pub async fn find_by_id(&self, id: Uuid) -> DatabaseResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Overwrite a user's profile attributes and email
    pub async fn update_profile(
        &self,
        id: Uuid,
        update: &ProfileUpdate,
    ) -> DatabaseResult<Option<User>> {
        info!("Updating profile for user: {}", id);

        let profile = &update.profile;
        let user = sqlx::query_as::<_, User>(&format!(
            r#"
            UPDATE users
            SET email = $2, nome = $3, data_nascimento = $4, profissao = $5,
                telefone_contato = $6, contato_emergencia = $7,
                telefone_contato_emergencia = $8, cpf = $9, estado_civil = $10,
                tamanho_camiseta = $11, updated_at = NOW()
            WHERE id = $1
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&update.email)
        .bind(&profile.nome)
        .bind(profile.data_nascimento)
        .bind(&profile.profissao)
        .bind(&profile.telefone_contato)
        .bind(&profile.contato_emergencia)
        .bind(&profile.telefone_contato_emergencia)
        .bind(&profile.cpf)
        .bind(&profile.estado_civil)
        .bind(&profile.tamanho_camiseta)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_password() {
        let hash = hash_password("12345678").unwrap();
        assert_ne!(hash, "12345678");
        assert!(verify_password("12345678", &hash));
        assert!(!verify_password("87654321", &hash));
    }

    #[test]
    fn test_hashes_are_salted() {
        let first = hash_password("12345678").unwrap();
        let second = hash_password("12345678").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_garbage_hash_never_verifies() {
        assert!(!verify_password("12345678", "not-a-phc-string"));
    }

    #[test]
    fn test_password_hash_is_not_serialized() {
        let user = User {
            id: Uuid::new_v4(),
            email: "a@b.com".to_string(),
            password_hash: "secret".to_string(),
            nome: "Ana".to_string(),
            data_nascimento: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
            profissao: "Professora".to_string(),
            telefone_contato: "44999999999".to_string(),
            contato_emergencia: "Maria".to_string(),
            telefone_contato_emergencia: "44988888888".to_string(),
            cpf: "12345678901".to_string(),
            estado_civil: "Solteira".to_string(),
            tamanho_camiseta: "M".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["data_nascimento"], "2000-01-01");
        assert_eq!(json["email"], "a@b.com");
    }
}

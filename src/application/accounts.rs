use crate::domain::design::CustomerIdentity;
use crate::domain::errors::DomainError;
use crate::domain::ports::{Session, SessionRepository};

pub const ADMIN_EMAIL: &str = "admin@motomorph.com";
pub const ADMIN_PASSWORD: &str = "admin123";
pub const ADMIN_ID: i64 = 0;
pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone)]
struct Account {
    identity: CustomerIdentity,
    password: String,
}

/// Demo credential directory and session holder.
///
/// Accounts live in memory only and passwords are compared as plain text;
/// this is a showroom login, not an authentication system.
pub struct AccountService<S> {
    sessions: S,
    accounts: Vec<Account>,
}

impl<S: SessionRepository> AccountService<S> {
    pub fn new(sessions: S) -> Self {
        let demo = Account {
            identity: CustomerIdentity {
                id: 1,
                name: "Kushagra".to_string(),
                email: "kushagra@example.com".to_string(),
            },
            password: "password123".to_string(),
        };
        Self {
            sessions,
            accounts: vec![demo],
        }
    }

    /// Registers a customer. Does not sign them in.
    pub fn sign_up(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<CustomerIdentity, DomainError> {
        if name.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
            return Err(DomainError::InvalidInput("Please fill in all fields".into()));
        }
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(DomainError::InvalidInput(format!(
                "Password must be at least {MIN_PASSWORD_LEN} characters"
            )));
        }
        if !email.contains('@') {
            return Err(DomainError::InvalidInput("Please enter a valid email".into()));
        }
        if self.accounts.iter().any(|a| a.identity.email == email) {
            return Err(DomainError::InvalidInput("Email already registered".into()));
        }

        let id = i64::try_from(self.accounts.len())
            .map_err(|e| DomainError::Internal(e.to_string()))?
            + 1;
        let identity = CustomerIdentity::new(id, name.trim(), email)?;
        self.accounts.push(Account {
            identity: identity.clone(),
            password: password.to_string(),
        });
        log::info!("customer {} signed up", identity.id);
        Ok(identity)
    }

    pub fn login(&mut self, email: &str, password: &str) -> Result<Session, DomainError> {
        let account = self
            .accounts
            .iter()
            .find(|a| a.identity.email == email && a.password == password)
            .ok_or(DomainError::InvalidCredentials)?;

        let session = Session {
            user: account.identity.clone(),
            is_admin: false,
        };
        self.sessions.save_session(&session)?;
        log::info!("customer {} signed in", session.user.id);
        Ok(session)
    }

    pub fn admin_login(&mut self, email: &str, password: &str) -> Result<Session, DomainError> {
        if email != ADMIN_EMAIL || password != ADMIN_PASSWORD {
            log::warn!("rejected admin sign-in for '{email}'");
            return Err(DomainError::InvalidCredentials);
        }

        let session = Session {
            user: CustomerIdentity {
                id: ADMIN_ID,
                name: "Admin".to_string(),
                email: email.to_string(),
            },
            is_admin: true,
        };
        self.sessions.save_session(&session)?;
        log::info!("admin signed in");
        Ok(session)
    }

    pub fn logout(&mut self) -> Result<(), DomainError> {
        self.sessions.clear_session()
    }

    pub fn current_session(&self) -> Result<Option<Session>, DomainError> {
        self.sessions.load_session()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    #[derive(Clone, Default)]
    struct SessionSlot(Arc<Mutex<Option<Session>>>);

    impl SessionRepository for SessionSlot {
        fn load_session(&self) -> Result<Option<Session>, DomainError> {
            Ok(self.0.lock().unwrap().clone())
        }

        fn save_session(&self, session: &Session) -> Result<(), DomainError> {
            *self.0.lock().unwrap() = Some(session.clone());
            Ok(())
        }

        fn clear_session(&self) -> Result<(), DomainError> {
            *self.0.lock().unwrap() = None;
            Ok(())
        }
    }

    fn service() -> (AccountService<SessionSlot>, SessionSlot) {
        let slot = SessionSlot::default();
        (AccountService::new(slot.clone()), slot)
    }

    fn invalid_input_message(result: Result<CustomerIdentity, DomainError>) -> String {
        match result {
            Err(DomainError::InvalidInput(msg)) => msg,
            other => panic!("expected invalid input, got {other:?}"),
        }
    }

    #[test]
    fn demo_customer_can_log_in() {
        let (mut accounts, slot) = service();

        let session = accounts.login("kushagra@example.com", "password123").unwrap();

        assert_eq!(session.user.id, 1);
        assert!(!session.is_admin);
        assert_eq!(slot.load_session().unwrap(), Some(session));
    }

    #[test]
    fn wrong_password_is_rejected_without_touching_session() {
        let (mut accounts, slot) = service();

        let result = accounts.login("kushagra@example.com", "nope");

        assert!(matches!(result, Err(DomainError::InvalidCredentials)));
        assert_eq!(slot.load_session().unwrap(), None);
    }

    #[test]
    fn sign_up_assigns_next_id_and_allows_login() {
        let (mut accounts, _) = service();

        let created = accounts.sign_up("Meera", "meera@example.com", "secret1").unwrap();
        let session = accounts.login("meera@example.com", "secret1").unwrap();

        assert_eq!(created.id, 2);
        assert_eq!(session.user, created);
    }

    #[test]
    fn sign_up_does_not_sign_in() {
        let (mut accounts, _) = service();
        accounts.sign_up("Meera", "meera@example.com", "secret1").unwrap();
        assert_eq!(accounts.current_session().unwrap(), None);
    }

    #[test]
    fn sign_up_validation_messages() {
        let (mut accounts, _) = service();

        assert_eq!(
            invalid_input_message(accounts.sign_up("", "a@b.c", "secret1")),
            "Please fill in all fields"
        );
        assert_eq!(
            invalid_input_message(accounts.sign_up("Ravi", "ravi@example.com", "12345")),
            "Password must be at least 6 characters"
        );
        assert_eq!(
            invalid_input_message(accounts.sign_up("Ravi", "ravi.example.com", "secret1")),
            "Please enter a valid email"
        );
        assert_eq!(
            invalid_input_message(accounts.sign_up("Ravi", "kushagra@example.com", "secret1")),
            "Email already registered"
        );
    }

    #[test]
    fn admin_login_uses_fixed_credentials() {
        let (mut accounts, _) = service();

        assert!(matches!(
            accounts.admin_login(ADMIN_EMAIL, "wrong"),
            Err(DomainError::InvalidCredentials)
        ));

        let session = accounts.admin_login(ADMIN_EMAIL, ADMIN_PASSWORD).unwrap();
        assert!(session.is_admin);
        assert_eq!(session.user.id, ADMIN_ID);
        assert_eq!(session.user.name, "Admin");
    }

    #[test]
    fn logout_clears_the_session_slot() {
        let (mut accounts, slot) = service();
        accounts.login("kushagra@example.com", "password123").unwrap();

        accounts.logout().unwrap();

        assert_eq!(slot.load_session().unwrap(), None);
    }
}

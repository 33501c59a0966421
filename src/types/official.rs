//! Bank official credentials and roles
//!
//! An [`Official`] is a staff credential with a role label. Roles carry no
//! differentiated permissions: every authenticated official can perform every
//! official operation, a known limitation recorded in DESIGN.md. The role
//! helpers exist for display and reporting only.

use crate::types::{LedgerError, OfficialId};
use std::fmt;
use std::str::FromStr;

/// The fixed set of official roles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Manager,
    Staff,
    Supervisor,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Role::Manager => "Manager",
            Role::Staff => "Staff",
            Role::Supervisor => "Supervisor",
        };
        f.write_str(label)
    }
}

impl FromStr for Role {
    type Err = LedgerError;

    /// Case-insensitive parse, matching how roles are compared everywhere
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "manager" => Ok(Role::Manager),
            "staff" => Ok(Role::Staff),
            "supervisor" => Ok(Role::Supervisor),
            other => Err(LedgerError::validation_failed(format!(
                "unknown role '{other}': expected Manager, Staff or Supervisor"
            ))),
        }
    }
}

/// A bank-staff credential
#[derive(Debug, Clone, PartialEq)]
pub struct Official {
    id: OfficialId,
    password: String,
    role: Role,
    name: String,
    active: bool,
}

impl Official {
    /// Create a new active official
    pub fn new(
        id: impl Into<OfficialId>,
        password: impl Into<String>,
        role: Role,
        name: impl Into<String>,
    ) -> Self {
        Official {
            id: id.into(),
            password: password.into(),
            role,
            name: name.into(),
            active: true,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Deactivate or reactivate the credential
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Replace the password
    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    /// Authenticate against the stored credential
    ///
    /// Unlike customer authentication, this checks the active flag:
    /// a deactivated official cannot log in.
    pub fn authenticate(&self, password: &str) -> bool {
        self.password == password && self.active
    }

    /// Informational role check; grants no extra capability
    pub fn is_manager(&self) -> bool {
        self.role == Role::Manager
    }

    /// Informational role check; grants no extra capability
    pub fn is_supervisor(&self) -> bool {
        self.role == Role::Supervisor
    }

    /// Informational role check; grants no extra capability
    pub fn is_staff(&self) -> bool {
        self.role == Role::Staff
    }

    /// One-line summary for listings
    pub fn summary(&self) -> String {
        format!(
            "ID: {} | Name: {} | Role: {} | Status: {}",
            self.id,
            self.name,
            self.role,
            if self.active { "Active" } else { "Inactive" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Manager", Role::Manager)]
    #[case("manager", Role::Manager)]
    #[case("STAFF", Role::Staff)]
    #[case("  supervisor ", Role::Supervisor)]
    fn role_parsing_is_case_insensitive(#[case] input: &str, #[case] expected: Role) {
        assert_eq!(input.parse::<Role>().unwrap(), expected);
    }

    #[test]
    fn unknown_role_is_rejected() {
        let result = "Janitor".parse::<Role>();
        assert!(matches!(
            result.unwrap_err(),
            LedgerError::ValidationFailed { .. }
        ));
    }

    #[test]
    fn authenticate_requires_matching_password_and_active_flag() {
        let mut official = Official::new("OFF001", "admin123", Role::Manager, "John Manager");

        assert!(official.authenticate("admin123"));
        assert!(!official.authenticate("wrong"));

        official.set_active(false);
        assert!(!official.authenticate("admin123"));
    }

    #[test]
    fn role_helpers_reflect_role_only() {
        let manager = Official::new("OFF001", "x", Role::Manager, "M");
        assert!(manager.is_manager());
        assert!(!manager.is_staff());
        assert!(!manager.is_supervisor());

        let staff = Official::new("OFF002", "x", Role::Staff, "S");
        assert!(staff.is_staff());
        assert!(!staff.is_manager());
    }

    #[test]
    fn set_password_replaces_credential() {
        let mut official = Official::new("OFF002", "staff456", Role::Staff, "Sarah Staff");
        official.set_password("newpass");
        assert!(!official.authenticate("staff456"));
        assert!(official.authenticate("newpass"));
    }

    #[test]
    fn summary_shows_status() {
        let mut official = Official::new("OFF003", "super789", Role::Supervisor, "Mike Supervisor");
        assert!(official.summary().contains("Active"));
        official.set_active(false);
        assert!(official.summary().contains("Inactive"));
    }
}

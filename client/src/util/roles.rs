//! Role code → landing route table.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both the session probe and the post-login redirect pick a destination from
//! this one table so the two call sites cannot drift apart.

#[cfg(test)]
#[path = "roles_test.rs"]
mod roles_test;

/// Client route paths referenced by the sign-in screens.
pub mod paths {
    pub const ROOT: &str = "/";
    pub const LOGIN: &str = "/login";
    pub const FORGOT_PASSWORD: &str = "/forgot-password";
    pub const REGISTER: &str = "/register";
    pub const SUPER_ADMIN_DASHBOARD: &str = "/super-admin/dashboard";
    pub const ADMIN_DASHBOARD: &str = "/admin/dashboard";
    pub const CASHIER_TRANSACTION: &str = "/cashier/transaction";
    pub const COMPANY_ADMIN_DASHBOARD: &str = "/company-admin/dashboard";
}

/// Permission tier carried in `user.id_level`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    SuperAdmin,
    Admin,
    Cashier,
    CompanyAdmin,
}

impl Role {
    pub const ALL: [Self; 4] = [Self::SuperAdmin, Self::Admin, Self::Cashier, Self::CompanyAdmin];

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::SuperAdmin),
            1 => Some(Self::Admin),
            2 => Some(Self::Cashier),
            3 => Some(Self::CompanyAdmin),
            _ => None,
        }
    }

    pub fn code(self) -> i64 {
        match self {
            Self::SuperAdmin => 0,
            Self::Admin => 1,
            Self::Cashier => 2,
            Self::CompanyAdmin => 3,
        }
    }

    pub fn landing_path(self) -> &'static str {
        match self {
            Self::SuperAdmin => paths::SUPER_ADMIN_DASHBOARD,
            Self::Admin => paths::ADMIN_DASHBOARD,
            Self::Cashier => paths::CASHIER_TRANSACTION,
            Self::CompanyAdmin => paths::COMPANY_ADMIN_DASHBOARD,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::SuperAdmin => "Super Admin",
            Self::Admin => "Admin",
            Self::Cashier => "Cashier",
            Self::CompanyAdmin => "Company Admin",
        }
    }
}

/// Landing route for a role code; unknown or missing codes go to `/`.
pub fn landing_path(code: Option<i64>) -> &'static str {
    code.and_then(Role::from_code).map_or(paths::ROOT, Role::landing_path)
}

use super::Role;

/// Capabilities checked by the route guards. Every protected route names one
/// of these instead of carrying its own role list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    /// Create a notice-board post.
    PublishPost,
    /// Edit the content of an existing post.
    EditPost,
    /// Submit an international payment.
    SubmitPayment,
    /// Create employee and user accounts (the admin tier).
    ProvisionAccounts,
    /// Create user accounts (the employee tier).
    RegisterCustomers,
}

impl Role {
    /// The (role, permission) table. Payment submission is open to `user`
    /// bearers only.
    pub fn allows(self, permission: Permission) -> bool {
        use Permission::*;
        match (self, permission) {
            (_, PublishPost) | (_, EditPost) => true,
            (Role::User, SubmitPayment) => true,
            (Role::Admin, ProvisionAccounts) => true,
            (Role::Employee, RegisterCustomers) => true,
            _ => false,
        }
    }

    /// Roles this role may hand out when creating accounts. Nobody may mint
    /// another admin.
    pub fn assignable_roles(self) -> &'static [Role] {
        match self {
            Role::Admin => &[Role::Employee, Role::User],
            Role::Employee => &[Role::User],
            Role::User => &[],
        }
    }

    pub fn may_assign(self, target: Role) -> bool {
        self.assignable_roles().contains(&target)
    }
}

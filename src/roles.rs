use alloy_primitives::Address;
use alloy_signer_local::PrivateKeySigner;
use async_trait::async_trait;
use strum::IntoEnumIterator;
use tracing::debug;

use crate::errors::{Result, StaurError};

/// Named roles of the stAUR contracts that a signer can be bound to.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "kebab-case")]
pub enum Role {
    VaultAdmin,
    ManagerAdmin,
    VaultOperator,
    ManagerOperator,
    DepositorAdmin,
}

impl Role {
    /// Whether the role is filled by the owner (first) identity rather than the operator.
    pub const fn is_owner_role(&self) -> bool {
        matches!(self, Role::VaultAdmin | Role::ManagerAdmin)
    }
}

/// Anything bound to a public address that can stand in for an account.
pub trait Identity {
    fn address(&self) -> Address;
}

impl Identity for Address {
    fn address(&self) -> Address {
        *self
    }
}

impl Identity for PrivateKeySigner {
    fn address(&self) -> Address {
        alloy_signer::Signer::address(self)
    }
}

/// Mapping of every [`Role`] to the identity it is bound to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoleAssignment<I> {
    vault_admin: I,
    manager_admin: I,
    vault_operator: I,
    manager_operator: I,
    depositor_admin: I,
}

impl<I> RoleAssignment<I> {
    pub fn vault_admin(&self) -> &I {
        &self.vault_admin
    }

    pub fn manager_admin(&self) -> &I {
        &self.manager_admin
    }

    pub fn vault_operator(&self) -> &I {
        &self.vault_operator
    }

    pub fn manager_operator(&self) -> &I {
        &self.manager_operator
    }

    pub fn depositor_admin(&self) -> &I {
        &self.depositor_admin
    }

    pub fn get(&self, role: Role) -> &I {
        match role {
            Role::VaultAdmin => &self.vault_admin,
            Role::ManagerAdmin => &self.manager_admin,
            Role::VaultOperator => &self.vault_operator,
            Role::ManagerOperator => &self.manager_operator,
            Role::DepositorAdmin => &self.depositor_admin,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Role, &I)> {
        Role::iter().map(move |role| (role, self.get(role)))
    }
}

impl<I: Identity> RoleAssignment<I> {
    pub fn addresses(&self) -> RoleAssignment<Address> {
        RoleAssignment {
            vault_admin: self.vault_admin.address(),
            manager_admin: self.manager_admin.address(),
            vault_operator: self.vault_operator.address(),
            manager_operator: self.manager_operator.address(),
            depositor_admin: self.depositor_admin.address(),
        }
    }
}

/// Binds the first identity to the admin roles and the second to the operator roles.
///
/// Entries past the second are ignored. Fails with [`StaurError::InsufficientIdentities`]
/// when fewer than two identities are given.
pub fn bind<I: Clone>(identities: &[I]) -> Result<RoleAssignment<I>> {
    let [owner, operator, ..] = identities else {
        return Err(StaurError::InsufficientIdentities {
            available: identities.len(),
        });
    };

    Ok(RoleAssignment {
        vault_admin: owner.clone(),
        manager_admin: owner.clone(),
        vault_operator: operator.clone(),
        manager_operator: operator.clone(),
        depositor_admin: operator.clone(),
    })
}

/// Asynchronous provider of the ordered list of available signers.
#[async_trait]
pub trait IdentitySource {
    type Identity: Identity + Clone + Send + Sync;

    async fn identities(&self) -> Result<Vec<Self::Identity>>;
}

#[async_trait]
impl<I> IdentitySource for Vec<I>
where
    I: Identity + Clone + Send + Sync,
{
    type Identity = I;

    async fn identities(&self) -> Result<Vec<I>> {
        Ok(self.clone())
    }
}

/// Fetches the available identities from `source` and binds them to roles.
pub async fn generate_accounts<S>(source: &S) -> Result<RoleAssignment<S::Identity>>
where
    S: IdentitySource + Sync + ?Sized,
{
    let identities = source.identities().await?;
    let accounts = bind(identities.as_slice())?;

    debug!(
        available = identities.len(),
        owner = %accounts.vault_admin().address(),
        operator = %accounts.vault_operator().address(),
        "Bound signers to roles"
    );

    Ok(accounts)
}

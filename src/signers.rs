use alloy_signer_local::PrivateKeySigner;
use async_trait::async_trait;
use tracing::warn;

use crate::{
    config::Secrets,
    constants::{ADMIN_PRIVATE_KEY_VAR, OPERATOR_PRIVATE_KEY_VAR},
    errors::{Result, StaurError},
    roles::IdentitySource,
};

/// Signers built from the admin and operator keys of the environment, in that order.
#[derive(Clone, Debug)]
pub struct EnvSigners {
    secrets: Secrets,
}

impl EnvSigners {
    pub fn new(secrets: Secrets) -> Self {
        Self { secrets }
    }
}

fn parse_signer(var: &'static str, key: &str) -> Result<PrivateKeySigner> {
    key.parse::<PrivateKeySigner>()
        .map_err(|e| StaurError::InvalidPrivateKey {
            var,
            reason: e.to_string(),
        })
}

#[async_trait]
impl IdentitySource for EnvSigners {
    type Identity = PrivateKeySigner;

    async fn identities(&self) -> Result<Vec<PrivateKeySigner>> {
        let keys = [
            (ADMIN_PRIVATE_KEY_VAR, &self.secrets.admin_private_key),
            (OPERATOR_PRIVATE_KEY_VAR, &self.secrets.operator_private_key),
        ];

        let mut signers = Vec::with_capacity(keys.len());
        for (var, key) in keys {
            match key {
                Some(key) => signers.push(parse_signer(var, key)?),
                // a gap would shift the operator into the admin slot
                None => {
                    warn!(var, "Private key not set");
                    break;
                }
            }
        }

        Ok(signers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roles::{Identity, generate_accounts};

    // Well-known anvil development keys
    const KEY_0: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
    const KEY_1: &str = "59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d";

    fn secrets(admin: Option<&str>, operator: Option<&str>) -> Secrets {
        Secrets {
            admin_private_key: admin.map(Into::into),
            operator_private_key: operator.map(Into::into),
        }
    }

    #[tokio::test]
    async fn admin_and_operator_keys_fill_their_roles() {
        let source = EnvSigners::new(secrets(Some(KEY_0), Some(KEY_1)));

        let accounts = generate_accounts(&source).await.unwrap().addresses();

        let admin = KEY_0.parse::<PrivateKeySigner>().unwrap().address();
        let operator = KEY_1.parse::<PrivateKeySigner>().unwrap().address();
        assert_eq!(*accounts.vault_admin(), admin);
        assert_eq!(*accounts.manager_admin(), admin);
        assert_eq!(*accounts.vault_operator(), operator);
        assert_eq!(*accounts.manager_operator(), operator);
        assert_eq!(*accounts.depositor_admin(), operator);
    }

    #[tokio::test]
    async fn missing_operator_key_yields_insufficient_identities() {
        let source = EnvSigners::new(secrets(Some(KEY_0), None));

        let err = generate_accounts(&source).await.unwrap_err();
        assert!(matches!(err, StaurError::InsufficientIdentities { available: 1 }));
    }

    #[tokio::test]
    async fn missing_admin_key_does_not_promote_the_operator() {
        let source = EnvSigners::new(secrets(None, Some(KEY_1)));

        assert!(source.identities().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn malformed_key_names_the_variable() {
        let source = EnvSigners::new(secrets(Some(KEY_0), Some("not-a-key")));

        match source.identities().await {
            Err(StaurError::InvalidPrivateKey { var, .. }) => assert_eq!(var, OPERATOR_PRIVATE_KEY_VAR),
            other => panic!("unexpected result: {:?}", other.map(|s| s.len())),
        }
    }

    #[test]
    fn anvil_key_maps_to_its_known_address() {
        let signer = parse_signer(ADMIN_PRIVATE_KEY_VAR, KEY_0).unwrap();
        assert_eq!(
            Identity::address(&signer).to_checksum(None),
            "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266"
        );
    }
}

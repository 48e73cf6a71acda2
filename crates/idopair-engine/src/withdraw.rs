//! Administrative withdrawal of custodial balances.
//!
//! Both operations reuse the guarded transfer: there is no upper-bound
//! check here, so an over-large amount surfaces from the gateway as a
//! fatal `TransferFailed` and the invocation aborts with no effect.

use idopair_store::KeyValue;
use idopair_types::{ContractEventKind, Result};

use crate::collab::Env;
use crate::contract::PairContract;

impl<S: KeyValue> PairContract<S> {
    /// Withdraw `amount` of the custodial payment-asset balance to the
    /// administrator. Administrator only.
    pub fn withdraw_asset(&mut self, env: &mut Env<'_>, amount: u128) -> Result<bool> {
        let admin = self.require_admin(env.witness, "withdraw_asset")?;
        let asset = self.asset_hash()?;
        self.guarded_transfer(env.gateway, asset, admin, amount, None)?;
        self.push_event(ContractEventKind::AssetWithdrawn { to: admin, amount });
        tracing::info!(to = %admin, amount, "custodial asset withdrawn");
        Ok(true)
    }

    /// Withdraw `amount` of the custodial sale-token balance to the
    /// administrator. Administrator only.
    pub fn withdraw_token(&mut self, env: &mut Env<'_>, amount: u128) -> Result<bool> {
        let admin = self.require_admin(env.witness, "withdraw_token")?;
        let token = self.token_hash()?;
        self.guarded_transfer(env.gateway, token, admin, amount, None)?;
        self.push_event(ContractEventKind::TokenWithdrawn { to: admin, amount });
        tracing::info!(to = %admin, amount, "custodial tokens withdrawn");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::{LedgerGateway, NullCodeHost, StaticWitness, TxLog};
    use idopair_store::MemoryStore;
    use idopair_types::{IdoPairError, PairDefaults, ScriptHash};

    fn fixture() -> (PairContract<MemoryStore>, LedgerGateway) {
        let defaults = PairDefaults::new(
            ScriptHash::derived(b"asset-A"),
            ScriptHash::derived(b"token-T"),
            ScriptHash::derived(b"authorizer-S"),
            ScriptHash::derived(b"origin-admin"),
        );
        let self_hash = ScriptHash::derived(b"pair-contract");
        let contract = PairContract::deploy(MemoryStore::new(), defaults, self_hash).unwrap();
        let mut gateway = LedgerGateway::new();
        gateway.fund(defaults.asset, self_hash, 500);
        gateway.fund(defaults.token, self_hash, 900);
        (contract, gateway)
    }

    #[test]
    fn admin_withdraws_asset_to_self() {
        let (mut contract, mut gateway) = fixture();
        let admin = contract.admin().unwrap();
        let witness = StaticWitness(admin);
        let log = TxLog::new();
        let mut host = NullCodeHost::new();
        let mut env = Env::new(&witness, &mut gateway, &log, &mut host);

        assert!(contract.withdraw_asset(&mut env, 200).unwrap());
        let asset = contract.defaults().asset;
        assert_eq!(gateway.balance(asset, admin), 200);
        assert_eq!(gateway.balance(asset, contract.self_hash()), 300);
    }

    #[test]
    fn admin_withdraws_token_to_self() {
        let (mut contract, mut gateway) = fixture();
        let admin = contract.admin().unwrap();
        let witness = StaticWitness(admin);
        let log = TxLog::new();
        let mut host = NullCodeHost::new();
        let mut env = Env::new(&witness, &mut gateway, &log, &mut host);

        assert!(contract.withdraw_token(&mut env, 900).unwrap());
        let token = contract.defaults().token;
        assert_eq!(gateway.balance(token, admin), 900);
        assert_eq!(gateway.balance(token, contract.self_hash()), 0);
    }

    #[test]
    fn non_admin_withdraw_rejected_with_balances_unchanged() {
        let (mut contract, mut gateway) = fixture();
        let stranger = StaticWitness(ScriptHash::derived(b"stranger"));
        let log = TxLog::new();
        let mut host = NullCodeHost::new();
        let mut env = Env::new(&stranger, &mut gateway, &log, &mut host);

        for amount in [0u128, 1, 500, u128::MAX] {
            let err = contract.withdraw_asset(&mut env, amount).unwrap_err();
            assert!(matches!(err, IdoPairError::NotAuthorized { .. }));
            let err = contract.withdraw_token(&mut env, amount).unwrap_err();
            assert!(matches!(err, IdoPairError::NotAuthorized { .. }));
        }
        let asset = contract.defaults().asset;
        let token = contract.defaults().token;
        assert_eq!(gateway.balance(asset, contract.self_hash()), 500);
        assert_eq!(gateway.balance(token, contract.self_hash()), 900);
        assert!(gateway.calls.is_empty());
    }

    #[test]
    fn overdraw_surfaces_as_transfer_failed() {
        let (mut contract, mut gateway) = fixture();
        let admin = contract.admin().unwrap();
        let witness = StaticWitness(admin);
        let log = TxLog::new();
        let mut host = NullCodeHost::new();
        let mut env = Env::new(&witness, &mut gateway, &log, &mut host);

        let events_before = contract.events().len();
        let err = contract.withdraw_asset(&mut env, 10_000).unwrap_err();
        assert!(matches!(err, IdoPairError::TransferFailed { .. }));
        // Aborted: no event recorded, balance untouched.
        assert_eq!(contract.events().len(), events_before);
        let asset = contract.defaults().asset;
        assert_eq!(gateway.balance(asset, contract.self_hash()), 500);
    }

    #[test]
    fn zero_withdraw_succeeds_as_noop() {
        let (mut contract, mut gateway) = fixture();
        let witness = StaticWitness(contract.admin().unwrap());
        let log = TxLog::new();
        let mut host = NullCodeHost::new();
        let mut env = Env::new(&witness, &mut gateway, &log, &mut host);

        assert!(contract.withdraw_token(&mut env, 0).unwrap());
        let token = contract.defaults().token;
        assert_eq!(gateway.balance(token, contract.self_hash()), 900);
    }
}

//! End-to-end scenarios for the pair escrow.
//!
//! Each test drives the contract the way the environment would: external
//! contracts emit events into the transaction log, the payment asset
//! delivers a notification, and the engine reacts. Collaborators come from
//! the crate's testkit.

use idopair_engine::testkit::{LedgerGateway, NullCodeHost, StaticWitness, TxLog};
use idopair_engine::{tokens_for, Env, PairContract, SettlementOutcome, TokenGateway};
use idopair_store::MemoryStore;
use idopair_types::{
    constants, AcceptReason, ContractEventKind, IdoPairError, PairDefaults, PaymentNotice,
    ScriptHash,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("idopair_engine=debug")
        .try_init();
}

/// One deployed pair with funded custodial reserves and its collaborators.
struct World {
    contract: PairContract<MemoryStore>,
    gateway: LedgerGateway,
    log: TxLog,
    host: NullCodeHost,
    asset: ScriptHash,
    token: ScriptHash,
    authorizer: ScriptHash,
    payer: ScriptHash,
}

impl World {
    fn new() -> Self {
        init_tracing();
        let asset = ScriptHash::derived(b"e2e:asset-A");
        let token = ScriptHash::derived(b"e2e:token-T");
        let authorizer = ScriptHash::derived(b"e2e:authorizer-S");
        let defaults = PairDefaults::new(
            asset,
            token,
            authorizer,
            ScriptHash::derived(b"e2e:origin-admin"),
        );
        let self_hash = ScriptHash::derived(b"e2e:pair-contract");
        let contract = PairContract::deploy(MemoryStore::new(), defaults, self_hash).unwrap();
        let mut gateway = LedgerGateway::new();
        // Sale-token reserve custodied by the contract.
        gateway.fund(token, self_hash, 1_000_000);
        Self {
            contract,
            gateway,
            log: TxLog::new(),
            host: NullCodeHost::new(),
            asset,
            token,
            authorizer,
            payer: ScriptHash::derived(b"e2e:payer"),
        }
    }

    fn admin(&self) -> ScriptHash {
        self.contract.admin().unwrap()
    }

    /// Deliver a payment notification as caller `witness_of`.
    fn pay_as(
        &mut self,
        witness_of: ScriptHash,
        origin: ScriptHash,
        amount: u128,
    ) -> Result<SettlementOutcome, IdoPairError> {
        let witness = StaticWitness(witness_of);
        let notice = PaymentNotice::new(origin, self.payer, amount, None);
        let mut env = Env::new(&witness, &mut self.gateway, &self.log, &mut self.host);
        self.contract.on_incoming_payment(&mut env, &notice)
    }

    fn pay(&mut self, amount: u128) -> Result<SettlementOutcome, IdoPairError> {
        let origin = self.asset;
        self.pay_as(self.payer, origin, amount)
    }
}

#[test]
fn reference_scenario_disburses_ten_tokens_for_210() {
    let mut world = World::new();
    // The authorizer performs the swap, then the asset transfers 210 units.
    world.log.emit(world.authorizer, constants::SWAP_EVENT, vec![]);
    let outcome = world.pay(210).unwrap();

    assert_eq!(outcome, SettlementOutcome::Disbursed { tokens_out: 10 });
    assert_eq!(world.gateway.balance(world.token, world.payer), 10);
    assert_eq!(
        world
            .gateway
            .balance(world.token, world.contract.self_hash()),
        1_000_000 - 10
    );
    assert!(matches!(
        world.contract.events().last().unwrap().kind,
        ContractEventKind::SettlementExecuted {
            amount_in: 210,
            tokens_out: 10,
            ..
        }
    ));
}

#[test]
fn other_event_name_accepts_without_disbursement() {
    let mut world = World::new();
    world.log.emit(world.authorizer, "OtherEvent", vec![]);
    let outcome = world.pay(210).unwrap();

    assert_eq!(
        outcome,
        SettlementOutcome::Accepted(AcceptReason::NoSwapEvent)
    );
    assert_eq!(world.gateway.balance(world.token, world.payer), 0);
}

#[test]
fn untrusted_origin_is_kept_without_disbursement() {
    let mut world = World::new();
    world.log.emit(world.authorizer, constants::SWAP_EVENT, vec![]);
    let rogue = ScriptHash::derived(b"e2e:rogue-asset");
    let payer = world.payer;
    let outcome = world.pay_as(payer, rogue, 210).unwrap();

    assert_eq!(
        outcome,
        SettlementOutcome::Accepted(AcceptReason::UntrustedAsset)
    );
    assert!(world.gateway.calls.is_empty());
}

#[test]
fn sub_price_amount_disburses_zero_successfully() {
    let mut world = World::new();
    world.log.emit(world.authorizer, constants::SWAP_EVENT, vec![]);
    let outcome = world.pay(constants::PRICE - 1).unwrap();

    assert_eq!(outcome, SettlementOutcome::Disbursed { tokens_out: 0 });
    assert_eq!(world.gateway.balance(world.token, world.payer), 0);
    // The guarded transfer was issued and succeeded as a no-op.
    assert_eq!(world.gateway.calls.len(), 1);
}

#[test]
fn conversion_matches_floor_division_across_amounts() {
    for amount in [0u128, 1, 20, 21, 41, 42, 209, 210, 211, 10_000] {
        let mut world = World::new();
        world.log.emit(world.authorizer, constants::SWAP_EVENT, vec![]);
        world.gateway.fund(world.asset, world.payer, amount);
        let outcome = world.pay(amount).unwrap();
        assert_eq!(
            outcome,
            SettlementOutcome::Disbursed {
                tokens_out: amount / constants::PRICE
            }
        );
        assert_eq!(outcome.disbursed(), Some(tokens_for(amount)));
    }
}

#[test]
fn non_admin_withdrawals_rejected_with_balances_unchanged() {
    let mut world = World::new();
    world.gateway.fund(world.asset, world.contract.self_hash(), 500);
    let stranger = StaticWitness(ScriptHash::derived(b"e2e:stranger"));

    for amount in [0u128, 1, 499, u128::MAX] {
        let mut env = Env::new(&stranger, &mut world.gateway, &world.log, &mut world.host);
        let err = world.contract.withdraw_asset(&mut env, amount).unwrap_err();
        assert!(matches!(err, IdoPairError::NotAuthorized { .. }));
        let err = world.contract.withdraw_token(&mut env, amount).unwrap_err();
        assert!(matches!(err, IdoPairError::NotAuthorized { .. }));
    }
    assert_eq!(
        world
            .gateway
            .balance(world.asset, world.contract.self_hash()),
        500
    );
    assert_eq!(
        world
            .gateway
            .balance(world.token, world.contract.self_hash()),
        1_000_000
    );
}

#[test]
fn admin_withdraws_sale_proceeds() {
    let mut world = World::new();
    // Settle one payment so the contract custodies 210 asset units.
    world.log.emit(world.authorizer, constants::SWAP_EVENT, vec![]);
    world.pay(210).unwrap();
    world.gateway.fund(world.asset, world.contract.self_hash(), 210);

    let admin = world.admin();
    let witness = StaticWitness(admin);
    let mut env = Env::new(&witness, &mut world.gateway, &world.log, &mut world.host);
    assert!(world.contract.withdraw_asset(&mut env, 210).unwrap());
    assert_eq!(world.gateway.balance(world.asset, admin), 210);
}

#[test]
fn ownership_handoff_switches_privileges_immediately() {
    let mut world = World::new();
    let old_admin = world.admin();
    let new_admin = ScriptHash::derived(b"e2e:admin-2");

    {
        let witness = StaticWitness(old_admin);
        let env = Env::new(&witness, &mut world.gateway, &world.log, &mut world.host);
        assert!(world.contract.transfer_ownership(&env, new_admin).unwrap());
    }
    assert_eq!(world.admin(), new_admin);

    // Old administrator: locked out of every privileged operation.
    {
        let witness = StaticWitness(old_admin);
        let mut env = Env::new(&witness, &mut world.gateway, &world.log, &mut world.host);
        assert!(matches!(
            world
                .contract
                .transfer_ownership(&env, ScriptHash::derived(b"e2e:admin-3"))
                .unwrap_err(),
            IdoPairError::NotAuthorized { .. }
        ));
        assert!(matches!(
            world.contract.withdraw_token(&mut env, 1).unwrap_err(),
            IdoPairError::NotAuthorized { .. }
        ));
    }

    // New administrator: fully in control.
    {
        let witness = StaticWitness(new_admin);
        let env = Env::new(&witness, &mut world.gateway, &world.log, &mut world.host);
        assert!(world
            .contract
            .set_token_hash(&env, ScriptHash::derived(b"e2e:token-T2"))
            .unwrap());
    }
    assert_eq!(
        world.contract.token_hash().unwrap(),
        ScriptHash::derived(b"e2e:token-T2")
    );
}

#[test]
fn non_admin_cannot_repoint_asset_hash() {
    let mut world = World::new();
    let before = world.contract.asset_hash().unwrap();
    let stranger = StaticWitness(ScriptHash::derived(b"e2e:stranger"));
    let env = Env::new(&stranger, &mut world.gateway, &world.log, &mut world.host);
    let err = world
        .contract
        .set_asset_hash(&env, ScriptHash::derived(b"e2e:asset-A2"))
        .unwrap_err();
    assert!(matches!(err, IdoPairError::NotAuthorized { .. }));
    assert_eq!(world.contract.asset_hash().unwrap(), before);
}

#[test]
fn getters_before_any_setter_return_compiled_defaults_exactly() {
    let world = World::new();
    assert_eq!(world.contract.asset_hash().unwrap(), world.asset);
    assert_eq!(world.contract.token_hash().unwrap(), world.token);
    assert_eq!(world.contract.authorizer_hash().unwrap(), world.authorizer);
}

#[test]
fn drained_reserve_aborts_settlement_atomically() {
    let mut world = World::new();
    world.log.emit(world.authorizer, constants::SWAP_EVENT, vec![]);
    // Empty the sale-token reserve so the disbursement must fail.
    let self_hash = world.contract.self_hash();
    let reserve = world.gateway.balance(world.token, self_hash);
    let sink = ScriptHash::derived(b"e2e:sink");
    world.gateway.transfer(world.token, self_hash, sink, reserve, None);
    world.gateway.calls.clear();

    let events_before = world.contract.events().len();
    let err = world.pay(210).unwrap_err();
    assert!(matches!(err, IdoPairError::TransferFailed { .. }));
    assert_eq!(world.contract.events().len(), events_before);
    assert_eq!(world.gateway.balance(world.token, world.payer), 0);
}

#[test]
fn full_lifecycle_configure_settle_withdraw_update() {
    let mut world = World::new();
    let admin = world.admin();
    let witness = StaticWitness(admin);

    // Re-point the pair at a second-generation asset contract.
    let asset2 = ScriptHash::derived(b"e2e:asset-A2");
    {
        let env = Env::new(&witness, &mut world.gateway, &world.log, &mut world.host);
        world.contract.set_asset_hash(&env, asset2).unwrap();
    }

    // Payments from the old asset no longer settle, from the new one they do.
    world.log.emit(world.authorizer, constants::SWAP_EVENT, vec![]);
    let old_origin = world.asset;
    let payer = world.payer;
    assert_eq!(
        world.pay_as(payer, old_origin, 210).unwrap(),
        SettlementOutcome::Accepted(AcceptReason::UntrustedAsset)
    );
    assert_eq!(
        world.pay_as(payer, asset2, 210).unwrap(),
        SettlementOutcome::Disbursed { tokens_out: 10 }
    );

    // Administrator collects the remaining token reserve, then upgrades.
    {
        let mut env = Env::new(&witness, &mut world.gateway, &world.log, &mut world.host);
        world
            .contract
            .withdraw_token(&mut env, 1_000_000 - 10)
            .unwrap();
        world
            .contract
            .update(&mut env, b"v2-code", "{\"name\":\"idoPairContract\"}", None)
            .unwrap();
    }
    assert_eq!(world.gateway.balance(world.token, admin), 1_000_000 - 10);
    assert_eq!(world.host.replacements.len(), 1);

    // The upgrade's deployment hook re-seeds the origin administrator.
    world.contract.on_deploy(true).unwrap();
    assert_eq!(world.admin(), ScriptHash::derived(b"e2e:origin-admin"));
}

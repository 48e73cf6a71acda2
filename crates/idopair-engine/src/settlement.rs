//! The authorization-gated settlement flow.
//!
//! Anyone can send tokens to this contract, so an inbound payment is
//! honored only when two independent checks pass: the authorizer contract
//! emitted a `SwapAsset` event in the current transaction, and the
//! notification originates from the trusted payment asset. A payment that
//! fails either check is kept without disbursement — a silent accept, not
//! an error.

use idopair_store::KeyValue;
use idopair_types::{
    constants, AcceptReason, ContractEvent, ContractEventKind, IdoPairError, PaymentNotice,
    Result, ScriptHash,
};
use serde_json::Value;

use crate::collab::{Env, TokenGateway, TransactionLog};
use crate::contract::PairContract;

/// Result of one inbound payment notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettlementOutcome {
    /// Both checks held: `tokens_out` sale tokens went to the payer.
    Disbursed { tokens_out: u128 },
    /// Payment kept, nothing disbursed.
    Accepted(AcceptReason),
}

impl SettlementOutcome {
    /// Disbursed token amount, if any.
    pub fn disbursed(&self) -> Option<u128> {
        match self {
            Self::Disbursed { tokens_out } => Some(*tokens_out),
            Self::Accepted(_) => None,
        }
    }
}

/// Fixed-price conversion: payment units to sale-token units, integer
/// floor division. `amount < PRICE` yields zero.
pub const fn tokens_for(amount: u128) -> u128 {
    amount / constants::PRICE
}

impl<S: KeyValue> PairContract<S> {
    /// Handle an inbound payment-asset transfer.
    ///
    /// The environment invokes this implicitly whenever the contract
    /// receives a payment. Order of checks follows the settlement gate:
    /// authorization evidence first, trusted-asset match second, then the
    /// fixed-price conversion and the guarded outbound transfer.
    ///
    /// A zero `tokens_out` (amount below the price) still issues the
    /// guarded transfer; the gateway must succeed by transferring nothing.
    ///
    /// # Errors
    /// [`IdoPairError::TransferFailed`] if the outbound transfer primitive
    /// reports failure — fatal, the whole invocation aborts.
    pub fn on_incoming_payment(
        &mut self,
        env: &mut Env<'_>,
        notice: &PaymentNotice,
    ) -> Result<SettlementOutcome> {
        if !self.is_authorized_swap(env.log)? {
            tracing::debug!(
                sender = %notice.sender,
                amount = notice.amount,
                "payment kept: no qualifying swap event in this transaction"
            );
            return self.accept_without_disbursing(notice, AcceptReason::NoSwapEvent);
        }

        let asset = self.asset_hash()?;
        if notice.origin != asset {
            tracing::warn!(
                origin = %notice.origin,
                trusted = %asset,
                amount = notice.amount,
                "payment kept: originating contract is not the trusted asset"
            );
            return self.accept_without_disbursing(notice, AcceptReason::UntrustedAsset);
        }

        let tokens_out = tokens_for(notice.amount);
        let token = self.token_hash()?;
        self.guarded_transfer(env.gateway, token, notice.sender, tokens_out, None)?;

        self.push_event(ContractEventKind::SettlementExecuted {
            payer: notice.sender,
            amount_in: notice.amount,
            tokens_out,
            payload: notice.payload.clone(),
        });
        tracing::info!(
            payer = %notice.sender,
            amount_in = notice.amount,
            tokens_out,
            "swap-authorized payment settled"
        );
        Ok(SettlementOutcome::Disbursed { tokens_out })
    }

    /// The authorization predicate: did the configured authorizer emit a
    /// `SwapAsset` event in the current transaction?
    ///
    /// Occurrence-only: the event's fields are not correlated with this
    /// payment's amount or payer, so one qualifying event authorizes every
    /// payment notification in the same transaction. Known weakness,
    /// preserved deliberately for compatibility with the deployed authorizer.
    ///
    /// Idempotent within an invocation — the transaction log is immutable
    /// in that scope.
    pub fn is_authorized_swap(&self, log: &dyn TransactionLog) -> Result<bool> {
        let authorizer = self.authorizer_hash()?;
        Ok(log
            .events_emitted_by(authorizer)
            .iter()
            .any(|record| record.name == constants::SWAP_EVENT))
    }

    /// Outbound transfer from the contract's custodial balance, wrapped in
    /// a success check. A `false` outcome aborts the entire invocation:
    /// there is no partial-failure state for a transfer.
    pub(crate) fn guarded_transfer(
        &self,
        gateway: &mut dyn TokenGateway,
        token: ScriptHash,
        to: ScriptHash,
        amount: u128,
        data: Option<&Value>,
    ) -> Result<()> {
        if gateway.transfer(token, self.self_hash(), to, amount, data) {
            Ok(())
        } else {
            Err(IdoPairError::TransferFailed { token, to, amount })
        }
    }

    fn accept_without_disbursing(
        &mut self,
        notice: &PaymentNotice,
        reason: AcceptReason,
    ) -> Result<SettlementOutcome> {
        self.push_event(ContractEventKind::DepositAccepted {
            sender: notice.sender,
            amount: notice.amount,
            reason,
        });
        Ok(SettlementOutcome::Accepted(reason))
    }

    pub(crate) fn push_event(&mut self, kind: ContractEventKind) {
        self.events_mut().push(ContractEvent::now(kind));
    }
}

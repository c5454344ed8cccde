//! Fee and commission calculation.

use std::sync::Arc;

use rust_decimal::Decimal;

use remittance_types::{Transaction, TransactionProperties, TransactionStatus};

/// Prices transactions from the configured agent-commission ratio.
#[derive(Debug, Clone)]
pub struct Pricing {
    properties: Arc<TransactionProperties>,
}

impl Pricing {
    pub fn new(properties: Arc<TransactionProperties>) -> Self {
        Self { properties }
    }

    /// Fee charged on a transaction: sending minus payout principal.
    pub fn calculate_fee(&self, transaction: &Transaction) -> Decimal {
        transaction.sending_principal - transaction.payout_principal
    }

    /// Fills in fees, commissions and the initial `NEW` status.
    ///
    /// Must run once, after compliance passed and before persistence.
    pub fn set_calculated_fields(&self, transaction: &mut Transaction) {
        let fees = self.calculate_fee(transaction);
        let agent_commission = fees * self.properties.agent_commission;

        transaction.fees = Some(fees);
        transaction.agent_commission = Some(agent_commission);
        transaction.commission = Some(fees - agent_commission);
        transaction.status = Some(TransactionStatus::New);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use remittance_types::ClientId;
    use rust_decimal_macros::dec;

    fn pricing() -> Pricing {
        Pricing::new(Arc::new(TransactionProperties::default()))
    }

    fn transaction(sending: Decimal, payout: Decimal) -> Transaction {
        Transaction::new(sending, payout, ClientId::new(3), ClientId::new(4))
    }

    #[test]
    fn test_calculate_fee() {
        let fee = pricing().calculate_fee(&transaction(dec!(100.0), dec!(98.0)));

        assert_eq!(fee, dec!(2.0));
    }

    #[test]
    fn test_calculate_fee_is_pure() {
        let tx = transaction(dec!(100.0), dec!(98.0));

        pricing().calculate_fee(&tx);

        assert!(tx.fees.is_none());
        assert!(tx.status.is_none());
    }

    #[test]
    fn test_set_calculated_fields() {
        let mut tx = transaction(dec!(100.0), dec!(98.0));

        pricing().set_calculated_fields(&mut tx);

        assert_eq!(tx.fees, Some(dec!(2.0)));
        assert_eq!(tx.agent_commission, Some(dec!(0.4)));
        assert_eq!(tx.commission, Some(dec!(1.6)));
        assert_eq!(tx.status, Some(TransactionStatus::New));
    }

    #[test]
    fn test_commissions_add_up_to_fees() {
        let pricing = Pricing::new(Arc::new(TransactionProperties {
            agent_commission: dec!(0.35),
            ..Default::default()
        }));
        let mut tx = transaction(dec!(1234.56), dec!(1200.01));

        pricing.set_calculated_fields(&mut tx);

        let fees = tx.fees.unwrap();
        assert_eq!(fees, dec!(34.55));
        assert_eq!(tx.agent_commission.unwrap() + tx.commission.unwrap(), fees);
        assert_eq!(tx.agent_commission, Some(fees * dec!(0.35)));
    }
}

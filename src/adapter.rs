// Adapter Pattern - bridging a modern integer-amount payment interface
// onto a legacy gateway that only understands floating-point amounts.

/// Third-party interface we cannot change. Stateless.
pub struct LegacyGateway;

impl LegacyGateway {
    pub fn process_transaction(&self, amount: f64) -> String {
        let line = format!("Legacy gateway processing ${:.2}", amount);
        println!("{}", line);
        line
    }
}

/// The interface the rest of the code expects.
pub trait PaymentProcessor {
    fn process_payment(&self, amount: i64) -> String;
}

/// Owns the gateway it was constructed with and translates every call,
/// converting the integer amount to the gateway's decimal representation.
/// No validation: zero and negative amounts forward as-is.
pub struct PaymentAdapter {
    gateway: LegacyGateway,
}

impl PaymentAdapter {
    pub fn new(gateway: LegacyGateway) -> Self {
        Self { gateway }
    }
}

impl PaymentProcessor for PaymentAdapter {
    fn process_payment(&self, amount: i64) -> String {
        self.gateway.process_transaction(amount as f64)
    }
}

pub fn demo() {
    let adapter = PaymentAdapter::new(LegacyGateway);
    adapter.process_payment(100);
    adapter.process_payment(250);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_amount_reaches_gateway_as_decimal() {
        let adapter = PaymentAdapter::new(LegacyGateway);
        assert_eq!(
            adapter.process_payment(100),
            "Legacy gateway processing $100.00"
        );
    }

    #[test]
    fn forwarded_line_matches_direct_gateway_call() {
        let adapter = PaymentAdapter::new(LegacyGateway);
        assert_eq!(
            adapter.process_payment(42),
            LegacyGateway.process_transaction(42.0)
        );
    }

    #[test]
    fn zero_and_negative_amounts_forward_unvalidated() {
        let adapter = PaymentAdapter::new(LegacyGateway);
        assert_eq!(
            adapter.process_payment(0),
            "Legacy gateway processing $0.00"
        );
        assert_eq!(
            adapter.process_payment(-25),
            "Legacy gateway processing $-25.00"
        );
    }
}

//! Property-based tests for transfer validation.

use proptest::prelude::*;
use rust_decimal::Decimal;
use yala_shared::types::UserId;

use super::{TransferError, TransferRequest, perform_transfer};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// A non-positive amount is rejected whatever the other fields hold.
    #[test]
    fn prop_non_positive_amount_always_rejected(
        cents in -10_000_000i64..=0,
        from_account in ".{0,16}",
        to_account in ".{0,32}",
        currency in "[A-Z]{0,4}",
        notes in proptest::option::of(".{0,16}"),
    ) {
        let request = TransferRequest {
            from_account,
            to_account,
            amount: Some(Decimal::new(cents, 2)),
            currency,
            notes,
        };
        let result = perform_transfer(&UserId::from("user1"), &request);
        prop_assert_eq!(result, Err(TransferError::NonPositiveAmount));
    }

    /// A positive amount to a real recipient in a supported currency succeeds.
    #[test]
    fn prop_valid_transfer_succeeds(
        cents in 1i64..10_000_000,
        to_account in "[a-z]{1,12}@example\\.com",
        currency in prop::sample::select(vec!["USD", "EUR", "GBP", "JPY", "CAD"]),
    ) {
        let request = TransferRequest {
            from_account: "acc1".to_string(),
            to_account,
            amount: Some(Decimal::new(cents, 2)),
            currency: currency.to_string(),
            notes: None,
        };
        let receipt = perform_transfer(&UserId::from("user1"), &request).unwrap();
        prop_assert!(receipt.success);
        prop_assert!(receipt.message.starts_with("Transfer of "));
    }
}

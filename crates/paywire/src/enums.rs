//! Server-defined enumerations.
//!
//! Models expose these wrapped in [`OpenEnum`](paywire_core::OpenEnum), so a
//! value added server-side after this release still decodes.

use paywire_core::wire_enum;

wire_enum! {
    /// ISO 4217 currency code.
    pub enum Currency {
        Aed => "AED",
        Aud => "AUD",
        Brl => "BRL",
        Cad => "CAD",
        Chf => "CHF",
        Cny => "CNY",
        Eur => "EUR",
        Gbp => "GBP",
        Hkd => "HKD",
        Inr => "INR",
        Jpy => "JPY",
        Mxn => "MXN",
        Nzd => "NZD",
        Sgd => "SGD",
        Usd => "USD",
    }
}

wire_enum! {
    /// ISO 3166-1 alpha-2 country code.
    pub enum CountryCode {
        Ae => "AE",
        Au => "AU",
        Br => "BR",
        Ca => "CA",
        De => "DE",
        Fr => "FR",
        Gb => "GB",
        In => "IN",
        Jp => "JP",
        Nl => "NL",
        Sg => "SG",
        Us => "US",
    }
}

wire_enum! {
    pub enum RefundStatus {
        Succeeded => "succeeded",
        Failed => "failed",
        Pending => "pending",
        Review => "review",
    }
}

wire_enum! {
    pub enum DiscountType {
        Percentage => "percentage",
    }
}

wire_enum! {
    pub enum DisputeStatus {
        DisputeOpened => "dispute_opened",
        DisputeExpired => "dispute_expired",
        DisputeAccepted => "dispute_accepted",
        DisputeCancelled => "dispute_cancelled",
        DisputeChallenged => "dispute_challenged",
        DisputeWon => "dispute_won",
        DisputeLost => "dispute_lost",
    }
}

wire_enum! {
    pub enum DisputeStage {
        PreDispute => "pre_dispute",
        Dispute => "dispute",
        PreArbitration => "pre_arbitration",
    }
}

wire_enum! {
    pub enum IntentStatus {
        Succeeded => "succeeded",
        Failed => "failed",
        Cancelled => "cancelled",
        Processing => "processing",
        RequiresCustomerAction => "requires_customer_action",
        RequiresMerchantAction => "requires_merchant_action",
        RequiresPaymentMethod => "requires_payment_method",
        RequiresConfirmation => "requires_confirmation",
        RequiresCapture => "requires_capture",
        PartiallyCaptured => "partially_captured",
        PartiallyCapturedAndCapturable => "partially_captured_and_capturable",
    }
}

wire_enum! {
    /// Tax treatment applied to a product or add-on.
    pub enum TaxCategory {
        DigitalProducts => "digital_products",
        Saas => "saas",
        EBook => "e_book",
        Edtech => "edtech",
    }
}

wire_enum! {
    pub enum PayoutStatus {
        NotInitiated => "not_initiated",
        InProgress => "in_progress",
        OnHold => "on_hold",
        Failed => "failed",
        Success => "success",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paywire_core::{OpenEnum, WireEnum};
    use serde_json::json;

    #[test]
    fn wire_strings_match_api() {
        assert_eq!(Currency::Usd.as_wire(), "USD");
        assert_eq!(CountryCode::from_wire("IN"), Some(CountryCode::In));
        assert_eq!(
            IntentStatus::RequiresCustomerAction.to_string(),
            "requires_customer_action"
        );
        assert_eq!(TaxCategory::from_wire("e_book"), Some(TaxCategory::EBook));
    }

    #[test]
    fn currencies_added_later_still_decode() {
        let currency: OpenEnum<Currency> = serde_json::from_value(json!("XOF")).unwrap();
        assert_eq!(currency.raw(), "XOF");
        assert!(currency.known().is_err());
        assert_eq!(serde_json::to_value(currency).unwrap(), json!("XOF"));
    }
}

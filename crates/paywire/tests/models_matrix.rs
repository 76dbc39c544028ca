use chrono::{TimeZone, Utc};
use indexmap::IndexMap;
use paywire::enums::{
    CountryCode, Currency, DiscountType, DisputeStage, DisputeStatus, IntentStatus, PayoutStatus,
    RefundStatus, TaxCategory,
};
use paywire::models::{
    Addon, AddonFields, BillingAddress, Customer, CustomerLimitedDetails, Discount,
    DiscountFields, Dispute, DisputeFields, PageNumberPage, Payment, PaymentFields, Payout,
    PayoutFields, Refund, RefundFields, UsageEvent,
};
use paywire::{FieldError, OpenEnum, RawBacked, Slot, Validate};
use serde_json::{json, Value};

fn billing() -> BillingAddress {
    BillingAddress::new("Pune", CountryCode::In, "MH", "1 Main St", "411001")
}

fn refund(status: &str) -> Refund {
    Refund::new(RefundFields {
        business_id: "bus_1".into(),
        created_at: Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap(),
        is_partial: false,
        payment_id: "pay_1".into(),
        refund_id: "ref_1".into(),
        status: OpenEnum::from_raw(status),
    })
}

fn dispute() -> Dispute {
    Dispute::new(DisputeFields {
        amount: "1000".into(),
        business_id: "bus_1".into(),
        created_at: Utc.with_ymd_and_hms(2025, 3, 2, 0, 0, 0).unwrap(),
        currency: "USD".into(),
        dispute_id: "dsp_1".into(),
        dispute_stage: DisputeStage::PreDispute.into(),
        dispute_status: DisputeStatus::DisputeOpened.into(),
        payment_id: "pay_1".into(),
    })
}

fn minimal_payment() -> Payment {
    Payment::new(PaymentFields {
        billing: billing(),
        business_id: "bus_1".into(),
        created_at: Utc.with_ymd_and_hms(2025, 3, 1, 12, 30, 0).unwrap(),
        currency: Currency::Usd.into(),
        customer: CustomerLimitedDetails::new("cus_1", "ada@example.com", "Ada"),
        disputes: Vec::new(),
        metadata: IndexMap::new(),
        payment_id: "pay_1".into(),
        refunds: Vec::new(),
        total_amount: 1000,
    })
}

fn full_payment() -> Payment {
    let mut payment = minimal_payment();
    payment.set_disputes(vec![dispute()]);
    payment.set_refunds(vec![refund("succeeded")]);
    payment.set_metadata(IndexMap::from([("order".to_string(), "42".to_string())]));
    payment.set_discount_id(None);
    payment.set_status(Some(IntentStatus::Succeeded.into()));
    payment.set_tax(Some(80));
    payment
}

#[test]
fn absent_and_null_optional_fields_differ_on_the_wire() {
    let created_at = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
    let untouched = Customer::new("bus_1", created_at, "cus_1", "ada@example.com", "Ada");
    assert_eq!(untouched.phone_number(), Ok(Slot::Absent));
    assert!(untouched.to_wire_value().get("phone_number").is_none());

    let mut cleared = untouched.clone();
    cleared.set_phone_number(None);
    assert_eq!(cleared.phone_number(), Ok(Slot::Null));
    assert_eq!(cleared.to_wire_value().get("phone_number"), Some(&Value::Null));

    let payment = full_payment();
    assert_eq!(payment.discount_id(), Ok(Slot::Null));
    assert_eq!(payment.to_wire_value()["discount_id"], Value::Null);
    assert_eq!(minimal_payment().discount_id(), Ok(Slot::Absent));
}

#[test]
fn round_trip_is_idempotent_for_minimal_and_full_models() {
    for payment in [minimal_payment(), full_payment()] {
        let decoded = Payment::from_json(&payment.to_json()).expect("payment must decode");
        assert_eq!(decoded, payment);
        assert_eq!(decoded.billing(), payment.billing());
        assert_eq!(decoded.created_at(), payment.created_at());
        assert_eq!(decoded.currency(), payment.currency());
        assert_eq!(decoded.customer(), payment.customer());
        assert_eq!(decoded.disputes(), payment.disputes());
        assert_eq!(decoded.metadata(), payment.metadata());
        assert_eq!(decoded.refunds(), payment.refunds());
        assert_eq!(decoded.status(), payment.status());
        assert_eq!(decoded.tax(), payment.tax());
        assert_eq!(decoded.to_wire_value(), payment.to_wire_value());
        decoded.validate().expect("round-tripped payment must validate");
    }
}

#[test]
fn unknown_keys_survive_a_round_trip() {
    let wire = json!({
        "customer_id": "cus_1",
        "email": "ada@example.com",
        "name": "Ada",
        "loyalty": {"tier": "gold", "points": 1200},
    });
    let details = CustomerLimitedDetails::from_wire_value(wire.clone()).expect("object must decode");
    assert_eq!(details.name().unwrap(), "Ada");
    assert_eq!(details.to_wire_value(), wire);

    let mut renamed = details.clone();
    renamed.set_name("Ada L.");
    assert_eq!(renamed.to_wire_value()["loyalty"], wire["loyalty"]);
}

#[test]
fn missing_required_field_fails_only_when_read() {
    let customer =
        Customer::from_wire_value(json!({"customer_id": "cus_1"})).expect("decode is lazy");
    assert_eq!(customer.customer_id().unwrap(), "cus_1");
    assert_eq!(customer.phone_number(), Ok(Slot::Absent));
    assert_eq!(customer.email(), Err(FieldError::missing("email")));
    assert_eq!(
        customer.validate(),
        Err(FieldError::missing("business_id")),
        "validate stops at the first failing field"
    );
}

#[test]
fn required_field_holding_null_is_rejected() {
    let customer = Customer::from_wire_value(json!({"email": null})).expect("decode is lazy");
    let err = customer.email().unwrap_err();
    assert_eq!(err, FieldError::null_not_allowed("email"));
    assert!(err.is_invalid_data());
}

#[test]
fn unknown_enum_values_decode_and_fail_only_on_classification() {
    let mut wire = refund("succeeded").to_wire_value();
    wire["status"] = json!("chargeback_pending");
    let decoded = Refund::from_wire_value(wire.clone()).expect("unknown status must decode");

    let status = decoded.status().expect("any string is a valid raw status");
    assert_eq!(status.raw(), "chargeback_pending");
    assert!(!status.is_known());
    assert!(status.known().unwrap_err().is_invalid_data());

    let err = decoded.validate().unwrap_err();
    assert_eq!(err.key(), "status");
    assert!(err.is_invalid_data());

    assert_eq!(decoded.to_wire_value(), wire);
    assert_eq!(refund("pending").status().unwrap(), RefundStatus::Pending);
}

#[test]
fn nested_validation_reports_the_field_path() {
    let mut wire = full_payment().to_wire_value();
    wire["billing"]["country"] = json!("ZZ");
    let payment = Payment::from_wire_value(wire).unwrap();
    assert_eq!(payment.validate().unwrap_err().key(), "billing.country");

    let mut wire = full_payment().to_wire_value();
    wire["disputes"][0]["dispute_status"] = json!("dispute_reopened");
    let payment = Payment::from_wire_value(wire).unwrap();
    assert_eq!(
        payment.validate().unwrap_err().key(),
        "disputes[0].dispute_status"
    );

    let mut wire = full_payment().to_wire_value();
    wire["refunds"][0].as_object_mut().unwrap().remove("refund_id");
    let payment = Payment::from_wire_value(wire).unwrap();
    assert_eq!(
        payment.validate(),
        Err(FieldError::missing("refunds[0].refund_id"))
    );
}

#[test]
fn copies_are_independent() {
    let original = full_payment();
    let mut copy = original.clone();
    copy.set_tax(None);
    copy.set_discount_id(Some("dsc_1".into()));
    assert_eq!(original.tax(), Ok(Slot::Present(80)));
    assert_eq!(original.discount_id(), Ok(Slot::Null));

    let mut original = original;
    original.set_total_amount(5);
    assert_eq!(copy.total_amount(), Ok(1000));
}

#[test]
fn usage_event_metadata_must_hold_scalars() {
    let mut event = UsageEvent::new(
        "bus_1",
        "cus_1",
        "evt_1",
        "api_call",
        Utc.with_ymd_and_hms(2025, 4, 1, 0, 0, 0).unwrap(),
    );
    event.set_metadata(Some(IndexMap::from([
        ("region".to_string(), json!("eu")),
        ("tokens".to_string(), json!(512)),
    ])));
    event.validate().expect("scalar metadata is valid");

    event.set_metadata(Some(IndexMap::from([("tags".to_string(), json!(["a"]))])));
    assert_eq!(event.validate().unwrap_err().key(), "metadata.tags");
}

#[test]
fn page_decodes_items_lazily() {
    let page = PageNumberPage::<Refund>::from_wire_value(json!({
        "items": [refund("succeeded").to_wire_value(), {"refund_id": "ref_2"}],
    }))
    .unwrap();
    let items = page.items().expect("items decode without validation");
    assert_eq!(items.len(), 2);
    assert_eq!(items[1].refund_id().unwrap(), "ref_2");
    assert_eq!(page.validate().unwrap_err().key(), "items[1].business_id");
}

fn assert_round_trip<M>(model: &M)
where
    M: RawBacked + Validate + PartialEq + std::fmt::Debug,
{
    let decoded = M::from_json(&model.to_json()).expect("model must decode");
    assert_eq!(&decoded, model);
    assert_eq!(decoded.to_wire_value(), model.to_wire_value());
    decoded.validate().expect("round-tripped model must validate");
}

fn addon() -> Addon {
    Addon::new(AddonFields {
        id: "adn_1".into(),
        business_id: "bus_1".into(),
        created_at: Utc.with_ymd_and_hms(2025, 2, 1, 9, 0, 0).unwrap(),
        currency: Currency::Eur.into(),
        name: "Extra seat".into(),
        price: 499,
        tax_category: TaxCategory::Saas.into(),
        updated_at: Utc.with_ymd_and_hms(2025, 2, 2, 9, 0, 0).unwrap(),
    })
}

fn discount() -> Discount {
    Discount::new(DiscountFields {
        amount: 540,
        business_id: "bus_1".into(),
        code: "SPRING".into(),
        created_at: Utc.with_ymd_and_hms(2025, 2, 1, 0, 0, 0).unwrap(),
        discount_id: "dsc_1".into(),
        restricted_to: vec!["prd_1".into()],
        times_used: 3,
        kind: DiscountType::Percentage.into(),
    })
}

fn payout() -> Payout {
    Payout::new(PayoutFields {
        amount: 10_000,
        business_id: "bus_1".into(),
        chargebacks: 0,
        created_at: Utc.with_ymd_and_hms(2025, 4, 1, 0, 0, 0).unwrap(),
        currency: Currency::Usd.into(),
        fee: 120,
        payment_method: "bank_transfer".into(),
        payout_id: "pyt_1".into(),
        refunds: 300,
        status: PayoutStatus::InProgress.into(),
        tax: 20,
        updated_at: Utc.with_ymd_and_hms(2025, 4, 2, 0, 0, 0).unwrap(),
    })
}

fn usage_event() -> UsageEvent {
    UsageEvent::new(
        "bus_1",
        "cus_1",
        "evt_1",
        "api_call",
        Utc.with_ymd_and_hms(2025, 4, 1, 0, 0, 0).unwrap(),
    )
}

#[test]
fn minimal_models_round_trip() {
    assert_round_trip(&addon());
    assert_round_trip(&discount());
    assert_round_trip(&payout());
    assert_round_trip(&refund("review"));
    assert_round_trip(&dispute());
    assert_round_trip(&usage_event());

    assert_eq!(addon().description(), Ok(Slot::Absent));
    assert_eq!(discount().expires_at(), Ok(Slot::Absent));
    assert_eq!(payout().remarks(), Ok(Slot::Absent));
    assert_eq!(refund("review").amount(), Ok(Slot::Absent));
    assert_eq!(dispute().remarks(), Ok(Slot::Absent));
    assert_eq!(usage_event().metadata(), Ok(Slot::Absent));
}

#[test]
fn fully_populated_models_round_trip() {
    let mut addon = addon();
    addon.set_description(Some("One more seat".into()));
    addon.set_image(None);
    assert_round_trip(&addon);
    let decoded = Addon::from_json(&addon.to_json()).unwrap();
    assert_eq!(decoded.description(), Ok(Slot::Present("One more seat".to_string())));
    assert_eq!(decoded.image(), Ok(Slot::Null));
    assert_eq!(decoded.tax_category().unwrap(), TaxCategory::Saas);

    let mut discount = discount();
    let expires_at = Utc.with_ymd_and_hms(2025, 6, 30, 23, 59, 59).unwrap();
    discount.set_expires_at(Some(expires_at));
    discount.set_name(None);
    discount.set_subscription_cycles(Some(3));
    discount.set_usage_limit(None);
    assert_round_trip(&discount);
    let decoded = Discount::from_json(&discount.to_json()).unwrap();
    assert_eq!(decoded.expires_at(), Ok(Slot::Present(expires_at)));
    assert_eq!(decoded.name(), Ok(Slot::Null));
    assert_eq!(decoded.usage_limit(), Ok(Slot::Null));
    assert_eq!(decoded.to_wire_value()["type"], json!("percentage"));

    let mut payout = payout();
    payout.set_name(Some("April".into()));
    payout.set_payout_document_url(None);
    payout.set_remarks(None);
    assert_round_trip(&payout);
    let decoded = Payout::from_json(&payout.to_json()).unwrap();
    assert_eq!(decoded.status().unwrap(), PayoutStatus::InProgress);
    assert_eq!(decoded.payout_document_url(), Ok(Slot::Null));

    let mut refund = refund("succeeded");
    refund.set_amount(Some(250));
    refund.set_currency(None);
    refund.set_reason(Some("damaged".into()));
    assert_round_trip(&refund);
    let decoded = Refund::from_json(&refund.to_json()).unwrap();
    assert_eq!(decoded.amount(), Ok(Slot::Present(250)));
    assert_eq!(decoded.currency(), Ok(Slot::Null));

    let mut dispute = dispute();
    dispute.set_remarks(None);
    assert_round_trip(&dispute);
    assert_eq!(
        Dispute::from_json(&dispute.to_json()).unwrap().remarks(),
        Ok(Slot::Null)
    );

    let mut event = usage_event();
    event.set_metadata(Some(IndexMap::from([("region".to_string(), json!("eu"))])));
    assert_round_trip(&event);
    let mut cleared = usage_event();
    cleared.set_metadata(None);
    assert_round_trip(&cleared);
    assert_eq!(
        UsageEvent::from_json(&cleared.to_json()).unwrap().metadata(),
        Ok(Slot::Null)
    );
}

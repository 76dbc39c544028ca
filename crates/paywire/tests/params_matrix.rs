use chrono::{TimeZone, Utc};
use paywire::enums::{DiscountType, RefundStatus};
use paywire::params::{
    CustomerCreateParams, CustomerListParams, CustomerRetrieveParams, CustomerUpdateParams,
    DiscountCreateParams, DiscountDeleteParams, DiscountListParams, DiscountUpdateParams,
    EventInput, RefundCreateParams, RefundItem, RefundListParams, UsageEventIngestParams,
    UsageEventListParams, UsageEventRetrieveParams,
};
use paywire::{
    ClientOptions, Environment, FieldError, Method, OpenEnum, Params, RawBacked, RequestError, Slot,
    Validate,
};
use serde_json::json;

fn live() -> ClientOptions {
    ClientOptions::default()
}

#[test]
fn retrieve_url_has_no_query_when_nothing_is_set() {
    let url = CustomerRetrieveParams::new("id").url(&live()).unwrap();
    assert_eq!(url.as_str(), "https://live.example.com/customers/id");
    assert_eq!(url.query(), None);

    let url = UsageEventRetrieveParams::new("evt 1/2")
        .url(&ClientOptions::new(Environment::TestMode))
        .unwrap();
    assert_eq!(url.as_str(), "https://test.example.com/events/evt%201%2F2");
}

#[test]
fn query_keeps_the_order_fields_were_set() {
    let mut params = DiscountListParams::new();
    params.set_active(Some(true));
    params.set_code(Some("code".into()));
    params.set_page_number(Some(0));
    let url = params.url(&live()).unwrap();
    assert_eq!(url.query(), Some("active=true&code=code&page_number=0"));

    let mut reversed = DiscountListParams::new();
    reversed.set_page_number(Some(0));
    reversed.set_code(Some("code".into()));
    reversed.set_active(Some(true));
    assert_eq!(
        reversed.url(&live()).unwrap().query(),
        Some("page_number=0&code=code&active=true")
    );
}

#[test]
fn omittable_fields_set_to_none_never_reach_the_wire() {
    let untouched = CustomerListParams::new();
    let mut params = CustomerListParams::new();
    params.set_email(None);
    params.set_page_number(None);
    params.set_page_size(None);
    assert_eq!(params, untouched);
    assert_eq!(params.url(&live()).unwrap().query(), None);

    let mut update = DiscountUpdateParams::new("dsc_1");
    update.set_amount(None);
    update.set_kind(None);
    assert_eq!(update.body(), Some(json!({})));
}

#[test]
fn omittable_none_does_not_clear_an_earlier_value() {
    let mut params = CustomerListParams::new();
    params.set_page_size(Some(25));
    params.set_page_size(None);
    assert_eq!(params.page_size(), Ok(Some(25)));
    assert_eq!(params.url(&live()).unwrap().query(), Some("page_size=25"));
}

#[test]
fn nullable_body_fields_send_explicit_null() {
    let mut update = CustomerUpdateParams::new("cus_1");
    update.set_phone_number(None);
    assert_eq!(update.phone_number(), Ok(Slot::Null));
    assert_eq!(update.body(), Some(json!({"phone_number": null})));

    let mut discount = DiscountUpdateParams::new("dsc_1");
    discount.set_name(Some("Spring".into()));
    discount.set_expires_at(None);
    discount.set_usage_limit(None);
    let parts = discount.request(&live()).unwrap();
    assert_eq!(parts.method, Method::Patch);
    assert_eq!(parts.url.as_str(), "https://live.example.com/discounts/dsc_1");
    assert_eq!(
        parts.body,
        Some(json!({"name": "Spring", "expires_at": null, "usage_limit": null}))
    );
}

#[test]
fn create_body_carries_required_and_optional_fields() {
    let mut create = DiscountCreateParams::new(1500, DiscountType::Percentage);
    create.set_code(Some("SPRING15".into()));
    create.set_expires_at(Some(Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap()));
    create.set_restricted_to(Some(vec!["prd_1".into(), "prd_2".into()]));
    assert_eq!(
        create.body(),
        Some(json!({
            "amount": 1500,
            "type": "percentage",
            "code": "SPRING15",
            "expires_at": "2025-06-01T00:00:00Z",
            "restricted_to": ["prd_1", "prd_2"],
        }))
    );
    assert_eq!(create.kind().unwrap(), DiscountType::Percentage);

    let customer = CustomerCreateParams::new("ada@example.com", "Ada");
    let parts = customer.request(&live()).unwrap();
    assert_eq!(parts.method, Method::Post);
    assert_eq!(parts.url.as_str(), "https://live.example.com/customers");
    assert_eq!(parts.body, Some(json!({"email": "ada@example.com", "name": "Ada"})));
}

#[test]
fn get_and_delete_send_no_body() {
    assert_eq!(CustomerRetrieveParams::new("cus_1").body(), None);
    let delete = DiscountDeleteParams::new("dsc_1").request(&live()).unwrap();
    assert_eq!(delete.method, Method::Delete);
    assert_eq!(delete.body, None);
}

#[test]
fn refund_create_sends_items_and_idempotency_header() {
    let mut item = RefundItem::new("itm_1");
    item.set_amount(Some(250));
    let mut params = RefundCreateParams::new("pay_1");
    params.set_items(Some(vec![item, RefundItem::new("itm_2")]));
    params.set_reason(None);
    params.set_idempotency_key(Some("key-1".into()));

    let parts = params.request(&live()).unwrap();
    assert_eq!(parts.url.as_str(), "https://live.example.com/refunds");
    assert_eq!(
        parts.headers,
        vec![("Idempotency-Key".to_string(), "key-1".to_string())]
    );
    assert_eq!(
        parts.body,
        Some(json!({
            "payment_id": "pay_1",
            "items": [{"item_id": "itm_1", "amount": 250}, {"item_id": "itm_2"}],
            "reason": null,
        }))
    );
    params.validate().expect("refund params are valid");

    let mut anonymous = RefundCreateParams::new("pay_2");
    anonymous.set_idempotency_key(None);
    assert!(anonymous.headers().is_empty());
}

#[test]
fn refund_list_renders_timestamps_and_enums() {
    let mut params = RefundListParams::new();
    params.set_created_at_gte(Some(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()));
    params.set_created_at_lte(None);
    params.set_status(Some(RefundStatus::Succeeded.into()));
    params.set_page_size(Some(10));
    assert_eq!(
        params.url(&live()).unwrap().as_str(),
        "https://live.example.com/refunds?created_at_gte=2025-01-01T00%3A00%3A00Z&status=succeeded&page_size=10"
    );
    assert_eq!(params.status().unwrap().unwrap(), RefundStatus::Succeeded);
}

#[test]
fn ingest_validation_points_at_the_bad_event() {
    let good = EventInput::new("cus_1", "evt_1", "api_call");
    let mut stamped = EventInput::new("cus_1", "evt_2", "api_call");
    stamped.set_timestamp(Some(Utc.with_ymd_and_hms(2025, 5, 1, 8, 0, 0).unwrap()));
    let mut params = UsageEventIngestParams::new(vec![good, stamped]);
    params.validate().expect("events are valid");
    assert_eq!(
        params.body().unwrap()["events"][1]["timestamp"],
        json!("2025-05-01T08:00:00Z")
    );

    let mut events = params.events().unwrap();
    events[0] = EventInput::from_wire_value(json!({"customer_id": "cus_1"})).unwrap();
    params.set_events(events);
    assert_eq!(
        params.validate(),
        Err(FieldError::missing("events[0].event_id"))
    );
}

#[test]
fn usage_event_list_omits_unset_filters() {
    let mut params = UsageEventListParams::new();
    params.set_customer_id(Some("cus_1".into()));
    params.set_event_name(None);
    params.set_meter_id(None);
    params.set_page_number(Some(2));
    assert_eq!(
        params.url(&live()).unwrap().query(),
        Some("customer_id=cus_1&page_number=2")
    );
}

#[test]
fn base_url_override_is_respected() {
    let options = ClientOptions::with_base_url("http://localhost:4010/").unwrap();
    let url = CustomerRetrieveParams::new("cus_1").url(&options).unwrap();
    assert_eq!(url.as_str(), "http://localhost:4010/customers/cus_1");
}

#[test]
fn path_ids_cannot_escape_their_segment() {
    let url = CustomerRetrieveParams::new("a\\b").url(&live()).unwrap();
    assert_eq!(url.as_str(), "https://live.example.com/customers/a%5Cb");

    for id in [".", ".."] {
        let err = DiscountDeleteParams::new(id).request(&live()).unwrap_err();
        assert!(
            matches!(err, RequestError::DotSegmentPathParam { ref value, .. } if value == id),
            "`{id}` must not collapse the discount path"
        );
    }

    let url = DiscountDeleteParams::new("..x").url(&live()).unwrap();
    assert_eq!(url.as_str(), "https://live.example.com/discounts/..x");
    let url = DiscountDeleteParams::new("%2e%2e").url(&live()).unwrap();
    assert_eq!(url.as_str(), "https://live.example.com/discounts/%252e%252e");
}

#[test]
fn create_and_update_params_validate_their_body() {
    CustomerCreateParams::new("ada@example.com", "Ada")
        .validate()
        .expect("customer create is valid");
    let mut customer_update = CustomerUpdateParams::new("cus_1");
    customer_update.set_phone_number(None);
    customer_update.validate().expect("null phone number is allowed");

    let mut create = DiscountCreateParams::new(100, OpenEnum::<DiscountType>::from_raw("flat"));
    let err = create.validate().unwrap_err();
    assert_eq!(err.key(), "type");
    assert!(err.is_invalid_data());
    create.set_kind(DiscountType::Percentage);
    create.set_usage_limit(None);
    create.validate().expect("percentage discount is valid");

    let mut update = DiscountUpdateParams::new("dsc_1");
    update.validate().expect("an empty update is valid");
    update.set_kind(Some(OpenEnum::from_raw("bogo")));
    assert_eq!(update.validate().unwrap_err().key(), "type");
}

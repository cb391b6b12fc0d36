use tri_outcome::{err, ok, IntoTagged, TagRecord, Tagged, DEFECT_PREFIX};

#[test]
fn constructors_build_tags() {
    let good: Tagged<i32, &str> = ok(1);
    let bad: Tagged<i32, &str> = err("no");

    assert_eq!(good, Tagged::Ok(1));
    assert_eq!(bad, Tagged::Err("no"));
    assert!(good.is_ok());
    assert!(bad.is_err());
}

#[test]
fn tag_converts_to_result() {
    assert_eq!(ok::<u8, ()>(4).into_result(), Ok(4));
    assert_eq!(err::<u8, &str>("x").into_result(), Err("x"));
    assert_eq!(Tagged::from(Err::<u8, &str>("x")), Tagged::Err("x"));
}

#[test]
fn unknown_status_is_a_defect() {
    let record: TagRecord<i32, String> = TagRecord::new("OK");
    let defect = record.into_tagged().unwrap_err();

    assert_eq!(defect.status(), "OK");
    assert!(defect.to_string().starts_with(DEFECT_PREFIX));
    assert!(defect.to_string().contains("unknown status"));
}

#[test]
fn record_from_tag_is_well_formed() {
    let record = TagRecord::from(err::<i32, &str>("denied"));

    assert_eq!(record.status, "err");
    assert_eq!(record.err, Some("denied"));
    assert_eq!(record.into_tagged(), Ok(Tagged::Err("denied")));
}

#[cfg(feature = "serde")]
#[test]
fn record_deserializes_from_json() {
    let record: TagRecord<u32, String> =
        serde_json::from_str(r#"{ "status": "ok", "value": 12 }"#).unwrap();
    assert_eq!(record.into_tagged(), Ok(Tagged::Ok(12)));

    let record: TagRecord<u32, String> =
        serde_json::from_str(r#"{ "status": "unknown" }"#).unwrap();
    assert!(record.into_tagged().is_err());
}

#[cfg(feature = "serde")]
#[test]
fn tag_serializes_externally_tagged() {
    let tagged: Tagged<u32, String> = Tagged::Ok(3);
    assert_eq!(serde_json::to_string(&tagged).unwrap(), r#"{"ok":3}"#);

    let tagged: Tagged<u32, String> = serde_json::from_str(r#"{"err":"closed"}"#).unwrap();
    assert_eq!(tagged, Tagged::Err("closed".to_string()));

    assert!(serde_json::from_str::<Tagged<u32, String>>(r#"{"maybe":1}"#).is_err());
}

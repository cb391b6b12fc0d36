use tri_outcome::{result, throw, Outcome, State, Status, TagRecord, DEFECT_PREFIX};

#[derive(Debug, Clone, PartialEq)]
enum ParseError {
    NotANumber,
    TooBig,
    TooSmall,
}

fn parse_bounded(input: &str) -> Outcome<i64, ParseError> {
    result(|ok, err| {
        let number: i64 = match input.parse() {
            Ok(n) => n,
            Err(_) => return err(ParseError::NotANumber),
        };
        if number > 1_000_000 {
            return err(ParseError::TooBig);
        }
        if number < 0 {
            return err(ParseError::TooSmall);
        }
        ok(number)
    })
}

#[derive(Debug)]
struct Refused(&'static str);

impl std::fmt::Display for Refused {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "refused: {}", self.0)
    }
}

impl std::error::Error for Refused {}

#[test]
fn ok_tag_becomes_success() {
    for value in [0, 1, -1, i32::MAX] {
        let outcome: Outcome<i32, ()> = result(|ok, _| ok(value));
        assert!(outcome.is_ok());
        assert!(!outcome.is_err());
        assert_eq!(outcome.get().value(), Some(&&value));
    }
}

#[test]
fn err_tag_becomes_failure() {
    let outcome: Outcome<(), &str> = result(|_, err| err("err"));

    assert!(outcome.is_err());
    assert!(!outcome.is_thrown());
    let snapshot = outcome.get();
    let detail = snapshot.err().unwrap();
    assert_eq!(detail.err(), Some(&&"err"));
    assert_eq!(detail.msg(), None);
}

#[test]
fn panic_becomes_thrown_with_message() {
    let outcome: Outcome<(), ()> = result(|ok, _| {
        let fail = true;
        if fail {
            panic!("thrown");
        }
        ok(())
    });

    assert!(outcome.is_err());
    assert!(outcome.is_thrown());
    let snapshot = outcome.get();
    let detail = snapshot.err().unwrap();
    assert_eq!(detail.err(), None);
    assert_eq!(detail.msg(), Some("thrown"));
}

#[test]
fn thrown_error_uses_its_display() {
    let outcome: Outcome<u8, ()> = result(|ok, _| {
        let accepted = false;
        if !accepted {
            throw(Refused("quota"));
        }
        ok(1)
    });

    assert_eq!(outcome.message(), Some("refused: quota"));
}

#[test]
fn explicit_errors_stay_typed() {
    assert_eq!(parse_bounded("42").into_state(), State::Success(42));
    assert_eq!(parse_bounded("x").into_state(), State::Failure(ParseError::NotANumber));
    assert_eq!(parse_bounded("2000000").into_state(), State::Failure(ParseError::TooBig));
    assert_eq!(parse_bounded("-4").into_state(), State::Failure(ParseError::TooSmall));
}

#[test]
fn result_return_is_accepted() {
    let outcome: Outcome<u8, std::num::ParseIntError> = result(|_, _| "12".parse::<u8>());
    assert_eq!(outcome.or(0), 12);
}

#[test]
fn malformed_record_becomes_defect() {
    let outcome: Outcome<i32, String> = result(|_, _| TagRecord::<i32, String>::new("pending"));

    assert!(outcome.is_thrown());
    let message = outcome.message().unwrap();
    assert!(message.starts_with(DEFECT_PREFIX));
    assert!(message.contains("pending"));
}

#[test]
fn record_missing_payload_becomes_defect() {
    let outcome: Outcome<i32, String> = result(|_, _| TagRecord::<i32, String>::new("err"));
    assert!(outcome.message().unwrap().starts_with(DEFECT_PREFIX));
}

#[test]
fn well_formed_record_is_accepted() {
    let outcome: Outcome<i32, String> = result(|_, _| TagRecord::<i32, String>::new("ok").with_value(9));
    assert_eq!(outcome.value(), Some(&9));

    let outcome: Outcome<i32, String> =
        result(|_, _| TagRecord::<i32, String>::new("err").with_err("bad".to_string()));
    assert_eq!(outcome.error().map(String::as_str), Some("bad"));
}

#[test]
fn defect_wording_differs_from_panics() {
    let panicked: Outcome<i32, String> = result(|ok, _| {
        let broken = true;
        if broken {
            panic!("ordinary failure");
        }
        ok(0)
    });

    assert!(!panicked.message().unwrap().starts_with(DEFECT_PREFIX));
}

#[test]
fn constructor_form_matches_factory() {
    let from_new = Outcome::<u32, ()>::new(|ok, _| ok(5));
    let from_fn: Outcome<u32, ()> = result(|ok, _| ok(5));

    assert_eq!(from_new, from_fn);
    assert_eq!(from_new.get().status(), Status::Ok);
}

#[test]
fn callback_runs_exactly_once() {
    let mut calls = 0;
    let outcome: Outcome<i32, ()> = result(|ok, _| {
        calls += 1;
        ok(calls)
    });

    assert_eq!(calls, 1);
    assert_eq!(outcome.value(), Some(&1));
}

#[cfg(feature = "tracing")]
mod tracing_events;
